//! Page sections and the carousels behind them.
//!
//! Each section decides where its items come from and how a click is
//! handled; the carousel mechanics are shared.

mod catalog;
mod hero;
mod promo;
mod trends;

use anyhow::Context;
use clap::ValueEnum;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use vitrina_core::carousel::{ContentStatus, InputEvent, Key};
use vitrina_core::config::CarouselSettings;
use vitrina_core::constants::resources;
use vitrina_core::{CarouselHandle, CarouselKey, CarouselSnapshot, ResourceLoader};
use vitrina_model::{Category, HeroSlide, Product, PromoSlide, Trend, TrendCard};

/// A carousel section of the home page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Section {
    Hero,
    Trends,
    Promo,
    Products,
    Categories,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Trends,
        Section::Promo,
        Section::Products,
        Section::Categories,
    ];

    pub fn key(self) -> CarouselKey {
        match self {
            Section::Hero => CarouselKey::Hero,
            Section::Trends => CarouselKey::Trends,
            Section::Promo => CarouselKey::Promo,
            Section::Products => CarouselKey::Products,
            Section::Categories => CarouselKey::Categories,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "San Marco",
            Section::Trends => "Trenduri 2025",
            Section::Promo => "De ce Sector 5 alege San Marco",
            Section::Products => "Produse Recomandate",
            Section::Categories => "Categorii de Produse",
        }
    }

    /// Message shown in place of the carousel when its content failed.
    pub fn unavailable(self) -> &'static str {
        match self {
            Section::Hero => "Nu s-au putut încărca slide-urile",
            Section::Products => "Eroare la încărcarea produselor",
            Section::Categories => "Eroare la încărcarea categoriilor",
            // Both fall back to placeholder content.
            Section::Trends | Section::Promo => "Conținut indisponibil",
        }
    }
}

/// Every section mounted and fed from one loader.
#[derive(Debug)]
pub struct Site {
    pub hero: CarouselHandle<HeroSlide>,
    pub trends: CarouselHandle<TrendCard>,
    pub promo: CarouselHandle<PromoSlide>,
    pub products: CarouselHandle<Product>,
    pub categories: CarouselHandle<Category>,
    /// The carousel holding keyboard focus, if any.
    focused: Option<Section>,
    feeds: Vec<JoinHandle<()>>,
}

impl Site {
    /// Mount all sections. Fetches start immediately; the trend document is
    /// fetched once and shared by the stacked deck and the promo slider.
    pub fn mount(loader: &ResourceLoader, settings: &CarouselSettings) -> Self {
        let trend = loader.watch::<Trend>(resources::TRENDS);

        let (hero, hero_feed) = hero::mount(loader, settings.hero);
        let (trends, trends_feed) = trends::mount(trend.clone(), settings.trends);
        let (promo, promo_feed) = promo::mount(trend, settings.promo);
        let (products, products_feed) = catalog::mount_products(loader, settings.products);
        let (categories, categories_feed) =
            catalog::mount_categories(loader, settings.categories);

        Self {
            hero,
            trends,
            promo,
            products,
            categories,
            focused: None,
            feeds: vec![hero_feed, trends_feed, promo_feed, products_feed, categories_feed],
        }
    }

    pub fn snapshot(&self, section: Section) -> CarouselSnapshot {
        match section {
            Section::Hero => self.hero.snapshot(),
            Section::Trends => self.trends.snapshot(),
            Section::Promo => self.promo.snapshot(),
            Section::Products => self.products.snapshot(),
            Section::Categories => self.categories.snapshot(),
        }
    }

    pub fn subscribe(&self, section: Section) -> watch::Receiver<CarouselSnapshot> {
        match section {
            Section::Hero => self.hero.subscribe(),
            Section::Trends => self.trends.subscribe(),
            Section::Promo => self.promo.subscribe(),
            Section::Products => self.products.subscribe(),
            Section::Categories => self.categories.subscribe(),
        }
    }

    pub fn focused(&self) -> Option<Section> {
        self.focused
    }

    /// Move keyboard focus to `section`, or off every carousel with `None`.
    pub fn focus(&mut self, section: Option<Section>) -> anyhow::Result<()> {
        if self.focused == section {
            return Ok(());
        }
        if let Some(previous) = self.focused.take() {
            self.input(previous, InputEvent::FocusLost)?;
        }
        if let Some(next) = section {
            self.input(next, InputEvent::FocusGained)?;
        }
        self.focused = section;
        Ok(())
    }

    /// A key pressed anywhere on the page. The focused carousel gets it
    /// alone; with nothing focused every carousel sees it and only the
    /// page-wide ones act on it.
    pub fn key_pressed(&self, key: Key) -> anyhow::Result<()> {
        let event = InputEvent::KeyPressed(key);
        match self.focused {
            Some(section) => self.input(section, event),
            None => Section::ALL
                .into_iter()
                .try_for_each(|section| self.input(section, event)),
        }
    }

    pub fn input(&self, section: Section, event: InputEvent) -> anyhow::Result<()> {
        let sent = match section {
            Section::Hero => self.hero.input(event),
            Section::Trends => self.trends.input(event),
            Section::Promo => self.promo.input(event),
            Section::Products => self.products.input(event),
            Section::Categories => self.categories.input(event),
        };
        sent.with_context(|| format!("section {section:?} is no longer running"))
    }

    /// Wait for every fetch to settle and every carousel to apply it.
    pub async fn settled(&mut self) -> anyhow::Result<()> {
        for feed in self.feeds.drain(..) {
            feed.await.context("content feed task failed")?;
        }
        for section in Section::ALL {
            let snapshot = self.flush(section).await?;
            if snapshot.status == ContentStatus::Loading {
                log::warn!("Section {section:?} is still loading after its feed ended");
            }
        }
        Ok(())
    }

    pub async fn flush(&self, section: Section) -> anyhow::Result<CarouselSnapshot> {
        let snapshot = match section {
            Section::Hero => self.hero.flush().await,
            Section::Trends => self.trends.flush().await,
            Section::Promo => self.promo.flush().await,
            Section::Products => self.products.flush().await,
            Section::Categories => self.categories.flush().await,
        };
        Ok(snapshot?)
    }

    pub async fn shutdown(self) {
        for feed in &self.feeds {
            feed.abort();
        }
        self.hero.shutdown().await;
        self.trends.shutdown().await;
        self.promo.shutdown().await;
        self.products.shutdown().await;
        self.categories.shutdown().await;
    }
}
