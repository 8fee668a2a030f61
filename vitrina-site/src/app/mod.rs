//! Application wiring: configuration resolution and the CLI commands.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use vitrina_core::config::EnvOverrides;
use vitrina_core::{ResourceLoader, SiteConfig};
use vitrina_model::{ContactDetails, LeadChannel};

use crate::cli::{Cli, Command};
use crate::render::render;
use crate::sections::{Section, Site};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "vitrina.toml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub source: ConfigSource,
}

impl AppConfig {
    /// Precedence, lowest first: built-in presets, config file, environment,
    /// command line flags.
    pub fn resolve(cli: &Cli, env: &EnvOverrides) -> Result<Self> {
        let (mut site, source) = match &cli.config {
            Some(path) => (load_file(path)?, ConfigSource::File(path.clone())),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                (load_file(&path)?, ConfigSource::File(path))
            }
            None => (SiteConfig::default(), ConfigSource::Defaults),
        };

        site.apply_env(env);
        site.apply_env(&EnvOverrides {
            data_url: cli.data_url.clone(),
            data_dir: cli.data_dir.clone(),
            autoplay: None,
        });

        log::debug!("Resolved configuration from {source:?}: {:?}", site.data);
        Ok(Self { site, source })
    }

    pub fn loader(&self) -> Result<ResourceLoader> {
        self.site
            .data
            .loader()
            .context("failed to set up the content source")
    }
}

fn load_file(path: &Path) -> Result<SiteConfig> {
    SiteConfig::load(path)
        .with_context(|| format!("failed to load site configuration {}", path.display()))
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::resolve(&cli, &EnvOverrides::gather())?;

    match cli.command {
        Command::Preview { section } => {
            let sections = match section {
                Some(section) => vec![section],
                None => Section::ALL.to_vec(),
            };
            for block in preview(&config.loader()?, &config, &sections).await? {
                println!("{block}\n");
            }
        }
        Command::Play { section, duration } => {
            play(&config.loader()?, &config, section, duration).await?;
        }
        Command::Contact => {
            let Some(contact) = &config.site.contact else {
                bail!("no [contact] section in the site configuration");
            };
            for line in contact_lines(contact)? {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Mount the site, wait for content, and render the requested sections.
pub async fn preview(
    loader: &ResourceLoader,
    config: &AppConfig,
    sections: &[Section],
) -> Result<Vec<String>> {
    let mut site = Site::mount(loader, &config.site.carousels);
    site.settled().await?;
    let blocks = sections
        .iter()
        .map(|section| render(*section, &site.snapshot(*section)))
        .collect();
    site.shutdown().await;
    Ok(blocks)
}

async fn play(
    loader: &ResourceLoader,
    config: &AppConfig,
    section: Section,
    duration: Duration,
) -> Result<()> {
    let site = Site::mount(loader, &config.site.carousels);
    let mut snapshots = site.subscribe(section);
    let deadline = tokio::time::sleep(duration);
    tokio::pin!(deadline);

    log::info!("Playing {section:?} for {}", humantime::format_duration(duration));
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                println!("{}\n", render(section, &snapshot));
            }
        }
    }

    site.shutdown().await;
    Ok(())
}

/// Channel name and URL, one per line.
pub fn contact_lines(contact: &ContactDetails) -> Result<Vec<String>> {
    contact
        .channels()
        .iter()
        .map(|channel| {
            let url = channel
                .url()
                .with_context(|| format!("invalid contact channel {channel:?}"))?;
            Ok(format!("{:<9} {url}", channel_name(channel)))
        })
        .collect()
}

fn channel_name(channel: &LeadChannel) -> &'static str {
    match channel {
        LeadChannel::Phone { .. } => "phone",
        LeadChannel::WhatsApp { .. } => "whatsapp",
        LeadChannel::Email { .. } => "email",
        LeadChannel::Map { .. } => "map",
    }
}
