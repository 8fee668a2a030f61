//! Site configuration
//!
//! A TOML file with optional overrides on top of the compiled carousel
//! presets, then environment overrides for where content is served from.
//! Every field is optional; an empty file yields the reference site.
//!
//! ```toml
//! [data]
//! url = "https://example.ro/data/"
//!
//! [carousels.hero]
//! interval = "5s"
//!
//! [carousels.trends]
//! click_policy = "open_target"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use vitrina_model::ContactDetails;

use crate::carousel::{CarouselConfig, ClickPolicy, KeyboardScope, Projection};
use crate::error::{ConfigError, LoadError};
use crate::loader::{DirectorySource, HttpSource, ResourceLoader};

pub const DATA_URL_VAR: &str = "VITRINA_DATA_URL";
pub const DATA_DIR_VAR: &str = "VITRINA_DATA_DIR";
pub const AUTOPLAY_VAR: &str = "VITRINA_AUTOPLAY";

const DEFAULT_DATA_DIR: &str = "data";

/// Where the JSON content documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http { base_url: String },
    Directory { root: PathBuf },
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Directory {
            root: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl DataSource {
    pub fn loader(&self) -> Result<ResourceLoader, LoadError> {
        Ok(match self {
            Self::Http { base_url } => ResourceLoader::new(HttpSource::new(base_url)?),
            Self::Directory { root } => ResourceLoader::new(DirectorySource::new(root)),
        })
    }
}

/// One [`CarouselConfig`] per section of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    pub hero: CarouselConfig,
    pub trends: CarouselConfig,
    pub promo: CarouselConfig,
    pub products: CarouselConfig,
    pub categories: CarouselConfig,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            hero: CarouselConfig::hero(),
            trends: CarouselConfig::stacked(),
            promo: CarouselConfig::promo(),
            products: CarouselConfig::products(),
            categories: CarouselConfig::categories(),
        }
    }
}

impl CarouselSettings {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &CarouselConfig)> {
        [
            ("hero", &self.hero),
            ("trends", &self.trends),
            ("promo", &self.promo),
            ("products", &self.products),
            ("categories", &self.categories),
        ]
        .into_iter()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut CarouselConfig> {
        [
            &mut self.hero,
            &mut self.trends,
            &mut self.promo,
            &mut self.products,
            &mut self.categories,
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteConfig {
    pub data: DataSource,
    pub contact: Option<ContactDetails>,
    pub carousels: CarouselSettings,
}

impl SiteConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawSiteConfig = toml::from_str(contents)?;
        raw.resolve()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("Loaded site configuration from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides. A data URL wins over a data directory.
    pub fn apply_env(&mut self, env: &EnvOverrides) {
        if let Some(base_url) = &env.data_url {
            self.data = DataSource::Http {
                base_url: base_url.clone(),
            };
        } else if let Some(root) = &env.data_dir {
            self.data = DataSource::Directory { root: root.clone() };
        }
        // Only switching autoplay off is global; on keeps per-carousel presets.
        if env.autoplay == Some(false) {
            for carousel in self.carousels.iter_mut() {
                carousel.autoplay = false;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, carousel) in self.carousels.iter() {
            carousel
                .validate()
                .map_err(|err| ConfigError::Invalid(format!("carousels.{name}: {err}")))?;
        }
        Ok(())
    }
}

/// Environment-provided overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub data_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub autoplay: Option<bool>,
}

impl EnvOverrides {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            data_url: get(DATA_URL_VAR),
            data_dir: get(DATA_DIR_VAR).map(PathBuf::from),
            autoplay: get(AUTOPLAY_VAR).and_then(|raw| parse_bool(&raw)),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSiteConfig {
    data: RawData,
    contact: Option<ContactDetails>,
    carousels: RawCarousels,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawData {
    url: Option<String>,
    dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCarousels {
    hero: CarouselOverrides,
    trends: CarouselOverrides,
    promo: CarouselOverrides,
    products: CarouselOverrides,
    categories: CarouselOverrides,
}

/// Per-carousel fields; `None` keeps the preset.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CarouselOverrides {
    interval: Option<String>,
    autoplay: Option<bool>,
    click_policy: Option<ClickPolicy>,
    keyboard: Option<KeyboardScope>,
    projection: Option<Projection>,
}

impl CarouselOverrides {
    fn apply(self, name: &str, preset: CarouselConfig) -> Result<CarouselConfig, ConfigError> {
        let interval = match self.interval {
            Some(raw) => parse_interval(name, &raw)?,
            None => preset.interval,
        };
        Ok(CarouselConfig {
            interval,
            autoplay: self.autoplay.unwrap_or(preset.autoplay),
            click_policy: self.click_policy.unwrap_or(preset.click_policy),
            keyboard: self.keyboard.unwrap_or(preset.keyboard),
            projection: self.projection.unwrap_or(preset.projection),
        })
    }
}

fn parse_interval(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(raw.trim()).map_err(|err| {
        ConfigError::Invalid(format!("carousels.{name}.interval '{raw}': {err}"))
    })
}

impl RawSiteConfig {
    fn resolve(self) -> Result<SiteConfig, ConfigError> {
        let data = match (self.data.url, self.data.dir) {
            (Some(base_url), _) => DataSource::Http { base_url },
            (None, Some(root)) => DataSource::Directory { root },
            (None, None) => DataSource::default(),
        };
        let defaults = CarouselSettings::default();
        let carousels = CarouselSettings {
            hero: self.carousels.hero.apply("hero", defaults.hero)?,
            trends: self.carousels.trends.apply("trends", defaults.trends)?,
            promo: self.carousels.promo.apply("promo", defaults.promo)?,
            products: self.carousels.products.apply("products", defaults.products)?,
            categories: self
                .carousels
                .categories
                .apply("categories", defaults.categories)?,
        };
        let config = SiteConfig {
            data,
            contact: self.contact,
            carousels,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::carousel::StackedProjector;

    #[test]
    fn empty_file_is_the_reference_site() {
        let config = SiteConfig::from_toml_str("").expect("parses");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(
            config.data,
            DataSource::Directory {
                root: PathBuf::from("data")
            }
        );
    }

    #[test]
    fn overrides_layer_onto_presets() {
        let config = SiteConfig::from_toml_str(
            r#"
            [data]
            url = "https://cdn.example.ro/data"
            dir = "ignored"

            [carousels.trends]
            interval = "3s 250ms"
            projection = { kind = "stacked", step_x = 90.0 }

            [carousels.promo]
            click_policy = "advance_on_front"
            "#,
        )
        .expect("parses");

        assert!(matches!(config.data, DataSource::Http { .. }));
        let trends = config.carousels.trends;
        assert_eq!(trends.interval, Duration::from_millis(3_250));
        assert_eq!(trends.click_policy, ClickPolicy::AdvanceOnFront);
        let Projection::Stacked(stacked) = trends.projection else {
            panic!("expected stacked projection");
        };
        assert_eq!(stacked.step_x, 90.0);
        assert_eq!(stacked.step_z, StackedProjector::default().step_z);

        assert_eq!(config.carousels.promo.click_policy, ClickPolicy::AdvanceOnFront);
        assert_eq!(config.carousels.hero, CarouselConfig::hero());
    }

    #[test]
    fn invalid_values_are_reported() {
        let bad_interval = SiteConfig::from_toml_str("[carousels.hero]\ninterval = \"soon\"");
        assert!(matches!(bad_interval, Err(ConfigError::Invalid(_))));

        let zero = SiteConfig::from_toml_str("[carousels.promo]\ninterval = \"0s\"");
        assert!(matches!(zero, Err(ConfigError::Invalid(msg)) if msg.contains("promo")));

        let unknown = SiteConfig::from_toml_str("[carousels.sidebar]\nautoplay = false");
        assert!(matches!(unknown, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn env_url_takes_precedence_over_dir() {
        let vars = HashMap::from([
            (DATA_URL_VAR, "http://localhost:5173/data"),
            (DATA_DIR_VAR, "/srv/data"),
            (AUTOPLAY_VAR, "off"),
        ]);
        let env = EnvOverrides::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        let mut config = SiteConfig::default();
        config.apply_env(&env);
        assert_eq!(
            config.data,
            DataSource::Http {
                base_url: "http://localhost:5173/data".to_string()
            }
        );
        assert!(!config.carousels.hero.autoplay);
        assert!(!config.carousels.trends.autoplay);
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let env = EnvOverrides::from_lookup(|name| {
            (name == DATA_DIR_VAR).then(|| "   ".to_string())
        });
        assert_eq!(env, EnvOverrides::default());
    }
}
