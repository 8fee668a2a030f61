//! Static configuration for a carousel instance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::bindings::InteractionBindings;
use super::projector::{
    Projection, SlideProjector, StackedProjector, StripProjector,
};
use super::types::{ClickPolicy, KeyboardScope};
use crate::constants::{autoplay, strip};
use crate::error::ConfigError;

/// Everything that distinguishes one carousel variant from another. The
/// interval is fixed for the lifetime of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(with = "duration_str")]
    pub interval: Duration,
    pub autoplay: bool,
    pub click_policy: ClickPolicy,
    pub keyboard: KeyboardScope,
    pub projection: Projection,
}

impl CarouselConfig {
    /// Full-width banner: opens the slide's link on click, arrow keys work
    /// page-wide.
    pub const fn hero() -> Self {
        Self {
            interval: Duration::from_millis(autoplay::HERO_INTERVAL_MS),
            autoplay: true,
            click_policy: ClickPolicy::OpenTarget,
            keyboard: KeyboardScope::Global,
            projection: Projection::Slide(SlideProjector {
                exit_offset: 0.0,
            }),
        }
    }

    /// 3D card deck: clicking the front card brings the next one forward.
    pub fn stacked() -> Self {
        Self {
            interval: Duration::from_millis(autoplay::STACKED_INTERVAL_MS),
            autoplay: true,
            click_policy: ClickPolicy::AdvanceOnFront,
            keyboard: KeyboardScope::Focused,
            projection: Projection::Stacked(StackedProjector::default()),
        }
    }

    /// Promotional slider: navigation only through its controls.
    pub fn promo() -> Self {
        Self {
            interval: Duration::from_millis(autoplay::PROMO_INTERVAL_MS),
            autoplay: true,
            click_policy: ClickPolicy::Ignore,
            keyboard: KeyboardScope::Focused,
            projection: Projection::Slide(SlideProjector::default()),
        }
    }

    /// Horizontal product or category strip; no autoplay.
    pub const fn strip(stride: f32) -> Self {
        Self {
            interval: Duration::from_millis(autoplay::HERO_INTERVAL_MS),
            autoplay: false,
            click_policy: ClickPolicy::OpenTarget,
            keyboard: KeyboardScope::Disabled,
            projection: Projection::Strip(StripProjector { stride }),
        }
    }

    pub const fn products() -> Self {
        Self::strip(strip::PRODUCT_STRIDE_PX)
    }

    pub const fn categories() -> Self {
        Self::strip(strip::CATEGORY_STRIDE_PX)
    }

    pub fn bindings(&self) -> InteractionBindings {
        InteractionBindings::new(self.click_policy, self.keyboard)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay && self.interval.is_zero() {
            return Err(ConfigError::Invalid(
                "autoplay interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::promo()
    }
}

/// Serialize durations as humantime strings ("4s", "3s 500ms").
pub(crate) mod duration_str {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&humantime::format_duration(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(raw.trim()).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_reference_cadences() {
        assert_eq!(CarouselConfig::hero().interval, Duration::from_millis(4_000));
        assert_eq!(CarouselConfig::stacked().interval, Duration::from_millis(3_500));
        assert_eq!(CarouselConfig::promo().interval, Duration::from_millis(4_500));
        assert!(!CarouselConfig::products().autoplay);
    }

    #[test]
    fn zero_interval_with_autoplay_is_rejected() {
        let config = CarouselConfig {
            interval: Duration::ZERO,
            ..CarouselConfig::promo()
        };
        assert!(config.validate().is_err());
    }
}
