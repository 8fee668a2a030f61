//! Seasonal trend promotion (`/data/trends.json`) and the stacked card deck
//! built around it.

use serde::{Deserialize, Serialize};

use crate::item::CarouselItem;

/// Number of "coming soon" cards stacked behind the featured trend.
pub const PLACEHOLDER_COUNT: usize = 4;

/// Artwork shown on placeholder cards.
pub const PLACEHOLDER_IMAGE: &str = "/images/trends-2025.jpg";

/// Call to action attached to a trend or slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub text: String,
    pub link: String,
}

/// The featured decor trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub image: String,
    pub cta: Cta,
}

/// One card in the stacked trend deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendCard {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub cta: Option<Cta>,
    pub placeholder: bool,
}

impl TrendCard {
    /// Placeholder card number `ordinal` (1-based).
    pub fn placeholder(ordinal: usize) -> Self {
        Self {
            id: format!("coming-soon-{ordinal}"),
            title: "Coming Soon".to_string(),
            subtitle: "În curând".to_string(),
            description: "Pregătim noi trenduri spectaculoase pentru 2025."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            cta: None,
            placeholder: true,
        }
    }

    /// Badge text shown above the title.
    pub fn badge(&self) -> &'static str {
        if self.placeholder { "2025" } else { "2025 Trends" }
    }
}

impl From<&Trend> for TrendCard {
    fn from(trend: &Trend) -> Self {
        Self {
            id: trend.id.clone(),
            title: trend.title.clone(),
            subtitle: trend.subtitle.clone(),
            description: trend.description.clone(),
            image: trend.image.clone(),
            cta: Some(trend.cta.clone()),
            placeholder: false,
        }
    }
}

impl CarouselItem for TrendCard {
    fn key(&self) -> &str {
        &self.id
    }

    fn link(&self) -> Option<&str> {
        self.cta.as_ref().map(|cta| cta.link.as_str())
    }

    fn label(&self) -> &str {
        &self.title
    }
}

/// Build the stacked deck: the featured trend (when loaded) in front,
/// followed by [`PLACEHOLDER_COUNT`] placeholder cards.
pub fn trend_stack(trend: Option<&Trend>) -> Vec<TrendCard> {
    trend
        .map(TrendCard::from)
        .into_iter()
        .chain((1..=PLACEHOLDER_COUNT).map(TrendCard::placeholder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trend {
        serde_json::from_str(
            r#"{
                "id": "warm-earth",
                "title": "Pământ cald",
                "subtitle": "Texturi naturale",
                "description": "Nuanțe calde.",
                "image": "/images/warm.jpg",
                "cta": { "text": "Descoperă", "link": "/trenduri" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn stack_puts_trend_in_front_of_placeholders() {
        let trend = sample();
        let deck = trend_stack(Some(&trend));
        assert_eq!(deck.len(), PLACEHOLDER_COUNT + 1);
        assert_eq!(deck[0].key(), "warm-earth");
        assert!(!deck[0].placeholder);
        assert_eq!(deck[0].link(), Some("/trenduri"));
        assert!(deck[1..].iter().all(|card| card.placeholder));
        assert_eq!(deck[4].key(), "coming-soon-4");
    }

    #[test]
    fn stack_without_trend_is_placeholders_only() {
        let deck = trend_stack(None);
        assert_eq!(deck.len(), PLACEHOLDER_COUNT);
        assert!(deck.iter().all(|card| card.link().is_none()));
        assert_eq!(deck[0].badge(), "2025");
    }
}
