//! Hero banner slides (`/data/hero_slides.json`).

use serde::{Deserialize, Serialize};

use crate::item::CarouselItem;
use crate::media::Media;

/// One full-width banner slide.
///
/// ```json
/// { "slug": "slide-1",
///   "media": { "type": "image", "url": "/images/hero-1.jpg" },
///   "heading_primary": "San Marco",
///   "heading_secondary": "Arta culorilor italiene",
///   "category_label": "Decorative",
///   "target_url": "/san-marco-arta-culorilor.html" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub slug: String,
    pub media: Media,
    pub heading_primary: String,
    pub heading_secondary: String,
    pub category_label: String,
    pub target_url: String,
}

impl HeroSlide {
    /// Accessible description, "primary - secondary".
    pub fn caption(&self) -> String {
        format!("{} - {}", self.heading_primary, self.heading_secondary)
    }
}

impl CarouselItem for HeroSlide {
    fn key(&self) -> &str {
        &self.slug
    }

    fn link(&self) -> Option<&str> {
        Some(self.target_url.as_str())
    }

    fn label(&self) -> &str {
        &self.heading_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    #[test]
    fn decodes_documented_schema() {
        let raw = r#"[{
            "slug": "slide-1",
            "media": { "type": "video", "url": "/media/intro.mp4" },
            "heading_primary": "San Marco",
            "heading_secondary": "Arta culorilor italiene",
            "category_label": "Decorative",
            "target_url": "/san-marco-arta-culorilor.html"
        }]"#;

        let slides: Vec<HeroSlide> = serde_json::from_str(raw).unwrap();
        assert_eq!(slides.len(), 1);
        let slide = &slides[0];
        assert_eq!(slide.media.kind, MediaKind::Video);
        assert_eq!(slide.key(), "slide-1");
        assert_eq!(slide.link(), Some("/san-marco-arta-culorilor.html"));
        assert_eq!(slide.caption(), "San Marco - Arta culorilor italiene");
    }
}
