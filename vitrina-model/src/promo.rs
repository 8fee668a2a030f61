//! Promotional multi-panel slides.

use serde::{Deserialize, Serialize};

use crate::item::CarouselItem;
use crate::trend::{Cta, PLACEHOLDER_IMAGE};

/// Image card on the left, numbered text panel on the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoSlide {
    pub id: String,
    pub image: String,
    /// Two digit ordinal printed on the panel ("01").
    pub label: String,
    pub title_overlay: Option<String>,
    pub right_title: Option<String>,
    pub right_text: Option<String>,
    pub cta: Option<Cta>,
}

impl CarouselItem for PromoSlide {
    fn key(&self) -> &str {
        &self.id
    }

    fn link(&self) -> Option<&str> {
        self.cta.as_ref().map(|cta| cta.link.as_str())
    }

    fn label(&self) -> &str {
        self.title_overlay.as_deref().unwrap_or(&self.id)
    }
}

fn slide(
    id: &str,
    image: &str,
    label: &str,
    overlay: &str,
    title: &str,
    text: &str,
    cta: (&str, &str),
) -> PromoSlide {
    PromoSlide {
        id: id.to_string(),
        image: image.to_string(),
        label: label.to_string(),
        title_overlay: Some(overlay.to_string()),
        right_title: Some(title.to_string()),
        right_text: Some(text.to_string()),
        cta: Some(Cta {
            text: cta.0.to_string(),
            link: cta.1.to_string(),
        }),
    }
}

/// The five showroom slides. The first one borrows the featured trend's
/// artwork when it has been loaded.
pub fn strategic_slides(trend_image: Option<&str>) -> Vec<PromoSlide> {
    vec![
        slide(
            "sector5-tradition",
            trend_image.unwrap_or(PLACEHOLDER_IMAGE),
            "01",
            "Tradiție Italiană, Calitate Locală",
            "De ce Sector 5 alege San Marco",
            "80+ ani de experiență din Veneția, adaptat pentru exigențele \
             bucureștenilor din Sector 5. Finisaje premium cu consultanță \
             gratuită inclusă.",
            ("Descoperă showroom-ul din zona ta", "/locatie"),
        ),
        slide(
            "architect-consultation",
            PLACEHOLDER_IMAGE,
            "02",
            "Transformă viziunea în realitate",
            "Consultanță Gratuită cu Arhitectul",
            "Arhitect San Marco disponibil pentru vizite la domiciliu în \
             Sector 5. Design personalizat și aplicare profesională garantată.",
            ("Programează consultația gratuită", "/contact"),
        ),
        slide(
            "premium-effects",
            PLACEHOLDER_IMAGE,
            "03",
            "Efecte Premium pentru Casa Ta",
            "MarcoPolo Luxury & Stucco Veneziano",
            "Finisaje distinctive italiene: MarcoPolo Luxury cu efect metalic \
             și Stucco Veneziano autentic. Vezi diferența calității.",
            ("Vezi efectele live în showroom", "/locatie"),
        ),
        slide(
            "80-years-experience",
            PLACEHOLDER_IMAGE,
            "04",
            "De la Veneția la Sectorul 5",
            "80+ Ani Experiență",
            "Importator direct oficial San Marco Italia. Tradiții autentice, \
             tehnologii moderne, rezultate de excepție.",
            ("Citește povestea calității San Marco", "/contact"),
        ),
        slide(
            "10-year-warranty",
            PLACEHOLDER_IMAGE,
            "05",
            "Investiția ta, protejată",
            "Garanție 10 Ani",
            "Garanție extinsă 10 ani + aplicare doar cu meșteri certificați \
             San Marco. Investiție sigură pe termen lung.",
            ("Solicită devis pentru proiectul tău", "/contact"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slide_uses_trend_artwork() {
        let slides = strategic_slides(Some("/images/warm.jpg"));
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[0].image, "/images/warm.jpg");
        assert_eq!(slides[1].image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn labels_are_sequential_and_keys_unique() {
        let slides = strategic_slides(None);
        let labels: Vec<_> = slides.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["01", "02", "03", "04", "05"]);

        let mut keys: Vec<_> = slides.iter().map(|s| s.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), slides.len());
    }
}
