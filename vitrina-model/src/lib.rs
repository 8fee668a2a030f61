//! Content data model shared across vitrina crates.
//!
//! Every type here decodes from one of the static JSON documents the site
//! ships under `/data`. Carousels only ever look at the [`CarouselItem`]
//! identity of these payloads; everything else is for the composing views.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod hero;
pub mod item;
pub mod lead;
pub mod media;
pub mod prelude;
pub mod promo;
pub mod trend;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::{Category, Featured, Product, featured};
pub use error::{ModelError, Result as ModelResult};
pub use hero::HeroSlide;
pub use item::CarouselItem;
pub use lead::{ContactDetails, LeadChannel};
pub use media::{Media, MediaKind};
pub use promo::{PromoSlide, strategic_slides};
pub use trend::{Cta, Trend, TrendCard, trend_stack};
