//! Glob-importable set of the content types most callers need.

pub use crate::catalog::{Category, Featured, Product, featured};
pub use crate::hero::HeroSlide;
pub use crate::item::CarouselItem;
pub use crate::lead::{ContactDetails, LeadChannel};
pub use crate::media::{Media, MediaKind};
pub use crate::promo::PromoSlide;
pub use crate::trend::{Cta, Trend, TrendCard};
