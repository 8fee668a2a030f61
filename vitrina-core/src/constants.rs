//! Carousel and content constants
//!
//! Defaults for the three rotating sections and the stacked-card geometry.
//! Tuning should happen here (or in the site configuration) so every
//! carousel picks the change up consistently.

/// Autoplay cadence per section.
pub mod autoplay {
    /// Full-width hero banner.
    pub const HERO_INTERVAL_MS: u64 = 4_000;
    /// Stacked trend cards.
    pub const STACKED_INTERVAL_MS: u64 = 3_500;
    /// Promotional multi-panel slider.
    pub const PROMO_INTERVAL_MS: u64 = 4_500;
}

/// Geometry of the depth-stacked card deck, per step of distance from the
/// front card.
pub mod stacked {
    /// Lateral offset (px).
    pub const STEP_X_PX: f32 = 120.0;
    /// Depth offset (px), always pushed away from the viewer.
    pub const STEP_Z_PX: f32 = 120.0;
    /// Y-axis rotation (degrees); sign follows the side of the deck.
    pub const ROTATE_DEG: f32 = -8.0;
    /// Scale lost per step.
    pub const SCALE_STEP: f32 = 0.06;
    /// Opacity lost per step.
    pub const OPACITY_STEP: f32 = 0.08;
    /// Stacking order of the front card.
    pub const BASE_Z_INDEX: i32 = 10;
}

/// Single-panel slide transitions.
pub mod slide {
    /// Horizontal distance (px) at which inactive slides are parked.
    pub const EXIT_OFFSET_PX: f32 = 50.0;
}

/// Horizontal product/category strips.
pub mod strip {
    /// Product card stride (px).
    pub const PRODUCT_STRIDE_PX: f32 = 350.0;
    /// Category card stride (px).
    pub const CATEGORY_STRIDE_PX: f32 = 320.0;
}

/// Static content documents, relative to the data root.
pub mod resources {
    pub const HERO_SLIDES: &str = "hero_slides.json";
    pub const TRENDS: &str = "trends.json";
    pub const PRODUCTS: &str = "products_featured.json";
    pub const CATEGORIES: &str = "categories.json";
    /// Request timeout for HTTP sources (seconds).
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
}
