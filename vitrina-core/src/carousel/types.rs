//! Shared types for the carousel module

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique key for identifying carousels on a page.
/// A strongly-typed key keeps per-instance state scoped to its carousel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    Hero,
    Trends,
    Promo,
    Products,
    Categories,
    Custom(&'static str),
}

impl fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hero => write!(f, "hero"),
            Self::Trends => write!(f, "trends"),
            Self::Promo => write!(f, "promo"),
            Self::Products => write!(f, "products"),
            Self::Categories => write!(f, "categories"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}

/// Navigation direction. Wrapping is always circular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Signed index step.
    pub const fn step(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Next => Self::Previous,
            Self::Previous => Self::Next,
        }
    }
}

/// Signed circular distance of an item from the active index.
///
/// Normalized into `(-floor(n/2), floor(n/2)]`: 0 is the front item,
/// positive values are ahead of it and negative values behind it. For five
/// items and active index 0 the positions are `0, 1, 2, -2, -1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize,
)]
pub struct RelativePosition(i32);

impl RelativePosition {
    pub const FRONT: Self = Self(0);

    /// Position of `index` relative to `active` in a ring of `count` items.
    /// `None` when the carousel is empty or `index` is out of range.
    pub fn new(index: usize, active: usize, count: usize) -> Option<Self> {
        if count == 0 || index >= count || active >= count {
            return None;
        }
        let count = count as i64;
        let diff = (index as i64 - active as i64).rem_euclid(count);
        let normalized = if diff <= count / 2 { diff } else { diff - count };
        Some(Self(
            normalized.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        ))
    }

    /// Construct from a raw offset, e.g. when probing a projector.
    pub const fn from_offset(offset: i32) -> Self {
        Self(offset)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    /// Number of steps from the front, ignoring side.
    pub const fn distance(self) -> u32 {
        self.0.unsigned_abs()
    }

    pub const fn is_front(self) -> bool {
        self.0 == 0
    }

    /// -1, 0 or 1 depending on the side of the front item.
    pub const fn side(self) -> i32 {
        self.0.signum()
    }
}

/// What a click (or Enter/Space) on an item does.
///
/// Views pick this explicitly; the engine never infers it from the kind of
/// carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickPolicy {
    /// Clicking the front item advances to the next one; other items are inert.
    AdvanceOnFront,
    /// Clicking an item asks the host to open the item's link.
    OpenTarget,
    /// Item clicks do nothing; only the previous/next controls navigate.
    #[default]
    Ignore,
}

/// When arrow keys reach this carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardScope {
    /// Only while the carousel holds input focus.
    #[default]
    Focused,
    /// Page-wide while no other carousel holds focus. The page routes a
    /// key to the focused carousel alone when there is one.
    Global,
    /// Arrow keys are never handled.
    Disabled,
}
