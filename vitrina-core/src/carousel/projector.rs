//! Position projection: relative position -> renderable transform
//!
//! Projectors are pure functions of `(position, constants)`. The depth
//! stacked deck uses [`StackedProjector`]; the single-panel sliders use
//! [`SlideProjector`]; product and category strips use [`StripProjector`].

use serde::{Deserialize, Serialize};

use super::types::RelativePosition;
use crate::constants::{slide, stacked, strip};

/// Visual state of one item, in CSS-like units (px, degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemTransform {
    pub offset_x: f32,
    /// Negative values push the item away from the viewer.
    pub offset_z: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Higher values paint on top.
    pub z_index: i32,
    pub visible: bool,
}

impl ItemTransform {
    pub const IDENTITY: Self = Self {
        offset_x: 0.0,
        offset_z: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
        opacity: 1.0,
        z_index: 1,
        visible: true,
    };
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

pub trait PositionProjector {
    fn project(&self, position: RelativePosition) -> ItemTransform;
}

/// Fanned 3D deck: farther cards slide sideways and back, rotate away from
/// the center, shrink and fade. The front card always paints on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackedProjector {
    pub step_x: f32,
    pub step_z: f32,
    pub rotate_deg: f32,
    pub scale_step: f32,
    pub opacity_step: f32,
    pub base_z: i32,
}

impl Default for StackedProjector {
    fn default() -> Self {
        Self {
            step_x: stacked::STEP_X_PX,
            step_z: stacked::STEP_Z_PX,
            rotate_deg: stacked::ROTATE_DEG,
            scale_step: stacked::SCALE_STEP,
            opacity_step: stacked::OPACITY_STEP,
            base_z: stacked::BASE_Z_INDEX,
        }
    }
}

impl PositionProjector for StackedProjector {
    fn project(&self, position: RelativePosition) -> ItemTransform {
        let p = position.get() as f32;
        let d = position.distance() as f32;
        let opacity = (1.0 - d * self.opacity_step).max(0.0);
        ItemTransform {
            offset_x: p * self.step_x,
            offset_z: -d * self.step_z,
            rotate_y_deg: p * self.rotate_deg,
            scale: (1.0 - d * self.scale_step).max(0.0),
            opacity,
            z_index: self
                .base_z
                .saturating_sub(position.distance().min(i32::MAX as u32) as i32),
            visible: opacity > 0.0,
        }
    }
}

/// Only the active slide shows; the others wait just off to their side,
/// fully transparent, ready to slide in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideProjector {
    pub exit_offset: f32,
}

impl Default for SlideProjector {
    fn default() -> Self {
        Self {
            exit_offset: slide::EXIT_OFFSET_PX,
        }
    }
}

impl PositionProjector for SlideProjector {
    fn project(&self, position: RelativePosition) -> ItemTransform {
        if position.is_front() {
            return ItemTransform::IDENTITY;
        }
        ItemTransform {
            offset_x: position.side() as f32 * self.exit_offset,
            opacity: 0.0,
            z_index: 0,
            visible: false,
            ..ItemTransform::IDENTITY
        }
    }
}

/// Horizontal strip laid out around the active item, one stride per step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripProjector {
    pub stride: f32,
}

impl Default for StripProjector {
    fn default() -> Self {
        Self {
            stride: strip::PRODUCT_STRIDE_PX,
        }
    }
}

impl PositionProjector for StripProjector {
    fn project(&self, position: RelativePosition) -> ItemTransform {
        ItemTransform {
            offset_x: position.get() as f32 * self.stride,
            z_index: i32::from(position.is_front()),
            ..ItemTransform::IDENTITY
        }
    }
}

/// Projection strategy chosen per carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    Stacked(StackedProjector),
    Slide(SlideProjector),
    Strip(StripProjector),
}

impl Default for Projection {
    fn default() -> Self {
        Self::Slide(SlideProjector::default())
    }
}

impl PositionProjector for Projection {
    fn project(&self, position: RelativePosition) -> ItemTransform {
        match self {
            Self::Stacked(p) => p.project(position),
            Self::Slide(p) => p.project(position),
            Self::Strip(p) => p.project(position),
        }
    }
}
