//! Snapshot handed to the rendering layer

use serde::Serialize;

use super::projector::ItemTransform;
use super::types::{CarouselKey, RelativePosition};

/// Where the carousel's content currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentStatus {
    #[default]
    Loading,
    /// Fetch failed; carries the message for the composing view.
    Failed(String),
    Ready,
}

/// One item as the renderer should draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFrame {
    pub key: String,
    pub label: String,
    pub index: usize,
    pub position: RelativePosition,
    pub is_active: bool,
    pub transform: ItemTransform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSnapshot {
    pub key: CarouselKey,
    pub status: ContentStatus,
    pub active_index: Option<usize>,
    pub count: usize,
    pub suspended: bool,
    pub frames: Vec<ItemFrame>,
}

impl CarouselSnapshot {
    pub fn empty(key: CarouselKey) -> Self {
        Self {
            key,
            status: ContentStatus::Loading,
            active_index: None,
            count: 0,
            suspended: false,
            frames: Vec::new(),
        }
    }

    /// Loaded successfully but with nothing to show.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Human readable position, e.g. `"02/05"`.
    pub fn indicator(&self) -> Option<String> {
        self.active_index.map(|active| indicator(active, self.count))
    }

    pub fn active_frame(&self) -> Option<&ItemFrame> {
        self.frames.iter().find(|frame| frame.is_active)
    }

    /// Frames ordered back to front.
    pub fn paint_order(&self) -> Vec<&ItemFrame> {
        let mut frames: Vec<_> = self.frames.iter().collect();
        frames.sort_by_key(|frame| frame.transform.z_index);
        frames
    }
}

/// Zero-padded "current/total" with a 1-based current index.
pub fn indicator(active_index: usize, count: usize) -> String {
    format!("{:02}/{:02}", active_index + 1, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_is_one_based_and_padded() {
        assert_eq!(indicator(0, 5), "01/05");
        assert_eq!(indicator(11, 12), "12/12");
        assert_eq!(indicator(99, 120), "100/120");
    }

    #[test]
    fn empty_snapshot_has_no_indicator() {
        let snapshot = CarouselSnapshot::empty(CarouselKey::Hero);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.indicator(), None);
        assert!(snapshot.active_frame().is_none());
    }
}
