//! CarouselEngine: circular index state over an item list

use super::types::{Direction, RelativePosition};

/// Owns the item sequence, the active index and the suspension flag.
///
/// The engine never inspects its items. All index arithmetic normalizes with
/// `rem_euclid`, so any signed input is valid and an empty engine simply
/// ignores navigation.
#[derive(Debug, Clone)]
pub struct CarouselEngine<T> {
    items: Vec<T>,
    /// Only meaningful while `items` is non-empty.
    active_index: usize,
    suspended: bool,
}

impl<T> Default for CarouselEngine<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            active_index: 0,
            suspended: false,
        }
    }
}

impl<T> CarouselEngine<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<T>) -> Self {
        let mut engine = Self::new();
        engine.initialize(items);
        engine
    }

    /// Replace the items and rewind to the first one.
    ///
    /// The suspension flag is left alone: the pointer may still be resting
    /// on the carousel while new content arrives.
    pub fn initialize(&mut self, items: Vec<T>) {
        self.items = items;
        self.active_index = 0;
        log::debug!("Carousel initialized with {} items", self.items.len());
    }

    /// Swap in refreshed content. A list of the same length keeps the
    /// active index; any other length rewinds like [`Self::initialize`].
    pub fn refresh(&mut self, items: Vec<T>) {
        if items.len() == self.items.len() {
            self.items = items;
        } else {
            self.initialize(items);
        }
    }

    /// Drop all items (content went back to loading or failed).
    pub fn clear(&mut self) {
        self.items.clear();
        self.active_index = 0;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Zero-based active index, `None` while empty.
    pub fn active_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.active_index)
    }

    pub fn active_item(&self) -> Option<&T> {
        self.items.get(self.active_index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    /// Jump to `index mod len`. Returns whether the active index changed.
    pub fn go_to(&mut self, index: isize) -> bool {
        let count = self.items.len();
        if count == 0 {
            return false;
        }
        let next = index.rem_euclid(count as isize) as usize;
        let changed = next != self.active_index;
        self.active_index = next;
        changed
    }

    /// Step one item in `direction`, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.go_to(self.active_index as isize + direction.step())
    }

    /// Returns whether the flag changed.
    pub fn suspend(&mut self) -> bool {
        !std::mem::replace(&mut self.suspended, true)
    }

    /// Returns whether the flag changed.
    pub fn resume(&mut self) -> bool {
        std::mem::replace(&mut self.suspended, false)
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn relative_position(&self, index: usize) -> Option<RelativePosition> {
        RelativePosition::new(index, self.active_index, self.items.len())
    }
}
