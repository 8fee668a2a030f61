//! Identity trait for carousel payloads.

/// Anything a carousel can cycle through.
///
/// The carousel engine treats payloads as opaque; it needs a stable key for
/// each item and, for views that open the item on click, a link target.
pub trait CarouselItem {
    /// Stable identity, unique within one carousel.
    fn key(&self) -> &str;

    /// Where a click on this item leads, if anywhere.
    fn link(&self) -> Option<&str> {
        None
    }

    /// Short human readable name used by previews and live regions.
    fn label(&self) -> &str {
        self.key()
    }
}

impl<T: CarouselItem + ?Sized> CarouselItem for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn link(&self) -> Option<&str> {
        (**self).link()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}
