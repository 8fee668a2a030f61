//! Stacked 3D trend deck.
//!
//! The deck always shows the four "coming soon" cards; the featured trend
//! joins in front once it has loaded. A failed fetch leaves only the
//! placeholders, so this section never renders an error.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use vitrina_core::{CarouselConfig, CarouselHandle, CarouselKey, LoadState, spawn_carousel};
use vitrina_model::{Trend, TrendCard, trend_stack};

pub(super) fn mount(
    trend: watch::Receiver<LoadState<Trend>>,
    config: CarouselConfig,
) -> (CarouselHandle<TrendCard>, JoinHandle<()>) {
    let handle = spawn_carousel(CarouselKey::Trends, config);
    let feed = handle.follow(trend, |state| deck(&state));
    (handle, feed)
}

pub(crate) fn deck(state: &LoadState<Trend>) -> LoadState<Vec<TrendCard>> {
    LoadState::Ready(trend_stack(state.data()))
}
