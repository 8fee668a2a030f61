//! Promotional slider: five fixed showroom slides, the first of which
//! borrows the featured trend's image.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use vitrina_core::{CarouselConfig, CarouselHandle, CarouselKey, LoadState, spawn_carousel};
use vitrina_model::{PromoSlide, Trend, strategic_slides};

pub(super) fn mount(
    trend: watch::Receiver<LoadState<Trend>>,
    config: CarouselConfig,
) -> (CarouselHandle<PromoSlide>, JoinHandle<()>) {
    let handle = spawn_carousel(CarouselKey::Promo, config);
    let feed = handle.follow(trend, |state| {
        let image = state.data().map(|trend| trend.image.as_str());
        LoadState::Ready(strategic_slides(image))
    });
    (handle, feed)
}
