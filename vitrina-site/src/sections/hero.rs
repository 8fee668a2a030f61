//! Full-width hero banner. Clicking (or Enter on) a slide opens its page.

use tokio::task::JoinHandle;
use vitrina_core::constants::resources;
use vitrina_core::{CarouselConfig, CarouselHandle, CarouselKey, ResourceLoader, spawn_carousel};
use vitrina_model::HeroSlide;

pub(super) fn mount(
    loader: &ResourceLoader,
    config: CarouselConfig,
) -> (CarouselHandle<HeroSlide>, JoinHandle<()>) {
    let handle = spawn_carousel(CarouselKey::Hero, config);
    let feed = handle.follow(loader.watch::<Vec<HeroSlide>>(resources::HERO_SLIDES), |state| state);
    (handle, feed)
}
