//! Featured product and category strips. Only entries flagged `featured`
//! make it onto the home page.

use tokio::task::JoinHandle;
use vitrina_core::constants::resources;
use vitrina_core::{
    CarouselConfig, CarouselHandle, CarouselKey, LoadState, ResourceLoader, spawn_carousel,
};
use vitrina_model::{Category, Featured, Product, featured};

pub(super) fn mount_products(
    loader: &ResourceLoader,
    config: CarouselConfig,
) -> (CarouselHandle<Product>, JoinHandle<()>) {
    let handle = spawn_carousel(CarouselKey::Products, config);
    let feed = handle.follow(
        loader.watch::<Vec<Product>>(resources::PRODUCTS),
        only_featured::<Product>,
    );
    (handle, feed)
}

pub(super) fn mount_categories(
    loader: &ResourceLoader,
    config: CarouselConfig,
) -> (CarouselHandle<Category>, JoinHandle<()>) {
    let handle = spawn_carousel(CarouselKey::Categories, config);
    let feed = handle.follow(
        loader.watch::<Vec<Category>>(resources::CATEGORIES),
        only_featured::<Category>,
    );
    (handle, feed)
}

fn only_featured<T: Featured + Clone>(state: LoadState<Vec<T>>) -> LoadState<Vec<T>> {
    state.map(|items| featured(&items))
}
