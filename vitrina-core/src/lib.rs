//! vitrina core
//!
//! The carousel engine behind every rotating section of the site, plus the
//! two collaborators it needs at its edges: the resource loader that fetches
//! the static JSON content and the configuration that tunes each carousel.
//!
//! Layout
//! - [`carousel`]: engine state machine, autoplay scheduling, position
//!   projection, input bindings and the tokio-hosted runtime.
//! - [`loader`]: `{data, isLoading, error}` style fetching of JSON documents
//!   over HTTP or from a local directory.
//! - [`config`]: TOML site configuration with environment overrides.
#![allow(missing_docs)]

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;

pub use carousel::{
    CarouselConfig, CarouselEngine, CarouselHandle, CarouselInstance,
    CarouselKey, CarouselMessage, CarouselSnapshot, Direction,
    NavigationRequest, Projection, RelativePosition, spawn_carousel,
};
pub use config::{DataSource, EnvOverrides, SiteConfig};
pub use error::{CarouselError, ConfigError, LoadError};
pub use loader::{LoadState, ResourceLoader};
