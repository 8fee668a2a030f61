//! Carousel engine
//!
//! One generic engine drives every rotating section of the site. The
//! pieces are kept separate so each can be tested without a renderer or a
//! real clock:
//! - [`engine`]: circular index state machine over an item list.
//! - [`autoplay`]: periodic advance policy and its tokio timer.
//! - [`projector`]: relative position to visual transform strategies.
//! - [`bindings`]: pointer/keyboard/click input to engine operations.
//! - [`instance`]: the unified `update(message)` transition function.
//! - [`runtime`]: a single carousel hosted as a tokio task.

pub mod autoplay;
pub mod bindings;
pub mod config;
pub mod engine;
pub mod instance;
pub mod messages;
pub mod projector;
pub mod runtime;
pub mod types;
pub mod view;

pub use autoplay::{AutoplayScheduler, AutoplayTimer, TickOutcome, TimerAction};
pub use bindings::{Binding, InputEvent, InteractionBindings, Key};
pub use config::CarouselConfig;
pub use engine::CarouselEngine;
pub use instance::{CarouselInstance, NavigationRequest, Outcome};
pub use messages::CarouselMessage;
pub use projector::{
    ItemTransform, PositionProjector, Projection, SlideProjector,
    StackedProjector, StripProjector,
};
pub use runtime::{CarouselHandle, spawn_carousel};
pub use types::*;
pub use view::{CarouselSnapshot, ContentStatus, ItemFrame};
