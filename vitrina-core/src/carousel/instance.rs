//! CarouselInstance: the unified transition function
//!
//! An instance bundles the engine with everything scoped to one carousel
//! on the page: its autoplay policy, its input bindings, and its own focus
//! and pointer flags. [`CarouselInstance::update`] is the only way state
//! changes, whether the trigger was a timer tick, a key press or new
//! content.

use vitrina_model::CarouselItem;

use super::autoplay::{AutoplayScheduler, TickOutcome, TimerAction};
use super::bindings::{Binding, BindingContext, InputEvent, InteractionBindings};
use super::config::CarouselConfig;
use super::engine::CarouselEngine;
use super::messages::CarouselMessage;
use super::projector::PositionProjector;
use super::types::{CarouselKey, Direction};
use super::view::{CarouselSnapshot, ContentStatus, ItemFrame};
use crate::loader::LoadState;

/// A request for the host to leave the carousel, e.g. open a slide's link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub key: CarouselKey,
    pub index: usize,
    pub target: String,
}

/// Side effects of one transition, for the host to carry out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Observable state changed; re-render.
    pub changed: bool,
    pub timer: TimerAction,
    pub request: Option<NavigationRequest>,
    pub prevent_default: bool,
}

#[derive(Debug)]
pub struct CarouselInstance<T> {
    key: CarouselKey,
    engine: CarouselEngine<T>,
    autoplay: AutoplayScheduler,
    bindings: InteractionBindings,
    status: ContentStatus,
    focused: bool,
    pointer_inside: bool,
}

impl<T: CarouselItem> CarouselInstance<T> {
    pub fn new(key: CarouselKey, config: &CarouselConfig) -> Self {
        Self {
            key,
            engine: CarouselEngine::new(),
            autoplay: AutoplayScheduler::new(config.interval, config.autoplay),
            bindings: config.bindings(),
            status: ContentStatus::Loading,
            focused: false,
            pointer_inside: false,
        }
    }

    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    pub fn engine(&self) -> &CarouselEngine<T> {
        &self.engine
    }

    pub fn autoplay(&self) -> &AutoplayScheduler {
        &self.autoplay
    }

    pub fn status(&self) -> &ContentStatus {
        &self.status
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Tick from the currently armed timer. Convenience for hosts and tests
    /// that simulate the clock.
    pub fn tick(&mut self) -> Outcome {
        let generation = self.autoplay.generation();
        self.update(CarouselMessage::Tick(generation))
    }

    pub fn update(&mut self, message: CarouselMessage<T>) -> Outcome {
        match message {
            CarouselMessage::Content(state) => self.apply_content(state),
            CarouselMessage::Tick(generation) => {
                let outcome = self.autoplay.on_tick(&mut self.engine, generation);
                Outcome {
                    changed: outcome == TickOutcome::Advanced,
                    ..Outcome::default()
                }
            }
            CarouselMessage::Advance(direction) => self.navigate(direction),
            CarouselMessage::GoTo(index) => {
                let changed = self.engine.go_to(index);
                Outcome {
                    changed,
                    timer: self.autoplay.reset_phase(),
                    ..Outcome::default()
                }
            }
            CarouselMessage::Suspend => Outcome {
                changed: self.engine.suspend(),
                ..Outcome::default()
            },
            CarouselMessage::Resume => Outcome {
                changed: self.engine.resume(),
                ..Outcome::default()
            },
            CarouselMessage::Input(event) => self.apply_input(event),
        }
    }

    /// Release everything on unmount: a missed pointer-leave must not leave
    /// the carousel suspended, and the timer goes away with the view.
    pub fn teardown(&mut self) -> TimerAction {
        self.pointer_inside = false;
        self.focused = false;
        self.engine.resume();
        self.autoplay.disarm()
    }

    pub fn snapshot<P: PositionProjector>(&self, projector: &P) -> CarouselSnapshot {
        let frames = self
            .engine
            .items()
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let position = self.engine.relative_position(index)?;
                Some(ItemFrame {
                    key: item.key().to_string(),
                    label: item.label().to_string(),
                    index,
                    position,
                    is_active: position.is_front(),
                    transform: projector.project(position),
                })
            })
            .collect();

        CarouselSnapshot {
            key: self.key.clone(),
            status: self.status.clone(),
            active_index: self.engine.active_index(),
            count: self.engine.len(),
            suspended: self.engine.is_suspended(),
            frames,
        }
    }

    fn apply_content(&mut self, state: LoadState<Vec<T>>) -> Outcome {
        match state {
            LoadState::Loading => {
                self.status = ContentStatus::Loading;
                self.engine.clear();
            }
            LoadState::Failed(error) => {
                log::warn!("Carousel {} has no content: {error}", self.key);
                self.status = ContentStatus::Failed(error.to_string());
                self.engine.clear();
            }
            LoadState::Ready(items) => {
                // Rewind only when content first appears; a refresh of
                // ready content keeps the visitor where they are.
                if self.status == ContentStatus::Ready {
                    self.engine.refresh(items);
                } else {
                    self.status = ContentStatus::Ready;
                    self.engine.initialize(items);
                }
            }
        }
        Outcome {
            changed: true,
            timer: self.autoplay.sync(self.engine.len()),
            ..Outcome::default()
        }
    }

    fn navigate(&mut self, direction: Direction) -> Outcome {
        let changed = self.engine.advance(direction);
        Outcome {
            changed,
            timer: self.autoplay.reset_phase(),
            ..Outcome::default()
        }
    }

    fn apply_input(&mut self, event: InputEvent) -> Outcome {
        let ctx = BindingContext {
            focused: self.focused,
            active_index: self.engine.active_index(),
            count: self.engine.len(),
        };
        let resolution = self.bindings.resolve(event, ctx);
        let mut outcome = match resolution.binding {
            Binding::Suspend => {
                self.pointer_inside = true;
                Outcome {
                    changed: self.engine.suspend(),
                    ..Outcome::default()
                }
            }
            Binding::Resume => {
                self.pointer_inside = false;
                Outcome {
                    changed: self.engine.resume(),
                    ..Outcome::default()
                }
            }
            Binding::Focus(focused) => {
                self.focused = focused;
                Outcome::default()
            }
            Binding::Navigate(direction) => self.navigate(direction),
            Binding::Open(index) => Outcome {
                request: self.open_request(index),
                ..Outcome::default()
            },
            Binding::Ignore => Outcome::default(),
        };
        outcome.prevent_default = resolution.prevent_default;
        outcome
    }

    fn open_request(&self, index: usize) -> Option<NavigationRequest> {
        let target = self.engine.item(index)?.link()?;
        Some(NavigationRequest {
            key: self.key.clone(),
            index,
            target: target.to_string(),
        })
    }
}
