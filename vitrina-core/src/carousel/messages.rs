//! Messages accepted by a carousel instance.
//!
//! Timer ticks and user input share this one type so the transition
//! function has a single entry point regardless of what triggered it.

use super::bindings::InputEvent;
use super::types::Direction;
use crate::loader::LoadState;

#[derive(Debug, Clone)]
pub enum CarouselMessage<T> {
    /// New observation from the resource loader.
    Content(LoadState<Vec<T>>),
    /// Autoplay tick from the timer armed as the given generation.
    Tick(u64),
    Advance(Direction),
    GoTo(isize),
    Suspend,
    Resume,
    Input(InputEvent),
}

impl<T> From<InputEvent> for CarouselMessage<T> {
    fn from(event: InputEvent) -> Self {
        Self::Input(event)
    }
}

impl<T> From<LoadState<Vec<T>>> for CarouselMessage<T> {
    fn from(state: LoadState<Vec<T>>) -> Self {
        Self::Content(state)
    }
}
