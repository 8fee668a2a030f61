//! Interaction bindings
//!
//! Translates raw pointer, touch, keyboard and click input into carousel
//! operations. The translation is a pure function of the event, the
//! instance's own focus flag and its active index; hover and focus are
//! always per-instance state, never page-global.

use serde::{Deserialize, Serialize};

use super::types::{ClickPolicy, Direction, KeyboardScope};

/// Keys the carousel cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Other,
}

/// Raw input scoped to one carousel's root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerEntered,
    PointerLeft,
    TouchStarted,
    TouchEnded,
    FocusGained,
    FocusLost,
    KeyPressed(Key),
    /// Dedicated previous/next affordance.
    ControlPressed(Direction),
    ItemClicked(usize),
}

/// The operation an input event maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Suspend,
    Resume,
    Focus(bool),
    /// Manual navigation; also restarts the autoplay phase.
    Navigate(Direction),
    /// Ask the host to open the item's link.
    Open(usize),
    Ignore,
}

/// A resolved binding plus whether the browser default (page scroll for
/// arrow keys, activation for Enter/Space) must be suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub binding: Binding,
    pub prevent_default: bool,
}

impl Resolution {
    fn handled(binding: Binding) -> Self {
        Self {
            binding,
            prevent_default: true,
        }
    }

    fn passive(binding: Binding) -> Self {
        Self {
            binding,
            prevent_default: false,
        }
    }
}

/// Instance state the bindings consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindingContext {
    pub focused: bool,
    pub active_index: Option<usize>,
    pub count: usize,
}

/// Per-instance input policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionBindings {
    pub click_policy: ClickPolicy,
    pub keyboard: KeyboardScope,
}

impl InteractionBindings {
    pub fn new(click_policy: ClickPolicy, keyboard: KeyboardScope) -> Self {
        Self {
            click_policy,
            keyboard,
        }
    }

    /// Whether key presses currently reach this carousel.
    pub fn accepts_keys(&self, ctx: BindingContext) -> bool {
        match self.keyboard {
            KeyboardScope::Global => true,
            KeyboardScope::Focused => ctx.focused,
            KeyboardScope::Disabled => false,
        }
    }

    pub fn resolve(&self, event: InputEvent, ctx: BindingContext) -> Resolution {
        match event {
            InputEvent::PointerEntered | InputEvent::TouchStarted => {
                Resolution::passive(Binding::Suspend)
            }
            InputEvent::PointerLeft | InputEvent::TouchEnded => {
                Resolution::passive(Binding::Resume)
            }
            InputEvent::FocusGained => Resolution::passive(Binding::Focus(true)),
            InputEvent::FocusLost => Resolution::passive(Binding::Focus(false)),
            InputEvent::ControlPressed(direction) => {
                if ctx.active_index.is_some() {
                    Resolution::handled(Binding::Navigate(direction))
                } else {
                    Resolution::passive(Binding::Ignore)
                }
            }
            InputEvent::KeyPressed(key) => self.resolve_key(key, ctx),
            InputEvent::ItemClicked(index) => match self.resolve_click(index, ctx) {
                Binding::Ignore => Resolution::passive(Binding::Ignore),
                binding => Resolution::handled(binding),
            },
        }
    }

    fn resolve_key(&self, key: Key, ctx: BindingContext) -> Resolution {
        let Some(active) = ctx.active_index else {
            return Resolution::passive(Binding::Ignore);
        };
        if !self.accepts_keys(ctx) {
            return Resolution::passive(Binding::Ignore);
        }
        match key {
            Key::ArrowLeft => Resolution::handled(Binding::Navigate(Direction::Previous)),
            Key::ArrowRight => Resolution::handled(Binding::Navigate(Direction::Next)),
            // Enter/Space activate the active item like a click would.
            Key::Enter | Key::Space => match self.resolve_click(active, ctx) {
                Binding::Ignore => Resolution::passive(Binding::Ignore),
                binding => Resolution::handled(binding),
            },
            Key::Other => Resolution::passive(Binding::Ignore),
        }
    }

    fn resolve_click(&self, index: usize, ctx: BindingContext) -> Binding {
        if index >= ctx.count {
            return Binding::Ignore;
        }
        match self.click_policy {
            ClickPolicy::AdvanceOnFront if ctx.active_index == Some(index) => {
                Binding::Navigate(Direction::Next)
            }
            ClickPolicy::AdvanceOnFront | ClickPolicy::Ignore => Binding::Ignore,
            ClickPolicy::OpenTarget => Binding::Open(index),
        }
    }
}
