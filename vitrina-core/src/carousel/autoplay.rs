//! Autoplay: periodic advance on a fixed cadence
//!
//! [`AutoplayScheduler`] is the pure policy and is what the transition
//! function consults. [`AutoplayTimer`] is its tokio realization and only
//! ever executes the [`TimerAction`]s the policy hands out, so tests can
//! drive the policy with synthetic ticks and never touch a clock.

use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use super::engine::CarouselEngine;
use super::types::Direction;

/// What the hosting timer must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerAction {
    #[default]
    Keep,
    /// Restart the current period from now (manual navigation).
    ResetPhase,
    /// Tear down any running timer and arm a fresh one.
    Rearm { generation: u64 },
    /// Tear down the running timer.
    Disarm,
}

/// Result of delivering one tick to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    /// Suspended: the tick is dropped, never queued.
    Skipped,
    /// No timer is armed (fewer than two items or autoplay disabled).
    Idle,
    /// The tick belongs to a timer that was already torn down.
    Stale,
}

#[derive(Debug, Clone)]
pub struct AutoplayScheduler {
    interval: Duration,
    enabled: bool,
    /// Item count the current timer was armed for.
    armed_count: Option<usize>,
    /// Bumped every time a timer is armed or torn down.
    generation: u64,
}

impl AutoplayScheduler {
    pub fn new(interval: Duration, enabled: bool) -> Self {
        Self {
            interval,
            enabled: enabled && !interval.is_zero(),
            armed_count: None,
            generation: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_armed(&self) -> bool {
        self.armed_count.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reconcile the timer with the current item count.
    ///
    /// A timer runs only for two or more items. Any change of count tears
    /// the old timer down before a new one is armed, so no tick can ever be
    /// evaluated against a stale modulus.
    pub fn sync(&mut self, count: usize) -> TimerAction {
        let wanted = self.enabled && count > 1;
        match (self.armed_count, wanted) {
            (Some(armed), true) if armed == count => TimerAction::Keep,
            (_, true) => {
                self.generation += 1;
                self.armed_count = Some(count);
                log::debug!(
                    "Autoplay armed for {count} items every {:?} (generation {})",
                    self.interval,
                    self.generation
                );
                TimerAction::Rearm {
                    generation: self.generation,
                }
            }
            (Some(_), false) => self.disarm(),
            (None, false) => TimerAction::Keep,
        }
    }

    /// Restart the cadence after a manual navigation.
    pub fn reset_phase(&self) -> TimerAction {
        if self.is_armed() {
            TimerAction::ResetPhase
        } else {
            TimerAction::Keep
        }
    }

    /// Tear down the timer (unmount or empty content).
    pub fn disarm(&mut self) -> TimerAction {
        if self.armed_count.take().is_none() {
            return TimerAction::Keep;
        }
        self.generation += 1;
        log::debug!("Autoplay disarmed (generation {})", self.generation);
        TimerAction::Disarm
    }

    /// Deliver one tick from the timer armed as `generation`.
    pub fn on_tick<T>(
        &self,
        engine: &mut CarouselEngine<T>,
        generation: u64,
    ) -> TickOutcome {
        let Some(armed) = self.armed_count else {
            return TickOutcome::Idle;
        };
        if generation != self.generation || armed != engine.len() {
            // Teardown happens before any count change; reaching this means
            // a timer escaped its teardown.
            log::warn!(
                "Dropping stale autoplay tick (tick generation {generation}, current {}, armed for {armed}, items {})",
                self.generation,
                engine.len()
            );
            return TickOutcome::Stale;
        }
        if engine.is_suspended() {
            return TickOutcome::Skipped;
        }
        engine.advance(Direction::Next);
        TickOutcome::Advanced
    }
}

/// Tokio interval that executes [`TimerAction`]s.
///
/// The first tick of a freshly armed timer lands one full period after
/// arming. A disarmed timer's [`tick`](Self::tick) never resolves, which
/// lets it sit in a `select!` unconditionally.
#[derive(Debug, Default)]
pub struct AutoplayTimer {
    interval: Option<Interval>,
    generation: u64,
}

impl AutoplayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    pub fn apply(&mut self, action: TimerAction, period: Duration) {
        match action {
            TimerAction::Keep => {}
            TimerAction::ResetPhase => {
                if let Some(interval) = self.interval.as_mut() {
                    interval.reset();
                }
            }
            TimerAction::Rearm { generation } => {
                // Old interval is dropped here, before the new one exists.
                self.interval = None;
                if period.is_zero() {
                    return;
                }
                let mut interval = interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.interval = Some(interval);
                self.generation = generation;
            }
            TimerAction::Disarm => {
                self.interval = None;
            }
        }
    }

    /// Wait for the next tick and return the generation it belongs to.
    pub async fn tick(&mut self) -> u64 {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
                self.generation
            }
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Duration = Duration::from_millis(4_000);

    fn armed(count: usize) -> (AutoplayScheduler, CarouselEngine<usize>) {
        let mut scheduler = AutoplayScheduler::new(T, true);
        let engine = CarouselEngine::with_items((0..count).collect());
        scheduler.sync(engine.len());
        (scheduler, engine)
    }

    #[test]
    fn arms_only_for_two_or_more_items() {
        let mut scheduler = AutoplayScheduler::new(T, true);
        assert_eq!(scheduler.sync(0), TimerAction::Keep);
        assert_eq!(scheduler.sync(1), TimerAction::Keep);
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.sync(2), TimerAction::Rearm { generation: 1 });
        assert!(scheduler.is_armed());
    }

    #[test]
    fn count_change_rearms_and_same_count_keeps() {
        let (mut scheduler, _) = armed(5);
        assert_eq!(scheduler.sync(5), TimerAction::Keep);
        assert_eq!(scheduler.sync(3), TimerAction::Rearm { generation: 2 });
        assert_eq!(scheduler.sync(1), TimerAction::Disarm);
        assert_eq!(scheduler.generation(), 3);
    }

    #[test]
    fn disabled_scheduler_never_arms() {
        let mut scheduler = AutoplayScheduler::new(T, false);
        assert_eq!(scheduler.sync(5), TimerAction::Keep);
        let zero = AutoplayScheduler::new(Duration::ZERO, true);
        assert!(!zero.is_enabled());
    }

    #[test]
    fn tick_advances_unless_suspended() {
        let (scheduler, mut engine) = armed(5);
        let generation = scheduler.generation();
        assert_eq!(scheduler.on_tick(&mut engine, generation), TickOutcome::Advanced);
        assert_eq!(engine.active_index(), Some(1));

        engine.suspend();
        for _ in 0..10 {
            assert_eq!(scheduler.on_tick(&mut engine, generation), TickOutcome::Skipped);
        }
        assert_eq!(engine.active_index(), Some(1));
    }

    #[test]
    fn stale_generation_is_dropped() {
        let (mut scheduler, mut engine) = armed(5);
        let old = scheduler.generation();
        engine.initialize((0..3).collect());
        scheduler.sync(engine.len());

        assert_eq!(scheduler.on_tick(&mut engine, old), TickOutcome::Stale);
        assert_eq!(engine.active_index(), Some(0));
    }

    #[test]
    fn tick_without_timer_is_idle() {
        let mut scheduler = AutoplayScheduler::new(T, true);
        let mut engine = CarouselEngine::with_items(vec![1]);
        scheduler.sync(engine.len());
        assert_eq!(scheduler.on_tick(&mut engine, 0), TickOutcome::Idle);
        assert_eq!(engine.active_index(), Some(0));
    }

    #[test]
    fn reset_phase_only_when_armed() {
        let mut scheduler = AutoplayScheduler::new(T, true);
        assert_eq!(scheduler.reset_phase(), TimerAction::Keep);
        scheduler.sync(3);
        assert_eq!(scheduler.reset_phase(), TimerAction::ResetPhase);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_first_tick_is_one_period_out() {
        let mut timer = AutoplayTimer::new();
        let start = Instant::now();
        timer.apply(TimerAction::Rearm { generation: 7 }, T);
        assert_eq!(timer.tick().await, 7);
        let elapsed = start.elapsed();
        assert!(elapsed >= T && elapsed < T * 2, "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_timer_never_fires() {
        let mut timer = AutoplayTimer::new();
        timer.apply(TimerAction::Rearm { generation: 1 }, T);
        timer.apply(TimerAction::Disarm, T);
        let fired = tokio::time::timeout(T * 3, timer.tick()).await;
        assert!(fired.is_err());
    }
}
