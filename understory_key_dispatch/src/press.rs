// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clock-agnostic state machine for a single key press.
//!
//! [`KeyPress`] owns the Idle/Held state of one pointer and the repeat schedule of the key it
//! holds. It does not own a timer: repeat deadlines are offsets from the moment of the press,
//! and the caller decides when to call [`KeyPress::fire_repeat`]. The
//! [`Dispatcher`](crate::Dispatcher) drives it from a runtime timer; tests and hosts with their
//! own frame clock can drive it directly.
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use understory_key_data::{KeyData, TextKeyData};
//! use understory_key_dispatch::{KeyAction, KeyPress, RepeatConfig};
//!
//! let mut press: KeyPress = KeyPress::new(RepeatConfig::default());
//! let delete = Arc::new(KeyData::Text(TextKeyData::DELETE));
//!
//! let down = press.press(delete);
//! assert_eq!(down[0].action(), KeyAction::Down);
//!
//! // Nothing is due before the initial delay.
//! assert!(press.fire_repeat(Duration::from_millis(299)).is_none());
//! let repeat = press.fire_repeat(Duration::from_millis(300)).unwrap();
//! assert_eq!(repeat.action(), KeyAction::Repeat);
//! assert_eq!(press.next_repeat_at(), Some(Duration::from_millis(350)));
//!
//! assert_eq!(press.release().unwrap().action(), KeyAction::Up);
//! assert!(press.release().is_none());
//! ```
//!
//! ## Rules
//!
//! 1. `press` emits `Down` and arms the first repeat at the configured delay. Pressing while
//!    already held first emits `Cancel` for the previous key.
//! 2. `fire_repeat` emits `Repeat` once the deadline has passed and schedules the next one
//!    strictly after the given time. Ticks missed by a late caller are skipped, not replayed.
//! 3. `release` emits `Up`, `cancel` emits `Cancel`. Both disarm the schedule and are no-ops
//!    while idle.

use std::fmt;
use std::mem;
use std::sync::Arc;
use std::time::Duration;

use smallvec::SmallVec;
use understory_key_data::KeyData;

use crate::config::RepeatConfig;
use crate::event::InputKeyEvent;

/// Events produced by [`KeyPress::press`]: at most a `Cancel` for the previous key and a `Down`.
pub type PressEvents<P> = SmallVec<[InputKeyEvent<P>; 2]>;

/// Idle/Held state machine for one pointer.
pub struct KeyPress<P = ()> {
    repeat: RepeatConfig,
    phase: Phase<P>,
}

enum Phase<P> {
    Idle,
    Held(Held<P>),
}

struct Held<P> {
    data: Arc<KeyData<P>>,
    repeats: u32,
    /// Offset from the press at which the next repeat is due; `None` when disarmed.
    next_repeat: Option<Duration>,
}

impl<P> KeyPress<P> {
    /// An idle press using `repeat` for its schedule.
    pub fn new(repeat: RepeatConfig) -> Self {
        Self {
            repeat,
            phase: Phase::Idle,
        }
    }

    /// Start holding `data`.
    pub fn press(&mut self, data: Arc<KeyData<P>>) -> PressEvents<P> {
        let mut events = PressEvents::new();
        if let Some(cancel) = self.cancel() {
            events.push(cancel);
        }
        let next_repeat = self.repeat.enabled.then(|| self.repeat.delay());
        self.phase = Phase::Held(Held {
            data: Arc::clone(&data),
            repeats: 0,
            next_repeat,
        });
        events.push(InputKeyEvent::down(data));
        events
    }

    /// Release the held key. Returns `None` while idle.
    pub fn release(&mut self) -> Option<InputKeyEvent<P>> {
        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Held(held) => Some(InputKeyEvent::up(held.data)),
            Phase::Idle => None,
        }
    }

    /// Abandon the held key. Returns `None` while idle.
    pub fn cancel(&mut self) -> Option<InputKeyEvent<P>> {
        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Held(held) => Some(InputKeyEvent::cancel(held.data)),
            Phase::Idle => None,
        }
    }

    /// Offset from the press at which the next repeat is due, if one is armed.
    pub fn next_repeat_at(&self) -> Option<Duration> {
        match &self.phase {
            Phase::Held(held) => held.next_repeat,
            Phase::Idle => None,
        }
    }

    /// Emit a repeat if one is due `elapsed` after the press.
    pub fn fire_repeat(&mut self, elapsed: Duration) -> Option<InputKeyEvent<P>> {
        let Phase::Held(held) = &mut self.phase else {
            return None;
        };
        let due = held.next_repeat?;
        if elapsed < due {
            return None;
        }
        let interval = self.repeat.interval();
        held.next_repeat = if interval.is_zero() {
            None
        } else {
            let missed = (elapsed - due).as_nanos() / interval.as_nanos();
            let ticks = u32::try_from(missed + 1).unwrap_or(u32::MAX);
            Some(due.saturating_add(interval.saturating_mul(ticks)))
        };
        held.repeats = held.repeats.saturating_add(1);
        Some(InputKeyEvent::repeat(Arc::clone(&held.data)))
    }

    /// Whether a key is held.
    pub fn is_held(&self) -> bool {
        matches!(self.phase, Phase::Held(_))
    }

    /// The held key, if any.
    pub fn data(&self) -> Option<&Arc<KeyData<P>>> {
        match &self.phase {
            Phase::Held(held) => Some(&held.data),
            Phase::Idle => None,
        }
    }

    /// Number of repeats emitted for the current press.
    pub fn repeat_count(&self) -> u32 {
        match &self.phase {
            Phase::Held(held) => held.repeats,
            Phase::Idle => 0,
        }
    }
}

impl<P> fmt::Debug for KeyPress<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPress")
            .field("repeat", &self.repeat)
            .field("held", &self.data())
            .field("repeats", &self.repeat_count())
            .field("next_repeat", &self.next_repeat_at())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyAction;
    use proptest::prelude::*;
    use understory_key_data::{KeyCode, KeyType, TextKeyData};

    fn key(c: char) -> Arc<KeyData> {
        Arc::new(KeyData::Text(TextKeyData::new(
            KeyType::Character,
            KeyCode::from_char(c),
            c.to_string(),
        )))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn actions(events: &[InputKeyEvent]) -> Vec<KeyAction> {
        events.iter().map(InputKeyEvent::action).collect()
    }

    #[test]
    fn release_and_cancel_while_idle_are_noops() {
        let mut press: KeyPress = KeyPress::new(RepeatConfig::default());
        assert!(press.release().is_none());
        assert!(press.cancel().is_none());
        assert!(press.fire_repeat(ms(10_000)).is_none());
        assert!(!press.is_held());
    }

    #[test]
    fn repeats_follow_delay_then_interval() {
        let mut press: KeyPress = KeyPress::new(RepeatConfig::default());
        let k = key('x');
        assert_eq!(actions(&press.press(k.clone())), [KeyAction::Down]);
        assert_eq!(press.next_repeat_at(), Some(ms(300)));

        assert!(press.fire_repeat(ms(100)).is_none());
        let first = press.fire_repeat(ms(300)).unwrap();
        assert_eq!(first.action(), KeyAction::Repeat);
        assert!(Arc::ptr_eq(first.data(), &k));
        assert!(press.fire_repeat(ms(320)).is_none());
        assert!(press.fire_repeat(ms(350)).is_some());
        assert_eq!(press.repeat_count(), 2);
        assert_eq!(press.next_repeat_at(), Some(ms(400)));

        let up = press.release().unwrap();
        assert_eq!(up.action(), KeyAction::Up);
        assert!(Arc::ptr_eq(up.data(), &k));
        assert_eq!(press.next_repeat_at(), None);
        assert_eq!(press.repeat_count(), 0);
    }

    #[test]
    fn late_caller_skips_missed_ticks() {
        let mut press: KeyPress = KeyPress::new(RepeatConfig::default());
        press.press(key('x'));
        // Due at 300; caller shows up at 480, past the ticks at 350, 400 and 450.
        assert!(press.fire_repeat(ms(480)).is_some());
        assert_eq!(press.next_repeat_at(), Some(ms(500)));
        assert!(press.fire_repeat(ms(480)).is_none());
        // Landing exactly on a tick still schedules strictly after it.
        assert!(press.fire_repeat(ms(550)).is_some());
        assert_eq!(press.next_repeat_at(), Some(ms(600)));
        assert_eq!(press.repeat_count(), 2);
    }

    #[test]
    fn disabled_repeat_never_arms() {
        let mut press: KeyPress = KeyPress::new(RepeatConfig::DISABLED);
        press.press(key('x'));
        assert_eq!(press.next_repeat_at(), None);
        assert!(press.fire_repeat(ms(10_000)).is_none());
        assert_eq!(press.cancel().unwrap().action(), KeyAction::Cancel);
    }

    #[test]
    fn zero_interval_fires_once() {
        let mut press: KeyPress = KeyPress::new(RepeatConfig {
            enabled: true,
            delay_ms: 300,
            interval_ms: 0,
        });
        press.press(key('x'));
        assert!(press.fire_repeat(ms(300)).is_some());
        assert_eq!(press.next_repeat_at(), None);
        assert!(press.fire_repeat(ms(10_000)).is_none());
    }

    #[test]
    fn pressing_while_held_cancels_previous_key() {
        let mut press: KeyPress = KeyPress::new(RepeatConfig::default());
        let a = key('a');
        let b = key('b');
        press.press(a.clone());
        press.fire_repeat(ms(300));
        let events = press.press(b.clone());
        assert_eq!(actions(&events), [KeyAction::Cancel, KeyAction::Down]);
        assert!(Arc::ptr_eq(events[0].data(), &a));
        assert!(Arc::ptr_eq(events[1].data(), &b));
        assert_eq!(press.repeat_count(), 0);
        assert_eq!(press.next_repeat_at(), Some(ms(300)));
    }

    #[derive(Clone, Debug)]
    enum Op {
        Press,
        Release,
        Cancel,
        Advance(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Press),
            Just(Op::Release),
            Just(Op::Cancel),
            (0_u64..400).prop_map(Op::Advance),
        ]
    }

    proptest! {
        // Every press produces Down, any number of Repeats, then exactly one Up or Cancel.
        #[test]
        fn lifecycle_is_well_formed(ops in prop::collection::vec(op(), 0..64)) {
            let mut press: KeyPress = KeyPress::new(RepeatConfig::default());
            let mut elapsed = Duration::ZERO;
            let mut stream = Vec::new();
            for op in ops {
                match op {
                    Op::Press => {
                        elapsed = Duration::ZERO;
                        stream.extend(actions(&press.press(key('k'))));
                    }
                    Op::Release => stream.extend(press.release().map(|e| e.action())),
                    Op::Cancel => stream.extend(press.cancel().map(|e| e.action())),
                    Op::Advance(step) => {
                        elapsed += ms(step);
                        while let Some(e) = press.fire_repeat(elapsed) {
                            stream.push(e.action());
                        }
                    }
                }
            }
            stream.extend(press.cancel().map(|e| e.action()));

            let mut held = false;
            for action in stream {
                match action {
                    KeyAction::Down => {
                        prop_assert!(!held, "down while held");
                        held = true;
                    }
                    KeyAction::Repeat => prop_assert!(held, "repeat outside a press"),
                    KeyAction::Up | KeyAction::Cancel => {
                        prop_assert!(held, "terminal event outside a press");
                        held = false;
                    }
                }
            }
            prop_assert!(!held);
        }
    }
}
