// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution context: [`KeyboardState`] and the [`ComputingEvaluator`] trait.

use crate::data::KeyData;

bitflags::bitflags! {
    /// Active keyboard state consulted while resolving keys.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyboardState: u16 {
        /// Shift engaged by the user for the next character.
        const SHIFT_MANUAL    = 0b0000_0001;
        /// Shift engaged automatically, for example at the start of a sentence.
        const SHIFT_AUTOMATIC = 0b0000_0010;
        /// Caps lock engaged.
        const CAPS_LOCK       = 0b0000_0100;
        /// Ctrl modifier held.
        const CTRL            = 0b0000_1000;
        /// Alt modifier held.
        const ALT             = 0b0001_0000;
        /// Fn modifier held.
        const FN              = 0b0010_0000;
    }
}

impl KeyboardState {
    /// Whether characters should currently be produced in uppercase.
    pub const fn is_uppercase(self) -> bool {
        self.intersects(
            Self::SHIFT_MANUAL
                .union(Self::SHIFT_AUTOMATIC)
                .union(Self::CAPS_LOCK),
        )
    }
}

/// Context supplied by the host when resolving a key with [`KeyData::compute`].
///
/// Implementations must be callable synchronously and must answer consistently for calls that
/// belong to the same key press.
///
/// `P` is the host's popup set type, carried opaquely by [`KeyData`].
pub trait ComputingEvaluator<P = ()> {
    /// Current keyboard state.
    fn active_state(&self) -> KeyboardState;

    /// Whether `data` is a placeholder whose payload comes from [`slot_data`](Self::slot_data).
    fn is_slot(&self, data: &KeyData<P>) -> bool;

    /// Concrete data to substitute for a slot, or `None` if the slot is currently empty.
    fn slot_data(&self, data: &KeyData<P>) -> Option<KeyData<P>>;
}

/// Evaluator with an empty keyboard state and no slots.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultComputingEvaluator;

impl<P> ComputingEvaluator<P> for DefaultComputingEvaluator {
    fn active_state(&self) -> KeyboardState {
        KeyboardState::empty()
    }

    fn is_slot(&self, _data: &KeyData<P>) -> bool {
        false
    }

    fn slot_data(&self, _data: &KeyData<P>) -> Option<KeyData<P>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_follows_shift_and_caps() {
        assert!(!KeyboardState::empty().is_uppercase());
        assert!(!(KeyboardState::CTRL | KeyboardState::ALT).is_uppercase());
        assert!(KeyboardState::SHIFT_MANUAL.is_uppercase());
        assert!(KeyboardState::SHIFT_AUTOMATIC.is_uppercase());
        assert!((KeyboardState::CAPS_LOCK | KeyboardState::FN).is_uppercase());
    }
}
