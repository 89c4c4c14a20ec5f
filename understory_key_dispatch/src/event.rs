// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key lifecycle events and the consumer they are delivered to.

use std::fmt;
use std::sync::Arc;

use understory_key_data::KeyData;

/// One step in a key press lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// The key was pressed.
    Down,
    /// The key was released normally.
    Up,
    /// The key is still held and the repeat timer fired.
    Repeat,
    /// The press was abandoned, for example because the gesture was consumed elsewhere.
    Cancel,
}

impl KeyAction {
    /// Whether this action ends a press.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// A lifecycle action tied to the key it concerns.
pub struct InputKeyEvent<P = ()> {
    action: KeyAction,
    data: Arc<KeyData<P>>,
}

impl<P> InputKeyEvent<P> {
    /// A [`KeyAction::Down`] event.
    pub fn down(data: Arc<KeyData<P>>) -> Self {
        Self {
            action: KeyAction::Down,
            data,
        }
    }

    /// A [`KeyAction::Up`] event.
    pub fn up(data: Arc<KeyData<P>>) -> Self {
        Self {
            action: KeyAction::Up,
            data,
        }
    }

    /// A [`KeyAction::Repeat`] event.
    pub fn repeat(data: Arc<KeyData<P>>) -> Self {
        Self {
            action: KeyAction::Repeat,
            data,
        }
    }

    /// A [`KeyAction::Cancel`] event.
    pub fn cancel(data: Arc<KeyData<P>>) -> Self {
        Self {
            action: KeyAction::Cancel,
            data,
        }
    }

    /// The action.
    pub fn action(&self) -> KeyAction {
        self.action
    }

    /// The key the action concerns.
    pub fn data(&self) -> &Arc<KeyData<P>> {
        &self.data
    }
}

impl<P> Clone for InputKeyEvent<P> {
    fn clone(&self) -> Self {
        Self {
            action: self.action,
            data: Arc::clone(&self.data),
        }
    }
}

impl<P> PartialEq for InputKeyEvent<P> {
    fn eq(&self, other: &Self) -> bool {
        self.action == other.action
            && (Arc::ptr_eq(&self.data, &other.data) || *self.data == *other.data)
    }
}

impl<P> fmt::Debug for InputKeyEvent<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputKeyEvent")
            .field("action", &self.action)
            .field("data", &self.data)
            .finish()
    }
}

/// Receiver of dispatched events, typically the text editing layer.
///
/// Events are delivered synchronously, possibly from a runtime worker thread when the repeat
/// timer fires. Delivery for a press happens while that press is locked, so an implementation
/// must not call back into the [`PointerHandle`](crate::PointerHandle) it is being notified
/// about, nor shut down the dispatcher.
pub trait InputKeyEventConsumer<P>: Send + Sync {
    /// Handle one event.
    fn on_input_key_event(&self, event: &InputKeyEvent<P>);
}

impl<P, F> InputKeyEventConsumer<P> for F
where
    F: Fn(&InputKeyEvent<P>) + Send + Sync,
{
    fn on_input_key_event(&self, event: &InputKeyEvent<P>) {
        self(event);
    }
}
