// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pointer key dispatch with timed auto-repeat.
//!
//! A [`Dispatcher`] keeps one press slot for every pointer that currently holds a key. Each
//! slot wraps a [`KeyPress`] behind a mutex together with a handle to the timer task that fires
//! its repeats. Press, release, cancel and timer firings for the same pointer are serialized by
//! that mutex, and every event is handed to the consumer while it is held. Stopping a timer
//! bumps the slot generation before aborting the task, so a timer that already woke up sees the
//! new generation and exits without emitting.
//!
//! A slot is created by the press that needs it and retired by the release or cancel that ends
//! the press, so pointers that come and go leave nothing behind.
//!
//! ```
//! use std::num::NonZeroU64;
//! use std::sync::{Arc, Mutex};
//! use understory_key_data::{KeyData, TextKeyData};
//! use understory_key_dispatch::{DispatchConfig, Dispatcher, InputKeyEvent, KeyAction};
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .build()
//!     .unwrap();
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&log);
//! let dispatcher = Dispatcher::new(
//!     runtime.handle().clone(),
//!     DispatchConfig::default(),
//!     move |event: &InputKeyEvent| sink.lock().unwrap().push(event.action()),
//! )
//! .unwrap();
//!
//! let finger = dispatcher.pointer(NonZeroU64::new(1).unwrap());
//! finger.press(Arc::new(KeyData::Text(TextKeyData::DELETE)));
//! finger.release();
//! finger.release();
//!
//! assert_eq!(*log.lock().unwrap(), [KeyAction::Down, KeyAction::Up]);
//! ```

use std::fmt;
use std::mem;
use std::num::NonZeroU64;
use std::panic;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use hashbrown::HashMap;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use understory_key_data::KeyData;

use crate::config::{ConfigError, DispatchConfig};
use crate::event::{InputKeyEvent, InputKeyEventConsumer};
use crate::press::KeyPress;

/// Identifier of a touch point or other pointer holding keys.
pub type PointerId = NonZeroU64;

/// Routes key presses from any number of pointers to one consumer.
///
/// Cloning is cheap and every clone shares the same slots. Dropping the last clone, together
/// with every [`PointerHandle`] obtained from it, cancels the presses still held.
pub struct Dispatcher<P = ()> {
    shared: Arc<Shared<P>>,
}

type SlotMap<P> = HashMap<PointerId, Arc<PressSlot<P>>>;

struct Shared<P> {
    runtime: Handle,
    config: DispatchConfig,
    consumer: Arc<dyn InputKeyEventConsumer<P>>,
    slots: Mutex<SlotMap<P>>,
}

struct PressSlot<P> {
    state: Mutex<SlotState<P>>,
}

struct SlotState<P> {
    press: KeyPress<P>,
    pressed_at: Instant,
    generation: u64,
    timer: Option<JoinHandle<()>>,
    /// Set when the slot leaves the map; a retired slot never accepts another press.
    retired: bool,
}

impl<P> SlotState<P> {
    fn stop_timer(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn is_held(&self) -> bool {
        !self.retired && self.press.is_held()
    }
}

impl<P> PressSlot<P> {
    fn new(config: &DispatchConfig) -> Self {
        Self {
            state: Mutex::new(SlotState {
                press: KeyPress::new(config.repeat),
                pressed_at: Instant::now(),
                generation: 0,
                timer: None,
                retired: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotState<P>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P> Shared<P> {
    // Lock order: a slot may be locked before the map, never after it.
    fn slots(&self) -> MutexGuard<'_, SlotMap<P>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, pointer: PointerId) -> Option<Arc<PressSlot<P>>> {
        self.slots().get(&pointer).map(Arc::clone)
    }

    fn slot_or_insert(&self, pointer: PointerId) -> Arc<PressSlot<P>> {
        let mut slots = self.slots();
        Arc::clone(
            slots
                .entry(pointer)
                .or_insert_with(|| Arc::new(PressSlot::new(&self.config))),
        )
    }

    /// Mark `slot` retired and drop it from the map. The caller holds the slot lock.
    fn retire(&self, pointer: PointerId, slot: &Arc<PressSlot<P>>, state: &mut SlotState<P>) {
        state.retired = true;
        let mut slots = self.slots();
        if slots.get(&pointer).is_some_and(|s| Arc::ptr_eq(s, slot)) {
            slots.remove(&pointer);
        }
    }

    fn end_press(
        &self,
        pointer: PointerId,
        action: fn(&mut KeyPress<P>) -> Option<InputKeyEvent<P>>,
    ) {
        let Some(slot) = self.slot(pointer) else {
            tracing::debug!(pointer = pointer.get(), "no key held");
            return;
        };
        let mut state = slot.lock();
        if state.retired {
            tracing::debug!(pointer = pointer.get(), "no key held");
            return;
        }
        state.stop_timer();
        match action(&mut state.press) {
            Some(event) => {
                emit(&*self.consumer, pointer, &event);
                self.retire(pointer, &slot, &mut state);
            }
            None => tracing::debug!(pointer = pointer.get(), "no key held"),
        }
    }

    fn cancel_all(&self) {
        let slots = mem::take(&mut *self.slots());
        for (pointer, slot) in slots {
            let mut state = slot.lock();
            state.stop_timer();
            state.retired = true;
            if let Some(event) = state.press.cancel() {
                tracing::debug!(pointer = pointer.get(), "cancelling held key on teardown");
                emit(&*self.consumer, pointer, &event);
            }
        }
    }
}

impl<P> Drop for Shared<P> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

fn emit<P>(consumer: &dyn InputKeyEventConsumer<P>, pointer: PointerId, event: &InputKeyEvent<P>) {
    tracing::trace!(
        pointer = pointer.get(),
        action = ?event.action(),
        code = event.data().code().0,
        "key event"
    );
    consumer.on_input_key_event(event);
}

/// Whether timers can be created on `runtime`.
///
/// Tokio panics when a timer is created on a runtime built without `enable_time`, and inside a
/// spawned task that panic would only abort the task.
fn has_time_driver(runtime: &Handle) -> bool {
    let _entered = runtime.enter();
    panic::catch_unwind(|| drop(time::sleep(Duration::ZERO))).is_ok()
}

async fn repeat_timer<P>(
    slot: Arc<PressSlot<P>>,
    consumer: Arc<dyn InputKeyEventConsumer<P>>,
    pointer: PointerId,
    generation: u64,
    pressed_at: Instant,
) {
    loop {
        let due = {
            let state = slot.lock();
            if state.generation != generation {
                return;
            }
            match state.press.next_repeat_at() {
                Some(due) => due,
                None => return,
            }
        };
        time::sleep_until(pressed_at + due).await;
        {
            let mut state = slot.lock();
            if state.generation != generation {
                return;
            }
            let elapsed = Instant::now().saturating_duration_since(pressed_at);
            if let Some(event) = state.press.fire_repeat(elapsed) {
                emit(&*consumer, pointer, &event);
            }
        }
    }
}

impl<P: Send + Sync + 'static> Dispatcher<P> {
    /// Create a dispatcher delivering every event to `consumer`.
    ///
    /// Repeat timers are spawned on `runtime`. When repeat is enabled the runtime must have its
    /// time driver enabled, otherwise [`ConfigError::TimeDriverDisabled`] is returned.
    pub fn new(
        runtime: Handle,
        config: DispatchConfig,
        consumer: impl InputKeyEventConsumer<P> + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.repeat.enabled && !has_time_driver(&runtime) {
            return Err(ConfigError::TimeDriverDisabled);
        }
        Ok(Self {
            shared: Arc::new(Shared {
                runtime,
                config,
                consumer: Arc::new(consumer),
                slots: Mutex::new(HashMap::new()),
            }),
        })
    }
}

impl<P> Dispatcher<P> {
    /// The handle through which `pointer` presses and releases keys.
    pub fn pointer(&self, pointer: PointerId) -> PointerHandle<P> {
        PointerHandle {
            shared: Arc::clone(&self.shared),
            pointer,
        }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &DispatchConfig {
        &self.shared.config
    }

    /// Whether `pointer` currently holds a key.
    pub fn is_pressed(&self, pointer: PointerId) -> bool {
        self.shared
            .slot(pointer)
            .is_some_and(|slot| slot.lock().is_held())
    }

    /// Number of pointers currently holding a key.
    pub fn active_presses(&self) -> usize {
        let slots: Vec<_> = self.shared.slots().values().map(Arc::clone).collect();
        slots.iter().filter(|slot| slot.lock().is_held()).count()
    }

    /// Cancel every held key and stop its repeat timer.
    ///
    /// The dispatcher stays usable; later presses start new lifecycles.
    pub fn shutdown(&self) {
        tracing::debug!("dispatcher shutdown");
        self.shared.cancel_all();
    }
}

impl<P> Clone for Dispatcher<P> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<P> fmt::Debug for Dispatcher<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.shared.config)
            .field("active_presses", &self.active_presses())
            .finish_non_exhaustive()
    }
}

/// Press, release and cancel keys for one pointer.
///
/// A handle is only the pointer id bound to its dispatcher. Handles for the same pointer are
/// interchangeable, so a key pressed through one handle can be released through another.
pub struct PointerHandle<P = ()> {
    shared: Arc<Shared<P>>,
    pointer: PointerId,
}

impl<P: Send + Sync + 'static> PointerHandle<P> {
    /// Press `data`, emitting `Down` and arming the repeat timer.
    ///
    /// If this pointer already holds a key, that key is cancelled first.
    pub fn press(&self, data: Arc<KeyData<P>>) {
        // A slot retired between lookup and lock has already left the map, so the next lookup
        // yields a fresh one.
        loop {
            let slot = self.shared.slot_or_insert(self.pointer);
            let mut state = slot.lock();
            if state.retired {
                continue;
            }
            state.stop_timer();
            let events = state.press.press(data);
            state.pressed_at = Instant::now();
            for event in &events {
                emit(&*self.shared.consumer, self.pointer, event);
            }
            if state.press.next_repeat_at().is_some() {
                let timer = repeat_timer(
                    Arc::clone(&slot),
                    Arc::clone(&self.shared.consumer),
                    self.pointer,
                    state.generation,
                    state.pressed_at,
                );
                state.timer = Some(self.shared.runtime.spawn(timer));
            }
            return;
        }
    }
}

impl<P> PointerHandle<P> {
    /// Release the held key, emitting `Up`. Does nothing if no key is held.
    pub fn release(&self) {
        self.shared.end_press(self.pointer, KeyPress::release);
    }

    /// Abandon the held key, emitting `Cancel`. Does nothing if no key is held.
    pub fn cancel(&self) {
        self.shared.end_press(self.pointer, KeyPress::cancel);
    }

    /// The pointer this handle drives.
    pub fn pointer_id(&self) -> PointerId {
        self.pointer
    }

    /// Whether this pointer currently holds a key.
    pub fn is_pressed(&self) -> bool {
        self.shared
            .slot(self.pointer)
            .is_some_and(|slot| slot.lock().is_held())
    }
}

impl<P> Clone for PointerHandle<P> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            pointer: self.pointer,
        }
    }
}

impl<P> fmt::Debug for PointerHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHandle")
            .field("pointer", &self.pointer)
            .field("pressed", &self.is_pressed())
            .finish_non_exhaustive()
    }
}
