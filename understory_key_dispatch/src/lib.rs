// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Key Dispatch: turn pointer presses on keys into a well-formed event stream.
//!
//! ## Overview
//!
//! Each pointer (finger, stylus, mouse) holding a soft keyboard key runs an independent
//! lifecycle:
//!
//! ```text
//! Down Repeat* (Up | Cancel)
//! ```
//!
//! `Down` is emitted on press. While the key stays held, `Repeat` is emitted after an initial
//! delay and then at a fixed interval. The press ends with exactly one `Up` (released) or
//! `Cancel` (abandoned), and no `Repeat` follows it.
//!
//! - [`KeyPress`]: the lifecycle of one pointer as a clock-agnostic state machine. Repeat
//!   deadlines are offsets from the press; the caller supplies elapsed time.
//! - [`Dispatcher`]: owns a [`KeyPress`] per [`PointerId`], drives repeats from timers spawned
//!   on a Tokio runtime, and hands every event to one [`InputKeyEventConsumer`].
//! - [`DispatchConfig`]: repeat timing, loadable from TOML.
//!
//! Events carry the key as an `Arc<`[`KeyData`](understory_key_data::KeyData)`>`, usually the
//! result of resolving a layout key with
//! [`KeyData::compute`](understory_key_data::KeyData::compute) at press time.
//!
//! ## Misuse
//!
//! Releasing or cancelling a pointer that holds nothing is a no-op, logged at debug level.
//! Pressing a pointer that already holds a key cancels that key before the new `Down`.
//! Only construction can fail, on invalid configuration or a runtime without timers; see
//! [`ConfigError`].
//!
//! ## Logging
//!
//! The dispatcher emits `tracing` events: `trace` for each delivered event and `debug` for
//! ignored calls and teardown.

mod config;
mod dispatcher;
mod event;
mod press;

pub use config::{ConfigError, DispatchConfig, RepeatConfig};
pub use dispatcher::{Dispatcher, PointerHandle, PointerId};
pub use event::{InputKeyEvent, InputKeyEventConsumer, KeyAction};
pub use press::{KeyPress, PressEvents};
