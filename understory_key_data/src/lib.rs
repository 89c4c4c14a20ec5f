// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Key Data: immutable soft keyboard key descriptors.
//!
//! ## Overview
//!
//! A key on a virtual keyboard has an identity ([`KeyCode`] and [`KeyType`]), a label, a
//! [`GroupId`], and optionally a popup set of secondary keys. What a key actually produces is
//! not static: a letter key emits `q` or `Q` depending on shift, and a currency key may be a
//! placeholder ("slot") whose symbol depends on the active locale.
//!
//! [`KeyData`] captures this as a closed set of variants:
//!
//! - [`TextKeyData`]: fixed code and label.
//! - [`AutoTextKeyData`]: precomputed lower- and uppercase forms, selected by the active
//!   [`KeyboardState`].
//! - [`MultiTextKeyData`]: a sequence of code points emitted together.
//!
//! ## Resolution
//!
//! The host supplies a [`ComputingEvaluator`] describing the current context. Call
//! [`KeyData::compute`] whenever that context changes; it returns the key to display and emit,
//! or `None` for an empty slot. Then use [`KeyData::as_string`] to obtain either the display
//! text or the text the key emits.
//!
//! ```
//! use understory_key_data::{
//!     DefaultComputingEvaluator, KeyData, KeyType, MultiTextKeyData, TextKeyData,
//! };
//!
//! let delete: KeyData = KeyData::Text(TextKeyData::DELETE);
//! let resolved = delete.compute(&DefaultComputingEvaluator).unwrap();
//! assert_eq!(resolved.as_string(true), "delete");
//!
//! let a_acute: KeyData = MultiTextKeyData::new(KeyType::Character, [0x41, 0x301], "Á").into();
//! assert_eq!(a_acute.as_string(false), "A\u{301}");
//! ```
//!
//! Rendering never fails: code points that are not Unicode scalar values are dropped.
//!
//! ## Case mapping
//!
//! [`AutoTextKeyData`] maps its code with the locale-invariant single code point mapping and its
//! label with full string mapping under a [`CaseLocale`] fixed at construction. See the
//! [`case`] module.
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`KeyData`] in the JSON layout format, tagged by `"$"` with
//!   `text_key`, `auto_text_key`, and `multi_text_key`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod case;
mod code;
mod data;
mod predefined;
mod state;

pub use case::CaseLocale;
pub use code::{GroupId, KeyCode, KeyType};
pub use data::{
    AutoTextKeyData, CodePoints, DOTTED_CIRCLE, KeyData, MultiTextKeyData, TextKeyData,
};
pub use state::{ComputingEvaluator, DefaultComputingEvaluator, KeyboardState};
