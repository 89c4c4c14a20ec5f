// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key descriptors and their resolution.
//!
//! [`KeyData`] is a closed set of variants. Each variant decides for itself how it resolves
//! against a [`ComputingEvaluator`] and how it renders as text:
//!
//! | Variant | [`compute`](KeyData::compute) |
//! |---|---|
//! | [`KeyData::Text`] | slot substitution, otherwise itself |
//! | [`KeyData::AutoText`] | slot substitution, otherwise its upper- or lowercase form |
//! | [`KeyData::MultiText`] | always itself |
//!
//! Slot substitution takes the type, code and label from the evaluator's slot data but keeps
//! the original group and popup. An empty slot resolves to `None` and the key should be
//! treated as unavailable.
//!
//! ```
//! use understory_key_data::{
//!     AutoTextKeyData, ComputingEvaluator, KeyCode, KeyData, KeyType, KeyboardState,
//! };
//!
//! struct Shifted;
//!
//! impl ComputingEvaluator for Shifted {
//!     fn active_state(&self) -> KeyboardState {
//!         KeyboardState::SHIFT_MANUAL
//!     }
//!     fn is_slot(&self, _: &KeyData) -> bool {
//!         false
//!     }
//!     fn slot_data(&self, _: &KeyData) -> Option<KeyData> {
//!         None
//!     }
//! }
//!
//! let q: KeyData = AutoTextKeyData::new(KeyType::Character, KeyCode::from_char('q'), "q").into();
//! let resolved = q.compute(&Shifted).unwrap();
//! assert_eq!(resolved.code(), KeyCode::from_char('Q'));
//! assert_eq!(resolved.as_string(false), "Q");
//! assert_eq!(resolved.as_string(true), "Q");
//! ```

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use smallvec::SmallVec;

use crate::case::{self, CaseLocale};
use crate::code::{GroupId, KeyCode, KeyType};
use crate::state::ComputingEvaluator;

/// Placeholder glyph shown in front of a combining mark so it has something to attach to.
pub const DOTTED_CIRCLE: char = '◌';

/// Code points of a [`MultiTextKeyData`].
pub type CodePoints = SmallVec<[i32; 4]>;

/// A key's identity and rendering, resolved against context with [`compute`](Self::compute).
///
/// `P` is the host's popup set type. It is only carried along, never inspected.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "$"),
    serde(bound(
        serialize = "P: serde::Serialize",
        deserialize = "P: serde::Deserialize<'de>"
    ))
)]
pub enum KeyData<P = ()> {
    /// Fixed code and label.
    #[cfg_attr(feature = "serde", serde(rename = "text_key"))]
    Text(TextKeyData<P>),
    /// Code and label follow the active case state.
    #[cfg_attr(feature = "serde", serde(rename = "auto_text_key"))]
    AutoText(AutoTextKeyData<P>),
    /// Emits several code points at once.
    #[cfg_attr(feature = "serde", serde(rename = "multi_text_key"))]
    MultiText(MultiTextKeyData<P>),
}

impl<P> KeyData<P> {
    /// The key's type.
    pub fn key_type(&self) -> KeyType {
        match self {
            Self::Text(d) => d.key_type,
            Self::AutoText(d) => d.base.key_type,
            Self::MultiText(d) => d.key_type,
        }
    }

    /// The key's code. Always [`KeyCode::MULTIPLE_CODE_POINTS`] for [`KeyData::MultiText`].
    pub fn code(&self) -> KeyCode {
        match self {
            Self::Text(d) => d.code,
            Self::AutoText(d) => d.base.code,
            Self::MultiText(_) => KeyCode::MULTIPLE_CODE_POINTS,
        }
    }

    /// The key's label.
    pub fn label(&self) -> &str {
        match self {
            Self::Text(d) => &d.label,
            Self::AutoText(d) => &d.base.label,
            Self::MultiText(d) => &d.label,
        }
    }

    /// The key's group.
    pub fn group_id(&self) -> GroupId {
        match self {
            Self::Text(d) => d.group_id,
            Self::AutoText(d) => d.base.group_id,
            Self::MultiText(d) => d.group_id,
        }
    }

    /// The key's popup set, if any.
    pub fn popup(&self) -> Option<&Arc<P>> {
        match self {
            Self::Text(d) => d.popup.as_ref(),
            Self::AutoText(d) => d.base.popup.as_ref(),
            Self::MultiText(d) => d.popup.as_ref(),
        }
    }

    /// Resolve this key against the current context.
    ///
    /// Returns a borrow when the key resolves to itself or to a precomputed form, and an owned
    /// value after slot substitution. `None` means the key is a slot with no data and should be
    /// hidden or disabled. Resolution has no side effects and can be repeated on every context
    /// change.
    pub fn compute<'a, E>(&'a self, evaluator: &E) -> Option<Cow<'a, Self>>
    where
        E: ComputingEvaluator<P> + ?Sized,
    {
        match self {
            Self::Text(_) => {
                if evaluator.is_slot(self) {
                    self.substitute_slot(evaluator)
                } else {
                    Some(Cow::Borrowed(self))
                }
            }
            Self::AutoText(d) => {
                if evaluator.is_slot(self) {
                    self.substitute_slot(evaluator)
                } else if evaluator.active_state().is_uppercase() {
                    Some(Cow::Borrowed(&*d.upper))
                } else {
                    Some(Cow::Borrowed(&*d.lower))
                }
            }
            Self::MultiText(_) => Some(Cow::Borrowed(self)),
        }
    }

    fn substitute_slot<'a, E>(&'a self, evaluator: &E) -> Option<Cow<'a, Self>>
    where
        E: ComputingEvaluator<P> + ?Sized,
    {
        let data = evaluator.slot_data(self)?;
        let key_type = data.key_type();
        let code = data.code();
        Some(Cow::Owned(Self::Text(TextKeyData {
            key_type,
            code,
            label: data.into_label(),
            group_id: self.group_id(),
            popup: self.popup().cloned(),
        })))
    }

    fn into_label(self) -> Cow<'static, str> {
        match self {
            Self::Text(d) => d.label,
            Self::AutoText(d) => d.base.label,
            Self::MultiText(d) => d.label,
        }
    }

    /// Render the key as text.
    ///
    /// With `is_for_display` the label is used (with a [`DOTTED_CIRCLE`] in front of combining
    /// marks). Otherwise the text the key would emit is produced; code points that are not
    /// valid Unicode scalar values are dropped.
    pub fn as_string(&self, is_for_display: bool) -> String {
        match self {
            Self::Text(d) => d.as_string(is_for_display),
            Self::AutoText(d) => d.base.as_string(is_for_display),
            Self::MultiText(d) => d.as_string(is_for_display),
        }
    }
}

impl<P> Clone for KeyData<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Text(d) => Self::Text(d.clone()),
            Self::AutoText(d) => Self::AutoText(d.clone()),
            Self::MultiText(d) => Self::MultiText(d.clone()),
        }
    }
}

impl<P> PartialEq for KeyData<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::AutoText(a), Self::AutoText(b)) => a == b,
            (Self::MultiText(a), Self::MultiText(b)) => a == b,
            _ => false,
        }
    }
}

impl<P> fmt::Debug for KeyData<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(d) => d.fmt(f),
            Self::AutoText(d) => d.fmt(f),
            Self::MultiText(d) => d.fmt(f),
        }
    }
}

impl<P> From<TextKeyData<P>> for KeyData<P> {
    fn from(data: TextKeyData<P>) -> Self {
        Self::Text(data)
    }
}

impl<P> From<AutoTextKeyData<P>> for KeyData<P> {
    fn from(data: AutoTextKeyData<P>) -> Self {
        Self::AutoText(data)
    }
}

impl<P> From<MultiTextKeyData<P>> for KeyData<P> {
    fn from(data: MultiTextKeyData<P>) -> Self {
        Self::MultiText(data)
    }
}

fn popup_eq<P>(a: &Option<Arc<P>>, b: &Option<Arc<P>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// A key with a fixed code and label.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase"),
    serde(bound(
        serialize = "P: serde::Serialize",
        deserialize = "P: serde::Deserialize<'de>"
    ))
)]
pub struct TextKeyData<P = ()> {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub(crate) key_type: KeyType,
    pub(crate) code: KeyCode,
    pub(crate) label: Cow<'static, str>,
    pub(crate) group_id: GroupId,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) popup: Option<Arc<P>>,
}

impl<P> TextKeyData<P> {
    /// Create a key in [`GroupId::DEFAULT`] without a popup.
    pub fn new(key_type: KeyType, code: KeyCode, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key_type,
            code,
            label: label.into(),
            group_id: GroupId::DEFAULT,
            popup: None,
        }
    }

    /// Set the group.
    #[must_use]
    pub fn with_group_id(mut self, group_id: GroupId) -> Self {
        self.group_id = group_id;
        self
    }

    /// Attach a popup set.
    #[must_use]
    pub fn with_popup(mut self, popup: Arc<P>) -> Self {
        self.popup = Some(popup);
        self
    }

    /// The key's type.
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// The key's code.
    pub fn code(&self) -> KeyCode {
        self.code
    }

    /// The key's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The key's group.
    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// The key's popup set, if any.
    pub fn popup(&self) -> Option<&Arc<P>> {
        self.popup.as_ref()
    }

    /// See [`KeyData::as_string`].
    pub fn as_string(&self, is_for_display: bool) -> String {
        let mut out = String::new();
        if is_for_display || self.code == KeyCode::URI_COMPONENT_TLD || self.code < KeyCode::SPACE
        {
            if self.code.is_combining_mark() && !self.label.starts_with(DOTTED_CIRCLE) {
                out.push(DOTTED_CIRCLE);
            }
            out.push_str(&self.label);
        } else if let Some(c) = self.code.as_char() {
            out.push(c);
        }
        out
    }
}

impl<P> Default for TextKeyData<P> {
    fn default() -> Self {
        Self::new(KeyType::Character, KeyCode::UNSPECIFIED, "")
    }
}

impl<P> Clone for TextKeyData<P> {
    fn clone(&self) -> Self {
        Self {
            key_type: self.key_type,
            code: self.code,
            label: self.label.clone(),
            group_id: self.group_id,
            popup: self.popup.clone(),
        }
    }
}

impl<P> PartialEq for TextKeyData<P> {
    fn eq(&self, other: &Self) -> bool {
        self.key_type == other.key_type
            && self.code == other.code
            && self.label == other.label
            && self.group_id == other.group_id
            && popup_eq(&self.popup, &other.popup)
    }
}

impl<P> fmt::Debug for TextKeyData<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextKeyData")
            .field("type", &self.key_type)
            .field("code", &self.code.0)
            .field("label", &self.label)
            .field("group_id", &self.group_id.0)
            .finish_non_exhaustive()
    }
}

/// A character key whose code and label follow the active case state.
///
/// Both case forms are computed once at construction.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "TextKeyData<P>", into = "TextKeyData<P>"),
    serde(bound(
        serialize = "P: serde::Serialize",
        deserialize = "P: serde::Deserialize<'de>"
    ))
)]
pub struct AutoTextKeyData<P = ()> {
    base: TextKeyData<P>,
    lower: Box<KeyData<P>>,
    upper: Box<KeyData<P>>,
}

impl<P> AutoTextKeyData<P> {
    /// Create a key whose label is case mapped under [`CaseLocale::Root`].
    pub fn new(key_type: KeyType, code: KeyCode, label: impl Into<Cow<'static, str>>) -> Self {
        TextKeyData::new(key_type, code, label).into()
    }

    /// Create a key from its base fields, case mapping the label under `locale`.
    pub fn with_locale(base: TextKeyData<P>, locale: CaseLocale) -> Self {
        let lower = TextKeyData {
            key_type: base.key_type,
            code: case::lowercase_code(base.code),
            label: Cow::Owned(locale.lowercase(&base.label)),
            group_id: base.group_id,
            popup: base.popup.clone(),
        };
        let upper = TextKeyData {
            key_type: base.key_type,
            code: case::uppercase_code(base.code),
            label: Cow::Owned(locale.uppercase(&base.label)),
            group_id: base.group_id,
            popup: base.popup.clone(),
        };
        Self {
            base,
            lower: Box::new(KeyData::Text(lower)),
            upper: Box::new(KeyData::Text(upper)),
        }
    }

    /// The fields this key was declared with.
    pub fn base(&self) -> &TextKeyData<P> {
        &self.base
    }

    /// The resolved form while uppercase is inactive.
    pub fn lower(&self) -> &KeyData<P> {
        &self.lower
    }

    /// The resolved form while uppercase is active.
    pub fn upper(&self) -> &KeyData<P> {
        &self.upper
    }
}

impl<P> From<TextKeyData<P>> for AutoTextKeyData<P> {
    fn from(base: TextKeyData<P>) -> Self {
        Self::with_locale(base, CaseLocale::default())
    }
}

impl<P> From<AutoTextKeyData<P>> for TextKeyData<P> {
    fn from(data: AutoTextKeyData<P>) -> Self {
        data.base
    }
}

impl<P> Clone for AutoTextKeyData<P> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            lower: self.lower.clone(),
            upper: self.upper.clone(),
        }
    }
}

impl<P> PartialEq for AutoTextKeyData<P> {
    fn eq(&self, other: &Self) -> bool {
        // Case forms are derived from the base fields.
        self.base == other.base
    }
}

impl<P> fmt::Debug for AutoTextKeyData<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoTextKeyData")
            .field("type", &self.base.key_type)
            .field("code", &self.base.code.0)
            .field("label", &self.base.label)
            .field("group_id", &self.base.group_id.0)
            .finish_non_exhaustive()
    }
}

/// A key that emits a fixed sequence of code points, such as an emoji with modifiers.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase"),
    serde(bound(
        serialize = "P: serde::Serialize",
        deserialize = "P: serde::Deserialize<'de>"
    ))
)]
pub struct MultiTextKeyData<P = ()> {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    key_type: KeyType,
    code_points: CodePoints,
    label: Cow<'static, str>,
    group_id: GroupId,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    popup: Option<Arc<P>>,
}

impl<P> MultiTextKeyData<P> {
    /// Create a key in [`GroupId::DEFAULT`] without a popup.
    pub fn new(
        key_type: KeyType,
        code_points: impl IntoIterator<Item = i32>,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            key_type,
            code_points: code_points.into_iter().collect(),
            label: label.into(),
            group_id: GroupId::DEFAULT,
            popup: None,
        }
    }

    /// Set the group.
    #[must_use]
    pub fn with_group_id(mut self, group_id: GroupId) -> Self {
        self.group_id = group_id;
        self
    }

    /// Attach a popup set.
    #[must_use]
    pub fn with_popup(mut self, popup: Arc<P>) -> Self {
        self.popup = Some(popup);
        self
    }

    /// The code points, in emission order.
    pub fn code_points(&self) -> &[i32] {
        &self.code_points
    }

    /// The key's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// See [`KeyData::as_string`].
    pub fn as_string(&self, is_for_display: bool) -> String {
        if is_for_display {
            return String::from(&*self.label);
        }
        self.code_points
            .iter()
            .filter_map(|&cp| KeyCode(cp).as_char())
            .collect()
    }
}

impl<P> Default for MultiTextKeyData<P> {
    fn default() -> Self {
        Self::new(KeyType::Character, [], "")
    }
}

impl<P> Clone for MultiTextKeyData<P> {
    fn clone(&self) -> Self {
        Self {
            key_type: self.key_type,
            code_points: self.code_points.clone(),
            label: self.label.clone(),
            group_id: self.group_id,
            popup: self.popup.clone(),
        }
    }
}

impl<P> PartialEq for MultiTextKeyData<P> {
    fn eq(&self, other: &Self) -> bool {
        self.key_type == other.key_type
            && self.code_points == other.code_points
            && self.label == other.label
            && self.group_id == other.group_id
            && popup_eq(&self.popup, &other.popup)
    }
}

impl<P> fmt::Debug for MultiTextKeyData<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiTextKeyData")
            .field("type", &self.key_type)
            .field("code_points", &self.code_points.as_slice())
            .field("label", &self.label)
            .field("group_id", &self.group_id.0)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DefaultComputingEvaluator, KeyboardState};
    use alloc::vec::Vec;

    /// Evaluator with a fixed state that treats every key whose code is in `slots` as a slot.
    struct TestEvaluator {
        state: KeyboardState,
        slots: Vec<KeyCode>,
        slot_data: Option<KeyData<&'static str>>,
    }

    impl TestEvaluator {
        fn with_state(state: KeyboardState) -> Self {
            Self {
                state,
                slots: Vec::new(),
                slot_data: None,
            }
        }

        fn with_slot(code: KeyCode, data: Option<KeyData<&'static str>>) -> Self {
            Self {
                state: KeyboardState::empty(),
                slots: alloc::vec![code],
                slot_data: data,
            }
        }
    }

    impl ComputingEvaluator<&'static str> for TestEvaluator {
        fn active_state(&self) -> KeyboardState {
            self.state
        }

        fn is_slot(&self, data: &KeyData<&'static str>) -> bool {
            self.slots.contains(&data.code())
        }

        fn slot_data(&self, _data: &KeyData<&'static str>) -> Option<KeyData<&'static str>> {
            self.slot_data.clone()
        }
    }

    fn auto_key(c: char) -> KeyData<&'static str> {
        let mut label = String::new();
        label.push(c);
        AutoTextKeyData::with_locale(
            TextKeyData::new(KeyType::Character, KeyCode::from_char(c), label)
                .with_group_id(GroupId::LEFT)
                .with_popup(Arc::new("popup")),
            CaseLocale::Root,
        )
        .into()
    }

    #[test]
    fn static_key_without_slot_resolves_to_itself() {
        let key: KeyData<&'static str> =
            TextKeyData::new(KeyType::Character, KeyCode::from_char('x'), "x")
                .with_group_id(GroupId::RIGHT)
                .into();
        let resolved = key
            .compute(&TestEvaluator::with_state(KeyboardState::CAPS_LOCK))
            .unwrap();
        assert!(matches!(resolved, Cow::Borrowed(_)));
        assert_eq!(*resolved, key);
        assert_eq!(resolved.group_id(), GroupId::RIGHT);
    }

    #[test]
    fn auto_key_follows_case_state() {
        let key = auto_key('q');
        let original_popup = key.popup().unwrap().clone();

        let upper = key
            .compute(&TestEvaluator::with_state(KeyboardState::SHIFT_MANUAL))
            .unwrap();
        assert_eq!(upper.code(), KeyCode::from_char('Q'));
        assert_eq!(upper.label(), "Q");
        assert_eq!(upper.group_id(), GroupId::LEFT);
        assert!(Arc::ptr_eq(upper.popup().unwrap(), &original_popup));

        let lower = key
            .compute(&TestEvaluator::with_state(KeyboardState::empty()))
            .unwrap();
        assert_eq!(lower.code(), KeyCode::from_char('q'));
        assert_eq!(lower.label(), "q");
        assert_eq!(lower.group_id(), GroupId::LEFT);
        assert!(Arc::ptr_eq(lower.popup().unwrap(), &original_popup));
    }

    #[test]
    fn auto_key_lowercases_an_uppercase_declaration() {
        let key = auto_key('Ä');
        let lower = key.compute(&DefaultComputingEvaluator).unwrap();
        assert_eq!(lower.code(), KeyCode::from_char('ä'));
        assert_eq!(lower.as_string(false), "ä");
    }

    #[test]
    fn auto_key_lowercases_dotted_capital_i_to_plain_i() {
        let key = auto_key('İ');
        let lower = key.compute(&DefaultComputingEvaluator).unwrap();
        assert_eq!(lower.code(), KeyCode::from_char('i'));
        assert_eq!(lower.label(), "i\u{307}");
    }

    #[test]
    fn auto_key_keeps_code_and_expands_label_for_sharp_s() {
        let key = auto_key('ß');
        let upper = key
            .compute(&TestEvaluator::with_state(KeyboardState::CAPS_LOCK))
            .unwrap();
        assert_eq!(upper.code(), KeyCode::from_char('ß'));
        assert_eq!(upper.label(), "SS");
    }

    #[test]
    fn auto_key_in_turkic_locale_tailors_label_only() {
        let key: KeyData<&'static str> = AutoTextKeyData::with_locale(
            TextKeyData::new(KeyType::Character, KeyCode::from_char('i'), "i"),
            CaseLocale::Turkic,
        )
        .into();
        let upper = key
            .compute(&TestEvaluator::with_state(KeyboardState::SHIFT_AUTOMATIC))
            .unwrap();
        assert_eq!(upper.label(), "İ");
        assert_eq!(upper.code(), KeyCode::from_char('I'));
    }

    #[test]
    fn slot_is_substituted_keeping_group_and_popup() {
        let slot_target: KeyData<&'static str> =
            TextKeyData::new(KeyType::Character, KeyCode::from_char('€'), "€").into();
        let evaluator =
            TestEvaluator::with_slot(KeyCode::CURRENCY_SLOT_1, Some(slot_target.clone()));
        let popup = Arc::new("currencies");
        let key: KeyData<&'static str> =
            TextKeyData::new(KeyType::Character, KeyCode::CURRENCY_SLOT_1, "currency_slot_1")
                .with_group_id(GroupId::RIGHT)
                .with_popup(popup.clone())
                .into();

        let resolved = key.compute(&evaluator).unwrap();
        assert!(matches!(resolved, Cow::Owned(_)));
        assert_eq!(resolved.code(), KeyCode::from_char('€'));
        assert_eq!(resolved.label(), "€");
        assert_eq!(resolved.key_type(), KeyType::Character);
        assert_eq!(resolved.group_id(), GroupId::RIGHT);
        assert!(Arc::ptr_eq(resolved.popup().unwrap(), &popup));
    }

    #[test]
    fn auto_key_slot_takes_precedence_over_case() {
        let slot_target: KeyData<&'static str> =
            TextKeyData::new(KeyType::Character, KeyCode::from_char('$'), "$").into();
        let mut evaluator = TestEvaluator::with_slot(KeyCode::from_char('q'), Some(slot_target));
        evaluator.state = KeyboardState::CAPS_LOCK;
        let key = auto_key('q');
        let resolved = key.compute(&evaluator).unwrap();
        assert_eq!(resolved.code(), KeyCode::from_char('$'));
        assert_eq!(resolved.group_id(), GroupId::LEFT);
    }

    #[test]
    fn empty_slot_resolves_to_none() {
        let evaluator = TestEvaluator::with_slot(KeyCode::CURRENCY_SLOT_2, None);
        let key: KeyData<&'static str> =
            TextKeyData::new(KeyType::Character, KeyCode::CURRENCY_SLOT_2, "slot").into();
        assert!(key.compute(&evaluator).is_none());

        let evaluator = TestEvaluator::with_slot(KeyCode::from_char('q'), None);
        assert!(auto_key('q').compute(&evaluator).is_none());
    }

    #[test]
    fn multi_text_key_is_never_substituted() {
        let key: KeyData<&'static str> =
            MultiTextKeyData::new(KeyType::Character, [0x41, 0x301], "Á").into();
        let evaluator = TestEvaluator::with_slot(KeyCode::MULTIPLE_CODE_POINTS, None);
        let resolved = key.compute(&evaluator).unwrap();
        assert_eq!(*resolved, key);
        assert_eq!(resolved.code(), KeyCode::MULTIPLE_CODE_POINTS);
    }

    #[test]
    fn printable_code_renders_code_point_unless_for_display() {
        let key: KeyData = TextKeyData::new(KeyType::Character, KeyCode::from_char('a'), "A key")
            .into();
        assert_eq!(key.as_string(false), "a");
        assert_eq!(key.as_string(true), "A key");
    }

    #[test]
    fn control_and_function_codes_render_label() {
        let delete: KeyData = KeyData::Text(TextKeyData::DELETE);
        assert_eq!(delete.as_string(false), "delete");
        let tab: KeyData = TextKeyData::new(KeyType::Character, KeyCode(0x09), "tab").into();
        assert_eq!(tab.as_string(false), "tab");
        let tld: KeyData =
            TextKeyData::new(KeyType::Character, KeyCode::URI_COMPONENT_TLD, ".com").into();
        assert_eq!(tld.as_string(false), ".com");
    }

    #[test]
    fn combining_mark_gets_single_placeholder() {
        let key: KeyData =
            TextKeyData::new(KeyType::Character, KeyCode(0x0301), "music_note").into();
        assert_eq!(key.as_string(true), "◌music_note");
        assert_eq!(key.as_string(true), "◌music_note");

        let already: KeyData =
            TextKeyData::new(KeyType::Character, KeyCode(0x0301), "◌\u{301}").into();
        assert_eq!(already.as_string(true), "◌\u{301}");
        // Emitting the mark itself is unaffected.
        assert_eq!(already.as_string(false), "\u{301}");
    }

    #[test]
    fn auto_key_renders_declared_fields() {
        let key: KeyData = AutoTextKeyData::new(KeyType::Character, KeyCode(0x0300), "grave")
            .into();
        assert_eq!(key.as_string(true), "◌grave");
        assert_eq!(key.as_string(false), "\u{300}");
    }

    #[test]
    fn invalid_code_point_renders_empty() {
        let key: KeyData = TextKeyData::new(KeyType::Character, KeyCode(0xD800), "bad").into();
        assert_eq!(key.as_string(false), "");
        let key: KeyData =
            TextKeyData::new(KeyType::Character, KeyCode(0x11_0000), "bad").into();
        assert_eq!(key.as_string(false), "");
    }

    #[test]
    fn multi_text_key_assembles_code_points() {
        let key: KeyData = MultiTextKeyData::new(KeyType::Character, [0x41, 0x301], "Á").into();
        assert_eq!(key.as_string(false), "A\u{301}");
        assert_eq!(key.as_string(true), "Á");
    }

    #[test]
    fn multi_text_key_skips_invalid_code_points() {
        let key: KeyData =
            MultiTextKeyData::new(KeyType::Character, [0x48, -5, 0xD800, 0x69], "Hi").into();
        assert_eq!(key.as_string(false), "Hi");
    }

    #[test]
    fn popup_equality_is_by_reference() {
        let a: TextKeyData<&'static str> =
            TextKeyData::new(KeyType::Character, KeyCode::from_char('a'), "a")
                .with_popup(Arc::new("p"));
        let b = TextKeyData::new(KeyType::Character, KeyCode::from_char('a'), "a")
            .with_popup(Arc::new("p"));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
