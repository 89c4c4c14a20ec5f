// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key identifiers: [`KeyCode`], [`KeyType`], and [`GroupId`].
//!
//! A [`KeyCode`] is a plain integer. Non-negative values inside the Unicode range are
//! literal code points; the negative band enumerates named function codes such as
//! [`KeyCode::DELETE`] or [`KeyCode::ARROW_LEFT`]. Two sentinels have special meaning:
//! [`KeyCode::UNSPECIFIED`] and [`KeyCode::MULTIPLE_CODE_POINTS`].

/// Integer key code.
///
/// Some actions require both the code and the [`KeyType`] to match before they are
/// executed, so the code alone does not fully describe a key's behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeyCode(pub i32);

#[allow(missing_docs, reason = "named function codes are self-describing")]
impl KeyCode {
    /// No code assigned.
    pub const UNSPECIFIED: Self = Self(0);
    /// The space character.
    pub const SPACE: Self = Self(0x20);

    pub const CTRL: Self = Self(-1);
    pub const CTRL_LOCK: Self = Self(-2);
    pub const ALT: Self = Self(-3);
    pub const ALT_LOCK: Self = Self(-4);
    pub const FN: Self = Self(-5);
    pub const FN_LOCK: Self = Self(-6);
    pub const DELETE: Self = Self(-7);
    pub const DELETE_WORD: Self = Self(-8);
    pub const FORWARD_DELETE: Self = Self(-9);
    pub const FORWARD_DELETE_WORD: Self = Self(-10);
    pub const SHIFT: Self = Self(-11);
    pub const SHIFT_LOCK: Self = Self(-12);
    pub const CAPS_LOCK: Self = Self(-13);

    pub const ARROW_LEFT: Self = Self(-21);
    pub const ARROW_RIGHT: Self = Self(-22);
    pub const ARROW_UP: Self = Self(-23);
    pub const ARROW_DOWN: Self = Self(-24);
    pub const MOVE_START_OF_PAGE: Self = Self(-25);
    pub const MOVE_END_OF_PAGE: Self = Self(-26);
    pub const MOVE_START_OF_LINE: Self = Self(-27);
    pub const MOVE_END_OF_LINE: Self = Self(-28);

    pub const CLIPBOARD_COPY: Self = Self(-31);
    pub const CLIPBOARD_CUT: Self = Self(-32);
    pub const CLIPBOARD_PASTE: Self = Self(-33);
    pub const CLIPBOARD_SELECT: Self = Self(-34);
    pub const CLIPBOARD_SELECT_ALL: Self = Self(-35);
    pub const CLIPBOARD_CLEAR_HISTORY: Self = Self(-36);
    pub const CLIPBOARD_CLEAR_FULL_HISTORY: Self = Self(-37);
    pub const CLIPBOARD_CLEAR_PRIMARY_CLIP: Self = Self(-38);

    pub const COMPACT_LAYOUT_TO_LEFT: Self = Self(-111);
    pub const COMPACT_LAYOUT_TO_RIGHT: Self = Self(-112);

    pub const UNDO: Self = Self(-131);
    pub const REDO: Self = Self(-132);

    pub const VIEW_CHARACTERS: Self = Self(-201);
    pub const VIEW_SYMBOLS: Self = Self(-202);
    pub const VIEW_SYMBOLS2: Self = Self(-203);
    pub const VIEW_NUMERIC: Self = Self(-204);
    pub const VIEW_NUMERIC_ADVANCED: Self = Self(-205);

    pub const IME_UI_MODE_TEXT: Self = Self(-211);
    pub const IME_UI_MODE_MEDIA: Self = Self(-212);
    pub const IME_UI_MODE_CLIPBOARD: Self = Self(-213);

    pub const SYSTEM_INPUT_METHOD_PICKER: Self = Self(-221);
    pub const SYSTEM_PREV_INPUT_METHOD: Self = Self(-222);
    pub const SYSTEM_NEXT_INPUT_METHOD: Self = Self(-223);
    pub const IME_SUBTYPE_PICKER: Self = Self(-224);
    pub const IME_PREV_SUBTYPE: Self = Self(-225);
    pub const IME_NEXT_SUBTYPE: Self = Self(-226);
    pub const LANGUAGE_SWITCH: Self = Self(-227);

    pub const IME_SHOW_UI: Self = Self(-231);
    pub const IME_HIDE_UI: Self = Self(-232);
    pub const VOICE_INPUT: Self = Self(-233);

    /// Top-level domain component of a URI (for example `.com`), rendered from its label.
    pub const URI_COMPONENT_TLD: Self = Self(-255);

    pub const SETTINGS: Self = Self(-301);

    pub const CURRENCY_SLOT_1: Self = Self(-801);
    pub const CURRENCY_SLOT_2: Self = Self(-802);
    pub const CURRENCY_SLOT_3: Self = Self(-803);
    pub const CURRENCY_SLOT_4: Self = Self(-804);
    pub const CURRENCY_SLOT_5: Self = Self(-805);
    pub const CURRENCY_SLOT_6: Self = Self(-806);

    /// The key's payload is a sequence of code points, see
    /// [`MultiTextKeyData`](crate::MultiTextKeyData).
    pub const MULTIPLE_CODE_POINTS: Self = Self(-902);

    pub const INTERNAL_BATCH_EDIT: Self = Self(-10001);

    /// Code for a literal character.
    pub const fn from_char(c: char) -> Self {
        Self(c as i32)
    }

    /// The character this code stands for, if it is a valid Unicode scalar value.
    ///
    /// Function codes, surrogates and out-of-range values yield `None`.
    pub fn as_char(self) -> Option<char> {
        u32::try_from(self.0).ok().and_then(char::from_u32)
    }

    /// Whether this code is in the reserved function band.
    pub const fn is_function(self) -> bool {
        self.0 < 0
    }

    /// Whether this code is in the Combining Diacritical Marks block (U+0300..=U+036F).
    pub const fn is_combining_mark(self) -> bool {
        self.0 >= 0x0300 && self.0 <= 0x036F
    }
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

/// Category a key belongs to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyType {
    /// Produces text.
    #[default]
    Character,
    /// Shift, ctrl, alt and their lock variants.
    Modifier,
    /// Enter and editing actions such as delete.
    EnterEditing,
    /// Cursor and selection movement.
    Navigation,
    /// Actions on the keyboard UI itself (view switching, clipboard, undo).
    SystemGui,
    /// Actions on the host input method.
    Function,
    /// No category assigned.
    Unspecified,
}

/// Grouping identifier used to cluster keys for layout and behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupId(pub i32);

impl GroupId {
    /// Group for keys without an explicit group.
    pub const DEFAULT: Self = Self(0);
    /// Enter key group.
    pub const ENTER: Self = Self(1);
    /// Keys placed left of the space bar.
    pub const LEFT: Self = Self(2);
    /// Keys placed right of the space bar.
    pub const RIGHT: Self = Self(3);
    /// Kana modifier keys.
    pub const KANA: Self = Self(97);
}
