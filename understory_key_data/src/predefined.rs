// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predefined [`TextKeyData`] for the built-in function keys.
//!
//! Labels double as stable identifiers (for example for icon lookup), so they are the
//! snake_case name of the code.

use alloc::borrow::Cow;

use crate::code::{GroupId, KeyCode, KeyType};
use crate::data::TextKeyData;

impl<P> TextKeyData<P> {
    const fn predefined(key_type: KeyType, code: KeyCode, label: &'static str) -> Self {
        Self {
            key_type,
            code,
            label: Cow::Borrowed(label),
            group_id: GroupId::DEFAULT,
            popup: None,
        }
    }

    /// Predefined key data for [`KeyCode::UNSPECIFIED`].
    pub const UNSPECIFIED: Self =
        Self::predefined(KeyType::Unspecified, KeyCode::UNSPECIFIED, "unspecified");
    /// Predefined key data for [`KeyCode::SPACE`].
    pub const SPACE: Self = Self::predefined(KeyType::Character, KeyCode::SPACE, "space");
    /// Predefined key data for [`KeyCode::CTRL`].
    pub const CTRL: Self = Self::predefined(KeyType::Modifier, KeyCode::CTRL, "ctrl");
    /// Predefined key data for [`KeyCode::CTRL_LOCK`].
    pub const CTRL_LOCK: Self =
        Self::predefined(KeyType::Modifier, KeyCode::CTRL_LOCK, "ctrl_lock");
    /// Predefined key data for [`KeyCode::ALT`].
    pub const ALT: Self = Self::predefined(KeyType::Modifier, KeyCode::ALT, "alt");
    /// Predefined key data for [`KeyCode::ALT_LOCK`].
    pub const ALT_LOCK: Self = Self::predefined(KeyType::Modifier, KeyCode::ALT_LOCK, "alt_lock");
    /// Predefined key data for [`KeyCode::FN`].
    pub const FN: Self = Self::predefined(KeyType::Modifier, KeyCode::FN, "fn");
    /// Predefined key data for [`KeyCode::FN_LOCK`].
    pub const FN_LOCK: Self = Self::predefined(KeyType::Modifier, KeyCode::FN_LOCK, "fn_lock");
    /// Predefined key data for [`KeyCode::DELETE`].
    pub const DELETE: Self = Self::predefined(KeyType::EnterEditing, KeyCode::DELETE, "delete");
    /// Predefined key data for [`KeyCode::DELETE_WORD`].
    pub const DELETE_WORD: Self =
        Self::predefined(KeyType::EnterEditing, KeyCode::DELETE_WORD, "delete_word");
    /// Predefined key data for [`KeyCode::FORWARD_DELETE`].
    pub const FORWARD_DELETE: Self =
        Self::predefined(KeyType::EnterEditing, KeyCode::FORWARD_DELETE, "forward_delete");
    /// Predefined key data for [`KeyCode::FORWARD_DELETE_WORD`].
    pub const FORWARD_DELETE_WORD: Self = Self::predefined(
        KeyType::EnterEditing,
        KeyCode::FORWARD_DELETE_WORD,
        "forward_delete_word",
    );
    /// Predefined key data for [`KeyCode::SHIFT`].
    pub const SHIFT: Self = Self::predefined(KeyType::Modifier, KeyCode::SHIFT, "shift");
    /// Predefined key data for [`KeyCode::SHIFT_LOCK`].
    pub const SHIFT_LOCK: Self =
        Self::predefined(KeyType::Modifier, KeyCode::SHIFT_LOCK, "shift_lock");
    /// Predefined key data for [`KeyCode::CAPS_LOCK`].
    pub const CAPS_LOCK: Self =
        Self::predefined(KeyType::Modifier, KeyCode::CAPS_LOCK, "caps_lock");
    /// Predefined key data for [`KeyCode::ARROW_LEFT`].
    pub const ARROW_LEFT: Self =
        Self::predefined(KeyType::Navigation, KeyCode::ARROW_LEFT, "arrow_left");
    /// Predefined key data for [`KeyCode::ARROW_RIGHT`].
    pub const ARROW_RIGHT: Self =
        Self::predefined(KeyType::Navigation, KeyCode::ARROW_RIGHT, "arrow_right");
    /// Predefined key data for [`KeyCode::ARROW_UP`].
    pub const ARROW_UP: Self = Self::predefined(KeyType::Navigation, KeyCode::ARROW_UP, "arrow_up");
    /// Predefined key data for [`KeyCode::ARROW_DOWN`].
    pub const ARROW_DOWN: Self =
        Self::predefined(KeyType::Navigation, KeyCode::ARROW_DOWN, "arrow_down");
    /// Predefined key data for [`KeyCode::MOVE_START_OF_PAGE`].
    pub const MOVE_START_OF_PAGE: Self =
        Self::predefined(KeyType::Navigation, KeyCode::MOVE_START_OF_PAGE, "move_start_of_page");
    /// Predefined key data for [`KeyCode::MOVE_END_OF_PAGE`].
    pub const MOVE_END_OF_PAGE: Self =
        Self::predefined(KeyType::Navigation, KeyCode::MOVE_END_OF_PAGE, "move_end_of_page");
    /// Predefined key data for [`KeyCode::MOVE_START_OF_LINE`].
    pub const MOVE_START_OF_LINE: Self =
        Self::predefined(KeyType::Navigation, KeyCode::MOVE_START_OF_LINE, "move_start_of_line");
    /// Predefined key data for [`KeyCode::MOVE_END_OF_LINE`].
    pub const MOVE_END_OF_LINE: Self =
        Self::predefined(KeyType::Navigation, KeyCode::MOVE_END_OF_LINE, "move_end_of_line");
    /// Predefined key data for [`KeyCode::CLIPBOARD_COPY`].
    pub const CLIPBOARD_COPY: Self =
        Self::predefined(KeyType::SystemGui, KeyCode::CLIPBOARD_COPY, "clipboard_copy");
    /// Predefined key data for [`KeyCode::CLIPBOARD_CUT`].
    pub const CLIPBOARD_CUT: Self =
        Self::predefined(KeyType::SystemGui, KeyCode::CLIPBOARD_CUT, "clipboard_cut");
    /// Predefined key data for [`KeyCode::CLIPBOARD_PASTE`].
    pub const CLIPBOARD_PASTE: Self =
        Self::predefined(KeyType::SystemGui, KeyCode::CLIPBOARD_PASTE, "clipboard_paste");
    /// Predefined key data for [`KeyCode::CLIPBOARD_SELECT`].
    pub const CLIPBOARD_SELECT: Self =
        Self::predefined(KeyType::SystemGui, KeyCode::CLIPBOARD_SELECT, "clipboard_select");
    /// Predefined key data for [`KeyCode::CLIPBOARD_SELECT_ALL`].
    pub const CLIPBOARD_SELECT_ALL: Self =
        Self::predefined(KeyType::SystemGui, KeyCode::CLIPBOARD_SELECT_ALL, "clipboard_select_all");
    /// Predefined key data for [`KeyCode::CLIPBOARD_CLEAR_HISTORY`].
    pub const CLIPBOARD_CLEAR_HISTORY: Self = Self::predefined(
        KeyType::SystemGui,
        KeyCode::CLIPBOARD_CLEAR_HISTORY,
        "clipboard_clear_history",
    );
    /// Predefined key data for [`KeyCode::CLIPBOARD_CLEAR_FULL_HISTORY`].
    pub const CLIPBOARD_CLEAR_FULL_HISTORY: Self = Self::predefined(
        KeyType::SystemGui,
        KeyCode::CLIPBOARD_CLEAR_FULL_HISTORY,
        "clipboard_clear_full_history",
    );
    /// Predefined key data for [`KeyCode::CLIPBOARD_CLEAR_PRIMARY_CLIP`].
    pub const CLIPBOARD_CLEAR_PRIMARY_CLIP: Self = Self::predefined(
        KeyType::SystemGui,
        KeyCode::CLIPBOARD_CLEAR_PRIMARY_CLIP,
        "clipboard_clear_primary_clip",
    );
    /// Predefined key data for [`KeyCode::COMPACT_LAYOUT_TO_LEFT`].
    pub const COMPACT_LAYOUT_TO_LEFT: Self = Self::predefined(
        KeyType::SystemGui,
        KeyCode::COMPACT_LAYOUT_TO_LEFT,
        "compact_layout_to_left",
    );
    /// Predefined key data for [`KeyCode::COMPACT_LAYOUT_TO_RIGHT`].
    pub const COMPACT_LAYOUT_TO_RIGHT: Self = Self::predefined(
        KeyType::SystemGui,
        KeyCode::COMPACT_LAYOUT_TO_RIGHT,
        "compact_layout_to_right",
    );
    /// Predefined key data for [`KeyCode::UNDO`].
    pub const UNDO: Self = Self::predefined(KeyType::SystemGui, KeyCode::UNDO, "undo");
    /// Predefined key data for [`KeyCode::REDO`].
    pub const REDO: Self = Self::predefined(KeyType::SystemGui, KeyCode::REDO, "redo");
    /// Predefined key data for [`KeyCode::VIEW_CHARACTERS`].
    pub const VIEW_CHARACTERS: Self =
        Self::predefined(KeyType::SystemGui, KeyCode::VIEW_CHARACTERS, "view_characters");
    /// Predefined key data for [`KeyCode::VIEW_SYMBOLS`].
    pub const VIEW_SYMBOLS: Self =
        Self::predefined(KeyType::SystemGui, KeyCode::VIEW_SYMBOLS, "view_symbols");
    /// Predefined key data for [`KeyCode::VIEW_SYMBOLS2`].
    pub const VIEW_SYMBOLS2: Self =
        Self::predefined(KeyType::SystemGui, KeyCode::VIEW_SYMBOLS2, "view_symbols2");
    /// Predefined key data for [`KeyCode::VIEW_NUMERIC_ADVANCED`].
    pub const VIEW_NUMERIC_ADVANCED: Self = Self::predefined(
        KeyType::SystemGui,
        KeyCode::VIEW_NUMERIC_ADVANCED,
        "view_numeric_advanced",
    );
    /// Predefined key data for [`KeyCode::IME_UI_MODE_TEXT`].
    pub const IME_UI_MODE_TEXT: Self =
        Self::predefined(KeyType::SystemGui, KeyCode::IME_UI_MODE_TEXT, "ime_ui_mode_text");
    /// Predefined key data for [`KeyCode::IME_UI_MODE_MEDIA`].
    pub const IME_UI_MODE_MEDIA: Self =
        Self::predefined(KeyType::SystemGui, KeyCode::IME_UI_MODE_MEDIA, "ime_ui_mode_media");
    /// Predefined key data for [`KeyCode::IME_UI_MODE_CLIPBOARD`].
    pub const IME_UI_MODE_CLIPBOARD: Self = Self::predefined(
        KeyType::SystemGui,
        KeyCode::IME_UI_MODE_CLIPBOARD,
        "ime_ui_mode_clipboard",
    );
    /// Predefined key data for [`KeyCode::SYSTEM_INPUT_METHOD_PICKER`].
    pub const SYSTEM_INPUT_METHOD_PICKER: Self = Self::predefined(
        KeyType::Function,
        KeyCode::SYSTEM_INPUT_METHOD_PICKER,
        "system_input_method_picker",
    );
    /// Predefined key data for [`KeyCode::SYSTEM_PREV_INPUT_METHOD`].
    pub const SYSTEM_PREV_INPUT_METHOD: Self = Self::predefined(
        KeyType::Function,
        KeyCode::SYSTEM_PREV_INPUT_METHOD,
        "system_prev_input_method",
    );
    /// Predefined key data for [`KeyCode::SYSTEM_NEXT_INPUT_METHOD`].
    pub const SYSTEM_NEXT_INPUT_METHOD: Self = Self::predefined(
        KeyType::Function,
        KeyCode::SYSTEM_NEXT_INPUT_METHOD,
        "system_next_input_method",
    );
    /// Predefined key data for [`KeyCode::IME_SUBTYPE_PICKER`].
    pub const IME_SUBTYPE_PICKER: Self =
        Self::predefined(KeyType::Function, KeyCode::IME_SUBTYPE_PICKER, "ime_subtype_picker");
    /// Predefined key data for [`KeyCode::IME_PREV_SUBTYPE`].
    pub const IME_PREV_SUBTYPE: Self =
        Self::predefined(KeyType::Function, KeyCode::IME_PREV_SUBTYPE, "ime_prev_subtype");
    /// Predefined key data for [`KeyCode::IME_NEXT_SUBTYPE`].
    pub const IME_NEXT_SUBTYPE: Self =
        Self::predefined(KeyType::Function, KeyCode::IME_NEXT_SUBTYPE, "ime_next_subtype");
    /// Predefined key data for [`KeyCode::IME_SHOW_UI`].
    pub const IME_SHOW_UI: Self =
        Self::predefined(KeyType::Function, KeyCode::IME_SHOW_UI, "ime_show_ui");
    /// Predefined key data for [`KeyCode::IME_HIDE_UI`].
    pub const IME_HIDE_UI: Self =
        Self::predefined(KeyType::Function, KeyCode::IME_HIDE_UI, "ime_hide_ui");
    /// Predefined key data for [`KeyCode::SETTINGS`].
    pub const SETTINGS: Self = Self::predefined(KeyType::Character, KeyCode::SETTINGS, "settings");
    /// Predefined key data for [`KeyCode::INTERNAL_BATCH_EDIT`].
    pub const INTERNAL_BATCH_EDIT: Self =
        Self::predefined(KeyType::Function, KeyCode::INTERNAL_BATCH_EDIT, "internal_batch_edit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::KeyData;

    #[test]
    fn predefined_keys_carry_type_and_label() {
        let delete: TextKeyData = TextKeyData::DELETE;
        assert_eq!(delete.key_type(), KeyType::EnterEditing);
        assert_eq!(delete.code(), KeyCode::DELETE);
        assert_eq!(delete.label(), "delete");
        assert_eq!(delete.group_id(), GroupId::DEFAULT);
        assert!(delete.popup().is_none());

        let settings: TextKeyData = TextKeyData::SETTINGS;
        assert_eq!(settings.key_type(), KeyType::Character);
        assert_eq!(settings.label(), "settings");
    }

    #[test]
    fn space_emits_a_space() {
        let space: KeyData = KeyData::Text(TextKeyData::SPACE);
        assert_eq!(space.as_string(false), " ");
        assert_eq!(space.as_string(true), "space");
    }

    #[test]
    fn function_keys_render_their_label() {
        let arrow: KeyData = KeyData::Text(TextKeyData::ARROW_LEFT);
        assert_eq!(arrow.as_string(false), "arrow_left");
        let batch: KeyData = KeyData::Text(TextKeyData::INTERNAL_BATCH_EDIT);
        assert_eq!(batch.key_type(), KeyType::Function);
    }
}
