// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case mapping for key codes and labels.
//!
//! Codes and labels are mapped differently on purpose:
//!
//! - [`lowercase_code`] / [`uppercase_code`] apply the locale-invariant Unicode simple case
//!   mapping, which always maps one code point to one code point. `İ` lowercases to `i`, and
//!   `ß`, whose full uppercase is `SS`, keeps its code.
//! - [`CaseLocale::lowercase`] / [`CaseLocale::uppercase`] apply full string mapping and honor
//!   locale tailoring, because labels are only ever displayed.

use alloc::string::String;

use icu_casemap::CaseMapper;

use crate::code::KeyCode;

/// Locale used for label case mapping.
///
/// Key data never consults the process locale. [`CaseLocale::Root`] is the fixed default used
/// when constructing [`AutoTextKeyData`](crate::AutoTextKeyData).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseLocale {
    /// Untailored Unicode case mapping.
    #[default]
    Root,
    /// Turkish and Azerbaijani: dotted and dotless `i` are distinct letters.
    Turkic,
}

impl CaseLocale {
    /// Lowercase `text` under this locale.
    pub fn lowercase(self, text: &str) -> String {
        match self {
            Self::Root => text.to_lowercase(),
            Self::Turkic => {
                let mut out = String::with_capacity(text.len());
                for c in text.chars() {
                    match c {
                        'I' => out.push('ı'),
                        'İ' => out.push('i'),
                        _ => out.extend(c.to_lowercase()),
                    }
                }
                out
            }
        }
    }

    /// Uppercase `text` under this locale.
    pub fn uppercase(self, text: &str) -> String {
        match self {
            Self::Root => text.to_uppercase(),
            Self::Turkic => {
                let mut out = String::with_capacity(text.len());
                for c in text.chars() {
                    match c {
                        'i' => out.push('İ'),
                        _ => out.extend(c.to_uppercase()),
                    }
                }
                out
            }
        }
    }
}

/// Lowercase a key code. Function codes and invalid code points are returned unchanged.
pub fn lowercase_code(code: KeyCode) -> KeyCode {
    map_code(code, CaseMapper::simple_lowercase)
}

/// Uppercase a key code. Function codes and invalid code points are returned unchanged.
pub fn uppercase_code(code: KeyCode) -> KeyCode {
    map_code(code, CaseMapper::simple_uppercase)
}

fn map_code(code: KeyCode, map: fn(&CaseMapper, char) -> char) -> KeyCode {
    match code.as_char() {
        Some(c) => KeyCode::from_char(map(&CaseMapper::new(), c)),
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_mapping_is_single_code_point() {
        assert_eq!(uppercase_code(KeyCode::from_char('a')), KeyCode::from_char('A'));
        assert_eq!(lowercase_code(KeyCode::from_char('Ä')), KeyCode::from_char('ä'));
        // `ß` uppercases to "SS" as a string; the code stays put.
        assert_eq!(uppercase_code(KeyCode::from_char('ß')), KeyCode::from_char('ß'));
    }

    #[test]
    fn code_mapping_ignores_locale_for_dotted_i() {
        assert_eq!(uppercase_code(KeyCode::from_char('i')), KeyCode::from_char('I'));
        // The full mapping of `İ` is "i\u{307}"; the simple mapping drops the dot.
        assert_eq!(lowercase_code(KeyCode::from_char('İ')), KeyCode::from_char('i'));
    }

    #[test]
    fn code_mapping_stays_one_to_one_where_full_mapping_expands() {
        // Full uppercase of `ᾳ` is "ΑΙ"; the simple mapping keeps one code point.
        assert_eq!(uppercase_code(KeyCode::from_char('ᾳ')), KeyCode::from_char('ᾼ'));
        assert_eq!(lowercase_code(KeyCode::from_char('ᾼ')), KeyCode::from_char('ᾳ'));
        assert_eq!(uppercase_code(KeyCode::from_char('ǆ')), KeyCode::from_char('Ǆ'));
    }

    #[test]
    fn function_and_invalid_codes_are_unchanged() {
        assert_eq!(uppercase_code(KeyCode::DELETE), KeyCode::DELETE);
        assert_eq!(lowercase_code(KeyCode(0xD800)), KeyCode(0xD800));
    }

    #[test]
    fn root_label_mapping_expands() {
        assert_eq!(CaseLocale::Root.uppercase("straße"), "STRASSE");
        assert_eq!(CaseLocale::Root.lowercase("ABC"), "abc");
    }

    #[test]
    fn turkic_label_mapping_tailors_i() {
        assert_eq!(CaseLocale::Turkic.uppercase("istanbul"), "İSTANBUL");
        assert_eq!(CaseLocale::Turkic.lowercase("ISPARTA"), "ısparta");
        assert_eq!(CaseLocale::Turkic.lowercase("İzmir"), "izmir");
        assert_eq!(CaseLocale::Root.uppercase("istanbul"), "ISTANBUL");
    }
}
