/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::LazyLock;

use regex::Regex;

use super::truncate;

const DIMENSION_VALUE_MAX_LENGTH: usize = 250;

// general category C: control, format, private use, surrogate and unassigned
static OUTER_OTHER_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{C}+|\p{C}+$").expect("invalid outer char pattern"));
static INNER_OTHER_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{C}+").expect("invalid inner char pattern"));

/// Normalize a dimension value. This never fails.
///
/// The value is cut to 250 chars first, then leading and trailing chars of
/// the Unicode "Other" category are removed and inner runs of them replaced
/// by `_`. Finally the special chars are escaped with `\`: only `\` and `"`
/// for a value enclosed in double quotes, `=`, `,`, space, `\` and `"`
/// otherwise. The escaped result may be longer than 250 chars.
pub fn dimension_value(value: &str) -> String {
    let value = truncate(value, DIMENSION_VALUE_MAX_LENGTH);
    let value = OUTER_OTHER_CHARS.replace_all(value, "");
    let value = INNER_OTHER_CHARS.replace_all(&value, "_");

    let quoted = value.starts_with('"') && value.ends_with('"');
    let mut buf = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        let escape = if quoted {
            matches!(c, '\\' | '"')
        } else {
            matches!(c, '=' | ',' | ' ' | '\\' | '"')
        };
        if escape {
            buf.push('\\');
        }
        buf.push(c);
    }
    buf
}
