/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use smallvec::SmallVec;

use super::{push_collapsed, truncate};
use crate::NormalizeError;

const METRIC_KEY_MAX_LENGTH: usize = 250;

fn is_first_section_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_section_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Normalize a (possibly prefixed) metric key.
///
/// The key is cut to 250 chars and split into `.` separated sections. The
/// first section must not be empty and gets any leading run of chars other
/// than letters and `_` replaced by a single `_`. Empty later sections are
/// dropped. In all sections each run of chars outside `[a-zA-Z0-9_-]` is
/// replaced by a single `_`. Case is preserved.
pub fn metric_key(key: &str) -> Result<String, NormalizeError> {
    if key.is_empty() {
        return Err(NormalizeError::EmptyKey);
    }
    let key = truncate(key, METRIC_KEY_MAX_LENGTH);

    let mut sections: SmallVec<[String; 4]> = SmallVec::new();
    for (i, section) in key.split('.').enumerate() {
        if section.is_empty() {
            if i == 0 {
                return Err(NormalizeError::EmptyFirstSection);
            }
            continue;
        }

        let mut buf = String::with_capacity(section.len());
        let left = if i == 0 {
            let left = section.trim_start_matches(|c: char| !is_first_section_start(c));
            if left.len() != section.len() {
                buf.push('_');
            }
            left
        } else {
            section
        };
        push_collapsed(&mut buf, left, is_section_char);
        sections.push(buf);
    }

    if sections.is_empty() {
        return Err(NormalizeError::NoValidCharacter(key.to_string()));
    }
    Ok(sections.join("."))
}

/// Join prefix and name with a `.` and normalize the result.
pub(crate) fn prefixed_metric_key(prefix: &str, name: &str) -> Result<String, NormalizeError> {
    if prefix.is_empty() {
        metric_key(name)
    } else if name.is_empty() {
        metric_key(prefix)
    } else {
        metric_key(&format!("{prefix}.{name}"))
    }
}
