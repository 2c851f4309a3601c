/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Repair of free-form strings into the character sets accepted by the
//! metrics ingest line protocol.

mod metric_key;
pub use metric_key::metric_key;
pub(crate) use metric_key::prefixed_metric_key;

mod dimension_key;
pub use dimension_key::dimension_key;

mod dimension_value;
pub use dimension_value::dimension_value;

/// Cut `s` down to at most `max_chars` characters, never inside a char.
fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((offset, _)) => &s[..offset],
        None => s,
    }
}

/// Copy `section` into `buf`, collapsing each run of chars rejected by
/// `valid` into a single `_`.
fn push_collapsed<F>(buf: &mut String, section: &str, valid: F)
where
    F: Fn(char) -> bool,
{
    let mut in_invalid_run = false;
    for c in section.chars() {
        if valid(c) {
            buf.push(c);
            in_invalid_run = false;
        } else if !in_invalid_run {
            buf.push('_');
            in_invalid_run = true;
        }
    }
}
