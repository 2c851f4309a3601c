/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Text form of the numbers used in metric lines.

use std::fmt;

use chrono::{DateTime, Utc};

pub struct DisplayInt(i64);

impl fmt::Display for DisplayInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(itoa::Buffer::new().format(self.0))
    }
}

/// Fixed point with at most 6 decimals, never in scientific notation.
pub struct DisplayFloat(f64);

impl fmt::Display for DisplayFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.6}", self.0);
        f.write_str(trim_fixed(&fixed))
    }
}

fn trim_fixed(s: &str) -> &str {
    let s = if s.contains('.') {
        let s = s.trim_end_matches('0');
        s.strip_suffix('.').unwrap_or(s)
    } else {
        s
    };
    if s == "-0" { "0" } else { s }
}

#[inline]
pub fn display_int(v: i64) -> DisplayInt {
    DisplayInt(v)
}

#[inline]
pub fn display_float(v: f64) -> DisplayFloat {
    DisplayFloat(v)
}

pub fn int(v: i64) -> String {
    itoa::Buffer::new().format(v).to_string()
}

pub fn float(v: f64) -> String {
    display_float(v).to_string()
}

/// Unix epoch milliseconds.
pub fn timestamp(time: &DateTime<Utc>) -> String {
    int(time.timestamp_millis())
}
