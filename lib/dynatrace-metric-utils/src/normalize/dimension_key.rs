/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use super::{push_collapsed, truncate};
use crate::NormalizeError;

const DIMENSION_KEY_MAX_LENGTH: usize = 100;

fn is_section_start(c: char) -> bool {
    c.is_ascii_lowercase() || c == '_'
}

fn is_section_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | ':' | '-')
}

/// Normalize a dimension key.
///
/// Keys are lower-cased and cut to 100 chars. Every `.` separated section
/// loses its leading chars other than `[a-z_]` and its trailing chars other
/// than `[a-z0-9_:-]`, inner runs of such chars become a single `_`. Sections
/// left empty are dropped, the key itself must not end up empty.
pub fn dimension_key(key: &str) -> Result<String, NormalizeError> {
    if key.is_empty() {
        return Err(NormalizeError::EmptyKey);
    }
    let lower = key.to_lowercase();
    let lower = truncate(&lower, DIMENSION_KEY_MAX_LENGTH);

    let mut normalized = String::with_capacity(lower.len());
    for section in lower.split('.') {
        let section = section
            .trim_start_matches(|c: char| !is_section_start(c))
            .trim_end_matches(|c: char| !is_section_char(c));
        if section.is_empty() {
            continue;
        }
        if !normalized.is_empty() {
            normalized.push('.');
        }
        push_collapsed(&mut normalized, section, is_section_char);
    }

    if normalized.is_empty() {
        Err(NormalizeError::NoValidCharacter(key.to_string()))
    } else {
        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(key: &str) -> String {
        dimension_key(key).unwrap()
    }

    #[test]
    fn valid() {
        assert_eq!(ok("dim"), "dim");
        assert_eq!(ok("dim1"), "dim1");
        assert_eq!(ok("_dim"), "_dim");
        assert_eq!(ok("dim:dim"), "dim:dim");
        assert_eq!(ok("dim_dim"), "dim_dim");
        assert_eq!(ok("dim-dim"), "dim-dim");
        assert_eq!(ok("dim-"), "dim-");
        assert_eq!(ok("dim---"), "dim---");
        assert_eq!(ok("aaa___"), "aaa___");
        assert_eq!(ok("dim1.value1"), "dim1.value1");
        assert_eq!(ok("dim._val"), "dim._val");
        assert_eq!(ok("dim.___"), "dim.___");
        assert_eq!(ok("dim.dim.dim.dim"), "dim.dim.dim.dim");
        assert_eq!(ok("a.b:c.d"), "a.b:c.d");
        assert_eq!(ok("dim.val:count.val001"), "dim.val:count.val001");
    }

    #[test]
    fn lower_case() {
        assert_eq!(ok("Tag"), "tag");
        assert_eq!(ok("Dim"), "dim");
        assert_eq!(ok("dIm"), "dim");
        assert_eq!(ok("diM"), "dim");
        assert_eq!(ok("DIM"), "dim");
        assert_eq!(ok("Bla___"), "bla___");
    }

    #[test]
    fn leading_and_trailing() {
        assert_eq!(ok("-dim"), "dim");
        assert_eq!(ok("~0#dim"), "dim");
        assert_eq!(ok("---dim"), "dim");
        assert_eq!(ok(":dim"), "dim");
        assert_eq!(ok("0Tag"), "tag");
        assert_eq!(ok("aaa~@#ä"), "aaa");
        assert_eq!(ok("ääätag"), "tag");
        assert_eq!(ok("ä_ätag"), "__tag");
        assert_eq!(ok("   a"), "a");
        assert_eq!(ok("a   "), "a");
    }

    #[test]
    fn inner_chars() {
        assert_eq!(ok("a b"), "a_b");
        assert_eq!(ok("a    b"), "a_b");
        assert_eq!(ok("tÄg"), "t_g");
        assert_eq!(ok("mytäääg"), "myt_g");
        assert_eq!(ok("a,,,b  c=d\\e\\ =,f"), "a_b_c_d_e_f");
        assert_eq!(
            ok("a!b\"c#d$e%f&g'h(i)j*k+l,m-n.o/p:q;r<s=t>u?v@w[x]y\\z^0 1_2;3{4|5}6~7"),
            "a_b_c_d_e_f_g_h_i_j_k_l_m-n.o_p:q_r_s_t_u_v_w_x_y_z_0_1_2_3_4_5_6_7"
        );
    }

    #[test]
    fn sections() {
        assert_eq!(ok("dim.0dim"), "dim.dim");
        assert_eq!(ok("dim.000"), "dim");
        assert_eq!(ok("dim.~val"), "dim.val");
        assert_eq!(ok("dim.val~~"), "dim.val");
        assert_eq!(ok("dim.~~~"), "dim");
        assert_eq!(ok("a..b"), "a.b");
        assert_eq!(ok("a.....b"), "a.b");
        assert_eq!(ok(".a"), "a");
        assert_eq!(ok("a."), "a");
        assert_eq!(ok("a..."), "a");
        assert_eq!(ok(".a."), "a");
    }

    #[test]
    fn invalid() {
        assert_eq!(dimension_key(""), Err(NormalizeError::EmptyKey));
        assert!(matches!(
            dimension_key("~@#ä"),
            Err(NormalizeError::NoValidCharacter(_))
        ));
        assert!(dimension_key("000").is_err());
        assert!(dimension_key(".").is_err());
        assert!(dimension_key("0.1.2").is_err());
    }

    #[test]
    fn truncate_long_key() {
        assert_eq!(ok(&"a".repeat(120)), "a".repeat(100));
        assert_eq!(ok(&"A".repeat(120)), "a".repeat(100));
    }

    #[test]
    fn idempotent() {
        for key in ["Tag", "~0#dim", "dim.0dim", "ä_ätag", "a    b", ".a."] {
            let once = ok(key);
            assert_eq!(ok(&once), once);
        }
    }
}
