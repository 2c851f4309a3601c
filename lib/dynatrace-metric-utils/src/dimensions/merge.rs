/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::NormalizedDimensionList;

impl NormalizedDimensionList {
    /// Combine `base` with the `overwriting` lists, left to right.
    ///
    /// A key keeps the position where it was seen first and gets the value
    /// of the last list containing it.
    pub fn merge<'a, I>(base: &NormalizedDimensionList, overwriting: I) -> NormalizedDimensionList
    where
        I: IntoIterator<Item = &'a NormalizedDimensionList>,
    {
        let mut unique: IndexMap<SmolStr, SmolStr> = base
            .iter()
            .map(|d| (d.key.clone(), d.value.clone()))
            .collect();

        for list in overwriting {
            for dim in list.iter() {
                // insert keeps the index of an existing key
                unique.insert(dim.key.clone(), dim.value.clone());
            }
        }

        NormalizedDimensionList::from_unique(unique)
    }
}
