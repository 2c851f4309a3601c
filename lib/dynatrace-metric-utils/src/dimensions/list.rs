/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::{self, Write};

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::warn;
use smol_str::SmolStr;

use super::Dimension;
use crate::normalize;

/// An ordered list of dimensions with normalized keys and values and without
/// duplicate keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedDimensionList {
    inner: Vec<Dimension>,
}

impl NormalizedDimensionList {
    /// Normalize all keys and values of `dims`.
    ///
    /// Dimensions whose key can not be normalized are skipped. If several
    /// keys end up equal after normalization, the first one is kept. The
    /// order of the remaining dimensions is retained.
    pub fn new<I, D>(dims: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Dimension>,
    {
        let iter = dims.into_iter();
        let mut unique: IndexMap<SmolStr, SmolStr> = IndexMap::with_capacity(iter.size_hint().0);

        for dim in iter {
            let dim = dim.into();
            let key = match normalize::dimension_key(dim.key()) {
                Ok(key) => key,
                Err(e) => {
                    warn!("skip dimension with invalid key '{}': {e}", dim.key());
                    continue;
                }
            };
            let value = normalize::dimension_value(dim.value());

            if let Entry::Vacant(entry) = unique.entry(SmolStr::from(key)) {
                entry.insert(SmolStr::from(value));
            }
        }

        Self::from_unique(unique)
    }

    pub(super) fn from_unique(unique: IndexMap<SmolStr, SmolStr>) -> Self {
        let inner = unique
            .into_iter()
            .map(|(key, value)| Dimension { key, value })
            .collect();
        NormalizedDimensionList { inner }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dimension> {
        self.inner.iter()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|d| d.key() == key)
            .map(|d| d.value())
    }
}

/// Displays as `key1=value1,key2=value2`, empty if there is no dimension.
impl fmt::Display for NormalizedDimensionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.inner.iter();
        let Some(dim) = iter.next() else {
            return Ok(());
        };
        f.write_str(dim.key())?;
        f.write_char('=')?;
        f.write_str(dim.value())?;

        for dim in iter {
            f.write_char(',')?;
            f.write_str(dim.key())?;
            f.write_char('=')?;
            f.write_str(dim.value())?;
        }
        Ok(())
    }
}
