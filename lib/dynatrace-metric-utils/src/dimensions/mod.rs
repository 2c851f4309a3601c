/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use smol_str::SmolStr;

mod list;
pub use list::NormalizedDimensionList;

mod merge;

mod preset;
pub use preset::StaticDimensions;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    key: SmolStr,
    value: SmolStr,
}

impl Dimension {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<SmolStr>,
        V: Into<SmolStr>,
    {
        Dimension {
            key: key.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    #[inline]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl<K, V> From<(K, V)> for Dimension
where
    K: Into<SmolStr>,
    V: Into<SmolStr>,
{
    fn from((key, value): (K, V)) -> Self {
        Dimension::new(key, value)
    }
}
