/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use super::{Dimension, NormalizedDimensionList};
use crate::oneagent;

/// Dimensions shared by all metrics of an exporter, normalized once.
///
/// Default dimensions can be overwritten by the dimensions of a metric,
/// OneAgent dimensions overwrite both.
#[derive(Clone, Debug, Default)]
pub struct StaticDimensions {
    default: NormalizedDimensionList,
    oneagent: NormalizedDimensionList,
}

impl StaticDimensions {
    pub fn new(default: NormalizedDimensionList, oneagent: NormalizedDimensionList) -> Self {
        StaticDimensions { default, oneagent }
    }

    /// Use `default` together with the metadata of the local OneAgent, if any.
    pub fn with_oneagent_metadata<I, D>(default: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Dimension>,
    {
        StaticDimensions {
            default: NormalizedDimensionList::new(default),
            oneagent: oneagent::metadata(),
        }
    }

    #[inline]
    pub fn default_dimensions(&self) -> &NormalizedDimensionList {
        &self.default
    }

    #[inline]
    pub fn oneagent_dimensions(&self) -> &NormalizedDimensionList {
        &self.oneagent
    }

    /// Get the full dimension list to be used for a metric.
    pub fn apply(&self, metric_dims: &NormalizedDimensionList) -> NormalizedDimensionList {
        NormalizedDimensionList::merge(&self.default, [metric_dims, &self.oneagent])
    }
}
