/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::api::{DEFAULT_ONEAGENT_ENDPOINT, PAYLOAD_LINES_LIMIT};
use crate::{Dimension, NormalizedDimensionList, StaticDimensions};

#[cfg(feature = "yaml")]
mod yaml;

/// Settings for a metrics exporter built on top of this crate.
///
/// The crate itself does no I/O to the endpoint, the values are kept here so
/// that exporters share the same defaults and limits.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsExportConfig {
    pub(crate) endpoint: String,
    pub(crate) prefix: Option<String>,
    pub(crate) default_dimensions: Vec<Dimension>,
    pub(crate) enrich_with_oneagent_metadata: bool,
    pub(crate) max_lines_per_request: usize,
}

impl Default for MetricsExportConfig {
    fn default() -> Self {
        MetricsExportConfig {
            endpoint: DEFAULT_ONEAGENT_ENDPOINT.to_string(),
            prefix: None,
            default_dimensions: Vec::new(),
            enrich_with_oneagent_metadata: true,
            max_lines_per_request: PAYLOAD_LINES_LIMIT,
        }
    }
}

impl MetricsExportConfig {
    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn set_endpoint<T: Into<String>>(&mut self, endpoint: T) {
        self.endpoint = endpoint.into();
    }

    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn set_prefix<T: Into<String>>(&mut self, prefix: T) {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
    }

    #[inline]
    pub fn default_dimensions(&self) -> &[Dimension] {
        &self.default_dimensions
    }

    pub fn add_default_dimension(&mut self, dim: Dimension) {
        self.default_dimensions.push(dim);
    }

    #[inline]
    pub fn enrich_with_oneagent_metadata(&self) -> bool {
        self.enrich_with_oneagent_metadata
    }

    pub fn set_enrich_with_oneagent_metadata(&mut self, enable: bool) {
        self.enrich_with_oneagent_metadata = enable;
    }

    #[inline]
    pub fn max_lines_per_request(&self) -> usize {
        self.max_lines_per_request
    }

    /// Values out of `1..=PAYLOAD_LINES_LIMIT` are clamped into it.
    pub fn set_max_lines_per_request(&mut self, lines: usize) {
        self.max_lines_per_request = lines.clamp(1, PAYLOAD_LINES_LIMIT);
    }

    /// Normalize the default dimensions and, if enabled, read the OneAgent
    /// metadata.
    pub fn static_dimensions(&self) -> StaticDimensions {
        let default = self.default_dimensions.iter().cloned();
        if self.enrich_with_oneagent_metadata {
            StaticDimensions::with_oneagent_metadata(default)
        } else {
            StaticDimensions::new(
                NormalizedDimensionList::new(default),
                NormalizedDimensionList::default(),
            )
        }
    }
}
