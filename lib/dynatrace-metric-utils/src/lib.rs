/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

pub mod api;
pub mod format;
pub mod normalize;
pub mod oneagent;

mod error;
pub use error::{MetricError, NormalizeError};

mod dimensions;
pub use dimensions::{Dimension, NormalizedDimensionList, StaticDimensions};

mod metric;
pub use metric::{Metric, MetricBuilder, MetricOption, MetricValue};

mod config;
pub use config::MetricsExportConfig;
