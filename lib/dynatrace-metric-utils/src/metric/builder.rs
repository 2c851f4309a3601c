/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use chrono::{DateTime, Utc};

use super::{Metric, MetricOption};
use crate::{MetricError, NormalizedDimensionList};

/// Collects [`MetricOption`]s in call order, all of them are checked at
/// [`MetricBuilder::build`].
pub struct MetricBuilder {
    name: String,
    options: Vec<MetricOption>,
}

impl MetricBuilder {
    pub fn new<N: Into<String>>(name: N) -> Self {
        MetricBuilder {
            name: name.into(),
            options: Vec::with_capacity(4),
        }
    }

    fn with(mut self, option: MetricOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn prefix<T: Into<String>>(self, prefix: T) -> Self {
        self.with(MetricOption::Prefix(prefix.into()))
    }

    pub fn dimensions(self, dims: NormalizedDimensionList) -> Self {
        self.with(MetricOption::Dimensions(dims))
    }

    pub fn int_counter_delta(self, value: i64) -> Self {
        self.with(MetricOption::IntCounterDelta(value))
    }

    pub fn int_counter_total(self, value: i64) -> Self {
        self.with(MetricOption::IntCounterTotal(value))
    }

    pub fn float_counter_delta(self, value: f64) -> Self {
        self.with(MetricOption::FloatCounterDelta(value))
    }

    pub fn float_counter_total(self, value: f64) -> Self {
        self.with(MetricOption::FloatCounterTotal(value))
    }

    pub fn int_summary(self, min: i64, max: i64, sum: i64, count: i64) -> Self {
        self.with(MetricOption::IntSummary {
            min,
            max,
            sum,
            count,
        })
    }

    pub fn float_summary(self, min: f64, max: f64, sum: f64, count: i64) -> Self {
        self.with(MetricOption::FloatSummary {
            min,
            max,
            sum,
            count,
        })
    }

    pub fn int_gauge(self, value: i64) -> Self {
        self.with(MetricOption::IntGauge(value))
    }

    pub fn float_gauge(self, value: f64) -> Self {
        self.with(MetricOption::FloatGauge(value))
    }

    pub fn timestamp(self, time: DateTime<Utc>) -> Self {
        self.with(MetricOption::Timestamp(time))
    }

    pub fn current_time(self) -> Self {
        self.with(MetricOption::CurrentTime)
    }

    pub fn build(self) -> Result<Metric, MetricError> {
        Metric::new(self.name, self.options)
    }
}
