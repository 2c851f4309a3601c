/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::Write;

use chrono::{DateTime, Datelike, Utc};
use log::warn;

use crate::api::LINE_LENGTH_LIMIT;
use crate::normalize::prefixed_metric_key;
use crate::{MetricError, NormalizedDimensionList, StaticDimensions, format};

mod value;
pub use value::MetricValue;

mod builder;
pub use builder::MetricBuilder;

/// Configuration applied to a metric while it is being created.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricOption {
    Prefix(String),
    /// The last one wins if set more than once.
    Dimensions(NormalizedDimensionList),
    IntCounterDelta(i64),
    IntCounterTotal(i64),
    FloatCounterDelta(f64),
    FloatCounterTotal(f64),
    IntSummary {
        min: i64,
        max: i64,
        sum: i64,
        count: i64,
    },
    FloatSummary {
        min: f64,
        max: f64,
        sum: f64,
        count: i64,
    },
    IntGauge(i64),
    FloatGauge(f64),
    Timestamp(DateTime<Utc>),
    CurrentTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    name: String,
    prefix: String,
    value: MetricValue,
    dimensions: NormalizedDimensionList,
    timestamp: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct MetricState {
    prefix: String,
    value: Option<MetricValue>,
    dimensions: NormalizedDimensionList,
    timestamp: Option<DateTime<Utc>>,
}

impl MetricState {
    fn set_value(&mut self, value: MetricValue) -> Result<(), MetricError> {
        if self.value.is_some() {
            return Err(MetricError::ValueAlreadySet);
        }
        self.value = Some(value);
        Ok(())
    }

    fn set_timestamp(&mut self, time: DateTime<Utc>) {
        let year = time.year();
        if (2000..=3000).contains(&year) {
            self.timestamp = Some(time);
        } else {
            warn!(
                "ignore timestamp {} as its year {year} is out of range, it may be in the wrong unit",
                time.timestamp_millis()
            );
        }
    }

    fn apply(&mut self, option: MetricOption) -> Result<(), MetricError> {
        match option {
            MetricOption::Prefix(prefix) => self.prefix = prefix,
            MetricOption::Dimensions(dims) => self.dimensions = dims,
            MetricOption::IntCounterDelta(v) => self.set_value(MetricValue::int_counter(v, true)?)?,
            MetricOption::IntCounterTotal(v) => {
                self.set_value(MetricValue::int_counter(v, false)?)?
            }
            MetricOption::FloatCounterDelta(v) => {
                self.set_value(MetricValue::float_counter(v, true)?)?
            }
            MetricOption::FloatCounterTotal(v) => {
                self.set_value(MetricValue::float_counter(v, false)?)?
            }
            MetricOption::IntSummary {
                min,
                max,
                sum,
                count,
            } => self.set_value(MetricValue::int_summary(min, max, sum, count)?)?,
            MetricOption::FloatSummary {
                min,
                max,
                sum,
                count,
            } => self.set_value(MetricValue::float_summary(min, max, sum, count)?)?,
            MetricOption::IntGauge(v) => self.set_value(MetricValue::int_gauge(v))?,
            MetricOption::FloatGauge(v) => self.set_value(MetricValue::float_gauge(v)?)?,
            MetricOption::Timestamp(time) => self.set_timestamp(time),
            MetricOption::CurrentTime => self.set_timestamp(Utc::now()),
        }
        Ok(())
    }
}

impl Metric {
    /// Create a metric by applying `options` in order.
    ///
    /// Fails if any option is invalid, if no value or more than one value is
    /// set, or if no valid metric key can be made from the prefix and name.
    pub fn new<N, I>(name: N, options: I) -> Result<Self, MetricError>
    where
        N: Into<String>,
        I: IntoIterator<Item = MetricOption>,
    {
        let name = name.into();
        let mut state = MetricState::default();
        for option in options {
            state.apply(option)?;
        }

        if name.is_empty() && state.prefix.is_empty() {
            return Err(MetricError::EmptyName);
        }
        prefixed_metric_key(&state.prefix, &name)?;
        let Some(value) = state.value else {
            return Err(MetricError::ValueNotSet);
        };

        Ok(Metric {
            name,
            prefix: state.prefix,
            value,
            dimensions: state.dimensions,
            timestamp: state.timestamp,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    pub fn value(&self) -> &MetricValue {
        &self.value
    }

    #[inline]
    pub fn dimensions(&self) -> &NormalizedDimensionList {
        &self.dimensions
    }

    #[inline]
    pub fn timestamp(&self) -> Option<&DateTime<Utc>> {
        self.timestamp.as_ref()
    }

    /// Serialize to one ingest line: `key[,dimensions] value[ timestamp]`.
    pub fn serialize(&self) -> Result<String, MetricError> {
        self.serialize_line(&self.dimensions)
    }

    /// Serialize with the dimensions of the metric merged into `preset`.
    pub fn serialize_with(&self, preset: &StaticDimensions) -> Result<String, MetricError> {
        let dimensions = preset.apply(&self.dimensions);
        self.serialize_line(&dimensions)
    }

    fn serialize_line(&self, dimensions: &NormalizedDimensionList) -> Result<String, MetricError> {
        let key = prefixed_metric_key(&self.prefix, &self.name)?;

        let mut line = String::with_capacity(key.len() + 64);
        line.push_str(&key);
        if !dimensions.is_empty() {
            line.push(',');
            let _ = write!(line, "{dimensions}");
        }
        line.push(' ');
        let _ = write!(line, "{}", self.value);
        if let Some(time) = &self.timestamp {
            line.push(' ');
            line.push_str(&format::timestamp(time));
        }

        if line.len() > LINE_LENGTH_LIMIT && line.chars().count() > LINE_LENGTH_LIMIT {
            return Err(MetricError::LineTooLong {
                limit: LINE_LENGTH_LIMIT,
                metric: key,
            });
        }
        Ok(line)
    }
}
