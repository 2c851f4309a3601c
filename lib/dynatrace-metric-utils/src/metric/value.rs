/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use crate::MetricError;
use crate::format::{display_float, display_int};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    IntCounter { value: i64, delta: bool },
    FloatCounter { value: f64, delta: bool },
    IntSummary { min: i64, max: i64, sum: i64, count: i64 },
    FloatSummary { min: f64, max: f64, sum: f64, count: i64 },
    IntGauge(i64),
    FloatGauge(f64),
}

fn check_finite(kind: &'static str, v: f64) -> Result<(), MetricError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(MetricError::NotFinite(kind))
    }
}

impl MetricValue {
    pub fn int_counter(value: i64, delta: bool) -> Result<Self, MetricError> {
        if value < 0 {
            return Err(MetricError::NegativeCounter(value.to_string()));
        }
        Ok(MetricValue::IntCounter { value, delta })
    }

    pub fn float_counter(value: f64, delta: bool) -> Result<Self, MetricError> {
        check_finite("counter", value)?;
        if value < 0.0 {
            return Err(MetricError::NegativeCounter(value.to_string()));
        }
        Ok(MetricValue::FloatCounter { value, delta })
    }

    pub fn int_summary(min: i64, max: i64, sum: i64, count: i64) -> Result<Self, MetricError> {
        if count < 0 {
            return Err(MetricError::NegativeCount(count));
        }
        if min > max {
            return Err(MetricError::MinGreaterThanMax {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(MetricValue::IntSummary {
            min,
            max,
            sum,
            count,
        })
    }

    pub fn float_summary(min: f64, max: f64, sum: f64, count: i64) -> Result<Self, MetricError> {
        check_finite("summary min", min)?;
        check_finite("summary max", max)?;
        check_finite("summary sum", sum)?;
        if count < 0 {
            return Err(MetricError::NegativeCount(count));
        }
        if min > max {
            return Err(MetricError::MinGreaterThanMax {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(MetricValue::FloatSummary {
            min,
            max,
            sum,
            count,
        })
    }

    pub fn int_gauge(value: i64) -> Self {
        MetricValue::IntGauge(value)
    }

    pub fn float_gauge(value: f64) -> Result<Self, MetricError> {
        check_finite("gauge", value)?;
        Ok(MetricValue::FloatGauge(value))
    }
}

/// The value part of a metric line, e.g. `count,delta=3` or `gauge,1.5`.
impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MetricValue::IntCounter { value, delta: true } => {
                write!(f, "count,delta={}", display_int(value))
            }
            MetricValue::IntCounter { value, delta: false } => {
                write!(f, "count,{}", display_int(value))
            }
            MetricValue::FloatCounter { value, delta: true } => {
                write!(f, "count,delta={}", display_float(value))
            }
            MetricValue::FloatCounter { value, delta: false } => {
                write!(f, "count,{}", display_float(value))
            }
            MetricValue::IntSummary {
                min,
                max,
                sum,
                count,
            } => write!(
                f,
                "gauge,min={},max={},sum={},count={}",
                display_int(min),
                display_int(max),
                display_int(sum),
                display_int(count)
            ),
            MetricValue::FloatSummary {
                min,
                max,
                sum,
                count,
            } => write!(
                f,
                "gauge,min={},max={},sum={},count={}",
                display_float(min),
                display_float(max),
                display_float(sum),
                display_int(count)
            ),
            MetricValue::IntGauge(v) => write!(f, "gauge,{}", display_int(v)),
            MetricValue::FloatGauge(v) => write!(f, "gauge,{}", display_float(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters() {
        let v = MetricValue::int_counter(300, false).unwrap();
        assert_eq!(v.to_string(), "count,300");
        let v = MetricValue::int_counter(300, true).unwrap();
        assert_eq!(v.to_string(), "count,delta=300");

        let v = MetricValue::float_counter(300.456, false).unwrap();
        assert_eq!(v.to_string(), "count,300.456");
        let v = MetricValue::float_counter(300.456, true).unwrap();
        assert_eq!(v.to_string(), "count,delta=300.456");
        let v = MetricValue::float_counter(300.123456789, true).unwrap();
        assert_eq!(v.to_string(), "count,delta=300.123457");
        let v = MetricValue::float_counter(0.0, true).unwrap();
        assert_eq!(v.to_string(), "count,delta=0");
    }

    #[test]
    fn counter_errors() {
        assert_eq!(
            MetricValue::int_counter(-3, true),
            Err(MetricError::NegativeCounter("-3".to_string()))
        );
        assert!(matches!(
            MetricValue::float_counter(-3.1415, true),
            Err(MetricError::NegativeCounter(_))
        ));
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                MetricValue::float_counter(v, true),
                Err(MetricError::NotFinite("counter"))
            );
        }
    }

    #[test]
    fn summaries() {
        let v = MetricValue::int_summary(0, 10, 30, 7).unwrap();
        assert_eq!(v.to_string(), "gauge,min=0,max=10,sum=30,count=7");
        let v = MetricValue::float_summary(0.3, 10.5, 30.7, 7).unwrap();
        assert_eq!(v.to_string(), "gauge,min=0.3,max=10.5,sum=30.7,count=7");
        let v = MetricValue::int_summary(1, 5, 10, 12).unwrap();
        assert_eq!(v.to_string(), "gauge,min=1,max=5,sum=10,count=12");
    }

    #[test]
    fn summary_errors() {
        assert_eq!(
            MetricValue::int_summary(0, 10, 25, -7),
            Err(MetricError::NegativeCount(-7))
        );
        assert!(matches!(
            MetricValue::int_summary(10, 2, 25, 7),
            Err(MetricError::MinGreaterThanMax { .. })
        ));
        assert!(MetricValue::float_summary(0.4, 10.87, 25.4, -7).is_err());
        assert!(MetricValue::float_summary(10.3, 1.87, 25.4, 7).is_err());

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(MetricValue::float_summary(bad, 1.87, 25.4, 7).is_err());
            assert!(MetricValue::float_summary(1.87, bad, 25.4, 7).is_err());
            assert!(MetricValue::float_summary(1.87, 2.34, bad, 7).is_err());
        }
    }

    #[test]
    fn gauges() {
        assert_eq!(MetricValue::int_gauge(3).to_string(), "gauge,3");
        assert_eq!(MetricValue::int_gauge(-3).to_string(), "gauge,-3");
        assert_eq!(MetricValue::float_gauge(3.0).unwrap().to_string(), "gauge,3");
        assert_eq!(
            MetricValue::float_gauge(-10.24).unwrap().to_string(),
            "gauge,-10.24"
        );
        assert!(MetricValue::float_gauge(f64::NAN).is_err());
        assert!(MetricValue::float_gauge(f64::INFINITY).is_err());
    }
}
