/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("empty key")]
    EmptyKey,
    #[error("first key section is empty")]
    EmptyFirstSection,
    #[error("no valid character left in key '{0}'")]
    NoValidCharacter(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricError {
    #[error("metric name and prefix are both empty")]
    EmptyName,
    #[error("invalid metric key: {0}")]
    InvalidKey(#[from] NormalizeError),
    #[error("metric value not set")]
    ValueNotSet,
    #[error("metric value has already been set")]
    ValueAlreadySet,
    #[error("counter value must not be negative, was {0}")]
    NegativeCounter(String),
    #[error("summary count must not be negative, was {0}")]
    NegativeCount(i64),
    #[error("summary min ({min}) is greater than max ({max})")]
    MinGreaterThanMax { min: String, max: String },
    #[error("{0} value is not a finite number")]
    NotFinite(&'static str),
    #[error(
        "serialized line exceeds limit of {limit} characters accepted by the ingest API. Metric name: '{metric}'"
    )]
    LineTooLong { limit: usize, metric: String },
}
