/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Limits and defaults of the metrics ingest API.

/// The ingest endpoint served by a locally installed OneAgent.
pub const DEFAULT_ONEAGENT_ENDPOINT: &str = "http://127.0.0.1:14499/metrics/ingest";

/// Maximum number of characters of a single serialized line.
pub const LINE_LENGTH_LIMIT: usize = 50_000;

/// Maximum number of lines the ingest API accepts in one request.
pub const PAYLOAD_LINES_LIMIT: usize = 1000;
