/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Host dimensions provided by a locally installed OneAgent.
//!
//! The agent exposes an indirection file whose first line is the path of the
//! real metadata file, which holds one `key=value` pair per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};
use memchr::memchr;

use crate::{Dimension, NormalizedDimensionList};

pub const INDIRECTION_FILE_NAME: &str = "dt_metadata_e617c525669e072eebe3d0f08212e8f2.properties";

fn read_indirection_file<R: BufRead>(reader: R) -> io::Result<String> {
    let Some(line) = reader.lines().next() else {
        return Ok(String::new());
    };
    Ok(line?.trim().to_string())
}

fn read_metadata_file<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

fn read_metadata(indirection: &Path) -> io::Result<Vec<String>> {
    let file = File::open(indirection)?;
    let metadata_path = read_indirection_file(BufReader::new(file))?;
    if metadata_path.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "metadata file name is empty",
        ));
    }

    let file = File::open(&metadata_path)?;
    read_metadata_file(BufReader::new(file))
}

/// Parse `key=value` lines, split at the first `=`.
///
/// Lines without `=` or with an empty key or value are skipped.
pub fn parse_metadata<S: AsRef<str>>(lines: &[S]) -> Vec<Dimension> {
    let mut dims = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        let Some(p) = memchr(b'=', line.as_bytes()) else {
            warn!("invalid OneAgent metadata line '{line}'");
            continue;
        };
        let (key, value) = (&line[..p], &line[p + 1..]);
        if key.is_empty() || value.is_empty() {
            warn!("invalid OneAgent metadata line '{line}'");
            continue;
        }
        dims.push(Dimension::new(key, value));
    }
    dims
}

/// Read the OneAgent metadata through the given indirection file.
///
/// Any error is logged and results in an empty list.
pub fn metadata_from(indirection: &Path) -> NormalizedDimensionList {
    match read_metadata(indirection) {
        Ok(lines) => NormalizedDimensionList::new(parse_metadata(&lines)),
        Err(e) => {
            info!("no OneAgent metadata available, this is normal if no OneAgent is installed");
            debug!("failed to read OneAgent metadata via {}: {e}", indirection.display());
            NormalizedDimensionList::default()
        }
    }
}

/// Read the OneAgent metadata through the well known indirection file.
pub fn metadata() -> NormalizedDimensionList {
    metadata_from(Path::new(INDIRECTION_FILE_NAME))
}
