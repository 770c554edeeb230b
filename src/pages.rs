// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page data loading: where untrusted JSON becomes `PageRecord`s.
//!
//! This is the one place shapes get checked. Each element is decoded on its
//! own so a bad record is reported by position. `null` is an empty
//! collection, the same as a site that never defined any pages.

use crate::types::PageRecord;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageDataError {
    #[error("page data is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("page data must be a JSON array of page records")]
    NotAnArray,
    #[error("page record {index} is malformed: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Decode an already-parsed JSON value.
pub fn pages_from_value(value: Value) -> Result<Vec<PageRecord>, PageDataError> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        _ => return Err(PageDataError::NotAnArray),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| PageDataError::Record { index, source })
        })
        .collect()
}

/// Decode page data from a JSON string.
pub fn load_pages(json: &str) -> Result<Vec<PageRecord>, PageDataError> {
    let value: Value = serde_json::from_str(json).map_err(PageDataError::Json)?;
    pages_from_value(value)
}

/// Read and decode a page data file.
pub fn load_pages_from_path(path: impl AsRef<Path>) -> Result<Vec<PageRecord>, PageDataError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| PageDataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_pages(&raw)
}
