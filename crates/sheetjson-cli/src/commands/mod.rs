// sheetjson - Spreadsheet to JSON conversion
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! CLI command implementations

mod convert;

pub use convert::{convert, ConvertOptions, ConvertSummary};

use crate::error::CliError;
use std::fs;
use std::path::Path;

/// Default maximum input size to prevent OOM attacks (1 GB)
/// Can be overridden via SHEETJSON_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "SHEETJSON_MAX_FILE_SIZE";

/// Get the maximum file size from environment or use default.
///
/// Falls back to [`DEFAULT_MAX_FILE_SIZE`] if the variable is not set or
/// does not parse as a byte count.
fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Check that `path` exists and is within the size limit.
///
/// Returns the file size in bytes.
///
/// # Errors
///
/// - [`CliError::Io`] when the metadata cannot be read (typically a missing file)
/// - [`CliError::FileTooLarge`] when the size exceeds the configured maximum
pub fn check_file_size(path: &Path) -> Result<u64, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    let max_file_size = get_max_file_size();

    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }
    Ok(metadata.len())
}

/// Validate the input designation.
///
/// The file name must be a dot-free stem followed by `.xlsx` or `.csv`
/// (`book.xlsx`, `./Items.csv`); directories in front of it are allowed.
pub fn validate_input_name(path: &Path) -> Result<(), CliError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let valid = match name.split_once('.') {
        Some((stem, ext)) => !stem.is_empty() && matches!(ext, "xlsx" | "csv"),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CliError::invalid_input(format!(
            "'{}' is not an .xlsx or .csv file name",
            path.display()
        )))
    }
}
