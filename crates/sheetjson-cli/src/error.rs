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


//! Structured error types for the sheetjson CLI.
//!
//! Every command returns `Result<T, CliError>`; `main` prints the error as
//! `Error: <message>` and exits with status 1.

use sheetjson_core::EngineError;
use sheetjson_json::JsonError;
use sheetjson_xlsx::ReadError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for sheetjson CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use sheetjson_cli::error::CliError;
///
/// fn probe(path: &str) -> Result<(), CliError> {
///     std::fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file metadata, read or write).
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)", path.display())]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// The input designation is not an `.xlsx`/`.csv` file name.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The source could not be read or parsed.
    #[error("Read error: {0}")]
    Read(String),

    /// The engine rejected the workbook.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Artifacts could not be serialized or written.
    #[error("Write error: {0}")]
    Write(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<ReadError> for CliError {
    fn from(source: ReadError) -> Self {
        Self::Read(source.to_string())
    }
}

impl From<JsonError> for CliError {
    fn from(source: JsonError) -> Self {
        Self::Write(source.to_string())
    }
}
