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


//! Error types for reading spreadsheet sources.

use thiserror::Error;

/// Spreadsheet reading error types.
///
/// # Examples
///
/// ```
/// use sheetjson_xlsx::ReadError;
///
/// let err = ReadError::UnsupportedExtension("ods".to_string());
/// assert_eq!(err.to_string(), "Unsupported input extension: 'ods' (expected xlsx or csv)");
/// ```
#[derive(Debug, Error)]
pub enum ReadError {
    /// The workbook container could not be opened or a sheet could not be read.
    #[error("Failed to read xlsx: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    /// The CSV reader rejected the input (malformed record, invalid UTF-8).
    #[error("Failed to read csv: {0}")]
    Csv(#[from] csv::Error),

    /// The input path has no extension, or one that is not understood.
    #[error("Unsupported input extension: '{0}' (expected xlsx or csv)")]
    UnsupportedExtension(String),

    /// Row count exceeded the configured limit.
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count encountered.
        actual: usize,
    },

    /// I/O error while opening a source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result` with `ReadError`.
pub type Result<T> = std::result::Result<T, ReadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_display() {
        let err = ReadError::UnsupportedExtension("txt".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported input extension: 'txt' (expected xlsx or csv)"
        );
    }

    #[test]
    fn test_security_limit_display() {
        let err = ReadError::SecurityLimit {
            limit: 10,
            actual: 11,
        };
        assert_eq!(
            err.to_string(),
            "Security limit exceeded: row count 11 exceeds maximum 10"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ReadError::from(io_err);
        assert!(err.to_string().contains("I/O error"));
    }
}
