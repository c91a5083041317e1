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


//! Error types for JSON output.

use std::path::PathBuf;
use thiserror::Error;

/// JSON output error types.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Serialization of a document failed.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An artifact file or the output directory could not be written.
    #[error("Failed to write '{}': {message}", path.display())]
    Write {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },
}

impl JsonError {
    /// Wrap an I/O error for `path`.
    pub fn write(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        JsonError::Write {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Convenience type alias for `Result` with `JsonError`.
pub type Result<T> = std::result::Result<T, JsonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = JsonError::write("out/Items.json", io);
        assert_eq!(err.to_string(), "Failed to write 'out/Items.json': denied");
    }
}
