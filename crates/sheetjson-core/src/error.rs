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

//! Error types for the resolution engine.

use thiserror::Error;

/// Fatal errors raised while resolving a workbook.
///
/// Every malformed directive aborts the run. Deferred references that stay
/// unresolved after the retry pass are not errors and never surface here.
///
/// # Examples
///
/// ```
/// use sheetjson_core::EngineError;
///
/// let err = EngineError::MissingRefOption {
///     table: "Products".to_string(),
///     key: "category:Categories".to_string(),
/// };
/// assert!(err.to_string().contains("'ref' option"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A reference key names a table that is not part of the workbook.
    #[error("Unknown reference target '{target}' in key '{key}' of table '{table}'")]
    UnknownReferenceTarget {
        /// Table holding the reference key.
        table: String,
        /// Raw directive key.
        key: String,
        /// Table name extracted from the key.
        target: String,
    },

    /// A reference key contains more than one reference delimiter.
    #[error("Key '{key}' in table '{table}' references more than one table or is malformed")]
    MultiReferenceSyntax {
        /// Table holding the reference key.
        table: String,
        /// Raw directive key.
        key: String,
    },

    /// A reference key has no `ref` option.
    #[error("Key '{key}' in table '{table}' must carry a 'ref' option to reference another table")]
    MissingRefOption {
        /// Table holding the reference key.
        table: String,
        /// Raw directive key.
        key: String,
    },

    /// An override table holds more than one row.
    #[error("Override table '{table}' may hold a single row, found {rows}")]
    MultipleOverrideRows {
        /// Override table name.
        table: String,
        /// Number of rows found.
        rows: usize,
    },

    /// Two tables share the same name.
    #[error("Duplicate table name '{0}'")]
    DuplicateTable(String),
}

impl EngineError {
    /// Fill in the owning table for errors raised by the table-agnostic
    /// grammar parser.
    pub(crate) fn in_table(self, table: &str) -> Self {
        match self {
            Self::MultiReferenceSyntax { key, .. } => Self::MultiReferenceSyntax {
                table: table.to_string(),
                key,
            },
            Self::MissingRefOption { key, .. } => Self::MissingRefOption {
                table: table.to_string(),
                key,
            },
            Self::UnknownReferenceTarget { key, target, .. } => {
                Self::UnknownReferenceTarget {
                    table: table.to_string(),
                    key,
                    target,
                }
            }
            other => other,
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
