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


//! Spreadsheet sources for sheetjson.
//!
//! Reads `.xlsx` workbooks (every sheet, in workbook order) and `.csv` files
//! (one table named after the file stem) into a [`sheetjson_core::Workbook`].
//!
//! Each sheet's first row is its header. Header cells become field names
//! verbatim, so key-grammar headers such as `price.amount` or
//! `cat:Categories$ref=id` reach the engine untouched.
//!
//! - empty header cells are named `__EMPTY`, `__EMPTY_1`, ...
//! - repeated header names get `_1`, `_2`, ... suffixes
//! - empty cells are left out of the record
//! - rows without any value are skipped
//!
//! # Examples
//!
//! ```no_run
//! use sheetjson_xlsx::read_workbook;
//! use std::path::Path;
//!
//! let workbook = read_workbook(Path::new("catalog.xlsx")).unwrap();
//! for name in workbook.names() {
//!     println!("{}", name);
//! }
//! ```

mod error;
mod from_csv;
mod records;
mod xlsx;

pub use error::{ReadError, Result};
pub use from_csv::{from_csv_reader, from_csv_str, read_csv, FromCsvConfig, DEFAULT_MAX_ROWS};
pub use records::{build_record, header_names, EMPTY_HEADER};
pub use xlsx::{from_xlsx_reader, read_xlsx};

use sheetjson_core::Workbook;
use std::path::Path;

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Office Open XML workbook.
    Xlsx,
    /// Comma-separated values.
    Csv,
}

impl SourceFormat {
    /// Detect the format from the path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" => Ok(SourceFormat::Xlsx),
            "csv" => Ok(SourceFormat::Csv),
            _ => Err(ReadError::UnsupportedExtension(ext)),
        }
    }
}

/// Read a source file into a workbook, dispatching on its extension.
///
/// # Errors
///
/// [`ReadError::UnsupportedExtension`] for anything but `.xlsx`/`.csv`, and
/// the reader's own errors otherwise.
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    read_workbook_with_config(path, &FromCsvConfig::default())
}

/// [`read_workbook`] with explicit CSV settings.
pub fn read_workbook_with_config(path: &Path, csv_config: &FromCsvConfig) -> Result<Workbook> {
    match SourceFormat::from_path(path)? {
        SourceFormat::Xlsx => read_xlsx(path),
        SourceFormat::Csv => Ok(std::iter::once(read_csv(path, csv_config)?).collect()),
    }
}
