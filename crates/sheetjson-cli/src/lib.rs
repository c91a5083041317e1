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


//! sheetjson CLI library.
//!
//! Converts a spreadsheet (`.xlsx` or `.csv`) into one JSON file per emitted
//! table. Header cells carry the key grammar understood by
//! [`sheetjson_core`]: dotted paths build nested objects, `field:Table$ref=col`
//! embeds rows of another table, `Table$key=name` renames the wrapper key and
//! `!Table` sheets merge a single row of top-level values into their target.
//!
//! # Examples
//!
//! ```no_run
//! use sheetjson_cli::commands::{convert, ConvertOptions};
//!
//! # fn main() -> Result<(), sheetjson_cli::error::CliError> {
//! let summary = convert(&ConvertOptions::new("catalog.xlsx"))?;
//! for path in &summary.written {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
