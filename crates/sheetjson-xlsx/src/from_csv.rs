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


//! Read CSV files as single-table workbooks.

use crate::error::{ReadError, Result};
use crate::records::{build_record, header_names, number_value};
use serde_json::Value;
use sheetjson_core::Table;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Default maximum number of data rows read from one source.
///
/// Guards against unbounded memory use on very large inputs; adjust through
/// [`FromCsvConfig::max_rows`].
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for CSV parsing.
///
/// # Examples
///
/// ```
/// # use sheetjson_xlsx::FromCsvConfig;
/// let config = FromCsvConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
///
/// // Semicolon-separated export
/// let config = FromCsvConfig {
///     delimiter: b';',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from fields (default: `true`).
    pub trim: bool,

    /// Maximum number of data rows to parse (default: 1,000,000).
    pub max_rows: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Parse CSV text into a table named `name`.
///
/// The first record is the header row. Numeric fields become JSON numbers,
/// everything else stays a string; empty fields are omitted.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sheetjson_xlsx::{from_csv_str, FromCsvConfig};
///
/// let table = from_csv_str("Items", "id,name\n1,Apple\n2,\n", &FromCsvConfig::default()).unwrap();
/// assert_eq!(table.name, "Items");
/// assert_eq!(table.rows.len(), 2);
/// assert_eq!(table.rows[1].get("id"), Some(&json!(2)));
/// assert!(table.rows[1].get("name").is_none());
/// ```
pub fn from_csv_str(name: &str, input: &str, config: &FromCsvConfig) -> Result<Table> {
    from_csv_reader(name, input.as_bytes(), config)
}

/// Parse CSV from any reader into a table named `name`.
pub fn from_csv_reader<R: Read>(name: &str, reader: R, config: &FromCsvConfig) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let mut records = csv_reader.records();

    let header = match records.next() {
        Some(result) => header_names(result?.iter().map(parse_field)),
        None => return Ok(Table::new(name, Vec::new())),
    };

    let mut rows = Vec::new();
    for (idx, result) in records.enumerate() {
        if idx >= config.max_rows {
            return Err(ReadError::SecurityLimit {
                limit: config.max_rows,
                actual: idx + 1,
            });
        }

        let record = result?;

        if let Some(row) = build_record(&header, record.iter().map(parse_field)) {
            rows.push(row);
        }
    }

    info!("read {} rows from csv table [{}]", rows.len(), name);
    Ok(Table::new(name, rows))
}

/// Read a CSV file; the table is named after the file stem.
pub fn read_csv(path: &Path, config: &FromCsvConfig) -> Result<Table> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    let file = File::open(path)?;
    from_csv_reader(&name, file, config)
}

/// Type a single CSV field.
///
/// - empty → `None`
/// - integer or finite float text → number
/// - anything else → string
fn parse_field(field: &str) -> Option<Value> {
    if field.is_empty() {
        return None;
    }

    if let Ok(n) = field.parse::<i64>() {
        return Some(Value::from(n));
    }

    if looks_numeric(field) {
        if let Some(v) = field.parse::<f64>().ok().and_then(number_value) {
            return Some(v);
        }
    }

    Some(Value::String(field.to_string()))
}

/// Rejects the textual forms `f64` parsing also accepts (`inf`, `NaN`).
fn looks_numeric(field: &str) -> bool {
    field
        .trim_start_matches(['+', '-'])
        .starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(table: &Table) -> Value {
        Value::Array(table.rows.iter().cloned().map(Value::Object).collect())
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("42"), Some(json!(42)));
        assert_eq!(parse_field("-7"), Some(json!(-7)));
        assert_eq!(parse_field("2.50"), Some(json!(2.5)));
        assert_eq!(parse_field("3.0"), Some(json!(3)));
        assert_eq!(parse_field("inf"), Some(json!("inf")));
        assert_eq!(parse_field("NaN"), Some(json!("NaN")));
        assert_eq!(parse_field("A,B"), Some(json!("A,B")));
        assert_eq!(parse_field("true"), Some(json!("true")));
    }

    #[test]
    fn test_grammar_headers_survive() {
        let csv = "id,price.amount,cat:Categories$ref=id\n1,5,\"A,B\"\n";
        let table = from_csv_str("Products", csv, &FromCsvConfig::default()).unwrap();
        assert_eq!(
            rows(&table),
            json!([{"id": 1, "price.amount": 5, "cat:Categories$ref=id": "A,B"}])
        );
    }

    #[test]
    fn test_blank_rows_skipped() {
        let csv = "a,b\n1,2\n,\n3,4\n";
        let table = from_csv_str("T", csv, &FromCsvConfig::default()).unwrap();
        assert_eq!(rows(&table), json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}]));
    }

    #[test]
    fn test_short_rows_allowed() {
        let csv = "a,b,c\n1\n";
        let table = from_csv_str("T", csv, &FromCsvConfig::default()).unwrap();
        assert_eq!(rows(&table), json!([{"a": 1}]));
    }

    #[test]
    fn test_empty_input() {
        let table = from_csv_str("T", "", &FromCsvConfig::default()).unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_trim_disabled() {
        let config = FromCsvConfig {
            trim: false,
            ..Default::default()
        };
        let table = from_csv_str("T", "a\n x \n", &config).unwrap();
        assert_eq!(rows(&table), json!([{"a": " x "}]));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = FromCsvConfig {
            delimiter: b';',
            ..Default::default()
        };
        let table = from_csv_str("T", "a;b\nx;1,5\n", &config).unwrap();
        assert_eq!(rows(&table), json!([{"a": "x", "b": "1,5"}]));
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let result = from_csv_reader("T", &b"a\n\xff\xfe\n"[..], &FromCsvConfig::default());
        assert!(matches!(result, Err(ReadError::Csv(_))));

        let result = from_csv_reader("T", &b"\xff\n1\n"[..], &FromCsvConfig::default());
        assert!(matches!(result, Err(ReadError::Csv(_))));
    }

    #[test]
    fn test_row_limit() {
        let config = FromCsvConfig {
            max_rows: 2,
            ..Default::default()
        };
        let result = from_csv_str("T", "a\n1\n2\n3\n", &config);
        assert!(matches!(
            result,
            Err(ReadError::SecurityLimit { limit: 2, actual: 3 })
        ));
    }
}
