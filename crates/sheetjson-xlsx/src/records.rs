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


//! Header-row to record conversion shared by the xlsx and csv readers.
//!
//! The first row of a sheet names the fields; each following row becomes a
//! record keyed by those names.

use serde_json::{Number, Value};
use sheetjson_core::{stringify, Row};
use std::collections::HashSet;

/// Name given to header cells that are empty.
pub const EMPTY_HEADER: &str = "__EMPTY";

/// Turn raw header cells into unique field names.
///
/// Empty cells become [`EMPTY_HEADER`]; repeated names get `_1`, `_2`, ...
/// suffixes in order of appearance.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use sheetjson_xlsx::header_names;
///
/// let names = header_names(vec![Some(json!("id")), None, Some(json!("id")), Some(Value::Null)]);
/// assert_eq!(names, vec!["id", "__EMPTY", "id_1", "__EMPTY_1"]);
/// ```
pub fn header_names<I>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<Value>>,
{
    let mut taken = HashSet::new();
    let mut names = Vec::new();

    for cell in cells {
        let base = cell
            .map(|v| stringify(&v))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| EMPTY_HEADER.to_string());

        let mut name = base.clone();
        let mut n = 1;
        while taken.contains(&name) {
            name = format!("{}_{}", base, n);
            n += 1;
        }
        taken.insert(name.clone());
        names.push(name);
    }

    names
}

/// Build a record from one data row.
///
/// Empty cells are omitted; cells beyond the header width are dropped.
/// Returns `None` when the row carries no value at all.
pub fn build_record<I>(header: &[String], cells: I) -> Option<Row>
where
    I: IntoIterator<Item = Option<Value>>,
{
    let record: Row = header
        .iter()
        .zip(cells)
        .filter_map(|(name, cell)| cell.map(|v| (name.clone(), v)))
        .collect();

    (!record.is_empty()).then_some(record)
}

/// JSON number for a spreadsheet numeric, integral values as integers.
///
/// Non-finite values have no JSON form and yield `None`.
pub(crate) fn number_value(f: f64) -> Option<Value> {
    if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 {
        return Some(Value::from(f as i64));
    }
    Number::from_f64(f).map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_names_plain() {
        let names = header_names(vec![Some(json!("a")), Some(json!("b.c"))]);
        assert_eq!(names, vec!["a", "b.c"]);
    }

    #[test]
    fn test_header_names_numeric_header() {
        let names = header_names(vec![Some(json!(2024)), Some(json!(1.5))]);
        assert_eq!(names, vec!["2024", "1.5"]);
    }

    #[test]
    fn test_header_names_duplicates_and_empties() {
        let names = header_names(vec![
            None,
            Some(json!("x")),
            None,
            Some(json!("x")),
            Some(json!("x")),
            Some(json!("")),
        ]);
        assert_eq!(
            names,
            vec!["__EMPTY", "x", "__EMPTY_1", "x_1", "x_2", "__EMPTY_2"]
        );
    }

    #[test]
    fn test_header_names_suffix_collision() {
        let names = header_names(vec![Some(json!("a_1")), Some(json!("a")), Some(json!("a"))]);
        assert_eq!(names, vec!["a_1", "a", "a_2"]);
    }

    #[test]
    fn test_build_record_skips_empty_cells() {
        let header = header_names(vec![Some(json!("a")), Some(json!("b")), Some(json!("c"))]);
        let record = build_record(&header, vec![Some(json!(1)), None, Some(json!("z"))]).unwrap();
        assert_eq!(Value::Object(record), json!({"a": 1, "c": "z"}));
    }

    #[test]
    fn test_build_record_blank_row() {
        let header = vec!["a".to_string()];
        assert!(build_record(&header, vec![None]).is_none());
    }

    #[test]
    fn test_build_record_extra_cells_dropped() {
        let header = vec!["a".to_string()];
        let record = build_record(&header, vec![Some(json!(1)), Some(json!(2))]).unwrap();
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(3.0), Some(json!(3)));
        assert_eq!(number_value(-0.0), Some(json!(0)));
        assert_eq!(number_value(2.5), Some(json!(2.5)));
        assert_eq!(number_value(f64::NAN), None);
    }
}
