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

//! Tables, row-records and the workbook handed to the engine.

use serde_json::{Map, Number, Value};

/// One spreadsheet row: raw column key to cell value, in column order.
pub type Row = Map<String, Value>;

/// A named, ordered sequence of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table (sheet) name, including any marker or option block.
    pub name: String,
    /// Rows in source order.
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Build a table from JSON row objects, ignoring anything that is not an
    /// object.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use sheetjson_core::Table;
    ///
    /// let table = Table::from_values("Items", vec![json!({"id": 1}), json!({"id": 2})]);
    /// assert_eq!(table.rows.len(), 2);
    /// ```
    pub fn from_values(name: impl Into<String>, rows: Vec<Value>) -> Self {
        let rows = rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        Self::new(name, rows)
    }
}

/// The ordered set of tables read from one source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub tables: Vec<Table>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table, keeping source order.
    pub fn push(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Table names in source order.
    pub fn names(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<Table> for Workbook {
    fn from_iter<I: IntoIterator<Item = Table>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

/// Render a cell value the way it is compared against reference tokens.
///
/// Integral floats print without a fraction so that a numeric cell `1.0`
/// matches the token `1`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sheetjson_core::stringify;
///
/// assert_eq!(stringify(&json!("A")), "A");
/// assert_eq!(stringify(&json!(42)), "42");
/// assert_eq!(stringify(&json!(2.0)), "2");
/// assert_eq!(stringify(&json!(2.5)), "2.5");
/// ```
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
