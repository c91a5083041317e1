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


//! Read `.xlsx` workbooks through calamine.

use crate::error::Result;
use crate::records::{build_record, header_names, number_value};
use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::Value;
use sheetjson_core::{Table, Workbook};
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, info};

/// Read every sheet of an `.xlsx` file, in workbook order.
pub fn read_xlsx(path: &Path) -> Result<Workbook> {
    let workbook: Xlsx<_> = open_workbook(path)?;
    collect_sheets(workbook)
}

/// Read an `.xlsx` workbook from memory or any seekable reader.
pub fn from_xlsx_reader<RS: Read + Seek>(reader: RS) -> Result<Workbook> {
    let workbook = Xlsx::new(reader)?;
    collect_sheets(workbook)
}

fn collect_sheets<RS: Read + Seek>(mut workbook: Xlsx<RS>) -> Result<Workbook> {
    let sheet_names = workbook.sheet_names().to_owned();
    let mut out = Workbook::new();

    for sheet_name in sheet_names {
        let range = workbook.worksheet_range(&sheet_name)?;
        let mut sheet_rows = range.rows();

        let Some(header) = sheet_rows.next() else {
            debug!("sheet [{}] is empty", sheet_name);
            out.push(Table::new(sheet_name, Vec::new()));
            continue;
        };
        let header = header_names(header.iter().map(cell_value));

        let rows: Vec<_> = sheet_rows
            .filter_map(|cells| build_record(&header, cells.iter().map(cell_value)))
            .collect();

        info!("read {} rows from sheet [{}]", rows.len(), sheet_name);
        out.push(Table::new(sheet_name, rows));
    }

    Ok(out)
}

/// JSON value of one cell; `None` for cells that carry nothing.
///
/// Date-times are kept as their serial number. Error cells are dropped.
pub(crate) fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::Int(i) => Some(Value::from(*i)),
        Data::Float(f) => number_value(*f),
        Data::DateTime(dt) => number_value(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::String(s.clone())),
    }
}
