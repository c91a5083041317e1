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


//! Reading sources from disk.

use serde_json::json;
use serde_json::Value;
use sheetjson_core::Engine;
use sheetjson_xlsx::{from_xlsx_reader, read_workbook, ReadError};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_csv_table_named_after_stem() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "Products.csv", "sku,name\n1,Pen\n");
    let workbook = read_workbook(&path).unwrap();
    assert_eq!(workbook.names(), vec!["Products".to_string()]);
    assert_eq!(
        Value::Object(workbook.get("Products").unwrap().rows[0].clone()),
        json!({"sku": 1, "name": "Pen"})
    );
}

#[test]
fn test_csv_feeds_engine() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "Items.csv",
        "id,meta.color,meta.size,parent:Items$ref=id\n1,red,L,\n2,blue,,1\n",
    );
    let workbook = read_workbook(&path).unwrap();
    let output = Engine::default().run(&workbook).unwrap();
    assert_eq!(
        output.artifacts[0].document,
        json!({"data": [
            {"id": 1, "meta": {"color": "red", "size": "L"}},
            {"id": 2, "meta": {"color": "blue"}, "parent": [
                {"id": 1, "meta": {"color": "red", "size": "L"}}
            ]}
        ]})
    );
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "data.txt", "a\n1\n");
    assert!(matches!(
        read_workbook(&path),
        Err(ReadError::UnsupportedExtension(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    assert!(matches!(read_workbook(&path), Err(ReadError::Io(_))));
}

#[test]
fn test_corrupt_xlsx() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.xlsx", "plain text");
    assert!(matches!(read_workbook(&path), Err(ReadError::Xlsx(_))));
}

// ===== xlsx =====

fn rows_of(workbook: &sheetjson_core::Workbook, name: &str) -> Value {
    Value::Array(
        workbook
            .get(name)
            .unwrap()
            .rows
            .iter()
            .cloned()
            .map(Value::Object)
            .collect(),
    )
}

/// Products (duplicate and empty headers, a blank row), Categories,
/// an override sheet and an internal sheet, in that order.
fn catalog_workbook() -> rust_xlsxwriter::Workbook {
    let mut workbook = rust_xlsxwriter::Workbook::new();

    let products = workbook.add_worksheet();
    products.set_name("Products$key=products").unwrap();
    products.write_string(0, 0, "sku").unwrap();
    products.write_string(0, 1, "cat:Categories$ref=id").unwrap();
    products.write_string(0, 3, "sku").unwrap();
    products.write_number(1, 0, 10).unwrap();
    products.write_string(1, 1, "A,B").unwrap();
    products.write_string(1, 2, "x").unwrap();
    products.write_number(1, 3, 2.5).unwrap();
    products.write_number(3, 0, 11).unwrap();
    products.write_string(3, 1, "C").unwrap();
    products.write_number(3, 3, 3).unwrap();

    let categories = workbook.add_worksheet();
    categories.set_name("Categories").unwrap();
    categories.write_string(0, 0, "id").unwrap();
    categories.write_string(0, 1, "__secret").unwrap();
    categories.write_string(0, 2, "active").unwrap();
    categories.write_string(1, 0, "A").unwrap();
    categories.write_number(1, 1, 1).unwrap();
    categories.write_boolean(1, 2, true).unwrap();
    categories.write_string(2, 0, "B").unwrap();
    categories.write_string(3, 0, "C").unwrap();

    let defaults = workbook.add_worksheet();
    defaults.set_name("!Products").unwrap();
    defaults.write_string(0, 0, "version.major").unwrap();
    defaults.write_number(1, 0, 2).unwrap();

    let meta = workbook.add_worksheet();
    meta.set_name("__meta").unwrap();
    meta.write_string(0, 0, "k").unwrap();
    meta.write_string(1, 0, "v").unwrap();

    workbook
}

#[test]
fn test_xlsx_sheets_in_workbook_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.xlsx");
    catalog_workbook().save(&path).unwrap();

    let workbook = read_workbook(&path).unwrap();
    assert_eq!(
        workbook.names(),
        vec![
            "Products$key=products".to_string(),
            "Categories".to_string(),
            "!Products".to_string(),
            "__meta".to_string(),
        ]
    );
}

#[test]
fn test_xlsx_headers_typing_and_blank_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.xlsx");
    catalog_workbook().save(&path).unwrap();

    let workbook = read_workbook(&path).unwrap();
    assert_eq!(
        rows_of(&workbook, "Products$key=products"),
        json!([
            {"sku": 10, "cat:Categories$ref=id": "A,B", "__EMPTY": "x", "sku_1": 2.5},
            {"sku": 11, "cat:Categories$ref=id": "C", "sku_1": 3}
        ])
    );
    assert_eq!(
        rows_of(&workbook, "Categories"),
        json!([
            {"id": "A", "__secret": 1, "active": true},
            {"id": "B"},
            {"id": "C"}
        ])
    );

    // Integral numbers come out as JSON integers, not floats.
    let first = &workbook.get("Products$key=products").unwrap().rows[0];
    assert!(first.get("sku").unwrap().is_i64());
}

#[test]
fn test_xlsx_feeds_engine() {
    let bytes = catalog_workbook().save_to_buffer().unwrap();
    let workbook = from_xlsx_reader(Cursor::new(bytes)).unwrap();

    let output = Engine::default().run(&workbook).unwrap();
    let names: Vec<&str> = output.artifacts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Products", "Categories"]);
    assert_eq!(
        output.artifacts[0].document,
        json!({
            "version": {"major": 2},
            "products": [
                {"sku": 10, "__EMPTY": "x", "sku_1": 2.5, "cat": [
                    {"id": "A", "active": true},
                    {"id": "B"}
                ]},
                {"sku": 11, "sku_1": 3, "cat": [{"id": "C"}]}
            ]
        })
    );
}
