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

//! Hierarchy expansion of dotted keys.

use crate::merge::deep_merge;
use crate::table::Row;
use serde_json::{Map, Value};

/// Expand the flat key `key` (already split into `segments`) inside
/// `record`.
///
/// The record's value at `key` becomes the innermost value of
/// `{s0: {s1: {...: value}}}`. When `s0` already holds a value, the new
/// structure is deep-merged on top of it. The flat key is removed.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sheetjson_core::hierarchy::expand;
///
/// let mut record = json!({"a.b": 1, "a.c": 2}).as_object().cloned().unwrap();
/// expand("a.b", &["a".into(), "b".into()], &mut record);
/// expand("a.c", &["a".into(), "c".into()], &mut record);
/// assert_eq!(serde_json::Value::Object(record), json!({"a": {"b": 1, "c": 2}}));
/// ```
pub fn expand(key: &str, segments: &[String], record: &mut Row) {
    let Some((root, rest)) = segments.split_first() else {
        return;
    };
    let Some(value) = record.shift_remove(key) else {
        return;
    };

    let nested = nest(rest, value);

    match record.get_mut(root.as_str()) {
        Some(existing) => deep_merge(existing, nested),
        None => {
            record.insert(root.clone(), nested);
        }
    }
}

/// Wrap `value` in one object per segment, innermost segment last.
pub fn nest(segments: &[String], value: Value) -> Value {
    segments.iter().rev().fold(value, |acc, segment| {
        let mut map = Map::with_capacity(1);
        map.insert(segment.clone(), acc);
        Value::Object(map)
    })
}
