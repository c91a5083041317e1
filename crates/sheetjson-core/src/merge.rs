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

//! Deep merge of nested JSON structures.

use serde_json::Value;

/// Merge `source` into `target`.
///
/// - objects merge key by key; keys already in `target` keep their position
/// - arrays at the same position concatenate, `target` items first
/// - any other pairing (scalar conflicts, object vs array) takes `source`
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sheetjson_core::merge::deep_merge;
///
/// let mut target = json!({"a": {"x": 1}, "tags": ["t1"], "n": 1});
/// deep_merge(&mut target, json!({"a": {"y": 2}, "tags": ["t2"], "n": 2}));
/// assert_eq!(target, json!({"a": {"x": 1, "y": 2}, "tags": ["t1", "t2"], "n": 2}));
/// ```
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) if is_mergeable(&value) => deep_merge(existing, value),
                    _ => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(source)) => target.extend(source),
        (target, source) => *target = source,
    }
}

/// Merge producing a new value: `merge(a, b)` with `b` winning scalar
/// conflicts.
pub fn merge(a: &Value, b: &Value) -> Value {
    let mut out = a.clone();
    deep_merge(&mut out, b.clone());
    out
}

fn is_mergeable(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
