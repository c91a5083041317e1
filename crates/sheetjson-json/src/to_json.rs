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


//! Document to JSON text.

use crate::error::Result;
use serde_json::Value;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct ToJsonConfig {
    /// Indent with two spaces instead of emitting compact JSON
    pub pretty: bool,
}

/// Serialize a document, keeping key insertion order.
pub fn to_json(value: &Value, config: &ToJsonConfig) -> Result<String> {
    let text = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_by_default() {
        let text = to_json(&json!({"data": [{"a": 1}]}), &ToJsonConfig::default()).unwrap();
        assert_eq!(text, r#"{"data":[{"a":1}]}"#);
    }

    #[test]
    fn test_pretty() {
        let config = ToJsonConfig { pretty: true };
        let text = to_json(&json!({"a": [1]}), &config).unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
    }

    #[test]
    fn test_key_order_preserved() {
        let mut map = serde_json::Map::new();
        map.insert("z".to_string(), json!(1));
        map.insert("a".to_string(), json!(2));
        let text = to_json(&Value::Object(map), &ToJsonConfig::default()).unwrap();
        assert_eq!(text, r#"{"z":1,"a":2}"#);
    }
}
