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


//! JSON output for sheetjson artifacts.
//!
//! Serializes engine artifacts with their key order intact and writes each
//! one to `<outdir>/<prefix><name>.json`.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use sheetjson_json::{to_json, ToJsonConfig};
//!
//! let text = to_json(&json!({"data": [{"id": 1}]}), &ToJsonConfig::default()).unwrap();
//! assert_eq!(text, r#"{"data":[{"id":1}]}"#);
//! ```

mod error;
mod to_json;
mod write;

pub use error::{JsonError, Result};
pub use to_json::{to_json, ToJsonConfig};
pub use write::{write_artifacts, WriteConfig};
