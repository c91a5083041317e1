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

//! Key-grammar resolution engine for spreadsheet to JSON conversion.
//!
//! Column headers carry a compact directive grammar; this crate turns the
//! flat rows of every table into nested JSON documents:
//!
//! | Construct | Example | Effect |
//! |---|---|---|
//! | Hierarchy | `a.b.c` | `{a: {b: {c: value}}}` |
//! | Reference | `cat:Categories$ref=id` | rows of `Categories` whose `id` is listed in the cell |
//! | Reference affixes | `$ref_prefix=P_$ref_suffix=_[lang]` | decorate each match token |
//! | Table option | `Items$key=list` | emit `Items` as `{list: [...]}` |
//! | Override | `!Items` | merge a single row into `Items$...` |
//! | Internal / hidden | `__meta`, `__note` | never emitted / never embedded |
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sheetjson_core::{Engine, Table, Workbook};
//!
//! let workbook: Workbook = vec![
//!     Table::from_values("Categories", vec![
//!         json!({"id": "A", "label": "Alpha", "__internal": 1}),
//!         json!({"id": "B", "label": "Beta"}),
//!     ]),
//!     Table::from_values("Products$key=products", vec![
//!         json!({"sku": 10, "price.amount": 5, "price.currency": "EUR", "cats:Categories$ref=id": "A,B"}),
//!     ]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let output = Engine::default().run(&workbook).unwrap();
//! let products = &output.artifacts[1];
//! assert_eq!(products.name, "Products");
//! assert_eq!(products.document, json!({"products": [{
//!     "sku": 10,
//!     "price": {"amount": 5, "currency": "EUR"},
//!     "cats": [{"id": "A", "label": "Alpha"}, {"id": "B", "label": "Beta"}]
//! }]}));
//! ```
//!
//! References to tables further down the workbook are deferred and retried
//! once after every table has been processed; chains of forward references
//! are not followed further.

pub mod cache;
mod config;
mod engine;
mod error;
pub mod grammar;
pub mod hierarchy;
pub mod merge;
pub mod output;
pub mod overrides;
pub mod reference;
mod table;

pub use cache::{DeferredEntry, DeferredQueue, ResolveContext, ResultCache};
pub use config::{
    Delimiters, EngineConfig, EngineConfigBuilder, DEFAULT_HIDDEN_PREFIX, DEFAULT_WRAPPER_KEY,
};
pub use engine::{convert, Engine, Output, RunReport};
pub use error::{EngineError, Result};
pub use grammar::{
    substitute_own_keys, Directive, KeyGrammar, ReferenceKey, ReferenceOptions, TableKind,
    TableName,
};
pub use output::Artifact;
pub use reference::{ReferenceResolver, Resolution, RetryReport};
pub use table::{stringify, Row, Table, Workbook};
