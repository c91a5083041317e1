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

//! Output shaping: which tables become artifacts and under which wrapper.

use crate::cache::ResultCache;
use crate::grammar::{Directive, KeyGrammar, TableKind};
use serde_json::{Map, Value};
use tracing::debug;

/// One emitted document.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Artifact name: the table name with any option block stripped.
    pub name: String,
    /// `{ <wrapper>: [rows...], ... }`.
    pub document: Value,
}

/// Decide the emitted artifacts, in source table order.
///
/// - internal (`__x`) and override (`!x`) tables are never emitted
/// - `Name$key=k` is emitted as `Name` with the wrapper key renamed to `k`
/// - `Name$other=v` without a `key` option is not emitted
/// - anything else is emitted as-is under its own name
pub fn shape_output(names: &[String], grammar: &KeyGrammar<'_>, cache: &ResultCache) -> Vec<Artifact> {
    let mut artifacts = Vec::new();

    for name in names {
        if grammar.table_kind(name) != TableKind::Regular {
            debug!("[{}] is internal or an override, not emitted", name);
            continue;
        }
        let Some(document) = cache.document(name) else {
            continue;
        };

        match grammar.classify_table_name(name) {
            Directive::TableOption(table_name) => match table_name.wrapper_key() {
                Some(key) => artifacts.push(Artifact {
                    name: table_name.base.clone(),
                    document: Value::Object(rename_key(document, cache.wrapper_key(), key)),
                }),
                None => debug!("[{}] carries options without 'key', not emitted", name),
            },
            _ => artifacts.push(Artifact {
                name: name.clone(),
                document: Value::Object(document.clone()),
            }),
        }
    }

    artifacts
}

/// Copy of `document` with `from` renamed to `to`, keeping its position.
fn rename_key(document: &Map<String, Value>, from: &str, to: &str) -> Map<String, Value> {
    document
        .iter()
        .map(|(k, v)| {
            let key = if k == from { to.to_string() } else { k.clone() };
            (key, v.clone())
        })
        .collect()
}
