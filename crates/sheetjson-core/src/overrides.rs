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

//! Override tables.
//!
//! A single-row table named `!Items` is merged into the resolved document
//! of the table named `Items$...`. The target's own values win scalar
//! conflicts; the override only fills gaps.

use crate::cache::ResultCache;
use crate::error::{EngineError, Result};
use crate::grammar::{KeyGrammar, TableKind};
use crate::merge::deep_merge;
use serde_json::Value;
use tracing::{info, warn};

/// Merge every override table into its target's cached document.
///
/// `names` are the workbook's table names in source order. Returns the
/// number of overrides applied.
///
/// # Errors
///
/// [`EngineError::MultipleOverrideRows`] if an override table holds more
/// than one row.
pub fn apply_overrides(
    names: &[String],
    grammar: &KeyGrammar<'_>,
    cache: &mut ResultCache,
) -> Result<usize> {
    let mut applied = 0;

    for name in names {
        if grammar.table_kind(name) != TableKind::Override {
            continue;
        }

        let override_row = match cache.rows(name) {
            Some([row]) => row.clone(),
            Some([]) | None => {
                warn!("override table [{}] has no row, skipping", name);
                continue;
            }
            Some(rows) => {
                return Err(EngineError::MultipleOverrideRows {
                    table: name.clone(),
                    rows: rows.len(),
                })
            }
        };

        let Some(target) = names.iter().find(|t| grammar.is_override_target(name, t)) else {
            warn!("override table [{}] matches no table, skipping", name);
            continue;
        };
        let Some(document) = cache.document(target) else {
            continue;
        };

        let mut merged = override_row;
        deep_merge(&mut merged, Value::Object(document.clone()));

        if let Value::Object(merged) = merged {
            cache.replace_document(target, merged);
            info!("merged override [{}] into [{}]", name, target);
            applied += 1;
        }
    }

    Ok(applied)
}
