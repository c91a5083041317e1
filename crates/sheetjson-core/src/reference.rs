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

//! Cross-table reference resolution.
//!
//! A key `field:Target$ref=id` replaces the cell with every row of `Target`
//! whose `id` matches one of the comma-separated tokens in the cell.
//! References to tables that have not finished their first pass are queued
//! and retried exactly once after every table has been processed.

use crate::cache::{DeferredEntry, ResolveContext, ResultCache};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::grammar::{Directive, KeyGrammar, ReferenceKey};
use crate::table::{stringify, Row};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Outcome of one resolution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The local field now holds the matching rows.
    Resolved {
        /// Number of target rows embedded.
        matched: usize,
    },
    /// The target table is not cached yet; the record is unchanged.
    Deferred,
    /// The record does not carry the key; nothing to do.
    Missing,
}

/// Summary of the retry pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryReport {
    /// Entries whose target was available on retry.
    pub resolved: Vec<DeferredEntry>,
    /// Entries left in their raw form.
    pub unresolved: Vec<DeferredEntry>,
}

/// Resolves reference keys against the result cache.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
    config: &'a EngineConfig,
    known_tables: &'a [String],
}

impl<'a> ReferenceResolver<'a> {
    /// `known_tables` is every table name of the workbook, cached or not.
    pub fn new(config: &'a EngineConfig, known_tables: &'a [String]) -> Self {
        Self {
            config,
            known_tables,
        }
    }

    /// Resolve `raw_key` in `record` against `cache`.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownReferenceTarget`] if the target is not a table
    /// of the workbook.
    pub fn resolve(
        &self,
        cache: &ResultCache,
        raw_key: &str,
        reference: &ReferenceKey,
        record: &mut Row,
        origin: &str,
    ) -> Result<Resolution> {
        if !self.known_tables.iter().any(|t| *t == reference.target) {
            return Err(EngineError::UnknownReferenceTarget {
                table: origin.to_string(),
                key: raw_key.to_string(),
                target: reference.target.clone(),
            });
        }

        let Some(target_rows) = cache.rows(&reference.target) else {
            return Ok(Resolution::Deferred);
        };
        let Some(raw_value) = record.get(raw_key) else {
            return Ok(Resolution::Missing);
        };

        let options = reference.resolve_options(record);
        let tokens: HashSet<String> = stringify(raw_value)
            .split(self.config.delimiters.value_list)
            .map(|token| options.decorate(token, record))
            .collect();

        let matches: Vec<Value> = target_rows
            .iter()
            .filter_map(Value::as_object)
            .filter(|row| {
                row.get(&options.ref_field)
                    .map(|v| tokens.contains(&stringify(v)))
                    .unwrap_or(false)
            })
            .map(|row| Value::Object(self.strip_hidden(row)))
            .collect();

        let matched = matches.len();
        record.shift_remove(raw_key);
        record.insert(reference.field.clone(), Value::Array(matches));

        info!(
            "linked [{}] into [{}.{}] ({} rows)",
            reference.target, origin, reference.field, matched
        );
        Ok(Resolution::Resolved { matched })
    }

    /// Resolve, queueing the `(origin, raw_key)` pair when the target is not
    /// cached yet.
    pub fn resolve_or_defer(
        &self,
        ctx: &mut ResolveContext,
        raw_key: &str,
        reference: &ReferenceKey,
        record: &mut Row,
        origin: &str,
    ) -> Result<Resolution> {
        let resolution = self.resolve(&ctx.cache, raw_key, reference, record, origin)?;
        if resolution == Resolution::Deferred {
            if ctx.deferred.push(origin, raw_key) {
                info!(
                    "[{}] is not available yet, deferring [{}] of [{}]",
                    reference.target, raw_key, origin
                );
            } else {
                debug!("[{}] of [{}] already deferred", raw_key, origin);
            }
        }
        Ok(resolution)
    }

    /// Retry every deferred entry once against the populated cache.
    ///
    /// The queue is emptied; entries that still cannot be resolved are
    /// reported, not re-queued. Within [`Engine::run`](crate::Engine::run)
    /// every known table is cached before this pass, so `unresolved` stays
    /// empty there. It fills only when the resolver is driven with a cache
    /// still missing the origin or target table.
    pub fn retry_deferred(&self, ctx: &mut ResolveContext) -> Result<RetryReport> {
        let grammar = KeyGrammar::new(self.config);
        let mut report = RetryReport::default();

        for entry in ctx.deferred.drain() {
            info!("retrying [{}] of [{}]", entry.key, entry.table);

            let Directive::Reference(reference) = grammar
                .classify_key(&entry.key)
                .map_err(|e| e.in_table(&entry.table))?
            else {
                continue;
            };

            let Some(rows) = ctx.cache.rows(&entry.table) else {
                report.unresolved.push(entry);
                continue;
            };
            let mut rows = rows.to_vec();
            let mut still_deferred = false;

            for row in rows.iter_mut().filter_map(Value::as_object_mut) {
                if !row.contains_key(&entry.key) {
                    continue;
                }
                let resolution =
                    self.resolve(&ctx.cache, &entry.key, &reference, row, &entry.table)?;
                still_deferred |= resolution == Resolution::Deferred;
            }

            ctx.cache.set_rows(&entry.table, rows);

            if still_deferred {
                warn!(
                    "[{}] of [{}] could not be resolved and is left as is",
                    entry.key, entry.table
                );
                report.unresolved.push(entry);
            } else {
                report.resolved.push(entry);
            }
        }

        Ok(report)
    }

    /// Copy of `row` without hidden fields.
    fn strip_hidden(&self, row: &Map<String, Value>) -> Map<String, Value> {
        row.iter()
            .filter(|(k, _)| !self.config.is_hidden(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
