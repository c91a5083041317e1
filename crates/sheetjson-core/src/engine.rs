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

//! The two-phase resolution run.
//!
//! 1. Every table, in source order: expand hierarchy keys and resolve
//!    references whose target is already cached; queue the rest.
//! 2. Retry each queued reference once against the full cache.
//! 3. Merge override tables into their targets.
//! 4. Shape the emitted artifacts.

use crate::cache::{DeferredEntry, ResolveContext};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::grammar::{Directive, KeyGrammar};
use crate::hierarchy;
use crate::output::{shape_output, Artifact};
use crate::overrides::apply_overrides;
use crate::reference::ReferenceResolver;
use crate::table::{Row, Workbook};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info};

/// Result of one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// Emitted documents in source table order.
    pub artifacts: Vec<Artifact>,
    pub report: RunReport,
}

/// What happened during a run, for informational output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Tables processed in the first pass.
    pub tables: usize,
    /// References resolved by the retry pass.
    pub retried: Vec<DeferredEntry>,
    /// References left unresolved after the retry pass.
    pub unresolved: Vec<DeferredEntry>,
    /// Override tables merged into a target.
    pub overrides: usize,
}

/// The key-grammar resolution engine.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sheetjson_core::{Engine, Table, Workbook};
///
/// let workbook: Workbook = vec![
///     Table::from_values("Products", vec![json!({"sku": 1, "cat:Categories$ref=id": "A"})]),
///     Table::from_values("Categories", vec![json!({"id": "A", "name": "Alpha"})]),
/// ]
/// .into_iter()
/// .collect();
///
/// let output = Engine::default().run(&workbook).unwrap();
/// assert_eq!(output.artifacts[0].name, "Products");
/// assert_eq!(
///     output.artifacts[0].document,
///     json!({"data": [{"sku": 1, "cat": [{"id": "A", "name": "Alpha"}]}]})
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve every table of `workbook` and shape the output.
    ///
    /// The workbook is not modified; all state lives in a context owned by
    /// this call.
    ///
    /// # Errors
    ///
    /// Any [`EngineError`]; the run stops at the first one.
    pub fn run(&self, workbook: &Workbook) -> Result<Output> {
        let names = workbook.names();
        check_unique(&names)?;

        let grammar = KeyGrammar::new(&self.config);
        let resolver = ReferenceResolver::new(&self.config, &names);
        let mut ctx = ResolveContext::new(self.config.default_wrapper_key.clone());

        for table in &workbook.tables {
            info!("processing table [{}] ({} rows)", table.name, table.rows.len());

            let mut rows = Vec::with_capacity(table.rows.len());
            for record in &table.rows {
                let mut record = record.clone();
                self.resolve_record(&grammar, &resolver, &mut ctx, &mut record, &table.name)?;
                rows.push(Value::Object(record));
            }
            ctx.cache.insert_rows(&table.name, rows);
        }

        let retry = if ctx.deferred.is_empty() {
            Default::default()
        } else {
            info!("retrying {} deferred references", ctx.deferred.len());
            resolver.retry_deferred(&mut ctx)?
        };

        let overrides = apply_overrides(&names, &grammar, &mut ctx.cache)?;
        let artifacts = shape_output(&names, &grammar, &ctx.cache);

        info!(
            "resolved {} tables, emitting {} documents",
            names.len(),
            artifacts.len()
        );

        Ok(Output {
            artifacts,
            report: RunReport {
                tables: names.len(),
                retried: retry.resolved,
                unresolved: retry.unresolved,
                overrides,
            },
        })
    }

    /// Apply every directive key of one record, in column order.
    fn resolve_record(
        &self,
        grammar: &KeyGrammar<'_>,
        resolver: &ReferenceResolver<'_>,
        ctx: &mut ResolveContext,
        record: &mut Row,
        table: &str,
    ) -> Result<()> {
        let keys: Vec<String> = record.keys().cloned().collect();

        for key in keys {
            if !record.contains_key(&key) {
                continue;
            }
            let directive = grammar.classify_key(&key).map_err(|e| e.in_table(table))?;
            debug!("[{}] key [{}] -> {:?}", table, key, directive);

            match directive {
                Directive::Hierarchy(segments) => hierarchy::expand(&key, &segments, record),
                Directive::Reference(reference) => {
                    resolver.resolve_or_defer(ctx, &key, &reference, record, table)?;
                }
                Directive::Plain | Directive::TableOption(_) => {}
            }
        }

        Ok(())
    }
}

/// Resolve `workbook` with the default configuration.
pub fn convert(workbook: &Workbook) -> Result<Vec<Artifact>> {
    Engine::default().run(workbook).map(|output| output.artifacts)
}

fn check_unique(names: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(EngineError::DuplicateTable(name.clone()));
        }
    }
    Ok(())
}
