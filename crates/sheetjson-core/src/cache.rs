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

//! Per-run resolution state: the result cache and the deferred queue.

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Resolved documents keyed by table name.
///
/// Each document is `{ <wrapper>: [rows...] }` until overrides add
/// further top-level keys.
#[derive(Debug, Clone, Default)]
pub struct ResultCache {
    wrapper_key: String,
    documents: HashMap<String, Map<String, Value>>,
}

impl ResultCache {
    pub fn new(wrapper_key: impl Into<String>) -> Self {
        Self {
            wrapper_key: wrapper_key.into(),
            documents: HashMap::new(),
        }
    }

    /// Key under which rows are stored.
    pub fn wrapper_key(&self) -> &str {
        &self.wrapper_key
    }

    /// Store a table's rows, replacing any previous document.
    pub fn insert_rows(&mut self, table: &str, rows: Vec<Value>) {
        let mut document = Map::with_capacity(1);
        document.insert(self.wrapper_key.clone(), Value::Array(rows));
        self.documents.insert(table.to_string(), document);
    }

    /// Replace the rows of an already cached table, keeping the rest of its
    /// document.
    pub fn set_rows(&mut self, table: &str, rows: Vec<Value>) {
        match self.documents.get_mut(table) {
            Some(document) => {
                document.insert(self.wrapper_key.clone(), Value::Array(rows));
            }
            None => self.insert_rows(table, rows),
        }
    }

    /// Whether the table has finished its first pass.
    pub fn contains(&self, table: &str) -> bool {
        self.rows(table).is_some()
    }

    /// Cached rows of a table.
    pub fn rows(&self, table: &str) -> Option<&[Value]> {
        self.documents
            .get(table)
            .and_then(|doc| doc.get(&self.wrapper_key))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    pub fn document(&self, table: &str) -> Option<&Map<String, Value>> {
        self.documents.get(table)
    }

    pub fn replace_document(&mut self, table: &str, document: Map<String, Value>) {
        self.documents.insert(table.to_string(), document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// A reference postponed until its target table is cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeferredEntry {
    /// Table holding the reference key.
    pub table: String,
    /// Raw directive key.
    pub key: String,
}

/// Ordered, duplicate-free list of deferred references.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    entries: Vec<DeferredEntry>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an entry; returns `false` if it was already queued.
    pub fn push(&mut self, table: &str, key: &str) -> bool {
        if self.contains(table, key) {
            return false;
        }
        self.entries.push(DeferredEntry {
            table: table.to_string(),
            key: key.to_string(),
        });
        true
    }

    pub fn contains(&self, table: &str, key: &str) -> bool {
        self.entries.iter().any(|e| e.table == table && e.key == key)
    }

    /// Remove and return every queued entry in push order.
    pub fn drain(&mut self) -> Vec<DeferredEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn entries(&self) -> &[DeferredEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// State shared by every step of one run. Discarded once output is shaped.
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    pub cache: ResultCache,
    pub deferred: DeferredQueue,
}

impl ResolveContext {
    pub fn new(wrapper_key: impl Into<String>) -> Self {
        Self {
            cache: ResultCache::new(wrapper_key),
            deferred: DeferredQueue::new(),
        }
    }
}
