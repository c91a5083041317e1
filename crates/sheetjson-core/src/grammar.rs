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

//! Key grammar parsing.
//!
//! Column keys and table names carry a small directive language:
//!
//! ```text
//! a.b.c                         hierarchy: {a: {b: {c: value}}}
//! field:Table$ref=id            reference into Table, matching on id
//! field:Table$ref=id$ref_prefix=P_$ref_suffix=[lang]
//! Items$key=list                table-level option (on the table name)
//! !Items                        override table
//! __meta                        internal table / hidden field
//! ```
//!
//! Raw strings are classified once into a [`Directive`]; the builders and
//! resolvers downstream work only on the parsed form.

use crate::config::{Delimiters, EngineConfig};
use crate::error::{EngineError, Result};
use crate::table::{stringify, Row};

/// Option naming the target field matched by a reference.
pub const REF_OPTION: &str = "ref";
/// Option prepended to every match token.
pub const REF_PREFIX_OPTION: &str = "ref_prefix";
/// Option appended to every match token.
pub const REF_SUFFIX_OPTION: &str = "ref_suffix";
/// Table option renaming the top-level wrapper key.
pub const KEY_OPTION: &str = "key";

/// Ordered `name=value` pairs from an option block.
pub type Options = Vec<(String, String)>;

/// A classified key or table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// No grammar; the key is copied through untouched.
    Plain,
    /// Dotted path, outermost segment first.
    Hierarchy(Vec<String>),
    /// Reference into another table.
    Reference(ReferenceKey),
    /// Table name carrying an option block.
    TableOption(TableName),
}

/// A parsed `field:Target$opt=value...` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceKey {
    /// Local field receiving the resolved rows.
    pub field: String,
    /// Referenced table name.
    pub target: String,
    /// Raw options, own-key tokens not yet substituted.
    pub options: Options,
}

impl ReferenceKey {
    /// Options with `[field]` tokens replaced from `record`.
    pub fn resolve_options(&self, record: &Row) -> ReferenceOptions {
        let options: Options = self
            .options
            .iter()
            .map(|(k, v)| (k.clone(), substitute_own_keys(v, record)))
            .collect();

        ReferenceOptions {
            ref_field: last_option(&options, REF_OPTION).unwrap_or_default().to_string(),
            prefix: last_option(&options, REF_PREFIX_OPTION).map(str::to_string),
            suffix: last_option(&options, REF_SUFFIX_OPTION).map(str::to_string),
        }
    }
}

/// Reference options after own-key substitution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceOptions {
    /// Field of the target table compared against the match tokens.
    pub ref_field: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl ReferenceOptions {
    /// Apply prefix, suffix and own-key substitution to one match token.
    pub fn decorate(&self, token: &str, record: &Row) -> String {
        let mut out = String::with_capacity(token.len());
        if let Some(prefix) = &self.prefix {
            out.push_str(prefix);
        }
        out.push_str(token);
        if let Some(suffix) = &self.suffix {
            out.push_str(suffix);
        }
        substitute_own_keys(&out, record)
    }
}

/// A table name split into its base and option block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName {
    /// Name with the option block stripped.
    pub base: String,
    pub options: Options,
}

impl TableName {
    /// Value of the named option; the last occurrence wins.
    pub fn option(&self, name: &str) -> Option<&str> {
        last_option(&self.options, name)
    }

    /// The renamed wrapper key, if the `key` option is present.
    pub fn wrapper_key(&self) -> Option<&str> {
        self.option(KEY_OPTION)
    }
}

/// What a table name marks the table as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// `__name`: processed and referenceable, never emitted.
    Internal,
    /// `!name`: merged into its target, never emitted.
    Override,
    /// Everything else.
    Regular,
}

/// Classifier for keys and table names under one set of delimiters.
#[derive(Debug, Clone, Copy)]
pub struct KeyGrammar<'a> {
    config: &'a EngineConfig,
}

impl<'a> KeyGrammar<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    fn delimiters(&self) -> &Delimiters {
        &self.config.delimiters
    }

    /// Classify a row key.
    ///
    /// Hierarchy wins over reference when a key carries both delimiters.
    /// Errors carry an empty table name; callers attach it.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MultiReferenceSyntax`] when the key head holds more
    ///   than one reference delimiter
    /// - [`EngineError::UnknownReferenceTarget`] when the only reference
    ///   delimiter sits inside the option block
    /// - [`EngineError::MissingRefOption`] when no `ref` option is given
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetjson_core::{Directive, EngineConfig, KeyGrammar};
    ///
    /// let config = EngineConfig::default();
    /// let grammar = KeyGrammar::new(&config);
    ///
    /// assert_eq!(grammar.classify_key("name").unwrap(), Directive::Plain);
    /// assert_eq!(
    ///     grammar.classify_key("a.b").unwrap(),
    ///     Directive::Hierarchy(vec!["a".into(), "b".into()])
    /// );
    /// match grammar.classify_key("tags:Tags$ref=id").unwrap() {
    ///     Directive::Reference(r) => {
    ///         assert_eq!(r.field, "tags");
    ///         assert_eq!(r.target, "Tags");
    ///     }
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// ```
    pub fn classify_key(&self, key: &str) -> Result<Directive> {
        let d = self.delimiters();

        if key.contains(d.hierarchy) {
            let segments = key.split(d.hierarchy).map(str::to_string).collect();
            return Ok(Directive::Hierarchy(segments));
        }

        if !key.contains(d.reference) {
            return Ok(Directive::Plain);
        }

        let (head, block) = match key.split_once(d.ref_option) {
            Some((head, block)) => (head, Some(block)),
            None => (key, None),
        };

        let head_refs = head.matches(d.reference).count();
        if head_refs == 0 {
            // The only delimiter sits in the option block: the target is
            // whatever follows it, which names no table.
            let target = key
                .split_once(d.reference)
                .map(|(_, rest)| rest.split(d.ref_option).next().unwrap_or_default())
                .unwrap_or_default();
            return Err(EngineError::UnknownReferenceTarget {
                table: String::new(),
                key: key.to_string(),
                target: target.to_string(),
            });
        }
        if head_refs > 1 {
            return Err(EngineError::MultiReferenceSyntax {
                table: String::new(),
                key: key.to_string(),
            });
        }

        let (field, target) = head
            .split_once(d.reference)
            .ok_or_else(|| EngineError::MultiReferenceSyntax {
                table: String::new(),
                key: key.to_string(),
            })?;

        let options = block
            .map(|b| parse_options(b, d.ref_option))
            .unwrap_or_default();

        if last_option(&options, REF_OPTION).is_none() {
            return Err(EngineError::MissingRefOption {
                table: String::new(),
                key: key.to_string(),
            });
        }

        Ok(Directive::Reference(ReferenceKey {
            field: field.to_string(),
            target: target.to_string(),
            options,
        }))
    }

    /// Classify a table name as plain or option-bearing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetjson_core::{Directive, EngineConfig, KeyGrammar};
    ///
    /// let config = EngineConfig::default();
    /// let grammar = KeyGrammar::new(&config);
    ///
    /// match grammar.classify_table_name("Items$key=list") {
    ///     Directive::TableOption(name) => {
    ///         assert_eq!(name.base, "Items");
    ///         assert_eq!(name.wrapper_key(), Some("list"));
    ///     }
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// ```
    pub fn classify_table_name(&self, name: &str) -> Directive {
        let delimiter = self.delimiters().table_option;
        match name.split_once(delimiter) {
            Some((base, block)) => Directive::TableOption(TableName {
                base: base.to_string(),
                options: parse_options(block, delimiter),
            }),
            None => Directive::Plain,
        }
    }

    /// Internal, override or regular.
    pub fn table_kind(&self, name: &str) -> TableKind {
        if self.config.is_hidden(name) {
            TableKind::Internal
        } else if name.starts_with(self.delimiters().override_marker) {
            TableKind::Override
        } else {
            TableKind::Regular
        }
    }

    /// Whether `candidate` is the target of override table `override_name`:
    /// the override name without its marker, directly followed by the
    /// table-option delimiter.
    pub fn is_override_target(&self, override_name: &str, candidate: &str) -> bool {
        let d = self.delimiters();
        let Some(stripped) = override_name.strip_prefix(d.override_marker) else {
            return false;
        };
        candidate
            .strip_prefix(stripped)
            .map(|rest| rest.starts_with(d.table_option))
            .unwrap_or(false)
    }
}

/// Split an option block into `name=value` pairs.
///
/// A pair without `=` yields an empty value; only the first `=` splits.
pub fn parse_options(block: &str, delimiter: char) -> Options {
    block
        .split(delimiter)
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.split('=').next().unwrap_or_default().to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

fn last_option<'o>(options: &'o Options, name: &str) -> Option<&'o str> {
    options
        .iter()
        .rev()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

/// Replace every `[field]` token with the record's stringified value for
/// `field`. Names are ASCII alphanumerics, `_` and `|`. Tokens naming absent
/// fields are left in place.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sheetjson_core::substitute_own_keys;
///
/// let record = json!({"lang": "en", "n": 3});
/// let record = record.as_object().unwrap();
/// assert_eq!(substitute_own_keys("[lang]_[n]", record), "en_3");
/// assert_eq!(substitute_own_keys("[missing]", record), "[missing]");
/// ```
pub fn substitute_own_keys(text: &str, record: &Row) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let name_len = after
            .find(|c: char| !is_own_key_char(c))
            .unwrap_or(after.len());
        let name = &after[..name_len];

        if !name.is_empty() && after[name_len..].starts_with(']') {
            match record.get(name) {
                Some(value) => out.push_str(&stringify(value)),
                None => {
                    out.push('[');
                    out.push_str(name);
                    out.push(']');
                }
            }
            rest = &after[name_len + 1..];
        } else {
            out.push('[');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

/// Characters allowed in an own-key token name.
fn is_own_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '|'
}
