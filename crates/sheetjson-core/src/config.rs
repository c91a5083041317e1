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

//! Engine configuration.

/// Default top-level key wrapping each table's rows.
pub const DEFAULT_WRAPPER_KEY: &str = "data";

/// Default prefix marking hidden fields and internal tables.
pub const DEFAULT_HIDDEN_PREFIX: &str = "__";

/// The delimiters making up the key grammar.
///
/// # Examples
///
/// ```
/// use sheetjson_core::Delimiters;
///
/// let delimiters = Delimiters::default();
/// assert_eq!(delimiters.hierarchy, '.');
/// assert_eq!(delimiters.reference, ':');
/// assert_eq!(delimiters.ref_option, '$');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    /// Separates nested path segments (`a.b.c`).
    pub hierarchy: char,
    /// Separates a local field from its target table (`field:Table`).
    pub reference: char,
    /// Separates candidate match tokens in a reference cell (`1,2,3`).
    pub value_list: char,
    /// Prefixes each option of a reference key (`$ref=id`).
    pub ref_option: char,
    /// Prefixes each option of a table name (`Items$key=list`).
    pub table_option: char,
    /// Leading marker of override tables (`!Defaults`).
    pub override_marker: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            hierarchy: '.',
            reference: ':',
            value_list: ',',
            ref_option: '$',
            table_option: '$',
            override_marker: '!',
        }
    }
}

/// Configuration for one engine run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Grammar delimiters.
    pub delimiters: Delimiters,
    /// Top-level key wrapping every resolved table (default: `data`).
    pub default_wrapper_key: String,
    /// Prefix of hidden fields and internal tables (default: `__`).
    pub hidden_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delimiters: Delimiters::default(),
            default_wrapper_key: DEFAULT_WRAPPER_KEY.to_string(),
            hidden_prefix: DEFAULT_HIDDEN_PREFIX.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a builder starting from the defaults.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Whether `name` is the hidden prefix followed only by ASCII
    /// alphanumerics or underscores.
    ///
    /// Applies both to field names (stripped from reference payloads) and to
    /// table names (never emitted).
    pub fn is_hidden(&self, name: &str) -> bool {
        name.strip_prefix(self.hidden_prefix.as_str())
            .map(|rest| rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(false)
    }
}

/// Builder for [`EngineConfig`].
///
/// # Examples
///
/// ```
/// use sheetjson_core::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .default_wrapper_key("rows")
///     .value_list_delimiter(';')
///     .build();
/// assert_eq!(config.default_wrapper_key, "rows");
/// assert_eq!(config.delimiters.value_list, ';');
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Replace every delimiter at once.
    pub fn delimiters(mut self, delimiters: Delimiters) -> Self {
        self.config.delimiters = delimiters;
        self
    }

    /// Separator of nested path segments (`a.b.c`).
    pub fn hierarchy_delimiter(mut self, c: char) -> Self {
        self.config.delimiters.hierarchy = c;
        self
    }

    /// Separator between local field and target table (`field:Table`).
    pub fn reference_delimiter(mut self, c: char) -> Self {
        self.config.delimiters.reference = c;
        self
    }

    /// Separator of match tokens inside a reference cell (`A,B`).
    pub fn value_list_delimiter(mut self, c: char) -> Self {
        self.config.delimiters.value_list = c;
        self
    }

    /// Prefix of each option pair on a reference key (`$ref=id`).
    pub fn ref_option_delimiter(mut self, c: char) -> Self {
        self.config.delimiters.ref_option = c;
        self
    }

    /// Prefix of each option pair on a table name (`Items$key=list`).
    pub fn table_option_delimiter(mut self, c: char) -> Self {
        self.config.delimiters.table_option = c;
        self
    }

    /// Leading marker of override tables (`!Items`).
    pub fn override_marker(mut self, c: char) -> Self {
        self.config.delimiters.override_marker = c;
        self
    }

    /// Top-level key wrapping rows of tables without a `key` option.
    pub fn default_wrapper_key(mut self, key: impl Into<String>) -> Self {
        self.config.default_wrapper_key = key.into();
        self
    }

    /// Prefix marking internal tables and hidden fields.
    pub fn hidden_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.hidden_prefix = prefix.into();
        self
    }

    /// Finish the configuration.
    pub fn build(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wrapper_key() {
        assert_eq!(EngineConfig::default().default_wrapper_key, "data");
    }

    #[test]
    fn test_default_delimiters() {
        let d = Delimiters::default();
        assert_eq!(d.value_list, ',');
        assert_eq!(d.table_option, '$');
        assert_eq!(d.override_marker, '!');
    }

    #[test]
    fn test_is_hidden() {
        let config = EngineConfig::default();
        assert!(config.is_hidden("__note"));
        assert!(config.is_hidden("__EMPTY_1"));
        assert!(config.is_hidden("__"));
        assert!(!config.is_hidden("_note"));
        assert!(!config.is_hidden("note__"));
        assert!(!config.is_hidden("__note-x"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = EngineConfig::builder()
            .hierarchy_delimiter('/')
            .hidden_prefix("_")
            .build();
        assert_eq!(config.delimiters.hierarchy, '/');
        assert!(config.is_hidden("_x"));
        assert_eq!(config.delimiters.reference, ':');
    }

    #[test]
    fn test_builder_sets_every_field() {
        let config = EngineConfig::builder()
            .hierarchy_delimiter('/')
            .reference_delimiter('@')
            .value_list_delimiter(';')
            .ref_option_delimiter('#')
            .table_option_delimiter('~')
            .override_marker('+')
            .default_wrapper_key("rows")
            .hidden_prefix("_")
            .build();
        let d = &config.delimiters;
        assert_eq!(
            (d.hierarchy, d.reference, d.value_list, d.ref_option, d.table_option, d.override_marker),
            ('/', '@', ';', '#', '~', '+')
        );
        assert_eq!(config.default_wrapper_key, "rows");
        assert_eq!(config.hidden_prefix, "_");
    }
}
