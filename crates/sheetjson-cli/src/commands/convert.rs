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


//! Spreadsheet to JSON conversion command.

use super::{check_file_size, validate_input_name};
use crate::error::CliError;
use sheetjson_core::{Engine, EngineConfig, DEFAULT_WRAPPER_KEY};
use sheetjson_json::{write_artifacts, WriteConfig};
use sheetjson_xlsx::read_workbook;
use std::path::PathBuf;
use tracing::{info, warn};

/// Options of one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Source `.xlsx` or `.csv` file.
    pub input: PathBuf,
    /// Directory receiving the artifact files.
    pub outdir: PathBuf,
    /// Prepended to every artifact file name.
    pub prefix: String,
    /// Pretty-print the JSON output.
    pub pretty: bool,
    /// Wrapper key for tables without a `key` option.
    pub default_key: String,
    /// Run the engine but write nothing.
    pub dry_run: bool,
}

impl ConvertOptions {
    /// Options for `input` with every other setting at its default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            outdir: PathBuf::from("."),
            prefix: String::new(),
            pretty: false,
            default_key: DEFAULT_WRAPPER_KEY.to_string(),
            dry_run: false,
        }
    }
}

/// Outcome of a conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertSummary {
    /// Artifact names in emission order.
    pub artifacts: Vec<String>,
    /// Files written; empty on a dry run.
    pub written: Vec<PathBuf>,
}

/// Convert a spreadsheet into JSON artifacts.
///
/// # Errors
///
/// Returns `Err` if:
/// - the input is not an `.xlsx`/`.csv` file name, is missing or too large
/// - the source cannot be read
/// - the engine rejects the workbook
/// - an artifact cannot be written
///
/// # Examples
///
/// ```no_run
/// use sheetjson_cli::commands::{convert, ConvertOptions};
///
/// # fn main() -> Result<(), sheetjson_cli::error::CliError> {
/// let mut options = ConvertOptions::new("catalog.xlsx");
/// options.outdir = "out".into();
/// options.pretty = true;
/// let summary = convert(&options)?;
/// println!("wrote {} files", summary.written.len());
/// # Ok(())
/// # }
/// ```
pub fn convert(options: &ConvertOptions) -> Result<ConvertSummary, CliError> {
    validate_input_name(&options.input)?;
    let size = check_file_size(&options.input)?;
    info!("reading {} ({} bytes)", options.input.display(), size);

    let workbook = read_workbook(&options.input)?;

    let config = EngineConfig::builder()
        .default_wrapper_key(options.default_key.as_str())
        .build();
    let output = Engine::new(config).run(&workbook)?;

    let report = &output.report;
    info!(
        "{} tables processed, {} references resolved on retry, {} overrides applied",
        report.tables,
        report.retried.len(),
        report.overrides
    );
    if !report.unresolved.is_empty() {
        warn!("{} references left unresolved", report.unresolved.len());
    }

    let artifacts = output.artifacts.iter().map(|a| a.name.clone()).collect();

    if options.dry_run {
        info!("dry run, nothing written");
        return Ok(ConvertSummary {
            artifacts,
            written: Vec::new(),
        });
    }

    let write_config = WriteConfig {
        prefix: options.prefix.clone(),
        pretty: options.pretty,
    };
    let written = write_artifacts(&options.outdir, &output.artifacts, &write_config)?;

    Ok(ConvertSummary { artifacts, written })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup(content: &str) -> (TempDir, ConvertOptions) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("Items.csv");
        fs::write(&input, content).unwrap();
        let mut options = ConvertOptions::new(input);
        options.outdir = dir.path().join("out");
        (dir, options)
    }

    #[test]
    fn test_convert_writes_artifact() {
        let (_dir, options) = setup("id,a.b\n1,x\n");
        let summary = convert(&options).unwrap();
        assert_eq!(summary.artifacts, vec!["Items".to_string()]);
        let text = fs::read_to_string(&summary.written[0]).unwrap();
        assert_eq!(text, r#"{"data":[{"id":1,"a":{"b":"x"}}]}"#);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (_dir, mut options) = setup("id\n1\n");
        options.dry_run = true;
        let summary = convert(&options).unwrap();
        assert!(summary.written.is_empty());
        assert!(!options.outdir.exists());
    }

    #[test]
    fn test_default_key() {
        let (_dir, mut options) = setup("id\n1\n");
        options.default_key = "rows".to_string();
        options.prefix = "p_".to_string();
        let summary = convert(&options).unwrap();
        assert_eq!(summary.written[0], options.outdir.join("p_Items.json"));
        let text = fs::read_to_string(&summary.written[0]).unwrap();
        assert_eq!(text, r#"{"rows":[{"id":1}]}"#);
    }

    #[test]
    fn test_engine_error_surfaces() {
        let (_dir, options) = setup("x:Nowhere$ref=id\n1\n");
        let err = convert(&options).unwrap_err();
        assert!(matches!(err, CliError::Engine(_)));
    }
}
