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


//! Writing artifacts to an output directory.

use crate::error::{JsonError, Result};
use crate::to_json::{to_json, ToJsonConfig};
use sheetjson_core::Artifact;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration for artifact files.
///
/// # Examples
///
/// ```
/// use sheetjson_json::WriteConfig;
///
/// let config = WriteConfig {
///     prefix: "catalog_".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.file_name("Items"), "catalog_Items.json");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WriteConfig {
    /// Prepended to every artifact file name.
    pub prefix: String,
    /// Pretty-print the written JSON.
    pub pretty: bool,
}

impl WriteConfig {
    /// File name of the artifact called `name`.
    pub fn file_name(&self, name: &str) -> String {
        format!("{}{}.json", self.prefix, name)
    }
}

/// Write each artifact to `<outdir>/<prefix><name>.json`.
///
/// The directory is created when missing. Existing files are overwritten.
/// Returns the written paths in artifact order.
pub fn write_artifacts(
    outdir: &Path,
    artifacts: &[Artifact],
    config: &WriteConfig,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(outdir).map_err(|e| JsonError::write(outdir, e))?;

    let json_config = ToJsonConfig {
        pretty: config.pretty,
    };
    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let path = outdir.join(config.file_name(&artifact.name));
        let text = to_json(&artifact.document, &json_config)?;
        fs::write(&path, text).map_err(|e| JsonError::write(&path, e))?;
        info!("wrote [{}] to {}", artifact.name, path.display());
        written.push(path);
    }

    Ok(written)
}
