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


//! sheetjson command line interface

use clap::Parser;
use sheetjson_cli::commands::{convert, ConvertOptions};
use sheetjson_core::DEFAULT_WRAPPER_KEY;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LOG_TARGETS: [&str; 4] = ["sheetjson_core", "sheetjson_xlsx", "sheetjson_json", "sheetjson_cli"];

/// sheetjson - convert spreadsheets into nested JSON documents
///
/// # Examples
///
/// ```bash
/// # Write one JSON file per table into the current directory
/// sheetjson catalog.xlsx
///
/// # Pretty-printed output under out/, file names prefixed
/// sheetjson catalog.xlsx --outdir out --prefix catalog_ --pretty
///
/// # Show what would be written
/// sheetjson catalog.xlsx --dry-run -v
/// ```
#[derive(Parser)]
#[command(name = "sheetjson")]
#[command(author, version, about = "sheetjson - convert spreadsheets into nested JSON documents", long_about = None)]
struct Cli {
    /// Input file (.xlsx or .csv)
    file: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    outdir: PathBuf,

    /// Prefix for every output file name
    #[arg(long, default_value = "")]
    prefix: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Wrapper key for tables without a key option
    #[arg(long, default_value = DEFAULT_WRAPPER_KEY)]
    default_key: String,

    /// Run the conversion without writing files
    #[arg(long)]
    dry_run: bool,

    /// Log key classification and resolution details
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let default_filter = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ConvertOptions {
        input: cli.file,
        outdir: cli.outdir,
        prefix: cli.prefix,
        pretty: cli.pretty,
        default_key: cli.default_key,
        dry_run: cli.dry_run,
    };

    match convert(&options) {
        Ok(summary) => {
            if options.dry_run {
                summary.artifacts.iter().for_each(|name| println!("{}", name));
            } else {
                summary
                    .written
                    .iter()
                    .for_each(|path| println!("{}", path.display()));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
