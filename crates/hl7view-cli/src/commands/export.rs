// hl7view - HL7 v2.x message inspector
//
// Copyright (c) 2025 hl7view contributors.
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

//! Export command - re-emit the retained source text of a message.
//!
//! The parser is display-only: round-tripping re-emits the verbatim input
//! it retained, never a re-serialization of the tree.

use super::read_file;
use crate::error::{CliError, CliResult};
use colored::Colorize;
use hl7view_core::Hl7Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Re-emit an HL7 file's retained source text to another file.
///
/// Without `-o`, the output name is derived from MSH-10 (Message Control
/// ID) when present, `hl7_message.hl7` otherwise.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read, contains no segments, or
/// the output cannot be written.
pub fn export(file: &str, output: Option<&Path>) -> CliResult<()> {
    let content = read_file(file)?;

    let mut parser = Hl7Parser::new();
    parser.parse_text(&content);

    if parser.segments().is_empty() {
        return Err(CliError::parse("no segments found in message"));
    }

    let target = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_name(parser.control_id()),
    };

    fs::write(&target, parser.raw_message()).map_err(|e| CliError::io_error(&target, e))?;

    println!("{} exported to {}", "✓".green().bold(), target.display());
    Ok(())
}

fn default_output_name(control_id: Option<&str>) -> PathBuf {
    match control_id {
        Some(id) => PathBuf::from(format!("hl7_message_{}.hl7", id)),
        None => PathBuf::from("hl7_message.hl7"),
    }
}
