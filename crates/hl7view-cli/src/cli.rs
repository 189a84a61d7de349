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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliResult;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// hl7view - HL7 v2.x message inspector
#[derive(Parser)]
#[command(name = "hl7view")]
#[command(author, version, about = "Inspect HL7 v2.x messages as annotated trees", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse an HL7 file and summarize its segments
    Validate {
        /// HL7 file to validate
        file: String,
    },

    /// Display the annotated structure of an HL7 file
    Inspect {
        /// HL7 file to inspect
        file: String,

        /// Show the verbatim value of every node
        #[arg(long)]
        values: bool,

        /// Emit the tree as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Re-emit the retained source text of an HL7 file
    Export {
        /// HL7 file to export
        file: String,

        /// Output path; defaults to a name derived from MSH-10
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Target shell
        shell: Shell,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Validate { file } => commands::validate(file),
            Commands::Inspect { file, values, json } => commands::inspect(file, *values, *json),
            Commands::Export { file, output } => commands::export(file, output.as_deref()),
            Commands::Completion { shell } => {
                commands::generate_completion(*shell, &mut Cli::command())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_validate() {
        let cli = Cli::try_parse_from(["hl7view", "validate", "msg.hl7"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate { .. }));
    }

    #[test]
    fn test_cli_parses_inspect_flags() {
        let cli =
            Cli::try_parse_from(["hl7view", "inspect", "msg.hl7", "--values", "--json"]).unwrap();
        match cli.command {
            Commands::Inspect { file, values, json } => {
                assert_eq!(file, "msg.hl7");
                assert!(values);
                assert!(json);
            }
            _ => panic!("expected inspect"),
        }
    }

    #[test]
    fn test_cli_parses_export_output() {
        let cli =
            Cli::try_parse_from(["hl7view", "export", "msg.hl7", "-o", "out.hl7"]).unwrap();
        match cli.command {
            Commands::Export { output, .. } => {
                assert_eq!(output, Some(PathBuf::from("out.hl7")));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["hl7view", "frobnicate"]).is_err());
    }
}
