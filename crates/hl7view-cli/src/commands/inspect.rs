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

//! Inspect command - annotated tree view of an HL7 message.

use super::read_file;
use crate::error::{CliError, CliResult};
use colored::Colorize;
use hl7view_core::{Hl7Parser, Node, NodeKind};

/// Display the annotated structure of an HL7 file.
///
/// Renders the message tree with segment, field, component, and
/// subcomponent annotations from the HL7 dictionary. With `values` the
/// verbatim source text of every node is shown; with `json` the tree is
/// emitted as JSON instead of text.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or contains no segments.
pub fn inspect(file: &str, values: bool, json: bool) -> CliResult<()> {
    let content = read_file(file)?;

    let mut parser = Hl7Parser::new();
    parser.parse_text(&content);

    let root = parser
        .get_structure()
        .ok_or_else(|| CliError::parse("no segments found in message"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&root)?);
        return Ok(());
    }

    print_node(&root, 0, values);
    Ok(())
}

fn print_node(node: &Node, indent: usize, values: bool) {
    let prefix = "  ".repeat(indent);

    match node.kind {
        NodeKind::Message => {
            println!("{}{}  {}", prefix, node.name.bold(), node.description.cyan());
        }
        NodeKind::Segment => {
            println!(
                "{}{}  {}",
                prefix,
                node.name.green().bold(),
                node.description.cyan()
            );
        }
        _ => {
            if values {
                println!(
                    "{}{}  {}  \"{}\"",
                    prefix,
                    node.name.yellow(),
                    node.description.cyan(),
                    node.value
                );
            } else {
                println!("{}{}  {}", prefix, node.name.yellow(), node.description.cyan());
            }
        }
    }

    for child in &node.children {
        print_node(child, indent + 1, values);
    }
}
