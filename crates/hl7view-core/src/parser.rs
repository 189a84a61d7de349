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

//! Tokenizer for HL7 v2.x pipe-delimited messages.
//!
//! One segment per line, any line-break style. Delimiters are the HL7
//! defaults and are not reconfigured from MSH-2: field `|`, component `^`,
//! subcomponent `&`. Text parsing is total: a malformed line degrades into
//! a placeholder segment instead of failing the message, so the only error
//! this module can surface is an unreadable file.

use crate::error::{Hl7Error, Hl7Result};
use crate::message::{Component, Field, Segment, DEGENERATE_CODE};
use crate::node::Node;
use crate::structure;
use std::fs;
use std::path::Path;

const FIELD_SEP: char = '|';
const COMPONENT_SEP: char = '^';
const SUBCOMPONENT_SEP: char = '&';

/// Stateful parser holding the last message and its segment records.
///
/// Both are fully replaced on every parse; there is no incremental or
/// streaming state. Instances are cheap and independent, so concurrent
/// parsing uses one parser per message. The dictionary tables are the only
/// shared resource and are read-only.
#[derive(Debug, Clone, Default)]
pub struct Hl7Parser {
    message_text: String,
    segments: Vec<Segment>,
}

impl Hl7Parser {
    /// Create a parser with no message loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a message from text, replacing any previously held message.
    ///
    /// Never fails: worst case the input tokenizes into degenerate
    /// segments. Returns the fresh segment records.
    pub fn parse_text(&mut self, text: &str) -> &[Segment] {
        self.message_text = text.to_string();
        self.segments = parse(text);
        &self.segments
    }

    /// Read a file as UTF-8, strip surrounding whitespace, and parse it.
    ///
    /// On read failure the parser is reset to empty and the I/O error is
    /// returned with the underlying OS error text.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Hl7Result<&[Segment]> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                self.message_text.clear();
                self.segments.clear();
                return Err(Hl7Error::io(path, &err));
            }
        };
        Ok(self.parse_text(content.trim()))
    }

    /// Segment records from the last parse.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The last parsed input, verbatim.
    ///
    /// Round-tripping re-emits this text; the tree is never re-serialized.
    pub fn raw_message(&self) -> &str {
        &self.message_text
    }

    /// MSH-10 (Message Control ID) of the first MSH segment, if present
    /// and non-empty.
    pub fn control_id(&self) -> Option<&str> {
        self.segments
            .iter()
            .find(|seg| seg.code == "MSH")
            .and_then(|seg| seg.field(10))
            .map(|field| field.value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// Build the annotated node tree from the last parse.
    ///
    /// Returns `None` when no parse has happened or the last parse yielded
    /// zero segments. A pure transform: calling it twice yields two equal,
    /// independently allocated trees.
    pub fn get_structure(&self) -> Option<Node> {
        structure::build(&self.segments)
    }
}

/// Tokenize message text into segment records.
///
/// Leading/trailing whitespace is trimmed, each non-empty trimmed line
/// becomes one segment. HL7 messages conventionally separate segments
/// with `\r`, but `\n` and `\r\n` are accepted too. Lines shorter than
/// 3 characters get the `"???"` placeholder code; lines without a field
/// separator get zero fields.
pub fn parse(text: &str) -> Vec<Segment> {
    text.trim()
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Segment {
    let code = match segment_code(line) {
        Some(code) => code,
        None => return Segment::new(DEGENERATE_CODE, line, Vec::new()),
    };

    let mut fields = Vec::new();
    if memchr::memchr(FIELD_SEP as u8, line.as_bytes()).is_some() {
        let mut parts = line.split(FIELD_SEP);
        // First pipe-split part is the code itself, never a field.
        parts.next();

        if code == "MSH" {
            // MSH-1 is the separator character, unreachable by splitting
            // on that same character, so it is synthesized here.
            fields.push(Field::new(
                FIELD_SEP.to_string(),
                vec![Component::plain(FIELD_SEP.to_string())],
            ));
        }

        fields.extend(parts.map(parse_field));
    }

    Segment::new(code, line, fields)
}

/// First 3 characters of the line, or `None` for a too-short line.
fn segment_code(line: &str) -> Option<&str> {
    let (idx, ch) = line.char_indices().nth(2)?;
    Some(&line[..idx + ch.len_utf8()])
}

fn parse_field(value: &str) -> Field {
    let components = if memchr::memchr(COMPONENT_SEP as u8, value.as_bytes()).is_some() {
        value.split(COMPONENT_SEP).map(parse_component).collect()
    } else {
        // No caret: the field is a single component, and no subcomponent
        // split is attempted even if it contains an ampersand.
        vec![Component::plain(value)]
    };
    Field::new(value, components)
}

fn parse_component(value: &str) -> Component {
    if memchr::memchr(SUBCOMPONENT_SEP as u8, value.as_bytes()).is_some() {
        Component::with_subcomponents(
            value,
            value.split(SUBCOMPONENT_SEP).map(String::from).collect(),
        )
    } else {
        Component::plain(value)
    }
}
