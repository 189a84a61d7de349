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

//! Segment records: the intermediate representation between tokenizing and
//! the annotated node tree.
//!
//! Every substring is kept verbatim from the source message; nothing here is
//! unescaped, normalized, or re-serialized.

/// Placeholder code for a line too short to carry a segment code.
pub const DEGENERATE_CODE: &str = "???";

/// A caret-delimited component within a field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Component {
    /// Verbatim component text (subcomponent delimiters included).
    pub value: String,
    /// Ampersand-split subcomponents; empty when the component has none.
    /// When present, index 0 repeats the leading portion of `value`.
    pub subcomponents: Vec<String>,
}

impl Component {
    /// A component with no subcomponent split.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            subcomponents: Vec::new(),
        }
    }

    /// A component carrying its ampersand split.
    pub fn with_subcomponents(value: impl Into<String>, subcomponents: Vec<String>) -> Self {
        Self {
            value: value.into(),
            subcomponents,
        }
    }
}

/// A pipe-delimited field within a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    /// Verbatim field text (component delimiters included).
    pub value: String,
    /// Caret-split components; a field without `^` is one plain component.
    pub components: Vec<Component>,
}

impl Field {
    /// Create a field from its value and components.
    pub fn new(value: impl Into<String>, components: Vec<Component>) -> Self {
        Self {
            value: value.into(),
            components,
        }
    }

    /// Get a component by 1-based index.
    pub fn component(&self, index: usize) -> Option<&Component> {
        if index == 0 {
            return None;
        }
        self.components.get(index - 1)
    }
}

/// One line of an HL7 message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment {
    /// 3-letter segment code, or [`DEGENERATE_CODE`] for a too-short line.
    pub code: String,
    /// The whole source line, verbatim.
    pub line: String,
    /// Fields in source order. For MSH, field 1 is the synthesized
    /// separator field with value `"|"`.
    pub fields: Vec<Field>,
}

impl Segment {
    /// Create a segment record.
    pub fn new(code: impl Into<String>, line: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            code: code.into(),
            line: line.into(),
            fields,
        }
    }

    /// Get a field by 1-based number.
    pub fn field(&self, number: usize) -> Option<&Field> {
        if number == 0 {
            return None;
        }
        self.fields.get(number - 1)
    }

    /// Whether this record came from a line too short to carry a code.
    pub fn is_degenerate(&self) -> bool {
        self.code == DEGENERATE_CODE
    }
}
