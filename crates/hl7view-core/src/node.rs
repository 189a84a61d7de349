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

//! The annotated node tree handed to renderers.
//!
//! Depth is fixed: Message -> Segment -> Field -> Component -> Subcomponent.
//! Sibling order is source order; the tree is rebuilt from scratch on every
//! parse and never mutated in place.

/// Which level of the message tree a node sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeKind {
    /// The synthetic root.
    Message,
    /// One line of the message.
    Segment,
    /// Pipe-delimited unit within a segment.
    Field,
    /// Caret-delimited unit within a field.
    Component,
    /// Ampersand-delimited unit within a component.
    Subcomponent,
}

/// One element of the annotated tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    /// Tree level.
    pub kind: NodeKind,
    /// Display label: `OBX #2`, `PID-5`, `PID-5.1`, `PID-5.1.2`.
    pub name: String,
    /// Unqualified key: segment code, or the decimal index at this level.
    /// Never carries the `#n` duplicate suffix.
    pub raw_name: String,
    /// Verbatim source text. Empty for the root; for segments the value
    /// lives on the field children, the segment carries its whole line.
    pub value: String,
    /// Human-readable annotation; empty when nothing is known.
    pub description: String,
    /// Ordered children; empty at subcomponent level.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with no children.
    pub fn new(
        kind: NodeKind,
        name: impl Into<String>,
        raw_name: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            raw_name: raw_name.into(),
            value: value.into(),
            description: description.into(),
            children: Vec::new(),
        }
    }

    /// Append a child node.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total node count of this subtree, root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}
