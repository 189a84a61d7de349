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

//! Parser and annotated data model for HL7 v2.x messages.
//!
//! Tokenizes pipe/caret-encoded message text into segment records, then
//! builds a navigable tree (message, segments, fields, components,
//! subcomponents) annotated with human-readable descriptions from a static
//! HL7 dictionary. Display-only: round-tripping re-emits the retained
//! source text, never a re-serialization of the tree.
//!
//! ```
//! use hl7view_core::Hl7Parser;
//!
//! let mut parser = Hl7Parser::new();
//! parser.parse_text("MSH|^~\\&|APP|FAC|RAPP|RFAC|20240101||ADT^A01|C1|P|2.5\nPID|1||12345");
//!
//! let root = parser.get_structure().unwrap();
//! assert_eq!(root.children.len(), 2);
//! assert_eq!(root.children[1].description, "Patient Identification");
//! ```
//!
//! Delimiters are the HL7 defaults `|^~\&` and are not reconfigured from
//! MSH-2. Full grammar validation (cardinality, data types, Z-segment
//! schemas) is out of scope; unknown content is annotated with fallback
//! text instead of rejected.

pub mod dictionary;
mod error;
mod message;
mod node;
mod parser;
mod structure;

pub use error::{Hl7Error, Hl7Result};
pub use message::{Component, Field, Segment, DEGENERATE_CODE};
pub use node::{Node, NodeKind};
pub use parser::{parse, Hl7Parser};
