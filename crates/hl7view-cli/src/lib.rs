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

//! hl7view CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: parse an HL7 file and summarize its segments, warning
//!   about degenerate (too-short) lines
//! - **inspect**: display the annotated message tree (text or JSON)
//! - **export**: re-emit the retained source text of a message to a file
//! - **completion**: generate shell completion scripts

pub mod cli;
pub mod commands;
pub mod error;
