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

//! CLI command implementations.

mod completion;
mod export;
mod inspect;
mod validate;

pub use completion::generate_completion;
pub use export::export;
pub use inspect::inspect;
pub use validate::validate;

use crate::error::{CliError, CliResult};
use std::fs;

/// Default maximum input file size (100 MB).
/// Can be overridden via the HL7VIEW_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("HL7VIEW_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with a size cap.
///
/// The size is checked against the cap before any allocation so an
/// oversized file is rejected without being read.
pub fn read_file(path: &str) -> CliResult<String> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}
