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

//! Error types for HL7 message loading.
//!
//! Parsing text never fails: malformed lines degrade into placeholder
//! segments instead of aborting the message. The only failure mode the
//! core surfaces is an unreadable input file.

use std::path::PathBuf;
use thiserror::Error;

/// An error raised while loading an HL7 message.
#[derive(Debug, Clone, Error)]
pub enum Hl7Error {
    /// The input file could not be opened or read.
    ///
    /// Carries the offending path and the underlying OS error text.
    #[error("failed to read '{path}': {message}")]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// OS error text.
        message: String,
    },
}

impl Hl7Error {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for HL7 operations.
pub type Hl7Result<T> = Result<T, Hl7Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = Hl7Error::io(
            "/tmp/missing.hl7",
            &std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("/tmp/missing.hl7"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(Hl7Error::io(
            "x",
            &std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        ));
    }

    #[test]
    fn test_error_clone() {
        let original = Hl7Error::io(
            "a.hl7",
            &std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let cloned = original.clone();
        assert_eq!(format!("{}", original), format!("{}", cloned));
    }
}
