// vdf-rs - Valve KeyValues (VDF) for Rust
//
// Copyright (c) 2025 vdf-rs contributors.
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

//! Error types for VDF parsing and writing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VdfErrorKind {
    /// Wrong input shape (non-textual parse input, non-mapping stringify root).
    Validation,
    /// Grammar violation (malformed token, brace imbalance, unterminated quote).
    Syntax,
    /// Resource limit exceeded.
    Limit,
}

impl fmt::Display for VdfErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "ValidationError"),
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Limit => write!(f, "LimitError"),
        }
    }
}

/// An error from a parse or stringify call.
///
/// Syntax errors carry the 1-based source line number and, when available,
/// the offending logical line text.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct VdfError {
    /// The kind of error.
    pub kind: VdfErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based; 0 when no source line applies).
    pub line: usize,
    /// The offending logical line, when available.
    pub text: Option<String>,
    /// Additional context added by callers.
    pub context: Option<String>,
}

impl VdfError {
    /// Create a new error.
    pub fn new(kind: VdfErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            text: None,
            context: None,
        }
    }

    /// Attach the offending line text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(VdfErrorKind::Validation, message, 0)
    }

    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::new(VdfErrorKind::Syntax, message, line)
    }

    pub fn limit(message: impl Into<String>, line: usize) -> Self {
        Self::new(VdfErrorKind::Limit, message, line)
    }
}

/// Result type for VDF operations.
pub type VdfResult<T> = Result<T, VdfError>;
