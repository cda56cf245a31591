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

//! Error context helpers.
//!
//! Extension trait for `Result<T, VdfError>` that annotates errors with
//! caller context (typically a file name) as they propagate.
//!
//! # Examples
//!
//! ```
//! use vdf::{parse, VdfResultExt};
//!
//! let err = parse("!!!")
//!     .context("while loading gameinfo.txt")
//!     .unwrap_err();
//! assert_eq!(err.context.as_deref(), Some("while loading gameinfo.txt"));
//! ```

use vdf_core::{VdfError, VdfResult};

/// Extension trait for adding context to `Result<T, VdfError>`.
pub trait VdfResultExt<T> {
    /// Add context to an error. The message is evaluated immediately; for
    /// expensive messages prefer [`with_context`](VdfResultExt::with_context).
    fn context(self, context: impl Into<String>) -> VdfResult<T>;

    /// Add context computed lazily, only on the error path.
    fn with_context<F, S>(self, f: F) -> VdfResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> VdfResultExt<T> for Result<T, VdfError> {
    fn context(self, context: impl Into<String>) -> VdfResult<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F, S>(self, f: F) -> VdfResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
