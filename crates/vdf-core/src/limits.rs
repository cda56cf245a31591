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

//! Resource limits enforced during parsing.

/// Limits protecting the parser against hostile input.
///
/// Defaults are generous enough for any real Source-engine configuration
/// file while still bounding memory and stack usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes (default: 1 GiB).
    pub max_input_size: usize,
    /// Maximum raw line length in bytes (default: 1 MiB).
    pub max_line_length: usize,
    /// Maximum nesting depth of the parse stack (default: 100).
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 1024 * 1024 * 1024,
            max_line_length: 1024 * 1024,
            max_depth: 100,
        }
    }
}
