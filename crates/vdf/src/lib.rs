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

//! # vdf - Valve KeyValues for Rust
//!
//! Parser and serializer for the KeyValues (VDF) text format used across
//! Steam and Source-engine tooling: appmanifests, `libraryfolders.vdf`,
//! `gameinfo.txt`, item schemas, and friends.
//!
//! ## Quick Start
//!
//! ```rust
//! use vdf::{parse, stringify, Node, Value};
//!
//! let doc = parse("\"AppState\"\n{\n\t\"appid\"\t\"440\"\n}\n").unwrap();
//! let state = doc.get("AppState").and_then(Node::as_map).unwrap();
//! assert_eq!(state.get("appid"), Some(&Node::Value(Value::Int(440))));
//!
//! let text = stringify(&doc).unwrap();
//! assert_eq!(parse(&text).unwrap(), doc);
//! ```
//!
//! ## Features
//!
//! - **Typed values**: `"440"` parses as an integer, `"1.5"` as a float,
//!   `"true"` as a boolean; raw strings are one option away
//! - **Sequence promotion**: repeated keys become sequences instead of
//!   silently overwriting each other
//! - **Conditionals**: `[$WIN32]`, `[!$OSX||$LINUX]` filtering against an
//!   active flag set
//! - **Multi-line values** and escaped quotes, preserved verbatim
//! - **Round-tripping**: [`stringify`] output re-parses to the same tree
//!
//! ## Modules
//!
//! - [`vdf_core`] (re-exported here): parsing and the data model
//! - [`c14n`]: serialization configuration

// Re-export core types
pub use vdf_core::{
    // Functions
    parse_bytes,
    parse_with_options,
    parse_with_sink,
    // Diagnostics
    Diagnostic,
    // Parser
    Limits,
    // Main types
    Map,
    Node,
    ParseOptions,
    ParseOptionsBuilder,
    Policy,
    Value,
    // Errors
    VdfError,
    VdfErrorKind,
    VdfResult,
};

// Error handling extensions
mod error_ext;
pub use error_ext::VdfResultExt;

// Re-export serialization
pub mod c14n {
    //! Serialization utilities
    pub use vdf_c14n::{stringify, stringify_with_config, WriteError, WriterConfig};
}

/// Parse VDF text with default options (typed values, sequence promotion).
pub fn parse(text: &str) -> VdfResult<Map> {
    vdf_core::parse(text)
}

/// Parse VDF text keeping every value as a string.
pub fn parse_untyped(text: &str) -> VdfResult<Map> {
    vdf_core::parse_with_options(text, &ParseOptions::from(false))
}

/// Check that `text` is well-formed VDF without keeping the tree.
pub fn validate(text: &str) -> VdfResult<()> {
    vdf_core::parse(text).map(|_| ())
}

/// Serialize a tree to compact KeyValues text.
pub fn stringify(map: &Map) -> VdfResult<String> {
    vdf_c14n::stringify(map).map_err(|e| VdfError::validation(e.to_string()))
}

/// Serialize a tree to tab-indented KeyValues text.
pub fn stringify_pretty(map: &Map) -> VdfResult<String> {
    vdf_c14n::stringify_with_config(map, &vdf_c14n::WriterConfig::from(true))
        .map_err(|e| VdfError::validation(e.to_string()))
}
