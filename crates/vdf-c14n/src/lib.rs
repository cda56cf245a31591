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

//! Serializer for Valve's KeyValues (VDF) text format.
//!
//! Turns a [`vdf_core::Map`] back into KeyValues text, compact by default
//! or indented via [`WriterConfig`]. Output re-parses to the same tree:
//! sequences become repeated keys, whole floats keep a `.0` so they stay
//! floats, and strings are written verbatim.
//!
//! # Example
//!
//! ```
//! use vdf_c14n::{stringify, WriterConfig};
//!
//! let map = vdf_core::parse("\"a\" \"1\"\n\"a\" \"2\"").unwrap();
//! assert_eq!(stringify(&map).unwrap(), "\"a\" \"1\"\n\"a\" \"2\"\n");
//! ```

pub mod config;
pub mod writer;

pub use config::{WriterConfig, WriterConfigBuilder};
pub use writer::WriteError;

use vdf_core::Map;
use writer::Writer;

/// Serialize a tree with the default (compact) configuration.
pub fn stringify(map: &Map) -> Result<String, WriteError> {
    stringify_with_config(map, &WriterConfig::default())
}

/// Serialize a tree with an explicit configuration.
pub fn stringify_with_config(map: &Map, config: &WriterConfig) -> Result<String, WriteError> {
    Writer::new(config).write_document(map)
}
