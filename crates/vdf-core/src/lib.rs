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

//! Core parser for Valve's KeyValues (VDF) text format.
//!
//! VDF is the configuration format used across Steam and Source-engine
//! tooling: nested blocks of `"key" "value"` pairs, `//` comments, and
//! optional `[$FLAG]` conditionals. This crate parses that text into an
//! order-preserving tree of maps, sequences, and typed scalar values.
//!
//! # Example
//!
//! ```
//! use vdf_core::{parse, Node, Value};
//!
//! let map = parse("\"root\"\n{\n\t\"count\" \"2\"\n\t\"name\" \"demo\"\n}\n").unwrap();
//! let root = map.get("root").and_then(Node::as_map).unwrap();
//! assert_eq!(root.get("count"), Some(&Node::Value(Value::Int(2))));
//! ```
//!
//! Parsing behavior (type coercion, sequence promotion for repeated keys,
//! conditional filtering, recovery policy) is controlled through
//! [`ParseOptions`].

pub mod coerce;
pub mod diagnostics;
pub mod error;
pub mod lex;
pub mod limits;
pub mod node;
pub mod parser;
pub mod preprocess;
pub mod value;

pub use coerce::coerce;
pub use diagnostics::{Diagnostic, Policy};
pub use error::{VdfError, VdfErrorKind, VdfResult};
pub use limits::Limits;
pub use node::{Map, Node};
pub use parser::{
    parse, parse_bytes, parse_with_options, parse_with_sink, ParseOptions, ParseOptionsBuilder,
};
pub use value::Value;
