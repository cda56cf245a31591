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

//! KeyValues text writer.
//!
//! Serializes a tree back into `"key" "value"` lines and `{ }` blocks.
//! Sequences are de-promoted: each element is written as a separate entry
//! under the same key, which the parser folds back into a sequence.
//! String content goes out verbatim, so a tree that came from the parser
//! keeps its escape sequences untouched.

use crate::config::WriterConfig;
use vdf_core::{Map, Node};

/// Initial buffer capacity for output.
///
/// Most KeyValues files (manifests, configs) are under 4KB; pre-allocating
/// avoids early reallocation churn.
const INITIAL_OUTPUT_BUFFER_CAPACITY: usize = 4096;

/// Maximum nesting depth for recursive serialization.
///
/// Well above the parser's own depth limit, so any tree the parser
/// produced serializes; hand-built pathological trees get an error
/// instead of a stack overflow.
const MAX_NESTING_DEPTH: usize = 1000;

/// Errors produced while writing a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    /// A sequence element was itself a sequence. KeyValues text has no
    /// syntax for that: sequences only exist as repeated keys in a map.
    #[error("nested sequences cannot be represented in KeyValues text (key {key:?})")]
    NestedSequence { key: String },

    /// The tree nests deeper than [`MAX_NESTING_DEPTH`].
    #[error("maximum nesting depth of {0} exceeded")]
    DepthExceeded(usize),
}

pub(crate) struct Writer<'a> {
    config: &'a WriterConfig,
    out: String,
}

impl<'a> Writer<'a> {
    pub(crate) fn new(config: &'a WriterConfig) -> Self {
        Self {
            config,
            out: String::with_capacity(INITIAL_OUTPUT_BUFFER_CAPACITY),
        }
    }

    pub(crate) fn write_document(mut self, map: &Map) -> Result<String, WriteError> {
        self.write_map(map, 0)?;
        Ok(self.out)
    }

    fn indent(&mut self, depth: usize) {
        if self.config.pretty {
            for _ in 0..depth {
                self.out.push_str(&self.config.indent);
            }
        }
    }

    fn write_map(&mut self, map: &Map, depth: usize) -> Result<(), WriteError> {
        if depth >= MAX_NESTING_DEPTH {
            return Err(WriteError::DepthExceeded(MAX_NESTING_DEPTH));
        }
        for (key, node) in map.iter() {
            self.write_entry(key, node, depth, false)?;
        }
        Ok(())
    }

    fn write_entry(
        &mut self,
        key: &str,
        node: &Node,
        depth: usize,
        in_seq: bool,
    ) -> Result<(), WriteError> {
        match node {
            Node::Value(value) => {
                self.indent(depth);
                self.out.push('"');
                self.out.push_str(key);
                self.out.push_str("\" \"");
                self.out.push_str(&value.to_string());
                self.out.push_str("\"\n");
            }
            Node::Map(map) => {
                self.indent(depth);
                self.out.push('"');
                self.out.push_str(key);
                self.out.push_str("\"\n");
                self.indent(depth);
                self.out.push_str("{\n");
                self.write_map(map, depth + 1)?;
                self.indent(depth);
                self.out.push_str("}\n");
            }
            Node::Seq(items) => {
                if in_seq {
                    return Err(WriteError::NestedSequence {
                        key: key.to_string(),
                    });
                }
                for item in items {
                    self.write_entry(key, item, depth, true)?;
                }
            }
        }
        Ok(())
    }
}
