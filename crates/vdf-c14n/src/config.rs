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

//! Writer configuration.

/// Configuration for KeyValues text output.
///
/// # Examples
///
/// ```
/// use vdf_c14n::WriterConfig;
///
/// // Compact output (default): one entry per line, no indentation.
/// let config = WriterConfig::default();
/// assert!(!config.pretty);
///
/// // Pretty output indented with tabs.
/// let config = WriterConfig::new().with_pretty(true);
/// assert_eq!(config.indent, "\t");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Indent nested blocks by their depth. Off by default.
    pub pretty: bool,
    /// The string written once per depth level when `pretty` is on.
    ///
    /// Default: a single tab, which is what Valve's own tooling emits.
    pub indent: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "\t".to_string(),
        }
    }
}

impl WriterConfig {
    /// Create a new configuration with all default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a `WriterConfig`.
    pub fn builder() -> WriterConfigBuilder {
        WriterConfigBuilder::default()
    }

    /// Set whether output is indented.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the per-level indent string.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

/// Shorthand for toggling only pretty-printing.
impl From<bool> for WriterConfig {
    fn from(pretty: bool) -> Self {
        Self {
            pretty,
            ..Default::default()
        }
    }
}

/// Builder for constructing a [`WriterConfig`] with a chainable API.
#[derive(Debug, Clone, Default)]
pub struct WriterConfigBuilder {
    config: WriterConfig,
}

impl WriterConfigBuilder {
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    pub fn build(self) -> WriterConfig {
        self.config
    }
}
