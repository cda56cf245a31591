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

//! Lexical analysis for the KeyValues grammar.
//!
//! - [`sanitize`] - comment stripping, brace isolation, quote-parity tracking
//! - [`lines`] - the logical line stream built on the sanitizer
//! - [`tokens`] - key/value/conditional token matching
//! - [`cond`] - conditional bracket evaluation
//!
//! A *logical line* is a sanitizer-normalized line: raw lines are split at
//! unquoted brace characters and joined across raw lines for multi-line
//! quoted values. Each logical line carries the 1-based number of the raw
//! line it came from.

pub mod cond;
pub mod lines;
pub mod sanitize;
pub mod tokens;

pub use cond::{eval_conditional, strip_conditional};
pub use lines::{LineStream, LogicalLine};
pub use sanitize::{sanitize_line, QuoteParity};
pub use tokens::{match_token, KeyValueToken, TokenMatch};
