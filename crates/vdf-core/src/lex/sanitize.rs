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

//! Raw line sanitization.
//!
//! Strips trailing comments, isolates unquoted brace characters onto their
//! own logical lines, and tracks quote parity across line boundaries so that
//! multi-line quoted values pass through untouched.

/// Quote parity carried across raw lines.
///
/// Odd parity means scanning is inside an unterminated quoted value: the
/// remainder of the current raw line and following raw lines are literal
/// content until the closing quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteParity {
    odd: bool,
}

impl QuoteParity {
    /// Returns true while inside an open quoted value.
    pub fn is_open(&self) -> bool {
        self.odd
    }

    fn toggle(&mut self) {
        self.odd = !self.odd;
    }
}

/// Sanitize one raw line, updating `parity` as quotes are crossed.
///
/// Returns the logical segments the line splits into: every unquoted `{` or
/// `}` becomes its own segment, and an unquoted `/` cuts the line short
/// (comment). A quote toggles parity unless preceded by exactly one
/// unescaped backslash; a doubled backslash means the quote is not escaped.
pub fn sanitize_line(line: &str, parity: &mut QuoteParity) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());

    for (i, ch) in line.char_indices() {
        match ch {
            '"' => {
                let escaped =
                    i >= 1 && bytes[i - 1] == b'\\' && !(i >= 2 && bytes[i - 2] == b'\\');
                if !escaped {
                    parity.toggle();
                }
                out.push('"');
            }
            '/' if !parity.is_open() => break,
            '{' | '}' if !parity.is_open() => {
                out.push('\n');
                out.push(ch);
                out.push('\n');
            }
            _ => out.push(ch),
        }
    }

    out.split('\n').map(str::to_string).collect()
}
