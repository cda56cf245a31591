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

//! Key/value token matching.
//!
//! Matches one token at the start of a logical line: a key (quoted or
//! bare), an optional value (quoted or bare), and an optional conditional
//! bracket after the value. Quoted forms win over bare forms. Escape
//! sequences in quoted text are kept verbatim; a quoted value with no
//! closing quote on the line signals that the value continues on the next
//! line.

/// A matched key token, with an optional value and conditional.
///
/// `consumed` is the byte length of the match; the caller slices it off
/// and rescans the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueToken {
    pub key: String,
    pub value: Option<String>,
    /// Conditional bracket content, without the brackets.
    pub conditional: Option<String>,
    pub consumed: usize,
}

/// Outcome of a successful match attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenMatch {
    /// A full token was matched.
    Complete(KeyValueToken),
    /// A quoted value opened but did not close on this line; the caller
    /// must append the next logical line and rematch.
    NeedsMoreInput,
}

fn is_bare_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

fn is_bare_value_byte(b: u8) -> bool {
    is_bare_key_byte(b) || b == b'.'
}

fn is_conditional_byte(b: u8) -> bool {
    matches!(b, b'!' | b'$' | b'A'..=b'Z' | b'0'..=b'9' | b'(' | b')' | b'|' | b'&' | b',' | b' ')
}

fn skip_ws(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }
    i
}

enum Quoted {
    /// Closing quote found: body is `[start..body_end]`, scanning resumes
    /// at `after`.
    Closed { body_end: usize, after: usize },
    Unterminated,
}

/// Scan a quoted body starting just past the opening quote. A backslash
/// escapes the following character; both characters stay in the body.
fn scan_quoted_body(bytes: &[u8], start: usize) -> Quoted {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => return Quoted::Closed { body_end: i, after: i + 1 },
            b'\\' => {
                if i + 1 >= bytes.len() {
                    return Quoted::Unterminated;
                }
                i += 2;
            }
            _ => i += 1,
        }
    }
    Quoted::Unterminated
}

/// Scan a conditional bracket at `from`, skipping leading blanks.
///
/// Matching is deliberately loose on content (the evaluator rejects
/// malformed expressions); a bracket that never closes or contains a
/// character outside the conditional alphabet is left unconsumed.
pub(crate) fn scan_conditional(input: &str, from: usize) -> Option<(&str, usize)> {
    let bytes = input.as_bytes();
    let i = skip_ws(bytes, from);
    if i >= bytes.len() || bytes[i] != b'[' {
        return None;
    }
    let mut j = i + 1;
    while j < bytes.len() && is_conditional_byte(bytes[j]) {
        j += 1;
    }
    if j < bytes.len() && bytes[j] == b']' {
        Some((&input[i + 1..j], j + 1))
    } else {
        None
    }
}

/// Match one token at the start of `input`.
///
/// Returns `None` when no key can be matched (a syntax error at this
/// position). A key alone is a parent key; a key with a value is a pair.
/// The conditional is only scanned after a value: a bracket following a
/// bare parent key stays in the remainder, which the caller discards.
pub fn match_token(input: &str) -> Option<TokenMatch> {
    let bytes = input.as_bytes();
    let mut i = skip_ws(bytes, 0);

    let key = if i < bytes.len() && bytes[i] == b'"' {
        match scan_quoted_body(bytes, i + 1) {
            Quoted::Closed { body_end, after } => {
                if body_end == i + 1 {
                    return None;
                }
                let k = input[i + 1..body_end].to_string();
                i = after;
                k
            }
            // A key must close on its own line.
            Quoted::Unterminated => return None,
        }
    } else {
        let start = i;
        while i < bytes.len() && is_bare_key_byte(bytes[i]) {
            i += 1;
        }
        if i == start {
            return None;
        }
        input[start..i].to_string()
    };

    let after_key = i;
    let mut value = None;

    let vstart = skip_ws(bytes, i);
    if vstart < bytes.len() && bytes[vstart] == b'"' {
        match scan_quoted_body(bytes, vstart + 1) {
            Quoted::Closed { body_end, after } => {
                value = Some(input[vstart + 1..body_end].to_string());
                i = after;
            }
            Quoted::Unterminated => return Some(TokenMatch::NeedsMoreInput),
        }
    } else {
        let mut j = vstart;
        while j < bytes.len() && is_bare_value_byte(bytes[j]) {
            j += 1;
        }
        if j > vstart {
            value = Some(input[vstart..j].to_string());
            i = j;
        } else {
            i = after_key;
        }
    }

    let mut conditional = None;
    if value.is_some() {
        if let Some((inner, after)) = scan_conditional(input, i) {
            conditional = Some(inner.to_string());
            i = after;
        }
    }

    Some(TokenMatch::Complete(KeyValueToken {
        key,
        value,
        conditional,
        consumed: i,
    }))
}
