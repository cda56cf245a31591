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

//! Input preprocessing: size checks and raw line splitting.

use crate::error::{VdfError, VdfResult};
use crate::limits::Limits;
use memchr::memchr_iter;

/// Raw input split into lines, each carrying its 1-based line number.
///
/// Zero-copy: lines borrow from the input text. Line terminators are not
/// included; a trailing `\r` is left in place and removed later by logical
/// line trimming (except inside open quoted values, where it is content).
#[derive(Debug)]
pub struct RawLines<'a> {
    lines: Vec<(usize, &'a str)>,
}

impl<'a> RawLines<'a> {
    /// Iterate `(line_number, text)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines.iter().copied()
    }

    /// Number of raw lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true when the input had no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume into the underlying `(line_number, text)` pairs.
    pub fn into_lines(self) -> Vec<(usize, &'a str)> {
        self.lines
    }
}

/// Split input into raw lines, enforcing size limits.
pub fn preprocess<'a>(text: &'a str, limits: &Limits) -> VdfResult<RawLines<'a>> {
    if text.len() > limits.max_input_size {
        return Err(VdfError::limit(
            format!(
                "input too large: exceeds limit of {} bytes",
                limits.max_input_size
            ),
            0,
        ));
    }

    let bytes = text.as_bytes();
    let estimated = memchr_iter(b'\n', bytes).count() + 1;
    let mut lines = Vec::with_capacity(estimated);

    let mut start = 0;
    let mut line_num = 1;
    for pos in memchr_iter(b'\n', bytes) {
        push_line(&mut lines, text, line_num, start, pos, limits)?;
        start = pos + 1;
        line_num += 1;
    }
    push_line(&mut lines, text, line_num, start, bytes.len(), limits)?;

    Ok(RawLines { lines })
}

fn push_line<'a>(
    lines: &mut Vec<(usize, &'a str)>,
    text: &'a str,
    line_num: usize,
    start: usize,
    end: usize,
    limits: &Limits,
) -> VdfResult<()> {
    if end - start > limits.max_line_length {
        return Err(VdfError::limit(
            format!(
                "line too long: exceeds limit of {} bytes",
                limits.max_line_length
            ),
            line_num,
        ));
    }
    lines.push((line_num, &text[start..end]));
    Ok(())
}
