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

//! The logical line stream.
//!
//! Pulls raw lines, runs them through the sanitizer, and yields the
//! resulting logical lines one at a time. Blank lines and comment-only
//! lines disappear here; brace characters arrive as their own logical
//! lines. Lines that begin or end inside an open quoted value are yielded
//! untrimmed because their whitespace is value content.

use std::collections::VecDeque;

use crate::lex::sanitize::{sanitize_line, QuoteParity};
use crate::preprocess::RawLines;

/// One sanitizer-normalized line, tagged with the 1-based number of the
/// raw line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub text: String,
    pub line: usize,
}

/// Streaming source of logical lines.
#[derive(Debug)]
pub struct LineStream<'a> {
    lines: Vec<(usize, &'a str)>,
    pos: usize,
    pending: VecDeque<LogicalLine>,
    parity: QuoteParity,
}

impl<'a> LineStream<'a> {
    pub fn new(raw: RawLines<'a>) -> Self {
        Self {
            lines: raw.into_lines(),
            pos: 0,
            pending: VecDeque::new(),
            parity: QuoteParity::default(),
        }
    }

    /// Fetch the next logical line, or `None` at end of input.
    pub fn next_logical(&mut self) -> Option<LogicalLine> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(line);
            }

            let (num, raw) = *self.lines.get(self.pos)?;
            self.pos += 1;

            let was_open = self.parity.is_open();
            if !was_open && raw.trim().is_empty() {
                continue;
            }

            let segments = sanitize_line(raw, &mut self.parity);
            let now_open = self.parity.is_open();
            let last = segments.len() - 1;
            for (i, seg) in segments.into_iter().enumerate() {
                // Only the first segment can start inside a quote and only
                // the last can end inside one; those stay untrimmed.
                let literal = (i == 0 && was_open) || (i == last && now_open);
                if literal {
                    self.pending.push_back(LogicalLine {
                        text: seg,
                        line: num,
                    });
                } else {
                    let trimmed = seg.trim();
                    if !trimmed.is_empty() {
                        self.pending.push_back(LogicalLine {
                            text: trimmed.to_string(),
                            line: num,
                        });
                    }
                }
            }
        }
    }
}
