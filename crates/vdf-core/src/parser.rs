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

//! The KeyValues parser.
//!
//! A stack machine over the logical line stream: parent keys open nested
//! blocks, `}` closes them, and key/value tokens insert scalars into the
//! block on top of the stack. Repeated keys promote to sequences when
//! arrayify is on. Nodes live in an arena of slots during parsing and are
//! extracted into the public tree at the end, so promotion never fights
//! the borrow of the enclosing block.

use crate::coerce::coerce;
use crate::diagnostics::{Diagnostic, Policy};
use crate::error::{VdfError, VdfResult};
use crate::lex::cond::{eval_conditional, strip_conditional};
use crate::lex::lines::LineStream;
use crate::lex::tokens::{match_token, TokenMatch};
use crate::limits::Limits;
use crate::node::{Map, Node};
use crate::preprocess::preprocess;
use crate::value::Value;

/// Parsing behavior switches.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Coerce values matching integer/float/boolean literals. On by default.
    pub types: bool,
    /// Promote repeated keys to sequences instead of overwriting. On by
    /// default.
    pub arrayify: bool,
    /// Active conditional flags (names without the `$` sigil).
    ///
    /// `None` disables the feature entirely: brackets are stripped and
    /// nothing is excluded. `Some(vec![])` is an empty active set, which
    /// excludes every positive test.
    pub conditionals: Option<Vec<String>>,
    /// What to do when a key is followed by neither a value nor a block.
    pub empty_values: Policy,
    /// Input size and nesting limits.
    pub limits: Limits,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            types: true,
            arrayify: true,
            conditionals: None,
            empty_values: Policy::default(),
            limits: Limits::default(),
        }
    }
}

impl ParseOptions {
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::default()
    }
}

/// Shorthand for toggling only type coercion.
impl From<bool> for ParseOptions {
    fn from(types: bool) -> Self {
        Self {
            types,
            ..Default::default()
        }
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    pub fn types(mut self, types: bool) -> Self {
        self.options.types = types;
        self
    }

    pub fn arrayify(mut self, arrayify: bool) -> Self {
        self.options.arrayify = arrayify;
        self
    }

    pub fn conditionals<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.conditionals = Some(flags.into_iter().map(Into::into).collect());
        self
    }

    pub fn empty_values(mut self, policy: Policy) -> Self {
        self.options.empty_values = policy;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.limits.max_depth = depth;
        self
    }

    pub fn build(self) -> ParseOptions {
        self.options
    }
}

// ---------------------------------------------------------------------------
// Arena tree builder
// ---------------------------------------------------------------------------

/// One arena cell. Maps and sequences hold child ids, never child slots,
/// so promoting an entry is an index swap.
#[derive(Debug)]
enum Slot {
    Value(Value),
    Map(Vec<(String, usize)>),
    Seq(Vec<usize>),
}

/// How to rewind a registered parent key if no block follows it.
#[derive(Debug)]
enum Revert {
    /// Point the map entry back at a fresh scalar.
    MapEntry { map: usize, entry: usize },
    /// Replace the last element of the sequence with a fresh scalar.
    SeqLast { seq: usize },
}

/// A parent key that has been registered but whose `{` has not arrived
/// yet. Dropped when the brace shows up; otherwise resolved through the
/// empty-value policy.
#[derive(Debug)]
struct PendingParent {
    frames_pushed: usize,
    revert: Revert,
    key: String,
    line: usize,
}

#[derive(Debug)]
struct TreeBuilder {
    arena: Vec<Slot>,
    /// Ids of the open blocks, root first. A sequence id sits directly
    /// below the map id of its newest element.
    stack: Vec<usize>,
    max_depth: usize,
}

impl TreeBuilder {
    fn new(max_depth: usize) -> Self {
        Self {
            arena: vec![Slot::Map(Vec::new())],
            stack: vec![0],
            max_depth,
        }
    }

    fn alloc(&mut self, slot: Slot) -> usize {
        self.arena.push(slot);
        self.arena.len() - 1
    }

    fn top(&self) -> usize {
        *self.stack.last().expect("stack holds at least the root")
    }

    fn entries(&self, id: usize) -> &Vec<(String, usize)> {
        match &self.arena[id] {
            Slot::Map(entries) => entries,
            _ => unreachable!("open frame is not a map"),
        }
    }

    fn entries_mut(&mut self, id: usize) -> &mut Vec<(String, usize)> {
        match &mut self.arena[id] {
            Slot::Map(entries) => entries,
            _ => unreachable!("open frame is not a map"),
        }
    }

    fn push_frame(&mut self, id: usize, line: usize) -> VdfResult<()> {
        self.stack.push(id);
        if self.stack.len() > self.max_depth {
            return Err(VdfError::limit(
                format!("maximum nesting depth of {} exceeded", self.max_depth),
                line,
            ));
        }
        Ok(())
    }

    /// Ensure the entry's child is a sequence, wrapping an existing
    /// non-sequence child as its first element. Returns the sequence id.
    fn promote_to_seq(&mut self, map: usize, entry: usize) -> usize {
        let child = self.entries(map)[entry].1;
        if matches!(self.arena[child], Slot::Seq(_)) {
            return child;
        }
        let seq = self.alloc(Slot::Seq(vec![child]));
        self.entries_mut(map)[entry].1 = seq;
        seq
    }

    fn seq_push(&mut self, seq: usize, id: usize) {
        if let Slot::Seq(ids) = &mut self.arena[seq] {
            ids.push(id);
        }
    }

    /// Register a parent key and push its block.
    fn open_block(&mut self, key: &str, arrayify: bool, line: usize) -> VdfResult<PendingParent> {
        let top = self.top();
        let existing = self.entries(top).iter().position(|(k, _)| k == key);

        match existing {
            None => {
                let id = self.alloc(Slot::Map(Vec::new()));
                self.entries_mut(top).push((key.to_string(), id));
                let entry = self.entries(top).len() - 1;
                self.push_frame(id, line)?;
                Ok(PendingParent {
                    frames_pushed: 1,
                    revert: Revert::MapEntry { map: top, entry },
                    key: key.to_string(),
                    line,
                })
            }
            Some(entry) => {
                let child = self.entries(top)[entry].1;
                if arrayify {
                    let seq = self.promote_to_seq(top, entry);
                    let id = self.alloc(Slot::Map(Vec::new()));
                    self.seq_push(seq, id);
                    self.push_frame(seq, line)?;
                    self.push_frame(id, line)?;
                    Ok(PendingParent {
                        frames_pushed: 2,
                        revert: Revert::SeqLast { seq },
                        key: key.to_string(),
                        line,
                    })
                } else if matches!(self.arena[child], Slot::Map(_)) {
                    // Re-opening an existing block patches it in place.
                    self.push_frame(child, line)?;
                    Ok(PendingParent {
                        frames_pushed: 1,
                        revert: Revert::MapEntry { map: top, entry },
                        key: key.to_string(),
                        line,
                    })
                } else {
                    let id = self.alloc(Slot::Map(Vec::new()));
                    self.entries_mut(top)[entry].1 = id;
                    self.push_frame(id, line)?;
                    Ok(PendingParent {
                        frames_pushed: 1,
                        revert: Revert::MapEntry { map: top, entry },
                        key: key.to_string(),
                        line,
                    })
                }
            }
        }
    }

    /// Insert a scalar under `key` in the top block.
    fn insert_value(&mut self, key: &str, value: Value, arrayify: bool) {
        let top = self.top();
        let existing = self.entries(top).iter().position(|(k, _)| k == key);

        match existing {
            None => {
                let id = self.alloc(Slot::Value(value));
                self.entries_mut(top).push((key.to_string(), id));
            }
            Some(entry) if arrayify => {
                let seq = self.promote_to_seq(top, entry);
                let id = self.alloc(Slot::Value(value));
                self.seq_push(seq, id);
            }
            Some(entry) => {
                let id = self.alloc(Slot::Value(value));
                self.entries_mut(top)[entry].1 = id;
            }
        }
    }

    fn close_block(&mut self, line: usize) -> VdfResult<()> {
        if self.stack.len() <= 1 {
            return Err(VdfError::syntax("unbalanced braces: unexpected '}'", line));
        }
        self.stack.pop();
        // A sequence frame closes together with its newest element.
        if self.stack.len() > 1 && matches!(self.arena[self.top()], Slot::Seq(_)) {
            self.stack.pop();
        }
        Ok(())
    }

    /// Rewind a registered parent key into an empty-string value.
    fn recover_empty_value(&mut self, pending: PendingParent) {
        for _ in 0..pending.frames_pushed {
            self.stack.pop();
        }
        let id = self.alloc(Slot::Value(Value::String(String::new())));
        match pending.revert {
            Revert::MapEntry { map, entry } => {
                self.entries_mut(map)[entry].1 = id;
            }
            Revert::SeqLast { seq } => {
                if let Slot::Seq(ids) = &mut self.arena[seq] {
                    if let Some(last) = ids.last_mut() {
                        *last = id;
                    }
                }
            }
        }
    }

    fn extract(&mut self, id: usize) -> Node {
        match std::mem::replace(&mut self.arena[id], Slot::Seq(Vec::new())) {
            Slot::Value(v) => Node::Value(v),
            Slot::Map(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (key, child) in entries {
                    let node = self.extract(child);
                    map.push(key, node);
                }
                Node::Map(map)
            }
            Slot::Seq(ids) => Node::Seq(ids.into_iter().map(|i| self.extract(i)).collect()),
        }
    }

    fn finish(&mut self, line: usize) -> VdfResult<Map> {
        if self.stack.len() != 1 {
            return Err(VdfError::syntax(
                format!("unbalanced braces: {} unclosed block(s)", self.stack.len() - 1),
                line,
            ));
        }
        match self.extract(0) {
            Node::Map(map) => Ok(map),
            _ => unreachable!("root is always a map"),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse VDF text with default options.
pub fn parse(text: &str) -> VdfResult<Map> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse VDF text, discarding any diagnostics.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> VdfResult<Map> {
    parse_with_sink(text, options, |_| {})
}

/// Parse raw bytes, validating UTF-8 first.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> VdfResult<Map> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| VdfError::validation(format!("input is not valid UTF-8: {}", e)))?;
    parse_with_options(text, options)
}

fn resolve_pending<F>(
    pending: PendingParent,
    policy: Policy,
    builder: &mut TreeBuilder,
    sink: &mut F,
    found: Option<&str>,
) -> VdfResult<()>
where
    F: FnMut(Diagnostic),
{
    match policy {
        Policy::Reject => {
            let mut err = VdfError::syntax(
                format!(
                    "expected opening brace after key \"{}\"; empty unquoted values are not allowed",
                    pending.key
                ),
                pending.line,
            );
            if let Some(text) = found {
                err = err.with_text(text.to_string());
            }
            Err(err)
        }
        Policy::Warn => {
            sink(Diagnostic::new(
                format!(
                    "key \"{}\" has no value and opens no block; treating it as an empty string",
                    pending.key
                ),
                pending.line,
            ));
            builder.recover_empty_value(pending);
            Ok(())
        }
        Policy::Allow => {
            builder.recover_empty_value(pending);
            Ok(())
        }
    }
}

/// Parse VDF text, reporting recoverable irregularities to `sink`.
pub fn parse_with_sink<F>(text: &str, options: &ParseOptions, mut sink: F) -> VdfResult<Map>
where
    F: FnMut(Diagnostic),
{
    let raw = preprocess(text, &options.limits)?;
    let mut stream = LineStream::new(raw);
    let mut builder = TreeBuilder::new(options.limits.max_depth);
    let mut pending: Option<PendingParent> = None;
    let mut last_line = 1;

    while let Some(logical) = stream.next_logical() {
        let num = logical.line;
        last_line = num;
        let text = logical.text;

        if text.trim().is_empty() {
            continue;
        }

        if text == "{" {
            // The block was already opened when its key was matched; a
            // stray brace with no pending key is ignored.
            pending = None;
            continue;
        }

        if let Some(p) = pending.take() {
            resolve_pending(p, options.empty_values, &mut builder, &mut sink, Some(&text))?;
        }

        if text == "}" {
            builder.close_block(num)?;
            continue;
        }

        let mut rest = text;
        loop {
            let token = match match_token(&rest) {
                None => {
                    return Err(
                        VdfError::syntax("unexpected token", num).with_text(rest),
                    );
                }
                Some(TokenMatch::NeedsMoreInput) => {
                    // The quoted value continues on the next logical line.
                    match stream.next_logical() {
                        Some(next) => {
                            rest.push('\n');
                            rest.push_str(&next.text);
                            last_line = next.line;
                            continue;
                        }
                        None => {
                            return Err(VdfError::syntax(
                                "unterminated quoted value at end of input",
                                num,
                            ));
                        }
                    }
                }
                Some(TokenMatch::Complete(t)) => t,
            };

            match token.value {
                None => {
                    // Parent key: open the block now, expect `{` next.
                    // Whatever trails the key on this line is discarded.
                    pending = Some(builder.open_block(&token.key, options.arrayify, num)?);
                    break;
                }
                Some(raw_value) => {
                    let mut excluded = false;
                    if let (Some(cond), Some(active)) = (&token.conditional, &options.conditionals)
                    {
                        excluded = !eval_conditional(cond, active, num)?;
                    }
                    if !excluded {
                        let value = if options.types {
                            coerce(&raw_value)
                        } else {
                            Value::String(raw_value)
                        };
                        builder.insert_value(&token.key, value, options.arrayify);
                    }

                    let mut after: String = if excluded {
                        rest[token.consumed..].to_string()
                    } else {
                        rest[token.consumed..].trim().to_string()
                    };
                    if after.trim().is_empty() || after.trim_start().starts_with('/') {
                        break;
                    }
                    // A leftover bracket belongs to the token just
                    // consumed; drop it before rescanning.
                    if let Some(n) = strip_conditional(&after) {
                        after = after[n..].to_string();
                        if after.trim().is_empty() {
                            break;
                        }
                    }
                    rest = after;
                }
            }
        }
    }

    if let Some(p) = pending.take() {
        resolve_pending(p, options.empty_values, &mut builder, &mut sink, None)?;
    }

    builder.finish(last_line)
}
