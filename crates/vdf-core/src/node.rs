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

//! Tree data model for parsed VDF documents.

use crate::value::Value;

/// A node in a VDF tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// A scalar leaf.
    Value(Value),
    /// A nested mapping (`"key" { ... }` block).
    Map(Map),
    /// A sequence created by promoting a repeated key (arrayify).
    Seq(Vec<Node>),
}

impl Node {
    /// Returns true if this node is a scalar.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns true if this node is a mapping.
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns true if this node is a sequence.
    pub fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Try to get the node as a scalar value.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the node as a mapping.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Try to get the node as a sequence.
    pub fn as_seq(&self) -> Option<&[Node]> {
        match self {
            Self::Seq(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for Node {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl From<Map> for Node {
    fn from(m: Map) -> Self {
        Self::Map(m)
    }
}

/// An insertion-ordered mapping of keys to nodes.
///
/// VDF key order is significant and duplicate keys are legal in source text,
/// so the mapping is backed by a vector of entries rather than a sorted map.
/// [`push`](Map::push) appends without checking for duplicates;
/// [`insert`](Map::insert) replaces the first existing entry with the same
/// key. Lookups return the first match.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    entries: Vec<(String, Node)>,
}

impl Map {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the first node stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, n)| n)
    }

    /// Get the first node stored under `key`, mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, n)| n)
    }

    /// Returns true if any entry uses `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Replace the first entry under `key`, or append a new one.
    /// Returns the previous node if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        let key = key.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(std::mem::replace(slot, node))
        } else {
            self.entries.push((key, node));
            None
        }
    }

    /// Append an entry without checking for duplicates.
    pub fn push(&mut self, key: impl Into<String>, node: Node) {
        self.entries.push((key.into(), node));
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate nodes in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter().map(|(_, n)| n)
    }
}

impl FromIterator<(String, Node)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Node);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, Node)>,
        fn(&'a (String, Node)) -> (&'a String, &'a Node),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(k, n)| (k, n))
    }
}
