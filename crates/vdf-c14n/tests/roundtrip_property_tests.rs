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

//! Property tests: serialized trees re-parse to the same tree.
//!
//! Generated trees stay within what KeyValues text can represent
//! faithfully: keys are bare-safe, strings avoid quotes, backslashes, and
//! anything the type coercion would claim, and sequences have at least
//! two elements (a one-element sequence de-promotes to a plain entry).

use std::collections::BTreeMap;

use proptest::prelude::*;
use vdf_c14n::{stringify_with_config, WriterConfig};
use vdf_core::{parse, Map, Node, Value};

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn arb_string() -> impl Strategy<Value = String> {
    // Printable ASCII minus '"' and '\'; leading letter keeps the text
    // out of the numeric literal space.
    "[a-z][ !#-\\[\\]-~]{0,11}"
        .prop_filter("boolean literals coerce", |s| {
            !s.eq_ignore_ascii_case("true") && !s.eq_ignore_ascii_case("false")
        })
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_string().prop_map(Value::String),
        any::<i64>().prop_map(Value::Int),
        (any::<i32>(), 0u32..1000)
            .prop_map(|(whole, frac)| Value::Float(whole as f64 + frac as f64 / 1000.0)),
        any::<bool>().prop_map(Value::Bool),
    ]
}

fn to_map(entries: BTreeMap<String, Node>) -> Map {
    let mut map = Map::new();
    for (key, node) in entries {
        map.push(key, node);
    }
    map
}

fn arb_map(depth: u32) -> BoxedStrategy<Map> {
    if depth == 0 {
        prop::collection::btree_map(arb_key(), arb_scalar().prop_map(Node::Value), 0..5)
            .prop_map(to_map)
            .boxed()
    } else {
        let element = prop_oneof![
            arb_scalar().prop_map(Node::Value),
            arb_map(depth - 1).prop_map(Node::Map),
        ];
        let node = prop_oneof![
            3 => arb_scalar().prop_map(Node::Value),
            2 => arb_map(depth - 1).prop_map(Node::Map),
            1 => prop::collection::vec(element, 2..4).prop_map(Node::Seq),
        ];
        prop::collection::btree_map(arb_key(), node, 0..5)
            .prop_map(to_map)
            .boxed()
    }
}

proptest! {
    #[test]
    fn roundtrip_compact(map in arb_map(3)) {
        let text = stringify_with_config(&map, &WriterConfig::default()).unwrap();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed, map);
    }

    #[test]
    fn roundtrip_pretty(map in arb_map(3)) {
        let config = WriterConfig::from(true);
        let text = stringify_with_config(&map, &config).unwrap();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed, map);
    }

    #[test]
    fn stringify_is_idempotent_across_reparse(map in arb_map(3)) {
        let config = WriterConfig::default();
        let once = stringify_with_config(&map, &config).unwrap();
        let twice = stringify_with_config(&parse(&once).unwrap(), &config).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn pretty_and_compact_parse_identically(map in arb_map(3)) {
        let compact = stringify_with_config(&map, &WriterConfig::default()).unwrap();
        let pretty = stringify_with_config(&map, &WriterConfig::from(true)).unwrap();
        prop_assert_eq!(parse(&compact).unwrap(), parse(&pretty).unwrap());
    }
}
