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

//! End-to-end conformance tests against real-world shaped VDF documents.

use vdf_core::{parse, parse_with_options, Map, Node, ParseOptions, Policy, Value};

fn value_of<'a>(map: &'a Map, key: &str) -> &'a Value {
    match map.get(key) {
        Some(Node::Value(v)) => v,
        other => panic!("expected value under {:?}, got {:?}", key, other),
    }
}

fn map_of<'a>(map: &'a Map, key: &str) -> &'a Map {
    match map.get(key) {
        Some(Node::Map(m)) => m,
        other => panic!("expected map under {:?}, got {:?}", key, other),
    }
}

fn seq_of<'a>(map: &'a Map, key: &str) -> &'a [Node] {
    match map.get(key) {
        Some(Node::Seq(s)) => s,
        other => panic!("expected seq under {:?}, got {:?}", key, other),
    }
}

// ==================== Steam-shaped documents ====================

#[test]
fn test_app_manifest() {
    let text = r#"
"AppState"
{
	"appid"		"440"
	"Universe"	"1"
	"name"		"Team Fortress 2"
	"StateFlags"	"4"
	"installdir"	"Team Fortress 2"
	"UserConfig"
	{
		"language"	"english"
	}
	"InstalledDepots"
	{
		"441"
		{
			"manifest"	"7381680148727785407"
			"size"		"401royal"
		}
	}
}
"#;
    // "401royal" is not a clean literal and must stay a string
    let doc = parse(text).unwrap();
    let state = map_of(&doc, "AppState");
    assert_eq!(value_of(state, "appid"), &Value::Int(440));
    assert_eq!(
        value_of(state, "name"),
        &Value::String("Team Fortress 2".to_string())
    );
    let depot = map_of(map_of(state, "InstalledDepots"), "441");
    assert_eq!(
        value_of(depot, "manifest"),
        &Value::Int(7381680148727785407)
    );
    assert_eq!(
        value_of(depot, "size"),
        &Value::String("401royal".to_string())
    );
}

#[test]
fn test_library_folders_with_comments() {
    let text = r#"
// libraryfolders.vdf
"libraryfolders"
{
	"0"
	{
		"path"		"/home/user/.steam/steam"	// default library
		"mounted"	"1"
	}
	"1"
	{
		"path"		"/mnt/games/SteamLibrary"
	}
}
"#;
    let doc = parse(text).unwrap();
    let folders = map_of(&doc, "libraryfolders");
    assert_eq!(folders.len(), 2);
    assert_eq!(
        value_of(map_of(folders, "0"), "path"),
        &Value::String("/home/user/.steam/steam".to_string())
    );
}

// ==================== Coercion scenarios ====================

#[test]
fn test_quoted_values_are_coerced() {
    let text = "\"0\" \"-12.34\"\n\"neg\" \"-7\"\n\"flag\" \"True\"\n\"off\" \"false\"";
    let doc = parse(text).unwrap();
    assert_eq!(value_of(&doc, "0"), &Value::Float(-12.34));
    assert_eq!(value_of(&doc, "neg"), &Value::Int(-7));
    assert_eq!(value_of(&doc, "flag"), &Value::Bool(true));
    assert_eq!(value_of(&doc, "off"), &Value::Bool(false));
}

#[test]
fn test_bare_values_are_coerced() {
    let doc = parse("count 3\nratio 0.5\nenabled True").unwrap();
    assert_eq!(value_of(&doc, "count"), &Value::Int(3));
    assert_eq!(value_of(&doc, "ratio"), &Value::Float(0.5));
    assert_eq!(value_of(&doc, "enabled"), &Value::Bool(true));
}

#[test]
fn test_untyped_parse_keeps_strings() {
    let doc = parse_with_options("count 3", &ParseOptions::from(false)).unwrap();
    assert_eq!(value_of(&doc, "count"), &Value::String("3".to_string()));
}

// ==================== Sanitizer torture ====================

#[test]
fn test_glued_braces_and_empty_blocks() {
    let text = "\"root\"\n{\n\"k\" \"v\"\n} \"empty\"{}\"empty2\"{\"empty3\"{}}";
    let doc = parse(text).unwrap();
    assert_eq!(value_of(map_of(&doc, "root"), "k"), &Value::String("v".to_string()));
    assert!(map_of(&doc, "empty").is_empty());
    let empty2 = map_of(&doc, "empty2");
    assert!(map_of(empty2, "empty3").is_empty());
}

#[test]
fn test_escaped_quotes_survive_verbatim() {
    let text = r#""EscapedQuotes" "aaa\\nooo\"{{uuu\"\"{{\"hhh""#;
    let doc = parse(text).unwrap();
    assert_eq!(
        value_of(&doc, "EscapedQuotes"),
        &Value::String(r#"aaa\\nooo\"{{uuu\"\"{{\"hhh"#.to_string())
    );
}

#[test]
fn test_braces_and_comments_inside_quotes() {
    let text = "\"k\" \"a { b } c // not a comment\"";
    let doc = parse(text).unwrap();
    assert_eq!(
        value_of(&doc, "k"),
        &Value::String("a { b } c // not a comment".to_string())
    );
}

#[test]
fn test_multiline_value_joined_with_newlines() {
    let text = "\"motd\" \"Welcome!\nSecond line\n\nFourth line\"\n\"after\" \"1\"";
    let doc = parse(text).unwrap();
    assert_eq!(
        value_of(&doc, "motd"),
        &Value::String("Welcome!\nSecond line\n\nFourth line".to_string())
    );
    assert_eq!(value_of(&doc, "after"), &Value::Int(1));
}

#[test]
fn test_duplicate_keys_inside_inline_block() {
    let doc = parse("\"b\" { dup \"1\" dup \"2\" }").unwrap();
    let seq = seq_of(map_of(&doc, "b"), "dup");
    assert_eq!(seq.len(), 2);
    assert_eq!(seq[0], Node::Value(Value::Int(1)));
    assert_eq!(seq[1], Node::Value(Value::Int(2)));
}

// ==================== Sequence promotion ====================

#[test]
fn test_repeated_blocks_become_sequence() {
    let text = r#"
"bots"
{
	"bot" { "name" "alpha" }
	"bot" { "name" "beta" }
	"bot" { "name" "gamma" }
}
"#;
    let doc = parse(text).unwrap();
    let bots = seq_of(map_of(&doc, "bots"), "bot");
    assert_eq!(bots.len(), 3);
    let names: Vec<_> = bots
        .iter()
        .map(|b| value_of(b.as_map().unwrap(), "name").clone())
        .collect();
    assert_eq!(
        names,
        vec![
            Value::String("alpha".to_string()),
            Value::String("beta".to_string()),
            Value::String("gamma".to_string())
        ]
    );
}

#[test]
fn test_mixed_sequence_of_scalar_and_block() {
    let doc = parse("\"item\" \"plain\"\n\"item\" { \"kind\" \"rich\" }").unwrap();
    let seq = seq_of(&doc, "item");
    assert!(seq[0].is_value());
    assert_eq!(
        value_of(seq[1].as_map().unwrap(), "kind"),
        &Value::String("rich".to_string())
    );
}

// ==================== Conditionals ====================

#[test]
fn test_platform_selection() {
    let text = r#"
"binaries"
{
	"bin"	"client.dll"	[$WIN32]
	"bin"	"client.dylib"	[$OSX]
	"bin"	"client.so"	[$LINUX]
	"gl"	"1"		[!$WIN32]
}
"#;
    let options = ParseOptions::builder().conditionals(["LINUX"]).build();
    let doc = parse_with_options(text, &options).unwrap();
    let bins = map_of(&doc, "binaries");
    assert_eq!(
        value_of(bins, "bin"),
        &Value::String("client.so".to_string())
    );
    assert_eq!(value_of(bins, "gl"), &Value::Int(1));
}

#[test]
fn test_conditionals_disabled_keeps_everything() {
    let text = "\"a\" \"1\" [$WIN32]\n\"b\" \"2\" [$OSX]";
    let doc = parse(text).unwrap();
    assert_eq!(value_of(&doc, "a"), &Value::Int(1));
    assert_eq!(value_of(&doc, "b"), &Value::Int(2));
}

#[test]
fn test_compound_conditionals() {
    let text = "\"a\" \"1\" [$X360&&$GAMECONSOLE]\n\"b\" \"2\" [$OSX||$LINUX]";
    let options = ParseOptions::builder().conditionals(["X360", "GAMECONSOLE"]).build();
    let doc = parse_with_options(text, &options).unwrap();
    assert_eq!(value_of(&doc, "a"), &Value::Int(1));
    assert!(doc.get("b").is_none());
}

// ==================== Recovery ====================

#[test]
fn test_lenient_parse_of_bare_dangling_key() {
    let text = "\"settings\"\n{\n\"theme\"\n\"volume\" \"11\"\n}";
    let options = ParseOptions::builder().empty_values(Policy::Allow).build();
    let doc = parse_with_options(text, &options).unwrap();
    let settings = map_of(&doc, "settings");
    assert_eq!(value_of(settings, "theme"), &Value::String(String::new()));
    assert_eq!(value_of(settings, "volume"), &Value::Int(11));
}

#[test]
fn test_strict_parse_of_bare_dangling_key() {
    let err = parse("\"settings\"\n{\n\"theme\"\n\"volume\" \"11\"\n}").unwrap_err();
    assert_eq!(err.line, 3);
}
