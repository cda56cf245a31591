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

//! Scalar type coercion.
//!
//! Applied to every value, quoted or bare, when the `types` option is on.
//! The literal forms are deliberately narrow: an optional minus and
//! decimal digits for integers, the same with exactly one interior dot for
//! floats, and case-insensitive `true`/`false` for booleans. Anything
//! else, including exponent notation, leading `+`, or surrounding
//! whitespace, stays a string.

use crate::value::Value;

fn is_int_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float_literal(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    match body.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Coerce raw value text into a typed [`Value`].
///
/// An integer literal too large for `i64` falls back to a string rather
/// than losing precision.
pub fn coerce(text: &str) -> Value {
    if is_int_literal(text) {
        return match text.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::String(text.to_string()),
        };
    }
    if is_float_literal(text) {
        if let Ok(n) = text.parse::<f64>() {
            return Value::Float(n);
        }
    }
    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Integer coercion ====================

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce("0"), Value::Int(0));
        assert_eq!(coerce("42"), Value::Int(42));
        assert_eq!(coerce("-17"), Value::Int(-17));
        assert_eq!(coerce("007"), Value::Int(7));
    }

    #[test]
    fn test_coerce_int_overflow_stays_string() {
        let big = "99999999999999999999999999";
        assert_eq!(coerce(big), Value::String(big.to_string()));
    }

    #[test]
    fn test_coerce_not_int() {
        assert_eq!(coerce("-"), Value::String("-".to_string()));
        assert_eq!(coerce("+1"), Value::String("+1".to_string()));
        assert_eq!(coerce("1 "), Value::String("1 ".to_string()));
        assert_eq!(coerce("0x10"), Value::String("0x10".to_string()));
    }

    // ==================== Float coercion ====================

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce("1.5"), Value::Float(1.5));
        assert_eq!(coerce("-12.34"), Value::Float(-12.34));
        assert_eq!(coerce("0.0"), Value::Float(0.0));
    }

    #[test]
    fn test_coerce_not_float() {
        assert_eq!(coerce(".5"), Value::String(".5".to_string()));
        assert_eq!(coerce("5."), Value::String("5.".to_string()));
        assert_eq!(coerce("1.2.3"), Value::String("1.2.3".to_string()));
        assert_eq!(coerce("1e5"), Value::String("1e5".to_string()));
    }

    // ==================== Boolean coercion ====================

    #[test]
    fn test_coerce_bool() {
        assert_eq!(coerce("true"), Value::Bool(true));
        assert_eq!(coerce("false"), Value::Bool(false));
        assert_eq!(coerce("True"), Value::Bool(true));
        assert_eq!(coerce("FALSE"), Value::Bool(false));
    }

    #[test]
    fn test_coerce_not_bool() {
        assert_eq!(coerce("yes"), Value::String("yes".to_string()));
        assert_eq!(coerce("1true"), Value::String("1true".to_string()));
    }

    // ==================== Fallback ====================

    #[test]
    fn test_coerce_string_fallback() {
        assert_eq!(coerce(""), Value::String(String::new()));
        assert_eq!(coerce("hello world"), Value::String("hello world".to_string()));
    }
}
