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

//! Conditional bracket evaluation.
//!
//! A conditional is a sequence of `$NAME` flag tests joined by `||` or
//! `&&`, each optionally negated with `!`. Evaluation is a left fold
//! seeded with false; a term with no leading operator combines with `||`,
//! so a single positive term simply tests its flag.

use crate::error::{VdfError, VdfResult};
use crate::lex::tokens::scan_conditional;

fn flag_name_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        .count()
}

/// Evaluate a conditional expression (bracket content, brackets removed)
/// against the set of active flag names.
///
/// Flag names are stored without the `$` sigil. Anything that does not
/// parse as operator/negation/`$NAME` terms is a syntax error.
pub fn eval_conditional(expr: &str, active: &[String], line: usize) -> VdfResult<bool> {
    let mut ok = false;
    let mut rest = expr.trim();

    while !rest.is_empty() {
        let mut op_and = false;
        if let Some(r) = rest.strip_prefix("||") {
            rest = r.trim_start();
        } else if let Some(r) = rest.strip_prefix("&&") {
            op_and = true;
            rest = r.trim_start();
        }

        let mut negate = false;
        if let Some(r) = rest.strip_prefix('!') {
            negate = true;
            rest = r;
        }

        let incorrect =
            || VdfError::syntax(format!("incorrect conditional: [{}]", expr), line);

        let r = rest.strip_prefix('$').ok_or_else(incorrect)?;
        let len = flag_name_len(r);
        if len == 0 {
            return Err(incorrect());
        }
        let name = &r[..len];
        rest = r[len..].trim_start();

        let mut term = active.iter().any(|a| a == name);
        if negate {
            term = !term;
        }
        ok = if op_and { ok && term } else { ok || term };
    }

    Ok(ok)
}

/// If `input` starts with a conditional bracket (after optional blanks),
/// return how many bytes to strip. Used when rescanning a line remainder:
/// a leftover conditional belongs to the previous token and is discarded.
pub fn strip_conditional(input: &str) -> Option<usize> {
    scan_conditional(input, 0).map(|(_, after)| after)
}
