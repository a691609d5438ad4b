//! Repair of spreadsheet exports that are not quite JSON.
//!
//! Exporters that serialize floats naively emit bare `NaN`, `Infinity` and
//! `-Infinity` for empty or overflowing cells. Those tokens are rewritten to
//! `null` before parsing; text inside string literals is left untouched.

use std::borrow::Cow;

const NON_FINITE_TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Replace non-finite number tokens outside string literals with `null`.
pub fn repair_non_finite(input: &str) -> Cow<'_, str> {
    if !input.contains("NaN") && !input.contains("Infinity") {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
        } else if ch == '"' {
            in_string = true;
        } else if let Some(token) = NON_FINITE_TOKENS
            .iter()
            .find(|token| rest.starts_with(**token))
        {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    Cow::Owned(out)
}
