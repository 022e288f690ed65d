// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of caller-asserted identifiers.
//!
//! Request bodies carry `organization`, `creator` and similar fields as
//! whatever JSON the caller sent. Only integers and strings holding a
//! decimal integer are accepted. Anything else parses to `None`, which the
//! access checks treat as a denial.

use serde_json::Value;

/// Parses an identifier from a JSON value.
///
/// Returns `None` for nulls, floats, booleans, containers, and strings that
/// are not a decimal integer.
#[must_use]
pub fn parse_identifier(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.parse::<i64>().ok(),
        _ => None,
    }
}

/// Parses an identifier from an optional query-string value.
#[must_use]
pub fn parse_query_identifier(value: Option<&str>) -> Option<i64> {
    value.and_then(|text| text.parse::<i64>().ok())
}
