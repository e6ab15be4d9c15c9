//! Builders for Lightspeed query-parameter filter syntax.
//!
//! The API encodes comparisons in parameter values as `operator,operand`:
//!
//! | helper | value |
//! |---|---|
//! | [`in_list`] | `IN,[1, 2, 3]` |
//! | [`contains`] | `~,%text%` |
//! | [`at_least`] | `>=,value` |
//! | [`either`] | `clause|clause` (value of the `or` parameter) |
//! | [`relations`] | `["Images","Tags"]` (value of `load_relations`) |

use std::fmt::Display;

/// Set membership: `IN,[a, b, c]`.
///
/// ```rust
/// use lightspeed_api::resources::filters::in_list;
///
/// assert_eq!(in_list(&[1, 2, 3]), "IN,[1, 2, 3]");
/// ```
#[must_use]
pub fn in_list<T: Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("IN,[{joined}]")
}

/// Substring match: `~,%text%`.
#[must_use]
pub fn contains(text: &str) -> String {
    format!("~,%{text}%")
}

/// Lower bound: `>=,value`.
#[must_use]
pub fn at_least(value: impl Display) -> String {
    format!(">=,{value}")
}

/// Joins clauses for the `or` parameter.
#[must_use]
pub fn either(clauses: &[&str]) -> String {
    clauses.join("|")
}

/// Encodes a `load_relations` list as a JSON array string.
#[must_use]
pub fn relations(names: &[&str]) -> String {
    serde_json::Value::from(names.to_vec()).to_string()
}
