//! Filter value and field-source types.

use serde::{Deserialize, Serialize};

/// Raw value supplied for one active filter.
///
/// `Null` (or an absent filter) constrains nothing; every variant treats it
/// as a no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Explicit null: no constraint.
    Null,
    /// Ternary flag for null-check filters.
    Bool(bool),
    /// Single scalar value.
    String(String),
    /// Identifier list (id-list filters).
    List(Vec<String>),
}

impl FilterValue {
    /// Scalar string value, if that is what was supplied.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean value, if that is what was supplied.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Identifier list for set-membership filters.
    ///
    /// Native lists pass through unchanged. A single string splits on `|`,
    /// the legacy transport for callers that cannot send arrays; empty
    /// segments are dropped, so `""` yields no identifiers.
    pub fn id_list(&self) -> Vec<String> {
        match self {
            FilterValue::List(ids) => ids.clone(),
            FilterValue::String(s) => s
                .split('|')
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Pure value normalization applied before either rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preprocess {
    #[default]
    None,
    /// Uppercase the first character, lowercase the rest.
    Capitalize,
    Lowercase,
}

impl Preprocess {
    /// Apply the normalization to a raw value.
    pub fn apply(&self, value: &str) -> String {
        match self {
            Preprocess::None => value.to_string(),
            Preprocess::Capitalize => capitalize(value),
            Preprocess::Lowercase => value.to_lowercase(),
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Where a filter's relational predicate reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationalField {
    /// Plain column on the dataset table.
    Column(String),
    /// Dotted path extracted as text from the `metadata` JSONB column,
    /// rendered as `metadata#>>'{A,B}'`.
    JsonPath(String),
}
