//! Search-index clause rendering.
//!
//! Produces Elasticsearch-style JSON query fragments with `serde_json`:
//! `term`, `terms`, `wildcard`, phrase `match`, `exists`, and
//! `bool.must_not`. The surrounding bool query ANDs clauses together.

use serde_json::{Value, json};
use tracing::{debug, warn};

use super::registry::FilterRegistry;
use super::spec::{FilterSpec, MatchKind};
use super::types::FilterValue;

impl FilterSpec {
    /// Render the search-index clauses for `value`.
    ///
    /// An empty vector means the value does not constrain results. Most
    /// variants render at most one clause; the group variant renders two,
    /// which the consumer ANDs together.
    pub fn search_clauses(&self, value: &FilterValue) -> Vec<Value> {
        let Some(field) = self.resolved_search_field() else {
            return Vec::new();
        };

        match &self.kind {
            MatchKind::Exact => match value.as_str() {
                Some(v) => vec![json!({ "term": { field: self.preprocess.apply(v) } })],
                None => Vec::new(),
            },
            MatchKind::Substring => match value.as_str() {
                Some(v) => {
                    let escaped = escape_wildcard_metachars(&self.preprocess.apply(v));
                    let pattern = format!("*{escaped}*");
                    vec![json!({ "wildcard": { field: pattern } })]
                }
                None => Vec::new(),
            },
            MatchKind::Phrase => match value.as_str() {
                Some(v) => vec![json!({
                    "match": { field: { "query": self.preprocess.apply(v), "type": "phrase" } }
                })],
                None => Vec::new(),
            },
            MatchKind::IdList => {
                let ids = value.id_list();
                if ids.is_empty() {
                    Vec::new()
                } else {
                    vec![json!({ "terms": { field: ids } })]
                }
            }
            MatchKind::NullCheck => match value.as_bool() {
                Some(true) => vec![json!({ "exists": { "field": field } })],
                Some(false) => {
                    vec![json!({ "bool": { "must_not": { "exists": { "field": field } } } })]
                }
                None => Vec::new(),
            },
            MatchKind::Group { approved_field } => match value.as_str() {
                Some(v) => vec![
                    json!({ "term": { field: self.preprocess.apply(v) } }),
                    json!({ "term": { (approved_field.as_str()): true } }),
                ],
                None => Vec::new(),
            },
        }
    }
}

/// Escape wildcard metacharacters (`*`, `?`, `\`) in a value.
///
/// Keeps the wildcard clause a containment match, mirroring the LIKE
/// escaping on the relational side.
fn escape_wildcard_metachars(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('*', "\\*")
        .replace('?', "\\?")
}

/// Assembles active filters into a search-index bool query.
///
/// Borrows an immutable registry; clauses accumulate in call order. Unknown
/// filter names are skipped with a warning so an outdated caller degrades to
/// a broader result set rather than an error.
pub struct SearchQueryBuilder<'a> {
    registry: &'a FilterRegistry,
    clauses: Vec<Value>,
}

impl<'a> SearchQueryBuilder<'a> {
    /// Create a builder over `registry`.
    pub fn new(registry: &'a FilterRegistry) -> Self {
        Self {
            registry,
            clauses: Vec::new(),
        }
    }

    /// Add one active filter by logical name.
    pub fn filter(mut self, name: &str, value: &FilterValue) -> Self {
        match self.registry.get(name) {
            Some(spec) => self.clauses.extend(spec.search_clauses(value)),
            None => warn!(filter = name, "unknown filter name, skipping"),
        }
        self
    }

    /// Wrap the accumulated clauses as a bool filter query.
    pub fn build(self) -> Value {
        debug!(clauses = self.clauses.len(), "built search query");
        json!({ "query": { "bool": { "filter": self.clauses } } })
    }
}
