//! Relational predicate rendering using SeaQuery.
//!
//! Every predicate is parameterized; JSONB metadata paths render as
//! `metadata#>>'{A,B}'` text extraction, matching the dataset table layout.

use sea_query::{Expr, ExprTrait, SelectStatement, SimpleExpr};
use tracing::warn;

use super::registry::FilterRegistry;
use super::spec::{FilterSpec, MatchKind};
use super::types::{FilterValue, RelationalField};

impl RelationalField {
    /// Raw SQL expression reading this field.
    fn to_sql(&self) -> String {
        match self {
            RelationalField::Column(column) => column.clone(),
            RelationalField::JsonPath(path) => {
                format!("metadata#>>'{{{}}}'", path.replace('.', ","))
            }
        }
    }
}

impl FilterSpec {
    /// Render the relational predicate for `value`.
    ///
    /// `None` leaves the query unchanged. The id-list variant is the one
    /// exception to the no-op rule: it renders an IN predicate even over an
    /// empty list, which SeaQuery emits as a false condition.
    pub fn sql_condition(&self, value: &FilterValue) -> Option<SimpleExpr> {
        let field = self.resolved_relational_field()?;
        let sql = field.to_sql();

        match &self.kind {
            MatchKind::Exact => {
                let v = self.preprocess.apply(value.as_str()?);
                Some(Expr::cust_with_values(format!("{sql} = $1"), [v]))
            }
            // Phrase matching has no relational equivalent beyond containment.
            MatchKind::Substring | MatchKind::Phrase => {
                let v = self.preprocess.apply(value.as_str()?);
                let pattern = format!("%{}%", escape_like_wildcards(&v));
                Some(Expr::cust_with_values(format!("{sql} ILIKE $1"), [pattern]))
            }
            MatchKind::IdList => Some(Expr::cust(sql).is_in(value.id_list())),
            MatchKind::NullCheck => match value.as_bool()? {
                true => Some(Expr::cust(sql).is_not_null()),
                false => Some(Expr::cust(sql).is_null()),
            },
            // Group filters only exist on the search index.
            MatchKind::Group { .. } => None,
        }
    }
}

/// AND every active filter's predicate onto an existing select.
///
/// Unknown names and non-constraining values are skipped; the query stays
/// valid either way.
pub fn apply_filters(
    query: &mut SelectStatement,
    registry: &FilterRegistry,
    active: &[(&str, FilterValue)],
) {
    for (name, value) in active {
        let Some(spec) = registry.get(name) else {
            warn!(filter = %name, "unknown filter name, skipping");
            continue;
        };
        if let Some(condition) = spec.sql_condition(value) {
            query.and_where(condition);
        }
    }
}

/// Escape SQL LIKE wildcard characters (`%`, `_`, `\`) in a value.
fn escape_like_wildcards(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
