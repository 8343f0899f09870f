//! Filter specifications.

use serde::{Deserialize, Serialize};

use super::types::{Preprocess, RelationalField};

/// Variant tag selecting how a filter renders its constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    /// Term equality.
    Exact,
    /// Case-insensitive containment.
    Substring,
    /// Phrase match on the search index; containment on the relational side.
    Phrase,
    /// Set membership over a list of identifiers.
    IdList,
    /// Ternary presence check: true requires the field, false forbids it,
    /// anything else constrains nothing.
    NullCheck,
    /// Term equality combined with an approval flag. Search index only; the
    /// relational side is a deliberate no-op.
    Group {
        /// Search field that must additionally match `true`.
        approved_field: String,
    },
}

/// One logical filter's dual rendering specification.
///
/// Immutable once a registry is built. The search side defaults to
/// `ds_meta.<schema_path>` and the relational side to JSONB extraction of
/// the same path from the `metadata` column; filters addressing top-level
/// dataset fields override one or both. Specs are serde-deserializable so a
/// deployment can define its filter set declaratively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Dotted path into the nested metadata document; empty for
    /// non-metadata fields.
    #[serde(default)]
    pub schema_path: String,

    /// Search-index field override.
    #[serde(default)]
    pub search_field: Option<String>,

    /// Relational field override.
    #[serde(default)]
    pub relational_field: Option<RelationalField>,

    /// Value normalization applied before either rendering.
    #[serde(default)]
    pub preprocess: Preprocess,

    /// Rendering variant.
    #[serde(flatten)]
    pub kind: MatchKind,
}

impl FilterSpec {
    /// Spec addressing a metadata schema path; both renderings derive from
    /// the path.
    pub fn metadata(kind: MatchKind, schema_path: &str) -> Self {
        Self {
            schema_path: schema_path.to_string(),
            search_field: None,
            relational_field: None,
            preprocess: Preprocess::None,
            kind,
        }
    }

    /// Spec addressing a top-level search-index field. The relational side
    /// is a no-op until a column is attached with [`FilterSpec::with_column`].
    pub fn search_only(kind: MatchKind, search_field: &str) -> Self {
        Self {
            schema_path: String::new(),
            search_field: Some(search_field.to_string()),
            relational_field: None,
            preprocess: Preprocess::None,
            kind,
        }
    }

    /// Attach a plain relational column.
    pub fn with_column(mut self, column: &str) -> Self {
        self.relational_field = Some(RelationalField::Column(column.to_string()));
        self
    }

    /// Attach a value normalization.
    pub fn with_preprocess(mut self, preprocess: Preprocess) -> Self {
        self.preprocess = preprocess;
        self
    }

    /// Resolved search-index field, if the spec has one.
    pub fn resolved_search_field(&self) -> Option<String> {
        if let Some(field) = &self.search_field {
            Some(field.clone())
        } else if !self.schema_path.is_empty() {
            Some(format!("ds_meta.{}", self.schema_path))
        } else {
            None
        }
    }

    /// Resolved relational field, if the spec has one.
    ///
    /// Specs with neither an override nor a schema path have no relational
    /// side; their predicates render as no-ops.
    pub fn resolved_relational_field(&self) -> Option<RelationalField> {
        if let Some(field) = &self.relational_field {
            Some(field.clone())
        } else if !self.schema_path.is_empty() {
            Some(RelationalField::JsonPath(self.schema_path.clone()))
        } else {
            None
        }
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn metadata_spec_derives_both_fields() {
        let spec = FilterSpec::metadata(MatchKind::Exact, "Sample_Information.Organism");
        assert_eq!(
            spec.resolved_search_field(),
            Some("ds_meta.Sample_Information.Organism".to_string())
        );
        assert_eq!(
            spec.resolved_relational_field(),
            Some(RelationalField::JsonPath(
                "Sample_Information.Organism".to_string()
            ))
        );
    }

    #[test]
    fn search_only_spec_has_no_relational_field() {
        let spec = FilterSpec::search_only(MatchKind::Exact, "ds_submitter_id");
        assert_eq!(
            spec.resolved_search_field(),
            Some("ds_submitter_id".to_string())
        );
        assert_eq!(spec.resolved_relational_field(), None);
    }

    #[test]
    fn column_override_wins_over_schema_path() {
        let spec = FilterSpec::search_only(MatchKind::Substring, "ds_name").with_column("name");
        assert_eq!(
            spec.resolved_relational_field(),
            Some(RelationalField::Column("name".to_string()))
        );
    }

    #[test]
    fn spec_deserializes_from_json() {
        let json = r#"{
            "kind": "phrase",
            "schema_path": "MS_Analysis.Polarity",
            "preprocess": "capitalize"
        }"#;
        let spec: FilterSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.kind, MatchKind::Phrase);
        assert_eq!(spec.preprocess, Preprocess::Capitalize);
        assert_eq!(
            spec.resolved_search_field(),
            Some("ds_meta.MS_Analysis.Polarity".to_string())
        );
    }

    #[test]
    fn group_kind_carries_flag_field() {
        let json = r#"{
            "kind": "group",
            "approved_field": "ds_group_approved",
            "search_field": "ds_group_id"
        }"#;
        let spec: FilterSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec.kind,
            MatchKind::Group {
                approved_field: "ds_group_approved".to_string()
            }
        );
    }

    #[test]
    fn spec_serde_round_trip() {
        let spec = FilterSpec::metadata(MatchKind::Phrase, "MS_Analysis.Polarity")
            .with_preprocess(Preprocess::Capitalize);
        let json = serde_json::to_string(&spec).unwrap();
        let parsed: FilterSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, spec);
    }
}
