//! Filter registry.

use std::collections::HashMap;

use crate::error::{FilterError, FilterResult};

use super::spec::{FilterSpec, MatchKind};
use super::types::Preprocess;

/// Immutable mapping from logical filter name to its spec.
///
/// Built once at startup (either the bundled dataset set or from
/// deserialized specs via [`RegistryBuilder`]) and passed by reference to
/// the resolver layer. There is no process-wide registry.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    filters: HashMap<String, FilterSpec>,
}

impl FilterRegistry {
    /// Start building a registry from scratch.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up a filter spec by logical name.
    pub fn get(&self, name: &str) -> Option<&FilterSpec> {
        self.filters.get(name)
    }

    /// Registered filter names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// The bundled dataset filter set.
    ///
    /// Logical names match the catalog's query API; search fields and
    /// relational columns match the annotation index and the `dataset`
    /// table. Filters without a relational column (`submitter`, `hasGroup`,
    /// `group`, `project`) are served by the search index only.
    pub fn dataset_filters() -> Self {
        let entries = [
            (
                "polarity",
                FilterSpec::metadata(MatchKind::Phrase, "MS_Analysis.Polarity")
                    .with_preprocess(Preprocess::Capitalize),
            ),
            (
                "ionisationSource",
                FilterSpec::metadata(MatchKind::Exact, "MS_Analysis.Ionisation_Source"),
            ),
            (
                "analyzerType",
                FilterSpec::metadata(MatchKind::Phrase, "MS_Analysis.Analyzer"),
            ),
            (
                "organism",
                FilterSpec::metadata(MatchKind::Exact, "Sample_Information.Organism"),
            ),
            (
                "organismPart",
                FilterSpec::metadata(MatchKind::Exact, "Sample_Information.Organism_Part"),
            ),
            (
                "condition",
                FilterSpec::metadata(MatchKind::Exact, "Sample_Information.Condition"),
            ),
            (
                "growthConditions",
                FilterSpec::metadata(
                    MatchKind::Exact,
                    "Sample_Information.Sample_Growth_Conditions",
                ),
            ),
            (
                "maldiMatrix",
                FilterSpec::metadata(MatchKind::Exact, "Sample_Preparation.MALDI_Matrix"),
            ),
            (
                "name",
                FilterSpec::search_only(MatchKind::Substring, "ds_name").with_column("name"),
            ),
            (
                "ids",
                FilterSpec::search_only(MatchKind::IdList, "ds_id").with_column("id"),
            ),
            (
                "status",
                FilterSpec::search_only(MatchKind::Exact, "ds_status").with_column("status"),
            ),
            (
                "submitter",
                FilterSpec::search_only(MatchKind::Exact, "ds_submitter_id"),
            ),
            (
                "hasGroup",
                FilterSpec::search_only(MatchKind::NullCheck, "ds_group_id"),
            ),
            (
                "group",
                FilterSpec::search_only(
                    MatchKind::Group {
                        approved_field: "ds_group_approved".to_string(),
                    },
                    "ds_group_id",
                ),
            ),
            (
                "project",
                FilterSpec::search_only(MatchKind::Exact, "ds_project_ids"),
            ),
            (
                "metadataType",
                FilterSpec::metadata(MatchKind::Exact, "Data_Type"),
            ),
        ];

        Self {
            filters: entries
                .into_iter()
                .map(|(name, spec)| (name.to_string(), spec))
                .collect(),
        }
    }
}

/// Builder validating filter specs as they are added.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    filters: HashMap<String, FilterSpec>,
}

impl RegistryBuilder {
    /// Add a named filter spec.
    ///
    /// Rejects duplicate names and specs that can render neither a search
    /// clause nor a relational predicate.
    pub fn insert(mut self, name: &str, spec: FilterSpec) -> FilterResult<Self> {
        if spec.resolved_search_field().is_none() && spec.resolved_relational_field().is_none() {
            return Err(FilterError::UnrenderableSpec(name.to_string()));
        }
        if self.filters.contains_key(name) {
            return Err(FilterError::DuplicateFilter(name.to_string()));
        }
        self.filters.insert(name.to_string(), spec);
        Ok(self)
    }

    /// Finish building; the registry is immutable from here on.
    pub fn build(self) -> FilterRegistry {
        FilterRegistry {
            filters: self.filters,
        }
    }
}
