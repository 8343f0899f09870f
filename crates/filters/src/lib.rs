//! Dataset filter layer for a mass-spectrometry imaging catalog.
//!
//! Each logical filter (organism, polarity, ids, ...) is described by a
//! [`FilterSpec`] that renders the same constraint two ways: an
//! Elasticsearch-style JSON clause for the annotation search index, and a
//! parameterized SQL predicate for the relational dataset store. Specs live
//! in an immutable [`FilterRegistry`] built once at startup and passed by
//! reference to the resolver layer.
//!
//! Filtering is fail-open: a value that does not constrain results renders
//! as a no-op on both backends instead of an error, and missing path
//! segments during field extraction degrade to an absent value.

pub mod error;
pub mod query;

pub use error::{FilterError, FilterResult};
pub use query::{
    FilterRegistry, FilterSpec, FilterValue, MatchKind, Preprocess, RegistryBuilder,
    RelationalField, SearchQueryBuilder, apply_filters, dataset_field, walk_path,
};
