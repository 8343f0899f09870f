//! Filter query module.
//!
//! This module provides:
//! - FilterSpec / MatchKind: one logical filter's dual-backend rendering
//! - FilterRegistry: immutable, explicitly constructed filter set
//! - SearchQueryBuilder: bool-query assembly for the search index
//! - apply_filters: predicate assembly for a SeaQuery select
//! - dataset_field / walk_path: schema-path extraction from search hits

mod document;
mod registry;
mod search;
mod spec;
mod sql;
pub mod types;

pub use document::{dataset_field, walk_path};
pub use registry::{FilterRegistry, RegistryBuilder};
pub use search::SearchQueryBuilder;
pub use spec::{FilterSpec, MatchKind};
pub use sql::apply_filters;
pub use types::{FilterValue, Preprocess, RelationalField};
