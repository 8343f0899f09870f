//! Schema-path extraction from search-hit documents.

use serde_json::Value;

use super::registry::FilterRegistry;

/// Walk a dotted path through a nested JSON document.
///
/// Returns `None` as soon as any segment is missing; an empty path resolves
/// to nothing. Never panics on unexpected document shapes.
pub fn walk_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut current = doc;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Extract the metadata leaf a named filter addresses from a raw search hit.
///
/// Looks under `hit["_source"]["ds_meta"]` and walks the filter's schema
/// path. Missing filter names, envelopes, or path segments all yield `None`.
/// Filters over top-level fields (empty schema path) have no metadata leaf.
pub fn dataset_field<'a>(
    registry: &FilterRegistry,
    hit: &'a Value,
    name: &str,
) -> Option<&'a Value> {
    let spec = registry.get(name)?;
    let meta = hit.get("_source")?.get("ds_meta")?;
    walk_path(meta, &spec.schema_path)
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_hit() -> Value {
        json!({
            "_id": "2021-03-01_10h00m00s",
            "_source": {
                "ds_name": "mouse brain",
                "ds_meta": {
                    "MS_Analysis": { "Polarity": "Positive" },
                    "Sample_Information": { "Organism": "Mus musculus" }
                }
            }
        })
    }

    #[test]
    fn walks_nested_path() {
        let hit = sample_hit();
        let meta = hit.get("_source").unwrap().get("ds_meta").unwrap();
        assert_eq!(
            walk_path(meta, "MS_Analysis.Polarity"),
            Some(&json!("Positive"))
        );
    }

    #[test]
    fn missing_intermediate_segment_yields_none() {
        let hit = sample_hit();
        let meta = hit.get("_source").unwrap().get("ds_meta").unwrap();
        assert_eq!(walk_path(meta, "Sample_Preparation.MALDI_Matrix"), None);
        assert_eq!(walk_path(meta, "MS_Analysis.Detector.Model"), None);
    }

    #[test]
    fn empty_path_yields_none() {
        let hit = sample_hit();
        assert_eq!(walk_path(&hit, ""), None);
    }

    #[test]
    fn dataset_field_resolves_through_registry() {
        let registry = FilterRegistry::dataset_filters();
        let hit = sample_hit();

        assert_eq!(
            dataset_field(&registry, &hit, "organism"),
            Some(&json!("Mus musculus"))
        );
        assert_eq!(
            dataset_field(&registry, &hit, "polarity"),
            Some(&json!("Positive"))
        );
    }

    #[test]
    fn dataset_field_degrades_to_none() {
        let registry = FilterRegistry::dataset_filters();
        let hit = sample_hit();

        // Unknown filter name.
        assert_eq!(dataset_field(&registry, &hit, "noSuchFilter"), None);
        // Known filter, path missing from this document.
        assert_eq!(dataset_field(&registry, &hit, "maldiMatrix"), None);
        // Top-level filter with no schema path.
        assert_eq!(dataset_field(&registry, &hit, "name"), None);
        // Document without the _source envelope.
        assert_eq!(dataset_field(&registry, &json!({}), "organism"), None);
    }
}
