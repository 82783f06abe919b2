//! Component variation dataset
//!
//! The registry is derived from a flat list of documented components, each
//! with the example files that show its variations. The dataset is collected
//! from the documentation site's frontmatter; a copy is embedded in the crate.

pub mod naming;

pub use naming::{canonical_component_name, instance_name, variation_name};

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dataset shipped with the crate
const BUILTIN_DATASET: &str = include_str!("../../data/component-variations.json");

/// One documented example of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetVariation {
    #[serde(default)]
    pub file_name: String,
    /// File name without the `.tsx` extension, e.g. `button-group-default`
    #[serde(default)]
    pub example_slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl DatasetVariation {
    /// Build a variation from an example slug alone
    pub fn from_slug(example_slug: impl Into<String>) -> Self {
        let example_slug = example_slug.into();
        Self {
            file_name: if example_slug.is_empty() {
                String::new()
            } else {
                format!("{}.tsx", example_slug)
            },
            example_slug,
            title: None,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One documented component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetEntry {
    /// Content group the component is filed under, e.g. `selection-and-input`
    pub group: String,
    /// Kebab-case slug, e.g. `text-field`
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub variations: Vec<DatasetVariation>,
}

impl DatasetEntry {
    pub fn new(group: impl Into<String>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        let group = group.into();
        let slug = slug.into();
        Self {
            path: format!("{}/{}.mdx", group, slug),
            group,
            slug,
            title: title.into(),
            variations: Vec::new(),
        }
    }

    /// Add variations by example slug
    pub fn with_examples<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variations
            .extend(slugs.into_iter().map(DatasetVariation::from_slug));
        self
    }

    pub fn with_variation(mut self, variation: DatasetVariation) -> Self {
        self.variations.push(variation);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetTotals {
    pub component_count: usize,
    pub variation_count: usize,
}

/// The whole dataset as produced by the collector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub totals: DatasetTotals,
    pub components: Vec<DatasetEntry>,
}

impl Dataset {
    /// Dataset embedded at build time
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        let computed = dataset.computed_totals();
        if dataset.totals != DatasetTotals::default() && dataset.totals != computed {
            tracing::warn!(
                "Dataset totals are stale: declared {} components / {} variations, found {} / {}",
                dataset.totals.component_count,
                dataset.totals.variation_count,
                computed.component_count,
                computed.variation_count
            );
        }
        Ok(dataset)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!("Loading component dataset from {}", path.display());
        Self::from_json(&contents)
    }

    pub fn from_entries(components: Vec<DatasetEntry>) -> Self {
        let mut dataset = Self {
            components,
            ..Self::default()
        };
        dataset.totals = dataset.computed_totals();
        dataset
    }

    /// Totals recomputed from the entries
    pub fn computed_totals(&self) -> DatasetTotals {
        DatasetTotals {
            component_count: self.components.len(),
            variation_count: self.components.iter().map(|c| c.variations.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_parses() {
        let dataset = Dataset::builtin().unwrap();
        assert!(!dataset.components.is_empty());
        assert_eq!(dataset.totals, dataset.computed_totals());
        assert!(dataset.components.iter().any(|c| c.slug == "button"));
    }

    #[test]
    fn test_from_json_tolerates_missing_fields() {
        let dataset = Dataset::from_json(
            r#"{"components":[{"group":"actions","slug":"button","title":"Button",
                "variations":[{"exampleSlug":"button-plain"}]}]}"#,
        )
        .unwrap();
        assert_eq!(dataset.components[0].variations[0].example_slug, "button-plain");
        assert_eq!(dataset.components[0].variations[0].title, None);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Dataset::from_json("{not json").unwrap_err();
        assert_eq!(err.code().as_str(), "INVALID_DATASET");
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variations.json");
        let dataset = Dataset::from_entries(vec![
            DatasetEntry::new("overlays", "modal", "Modal").with_examples(["modal-default", "modal-large"]),
        ]);
        std::fs::write(&path, serde_json::to_string(&dataset).unwrap()).unwrap();

        let loaded = Dataset::from_path(&path).unwrap();
        assert_eq!(loaded, dataset);
        assert_eq!(loaded.totals.variation_count, 2);

        let missing = Dataset::from_path(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(missing.code().as_str(), "IO_ERROR");
    }

    #[test]
    fn test_entry_builders() {
        let entry = DatasetEntry::new("feedback-indicators", "spinner", "Spinner")
            .with_examples(["spinner-small", ""]);
        assert_eq!(entry.path, "feedback-indicators/spinner.mdx");
        assert_eq!(entry.variations[0].file_name, "spinner-small.tsx");
        assert_eq!(entry.variations[1].file_name, "");
    }
}
