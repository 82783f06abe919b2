//! Registry construction from the dataset
//!
//! Runs once per language when a registry is built:
//! 1. Canonical PascalCase name from each entry's slug
//! 2. Variation names from example slugs (prefix stripped)
//! 3. First occurrence of a variation name wins within an entry
//! 4. A `default` variation is synthesized and prepended when missing
//! 5. Entries sharing a canonical name are merged, first-seen wins

use super::builtin::LanguageProfile;
use crate::component::{
    ComponentCategory, ComponentDefinition, ComponentVariation, LanguageDefinition,
    DEFAULT_VARIATION,
};
use crate::dataset::{canonical_component_name, variation_name, Dataset, DatasetEntry};
use std::collections::HashSet;

/// Derive one component definition from a single dataset entry.
pub fn derive_component(entry: &DatasetEntry, profile: &LanguageProfile) -> ComponentDefinition {
    let name = canonical_component_name(&entry.slug);
    let mut seen = HashSet::new();
    let mut variations = Vec::with_capacity(entry.variations.len() + 1);

    for example in &entry.variations {
        let variation = variation_name(&entry.slug, &example.example_slug);
        if !seen.insert(variation.clone()) {
            tracing::debug!(
                "Skipping duplicate variation {}/{} from {}",
                name,
                variation,
                example.file_name
            );
            continue;
        }

        let description = example
            .description
            .clone()
            .or_else(|| example.title.as_ref().map(|t| format!("{}: {}", entry.title, t)))
            .unwrap_or_else(|| format!("{} ({})", entry.title, variation));

        variations.push(ComponentVariation::new(variation, description, profile.import_path));
    }

    if !seen.contains(DEFAULT_VARIATION) {
        variations.insert(
            0,
            ComponentVariation::new(
                DEFAULT_VARIATION,
                format!("Standard {}", entry.title.to_lowercase()),
                profile.import_path,
            ),
        );
    }

    ComponentDefinition::new(
        name,
        format!("{} from {}", entry.title, profile.library),
        ComponentCategory::from_group(&entry.group),
        variations,
    )
}

/// Derive all components for a language, merging entries by canonical name.
pub fn derive_language(dataset: &Dataset, profile: &LanguageProfile) -> LanguageDefinition {
    let mut language = LanguageDefinition::new(profile.language, profile.description, profile.import_style);

    for entry in &dataset.components {
        if entry.slug.trim().is_empty() {
            tracing::warn!("Ignoring dataset entry with empty slug at {}", entry.path);
            continue;
        }
        language.add_component(derive_component(entry, profile));
    }

    for component in (profile.supplement)() {
        language.add_component(component);
    }

    language
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetVariation;
    use crate::language::Language;
    use crate::registry::builtin;

    fn react() -> LanguageProfile {
        builtin::profile(Language::React)
    }

    #[test]
    fn test_derive_strips_prefix_and_keeps_order() {
        let entry = DatasetEntry::new("actions", "button-group", "Button group")
            .with_examples(["button-group-default", "button-group-with-segmented-buttons"]);
        let component = derive_component(&entry, &react());

        assert_eq!(component.name, "ButtonGroup");
        assert_eq!(component.category, ComponentCategory::Actions);
        assert_eq!(component.variation_names(), vec!["default", "with-segmented-buttons"]);
        assert_eq!(component.default_variation, "default");
        assert!(component.variations.iter().all(|v| v.import_path == "@shopify/polaris"));
    }

    #[test]
    fn test_derive_synthesizes_default_first() {
        let entry = DatasetEntry::new("layout-and-structure", "layout", "Layout")
            .with_examples(["layout-one-column", "layout-annotated"]);
        let component = derive_component(&entry, &react());

        assert_eq!(component.variation_names(), vec!["default", "one-column", "annotated"]);
        assert_eq!(component.variations[0].description, "Standard layout");
    }

    #[test]
    fn test_derive_dedupes_first_wins() {
        let entry = DatasetEntry::new("layout-and-structure", "card", "Card")
            .with_variation(DatasetVariation::from_slug("card-with-subsection").with_description("first"))
            .with_variation(DatasetVariation::from_slug("card-with-subsection").with_description("second"));
        let component = derive_component(&entry, &react());

        assert_eq!(component.variation_names(), vec!["default", "with-subsection"]);
        assert_eq!(component.variation("with-subsection").unwrap().description, "first");
    }

    #[test]
    fn test_derive_empty_or_bare_slug_is_default() {
        let entry = DatasetEntry::new("utilities", "frame", "Frame")
            .with_examples(["frame-in-an-application", ""]);
        let component = derive_component(&entry, &react());
        assert_eq!(component.variation_names(), vec!["in-an-application", "default"]);

        let entry = DatasetEntry::new("feedback-indicators", "skeleton-page", "Skeleton page")
            .with_examples(["skeleton-page"]);
        let component = derive_component(&entry, &react());
        assert_eq!(component.variation_names(), vec!["default"]);
    }

    #[test]
    fn test_derive_language_merges_groups() {
        let dataset = Dataset::from_entries(vec![
            DatasetEntry::new("deprecated", "card", "Legacy card")
                .with_examples(["card-default", "card-with-footer-actions"]),
            DatasetEntry::new("layout-and-structure", "card", "Card")
                .with_examples(["card-default", "card-with-subsection"]),
            DatasetEntry::new("broken", "  ", "Broken"),
        ]);
        let language = derive_language(&dataset, &builtin::profile(Language::Vanilla));
        let card = &language.components["Card"];

        assert_eq!(card.description, "Legacy card from Cin7 vanilla JS");
        assert_eq!(&card.variation_names()[..3], &["default", "with-footer-actions", "with-subsection"]);
        assert_eq!(card.default_variation, "default");
        assert!(!language.components.contains_key(""));
    }
}
