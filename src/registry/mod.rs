//! Component Registry
//!
//! Authoritative source of what exists per language. Built once from the
//! dataset and read-only afterwards, except for the two extension maps
//! (custom components and aliases), which are last-write-wins.
//!
//! Two query surfaces:
//! - strict: `language`, `component`, `variation` return typed errors
//! - lenient: `is_available` and the `list_*` methods never fail
//!
//! Extension takes `&mut self`, so all of it happens before the registry is
//! lent to a [`Resolver`](crate::resolver::Resolver).

pub mod build;
pub mod builtin;

pub use builtin::{profile, profiles, LanguageProfile};

use crate::component::{ComponentDefinition, ComponentVariation, LanguageDefinition};
use crate::dataset::{canonical_component_name, Dataset};
use crate::language::Language;
use crate::statement::IncludeStatement;
use crate::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    languages: IndexMap<Language, LanguageDefinition>,
    aliases: HashMap<String, IncludeStatement>,
    custom_components: HashMap<String, ComponentDefinition>,
}

impl Registry {
    /// Registry with no languages at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry built from the embedded dataset for every language
    pub fn builtin() -> Result<Self> {
        Ok(Self::from_dataset(&Dataset::builtin()?))
    }

    /// Registry built from `dataset` for every language
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let registry = Self::with_languages(
            profiles()
                .iter()
                .map(|profile| build::derive_language(dataset, profile)),
        );
        tracing::info!(
            "Built component registry: {} languages, {} dataset components",
            registry.languages.len(),
            dataset.components.len()
        );
        registry
    }

    /// Registry holding exactly the given language definitions
    pub fn with_languages(languages: impl IntoIterator<Item = LanguageDefinition>) -> Self {
        Self {
            languages: languages.into_iter().map(|l| (l.name, l)).collect(),
            ..Self::default()
        }
    }

    // --- strict lookups ---

    pub fn language(&self, language: Language) -> Result<&LanguageDefinition> {
        self.languages
            .get(&language)
            .ok_or_else(|| Error::LanguageNotSupported {
                language: language.to_string(),
            })
    }

    /// Look a component up by exact name, then by its canonical name
    /// (`button-group` finds `ButtonGroup`).
    pub fn component(&self, language: Language, name: &str) -> Result<&ComponentDefinition> {
        let lang = self.language(language)?;
        lang.components
            .get(name)
            .or_else(|| lang.components.get(&canonical_component_name(name)))
            .ok_or_else(|| Error::ComponentNotFound {
                language,
                component: name.to_string(),
                variation: None,
            })
    }

    pub fn variation(&self, language: Language, component: &str, variation: &str) -> Result<&ComponentVariation> {
        self.component(language, component)?
            .variation(variation)
            .ok_or_else(|| Error::VariationNotFound {
                language,
                component: component.to_string(),
                variation: variation.to_string(),
            })
    }

    // --- lenient queries ---

    /// Whether the component (and variation, if given) exists. Never fails.
    pub fn is_available(&self, language: Language, component: &str, variation: Option<&str>) -> bool {
        match variation {
            None => self.component(language, component).is_ok(),
            Some(variation) => self.variation(language, component, variation).is_ok(),
        }
    }

    pub fn list_variations(&self, language: Language, component: &str) -> Vec<String> {
        self.component(language, component)
            .map(ComponentDefinition::variation_names)
            .unwrap_or_default()
    }

    pub fn list_components(&self, language: Language) -> Vec<String> {
        self.language(language)
            .map(|l| l.components.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn list_languages(&self) -> Vec<Language> {
        self.languages.keys().copied().collect()
    }

    // --- extension ---

    /// Store a custom component; replaces any previous one with this name.
    pub fn add_custom_component(&mut self, name: impl Into<String>, definition: ComponentDefinition) {
        let name = name.into();
        if self.custom_components.insert(name.clone(), definition).is_some() {
            tracing::debug!("Replaced custom component {}", name);
        }
    }

    /// Store an alias; replaces any previous statement under this alias.
    pub fn add_alias(&mut self, alias: impl Into<String>, statement: IncludeStatement) {
        let alias = alias.into();
        tracing::debug!("Alias {} -> {}", alias, statement);
        self.aliases.insert(alias, statement);
    }

    pub fn custom_component(&self, name: &str) -> Option<&ComponentDefinition> {
        self.custom_components.get(name)
    }

    pub fn custom_components(&self) -> &HashMap<String, ComponentDefinition> {
        &self.custom_components
    }

    pub fn alias(&self, alias: &str) -> Option<&IncludeStatement> {
        self.aliases.get(alias)
    }

    pub fn aliases(&self) -> &HashMap<String, IncludeStatement> {
        &self.aliases
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageDefinition> {
        self.languages.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentCategory;
    use crate::dataset::{variation_name, DatasetEntry};
    use crate::ErrorCode;

    fn registry() -> Registry {
        Registry::builtin().unwrap()
    }

    #[test]
    fn test_strict_lookups() {
        let registry = registry();
        assert_eq!(registry.language(Language::React).unwrap().name, Language::React);
        assert_eq!(registry.component(Language::React, "Button").unwrap().name, "Button");
        assert_eq!(
            registry.variation(Language::React, "Button", "plain").unwrap().import_path,
            "@shopify/polaris"
        );
    }

    #[test]
    fn test_component_lookup_accepts_slug() {
        let registry = registry();
        let component = registry.component(Language::Vanilla, "button-group").unwrap();
        assert_eq!(component.name, "ButtonGroup");
    }

    #[test]
    fn test_component_not_found() {
        let err = registry().component(Language::React, "NoSuchComponent").unwrap_err();
        assert_eq!(err.code(), ErrorCode::ComponentNotFound);
        assert_eq!(
            err.to_string(),
            "Component \"NoSuchComponent\" not found in framework \"react\""
        );
    }

    #[test]
    fn test_variation_not_found() {
        let err = registry()
            .variation(Language::React, "Button", "sparkly")
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::VariationNotFound);
        let context = err.statement().unwrap();
        assert_eq!(context.component, "Button");
        assert_eq!(context.variation, "sparkly");
    }

    #[test]
    fn test_missing_language() {
        let registry = Registry::empty();
        let err = registry.language(Language::ExtJs).unwrap_err();
        assert_eq!(err.code(), ErrorCode::LanguageNotSupported);
        assert!(registry.list_components(Language::ExtJs).is_empty());
        assert!(registry.list_languages().is_empty());
    }

    #[test]
    fn test_lenient_degradation() {
        let registry = registry();
        assert!(!registry.is_available(Language::React, "NoSuchComponent", None));
        assert!(!registry.is_available(Language::React, "Button", Some("sparkly")));
        assert!(registry.is_available(Language::React, "Button", None));
        assert!(registry.list_variations(Language::React, "NoSuchComponent").is_empty());
    }

    #[test]
    fn test_coverage_of_dataset() {
        let registry = registry();
        let dataset = Dataset::builtin().unwrap();
        for language in Language::all() {
            for entry in &dataset.components {
                let component = canonical_component_name(&entry.slug);
                assert!(registry.is_available(*language, &component, None));
                for example in &entry.variations {
                    let variation = variation_name(&entry.slug, &example.example_slug);
                    assert!(
                        registry.is_available(*language, &component, Some(&variation)),
                        "{}:{}/{} missing",
                        language,
                        component,
                        variation
                    );
                }
            }
        }
    }

    #[test]
    fn test_default_synthesized_first() {
        let registry = registry();
        for component in ["Layout", "ActionList", "Popover", "ChoiceList", "Text"] {
            let variations = registry.list_variations(Language::React, component);
            assert_eq!(variations.first().map(String::as_str), Some("default"), "{}", component);
        }
    }

    #[test]
    fn test_every_component_has_its_default_variation() {
        let registry = registry();
        for language in registry.languages() {
            for component in language.components.values() {
                assert!(component.has_variation(&component.default_variation));
            }
        }
    }

    #[test]
    fn test_merged_groups_first_seen_wins() {
        let registry = registry();
        let card = registry.component(Language::React, "Card").unwrap();
        // The deprecated group sorts before layout-and-structure in the dataset.
        assert!(card.description.starts_with("Legacy card"));
        assert!(card.has_variation("with-footer-actions"));
        assert!(card.has_variation("with-subsection"));
        assert!(card.has_variation("metric-card"));
        assert_eq!(card.variations.iter().filter(|v| v.name == "default").count(), 1);
    }

    #[test]
    fn test_language_specific_families() {
        let registry = registry();
        assert!(registry.is_available(Language::ExtJs, "DataGrid", Some("enterprise")));
        assert!(!registry.is_available(Language::React, "DataGrid", None));
        assert!(registry.is_available(Language::TypeScript, "EventBus", Some("typed")));
        assert!(registry.is_available(Language::Vanilla, "Badge", Some("trend-up")));
    }

    #[test]
    fn test_extension_last_write_wins() {
        let mut registry = Registry::empty();
        let first = ComponentDefinition::new("Chart", "first", ComponentCategory::Display, vec![]);
        let second = ComponentDefinition::new("Chart", "second", ComponentCategory::Display, vec![]);
        registry.add_custom_component("Chart", first);
        registry.add_custom_component("Chart", second);
        assert_eq!(registry.custom_component("Chart").unwrap().description, "second");
        assert_eq!(registry.custom_components().len(), 1);

        registry.add_alias("save", IncludeStatement::new(Language::React, "Button", "primary"));
        registry.add_alias("save", IncludeStatement::new(Language::Vanilla, "Button", "primary"));
        assert_eq!(registry.alias("save").unwrap().language, Language::Vanilla);
        assert!(registry.alias("cancel").is_none());
    }

    #[test]
    fn test_with_languages_isolated() {
        let dataset = Dataset::from_entries(vec![
            DatasetEntry::new("actions", "button", "Button").with_examples(["button-plain"]),
        ]);
        let react = build::derive_language(&dataset, &profile(Language::React));
        let registry = Registry::with_languages([react]);

        assert_eq!(registry.list_languages(), vec![Language::React]);
        assert!(registry.is_available(Language::React, "Button", Some("plain")));
        assert!(!registry.is_available(Language::Vanilla, "Button", None));
    }
}
