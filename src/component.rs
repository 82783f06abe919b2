//! Component model - what the registry knows about
//!
//! A language owns components, a component owns variations. Names are unique
//! at each level: component names within a language, variation names within
//! a component.

use crate::language::{ImportStyle, Language};
use crate::props::Props;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name every component is guaranteed to carry after registry construction.
pub const DEFAULT_VARIATION: &str = "default";

/// Broad grouping used for documentation navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Layout,
    Feedback,
    Input,
    Display,
    Navigation,
    Actions,
    Images,
    Forms,
    Overlays,
    Typography,
}

impl ComponentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentCategory::Layout => "layout",
            ComponentCategory::Feedback => "feedback",
            ComponentCategory::Input => "input",
            ComponentCategory::Display => "display",
            ComponentCategory::Navigation => "navigation",
            ComponentCategory::Actions => "actions",
            ComponentCategory::Images => "images",
            ComponentCategory::Forms => "forms",
            ComponentCategory::Overlays => "overlays",
            ComponentCategory::Typography => "typography",
        }
    }

    /// Map a documentation content group (`selection-and-input`, ...) to a category.
    pub fn from_group(group: &str) -> Self {
        match group {
            "actions" => ComponentCategory::Actions,
            "layout-and-structure" | "layout" => ComponentCategory::Layout,
            "selection-and-input" | "input" => ComponentCategory::Input,
            "feedback-indicators" | "feedback" => ComponentCategory::Feedback,
            "images-and-icons" | "images" => ComponentCategory::Images,
            "navigation" => ComponentCategory::Navigation,
            "overlays" => ComponentCategory::Overlays,
            "typography" => ComponentCategory::Typography,
            "forms" => ComponentCategory::Forms,
            _ => ComponentCategory::Display,
        }
    }
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named configuration of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentVariation {
    pub name: String,
    pub description: String,
    pub import_path: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Rendering props carried by the dataset, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
}

impl ComponentVariation {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        import_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            import_path: import_path.into(),
            dependencies: Vec::new(),
            props: None,
        }
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }
}

/// A component as exposed in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    pub name: String,
    pub description: String,
    pub category: ComponentCategory,
    pub variations: Vec<ComponentVariation>,
    pub default_variation: String,
}

impl ComponentDefinition {
    /// Create a definition; `default_variation` is derived from the variations.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ComponentCategory,
        variations: Vec<ComponentVariation>,
    ) -> Self {
        let mut definition = Self {
            name: name.into(),
            description: description.into(),
            category,
            variations,
            default_variation: String::new(),
        };
        definition.default_variation = definition.pick_default_variation();
        definition
    }

    /// Find a variation by name
    pub fn variation(&self, name: &str) -> Option<&ComponentVariation> {
        self.variations.iter().find(|v| v.name == name)
    }

    pub fn has_variation(&self, name: &str) -> bool {
        self.variation(name).is_some()
    }

    pub fn variation_names(&self) -> Vec<String> {
        self.variations.iter().map(|v| v.name.clone()).collect()
    }

    /// `default` when present, otherwise the first variation.
    pub fn pick_default_variation(&self) -> String {
        if self.has_variation(DEFAULT_VARIATION) {
            DEFAULT_VARIATION.to_string()
        } else {
            self.variations
                .first()
                .map(|v| v.name.clone())
                .unwrap_or_else(|| DEFAULT_VARIATION.to_string())
        }
    }

    /// Union `other`'s variations into this one by name; existing names win.
    pub fn merge(&mut self, other: ComponentDefinition) {
        for variation in other.variations {
            if !self.has_variation(&variation.name) {
                self.variations.push(variation);
            }
        }
        self.default_variation = self.pick_default_variation();
    }
}

/// Everything the registry knows about one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDefinition {
    pub name: Language,
    pub description: String,
    pub import_style: ImportStyle,
    pub components: IndexMap<String, ComponentDefinition>,
}

impl LanguageDefinition {
    pub fn new(name: Language, description: impl Into<String>, import_style: ImportStyle) -> Self {
        Self {
            name,
            description: description.into(),
            import_style,
            components: IndexMap::new(),
        }
    }

    /// Insert a component, merging with an existing one of the same name.
    pub fn add_component(&mut self, definition: ComponentDefinition) {
        match self.components.get_mut(&definition.name) {
            Some(existing) => existing.merge(definition),
            None => {
                self.components.insert(definition.name.clone(), definition);
            }
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn variation_count(&self) -> usize {
        self.components.values().map(|c| c.variations.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variation(name: &str, description: &str) -> ComponentVariation {
        ComponentVariation::new(name, description, "@shopify/polaris")
    }

    #[test]
    fn test_default_variation_prefers_default() {
        let def = ComponentDefinition::new(
            "Badge",
            "Status indicator",
            ComponentCategory::Feedback,
            vec![variation("success", ""), variation("default", "")],
        );
        assert_eq!(def.default_variation, "default");

        let def = ComponentDefinition::new(
            "Badge",
            "Status indicator",
            ComponentCategory::Feedback,
            vec![variation("success", ""), variation("warning", "")],
        );
        assert_eq!(def.default_variation, "success");
    }

    #[test]
    fn test_merge_first_seen_wins() {
        let mut card = ComponentDefinition::new(
            "Card",
            "Container",
            ComponentCategory::Layout,
            vec![variation("default", "first"), variation("with-subsection", "first")],
        );
        let other = ComponentDefinition::new(
            "Card",
            "Container",
            ComponentCategory::Layout,
            vec![variation("default", "second"), variation("header", "second")],
        );
        card.merge(other);

        assert_eq!(card.variation_names(), vec!["default", "with-subsection", "header"]);
        assert_eq!(card.variation("default").unwrap().description, "first");
        assert_eq!(card.default_variation, "default");
    }

    #[test]
    fn test_category_from_group() {
        assert_eq!(ComponentCategory::from_group("selection-and-input"), ComponentCategory::Input);
        assert_eq!(ComponentCategory::from_group("actions"), ComponentCategory::Actions);
        assert_eq!(ComponentCategory::from_group("lists"), ComponentCategory::Display);
    }

    #[test]
    fn test_language_definition_counts() {
        let mut lang = LanguageDefinition::new(Language::React, "React", ImportStyle::Named);
        lang.add_component(ComponentDefinition::new(
            "Card",
            "Container",
            ComponentCategory::Layout,
            vec![variation("default", "")],
        ));
        lang.add_component(ComponentDefinition::new(
            "Card",
            "Container",
            ComponentCategory::Layout,
            vec![variation("header", "")],
        ));
        assert_eq!(lang.component_count(), 1);
        assert_eq!(lang.variation_count(), 2);
    }
}
