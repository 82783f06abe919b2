//! Include statements and their resolutions
//!
//! `IncludeStatement` is the request, `ResolvedInclude` the response. Neither
//! is validated on construction; the resolver decides what exists.

use crate::component::{ComponentDefinition, ComponentVariation};
use crate::language::Language;
use crate::props::{PropValue, Props};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A request for one component variation in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncludeStatement {
    pub language: Language,
    pub component: String,
    pub variation: String,
    /// Local name to use for the component in generated code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Caller properties merged over the adapter's variation configuration
    ///
    /// Verbatim source values are written as `{ "$code" = "() => save()" }` in config files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Props>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IndexMap<String, serde_json::Value>>,
}

impl IncludeStatement {
    pub fn new(language: Language, component: impl Into<String>, variation: impl Into<String>) -> Self {
        Self {
            language,
            component: component.into(),
            variation: variation.into(),
            alias: None,
            config: None,
            metadata: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_config(mut self, config: Props) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a single config property, creating the bag if needed
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.config
            .get_or_insert_with(Props::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value);
        self
    }
}

impl std::fmt::Display for IncludeStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}/{}", self.language, self.component, self.variation)
    }
}

/// The lookup an adapter generates text from.
#[derive(Debug, Clone, Copy)]
pub struct IncludeTarget<'a> {
    pub statement: &'a IncludeStatement,
    pub component: &'a ComponentDefinition,
    pub variation: &'a ComponentVariation,
}

impl<'a> IncludeTarget<'a> {
    /// The name generated code should refer to the component by
    pub fn local_name(&self) -> &'a str {
        self.statement.alias.as_deref().unwrap_or(&self.component.name)
    }

    pub fn config(&self) -> Option<&'a Props> {
        self.statement.config.as_ref()
    }
}

/// A statement matched against the registry, with its import line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedInclude {
    pub statement: IncludeStatement,
    pub component: ComponentDefinition,
    pub variation: ComponentVariation,
    pub import_statement: String,
    pub dependencies: Vec<String>,
}

impl ResolvedInclude {
    pub fn target(&self) -> IncludeTarget<'_> {
        IncludeTarget {
            statement: &self.statement,
            component: &self.component,
            variation: &self.variation,
        }
    }
}

/// A resolution together with its usage snippet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedInclude {
    #[serde(flatten)]
    pub resolved: ResolvedInclude,
    pub code: String,
}

impl RenderedInclude {
    /// Import line, blank line, usage snippet
    pub fn to_snippet(&self) -> String {
        format!("{}\n\n{}", self.resolved.import_statement, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentCategory;

    #[test]
    fn test_statement_builders() {
        let statement = IncludeStatement::new(Language::React, "Button", "primary")
            .with_alias("SaveButton")
            .with_prop("fullWidth", true)
            .with_metadata("source", serde_json::json!("docs"));

        assert_eq!(statement.alias.as_deref(), Some("SaveButton"));
        assert_eq!(statement.config.as_ref().unwrap()["fullWidth"], PropValue::Bool(true));
        assert_eq!(statement.metadata.as_ref().unwrap()["source"], "docs");
        assert_eq!(statement.to_string(), "react:Button/primary");
    }

    #[test]
    fn test_statement_deserializes_minimal_form() {
        let statement: IncludeStatement = serde_json::from_str(
            r#"{"language":"vanilla","component":"Spinner","variation":"small"}"#,
        )
        .unwrap();
        assert_eq!(statement, IncludeStatement::new(Language::Vanilla, "Spinner", "small"));
    }

    #[test]
    fn test_target_local_name() {
        let component = ComponentDefinition::new(
            "Badge",
            "Status",
            ComponentCategory::Feedback,
            vec![ComponentVariation::new("default", "", "@shopify/polaris")],
        );
        let plain = IncludeStatement::new(Language::React, "Badge", "default");
        let aliased = plain.clone().with_alias("StatusBadge");

        let target = IncludeTarget {
            statement: &plain,
            component: &component,
            variation: &component.variations[0],
        };
        assert_eq!(target.local_name(), "Badge");

        let target = IncludeTarget { statement: &aliased, ..target };
        assert_eq!(target.local_name(), "StatusBadge");
    }
}
