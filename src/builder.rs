//! Statement builder
//!
//! ```
//! use polyinclude::{props, DesignTokens, IncludeBuilder};
//!
//! let builder = IncludeBuilder::with_defaults(props! { "fullWidth" => true });
//! let statement = builder
//!     .react()
//!     .component("Button")
//!     .variation_with("primary", DesignTokens::primary_button().into_config());
//! assert_eq!(statement.to_string(), "react:Button/primary");
//! ```

use crate::language::Language;
use crate::props::{self, PropValue, Props};
use crate::statement::IncludeStatement;
use serde::{Deserialize, Serialize};

/// Builds statements that share a set of default properties.
#[derive(Debug, Clone, Default)]
pub struct IncludeBuilder {
    defaults: Props,
}

impl IncludeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every statement built starts from `defaults`; per-call config wins.
    pub fn with_defaults(defaults: Props) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &Props {
        &self.defaults
    }

    pub fn react(&self) -> LanguageBuilder<'_> {
        self.language(Language::React)
    }

    pub fn vanilla(&self) -> LanguageBuilder<'_> {
        self.language(Language::Vanilla)
    }

    pub fn extjs(&self) -> LanguageBuilder<'_> {
        self.language(Language::ExtJs)
    }

    pub fn typescript(&self) -> LanguageBuilder<'_> {
        self.language(Language::TypeScript)
    }

    pub fn language(&self, language: Language) -> LanguageBuilder<'_> {
        LanguageBuilder { builder: self, language }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LanguageBuilder<'b> {
    builder: &'b IncludeBuilder,
    language: Language,
}

impl<'b> LanguageBuilder<'b> {
    pub fn component(self, name: impl Into<String>) -> ComponentBuilder<'b> {
        ComponentBuilder {
            builder: self.builder,
            language: self.language,
            component: name.into(),
            alias: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComponentBuilder<'b> {
    builder: &'b IncludeBuilder,
    language: Language,
    component: String,
    alias: Option<String>,
}

impl ComponentBuilder<'_> {
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn variation(&self, name: impl Into<String>) -> IncludeStatement {
        self.build(name.into(), None)
    }

    pub fn variation_with(&self, name: impl Into<String>, config: Props) -> IncludeStatement {
        self.build(name.into(), Some(&config))
    }

    fn build(&self, variation: String, config: Option<&Props>) -> IncludeStatement {
        let mut statement = IncludeStatement::new(self.language, self.component.clone(), variation);
        statement.alias = self.alias.clone();
        let merged = props::merge(&self.builder.defaults, config);
        if !merged.is_empty() {
            statement.config = Some(merged);
        }
        statement
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    Dark,
    Brand,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spacing {
    None,
    Tight,
    Base,
    Loose,
    ExtraLoose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Elevation {
    None,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Brand => "brand",
            Theme::Neutral => "neutral",
        }
    }
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
            Size::ExtraLarge => "extra-large",
        }
    }
}

impl Spacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Spacing::None => "none",
            Spacing::Tight => "tight",
            Spacing::Base => "base",
            Spacing::Loose => "loose",
            Spacing::ExtraLoose => "extra-loose",
        }
    }
}

impl Elevation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Elevation::None => "none",
            Elevation::Small => "small",
            Elevation::Medium => "medium",
            Elevation::Large => "large",
            Elevation::ExtraLarge => "extra-large",
        }
    }
}

/// Design token selection carried in a statement's `designTokens` prop.
/// Adapters that understand tokens map them onto framework props.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignTokens {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<Elevation>,
}

impl DesignTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn primary_button() -> Self {
        Self::new().theme(Theme::Brand).size(Size::Medium).spacing(Spacing::Base)
    }

    pub fn secondary_card() -> Self {
        Self::new().theme(Theme::Light).spacing(Spacing::Loose).elevation(Elevation::Medium)
    }

    pub fn success_badge() -> Self {
        Self::new().theme(Theme::Brand).size(Size::Small)
    }

    pub fn large_grid() -> Self {
        Self::new().theme(Theme::Dark).size(Size::Large).spacing(Spacing::Loose)
    }

    /// Tokens set on `other` replace ours.
    pub fn overlay(self, other: DesignTokens) -> Self {
        Self {
            theme: other.theme.or(self.theme),
            size: other.size.or(self.size),
            spacing: other.spacing.or(self.spacing),
            elevation: other.elevation.or(self.elevation),
        }
    }

    pub fn to_props(&self) -> Props {
        let mut props = Props::new();
        if let Some(theme) = self.theme {
            props.insert("theme".into(), theme.as_str().into());
        }
        if let Some(size) = self.size {
            props.insert("size".into(), size.as_str().into());
        }
        if let Some(spacing) = self.spacing {
            props.insert("spacing".into(), spacing.as_str().into());
        }
        if let Some(elevation) = self.elevation {
            props.insert("elevation".into(), elevation.as_str().into());
        }
        props
    }

    /// A statement config holding just these tokens
    pub fn into_config(self) -> Props {
        crate::props! { "designTokens" => self }
    }
}

impl From<DesignTokens> for PropValue {
    fn from(tokens: DesignTokens) -> Self {
        PropValue::Object(tokens.to_props())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    #[test]
    fn test_builds_statements() {
        let builder = IncludeBuilder::new();
        let statement = builder.extjs().component("DataGrid").variation("enterprise");
        assert_eq!(statement, IncludeStatement::new(Language::ExtJs, "DataGrid", "enterprise"));
        assert!(statement.config.is_none());

        let statement = builder.typescript().component("UseCase").alias("CreateOrder").variation("crud");
        assert_eq!(statement.alias.as_deref(), Some("CreateOrder"));
        assert_eq!(statement.language, Language::TypeScript);
    }

    #[test]
    fn test_defaults_merged_under_call_config() {
        let builder = IncludeBuilder::with_defaults(props! { "size" => "large", "tone" => "success" });
        let statement = builder
            .vanilla()
            .component("Badge")
            .variation_with("success", props! { "size" => "small" });

        let config = statement.config.unwrap();
        assert_eq!(config["size"], PropValue::str("small"));
        assert_eq!(config["tone"], PropValue::str("success"));

        let plain = builder.react().component("Badge").variation("info");
        assert_eq!(plain.config.unwrap()["size"], PropValue::str("large"));
    }

    #[test]
    fn test_design_token_presets() {
        let tokens = DesignTokens::large_grid();
        let props = tokens.to_props();
        let keys: Vec<_> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["theme", "size", "spacing"]);
        assert_eq!(props["theme"], PropValue::str("dark"));

        let config = DesignTokens::secondary_card().into_config();
        let tokens = config["designTokens"].as_object().unwrap();
        assert_eq!(tokens["elevation"], PropValue::str("medium"));
    }

    #[test]
    fn test_overlay() {
        let tokens = DesignTokens::success_badge().overlay(DesignTokens::new().size(Size::Large).elevation(Elevation::None));
        assert_eq!(tokens.theme, Some(Theme::Brand));
        assert_eq!(tokens.size, Some(Size::Large));
        assert_eq!(tokens.elevation, Some(Elevation::None));
    }

    #[test]
    fn test_tokens_serde() {
        let tokens = DesignTokens::new().spacing(Spacing::ExtraLoose);
        assert_eq!(serde_json::to_string(&tokens).unwrap(), r#"{"spacing":"extra-loose"}"#);

        let tokens: DesignTokens = serde_json::from_str(r#"{"size":"extra-large","elevation":"extra-large"}"#).unwrap();
        assert_eq!(tokens.size, Some(Size::ExtraLarge));
        assert_eq!(tokens.to_props()["size"], PropValue::str("extra-large"));
    }
}
