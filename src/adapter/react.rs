//! React adapter
//!
//! Emits JSX against Polaris. Properties become JSX attributes: strings as
//! `key="value"`, everything else inside `{...}` as a JavaScript literal.

use super::framework::{layered_config, LanguageAdapter};
use crate::component::ComponentVariation;
use crate::language::Language;
use crate::props::{PropValue, Props};
use crate::props;
use crate::statement::IncludeTarget;

/// React language adapter
#[derive(Debug, Default)]
pub struct ReactAdapter;

impl ReactAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Adapter configuration for one component variation
    pub fn variation_config(component: &str, variation: &str) -> Props {
        match (component, variation) {
            ("Card", "header" | "product-info" | "metric-card") => props! { "sectioned" => true },
            ("Button", "primary") => props! { "variant" => "primary" },
            ("Button", "destructive") => props! { "variant" => "primary", "tone" => "critical" },
            ("Button", "plain") => props! { "variant" => "plain" },
            ("Button", "secondary") => props! { "variant" => "secondary" },
            ("Badge", tone @ ("success" | "warning" | "info" | "new" | "critical" | "attention")) => {
                props! { "status" => tone }
            }
            ("MediaCard", "small" | "with-small-visual") => props! { "size" => "small" },
            ("MediaCard", "portrait-video-card") => props! { "portrait" => true },
            ("Page", "full-width") => props! { "fullWidth" => true },
            ("Page", "narrow-width") => props! { "narrowWidth" => true },
            ("Page", "dashboard") => props! { "title" => "Dashboard" },
            _ => Props::new(),
        }
    }

    fn card(&self, name: &str, config: Props) -> String {
        format!(
            "<{name}{props}>\n  <{name}.Section>\n    <Text variant=\"headingMd\">Card content</Text>\n    <Text>Card description text</Text>\n  </{name}.Section>\n</{name}>",
            props = format_props(&config)
        )
    }

    fn button(&self, name: &str, config: Props) -> String {
        let base = props! {
            "onClick" => PropValue::code(format!("() => console.log('{} clicked')", name)),
        };
        let props = format_props(&props::merge(&base, Some(&config)));
        format!("<{name}{props}>Button Text</{name}>")
    }

    fn badge(&self, name: &str, config: Props) -> String {
        format!("<{name}{}>Badge Text</{name}>", format_props(&config))
    }

    fn media_card(&self, name: &str, config: Props) -> String {
        let base = props! {
            "title" => "Getting Started",
            "primaryAction" => props! {
                "content" => "Learn more",
                "onAction" => PropValue::code("() => {}"),
            },
            "description" => "Discover how to get started with our platform.",
        };
        format!(
            "<{name}{props}>\n  <img\n    alt=\"\"\n    width=\"100%\"\n    height=\"100%\"\n    style={{{{ objectFit: 'cover', objectPosition: 'center' }}}}\n    src=\"https://burst.shopifycdn.com/photos/business-woman-smiling-in-office.jpg?width=1850\"\n  />\n</{name}>",
            props = format_props(&props::merge(&base, Some(&config)))
        )
    }

    fn page(&self, name: &str, config: Props) -> String {
        let base = props! {
            "title" => "Page Title",
            "backAction" => props! { "content" => "Home", "url" => "/" },
        };
        format!(
            "<{name}{props}>\n  <Layout>\n    <Layout.Section>\n      <Text variant=\"headingLg\">Page content</Text>\n    </Layout.Section>\n  </Layout>\n</{name}>",
            props = format_props(&props::merge(&base, Some(&config)))
        )
    }

    fn generic(&self, name: &str, config: Props) -> String {
        format!(
            "<{name}{}>\n  <Text variant=\"bodyMd\">Generic component content</Text>\n</{name}>",
            format_props(&config)
        )
    }
}

impl LanguageAdapter for ReactAdapter {
    fn language(&self) -> Language {
        Language::React
    }

    fn generate_import(&self, target: &IncludeTarget<'_>) -> String {
        let component = &target.component.name;
        match target.statement.alias.as_deref() {
            Some(alias) if alias != component.as_str() => format!(
                "import {{ {} as {} }} from '{}';",
                component, alias, target.variation.import_path
            ),
            _ => format!("import {{ {} }} from '{}';", component, target.variation.import_path),
        }
    }

    fn generate_code(&self, target: &IncludeTarget<'_>) -> String {
        let name = target.local_name();
        let table = Self::variation_config(&target.component.name, &target.variation.name);
        let config = apply_design_tokens(layered_config(table, target));

        match target.component.name.as_str() {
            "Card" => self.card(name, config),
            "Button" => self.button(name, config),
            "Badge" => self.badge(name, config),
            "MediaCard" => self.media_card(name, config),
            "Page" => self.page(name, config),
            _ => self.generic(name, config),
        }
    }

    /// Polaris components are resolved through the import path alone.
    fn dependencies(&self, _variation: &ComponentVariation) -> Vec<String> {
        Vec::new()
    }
}

/// Replace a `designTokens` object with the Polaris props it stands for.
fn apply_design_tokens(mut config: Props) -> Props {
    let Some(PropValue::Object(tokens)) = config.shift_remove("designTokens") else {
        return config;
    };

    match tokens.get("theme").and_then(PropValue::as_str) {
        Some("dark") => {
            config.insert("background".into(), "bg-surface-dark".into());
            config.insert("color".into(), "text-on-dark".into());
        }
        Some("brand") => {
            config.insert("background".into(), "bg-surface-brand".into());
            config.insert("color".into(), "text-on-brand".into());
        }
        _ => {}
    }
    if let Some(size) = tokens.get("size") {
        config.insert("size".into(), size.clone());
    }
    if let Some(spacing) = tokens.get("spacing").and_then(PropValue::as_str) {
        config.insert("padding".into(), spacing_scale(spacing).into());
    }
    if let Some(elevation) = tokens.get("elevation").and_then(PropValue::as_str) {
        config.insert("shadow".into(), elevation_shadow(elevation).into());
    }
    config
}

fn spacing_scale(spacing: &str) -> &'static str {
    match spacing {
        "none" => "0",
        "tight" => "2",
        "loose" => "6",
        "extra-loose" => "8",
        _ => "4",
    }
}

fn elevation_shadow(elevation: &str) -> &'static str {
    match elevation {
        "none" => "none",
        "small" => "shadow-sm",
        "large" => "shadow-lg",
        "extra-large" => "shadow-xl",
        _ => "shadow-md",
    }
}

/// ` key="value" key={expr}`, or the empty string for no props
fn format_props(props: &Props) -> String {
    let attrs: Vec<String> = props
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| match value {
            PropValue::Str(s) if !s.contains('"') => format!("{}=\"{}\"", key, s),
            other => format!("{}={{{}}}", key, format_value(other)),
        })
        .collect();

    if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs.join(" "))
    }
}

fn format_value(value: &PropValue) -> String {
    match value {
        PropValue::Null => "null".to_string(),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Int(i) => i.to_string(),
        PropValue::Float(f) => f.to_string(),
        PropValue::Str(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        PropValue::Code(source) => source.clone(),
        PropValue::Array(items) => format!(
            "[{}]",
            items.iter().map(format_value).collect::<Vec<_>>().join(", ")
        ),
        PropValue::Object(entries) if entries.is_empty() => "{}".to_string(),
        PropValue::Object(entries) => format!(
            "{{ {} }}",
            entries
                .iter()
                .map(|(key, value)| format!("{}: {}", format_key(key), format_value(value)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

fn format_key(key: &str) -> String {
    let is_identifier = key
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        key.to_string()
    } else {
        format!("'{}'", key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentCategory, ComponentDefinition};
    use crate::statement::IncludeStatement;

    fn render(component: &str, variation: &str, statement: IncludeStatement) -> (String, String) {
        let definition = ComponentDefinition::new(
            component,
            "",
            ComponentCategory::Display,
            vec![ComponentVariation::new(variation, "", "@shopify/polaris")],
        );
        let target = IncludeTarget {
            statement: &statement,
            component: &definition,
            variation: &definition.variations[0],
        };
        let adapter = ReactAdapter::new();
        (adapter.generate_import(&target), adapter.generate_code(&target))
    }

    #[test]
    fn test_import() {
        let (import, _) = render("Button", "default", IncludeStatement::new(Language::React, "Button", "default"));
        assert_eq!(import, "import { Button } from '@shopify/polaris';");

        let statement = IncludeStatement::new(Language::React, "Button", "default").with_alias("SaveButton");
        let (import, code) = render("Button", "default", statement);
        assert_eq!(import, "import { Button as SaveButton } from '@shopify/polaris';");
        assert!(code.starts_with("<SaveButton"));
    }

    #[test]
    fn test_button_variations() {
        let (_, code) = render("Button", "default", IncludeStatement::new(Language::React, "Button", "default"));
        assert_eq!(code, "<Button onClick={() => console.log('Button clicked')}>Button Text</Button>");

        let (_, code) = render("Button", "primary", IncludeStatement::new(Language::React, "Button", "primary"));
        assert_eq!(
            code,
            "<Button onClick={() => console.log('Button clicked')} variant=\"primary\">Button Text</Button>"
        );
    }

    #[test]
    fn test_caller_config_overrides_table() {
        let statement = IncludeStatement::new(Language::React, "Badge", "success").with_prop("status", "attention");
        let (_, code) = render("Badge", "success", statement);
        assert_eq!(code, "<Badge status=\"attention\">Badge Text</Badge>");
    }

    #[test]
    fn test_page_formats_nested_literals() {
        let (_, code) = render("Page", "full-width", IncludeStatement::new(Language::React, "Page", "full-width"));
        assert!(code.starts_with(
            "<Page title=\"Page Title\" backAction={{ content: 'Home', url: '/' }} fullWidth={true}>"
        ));
    }

    #[test]
    fn test_generic_fallback_is_parameterized() {
        let statement = IncludeStatement::new(Language::React, "Tooltip", "default")
            .with_prop("content", "Order total")
            .with_prop("dismissOnMouseOut", true);
        let (_, code) = render("Tooltip", "default", statement);
        assert_eq!(
            code,
            "<Tooltip content=\"Order total\" dismissOnMouseOut={true}>\n  <Text variant=\"bodyMd\">Generic component content</Text>\n</Tooltip>"
        );
    }

    #[test]
    fn test_design_tokens() {
        let statement = IncludeStatement::new(Language::React, "Card", "default").with_prop(
            "designTokens",
            props! { "theme" => "dark", "spacing" => "loose", "elevation" => "large" },
        );
        let (_, code) = render("Card", "default", statement);
        assert!(code.starts_with(
            "<Card background=\"bg-surface-dark\" color=\"text-on-dark\" padding=\"6\" shadow=\"shadow-lg\">"
        ));
        assert!(!code.contains("designTokens"));

        let tokens = crate::builder::DesignTokens::new()
            .size(crate::builder::Size::ExtraLarge)
            .elevation(crate::builder::Elevation::ExtraLarge);
        let statement = IncludeStatement::new(Language::React, "Card", "default").with_prop("designTokens", tokens);
        let (_, code) = render("Card", "default", statement);
        assert!(code.contains("size=\"extra-large\" shadow=\"shadow-xl\""));
    }

    #[test]
    fn test_configs_are_addressed_per_component() {
        assert_eq!(ReactAdapter::variation_config("MediaCard", "small")["size"], PropValue::str("small"));
        assert!(ReactAdapter::variation_config("Button", "small").is_empty());
        assert_eq!(ReactAdapter::variation_config("Badge", "new")["status"], PropValue::str("new"));
        assert!(ReactAdapter::variation_config("Card", "new").is_empty());
        assert!(ReactAdapter::variation_config("Unknown", "default").is_empty());
    }

    #[test]
    fn test_format_value() {
        let value = PropValue::from(props! {
            "items" => vec!["a", "it's"],
            "data-id" => 3,
        });
        assert_eq!(format_value(&value), "{ items: ['a', 'it\\'s'], 'data-id': 3 }");
        assert_eq!(format_props(&props! { "label" => "Say \"hi\"" }), " label={'Say \"hi\"'}");
    }
}
