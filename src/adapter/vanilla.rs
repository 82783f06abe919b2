//! Vanilla JS adapter
//!
//! Components are classes named `{Component}Component`, constructed with an
//! options object and mounted onto `#app`.

use super::framework::{layered_config, LanguageAdapter};
use crate::component::ComponentVariation;
use crate::dataset::instance_name;
use crate::language::Language;
use crate::props::{PropValue, Props};
use crate::props;
use crate::statement::IncludeTarget;

const MOUNT_POINT: &str = "#app";

#[derive(Debug, Default)]
pub struct VanillaAdapter;

impl VanillaAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Adapter configuration for one component variation
    pub fn variation_config(component: &str, variation: &str) -> Props {
        match (component, variation) {
            ("Card", "default") => props! { "variant" => "default" },
            ("Card", "simple") => props! { "variant" => "simple" },
            ("Button", "default" | "primary" | "link") => props! { "variant" => variation },
            ("Badge", "success" | "warning" | "new" | "trend-up") => props! { "status" => variation },
            ("Spinner", "default") => props! { "size" => "medium" },
            ("Spinner", "small") => props! { "size" => "small" },
            _ => Props::new(),
        }
    }

    fn base_options(component: &str) -> Props {
        match component {
            "Card" => props! {
                "title" => "Card Title",
                "content" => "Card content goes here",
            },
            "Button" => props! {
                "label" => "Click me",
                "onClick" => PropValue::code("() => console.log('Button clicked')"),
            },
            "Badge" => props! { "text" => "Badge Text" },
            "Spinner" => props! { "size" => "medium" },
            _ => Props::new(),
        }
    }
}

impl LanguageAdapter for VanillaAdapter {
    fn language(&self) -> Language {
        Language::Vanilla
    }

    fn generate_import(&self, target: &IncludeTarget<'_>) -> String {
        let class = class_name(&target.component.name);
        match target.statement.alias.as_deref() {
            Some(alias) if alias != class => format!(
                "import {{ {} as {} }} from '{}';",
                class, alias, target.variation.import_path
            ),
            _ => format!("import {{ {} }} from '{}';", class, target.variation.import_path),
        }
    }

    fn generate_code(&self, target: &IncludeTarget<'_>) -> String {
        let component = &target.component.name;
        let class = target
            .statement
            .alias
            .clone()
            .unwrap_or_else(|| class_name(component));
        let instance = instance_name(component);

        let table = Self::variation_config(component, &target.variation.name);
        let options = props::merge(&Self::base_options(component), Some(&layered_config(table, target)));

        format!(
            "const {instance} = new {class}({});\n{instance}.mount('{MOUNT_POINT}');",
            format_options(&options)
        )
    }

    /// Only stylesheets are loaded separately; scripts come in through the import.
    fn dependencies(&self, variation: &ComponentVariation) -> Vec<String> {
        if variation.import_path.ends_with(".css") {
            vec![variation.import_path.clone()]
        } else {
            Vec::new()
        }
    }
}

fn class_name(component: &str) -> String {
    format!("{}Component", component)
}

fn format_options(options: &Props) -> String {
    if options.is_empty() {
        return "{}".to_string();
    }
    let fields: Vec<String> = options
        .iter()
        .map(|(key, value)| format!("  {}: {}", format_key(key), format_value(value)))
        .collect();
    format!("{{\n{}\n}}", fields.join(",\n"))
}

fn format_value(value: &PropValue) -> String {
    match value {
        PropValue::Null => "null".to_string(),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Int(i) => i.to_string(),
        PropValue::Float(f) => f.to_string(),
        PropValue::Str(s) => quote(s),
        PropValue::Code(source) => source.clone(),
        PropValue::Array(items) => {
            let items: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        PropValue::Object(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{}: {}", format_key(key), format_value(value)))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
    }
}

fn format_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        key.to_string()
    } else {
        quote(key)
    }
}

/// Single-quoted JavaScript string literal
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
