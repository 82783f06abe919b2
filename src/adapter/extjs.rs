//! ExtJS adapter
//!
//! Everything is an `Ext.create('<class>', {...})` call. Components shipped by
//! the adapters package are pulled in with `require`; anything else is
//! assumed to be on the global `Ext` namespace.

use super::framework::{layered_config, LanguageAdapter};
use crate::dataset::instance_name;
use crate::language::Language;
use crate::props::{PropValue, Props};
use crate::props;
use crate::registry::builtin::EXTJS_ADAPTERS;
use crate::statement::IncludeTarget;

#[derive(Debug, Default)]
pub struct ExtJsAdapter;

impl ExtJsAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Adapter configuration for one component variation
    pub fn variation_config(component: &str, variation: &str) -> Props {
        match (component, variation) {
            ("DataGrid", "default") => props! {
                "title" => "Data Grid",
                "store" => store(props! {
                    "fields" => vec!["name", "email", "phone"],
                    "data" => vec![
                        props! { "name" => "Lisa", "email" => "lisa@simpsons.com", "phone" => "555-111-1224" },
                        props! { "name" => "Bart", "email" => "bart@simpsons.com", "phone" => "555-222-1234" },
                    ],
                }),
                "columns" => vec![
                    column("Name", "name", 1),
                    column("Email", "email", 1),
                    column("Phone", "phone", 1),
                ],
                "height" => 300,
                "width" => 600,
            },
            ("DataGrid", "enterprise") => props! {
                "title" => "Enterprise Data Grid",
                "features" => vec!["grouping", "filters", "summary"],
                "store" => store(props! {
                    "fields" => vec!["name", "email", "phone", "department"],
                    "groupField" => "department",
                    "data" => vec![
                        props! { "name" => "Lisa", "email" => "lisa@simpsons.com", "phone" => "555-111-1224", "department" => "IT" },
                        props! { "name" => "Bart", "email" => "bart@simpsons.com", "phone" => "555-222-1234", "department" => "Sales" },
                    ],
                }),
                "columns" => vec![
                    column("Name", "name", 1),
                    column("Email", "email", 1),
                    column("Phone", "phone", 1),
                    column("Department", "department", 1),
                ],
                "height" => 400,
                "width" => 800,
            },
            ("DataGrid", "compact") => props! {
                "title" => "Compact Grid",
                "store" => store(props! {
                    "fields" => vec!["name", "status"],
                    "data" => vec![
                        props! { "name" => "Task 1", "status" => "Complete" },
                        props! { "name" => "Task 2", "status" => "In Progress" },
                    ],
                }),
                "columns" => vec![column("Task", "name", 2), column("Status", "status", 1)],
                "height" => 200,
                "width" => 400,
            },
            ("ComboBox", "default") => props! {
                "fieldLabel" => "Select Option",
                "store" => vec!["Option 1", "Option 2", "Option 3"],
                "queryMode" => "local",
                "editable" => false,
            },
            ("ComboBox", "abc") => props! {
                "fieldLabel" => "ABC Configuration",
                "store" => vec!["A", "B", "C"],
                "queryMode" => "local",
                "editable" => false,
                "value" => "A",
            },
            ("ComboBox", "search") => props! {
                "fieldLabel" => "Search",
                "store" => store(props! {
                    "fields" => vec!["name", "value"],
                    "data" => vec![
                        props! { "name" => "Option 1", "value" => "opt1" },
                        props! { "name" => "Option 2", "value" => "opt2" },
                    ],
                }),
                "displayField" => "name",
                "valueField" => "value",
                "queryMode" => "local",
                "typeAhead" => true,
            },
            ("FormPanel", "default") => props! {
                "title" => "Form",
                "bodyPadding" => 10,
                "items" => vec![
                    props! { "xtype" => "textfield", "fieldLabel" => "Name", "name" => "name" },
                    props! { "xtype" => "textfield", "fieldLabel" => "Email", "name" => "email" },
                    props! { "xtype" => "button", "text" => "Submit", "formBind" => true },
                ],
            },
            ("FormPanel", "settings") => props! {
                "title" => "Settings",
                "bodyPadding" => 10,
                "items" => vec![
                    props! { "xtype" => "checkboxfield", "fieldLabel" => "Enable notifications", "name" => "notifications" },
                    props! { "xtype" => "numberfield", "fieldLabel" => "Items per page", "name" => "pageSize", "value" => 25 },
                    props! { "xtype" => "button", "text" => "Save Settings", "formBind" => true },
                ],
            },
            _ => Props::new(),
        }
    }

    /// Ext class instantiated for a component
    pub fn ext_class(component: &str) -> &'static str {
        match component {
            "DataGrid" => "Ext.grid.Panel",
            "ComboBox" => "Ext.form.field.ComboBox",
            "FormPanel" => "Ext.form.Panel",
            "TextField" => "Ext.form.field.Text",
            "Button" => "Ext.button.Button",
            _ => "Ext.Component",
        }
    }
}

impl LanguageAdapter for ExtJsAdapter {
    fn language(&self) -> Language {
        Language::ExtJs
    }

    fn generate_import(&self, target: &IncludeTarget<'_>) -> String {
        let component = &target.component.name;
        if target.variation.import_path == EXTJS_ADAPTERS {
            format!("const {{ {} }} = require('{}');", component, target.variation.import_path)
        } else {
            format!("// ExtJS {} will be available globally", component)
        }
    }

    fn generate_code(&self, target: &IncludeTarget<'_>) -> String {
        let instance = instance_name(target.local_name());
        let class = Self::ext_class(&target.component.name);
        let table = Self::variation_config(&target.component.name, &target.variation.name);
        let config = layered_config(table, target);

        format!("const {} = Ext.create('{}', {});", instance, class, format_config(&config))
    }
}

fn store(config: Props) -> PropValue {
    PropValue::code(format!(
        "Ext.create('Ext.data.Store', {})",
        format_value(&PropValue::Object(config))
    ))
}

fn column(text: &str, data_index: &str, flex: i64) -> Props {
    props! { "text" => text, "dataIndex" => data_index, "flex" => flex }
}

fn format_config(config: &Props) -> String {
    let fields: Vec<String> = config
        .iter()
        .filter(|(_, value)| !matches!(value, PropValue::Object(o) if o.is_empty()))
        .map(|(key, value)| format!("  {}: {}", format_key(key), format_value(value)))
        .collect();
    if fields.is_empty() {
        "{}".to_string()
    } else {
        format!("{{\n{}\n}}", fields.join(",\n"))
    }
}

fn format_value(value: &PropValue) -> String {
    match value {
        PropValue::Null => "null".to_string(),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Int(i) => i.to_string(),
        PropValue::Float(f) => f.to_string(),
        PropValue::Str(s) => quote(s),
        PropValue::Code(source) => source.clone(),
        PropValue::Array(items) => format!(
            "[{}]",
            items.iter().map(format_value).collect::<Vec<_>>().join(", ")
        ),
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
