//! Built-in language profiles
//!
//! A profile says how dataset components look in one language: where they
//! are imported from and how the language is described. Each profile also
//! carries the hand-written component families that the documentation
//! dataset does not cover (ExtJS grids, TypeScript patterns, ...).

use crate::component::{ComponentCategory, ComponentDefinition, ComponentVariation};
use crate::language::{ImportStyle, Language};

pub const POLARIS_REACT: &str = "@shopify/polaris";
pub const VANILLA_JS: &str = "@cin7/vanilla-js";
pub const EXTJS_ADAPTERS: &str = "@cin7/extjs-adapters";
pub const TYPESCRIPT_SDK: &str = "@cin7/typescript-sdk";

#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    pub language: Language,
    pub description: &'static str,
    /// Library name used in component descriptions
    pub library: &'static str,
    pub import_style: ImportStyle,
    pub import_path: &'static str,
    pub supplement: fn() -> Vec<ComponentDefinition>,
}

pub fn profile(language: Language) -> LanguageProfile {
    match language {
        Language::React => LanguageProfile {
            language,
            description: "React components from Polaris",
            library: "Polaris React",
            import_style: ImportStyle::Named,
            import_path: POLARIS_REACT,
            supplement: react_components,
        },
        Language::Vanilla => LanguageProfile {
            language,
            description: "Vanilla JavaScript components",
            library: "Cin7 vanilla JS",
            import_style: ImportStyle::Default,
            import_path: VANILLA_JS,
            supplement: vanilla_components,
        },
        Language::ExtJs => LanguageProfile {
            language,
            description: "ExtJS enterprise components",
            library: "Cin7 ExtJS adapters",
            import_style: ImportStyle::Named,
            import_path: EXTJS_ADAPTERS,
            supplement: extjs_components,
        },
        Language::TypeScript => LanguageProfile {
            language,
            description: "TypeScript business logic patterns",
            library: "Cin7 TypeScript SDK",
            import_style: ImportStyle::Named,
            import_path: TYPESCRIPT_SDK,
            supplement: typescript_components,
        },
    }
}

pub fn profiles() -> Vec<LanguageProfile> {
    Language::all().iter().map(|l| profile(*l)).collect()
}

/// (name, description, dependencies)
type VariationSpec<'a> = (&'a str, &'a str, &'a [&'a str]);

fn family(
    import_path: &str,
    name: &str,
    description: &str,
    category: ComponentCategory,
    variations: &[VariationSpec<'_>],
) -> ComponentDefinition {
    let variations = variations
        .iter()
        .map(|(name, description, deps)| {
            ComponentVariation::new(*name, *description, import_path).with_dependencies(deps.iter().copied())
        })
        .collect();
    ComponentDefinition::new(name, description, category, variations)
}

fn react_components() -> Vec<ComponentDefinition> {
    use ComponentCategory::*;
    let p = POLARIS_REACT;
    vec![
        family(p, "Card", "Container for related information", Layout, &[
            ("header", "Header card with emphasized styling", &[]),
            ("product-info", "Card optimized for product information display", &[]),
            ("metric-card", "Card for displaying metrics and KPIs", &[]),
        ]),
        family(p, "Button", "Interactive button component", Actions, &[
            ("secondary", "Secondary action button", &[]),
        ]),
        family(p, "Badge", "Status indicator badge", Feedback, &[
            ("info", "Information status badge", &[]),
            ("new", "New feature badge", &[]),
        ]),
        family(p, "MediaCard", "Card with media content", Layout, &[
            ("small", "Compact media card", &[]),
            ("video-card", "Video content card", &[]),
            ("portrait-video-card", "Portrait video card", &[]),
        ]),
        family(p, "Page", "Page layout wrapper", Layout, &[
            ("dashboard", "Dashboard page layout", &[]),
        ]),
    ]
}

fn vanilla_components() -> Vec<ComponentDefinition> {
    use ComponentCategory::*;
    let p = VANILLA_JS;
    vec![
        family(p, "Card", "Lightweight card component", Layout, &[
            ("default", "Standard card", &[]),
            ("simple", "Minimal card styling", &[]),
        ]),
        family(p, "Button", "JavaScript button component", Actions, &[
            ("default", "Standard button", &[]),
            ("primary", "Primary button styling", &[]),
            ("link", "Link-style button", &[]),
        ]),
        family(p, "Badge", "Lightweight badge component", Feedback, &[
            ("new", "New feature badge", &[]),
            ("trend-up", "Trend up indicator", &[]),
        ]),
        family(p, "Spinner", "Loading spinner component", Feedback, &[
            ("default", "Standard spinner", &[]),
            ("small", "Small spinner", &[]),
        ]),
    ]
}

fn extjs_components() -> Vec<ComponentDefinition> {
    use ComponentCategory::*;
    let p = EXTJS_ADAPTERS;
    vec![
        family(p, "DataGrid", "Enterprise data grid component", Display, &[
            ("default", "Standard data grid", &[]),
            (
                "enterprise",
                "Enterprise-grade data grid with advanced features",
                &["Ext.grid.feature.Grouping", "Ext.grid.filters.Filters", "Ext.grid.feature.Summary"],
            ),
            ("compact", "Compact data grid for space-constrained layouts", &[]),
        ]),
        family(p, "ComboBox", "ExtJS combo box component", Input, &[
            ("default", "Standard combo box", &[]),
            ("abc", "ABC configuration combo box", &[]),
            ("search", "Searchable combo box", &[]),
        ]),
        family(p, "FormPanel", "ExtJS form panel component", Forms, &[
            ("default", "Standard form panel", &[]),
            ("settings", "Settings form panel", &["Ext.form.field.Number", "Ext.form.field.Checkbox"]),
        ]),
    ]
}

fn typescript_components() -> Vec<ComponentDefinition> {
    use ComponentCategory::*;
    let p = TYPESCRIPT_SDK;
    vec![
        family(p, "Repository", "Repository pattern implementation", Display, &[
            ("default", "Standard repository", &["ApiClient"]),
            ("standard", "Standard repository configuration", &["ApiClient"]),
        ]),
        family(p, "UseCase", "Use case pattern implementation", Display, &[
            ("default", "Standard use case", &["Repository", "EventBus"]),
            ("crud", "CRUD operations use case", &["Repository", "EventBus"]),
        ]),
        family(p, "EventBus", "Event bus implementation", Display, &[
            ("default", "Standard event bus", &[]),
            ("typed", "Type-safe event bus", &["TypedEventBus"]),
        ]),
    ]
}
