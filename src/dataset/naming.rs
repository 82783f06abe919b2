//! Slug → identifier conversions

use crate::component::DEFAULT_VARIATION;
use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// Canonical PascalCase component name for a kebab-case slug.
///
/// `button-group` → `ButtonGroup`; names that are already PascalCase map to
/// themselves.
pub fn canonical_component_name(slug: &str) -> String {
    slug.to_upper_camel_case()
}

/// Variation name for an example slug of the component `component_slug`.
///
/// The `"{component_slug}-"` prefix is stripped. An empty example slug, or
/// one equal to the component slug, names the default variation.
pub fn variation_name(component_slug: &str, example_slug: &str) -> String {
    let example_slug = example_slug.trim();
    if example_slug.is_empty() || example_slug == component_slug {
        return DEFAULT_VARIATION.to_string();
    }

    let prefix = format!("{}-", component_slug);
    match example_slug.strip_prefix(&prefix) {
        Some("") => DEFAULT_VARIATION.to_string(),
        Some(rest) => rest.to_string(),
        None => example_slug.to_string(),
    }
}

/// camelCase variable name for a component, e.g. `DataGrid` → `dataGrid`.
pub fn instance_name(component_name: &str) -> String {
    component_name.to_lower_camel_case()
}
