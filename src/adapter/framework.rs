//! Core adapter framework
//!
//! Defines the trait every language adapter implements.

use crate::component::ComponentVariation;
use crate::language::Language;
use crate::props::{self, Props};
use crate::statement::IncludeTarget;

/// Trait for language adapters
///
/// Each language adapter is responsible for:
/// 1. The import line that brings the component into scope
/// 2. A usage snippet for the requested variation
/// 3. The runtime dependencies the variation needs in that framework
pub trait LanguageAdapter: Send + Sync {
    /// The language this adapter generates code for
    fn language(&self) -> Language;

    /// Import line for the target
    fn generate_import(&self, target: &IncludeTarget<'_>) -> String;

    /// Usage snippet for the target
    fn generate_code(&self, target: &IncludeTarget<'_>) -> String;

    /// Whether the adapter can render this variation. The built-in adapters
    /// accept everything.
    fn validate_variation(&self, _variation: &ComponentVariation) -> bool {
        true
    }

    /// Dependency identifiers (stylesheets, modules) the variation needs
    fn dependencies(&self, variation: &ComponentVariation) -> Vec<String> {
        variation.dependencies.clone()
    }
}

/// Layer the property sources for a target: the adapter's own table entry,
/// then rendering props from the dataset, then the caller's config.
pub(crate) fn layered_config(table: Props, target: &IncludeTarget<'_>) -> Props {
    let with_dataset = props::merge(&table, target.variation.props.as_ref());
    props::merge(&with_dataset, target.config())
}

/// Create every built-in adapter
pub fn default_adapters() -> Vec<Box<dyn LanguageAdapter>> {
    vec![
        Box::new(super::react::ReactAdapter::new()),
        Box::new(super::vanilla::VanillaAdapter::new()),
        Box::new(super::extjs::ExtJsAdapter::new()),
        Box::new(super::typescript::TypeScriptAdapter::new()),
    ]
}
