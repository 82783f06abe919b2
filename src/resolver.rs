//! Include resolution
//!
//! Turns an [`IncludeStatement`] into a [`ResolvedInclude`]: registry lookup
//! first, then the adapter registered for the statement's language. The
//! resolver holds no state between calls; resolving the same statement twice
//! yields equal results.

use crate::adapter::{default_adapters, LanguageAdapter};
use crate::language::Language;
use crate::registry::Registry;
use crate::statement::{IncludeStatement, RenderedInclude, ResolvedInclude};
use crate::{Error, Result};
use std::collections::HashMap;

pub struct Resolver<'a> {
    registry: &'a Registry,
    adapters: HashMap<Language, Box<dyn LanguageAdapter>>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with no adapters registered
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            adapters: HashMap::new(),
        }
    }

    /// Create a resolver with the React, vanilla, ExtJS and TypeScript adapters
    pub fn with_default_adapters(registry: &'a Registry) -> Self {
        let mut resolver = Self::new(registry);
        for adapter in default_adapters() {
            resolver.adapters.insert(adapter.language(), adapter);
        }
        resolver
    }

    /// Register an adapter under its own language, replacing any earlier one.
    pub fn register_adapter(&mut self, adapter: impl LanguageAdapter + 'static) {
        let language = adapter.language();
        if self.adapters.insert(language, Box::new(adapter)).is_some() {
            tracing::debug!("Replaced adapter for {}", language);
        } else {
            tracing::debug!("Registered adapter for {}", language);
        }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn adapter(&self, language: Language) -> Option<&dyn LanguageAdapter> {
        self.adapters.get(&language).map(Box::as_ref)
    }

    /// Languages with an adapter, in declaration order
    pub fn languages_with_adapters(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.adapters.keys().copied().collect();
        languages.sort();
        languages
    }

    /// Resolve a statement to its component, variation, import line and
    /// dependencies.
    pub fn resolve(&self, statement: &IncludeStatement) -> Result<ResolvedInclude> {
        tracing::debug!("Resolving {}", statement);

        let component = self.registry.component(statement.language, &statement.component)?;
        let variation = component
            .variation(&statement.variation)
            .ok_or_else(|| Error::VariationNotFound {
                language: statement.language,
                component: statement.component.clone(),
                variation: statement.variation.clone(),
            })?;
        let adapter = self
            .adapter(statement.language)
            .ok_or_else(|| Error::NoAdapterRegistered {
                statement: Box::new(statement.clone()),
            })?;

        if !adapter.validate_variation(variation) {
            tracing::warn!("{} adapter flagged variation {}", statement.language, statement);
        }

        let mut resolved = ResolvedInclude {
            statement: statement.clone(),
            component: component.clone(),
            variation: variation.clone(),
            import_statement: String::new(),
            dependencies: Vec::new(),
        };
        let target = resolved.target();
        let import_statement = adapter.generate_import(&target);
        let dependencies = adapter.dependencies(target.variation);
        resolved.import_statement = import_statement;
        resolved.dependencies = dependencies;

        Ok(resolved)
    }

    /// Usage snippet for an already resolved include
    pub fn generate_code(&self, resolved: &ResolvedInclude) -> Result<String> {
        let adapter = self
            .adapter(resolved.statement.language)
            .ok_or_else(|| Error::NoAdapterRegistered {
                statement: Box::new(resolved.statement.clone()),
            })?;
        Ok(adapter.generate_code(&resolved.target()))
    }

    /// Resolve and generate the usage snippet in one step
    pub fn render(&self, statement: &IncludeStatement) -> Result<RenderedInclude> {
        let resolved = self.resolve(statement)?;
        let code = self.generate_code(&resolved)?;
        Ok(RenderedInclude { resolved, code })
    }

    /// Resolve the statement registered under `alias`
    pub fn resolve_alias(&self, alias: &str) -> Result<ResolvedInclude> {
        let statement = self.registry.alias(alias).ok_or_else(|| Error::AliasNotFound {
            alias: alias.to_string(),
        })?;
        self.resolve(statement)
    }

    pub fn is_available(&self, language: Language, component: &str, variation: Option<&str>) -> bool {
        self.registry.is_available(language, component, variation)
    }

    pub fn list_variations(&self, language: Language, component: &str) -> Vec<String> {
        self.registry.list_variations(language, component)
    }

    pub fn list_components(&self, language: Language) -> Vec<String> {
        self.registry.list_components(language)
    }

    pub fn list_languages(&self) -> Vec<Language> {
        self.registry.list_languages()
    }
}
