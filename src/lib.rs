//! # Polyinclude - Include Statement Resolution Engine
//!
//! Describe a UI component once, render equivalent usage snippets for every
//! target framework.
//!
//! Polyinclude provides:
//! - A component registry derived from a documentation dataset (language → component → variation)
//! - A resolver that turns an include statement into an import line and dependencies
//! - A pluggable per-language adapter contract with React, vanilla JS, ExtJS and TypeScript built in
//! - A small builder façade for constructing statements
//!
//! ```no_run
//! use polyinclude::{IncludeStatement, Language, Registry, Resolver};
//!
//! let registry = Registry::builtin()?;
//! let resolver = Resolver::with_default_adapters(&registry);
//! let resolved = resolver.resolve(&IncludeStatement::new(Language::React, "Button", "default"))?;
//! assert_eq!(resolved.import_statement, "import { Button } from '@shopify/polaris';");
//! # Ok::<(), polyinclude::Error>(())
//! ```
//!
//! The registry is built once and lent to the resolver. Registration and
//! registry extension need exclusive access; once they are done, `resolve`
//! can be called from any number of threads.

pub mod adapter;
pub mod builder;
pub mod component;
pub mod config;
pub mod dataset;
pub mod language;
pub mod output;
pub mod props;
pub mod registry;
pub mod resolver;
pub mod statement;
pub mod ui;

// Re-exports for convenient access
pub use adapter::LanguageAdapter;
pub use builder::{DesignTokens, IncludeBuilder};
pub use component::{ComponentCategory, ComponentDefinition, ComponentVariation, LanguageDefinition};
pub use dataset::Dataset;
pub use language::{ImportStyle, Language};
pub use props::{PropValue, Props};
pub use registry::Registry;
pub use resolver::Resolver;
pub use statement::{IncludeStatement, IncludeTarget, RenderedInclude, ResolvedInclude};

/// Result type alias for Polyinclude operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Polyinclude operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Component \"{component}\"{} not found in framework \"{language}\"", with_variation(.variation))]
    ComponentNotFound {
        language: Language,
        component: String,
        variation: Option<String>,
    },

    #[error("Variation \"{variation}\" not found for component \"{component}\" in framework \"{language}\"")]
    VariationNotFound {
        language: Language,
        component: String,
        variation: String,
    },

    #[error("Language \"{language}\" is not supported by the include system")]
    LanguageNotSupported { language: String },

    #[error("No adapter registered for language {}", .statement.language)]
    NoAdapterRegistered { statement: Box<IncludeStatement> },

    #[error("Alias \"{alias}\" is not registered")]
    AliasNotFound { alias: String },

    #[error("Invalid dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn with_variation(variation: &Option<String>) -> String {
    variation
        .as_ref()
        .map(|v| format!(" with variation \"{}\"", v))
        .unwrap_or_default()
}

/// Machine-readable error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ComponentNotFound,
    VariationNotFound,
    LanguageNotSupported,
    NoAdapterRegistered,
    AliasNotFound,
    InvalidDataset,
    Io,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ComponentNotFound => "COMPONENT_NOT_FOUND",
            ErrorCode::VariationNotFound => "VARIATION_NOT_FOUND",
            ErrorCode::LanguageNotSupported => "LANGUAGE_NOT_SUPPORTED",
            ErrorCode::NoAdapterRegistered => "NO_ADAPTER_REGISTERED",
            ErrorCode::AliasNotFound => "ALIAS_NOT_FOUND",
            ErrorCode::InvalidDataset => "INVALID_DATASET",
            ErrorCode::Io => "IO_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ComponentNotFound { .. } => ErrorCode::ComponentNotFound,
            Error::VariationNotFound { .. } => ErrorCode::VariationNotFound,
            Error::LanguageNotSupported { .. } => ErrorCode::LanguageNotSupported,
            Error::NoAdapterRegistered { .. } => ErrorCode::NoAdapterRegistered,
            Error::AliasNotFound { .. } => ErrorCode::AliasNotFound,
            Error::Dataset(_) => ErrorCode::InvalidDataset,
            Error::Io(_) => ErrorCode::Io,
        }
    }

    /// The offending statement, reconstructed from the error context where needed.
    pub fn statement(&self) -> Option<IncludeStatement> {
        match self {
            Error::ComponentNotFound { language, component, variation } => Some(IncludeStatement::new(
                *language,
                component.clone(),
                variation.clone().unwrap_or_default(),
            )),
            Error::VariationNotFound { language, component, variation } => {
                Some(IncludeStatement::new(*language, component.clone(), variation.clone()))
            }
            Error::NoAdapterRegistered { statement } => Some(statement.as_ref().clone()),
            _ => None,
        }
    }
}
