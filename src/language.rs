//! Target languages and import styles
//!
//! The set of languages is closed: adding one means adding a variant here,
//! a profile in the registry and an adapter.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Target presentation framework an include statement is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// React components from Polaris
    React,
    /// Vanilla JavaScript component classes
    Vanilla,
    /// ExtJS enterprise components
    ExtJs,
    /// TypeScript business logic patterns
    TypeScript,
}

impl Language {
    /// Get the string representation of the language
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::React => "react",
            Language::Vanilla => "vanilla",
            Language::ExtJs => "extjs",
            Language::TypeScript => "typescript",
        }
    }

    /// Get all languages
    pub fn all() -> &'static [Language] {
        &[
            Language::React,
            Language::Vanilla,
            Language::ExtJs,
            Language::TypeScript,
        ]
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "react" | "jsx" => Ok(Language::React),
            "vanilla" | "js" | "javascript" => Ok(Language::Vanilla),
            "extjs" | "ext" => Ok(Language::ExtJs),
            "typescript" | "ts" => Ok(Language::TypeScript),
            _ => Err(Error::LanguageNotSupported {
                language: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a language brings a component into scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStyle {
    /// `import { Button } from '...'`
    Named,
    /// `import Button from '...'`
    Default,
    /// `import * as Polaris from '...'`
    Namespace,
}

impl ImportStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportStyle::Named => "named",
            ImportStyle::Default => "default",
            ImportStyle::Namespace => "namespace",
        }
    }
}

impl std::fmt::Display for ImportStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_roundtrip() {
        for language in Language::all() {
            let parsed: Language = language.as_str().parse().unwrap();
            assert_eq!(*language, parsed);
        }
    }

    #[test]
    fn test_language_aliases() {
        assert_eq!(Language::from_str("TS").unwrap(), Language::TypeScript);
        assert_eq!(Language::from_str("javascript").unwrap(), Language::Vanilla);
        assert_eq!(Language::from_str("ext").unwrap(), Language::ExtJs);
    }

    #[test]
    fn test_unknown_language() {
        let err = Language::from_str("svelte").unwrap_err();
        assert_eq!(err.code().as_str(), "LANGUAGE_NOT_SUPPORTED");
        assert_eq!(
            err.to_string(),
            "Language \"svelte\" is not supported by the include system"
        );
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::ExtJs).unwrap(), "\"extjs\"");
        let parsed: Language = serde_json::from_str("\"typescript\"").unwrap();
        assert_eq!(parsed, Language::TypeScript);
    }
}
