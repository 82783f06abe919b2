use crate::dataset::Dataset;
use crate::language::Language;
use crate::registry::{build, profile, Registry};
use crate::statement::IncludeStatement;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PolyincludeConfig {
    /// Dataset file replacing the embedded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
    /// Languages to build; all of them when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub aliases: IndexMap<String, IncludeStatement>,
}

impl PolyincludeConfig {
    /// The config `init` writes: every language, one example alias.
    pub fn starter() -> Self {
        let mut aliases = IndexMap::new();
        aliases.insert(
            "save-button".to_string(),
            IncludeStatement::new(Language::React, "Button", "primary").with_alias("SaveButton"),
        );
        Self {
            dataset: None,
            languages: Some(Language::all().to_vec()),
            aliases,
        }
    }

    /// The dataset this config points at, or the embedded one.
    /// A relative dataset path is taken relative to `base`.
    pub fn dataset(&self, base: &Path) -> anyhow::Result<Dataset> {
        Ok(match &self.dataset {
            Some(path) => {
                let path = if path.is_relative() { base.join(path) } else { path.clone() };
                tracing::info!("Loading dataset from {}", path.display());
                Dataset::from_path(&path)?
            }
            None => Dataset::builtin()?,
        })
    }

    /// Build the registry this config describes, aliases included.
    pub fn build_registry(&self, base: &Path) -> anyhow::Result<Registry> {
        Ok(self.registry_for(&self.dataset(base)?))
    }

    /// Registry over an already loaded dataset
    pub fn registry_for(&self, dataset: &Dataset) -> Registry {
        let mut registry = match &self.languages {
            Some(languages) => Registry::with_languages(
                languages
                    .iter()
                    .map(|language| build::derive_language(dataset, &profile(*language))),
            ),
            None => Registry::from_dataset(dataset),
        };

        for (alias, statement) in &self.aliases {
            registry.add_alias(alias.clone(), statement.clone());
        }
        registry
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("polyinclude.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<PolyincludeConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: PolyincludeConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &PolyincludeConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
