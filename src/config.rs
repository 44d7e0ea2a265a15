//! Session configuration
//!
//! Every field has a default, so an empty JSON object reproduces the built-in
//! session: the sample profile, default criteria, English, built-in catalog.

use crate::assistant::AssistantConfig;
use crate::catalog::{load_catalog, Catalog};
use crate::error::{ConfigError, Result};
use crate::i18n::{Translator, DEFAULT_LOCALE};
use crate::search::{FilterCriteria, UserProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub profile: UserProfile,
    pub criteria: FilterCriteria,
    pub locale: String,
    /// CSV catalog to load instead of the built-in plans
    pub catalog_path: Option<PathBuf>,
    pub assistant: AssistantConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            profile: UserProfile::default(),
            criteria: FilterCriteria::default(),
            locale: DEFAULT_LOCALE.to_string(),
            catalog_path: None,
            assistant: AssistantConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Load from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        log::info!("Loaded session config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(raw: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The configured catalog, or the built-in plans
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Ok(load_catalog(path)?),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Built-in translator with the configured locale active
    pub fn translator(&self) -> Translator {
        let mut translator = Translator::builtin();
        translator.set_locale(self.locale.clone());
        translator
    }
}
