use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{TranslatorError, TranslatorResult};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TranslatorConfig {
    // Root name of main-line traversals
    pub alias: String,

    // Root name of anonymous traversals
    pub anonymous_alias: String,

    pub source_language: String,
    pub target_language: String,

    // Prepended to the arity-tagged lambda markers, e.g. "Jython"
    pub lambda_prefix: String,
}

impl TranslatorConfig {
    pub fn new(alias: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            alias: alias.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            ..Self::default()
        }
    }

    pub fn from_config_file(input_path: PathBuf) -> TranslatorResult<Self> {
        if !input_path.exists() {
            return Err(TranslatorError::ConfigFileNotFound(input_path));
        }
        let config = std::fs::read_to_string(&input_path)?;
        let config = sonic_rs::from_str::<TranslatorConfig>(&config)?;
        debug!(path = %input_path.display(), alias = %config.alias, "loaded translator config");

        Ok(config)
    }

    pub fn init_config() -> String {
        r#"{
    "alias": "g",
    "anonymous_alias": "__",
    "source_language": "rust",
    "target_language": "gremlin-groovy",
    "lambda_prefix": ""
}
"#
        .to_string()
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            alias: "g".to_string(),
            anonymous_alias: "__".to_string(),
            source_language: "rust".to_string(),
            target_language: "gremlin-groovy".to_string(),
            lambda_prefix: String::new(),
        }
    }
}
