use i18n::LanguageType;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// host supplied settings
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// language of user facing messages
    #[serde(default)]
    pub lang: LanguageType,
}

impl GraphConfig {
    pub fn from_json(value: &str) -> Result<Self> {
        Ok(serde_json::from_str(value)?)
    }
}
