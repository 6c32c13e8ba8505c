/// only a handful of outcome messages need translating,
/// so each language is a module of fluent resources
pub mod en_us;
pub mod zh_cn;

use serde::{Deserialize, Serialize};

/// i18n language type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageType {
    ZhCN,
    #[default]
    EnUS,
}

