use fluent::{FluentBundle, FluentResource};
use i18n::{en_us, zh_cn, LanguageType};
use utils::tr;

use crate::error::Error;

const INVALID: &str = "invalid";
const BUSY: &str = "busy";
const MUTATION_FAILED: &str = "mutation_failed";
const REFRESH_FAILED: &str = "refresh_failed";
const SYNC_FAILED: &str = "sync_failed";
const NETWORK: &str = "network";
const CONVERT: &str = "convert";

pub fn bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
    let res = match lang {
        LanguageType::ZhCN => zh_cn::FRIEND_GRAPH,
        LanguageType::EnUS => en_us::FRIEND_GRAPH,
    };
    utils::create_bundle(res)
}

/// the text to show the user for a failed operation
pub fn describe(err: &Error, lang: LanguageType) -> String {
    let i18n = bundle(lang);
    match err {
        Error::Validation(reason) => tr!(i18n, INVALID, "reason" => reason.as_str()),
        Error::Busy(_) => tr!(i18n, BUSY),
        Error::MutationFailed { kind, reason } => {
            let action_key = kind.to_string();
            let action = tr!(i18n, action_key.as_str());
            tr!(i18n, MUTATION_FAILED, "action" => action, "reason" => reason.as_str())
        }
        Error::RefreshFailed { .. } => tr!(i18n, REFRESH_FAILED),
        Error::SyncFailed(reason) => tr!(i18n, SYNC_FAILED, "reason" => reason.as_str()),
        Error::Network(api_err) => tr!(i18n, NETWORK, "reason" => api_err.to_string()),
        Error::Convert(reason) => tr!(i18n, CONVERT, "reason" => reason.as_str()),
    }
}
