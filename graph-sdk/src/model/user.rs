use serde::{Deserialize, Serialize};
use yew::AttrValue;

/// user as returned by the graph service, identity is `id`
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
pub struct User {
    pub id: AttrValue,
    pub name: AttrValue,
    #[serde(default)]
    pub account: AttrValue,
    #[serde(default)]
    pub avatar: AttrValue,
    #[serde(default)]
    pub signature: AttrValue,
    #[serde(default)]
    pub region: Option<AttrValue>,
}

impl User {
    pub fn new(id: impl Into<AttrValue>, name: impl Into<AttrValue>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}
