use serde::{Deserialize, Serialize};
use yew::AttrValue;

/// a pending friend request; which collection holds it is its status
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FriendRequest {
    pub from_user_id: AttrValue,
    pub to_user_id: AttrValue,
    #[serde(default)]
    pub apply_msg: Option<AttrValue>,
    #[serde(default)]
    pub create_time: i64,
}

impl FriendRequest {
    pub fn new(from_user_id: impl Into<AttrValue>, to_user_id: impl Into<AttrValue>) -> Self {
        Self {
            from_user_id: from_user_id.into(),
            to_user_id: to_user_id.into(),
            apply_msg: None,
            create_time: 0,
        }
    }
}
