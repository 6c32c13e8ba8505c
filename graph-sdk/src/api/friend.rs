use std::fmt::Debug;

use crate::{
    error::Result,
    model::{friend::FriendRequest, user::User},
};

/// the remote authority for the social graph.
/// the transport behind it is up to the host application
#[async_trait::async_trait(?Send)]
pub trait FriendGraphApi: Debug {
    async fn fetch_friends(&self, user_id: &str) -> Result<Vec<User>>;

    /// requests sent by `user_id`
    async fn fetch_outgoing_requests(&self, user_id: &str) -> Result<Vec<FriendRequest>>;

    /// requests waiting on `user_id`
    async fn fetch_incoming_requests(&self, user_id: &str) -> Result<Vec<FriendRequest>>;

    async fn create_friend_request(&self, from_id: &str, to_id: &str) -> Result<()>;

    async fn accept_friend_request(&self, requester_id: &str, accepter_id: &str) -> Result<()>;

    async fn delete_friend_request(&self, from_id: &str, to_id: &str) -> Result<()>;

    async fn delete_friendship(&self, user_id: &str, friend_id: &str) -> Result<()>;
}
