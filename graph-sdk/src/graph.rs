use std::rc::Rc;

use yew::Callback;

use crate::{
    api::{self, FriendGraphApi},
    config::GraphConfig,
    coordinator::MutationCoordinator,
    error::{Error, Result},
    message,
    model::{user::User, Relationship, RelationshipStatus},
    resolver::{self, RelationshipWatcher},
    state::GraphStore,
};

/// everything the ui layer gets to touch
pub struct FriendGraph {
    config: GraphConfig,
    store: GraphStore,
    coordinator: MutationCoordinator,
}

impl FriendGraph {
    pub fn new(api: impl FriendGraphApi + 'static, config: GraphConfig) -> Self {
        Self::with_store(api::shared(api), GraphStore::new(), config)
    }

    pub fn with_store(api: Rc<dyn FriendGraphApi>, store: GraphStore, config: GraphConfig) -> Self {
        Self {
            config,
            coordinator: MutationCoordinator::new(api, store.clone()),
            store,
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn coordinator(&self) -> &MutationCoordinator {
        &self.coordinator
    }

    /// the viewer is known, load their graph
    pub async fn sign_in(&self, user: User) -> Result<()> {
        if user.id.as_str().is_empty() {
            return Err(Error::validation("viewer is required"));
        }
        self.store.begin_session(user.clone());
        self.coordinator.sync(&user).await
    }

    pub fn sign_out(&self) {
        self.store.end_session();
    }

    pub fn is_friend(&self, subject: &User) -> bool {
        resolver::is_friend(&self.store.snapshot(), subject)
    }

    pub fn is_outgoing_pending(&self, subject: &User) -> bool {
        resolver::is_outgoing_pending(&self.store.snapshot(), subject)
    }

    pub fn is_incoming_pending(&self, subject: &User) -> bool {
        resolver::is_incoming_pending(&self.store.snapshot(), subject)
    }

    pub fn relationship(&self, subject: &User) -> Relationship {
        resolver::resolve(&self.store.snapshot(), subject)
    }

    pub fn status(&self, subject: &User) -> RelationshipStatus {
        resolver::status(&self.store.snapshot(), subject)
    }

    pub fn friends(&self) -> Vec<User> {
        self.store.friends()
    }

    pub fn watch(&self, subject: User, on_change: Callback<Relationship>) -> RelationshipWatcher {
        RelationshipWatcher::new(&self.store, subject, on_change)
    }

    fn viewer(&self) -> Result<User> {
        self.store
            .current_user()
            .ok_or_else(|| Error::validation("no signed in user"))
    }

    pub async fn send_friend_request(&self, subject: &User) -> Result<()> {
        let viewer = self.viewer()?;
        self.coordinator.send_friend_request(&viewer, subject).await
    }

    pub async fn accept_friend_request(&self, subject: &User) -> Result<()> {
        let viewer = self.viewer()?;
        self.coordinator.accept_friend_request(&viewer, subject).await
    }

    pub async fn reject_friend_request(&self, subject: &User) -> Result<()> {
        let viewer = self.viewer()?;
        self.coordinator.reject_friend_request(&viewer, subject).await
    }

    pub async fn unfriend(&self, subject: &User) -> Result<()> {
        let viewer = self.viewer()?;
        self.coordinator.unfriend(&viewer, subject).await
    }

    pub async fn profile_friends(&self, subject: &User) -> Result<Vec<User>> {
        self.coordinator.profile_friends(subject).await
    }

    /// user facing text for a failed operation
    pub fn message(&self, err: &Error) -> String {
        message::describe(err, self.config.lang)
    }
}
