use std::{cell::RefCell, collections::HashSet, rc::Rc};

use futures::future::{join, join3};
use yew::AttrValue;

use crate::{
    api::FriendGraphApi,
    error::{Error, Result},
    model::{user::User, MutationKind},
    state::GraphStore,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MutationKey {
    kind: MutationKind,
    viewer_id: AttrValue,
    subject_id: AttrValue,
}

type InFlight = Rc<RefCell<HashSet<MutationKey>>>;

/// holds a slot in the in-flight set, released on every exit path
struct InFlightGuard {
    in_flight: InFlight,
    key: MutationKey,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.borrow_mut().remove(&self.key);
    }
}

/// runs the call-then-refresh sequence of every relationship mutation.
///
/// the graph service is called first; only after it accepts the change are
/// the affected collections fetched again and written to the store as a
/// whole. nothing is written optimistically
pub struct MutationCoordinator {
    api: Rc<dyn FriendGraphApi>,
    store: GraphStore,
    in_flight: InFlight,
}

impl MutationCoordinator {
    pub fn new(api: Rc<dyn FriendGraphApi>, store: GraphStore) -> Self {
        Self {
            api,
            store,
            in_flight: Rc::default(),
        }
    }

    pub fn is_in_flight(&self, kind: MutationKind, viewer: &User, subject: &User) -> bool {
        self.in_flight.borrow().contains(&MutationKey {
            kind,
            viewer_id: viewer.id.clone(),
            subject_id: subject.id.clone(),
        })
    }

    fn begin(&self, kind: MutationKind, viewer: &User, subject: &User) -> Result<InFlightGuard> {
        if viewer.id.as_str().is_empty() || subject.id.as_str().is_empty() {
            return Err(Error::validation("viewer and subject are required"));
        }
        if viewer.id == subject.id {
            return Err(Error::validation(format!(
                "{} can not {} themselves",
                viewer.id, kind
            )));
        }
        let key = MutationKey {
            kind,
            viewer_id: viewer.id.clone(),
            subject_id: subject.id.clone(),
        };
        if !self.in_flight.borrow_mut().insert(key.clone()) {
            log::warn!("{} from {} to {} is still in flight", kind, viewer.id, subject.id);
            return Err(Error::Busy(kind));
        }
        log::debug!("{} from {} to {}", kind, viewer.id, subject.id);
        Ok(InFlightGuard {
            in_flight: self.in_flight.clone(),
            key,
        })
    }

    pub async fn send_friend_request(&self, viewer: &User, subject: &User) -> Result<()> {
        let kind = MutationKind::SendRequest;
        let _guard = self.begin(kind, viewer, subject)?;

        self.api
            .create_friend_request(viewer.id.as_str(), subject.id.as_str())
            .await
            .map_err(|err| mutation_failed(kind, err))?;

        let outgoing = self
            .api
            .fetch_outgoing_requests(viewer.id.as_str())
            .await
            .map_err(|err| refresh_failed(kind, err))?;
        self.store.replace_outgoing_requests(&viewer.id, outgoing);
        Ok(())
    }

    pub async fn accept_friend_request(&self, viewer: &User, subject: &User) -> Result<()> {
        let kind = MutationKind::AcceptRequest;
        let _guard = self.begin(kind, viewer, subject)?;

        self.api
            .accept_friend_request(subject.id.as_str(), viewer.id.as_str())
            .await
            .map_err(|err| mutation_failed(kind, err))?;

        // both reads must land before anything is written
        let (incoming, friends) = join(
            self.api.fetch_incoming_requests(viewer.id.as_str()),
            self.api.fetch_friends(viewer.id.as_str()),
        )
        .await;
        let incoming = incoming.map_err(|err| refresh_failed(kind, err))?;
        let friends = friends.map_err(|err| refresh_failed(kind, err))?;
        self.store
            .replace_incoming_and_friends(&viewer.id, incoming, friends);
        Ok(())
    }

    pub async fn reject_friend_request(&self, viewer: &User, subject: &User) -> Result<()> {
        let kind = MutationKind::RejectRequest;
        let _guard = self.begin(kind, viewer, subject)?;

        self.api
            .delete_friend_request(subject.id.as_str(), viewer.id.as_str())
            .await
            .map_err(|err| mutation_failed(kind, err))?;

        let incoming = self
            .api
            .fetch_incoming_requests(viewer.id.as_str())
            .await
            .map_err(|err| refresh_failed(kind, err))?;
        self.store.replace_incoming_requests(&viewer.id, incoming);
        Ok(())
    }

    pub async fn unfriend(&self, viewer: &User, subject: &User) -> Result<()> {
        let kind = MutationKind::Unfriend;
        let _guard = self.begin(kind, viewer, subject)?;

        self.api
            .delete_friendship(viewer.id.as_str(), subject.id.as_str())
            .await
            .map_err(|err| mutation_failed(kind, err))?;

        let friends = self
            .api
            .fetch_friends(viewer.id.as_str())
            .await
            .map_err(|err| refresh_failed(kind, err))?;
        self.store.replace_friends(&viewer.id, friends);
        Ok(())
    }

    /// initial load of all three collections, committed in one write
    pub async fn sync(&self, viewer: &User) -> Result<()> {
        if viewer.id.as_str().is_empty() {
            return Err(Error::validation("viewer is required"));
        }
        let (friends, outgoing, incoming) = join3(
            self.api.fetch_friends(viewer.id.as_str()),
            self.api.fetch_outgoing_requests(viewer.id.as_str()),
            self.api.fetch_incoming_requests(viewer.id.as_str()),
        )
        .await;
        let sync_failed = |err: Error| {
            log::error!("load friend graph of {} error: {}", viewer.id, err);
            Error::SyncFailed(err.to_string())
        };
        let friends = friends.map_err(sync_failed)?;
        let outgoing = outgoing.map_err(sync_failed)?;
        let incoming = incoming.map_err(sync_failed)?;
        self.store
            .replace_all(&viewer.id, friends, outgoing, incoming);
        Ok(())
    }

    /// friends of any user, for a profile page. never cached
    pub async fn profile_friends(&self, subject: &User) -> Result<Vec<User>> {
        if subject.id.as_str().is_empty() {
            return Err(Error::validation("subject is required"));
        }
        self.api.fetch_friends(subject.id.as_str()).await.map_err(|err| {
            log::error!("query friends of {} error: {}", subject.id, err);
            err
        })
    }
}

fn mutation_failed(kind: MutationKind, err: Error) -> Error {
    log::error!("{} error: {}", kind, err);
    Error::MutationFailed {
        kind,
        reason: err.to_string(),
    }
}

fn refresh_failed(kind: MutationKind, err: Error) -> Error {
    log::error!("{} applied, refresh error: {}", kind, err);
    Error::RefreshFailed {
        kind,
        reason: err.to_string(),
    }
}
