use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};
use yew::AttrValue;
use yewdux::{Context, Dispatch, Store};

use crate::model::{friend::FriendRequest, user::User};

/// the viewer's side of the social graph.
/// collections hold whatever the last successful fetch returned
#[derive(Default, Debug, Clone, PartialEq, Store)]
pub struct GraphState {
    pub current_user: Option<User>,
    pub friends: IndexMap<AttrValue, User>,
    /// sent by the current user
    pub outgoing_requests: IndexSet<FriendRequest>,
    /// waiting on the current user
    pub incoming_requests: IndexSet<FriendRequest>,
    /// millis of the last refresh write, 0 before the first one
    pub synced_at: i64,
}

impl GraphState {
    pub fn is_current_user(&self, user_id: &AttrValue) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|user| &user.id == user_id)
    }
}

/// owns the graph state and its write paths.
///
/// reads are free for anyone holding a clone, writes other than the
/// session lifecycle are only reachable from the mutation coordinator
#[derive(Clone)]
pub struct GraphStore {
    cx: Context,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self { cx: Context::new() }
    }

    /// share a yewdux context with the host application
    pub fn with_context(cx: &Context) -> Self {
        Self { cx: cx.clone() }
    }

    fn dispatch(&self) -> Dispatch<GraphState> {
        Dispatch::new(&self.cx)
    }

    pub fn snapshot(&self) -> Rc<GraphState> {
        self.dispatch().get()
    }

    pub fn current_user(&self) -> Option<User> {
        self.snapshot().current_user.clone()
    }

    /// read-only copy of the friends list for display
    pub fn friends(&self) -> Vec<User> {
        self.snapshot().friends.values().cloned().collect()
    }

    /// get notified on every change, not with the current state.
    /// the subscription lives as long as the returned dispatch
    pub fn subscribe<F>(&self, on_change: F) -> Dispatch<GraphState>
    where
        F: Fn(Rc<GraphState>) + 'static,
    {
        self.dispatch().subscribe_silent(on_change)
    }

    /// the current user is loaded, start from empty collections
    pub fn begin_session(&self, user: User) {
        log::debug!("begin graph session for {}", user.id);
        self.dispatch().set(GraphState {
            current_user: Some(user),
            ..Default::default()
        });
    }

    /// sign-out
    pub fn end_session(&self) {
        log::debug!("end graph session");
        self.dispatch().set(GraphState::default());
    }

    pub(crate) fn replace_friends(&self, viewer_id: &AttrValue, friends: Vec<User>) -> bool {
        self.commit(viewer_id, move |state| {
            state.friends = index_friends(friends);
        })
    }

    pub(crate) fn replace_outgoing_requests(
        &self,
        viewer_id: &AttrValue,
        requests: Vec<FriendRequest>,
    ) -> bool {
        self.commit(viewer_id, move |state| {
            state.outgoing_requests = requests.into_iter().collect();
        })
    }

    pub(crate) fn replace_incoming_requests(
        &self,
        viewer_id: &AttrValue,
        requests: Vec<FriendRequest>,
    ) -> bool {
        self.commit(viewer_id, move |state| {
            state.incoming_requests = requests.into_iter().collect();
        })
    }

    /// both collections land in the same write, subscribers never see one without the other
    pub(crate) fn replace_incoming_and_friends(
        &self,
        viewer_id: &AttrValue,
        requests: Vec<FriendRequest>,
        friends: Vec<User>,
    ) -> bool {
        self.commit(viewer_id, move |state| {
            state.incoming_requests = requests.into_iter().collect();
            state.friends = index_friends(friends);
        })
    }

    pub(crate) fn replace_all(
        &self,
        viewer_id: &AttrValue,
        friends: Vec<User>,
        outgoing: Vec<FriendRequest>,
        incoming: Vec<FriendRequest>,
    ) -> bool {
        self.commit(viewer_id, move |state| {
            state.friends = index_friends(friends);
            state.outgoing_requests = outgoing.into_iter().collect();
            state.incoming_requests = incoming.into_iter().collect();
        })
    }

    /// apply a refresh if the viewer still owns the session,
    /// a response for a signed out or switched user is dropped
    fn commit(&self, viewer_id: &AttrValue, f: impl FnOnce(&mut GraphState)) -> bool {
        let dispatch = self.dispatch();
        if !dispatch.get().is_current_user(viewer_id) {
            log::warn!("drop refresh for {}: not the session user", viewer_id);
            return false;
        }
        dispatch.reduce_mut(|state| {
            f(state);
            state.synced_at = chrono::Utc::now().timestamp_millis();
        });
        true
    }
}

fn index_friends(friends: Vec<User>) -> IndexMap<AttrValue, User> {
    friends
        .into_iter()
        .map(|user| (user.id.clone(), user))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn viewer() -> User {
        User::new("u1", "Ann")
    }

    #[test]
    fn begin_session_starts_empty() {
        let store = GraphStore::new();
        store.begin_session(viewer());
        let state = store.snapshot();
        assert_eq!(state.current_user, Some(viewer()));
        assert!(state.friends.is_empty());
        assert!(state.outgoing_requests.is_empty());
        assert!(state.incoming_requests.is_empty());
        assert_eq!(state.synced_at, 0);
    }

    #[test]
    fn replace_is_not_a_patch() {
        let store = GraphStore::new();
        store.begin_session(viewer());
        let id = viewer().id;
        assert!(store.replace_friends(&id, vec![User::new("u2", "Bob"), User::new("u3", "Cid")]));
        assert!(store.replace_friends(&id, vec![User::new("u3", "Cid")]));
        let ids: Vec<_> = store.friends().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![AttrValue::from("u3")]);
        assert!(store.snapshot().synced_at > 0);
    }

    #[test]
    fn duplicate_requests_collapse() {
        let store = GraphStore::new();
        store.begin_session(viewer());
        store.replace_outgoing_requests(
            &viewer().id,
            vec![FriendRequest::new("u1", "u2"), FriendRequest::new("u1", "u2")],
        );
        assert_eq!(store.snapshot().outgoing_requests.len(), 1);
    }

    #[test]
    fn refresh_for_other_user_is_dropped() {
        let store = GraphStore::new();
        store.begin_session(viewer());
        assert!(!store.replace_friends(&AttrValue::from("u9"), vec![User::new("u2", "Bob")]));
        assert!(store.friends().is_empty());

        store.end_session();
        assert!(!store.replace_friends(&viewer().id, vec![User::new("u2", "Bob")]));
        assert_eq!(*store.snapshot(), GraphState::default());
    }

    #[test]
    fn combined_write_notifies_once() {
        let store = GraphStore::new();
        store.begin_session(viewer());
        store.replace_incoming_requests(&viewer().id, vec![FriendRequest::new("u2", "u1")]);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let cloned = seen.clone();
        let _sub = store.subscribe(move |state: Rc<GraphState>| {
            cloned
                .borrow_mut()
                .push((state.friends.len(), state.incoming_requests.len()));
        });

        store.replace_incoming_and_friends(&viewer().id, vec![], vec![User::new("u2", "Bob")]);
        assert_eq!(*seen.borrow(), vec![(1, 0)]);
    }

    #[test]
    fn dropping_the_subscription_stops_notifications() {
        let store = GraphStore::new();
        store.begin_session(viewer());
        let count = Rc::new(RefCell::new(0));
        let cloned = count.clone();
        let sub = store.subscribe(move |_| *cloned.borrow_mut() += 1);
        store.replace_friends(&viewer().id, vec![User::new("u2", "Bob")]);
        drop(sub);
        store.replace_friends(&viewer().id, vec![]);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn stores_are_isolated_by_context() {
        let a = GraphStore::new();
        let b = GraphStore::new();
        a.begin_session(viewer());
        assert!(b.current_user().is_none());

        let shared = GraphStore::with_context(&a.cx);
        assert_eq!(shared.current_user(), Some(viewer()));
    }
}
