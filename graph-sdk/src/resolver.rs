//! Relationship predicates derived from a store snapshot.
//!
//! Every predicate is a pure function of `(state, subject)`. Viewing your own
//! profile, or any profile before the session user is loaded, resolves to a
//! stranger.

use std::{cell::Cell, rc::Rc};

use yew::Callback;
use yewdux::Dispatch;

use crate::{
    model::{user::User, Relationship, RelationshipStatus},
    state::{GraphState, GraphStore},
};

fn is_other_user(state: &GraphState, subject: &User) -> bool {
    match &state.current_user {
        Some(viewer) => viewer.id != subject.id,
        None => false,
    }
}

pub fn is_friend(state: &GraphState, subject: &User) -> bool {
    is_other_user(state, subject) && state.friends.contains_key(&subject.id)
}

pub fn is_outgoing_pending(state: &GraphState, subject: &User) -> bool {
    is_other_user(state, subject)
        && state
            .outgoing_requests
            .iter()
            .any(|req| req.to_user_id == subject.id)
}

pub fn is_incoming_pending(state: &GraphState, subject: &User) -> bool {
    is_other_user(state, subject)
        && state
            .incoming_requests
            .iter()
            .any(|req| req.from_user_id == subject.id)
}

pub fn resolve(state: &GraphState, subject: &User) -> Relationship {
    Relationship {
        is_friend: is_friend(state, subject),
        is_outgoing_pending: is_outgoing_pending(state, subject),
        is_incoming_pending: is_incoming_pending(state, subject),
    }
}

pub fn status(state: &GraphState, subject: &User) -> RelationshipStatus {
    resolve(state, subject).status()
}

/// re-derives the relationship to one subject on every store change
/// and emits only when it actually changed
pub struct RelationshipWatcher {
    current: Rc<Cell<Relationship>>,
    _dispatch: Dispatch<GraphState>,
}

impl RelationshipWatcher {
    pub fn new(store: &GraphStore, subject: User, on_change: Callback<Relationship>) -> Self {
        let current = Rc::new(Cell::new(resolve(&store.snapshot(), &subject)));
        let last = current.clone();
        let dispatch = store.subscribe(move |state: Rc<GraphState>| {
            let next = resolve(&state, &subject);
            if last.replace(next) != next {
                log::debug!("relationship to {} is now {:?}", subject.id, next.status());
                on_change.emit(next);
            }
        });
        Self {
            current,
            _dispatch: dispatch,
        }
    }

    pub fn current(&self) -> Relationship {
        self.current.get()
    }
}
