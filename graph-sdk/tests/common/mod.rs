#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
};

use futures_channel::oneshot;
use graph_sdk::{
    api::FriendGraphApi,
    error::{api_err::ErrorKind, Error, Result},
    model::{friend::FriendRequest, user::User},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    FetchFriends,
    FetchOutgoing,
    FetchIncoming,
    Create,
    Accept,
    DeleteRequest,
    DeleteFriendship,
}

/// in-memory graph service with scripted failures
#[derive(Debug, Default)]
pub struct FakeGraphApi {
    users: RefCell<HashMap<String, User>>,
    /// stored in both directions
    friendships: RefCell<HashSet<(String, String)>>,
    requests: RefCell<Vec<FriendRequest>>,
    calls: RefCell<Vec<Op>>,
    failing: RefCell<HashSet<Op>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

pub fn user(id: &str, name: &str) -> User {
    User::new(id.to_string(), name.to_string())
}

impl FakeGraphApi {
    pub fn new(users: &[User]) -> Self {
        let fake = Self::default();
        fake.users
            .borrow_mut()
            .extend(users.iter().map(|u| (u.id.to_string(), u.clone())));
        fake
    }

    pub fn befriend(&self, a: &str, b: &str) {
        let mut friendships = self.friendships.borrow_mut();
        friendships.insert((a.to_string(), b.to_string()));
        friendships.insert((b.to_string(), a.to_string()));
    }

    pub fn request(&self, from: &str, to: &str) {
        let req = FriendRequest::new(from.to_string(), to.to_string());
        let mut requests = self.requests.borrow_mut();
        if !requests.contains(&req) {
            requests.push(req);
        }
    }

    pub fn fail(&self, op: Op) {
        self.failing.borrow_mut().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.borrow_mut().remove(&op);
    }

    /// the next mutation waits until the returned sender fires
    pub fn hold_next_mutation(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls_of(&self, op: Op) -> usize {
        self.calls.borrow().iter().filter(|c| **c == op).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, op: Op) -> Result<()> {
        self.calls.borrow_mut().push(op);
        if self.failing.borrow().contains(&op) {
            return Err(Error::network(ErrorKind::Timeout, format!("{:?} timed out", op)));
        }
        Ok(())
    }

    async fn pass_gate(&self) {
        let gate = self.gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }

    fn lookup(&self, id: &str) -> User {
        self.users
            .borrow()
            .get(id)
            .cloned()
            .unwrap_or_else(|| user(id, id))
    }
}

#[async_trait::async_trait(?Send)]
impl FriendGraphApi for FakeGraphApi {
    async fn fetch_friends(&self, user_id: &str) -> Result<Vec<User>> {
        self.record(Op::FetchFriends)?;
        let mut ids: Vec<String> = self
            .friendships
            .borrow()
            .iter()
            .filter(|(a, _)| a == user_id)
            .map(|(_, b)| b.clone())
            .collect();
        ids.sort();
        Ok(ids.iter().map(|id| self.lookup(id)).collect())
    }

    async fn fetch_outgoing_requests(&self, user_id: &str) -> Result<Vec<FriendRequest>> {
        self.record(Op::FetchOutgoing)?;
        Ok(self
            .requests
            .borrow()
            .iter()
            .filter(|r| r.from_user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    async fn fetch_incoming_requests(&self, user_id: &str) -> Result<Vec<FriendRequest>> {
        self.record(Op::FetchIncoming)?;
        Ok(self
            .requests
            .borrow()
            .iter()
            .filter(|r| r.to_user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    async fn create_friend_request(&self, from_id: &str, to_id: &str) -> Result<()> {
        self.record(Op::Create)?;
        self.pass_gate().await;
        self.request(from_id, to_id);
        Ok(())
    }

    async fn accept_friend_request(&self, requester_id: &str, accepter_id: &str) -> Result<()> {
        self.record(Op::Accept)?;
        self.pass_gate().await;
        self.requests.borrow_mut().retain(|r| {
            !(r.from_user_id.as_str() == requester_id && r.to_user_id.as_str() == accepter_id)
        });
        self.befriend(requester_id, accepter_id);
        Ok(())
    }

    async fn delete_friend_request(&self, from_id: &str, to_id: &str) -> Result<()> {
        self.record(Op::DeleteRequest)?;
        self.pass_gate().await;
        self.requests
            .borrow_mut()
            .retain(|r| !(r.from_user_id.as_str() == from_id && r.to_user_id.as_str() == to_id));
        Ok(())
    }

    async fn delete_friendship(&self, user_id: &str, friend_id: &str) -> Result<()> {
        self.record(Op::DeleteFriendship)?;
        self.pass_gate().await;
        let mut friendships = self.friendships.borrow_mut();
        friendships.remove(&(user_id.to_string(), friend_id.to_string()));
        friendships.remove(&(friend_id.to_string(), user_id.to_string()));
        Ok(())
    }
}
