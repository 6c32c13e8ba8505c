use crate::error::Error;

pub mod api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod graph;
pub mod message;
pub mod model;
pub mod resolver;
pub mod state;

pub use graph::FriendGraph;

pub type Result<T> = std::result::Result<T, Error>;
