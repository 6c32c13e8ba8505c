use std::rc::Rc;

pub use friend::FriendGraphApi;

mod friend;

/// share one graph service client between the coordinator and its callers
pub fn shared<A: FriendGraphApi + 'static>(api: A) -> Rc<dyn FriendGraphApi> {
    Rc::new(api)
}
