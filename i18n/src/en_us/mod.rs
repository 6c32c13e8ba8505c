// relationship mutations and their outcomes
pub const FRIEND_GRAPH: &str = r#"
send_request = send the friend request
accept_request = accept the friend request
reject_request = reject the friend request
unfriend = remove the friend

invalid = Invalid request: { $reason }
busy = Still working on it, please wait.
mutation_failed = Something went wrong when trying to { $action }: { $reason }
refresh_failed = Saved, but your view may be stale. Pull to refresh.
sync_failed = Could not load your friends: { $reason }
network = Network error: { $reason }
convert = Unexpected data: { $reason }
"#;
