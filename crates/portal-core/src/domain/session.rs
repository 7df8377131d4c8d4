use super::UserProfile;

/// Snapshot of the persisted session entries.
///
/// The two halves are stored independently, so `user` may be present without
/// `token` (or the reverse) after a partially failed write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
