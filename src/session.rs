//! Logged-in user context.

/// Proof of a successful login, handed to every operation that acts on
/// behalf of a user. Only [`crate::directory::UserDirectory::authenticate`]
/// creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    pub(crate) fn new(username: impl Into<String>) -> Self {
        Self { username: username.into() }
    }

    /// Name of the logged-in user.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}
