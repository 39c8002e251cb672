//! Caller credentials passed through to the backend.

/// User token presented to the dispatch backend.
///
/// The backend authenticates with HTTP Basic where the password equals the
/// user name, so a single token is enough to build both halves.
///
/// # Examples
///
/// ```
/// use dispatch_core::Credentials;
///
/// let credentials = Credentials::new("cab7");
/// assert_eq!(credentials.user(), "cab7");
/// assert_eq!(credentials.password(), "cab7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Credentials {
    user: String,
}

impl Credentials {
    /// Wrap a user token.
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    /// User name sent with every request.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Password sent with every request; identical to [`Self::user`].
    #[must_use]
    pub fn password(&self) -> &str {
        &self.user
    }
}

impl From<&str> for Credentials {
    fn from(user: &str) -> Self {
        Self::new(user)
    }
}
