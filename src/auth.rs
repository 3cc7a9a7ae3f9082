//! Admin authentication seam

use thiserror::Error;

/// Errors raised when a login attempt fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The credentials were not accepted.
    #[error("credentials rejected")]
    Rejected,
}

/// External credential check.
///
/// The core only cares about accepted/rejected; how the check happens is the
/// collaborator's business.
pub trait Authenticator {
    /// Whether the given credentials are accepted.
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// In-memory credential pair, for single-operator deployments and tests.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Create a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        StaticCredentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
