//! Per-browser session state.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the server remembers about one visitor between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Email of the signed-in account
    pub identity: Option<String>,
    /// Id of the one post this session may still edit or delete
    pub latest_post: Option<Uuid>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard used before every mutating operation.
    pub fn require_identity(&self) -> Result<&str> {
        self.identity.as_deref().ok_or(AppError::NotAuthenticated)
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Switching accounts drops the editable-post pointer of the previous one.
    pub fn sign_in(&mut self, email: &str) {
        if self.identity.as_deref() != Some(email) {
            self.latest_post = None;
        }
        self.identity = Some(email.to_string());
    }
}
