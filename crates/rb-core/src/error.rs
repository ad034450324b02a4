//! # AppError
//!
//! Centralized error handling for the Rusty-Blog ecosystem.
//! None of these are fatal; the web layer turns each into a redirect or a message.

use thiserror::Error;
use uuid::Uuid;

/// The primary error type for all rb-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The session has no signed-in identity
    #[error("not signed in")]
    NotAuthenticated,

    /// Sign-up for an email that is already registered
    #[error("Account already exists. Please sign in.")]
    DuplicateIdentity,

    /// Unknown email or wrong password
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    /// The session has no post it is allowed to edit
    #[error("Edit not allowed. You can only edit your latest blog.")]
    EditNotAllowed,

    #[error("post index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Sign-up form with differing password fields
    #[error("Passwords do not match.")]
    PasswordMismatch,

    /// The post exists but belongs to another account
    #[error("post belongs to another account")]
    NotPostOwner,

    #[error("post {0} not found")]
    PostNotFound(Uuid),

    /// Infrastructure failure (e.g., poisoned lock, template failure)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for Rusty-Blog logic.
pub type Result<T> = std::result::Result<T, AppError>;
