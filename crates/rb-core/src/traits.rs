//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be used by the binary.

use crate::error::Result;
use crate::models::Post;
use async_trait::async_trait;
use secrecy::SecretString;
use uuid::Uuid;

/// Account directory keyed by email.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait IdentityRepo: Send + Sync {
    /// Fails with `DuplicateIdentity` if the email is taken.
    async fn register(&self, email: &str, secret: SecretString) -> Result<()>;

    /// Returns the canonical email on success, `InvalidCredentials` otherwise.
    async fn authenticate(&self, email: &str, secret: &str) -> Result<String>;

    async fn contains(&self, email: &str) -> Result<bool>;
}

/// Ordered post list, newest at index 0.
///
/// Positions shift whenever something is inserted or removed, so callers that
/// need to hold on to a post between requests should keep its `id`.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PostRepo: Send + Sync {
    /// Always lands at position 0; returns that position.
    async fn insert_front(&self, post: Post) -> Result<usize>;

    async fn get_at(&self, index: usize) -> Result<Post>;
    async fn replace_at(&self, index: usize, post: Post) -> Result<()>;
    /// Later posts move down by one.
    async fn remove_at(&self, index: usize) -> Result<Post>;

    /// Current position and contents of a post.
    async fn find(&self, id: Uuid) -> Result<Option<(usize, Post)>>;
    async fn replace(&self, id: Uuid, post: Post) -> Result<()>;
    async fn remove(&self, id: Uuid) -> Result<Post>;

    async fn len(&self) -> Result<usize>;
    /// Snapshot for rendering.
    async fn all(&self) -> Result<Vec<Post>>;
}
