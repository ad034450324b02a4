//! # Edit-Session Controller
//!
//! A session may own at most one post it can still change: the last one it
//! created, and only while that post is still the newest in the feed. Every
//! create/edit/delete request goes through [`EditController`], which resolves
//! the session's pointer into an [`EditState`] first and only touches the
//! store once ownership has been verified.
//!
//! The pointer is a post id rather than a list position, so deletes made by
//! other sessions never make it point at somebody else's post.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::models::{Post, PostDraft};
use crate::session::SessionContext;
use crate::traits::PostRepo;

/// Where a session stands with respect to its editable post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// The session never created a post (or deleted it).
    NoPost,
    /// The pointer resolves to the post at index 0, owned by the signed-in identity.
    HasEditablePost(Post),
    /// The pointer is set but the post is gone, owned by someone else, or no
    /// longer the newest post.
    /// Treated like `NoPost` for creation and refused for edit/delete.
    StaleReference,
}

pub struct EditController {
    posts: Arc<dyn PostRepo>,
}

impl EditController {
    pub fn new(posts: Arc<dyn PostRepo>) -> Self {
        Self { posts }
    }

    /// All user posts, newest first.
    pub async fn feed(&self) -> Result<Vec<Post>> {
        self.posts.all().await
    }

    pub async fn state(&self, session: &SessionContext) -> Result<EditState> {
        let Some(id) = session.latest_post else {
            return Ok(EditState::NoPost);
        };
        let Some(identity) = session.identity.as_deref() else {
            return Ok(EditState::StaleReference);
        };

        match self.posts.find(id).await? {
            Some((0, post)) if post.is_owned_by(identity) => Ok(EditState::HasEditablePost(post)),
            _ => {
                debug!("session pointer {} is not an editable post of {}", id, identity);
                Ok(EditState::StaleReference)
            }
        }
    }

    /// Amends the session's editable post, or creates a new one at the front
    /// of the feed when there is none.
    pub async fn submit(&self, session: &mut SessionContext, draft: PostDraft) -> Result<Post> {
        let identity = session.require_identity()?.to_string();

        if let EditState::HasEditablePost(current) = self.state(session).await? {
            match self.replace(&identity, &current, draft.clone()).await {
                Ok(post) => return Ok(post),
                // Deleted between lookup and replace; fall through and create.
                Err(AppError::PostNotFound(id)) => {
                    debug!("post {} vanished before amend, creating a new one", id)
                }
                Err(e) => return Err(e),
            }
        }

        let post = Post::new(&identity, draft);
        self.posts.insert_front(post.clone()).await?;
        session.latest_post = Some(post.id);
        info!("{} created post {}", identity, post.id);
        Ok(post)
    }

    /// Edit-only variant of [`submit`](Self::submit): never creates.
    pub async fn amend(&self, session: &SessionContext, draft: PostDraft) -> Result<Post> {
        let identity = session.require_identity()?;

        match self.state(session).await? {
            EditState::HasEditablePost(current) => {
                match self.replace(identity, &current, draft).await {
                    Err(AppError::PostNotFound(_)) => Err(AppError::EditNotAllowed),
                    other => other,
                }
            }
            _ => Err(AppError::EditNotAllowed),
        }
    }

    /// The post to pre-fill the edit form with.
    pub async fn request_edit(&self, session: &SessionContext) -> Result<Post> {
        session.require_identity()?;

        match self.state(session).await? {
            EditState::HasEditablePost(post) => Ok(post),
            _ => Err(AppError::EditNotAllowed),
        }
    }

    /// Deletes the post currently shown at `index`, if the session's identity
    /// wrote it.
    pub async fn request_delete(&self, session: &mut SessionContext, index: usize) -> Result<Post> {
        let identity = session.require_identity()?.to_string();

        let target = self.posts.get_at(index).await?;
        if !target.is_owned_by(&identity) {
            warn!("{} tried to delete post {} owned by {}", identity, target.id, target.author);
            return Err(AppError::NotPostOwner);
        }

        // Remove by id: the position may have shifted since the lookup.
        let removed = self.posts.remove(target.id).await?;
        if session.latest_post == Some(removed.id) {
            session.latest_post = None;
        }
        info!("{} deleted post {}", identity, removed.id);
        Ok(removed)
    }

    async fn replace(&self, identity: &str, current: &Post, draft: PostDraft) -> Result<Post> {
        let post = Post::with_id(current.id, current.created_at, identity, draft);
        self.posts.replace(current.id, post.clone()).await?;
        debug!("{} amended post {}", identity, post.id);
        Ok(post)
    }
}
