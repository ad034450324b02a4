//! # rb-db-memory
//!
//! Process-lifetime implementations of the `rb-core` storage ports.
//! Everything is lost on restart.

use std::collections::VecDeque;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::error;
use rb_core::error::{AppError, Result};
use rb_core::models::{Credential, Post};
use rb_core::traits::{IdentityRepo, PostRepo};
use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

/// Accounts keyed by email.
#[derive(Default)]
pub struct MemoryIdentityRepo {
    accounts: DashMap<String, Credential>,
}

impl MemoryIdentityRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityRepo for MemoryIdentityRepo {
    /// The entry API holds the shard lock, so two sign-ups racing for the
    /// same email cannot both win.
    async fn register(&self, email: &str, secret: SecretString) -> Result<()> {
        match self.accounts.entry(email.to_string()) {
            Entry::Occupied(_) => Err(AppError::DuplicateIdentity),
            Entry::Vacant(slot) => {
                slot.insert(Credential {
                    email: email.to_string(),
                    secret,
                });
                Ok(())
            }
        }
    }

    async fn authenticate(&self, email: &str, secret: &str) -> Result<String> {
        match self.accounts.get(email) {
            Some(account) if account.secret.expose_secret() == secret => Ok(account.email.clone()),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    async fn contains(&self, email: &str) -> Result<bool> {
        Ok(self.accounts.contains_key(email))
    }
}

/// Posts ordered newest first. Every operation runs under one lock.
#[derive(Default)]
pub struct MemoryPostRepo {
    posts: RwLock<VecDeque<Post>>,
}

fn poisoned() -> AppError {
    error!("post store lock poisoned; a writer panicked mid-update");
    AppError::Internal("post store lock poisoned".to_string())
}

fn out_of_range(index: usize, len: usize) -> AppError {
    AppError::IndexOutOfRange { index, len }
}

impl MemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, VecDeque<Post>>> {
        self.posts.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, VecDeque<Post>>> {
        self.posts.write().map_err(|_| poisoned())
    }
}

fn position(posts: &VecDeque<Post>, id: Uuid) -> Option<usize> {
    posts.iter().position(|p| p.id == id)
}

#[async_trait]
impl PostRepo for MemoryPostRepo {
    async fn insert_front(&self, post: Post) -> Result<usize> {
        self.write()?.push_front(post);
        Ok(0)
    }

    async fn get_at(&self, index: usize) -> Result<Post> {
        let posts = self.read()?;
        posts.get(index).cloned().ok_or_else(|| out_of_range(index, posts.len()))
    }

    async fn replace_at(&self, index: usize, post: Post) -> Result<()> {
        let mut posts = self.write()?;
        let len = posts.len();
        let slot = posts.get_mut(index).ok_or_else(|| out_of_range(index, len))?;
        *slot = post;
        Ok(())
    }

    async fn remove_at(&self, index: usize) -> Result<Post> {
        let mut posts = self.write()?;
        let len = posts.len();
        posts.remove(index).ok_or_else(|| out_of_range(index, len))
    }

    async fn find(&self, id: Uuid) -> Result<Option<(usize, Post)>> {
        let posts = self.read()?;
        Ok(position(&posts, id).map(|i| (i, posts[i].clone())))
    }

    async fn replace(&self, id: Uuid, post: Post) -> Result<()> {
        let mut posts = self.write()?;
        let index = position(&posts, id).ok_or(AppError::PostNotFound(id))?;
        posts[index] = post;
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<Post> {
        let mut posts = self.write()?;
        let index = position(&posts, id).ok_or(AppError::PostNotFound(id))?;
        posts.remove(index).ok_or(AppError::PostNotFound(id))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    async fn all(&self) -> Result<Vec<Post>> {
        Ok(self.read()?.iter().cloned().collect())
    }
}
