//! # Domain Models
//!
//! These structs represent the core entities of Rusty-Blog.
//! Posts use UUID v7 so ids are stable and roughly time-ordered.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. Keyed by email; never mutated once created.
#[derive(Debug)]
pub struct Credential {
    pub email: String,
    pub secret: SecretString,
}

/// The editable part of a post, as submitted from the create/edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub tags: String,
    pub summary: String,
    /// Free-form date string chosen by the author (e.g. "2025-05-11")
    pub publish_date: String,
}

/// A blog entry owned by the account in `author`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub summary: String,
    pub publish_date: String,
    /// Email of the owning account (lookup only)
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Builds a brand new post with a fresh id.
    pub fn new(author: &str, draft: PostDraft) -> Self {
        Self::with_id(Uuid::now_v7(), Utc::now(), author, draft)
    }

    /// Rebuilds a post from a draft, keeping an existing identity.
    pub fn with_id(id: Uuid, created_at: DateTime<Utc>, author: &str, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            tags: draft.tags,
            summary: draft.summary,
            publish_date: draft.publish_date,
            author: author.to_string(),
            created_at,
        }
    }

    pub fn draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
            summary: self.summary.clone(),
            publish_date: self.publish_date.clone(),
        }
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        self.author == email
    }
}

/// Read-only showcase entry rendered below user posts in the feed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SamplePost {
    pub title: &'static str,
    pub tags: &'static str,
    pub content: &'static str,
    pub publish_date: &'static str,
}
