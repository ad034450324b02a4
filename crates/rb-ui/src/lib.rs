//! # rb-ui
//!
//! askama page templates. Everything here takes plain `rb-core` data and
//! knows nothing about sessions or HTTP.

use askama::Template;
use rb_core::models::{Post, PostDraft, SamplePost};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// The create form; pre-filled when the author asked to edit.
#[derive(Template)]
#[template(path = "create.html")]
pub struct CreateTemplate<'a> {
    pub draft: &'a PostDraft,
    pub edit_mode: bool,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate<'a> {
    pub post: &'a Post,
}

/// Shown right after publishing.
#[derive(Template)]
#[template(path = "options.html")]
pub struct OptionsTemplate<'a> {
    pub latest: &'a Post,
}

/// One user post in the feed, with its current position.
pub struct FeedRow<'a> {
    pub index: usize,
    pub post: &'a Post,
    pub deletable: bool,
}

#[derive(Template)]
#[template(path = "browse.html")]
pub struct BrowseTemplate<'a> {
    pub rows: Vec<FeedRow<'a>>,
    pub samples: &'a [SamplePost],
}

impl<'a> BrowseTemplate<'a> {
    /// Delete buttons only appear on the viewer's own posts.
    pub fn new(posts: &'a [Post], viewer: Option<&str>, samples: &'a [SamplePost]) -> Self {
        let rows = posts
            .iter()
            .enumerate()
            .map(|(index, post)| FeedRow {
                index,
                post,
                deletable: viewer.is_some_and(|email| post.is_owned_by(email)),
            })
            .collect();
        Self { rows, samples }
    }
}

#[derive(Template)]
#[template(path = "sign_in.html")]
pub struct SignInTemplate<'a> {
    pub error: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "sign_up.html")]
pub struct SignUpTemplate;
