//! # rb-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the core
//! services. Handlers that change session state call
//! [`BrowserSession::save`] so the browser receives the updated cookie.

use std::sync::Arc;

use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use askama::Template;
use log::debug;
use rb_core::accounts::{AccountService, SignUp};
use rb_core::editor::EditController;
use rb_core::error::AppError;
use rb_core::models::{PostDraft, SamplePost};
use rb_core::traits::{IdentityRepo, PostRepo};
use rb_ui::{
    AboutTemplate, BrowseTemplate, CreateTemplate, EditTemplate, IndexTemplate, OptionsTemplate,
    SignInTemplate, SignUpTemplate,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::samples::SAMPLE_POSTS;
use crate::session::BrowserSession;

/// State shared across all Actix-web workers.
pub struct AppState {
    pub accounts: AccountService,
    pub editor: EditController,
    pub samples: &'static [SamplePost],
}

impl AppState {
    pub fn new(identities: Arc<dyn IdentityRepo>, posts: Arc<dyn PostRepo>) -> Self {
        Self {
            accounts: AccountService::new(identities),
            editor: EditController::new(posts),
            samples: SAMPLE_POSTS,
        }
    }
}

type Page = Result<HttpResponse, ApiError>;

/// Fields of the create and edit forms.
#[derive(Debug, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default, rename = "excerpt")]
    pub summary: String,
    #[serde(default)]
    pub publish_date: String,
}

impl From<PostForm> for PostDraft {
    fn from(form: PostForm) -> Self {
        PostDraft {
            title: form.title,
            content: form.content,
            tags: form.tags,
            summary: form.summary,
            publish_date: form.publish_date,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateQuery {
    pub edit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

// `username` is shown on the form but not kept.
#[derive(Debug, Deserialize)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

fn message(text: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(text.to_string())
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Signed-in guard: anonymous sessions, and sessions whose account is gone,
/// are sent to the sign-in page.
async fn require_member(data: &AppState, session: &BrowserSession) -> Result<(), ApiError> {
    session.context.require_identity()?;
    if !data.accounts.session_is_valid(&session.context).await? {
        return Err(AppError::NotAuthenticated.into());
    }
    Ok(())
}

pub async fn index() -> Page {
    Ok(html(IndexTemplate.render()?))
}

pub async fn about() -> Page {
    Ok(html(AboutTemplate.render()?))
}

/// `GET /create[?edit=true]`
pub async fn create_form(
    data: web::Data<AppState>,
    session: BrowserSession,
    query: web::Query<CreateQuery>,
) -> Page {
    require_member(&data, &session).await?;

    // Without an editable post, `?edit=true` falls back to the blank form.
    let editing = if query.edit.as_deref() == Some("true") {
        match data.editor.request_edit(&session.context).await {
            Ok(post) => Some(post.draft()),
            Err(AppError::EditNotAllowed) => None,
            Err(e) => return Err(e.into()),
        }
    } else {
        None
    };

    let edit_mode = editing.is_some();
    let draft = editing.unwrap_or_default();
    Ok(html(CreateTemplate { draft: &draft, edit_mode }.render()?))
}

/// `POST /create`: creates the session's post, or amends it if it already has one.
pub async fn submit_post(
    data: web::Data<AppState>,
    mut session: BrowserSession,
    form: web::Form<PostForm>,
) -> Page {
    require_member(&data, &session).await?;

    let post = data
        .editor
        .submit(&mut session.context, form.into_inner().into())
        .await?;
    session.save()?;
    Ok(html(OptionsTemplate { latest: &post }.render()?))
}

/// `GET /edit`
pub async fn edit_form(data: web::Data<AppState>, session: BrowserSession) -> Page {
    require_member(&data, &session).await?;

    let post = data.editor.request_edit(&session.context).await?;
    Ok(html(EditTemplate { post: &post }.render()?))
}

/// `POST /edit`: never creates a post.
pub async fn edit_post(
    data: web::Data<AppState>,
    session: BrowserSession,
    form: web::Form<PostForm>,
) -> Page {
    require_member(&data, &session).await?;

    match data.editor.amend(&session.context, form.into_inner().into()).await {
        Ok(_) => Ok(see_other("/browsepost")),
        Err(AppError::EditNotAllowed) => Ok(message("Editing old blog is not allowed.")),
        Err(e) => Err(e.into()),
    }
}

/// `POST /delete/{index}`: refusals are silent, the feed is shown either way.
pub async fn delete_post(
    data: web::Data<AppState>,
    mut session: BrowserSession,
    path: web::Path<String>,
) -> Page {
    require_member(&data, &session).await?;

    let Ok(index) = path.parse::<usize>() else {
        debug!("ignoring delete of non-numeric index {:?}", path.as_str());
        return Ok(see_other("/browsepost"));
    };

    match data.editor.request_delete(&mut session.context, index).await {
        Ok(_) => {}
        Err(
            e @ (AppError::IndexOutOfRange { .. } | AppError::NotPostOwner | AppError::PostNotFound(_)),
        ) => debug!("delete of index {} refused: {}", index, e),
        Err(e) => return Err(e.into()),
    }
    session.save()?;
    Ok(see_other("/browsepost"))
}

/// `GET /browsepost`
pub async fn browse(data: web::Data<AppState>, session: BrowserSession) -> Page {
    let posts = data.editor.feed().await?;
    let viewer = session.context.identity.as_deref();
    Ok(html(BrowseTemplate::new(&posts, viewer, data.samples).render()?))
}

pub async fn sign_in_form(session: BrowserSession) -> Page {
    if session.context.is_signed_in() {
        return Ok(see_other("/create"));
    }
    Ok(html(SignInTemplate { error: None }.render()?))
}

pub async fn sign_in(
    data: web::Data<AppState>,
    mut session: BrowserSession,
    form: web::Form<SignInForm>,
) -> Page {
    match data
        .accounts
        .sign_in(&mut session.context, &form.email, &form.password)
        .await
    {
        Ok(()) => {
            session.save()?;
            Ok(see_other("/create"))
        }
        Err(e @ AppError::InvalidCredentials) => {
            let error = e.to_string();
            Ok(html(SignInTemplate { error: Some(&error) }.render()?))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn sign_up_form(session: BrowserSession) -> Page {
    if session.context.is_signed_in() {
        return Ok(see_other("/create"));
    }
    Ok(html(SignUpTemplate.render()?))
}

pub async fn sign_up(
    data: web::Data<AppState>,
    mut session: BrowserSession,
    form: web::Form<SignUpForm>,
) -> Page {
    let form = form.into_inner();
    data.accounts
        .sign_up(
            &mut session.context,
            SignUp {
                email: form.email,
                password: form.password,
                confirm_password: form.confirm_password,
            },
        )
        .await?;
    session.save()?;
    Ok(see_other("/create"))
}
