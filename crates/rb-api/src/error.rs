//! Maps domain failures onto HTTP responses.

use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use rb_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("session could not be saved: {0}")]
    Session(#[from] actix_session::SessionInsertError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::App(AppError::NotAuthenticated) => StatusCode::SEE_OTHER,
            ApiError::App(AppError::Internal(_)) | ApiError::Render(_) | ApiError::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            // User-facing refusals are shown as a plain page, not an HTTP error.
            ApiError::App(_) => StatusCode::OK,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::App(AppError::NotAuthenticated) => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/sign_in"))
                .finish(),
            ApiError::App(AppError::Internal(_)) | ApiError::Render(_) | ApiError::Session(_) => {
                error!("{}", self);
                HttpResponse::InternalServerError().finish()
            }
            ApiError::App(e) => HttpResponse::Ok()
                .content_type(ContentType::plaintext())
                .body(e.to_string()),
        }
    }
}
