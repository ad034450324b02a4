//! # rb-api
//!
//! The web routing and orchestration layer for Rusty-Blog.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod samples;
pub mod session;

pub use error::ApiError;
pub use handlers::AppState;
pub use session::{session_middleware, BrowserSession, SESSION_COOKIE};

use actix_web::web;

/// Configures the routes for the blog.
///
/// Static files are mounted by the binary, which knows where they live.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/about", web::get().to(handlers::about))
        // Writing: one editable post per session
        .service(
            web::resource("/create")
                .route(web::get().to(handlers::create_form))
                .route(web::post().to(handlers::submit_post)),
        )
        .service(
            web::resource("/edit")
                .route(web::get().to(handlers::edit_form))
                .route(web::post().to(handlers::edit_post)),
        )
        .route("/delete/{index}", web::post().to(handlers::delete_post))
        .route("/browsepost", web::get().to(handlers::browse))
        // Accounts
        .service(
            web::resource("/sign_in")
                .route(web::get().to(handlers::sign_in_form))
                .route(web::post().to(handlers::sign_in)),
        )
        .service(
            web::resource("/sign_up")
                .route(web::get().to(handlers::sign_up_form))
                .route(web::post().to(handlers::sign_up)),
        );
}
