//! # Rusty-Blog Binary
//!
//! The entry point that assembles the application based on compile-time features.

mod config;

use std::sync::Arc;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use rb_api::handlers::AppState;
use rb_api::middleware::{security_headers, standard_middleware};
use rb_api::session_middleware;

use crate::config::Settings;

#[cfg(feature = "db-memory")]
use rb_db_memory::{MemoryIdentityRepo, MemoryPostRepo};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::load()?;
    let session_key = settings.session_key()?;

    // 1. Initialize storage implementations
    #[cfg(feature = "db-memory")]
    let (identities, posts) = (
        Arc::new(MemoryIdentityRepo::new()),
        Arc::new(MemoryPostRepo::new()),
    );

    // 2. Wrap in AppState (dynamic dispatch keeps storage swappable)
    let state = web::Data::new(AppState::new(identities, posts));

    log::info!(
        "Rusty-Blog starting on http://{}:{}",
        settings.host,
        settings.port
    );

    let static_dir = settings.static_dir.clone();
    let secure_cookies = settings.secure_cookies;
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(session_middleware(session_key.clone(), secure_cookies))
            .wrap(security_headers())
            .wrap(standard_middleware())
            .service(Files::new("/static", &static_dir))
            .configure(rb_api::configure_routes)
    })
    .bind(settings.bind_addr())?
    .run()
    .await?;

    Ok(())
}
