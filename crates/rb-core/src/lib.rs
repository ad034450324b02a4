//! rusty-blog/crates/rb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Rusty-Blog.

pub mod accounts;
pub mod editor;
pub mod error;
pub mod models;
pub mod session;
pub mod traits;

// Re-exporting for easier access in other crates
pub use accounts::*;
pub use editor::*;
pub use error::*;
pub use models::*;
pub use session::*;
pub use traits::*;
