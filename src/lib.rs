pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::ServeArgs;

pub use app::{router::create_router, server::serve, state::AppState};
pub use config::{content::ContentConfig, secret::SecretConfig};
pub use core::catalog::ContentStore;
pub use utils::error::{Result, SiteError};
