pub mod analyzer;
pub mod bookmarks;
pub mod classify;
pub mod clients;
pub mod config;
pub mod error;
pub mod extract;
pub mod framework;
pub mod http;
pub mod prompt;
pub mod schemas;
pub mod validate;

// Load env from .env if present, silently ignore if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
