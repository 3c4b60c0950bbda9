//! Build-time configuration.
//!
//! The API base URL is baked in when the crate is compiled: set
//! `TODO_API_BASE_URL` in the build environment to point at another server.
//! There is no runtime override.

/// Address used when `TODO_API_BASE_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// The API base URL this build talks to.
pub fn base_url() -> &'static str {
    option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}
