//! Request building and response records for the design-file REST API.
//!
//! This crate performs no I/O. It builds authenticated request URLs and
//! decodes response bodies; sending requests is left to whatever HTTP client
//! the caller already uses.
//!
//! # Example
//!
//! ```ignore
//! use figdoc_api::{decode_file_response, ApiConfig, Auth, Endpoints};
//!
//! let endpoints = Endpoints::new(&ApiConfig::default())?;
//! let (name, value) = Auth::personal(token).header();
//! let body = http_get(endpoints.file("abc123")?, name, &value)?;
//! let file = decode_file_response(&body)?;
//! ```

mod auth;
mod config;
mod endpoints;
mod error;
mod export;
mod records;

pub use auth::Auth;
pub use config::ApiConfig;
pub use endpoints::Endpoints;
pub use error::{ApiError, Result};
pub use export::{decode_images, ImageExportRequest, ImageFormat, ImagesResponse};
pub use records::{
    decode_comments, decode_project_files, decode_projects, decode_versions, Comment,
    CommentRequest, Project, ProjectFile, User, Version,
};

use figdoc_core::File;

/// Decode the body of a `files/:key` response.
pub fn decode_file_response(body: &str) -> Result<File> {
    Ok(figdoc_decode::decode_file(body)?)
}
