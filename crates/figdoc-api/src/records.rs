//! Flat response records for comments, versions, and projects.
//!
//! These shapes carry no nested node data, so they decode straight through
//! serde.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub handle: String,
    pub img_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub message: String,
    pub file_key: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub user: User,
    pub created_at: String,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    /// Where the comment is pinned; shape varies with the target.
    #[serde(default)]
    pub client_meta: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: String,
    pub created_at: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub last_modified: String,
}

/// A project of a team.
///
/// Read from a `key` field holding an integer, in a list under `files`. This
/// mirrors what existing clients expect from the team projects endpoint, not
/// its documented `projects`/`id` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "key")]
    pub id: i64,
    pub name: String,
}

/// Body of a new comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_meta: Option<Value>,
}

impl CommentRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            client_meta: None,
        }
    }

    /// Pin the comment; `meta` is passed through unchanged.
    pub fn with_client_meta(mut self, meta: Value) -> Self {
        self.client_meta = Some(meta);
        self
    }

    pub fn to_body(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Deserialize)]
struct Comments {
    comments: Vec<Comment>,
}

#[derive(Deserialize)]
struct Versions {
    versions: Vec<Version>,
}

#[derive(Deserialize)]
struct Projects {
    files: Vec<Project>,
}

#[derive(Deserialize)]
struct ProjectFiles {
    files: Vec<ProjectFile>,
}

pub fn decode_comments(body: &str) -> Result<Vec<Comment>> {
    Ok(serde_json::from_str::<Comments>(body)?.comments)
}

pub fn decode_versions(body: &str) -> Result<Vec<Version>> {
    Ok(serde_json::from_str::<Versions>(body)?.versions)
}

pub fn decode_projects(body: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str::<Projects>(body)?.files)
}

pub fn decode_project_files(body: &str) -> Result<Vec<ProjectFile>> {
    Ok(serde_json::from_str::<ProjectFiles>(body)?.files)
}
