//! Endpoint URL building.

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::export::ImageExportRequest;
use url::Url;

/// Builds request URLs below a validated API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;
        let invalid = |reason: &str| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: reason.to_string(),
        };
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(invalid("scheme must be http or https"));
        }
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base"));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(invalid("URL must not carry a query or fragment"));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `GET files/:key`
    pub fn file(&self, key: &str) -> Result<Url> {
        self.build(&["files", key])
    }

    /// `GET files/:key/versions`
    pub fn file_versions(&self, key: &str) -> Result<Url> {
        self.build(&["files", key, "versions"])
    }

    /// `GET|POST files/:key/comments`
    pub fn file_comments(&self, key: &str) -> Result<Url> {
        self.build(&["files", key, "comments"])
    }

    /// `GET teams/:team_id/projects`
    pub fn team_projects(&self, team_id: &str) -> Result<Url> {
        self.build(&["teams", team_id, "projects"])
    }

    /// `GET projects/:project_id/files`
    pub fn project_files(&self, project_id: i64) -> Result<Url> {
        self.build(&["projects", &project_id.to_string(), "files"])
    }

    /// `GET images/:key?ids=..&scale=..&format=..`
    pub fn images(&self, key: &str, request: &ImageExportRequest) -> Result<Url> {
        let mut url = self.build(&["images", key])?;
        url.query_pairs_mut()
            .append_pair("ids", &request.joined_ids())
            .append_pair("scale", &request.scale().to_string())
            .append_pair("format", request.format().as_str());
        Ok(url)
    }

    fn build(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}
