//! Image export requests and responses.

use crate::error::{ApiError, Result};
use figdoc_core::{ExportFormat, NodeId};
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};

/// Raster or vector format of a rendered image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpg,
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    /// The `format` query value.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl TryFrom<ExportFormat> for ImageFormat {
    type Error = ApiError;

    fn try_from(format: ExportFormat) -> Result<Self> {
        match format {
            ExportFormat::Jpeg => Ok(ImageFormat::Jpg),
            ExportFormat::Png => Ok(ImageFormat::Png),
            ExportFormat::Svg => Ok(ImageFormat::Svg),
            ExportFormat::Pdf => Err(ApiError::UnsupportedExportFormat(format)),
        }
    }
}

/// Parameters of an image render request.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageExportRequest {
    ids: Vec<NodeId>,
    scale: f64,
    format: ImageFormat,
}

impl ImageExportRequest {
    pub const MIN_SCALE: f64 = 0.01;
    pub const MAX_SCALE: f64 = 4.0;

    /// Render the given nodes at scale 1 as PNG.
    pub fn new<I, T>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        let ids: Vec<NodeId> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Err(ApiError::EmptyNodeIds);
        }
        Ok(Self {
            ids,
            scale: 1.0,
            format: ImageFormat::default(),
        })
    }

    /// Set the render scale, clamped to the range the server accepts.
    pub fn with_scale(mut self, scale: f64) -> Result<Self> {
        if scale.is_nan() {
            return Err(ApiError::InvalidScale(scale));
        }
        let clamped = scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE);
        if clamped != scale {
            warn!("image export scale {} clamped to {}", scale, clamped);
        }
        self.scale = clamped;
        Ok(self)
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Use the format of a node's export setting.
    pub fn with_export_format(self, format: ExportFormat) -> Result<Self> {
        Ok(self.with_format(ImageFormat::try_from(format)?))
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// The `ids` query value.
    pub fn joined_ids(&self) -> String {
        self.ids
            .iter()
            .map(NodeId::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Response of an image render request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub err: Option<String>,
    /// Rendered image URL per node id; `None` when a node failed to render.
    #[serde(default)]
    pub images: IndexMap<String, Option<String>>,
}

impl ImagesResponse {
    /// The image URLs, or the server's error message.
    pub fn into_images(self) -> Result<IndexMap<String, Option<String>>> {
        match self.err {
            Some(message) => Err(ApiError::Server(message)),
            None => Ok(self.images),
        }
    }
}

pub fn decode_images(body: &str) -> Result<ImagesResponse> {
    Ok(serde_json::from_str(body)?)
}
