//! Decoding of design-file JSON into the figdoc document model.
//!
//! Input is the parsed body of a file response. Every node object carries a
//! `type` tag; the engine dispatches on it, decodes the node's attribute
//! groups, and descends into `children` for container kinds. The result is an
//! immutable [`Tree`], or the first [`DecodeError`] found, with the full path
//! of the offending field.
//!
//! # Example
//!
//! ```ignore
//! use figdoc_decode::{decode_file, Decoder, DecodeOptions};
//!
//! let file = decode_file(&body)?;
//! println!("{} nodes", file.document.node_count());
//!
//! let strict = Decoder::with_options(DecodeOptions::new().with_max_depth(64));
//! let file = strict.decode_file(&body)?;
//! ```

pub mod cursor;
mod attrs;
mod engine;
mod enums;
mod file;
mod json;
mod nodes;
mod options;
mod values;

#[cfg(test)]
mod fixtures;

use cursor::Field;
use figdoc_core::{File, Result, Tree};
use log::debug;
use serde_json::Value;

pub use options::DecodeOptions;

/// Decode a file response body with default options.
pub fn decode_file(body: &str) -> Result<File> {
    Decoder::new().decode_file(body)
}

/// Decode an already parsed file response with default options.
pub fn decode_file_value(value: &Value) -> Result<File> {
    Decoder::new().decode_file_value(value)
}

/// Decode a single node value and its descendants with default options.
pub fn decode_document_tree(value: &Value) -> Result<Tree> {
    Decoder::new().decode_tree(value)
}

/// A decoder with non-default [`DecodeOptions`].
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn decode_file(&self, body: &str) -> Result<File> {
        debug!("decoding file response ({} bytes)", body.len());
        let value = json::parse(body)?;
        let file = self.decode_file_value(&value);
        json::release(value);
        file
    }

    pub fn decode_file_value(&self, value: &Value) -> Result<File> {
        file::decode_file(Field::root(value), &self.options)
    }

    pub fn decode_tree(&self, value: &Value) -> Result<Tree> {
        engine::decode_tree(Field::root(value), &self.options)
    }
}
