//! Core types for figdoc: the document tree model of a design file.
//!
//! This crate provides the types every other figdoc crate builds on:
//! - Closed tag enumerations (blend modes, constraints, grid patterns, ...)
//! - Value records (colors, rectangles, paints, effects, text styles)
//! - Attribute groups shared between node kinds
//! - The [`Node`] sum type and the immutable [`Tree`]
//! - The decoded [`File`] and the [`DecodeError`] taxonomy
//!
//! It has no JSON dependency; decoding lives in `figdoc-decode`.

pub mod attrs;
pub mod enums;
pub mod errors;
pub mod file;
pub mod node;
pub mod tree;
pub mod types;

pub use attrs::*;
pub use enums::*;
pub use errors::*;
pub use file::*;
pub use node::*;
pub use tree::*;
pub use types::*;
