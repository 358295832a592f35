//! Error types for document decoding.

use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// Result type for figdoc decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// One step in a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key.
    Key(String),
    /// An array index.
    Index(usize),
}

/// The chain of keys and indices leading from the payload root to a field.
///
/// Renders as `$.document.children[0].blendMode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(SmallVec<[PathSegment; 8]>);

impl FieldPath {
    /// The empty path, pointing at the payload root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path with an object key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.0.push(PathSegment::Key(key.into()));
        next
    }

    /// Extend the path with an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.0.push(PathSegment::Index(index));
        next
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.0.push(PathSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.0.push(PathSegment::Index(index));
    }

    /// This path followed by `rest`.
    pub fn join(&self, rest: &FieldPath) -> Self {
        let mut joined = self.clone();
        joined.0.extend(rest.0.iter().cloned());
        joined
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The last key on the path, if any.
    pub fn last_key(&self) -> Option<&str> {
        self.0.iter().rev().find_map(|segment| match segment {
            PathSegment::Key(key) => Some(key.as_str()),
            PathSegment::Index(_) => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FieldPath(iter.into_iter().map(|s| PathSegment::Key(s.into())).collect())
    }
}

/// The JSON shape a decoder expected to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Number,
    Integer,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::Integer => "integer",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A single decode failure. Decoding stops at the first one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("missing required field at {path}")]
    MissingRequiredField { path: FieldPath },

    #[error("type mismatch at {path}: expected {expected}")]
    TypeMismatch { path: FieldPath, expected: ValueKind },

    #[error("unrecognized {kind} tag {value:?} at {path}")]
    UnrecognizedDiscriminator {
        path: FieldPath,
        /// Name of the closed set the tag was checked against.
        kind: &'static str,
        value: String,
    },

    #[error("malformed structure at {path}: {reason}")]
    MalformedStructure { path: FieldPath, reason: String },

    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
}

impl DecodeError {
    pub fn missing(path: FieldPath) -> Self {
        Self::MissingRequiredField { path }
    }

    pub fn mismatch(path: FieldPath, expected: ValueKind) -> Self {
        Self::TypeMismatch { path, expected }
    }

    pub fn unrecognized(path: FieldPath, kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnrecognizedDiscriminator {
            path,
            kind,
            value: value.into(),
        }
    }

    pub fn malformed(path: FieldPath, reason: impl Into<String>) -> Self {
        Self::MalformedStructure {
            path,
            reason: reason.into(),
        }
    }

    /// Re-root an error raised against a sub-value so its path starts at
    /// `prefix`.
    pub fn within(mut self, prefix: &FieldPath) -> Self {
        match &mut self {
            Self::MissingRequiredField { path }
            | Self::TypeMismatch { path, .. }
            | Self::UnrecognizedDiscriminator { path, .. }
            | Self::MalformedStructure { path, .. } => *path = prefix.join(path),
            Self::Syntax { .. } => {}
        }
        self
    }

    /// The path of the failing field. `None` for syntax errors.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::MissingRequiredField { path }
            | Self::TypeMismatch { path, .. }
            | Self::UnrecognizedDiscriminator { path, .. }
            | Self::MalformedStructure { path, .. } => Some(path),
            Self::Syntax { .. } => None,
        }
    }
}
