//! Decoder configuration.

use serde::{Deserialize, Serialize};

/// Options for decoding documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Deepest allowed node, counting the root as depth 0. `None` accepts
    /// any depth.
    pub max_depth: Option<usize>,
    /// Pad a short `characterStyleOverrides` array with zeros instead of
    /// rejecting it. The server omits trailing zeros.
    pub pad_style_overrides: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            pad_style_overrides: true,
        }
    }
}

impl DecodeOptions {
    /// Create default decode options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject documents nested deeper than `depth`.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Require `characterStyleOverrides` to cover every character.
    pub fn strict_style_overrides(mut self) -> Self {
        self.pad_style_overrides = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DecodeOptions::new();
        assert_eq!(options.max_depth, None);
        assert!(options.pad_style_overrides);
    }

    #[test]
    fn test_builder() {
        let options = DecodeOptions::new()
            .with_max_depth(32)
            .strict_style_overrides();
        assert_eq!(options.max_depth, Some(32));
        assert!(!options.pad_style_overrides);
    }

    #[test]
    fn test_from_partial_json() {
        let options: DecodeOptions = serde_json::from_str(r#"{"max_depth": 8}"#).unwrap();
        assert_eq!(options.max_depth, Some(8));
        assert!(options.pad_style_overrides);
    }
}
