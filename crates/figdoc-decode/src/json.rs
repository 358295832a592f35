//! Parsing response bodies of any nesting depth.
//!
//! Two JSON levels (the node object and its `children` array) make up every
//! level of the document tree, so serde_json's default recursion limit would
//! cap documents at a few dozen levels. The parser here runs without that
//! limit on a growable stack, and parsed values are released without
//! recursive drops.

use figdoc_core::{DecodeError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Parse a complete JSON document.
pub(crate) fn parse(body: &str) -> Result<Value> {
    let mut de = serde_json::Deserializer::from_str(body);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de)).map_err(syntax_error)?;
    de.end().map_err(syntax_error)?;
    Ok(value)
}

/// Drop a value of any depth without recursing.
pub(crate) fn release(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}

fn syntax_error(err: serde_json::Error) -> DecodeError {
    DecodeError::Syntax {
        message: err.to_string(),
        line: err.line(),
        column: err.column(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_arrays(depth: usize) -> String {
        format!("{}{}", "[".repeat(depth), "]".repeat(depth))
    }

    #[test]
    fn test_parse_deep_arrays() {
        let value = parse(&nested_arrays(50_000)).unwrap();
        release(value);
    }

    #[test]
    fn test_trailing_characters() {
        assert!(matches!(
            parse("{} x").unwrap_err(),
            DecodeError::Syntax { line: 1, .. }
        ));
    }

    #[test]
    fn test_syntax_error_position() {
        match parse("{\n  \"a\": ]").unwrap_err() {
            DecodeError::Syntax { line, column, .. } => {
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }
}
