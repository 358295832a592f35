//! Minimal well-formed node payloads for tests.

use serde_json::{json, Value};

pub fn document(id: &str, children: Vec<Value>) -> Value {
    json!({
        "type": "DOCUMENT",
        "id": id,
        "name": "Document",
        "children": children
    })
}

pub fn canvas(id: &str, children: Vec<Value>) -> Value {
    json!({
        "type": "CANVAS",
        "id": id,
        "name": "Page 1",
        "backgroundColor": {"r": 0.9, "g": 0.9, "b": 0.9, "a": 1},
        "children": children
    })
}

/// A frame-like node: `FRAME`, `GROUP`, `COMPONENT`, or `INSTANCE` (which
/// also needs a `componentId`).
pub fn frame(kind: &str, id: &str, children: Vec<Value>) -> Value {
    let mut value = json!({
        "type": kind,
        "id": id,
        "name": id,
        "backgroundColor": {"r": 1, "g": 1, "b": 1, "a": 1},
        "blendMode": "PASS_THROUGH",
        "constraints": {"horizontal": "LEFT", "vertical": "TOP"},
        "absoluteBoundingBox": {"x": 0, "y": 0, "width": 100, "height": 100},
        "clipsContent": true,
        "children": children
    });
    if kind == "INSTANCE" {
        value["componentId"] = json!("9:9");
    }
    value
}

/// A shape-like node of any vector-family kind.
pub fn shape(kind: &str, id: &str) -> Value {
    json!({
        "type": kind,
        "id": id,
        "name": id,
        "blendMode": "NORMAL",
        "constraints": {"horizontal": "LEFT", "vertical": "TOP"},
        "absoluteBoundingBox": {"x": 0, "y": 0, "width": 10, "height": 10},
        "strokes": [],
        "strokeWeight": 1,
        "strokeAlign": "CENTER"
    })
}

pub fn boolean_group(id: &str, operation: &str, children: Vec<Value>) -> Value {
    let mut value = shape("BOOLEAN_OPERATION", id);
    value["booleanOperation"] = json!(operation);
    value["children"] = Value::Array(children);
    value
}

pub fn text(id: &str, characters: &str, overrides: Vec<u32>, table: Value) -> Value {
    let mut value = shape("TEXT", id);
    value["characters"] = json!(characters);
    value["style"] = json!({
        "fontFamily": "Inter",
        "fontWeight": 400,
        "fontSize": 12,
        "textAlignHorizontal": "LEFT",
        "textAlignVertical": "TOP",
        "letterSpacing": 0,
        "lineHeightPx": 14.5
    });
    value["characterStyleOverrides"] = json!(overrides);
    value["styleOverrideTable"] = table;
    value
}

pub fn slice(id: &str) -> Value {
    json!({
        "type": "SLICE",
        "id": id,
        "name": id,
        "absoluteBoundingBox": {"x": 5, "y": 5, "width": 20, "height": 20}
    })
}

/// A minimal `GET /files/:key` response body around `document`.
pub fn file_body(document: Value) -> Value {
    json!({
        "name": "Design System",
        "lastModified": "2024-03-01T12:00:00Z",
        "thumbnailUrl": "https://example.com/thumb.png",
        "version": "1234",
        "schemaVersion": 0,
        "document": document,
        "components": {
            "9:9": {"name": "Button", "description": "Primary button"}
        }
    })
}
