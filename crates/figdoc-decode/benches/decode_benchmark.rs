//! Decoder benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figdoc_decode::{decode_document_tree, decode_file};
use serde_json::{json, Value};

fn rectangle(id: usize) -> Value {
    json!({
        "type": "RECTANGLE",
        "id": format!("2:{}", id),
        "name": "Rectangle",
        "blendMode": "NORMAL",
        "constraints": {"horizontal": "LEFT", "vertical": "TOP"},
        "absoluteBoundingBox": {"x": 0, "y": 0, "width": 40, "height": 40},
        "fills": [{"type": "SOLID", "color": {"r": 0.2, "g": 0.5, "b": 0.9, "a": 1}}],
        "strokes": [],
        "strokeWeight": 1,
        "strokeAlign": "INSIDE",
        "cornerRadius": 4
    })
}

fn frame(id: usize, children: Vec<Value>) -> Value {
    json!({
        "type": "FRAME",
        "id": format!("1:{}", id),
        "name": "Card",
        "backgroundColor": {"r": 1, "g": 1, "b": 1, "a": 1},
        "blendMode": "PASS_THROUGH",
        "constraints": {"horizontal": "LEFT", "vertical": "TOP"},
        "absoluteBoundingBox": {"x": 0, "y": 0, "width": 320, "height": 200},
        "clipsContent": true,
        "layoutMode": "VERTICAL",
        "itemSpacing": 8,
        "children": children
    })
}

/// A file with `frames` frames of `per_frame` rectangles each.
fn file_body(frames: usize, per_frame: usize) -> String {
    let frames: Vec<Value> = (0..frames)
        .map(|f| frame(f, (0..per_frame).map(|r| rectangle(f * per_frame + r)).collect()))
        .collect();
    json!({
        "name": "Bench",
        "schemaVersion": 0,
        "thumbnailUrl": "",
        "components": {},
        "document": {
            "type": "DOCUMENT",
            "id": "0:0",
            "name": "Document",
            "children": [{
                "type": "CANVAS",
                "id": "0:1",
                "name": "Page 1",
                "backgroundColor": {"r": 0.9, "g": 0.9, "b": 0.9, "a": 1},
                "children": frames
            }]
        }
    })
    .to_string()
}

fn decode_small(c: &mut Criterion) {
    let body = file_body(4, 8);
    c.bench_function("decode_small", |b| b.iter(|| decode_file(black_box(&body))));
}

fn decode_large(c: &mut Criterion) {
    let body = file_body(200, 50);
    c.bench_function("decode_large", |b| b.iter(|| decode_file(black_box(&body))));
}

fn decode_tree_only(c: &mut Criterion) {
    let value = frame(0, (0..500).map(rectangle).collect());
    c.bench_function("decode_tree_only", |b| {
        b.iter(|| decode_document_tree(black_box(&value)))
    });
}

criterion_group!(benches, decode_small, decode_large, decode_tree_only);
criterion_main!(benches);
