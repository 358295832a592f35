//! Per-kind node decoders.
//!
//! Each decoder composes the shared attribute groups in a fixed order and
//! adds its kind-specific fields. None of them look at `children`; that is
//! the engine's job.

use crate::attrs;
use crate::cursor::Object;
use crate::options::DecodeOptions;
use crate::values;
use figdoc_core::{
    BooleanGroupNode, CanvasNode, DocumentNode, FrameNode, GroupNode, InstanceNode, Node,
    NodeId, NodeKind, RectangleNode, Result, SliceNode, TextNode, TextStyleOverride, VectorNode,
};
use log::debug;
use std::collections::BTreeMap;

/// Decode the payload of a node whose `type` has already been read.
pub fn decode_node(kind: NodeKind, obj: &Object<'_>, options: &DecodeOptions) -> Result<Node> {
    Ok(match kind {
        NodeKind::Document => Node::Document(document(obj)?),
        NodeKind::Canvas => Node::Canvas(canvas(obj)?),
        NodeKind::Frame => Node::Frame(frame(obj)?),
        NodeKind::Group => Node::Group(group(obj)?),
        NodeKind::BooleanGroup => Node::BooleanGroup(boolean_group(obj)?),
        NodeKind::Vector => Node::Vector(vector(obj)?),
        NodeKind::Star => Node::Star(vector(obj)?),
        NodeKind::Line => Node::Line(vector(obj)?),
        NodeKind::Ellipse => Node::Ellipse(vector(obj)?),
        NodeKind::RegularPolygon => Node::RegularPolygon(vector(obj)?),
        NodeKind::Rectangle => Node::Rectangle(rectangle(obj)?),
        NodeKind::Slice => Node::Slice(slice(obj)?),
        NodeKind::Text => Node::Text(text(obj, options)?),
        NodeKind::Component => Node::Component(frame(obj)?),
        NodeKind::Instance => Node::Instance(instance(obj)?),
    })
}

fn document(obj: &Object<'_>) -> Result<DocumentNode> {
    Ok(DocumentNode {
        identity: attrs::identity(obj)?,
    })
}

fn canvas(obj: &Object<'_>) -> Result<CanvasNode> {
    Ok(CanvasNode {
        identity: attrs::identity(obj)?,
        appearance: attrs::appearance(obj)?,
    })
}

fn frame(obj: &Object<'_>) -> Result<FrameNode> {
    Ok(FrameNode {
        identity: attrs::identity(obj)?,
        appearance: attrs::appearance(obj)?,
        blending: attrs::blending(obj)?,
        geometry: attrs::geometry(obj)?,
        constraints: attrs::layout_constraints(obj)?,
        container: attrs::container(obj)?,
        auto_layout: attrs::auto_layout(obj)?,
    })
}

fn group(obj: &Object<'_>) -> Result<GroupNode> {
    Ok(GroupNode {
        identity: attrs::identity(obj)?,
        appearance: attrs::appearance(obj)?,
        blending: attrs::blending(obj)?,
        geometry: attrs::geometry(obj)?,
        constraints: attrs::layout_constraints(obj)?,
        container: attrs::container(obj)?,
    })
}

fn instance(obj: &Object<'_>) -> Result<InstanceNode> {
    let frame = frame(obj)?;
    Ok(InstanceNode {
        frame,
        component_id: NodeId(obj.string("componentId")?),
    })
}

fn vector(obj: &Object<'_>) -> Result<VectorNode> {
    Ok(VectorNode {
        identity: attrs::identity(obj)?,
        export_settings: attrs::export_settings(obj)?,
        blending: attrs::blending(obj)?,
        geometry: attrs::geometry(obj)?,
        constraints: attrs::layout_constraints(obj)?,
        paints: attrs::paints(obj)?,
    })
}

fn boolean_group(obj: &Object<'_>) -> Result<BooleanGroupNode> {
    let vector = vector(obj)?;
    Ok(BooleanGroupNode {
        vector,
        operation: obj.tag("booleanOperation")?,
    })
}

fn rectangle(obj: &Object<'_>) -> Result<RectangleNode> {
    let vector = vector(obj)?;
    Ok(RectangleNode {
        vector,
        corner_radius: obj.f64_or("cornerRadius", 0.0)?,
    })
}

fn slice(obj: &Object<'_>) -> Result<SliceNode> {
    Ok(SliceNode {
        identity: attrs::identity(obj)?,
        export_settings: attrs::export_settings(obj)?,
        bounding_box: values::rect(obj.required("absoluteBoundingBox")?)?,
    })
}

fn text(obj: &Object<'_>, options: &DecodeOptions) -> Result<TextNode> {
    let vector = vector(obj)?;
    let characters = obj.string("characters")?;
    let style = values::text_style(obj.required("style")?)?;

    let overrides_field = obj.required("characterStyleOverrides")?;
    let mut character_style_overrides = overrides_field.list(|item| item.as_u32())?;
    // The server indexes overrides by UTF-16 code unit, so characters outside
    // the BMP take two entries.
    let char_count = characters.encode_utf16().count();
    if character_style_overrides.len() > char_count {
        return Err(overrides_field.malformed(format!(
            "{} style overrides for {} characters",
            character_style_overrides.len(),
            char_count
        )));
    }
    if character_style_overrides.len() < char_count {
        if !options.pad_style_overrides {
            return Err(overrides_field.malformed(format!(
                "{} style overrides for {} characters",
                character_style_overrides.len(),
                char_count
            )));
        }
        debug!(
            "padding {} style overrides to {} characters at {}",
            character_style_overrides.len(),
            char_count,
            overrides_field.path()
        );
        character_style_overrides.resize(char_count, 0);
    }

    let style_override_table = style_override_table(&obj.object("styleOverrideTable")?)?;

    Ok(TextNode {
        vector,
        characters,
        style,
        character_style_overrides,
        style_override_table,
    })
}

/// Convert the string-keyed override object into a sparse integer-keyed map.
fn style_override_table(table: &Object<'_>) -> Result<BTreeMap<u32, TextStyleOverride>> {
    table
        .entries()
        .map(|(key, field)| {
            let index = key
                .parse::<u32>()
                .map_err(|_| field.malformed(format!("override key {:?} is not an integer", key)))?;
            Ok((index, values::text_style_override(field)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Field;
    use crate::fixtures;
    use figdoc_core::{
        Appearance, BlendMode, Blending, BooleanOperation, Color, ContainerAttrs, DecodeError,
        FieldPath, Geometry, HorizontalConstraint, Identity, LayoutConstraints, LayoutMode, Rect,
        StrokeAlign, Tagged, VerticalConstraint,
    };
    use serde_json::{json, Value};

    fn decode(value: &Value) -> Result<Node> {
        decode_with(value, &DecodeOptions::default())
    }

    fn decode_with(value: &Value, options: &DecodeOptions) -> Result<Node> {
        let obj = Field::root(value).object()?;
        let kind: NodeKind = obj.tag("type")?;
        decode_node(kind, &obj, options)
    }

    #[test]
    fn test_every_kind_decodes_to_its_variant() {
        let samples = vec![
            fixtures::document("0:0", vec![]),
            fixtures::canvas("0:1", vec![]),
            fixtures::frame("FRAME", "1:1", vec![]),
            fixtures::frame("GROUP", "1:2", vec![]),
            fixtures::boolean_group("1:3", "UNION", vec![]),
            fixtures::shape("VECTOR", "1:4"),
            fixtures::shape("STAR", "1:5"),
            fixtures::shape("LINE", "1:6"),
            fixtures::shape("ELLIPSE", "1:7"),
            fixtures::shape("REGULAR_POLYGON", "1:8"),
            fixtures::shape("RECTANGLE", "1:9"),
            fixtures::slice("1:10"),
            fixtures::text("1:11", "", vec![], json!({})),
            fixtures::frame("COMPONENT", "1:12", vec![]),
            fixtures::frame("INSTANCE", "1:13", vec![]),
        ];
        assert_eq!(samples.len(), NodeKind::VARIANTS.len());
        for sample in &samples {
            let node = decode(sample).unwrap();
            assert_eq!(node.kind().tag(), sample["type"].as_str().unwrap());
            assert_eq!(node.id().as_str(), sample["id"].as_str().unwrap());
        }
    }

    #[test]
    fn test_container_fields_match_input() {
        let Node::Canvas(canvas) = decode(&fixtures::canvas("0:1", vec![])).unwrap() else {
            panic!("expected a canvas");
        };
        assert_eq!(
            canvas,
            CanvasNode {
                identity: Identity::new("0:1", "Page 1"),
                appearance: Appearance {
                    background_color: Color::rgba(0.9, 0.9, 0.9, 1.0),
                    export_settings: vec![],
                },
            }
        );

        let expected = FrameNode {
            identity: Identity::new("1:1", "1:1"),
            appearance: Appearance {
                background_color: Color::WHITE,
                export_settings: vec![],
            },
            blending: Blending {
                blend_mode: BlendMode::PassThrough,
                effects: vec![],
                is_mask: false,
            },
            geometry: Geometry {
                bounding_box: Rect::new(0.0, 0.0, 100.0, 100.0),
                preserve_ratio: false,
            },
            constraints: LayoutConstraints {
                horizontal: HorizontalConstraint::Left,
                vertical: VerticalConstraint::Top,
                transition_to: None,
                opacity: 1.0,
                layout_align: None,
            },
            container: ContainerAttrs {
                clip_content: true,
                layout_grids: vec![],
            },
            auto_layout: None,
        };
        let Node::Frame(frame) = decode(&fixtures::frame("FRAME", "1:1", vec![])).unwrap() else {
            panic!("expected a frame");
        };
        assert_eq!(frame, expected);
        let Node::Component(component) =
            decode(&fixtures::frame("COMPONENT", "1:1", vec![])).unwrap()
        else {
            panic!("expected a component");
        };
        assert_eq!(component, expected);
    }

    #[test]
    fn test_rectangle_defaults() {
        let value = json!({
            "type": "RECTANGLE",
            "id": "1:1",
            "name": "R",
            "blendMode": "NORMAL",
            "constraints": {"horizontal": "LEFT", "vertical": "TOP"},
            "absoluteBoundingBox": {"x": 0, "y": 0, "width": 10, "height": 10},
            "strokes": [],
            "strokeWeight": 1,
            "strokeAlign": "CENTER"
        });
        let Node::Rectangle(rect) = decode(&value).unwrap() else {
            panic!("expected a rectangle");
        };
        let v = &rect.vector;
        assert_eq!(v.identity.id.as_str(), "1:1");
        assert_eq!(v.identity.name, "R");
        assert!(v.identity.is_visible);
        assert!(v.export_settings.is_empty());
        assert_eq!(v.blending.blend_mode, BlendMode::Normal);
        assert!(v.blending.effects.is_empty());
        assert!(!v.blending.is_mask);
        assert!(!v.geometry.preserve_ratio);
        assert_eq!(v.geometry.bounding_box, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(v.constraints.horizontal, HorizontalConstraint::Left);
        assert_eq!(v.constraints.vertical, VerticalConstraint::Top);
        assert_eq!(v.constraints.transition_to, None);
        assert_eq!(v.constraints.opacity, 1.0);
        assert_eq!(v.constraints.layout_align, None);
        assert!(v.paints.fills.is_empty());
        assert!(v.paints.strokes.is_empty());
        assert_eq!(v.paints.stroke_weight, 1.0);
        assert_eq!(v.paints.stroke_align, StrokeAlign::Center);
        assert_eq!(rect.corner_radius, 0.0);
    }

    #[test]
    fn test_frame_group_and_auto_layout() {
        let mut value = fixtures::frame("FRAME", "2:1", vec![]);
        value["layoutMode"] = json!("HORIZONTAL");
        value["itemSpacing"] = json!(4);
        let Node::Frame(frame) = decode(&value).unwrap() else {
            panic!("expected a frame");
        };
        let layout = frame.auto_layout.unwrap();
        assert_eq!(layout.mode, LayoutMode::Horizontal);
        assert_eq!(layout.item_spacing, 4.0);
        assert!(frame.container.clip_content);
        assert!(frame.container.layout_grids.is_empty());

        let Node::Frame(plain) = decode(&fixtures::frame("FRAME", "2:2", vec![])).unwrap() else {
            panic!("expected a frame");
        };
        assert_eq!(plain.auto_layout, None);

        // Groups never read layoutMode.
        let mut group = fixtures::frame("GROUP", "2:3", vec![]);
        group["layoutMode"] = json!("SIDEWAYS");
        assert!(matches!(decode(&group).unwrap(), Node::Group(_)));
    }

    #[test]
    fn test_instance_requires_component_id() {
        let Node::Instance(instance) = decode(&fixtures::frame("INSTANCE", "3:1", vec![])).unwrap()
        else {
            panic!("expected an instance");
        };
        assert_eq!(instance.component_id.as_str(), "9:9");

        let mut value = fixtures::frame("INSTANCE", "3:2", vec![]);
        value.as_object_mut().unwrap().remove("componentId");
        assert_eq!(
            decode(&value).unwrap_err(),
            DecodeError::missing(FieldPath::root().key("componentId"))
        );
    }

    #[test]
    fn test_boolean_operation() {
        let value = fixtures::boolean_group("4:1", "SUBTRACT", vec![]);
        let Node::BooleanGroup(group) = decode(&value).unwrap() else {
            panic!("expected a boolean group");
        };
        assert_eq!(group.operation, BooleanOperation::Subtract);

        let bad = fixtures::boolean_group("4:2", "XOR", vec![]);
        assert_eq!(
            decode(&bad).unwrap_err(),
            DecodeError::unrecognized(FieldPath::root().key("booleanOperation"), "boolean operation", "XOR")
        );
    }

    #[test]
    fn test_slice_ignores_paint_fields() {
        let Node::Slice(slice) = decode(&fixtures::slice("5:1")).unwrap() else {
            panic!("expected a slice");
        };
        assert_eq!(slice.bounding_box, Rect::new(5.0, 5.0, 20.0, 20.0));
        assert!(slice.export_settings.is_empty());
    }

    #[test]
    fn test_canvas_requires_background() {
        let mut value = fixtures::canvas("0:1", vec![]);
        value.as_object_mut().unwrap().remove("backgroundColor");
        assert_eq!(
            decode(&value).unwrap_err(),
            DecodeError::missing(FieldPath::root().key("backgroundColor"))
        );
    }

    #[test]
    fn test_text_overrides_preserved() {
        let value = fixtures::text("6:1", "abc", vec![0, 0, 1], json!({"1": {"fontSize": 24}}));
        let Node::Text(text) = decode(&value).unwrap() else {
            panic!("expected text");
        };
        assert_eq!(text.characters, "abc");
        assert_eq!(text.character_style_overrides, vec![0, 0, 1]);
        assert_eq!(text.style_override_table.len(), 1);
        assert_eq!(text.style_override_table[&1].font_size, Some(24.0));
        assert_eq!(text.style_override_table[&1].font_family, None);
        assert!(text.override_at(0).is_none());
        assert_eq!(text.override_at(2).and_then(|o| o.font_size), Some(24.0));
        assert_eq!(text.style.font_size, 12.0);
    }

    #[test]
    fn test_sparse_override_table() {
        let value = fixtures::text(
            "6:2",
            "abcd",
            vec![0, 7, 0, 3],
            json!({"7": {"italic": true}, "3": {"fontWeight": 700}}),
        );
        let Node::Text(text) = decode(&value).unwrap() else {
            panic!("expected text");
        };
        let keys: Vec<u32> = text.style_override_table.keys().copied().collect();
        assert_eq!(keys, vec![3, 7]);
    }

    #[test]
    fn test_short_overrides_are_padded() {
        let value = fixtures::text("6:3", "hello", vec![0, 1], json!({"1": {"fontSize": 20}}));
        let Node::Text(text) = decode(&value).unwrap() else {
            panic!("expected text");
        };
        assert_eq!(text.character_style_overrides, vec![0, 1, 0, 0, 0]);

        let strict = DecodeOptions::new().strict_style_overrides();
        assert!(matches!(
            decode_with(&value, &strict),
            Err(DecodeError::MalformedStructure { .. })
        ));
    }

    #[test]
    fn test_long_overrides_are_malformed() {
        let value = fixtures::text("6:4", "ab", vec![0, 0, 0], json!({}));
        let err = decode(&value).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedStructure { .. }));
        assert_eq!(err.path().unwrap().to_string(), "$.characterStyleOverrides");
    }

    #[test]
    fn test_override_counts_characters_not_bytes() {
        let value = fixtures::text("6:5", "héllo", vec![0, 0, 0, 0, 0], json!({}));
        assert!(decode(&value).is_ok());
    }

    #[test]
    fn test_overrides_index_utf16_code_units() {
        let value = fixtures::text("6:7", "a😀", vec![0, 1, 1], json!({"1": {"fontSize": 24}}));
        let Node::Text(text) = decode(&value).unwrap() else {
            panic!("expected text");
        };
        assert_eq!(text.character_style_overrides, vec![0, 1, 1]);
        assert_eq!(text.override_at(2).and_then(|o| o.font_size), Some(24.0));

        let short = fixtures::text("6:8", "😀b", vec![1], json!({"1": {"italic": true}}));
        let Node::Text(text) = decode(&short).unwrap() else {
            panic!("expected text");
        };
        assert_eq!(text.character_style_overrides, vec![1, 0, 0]);

        let long = fixtures::text("6:9", "😀", vec![0, 0, 0], json!({}));
        assert!(matches!(
            decode(&long),
            Err(DecodeError::MalformedStructure { .. })
        ));
    }

    #[test]
    fn test_non_integer_override_key() {
        let value = fixtures::text("6:6", "a", vec![0], json!({"one": {"fontSize": 1}}));
        let err = decode(&value).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedStructure { .. }));
        assert_eq!(err.path().unwrap().to_string(), "$.styleOverrideTable.one");
    }
}
