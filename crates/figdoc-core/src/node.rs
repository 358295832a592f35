//! Node kinds and their payloads.

use crate::attrs::{
    Appearance, AutoLayout, Blending, ContainerAttrs, Geometry, Identity, LayoutConstraints,
    Paints,
};
use crate::enums::{tagged_enum, BooleanOperation};
use crate::types::{ExportSetting, NodeId, Rect, TextStyle, TextStyleOverride};
use std::collections::BTreeMap;

tagged_enum! {
    /// The node-kind discriminator carried in a node's `type` field.
    pub enum NodeKind as "node type" {
        Document = "DOCUMENT",
        Canvas = "CANVAS",
        Frame = "FRAME",
        Group = "GROUP",
        BooleanGroup = "BOOLEAN_OPERATION",
        Vector = "VECTOR",
        Star = "STAR",
        Line = "LINE",
        Ellipse = "ELLIPSE",
        RegularPolygon = "REGULAR_POLYGON",
        Rectangle = "RECTANGLE",
        Slice = "SLICE",
        Text = "TEXT",
        Component = "COMPONENT",
        Instance = "INSTANCE",
    }
}

impl NodeKind {
    /// Whether nodes of this kind own children.
    ///
    /// Leaf kinds are always built without children, whatever the payload
    /// carries under `children`.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            NodeKind::Document
                | NodeKind::Canvas
                | NodeKind::Frame
                | NodeKind::Group
                | NodeKind::BooleanGroup
                | NodeKind::Component
                | NodeKind::Instance
        )
    }
}

/// The root of a file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentNode {
    pub identity: Identity,
}

/// A page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasNode {
    pub identity: Identity,
    pub appearance: Appearance,
}

/// Frame, component, and (through [`InstanceNode`]) instance payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameNode {
    pub identity: Identity,
    pub appearance: Appearance,
    pub blending: Blending,
    pub geometry: Geometry,
    pub constraints: LayoutConstraints,
    pub container: ContainerAttrs,
    /// `None` when the frame does not use auto layout.
    pub auto_layout: Option<AutoLayout>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupNode {
    pub identity: Identity,
    pub appearance: Appearance,
    pub blending: Blending,
    pub geometry: Geometry,
    pub constraints: LayoutConstraints,
    pub container: ContainerAttrs,
}

/// Shared payload of every shape-like kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorNode {
    pub identity: Identity,
    pub export_settings: Vec<ExportSetting>,
    pub blending: Blending,
    pub geometry: Geometry,
    pub constraints: LayoutConstraints,
    pub paints: Paints,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BooleanGroupNode {
    pub vector: VectorNode,
    pub operation: BooleanOperation,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleNode {
    pub vector: VectorNode,
    /// Defaults to `0.0`.
    pub corner_radius: f64,
}

/// A region marked for export. Has no paint of its own.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceNode {
    pub identity: Identity,
    pub export_settings: Vec<ExportSetting>,
    pub bounding_box: Rect,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextNode {
    pub vector: VectorNode,
    pub characters: String,
    pub style: TextStyle,
    /// One entry per UTF-16 code unit of `characters`: `0` selects the base
    /// style, any other value is a key of `style_override_table`.
    pub character_style_overrides: Vec<u32>,
    pub style_override_table: BTreeMap<u32, TextStyleOverride>,
}

impl TextNode {
    /// The raw override entry for UTF-16 code unit `index`, if it has one.
    ///
    /// This does not merge the override into the base style.
    pub fn override_at(&self, index: usize) -> Option<&TextStyleOverride> {
        match self.character_style_overrides.get(index) {
            Some(0) | None => None,
            Some(key) => self.style_override_table.get(key),
        }
    }
}

/// An instance of a component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceNode {
    pub frame: FrameNode,
    /// Id of the master component.
    pub component_id: NodeId,
}

/// One node of a document tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Document(DocumentNode),
    Canvas(CanvasNode),
    Frame(FrameNode),
    Group(GroupNode),
    BooleanGroup(BooleanGroupNode),
    Vector(VectorNode),
    Star(VectorNode),
    Line(VectorNode),
    Ellipse(VectorNode),
    RegularPolygon(VectorNode),
    Rectangle(RectangleNode),
    Slice(SliceNode),
    Text(TextNode),
    Component(FrameNode),
    Instance(InstanceNode),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document(_) => NodeKind::Document,
            Node::Canvas(_) => NodeKind::Canvas,
            Node::Frame(_) => NodeKind::Frame,
            Node::Group(_) => NodeKind::Group,
            Node::BooleanGroup(_) => NodeKind::BooleanGroup,
            Node::Vector(_) => NodeKind::Vector,
            Node::Star(_) => NodeKind::Star,
            Node::Line(_) => NodeKind::Line,
            Node::Ellipse(_) => NodeKind::Ellipse,
            Node::RegularPolygon(_) => NodeKind::RegularPolygon,
            Node::Rectangle(_) => NodeKind::Rectangle,
            Node::Slice(_) => NodeKind::Slice,
            Node::Text(_) => NodeKind::Text,
            Node::Component(_) => NodeKind::Component,
            Node::Instance(_) => NodeKind::Instance,
        }
    }

    pub fn identity(&self) -> &Identity {
        match self {
            Node::Document(n) => &n.identity,
            Node::Canvas(n) => &n.identity,
            Node::Frame(n) | Node::Component(n) => &n.identity,
            Node::Group(n) => &n.identity,
            Node::BooleanGroup(n) => &n.vector.identity,
            Node::Vector(n)
            | Node::Star(n)
            | Node::Line(n)
            | Node::Ellipse(n)
            | Node::RegularPolygon(n) => &n.identity,
            Node::Rectangle(n) => &n.vector.identity,
            Node::Slice(n) => &n.identity,
            Node::Text(n) => &n.vector.identity,
            Node::Instance(n) => &n.frame.identity,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.identity().id
    }

    pub fn name(&self) -> &str {
        &self.identity().name
    }

    pub fn is_visible(&self) -> bool {
        self.identity().is_visible
    }

    /// Absolute bounding box. `None` for documents and canvases.
    pub fn bounding_box(&self) -> Option<&Rect> {
        match self {
            Node::Document(_) | Node::Canvas(_) => None,
            Node::Frame(n) | Node::Component(n) => Some(&n.geometry.bounding_box),
            Node::Group(n) => Some(&n.geometry.bounding_box),
            Node::Instance(n) => Some(&n.frame.geometry.bounding_box),
            Node::Slice(n) => Some(&n.bounding_box),
            _ => self.vector().map(|v| &v.geometry.bounding_box),
        }
    }

    /// The shared shape payload of vector-family, rectangle, text, and
    /// boolean nodes.
    pub fn vector(&self) -> Option<&VectorNode> {
        match self {
            Node::Vector(n)
            | Node::Star(n)
            | Node::Line(n)
            | Node::Ellipse(n)
            | Node::RegularPolygon(n) => Some(n),
            Node::BooleanGroup(n) => Some(&n.vector),
            Node::Rectangle(n) => Some(&n.vector),
            Node::Text(n) => Some(&n.vector),
            _ => None,
        }
    }

    /// The frame payload of frames, components, and instances.
    pub fn frame(&self) -> Option<&FrameNode> {
        match self {
            Node::Frame(n) | Node::Component(n) => Some(n),
            Node::Instance(n) => Some(&n.frame),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Tagged;

    #[test]
    fn test_container_kinds() {
        let containers: Vec<_> = NodeKind::VARIANTS
            .iter()
            .filter(|(_, kind)| kind.is_container())
            .map(|(tag, _)| *tag)
            .collect();
        assert_eq!(
            containers,
            vec![
                "DOCUMENT",
                "CANVAS",
                "FRAME",
                "GROUP",
                "BOOLEAN_OPERATION",
                "COMPONENT",
                "INSTANCE"
            ]
        );
        assert_eq!(NodeKind::VARIANTS.len(), 15);
    }

    #[test]
    fn test_document_accessors() {
        let node = Node::Document(DocumentNode {
            identity: Identity::new("0:0", "Document"),
        });
        assert_eq!(node.kind(), NodeKind::Document);
        assert_eq!(node.id().as_str(), "0:0");
        assert_eq!(node.name(), "Document");
        assert!(node.is_visible());
        assert!(node.bounding_box().is_none());
        assert!(node.vector().is_none());
    }
}
