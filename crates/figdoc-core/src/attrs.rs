//! Attribute groups shared between node kinds.
//!
//! Node payloads embed these groups by value. A group never knows which node
//! kind it belongs to, so the same decoder fills it for every kind.

use crate::enums::{
    BlendMode, CounterAxisSizingMode, HorizontalConstraint, LayoutAlign, LayoutMode, StrokeAlign,
    VerticalConstraint,
};
use crate::types::{Color, Effect, ExportSetting, LayoutGrid, NodeId, Paint, Rect};

/// Who a node is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity {
    pub id: NodeId,
    pub name: String,
    /// Defaults to `true`.
    pub is_visible: bool,
}

impl Identity {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_visible: true,
        }
    }
}

/// Canvas background and export settings of container kinds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Appearance {
    pub background_color: Color,
    pub export_settings: Vec<ExportSetting>,
}

/// Compositing of a layer onto its backdrop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blending {
    pub blend_mode: BlendMode,
    pub effects: Vec<Effect>,
    /// Whether this layer masks the siblings stacked above it.
    pub is_mask: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub bounding_box: Rect,
    /// Keep the aspect ratio when resizing.
    pub preserve_ratio: bool,
}

/// How a layer follows its parent when the parent resizes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConstraints {
    pub horizontal: HorizontalConstraint,
    pub vertical: VerticalConstraint,
    /// Prototype link target.
    pub transition_to: Option<NodeId>,
    pub opacity: f64,
    pub layout_align: Option<LayoutAlign>,
}

/// Fills and strokes of shape-like kinds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paints {
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: f64,
    pub stroke_align: StrokeAlign,
}

/// Frame-like clipping and guide grids.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerAttrs {
    pub clip_content: bool,
    pub layout_grids: Vec<LayoutGrid>,
}

/// Flex-like layout of a frame's children.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoLayout {
    pub mode: LayoutMode,
    pub counter_axis_sizing_mode: CounterAxisSizingMode,
    pub item_spacing: f64,
    pub horizontal_padding: f64,
    pub vertical_padding: f64,
}

impl AutoLayout {
    /// Auto layout along `mode` with every optional setting at its default.
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            mode,
            counter_axis_sizing_mode: CounterAxisSizingMode::default(),
            item_spacing: 0.0,
            horizontal_padding: 0.0,
            vertical_padding: 0.0,
        }
    }
}
