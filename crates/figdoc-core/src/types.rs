//! Value records shared by node payloads.

use crate::enums::{
    BlendMode, ExportFormat, GridAlign, PaintType, ScaleMode, TextAlignHorizontal,
    TextAlignVertical, TextCase, TextDecoration,
};
use glam::Vec2;
use std::fmt;

/// Identifier of a node, unique within one document (e.g. `"1:23"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

/// Axis-aligned rectangle in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get position as Vec2.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Get size as Vec2.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Size constraint applied when exporting a node as an image.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExportConstraint {
    /// Scale factor relative to the node's size.
    Scale(f64),
    /// Fixed output width in pixels.
    Width(f64),
    /// Fixed output height in pixels.
    Height(f64),
}

/// One entry of a node's export settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportSetting {
    /// Appended to the file name of the exported asset.
    pub suffix: String,
    pub format: ExportFormat,
    pub constraint: ExportConstraint,
}

/// A color position along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    /// Position in `0.0..=1.0` along the gradient.
    pub position: f32,
    pub color: Color,
}

/// Shape of a gradient paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradientKind {
    Linear,
    Radial,
    Angular,
    Diamond,
}

/// What a paint draws with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaintFill {
    Solid(Color),
    Gradient {
        kind: GradientKind,
        /// Handle positions in normalized layer space. The first is the
        /// start, the second the end, the third the width handle.
        handles: Vec<Vec2>,
        stops: Vec<ColorStop>,
    },
    Image {
        scale_mode: ScaleMode,
        image_ref: Option<String>,
    },
    Emoji,
}

/// A fill or stroke layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paint {
    pub is_visible: bool,
    pub opacity: f64,
    pub fill: PaintFill,
}

impl Paint {
    /// A visible, opaque solid paint.
    pub fn solid(color: Color) -> Self {
        Self {
            is_visible: true,
            opacity: 1.0,
            fill: PaintFill::Solid(color),
        }
    }

    /// The wire tag this paint was decoded from.
    pub fn paint_type(&self) -> PaintType {
        match &self.fill {
            PaintFill::Solid(_) => PaintType::Solid,
            PaintFill::Gradient { kind, .. } => match kind {
                GradientKind::Linear => PaintType::GradientLinear,
                GradientKind::Radial => PaintType::GradientRadial,
                GradientKind::Angular => PaintType::GradientAngular,
                GradientKind::Diamond => PaintType::GradientDiamond,
            },
            PaintFill::Image { .. } => PaintType::Image,
            PaintFill::Emoji => PaintType::Emoji,
        }
    }
}

/// Parameters of an inner or drop shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    pub color: Color,
    pub offset: Vec2,
    pub blend_mode: BlendMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    InnerShadow(Shadow),
    DropShadow(Shadow),
    LayerBlur,
    BackgroundBlur,
}

/// A shadow or blur applied to a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub is_visible: bool,
    /// Blur radius.
    pub radius: f64,
    pub kind: EffectKind,
}

/// Column or row track parameters of a layout grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridTrack {
    pub alignment: GridAlign,
    pub gutter_size: f64,
    pub offset: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridLayout {
    Columns(GridTrack),
    Rows(GridTrack),
    Square,
}

/// A guide grid drawn over a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutGrid {
    pub is_visible: bool,
    /// Width of a column, height of a row, or side of a square cell.
    pub section_size: f64,
    pub color: Color,
    pub layout: GridLayout,
}

/// Complete character formatting of a text node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    pub font_family: String,
    pub font_post_script_name: Option<String>,
    pub italic: bool,
    pub font_weight: f64,
    pub font_size: f64,
    pub text_align_horizontal: TextAlignHorizontal,
    pub text_align_vertical: TextAlignVertical,
    pub letter_spacing: f64,
    pub fills: Vec<Paint>,
    pub line_height_px: f64,
    pub line_height_percent: f64,
    pub paragraph_spacing: f64,
    pub paragraph_indent: f64,
    pub text_case: Option<TextCase>,
    pub text_decoration: Option<TextDecoration>,
}

/// A partial [`TextStyle`]: only the fields that differ from the base style.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyleOverride {
    pub font_family: Option<String>,
    pub font_post_script_name: Option<String>,
    pub italic: Option<bool>,
    pub font_weight: Option<f64>,
    pub font_size: Option<f64>,
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    pub text_align_vertical: Option<TextAlignVertical>,
    pub letter_spacing: Option<f64>,
    pub fills: Option<Vec<Paint>>,
    pub line_height_px: Option<f64>,
    pub line_height_percent: Option<f64>,
    pub paragraph_spacing: Option<f64>,
    pub paragraph_indent: Option<f64>,
    pub text_case: Option<TextCase>,
    pub text_decoration: Option<TextDecoration>,
}

impl TextStyleOverride {
    /// True when the override changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
