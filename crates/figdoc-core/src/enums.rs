//! Closed enumerations carried by document nodes.
//!
//! Every enum here maps a fixed set of wire tags to variants through the
//! [`Tagged`] trait. There is no fallback variant: a tag outside the set is
//! rejected by the decoder.

/// A closed set of wire tags.
pub trait Tagged: Sized + Copy + PartialEq + 'static {
    /// Human-readable name of the set, used in error messages.
    const NAME: &'static str;

    /// Every `(tag, variant)` pair in the set.
    const VARIANTS: &'static [(&'static str, Self)];

    /// Look up the variant for a wire tag.
    fn from_tag(tag: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(literal, _)| *literal == tag)
            .map(|(_, variant)| *variant)
    }

    /// The wire tag for this variant.
    fn tag(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(_, variant)| *variant == self)
            .map(|(literal, _)| *literal)
            .unwrap_or("")
    }
}

macro_rules! tagged_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $label:literal {
            $($(#[$vmeta:meta])* $variant:ident = $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::enums::Tagged for $name {
            const NAME: &'static str = $label;
            const VARIANTS: &'static [(&'static str, Self)] = &[$(($tag, $name::$variant)),+];
        }
    };
}

pub(crate) use tagged_enum;

tagged_enum! {
    /// How a layer composites onto the layers below it.
    pub enum BlendMode as "blend mode" {
        Normal = "NORMAL",
        /// Only valid on groups: children blend directly with the backdrop.
        PassThrough = "PASS_THROUGH",
        Darken = "DARKEN",
        Multiply = "MULTIPLY",
        LinearBurn = "LINEAR_BURN",
        ColorBurn = "COLOR_BURN",
        Lighten = "LIGHTEN",
        Screen = "SCREEN",
        LinearDodge = "LINEAR_DODGE",
        ColorDodge = "COLOR_DODGE",
        Overlay = "OVERLAY",
        SoftLight = "SOFT_LIGHT",
        HardLight = "HARD_LIGHT",
        Difference = "DIFFERENCE",
        Exclusion = "EXCLUSION",
        Hue = "HUE",
        Saturation = "SATURATION",
        Color = "COLOR",
        Luminosity = "LUMINOSITY",
    }
}

tagged_enum! {
    /// Where a stroke sits relative to the shape outline.
    pub enum StrokeAlign as "stroke align" {
        Inside = "INSIDE",
        Outside = "OUTSIDE",
        Center = "CENTER",
    }
}

tagged_enum! {
    /// Image format of an export setting.
    pub enum ExportFormat as "export format" {
        Jpeg = "JPEG",
        Png = "PNG",
        Svg = "SVG",
        Pdf = "PDF",
    }
}

tagged_enum! {
    /// Discriminator of an export constraint.
    pub enum ExportConstraintType as "export constraint" {
        Scale = "SCALE",
        Width = "WIDTH",
        Height = "HEIGHT",
    }
}

tagged_enum! {
    /// Path operation combining the children of a boolean group.
    pub enum BooleanOperation as "boolean operation" {
        Union = "UNION",
        Intersect = "INTERSECT",
        Subtract = "SUBTRACT",
        Exclude = "EXCLUDE",
    }
}

tagged_enum! {
    /// Horizontal resizing behavior relative to the parent frame.
    pub enum HorizontalConstraint as "horizontal constraint" {
        Left = "LEFT",
        Right = "RIGHT",
        Center = "CENTER",
        LeftRight = "LEFT_RIGHT",
        Scale = "SCALE",
    }
}

tagged_enum! {
    /// Vertical resizing behavior relative to the parent frame.
    pub enum VerticalConstraint as "vertical constraint" {
        Top = "TOP",
        Bottom = "BOTTOM",
        Center = "CENTER",
        TopBottom = "TOP_BOTTOM",
        Scale = "SCALE",
    }
}

tagged_enum! {
    /// Placement of a child inside an auto-layout parent, on the counter axis.
    pub enum LayoutAlign as "layout align" {
        Min = "MIN",
        Center = "CENTER",
        Max = "MAX",
        Stretch = "STRETCH",
    }
}

tagged_enum! {
    /// Primary axis of an auto-layout frame.
    pub enum LayoutMode as "layout mode" {
        Horizontal = "HORIZONTAL",
        Vertical = "VERTICAL",
    }
}

tagged_enum! {
    /// Whether the counter axis of an auto-layout frame hugs its content.
    pub enum CounterAxisSizingMode as "counter axis sizing mode" {
        Fixed = "FIXED",
        Auto = "AUTO",
    }
}

impl Default for CounterAxisSizingMode {
    fn default() -> Self {
        CounterAxisSizingMode::Auto
    }
}

tagged_enum! {
    /// Alignment of a column or row grid within its frame.
    pub enum GridAlign as "grid align" {
        Min = "MIN",
        Stretch = "STRETCH",
        Center = "CENTER",
    }
}

tagged_enum! {
    pub enum GridPattern as "grid pattern" {
        Columns = "COLUMNS",
        Rows = "ROWS",
        Square = "GRID",
    }
}

tagged_enum! {
    pub enum PaintType as "paint type" {
        Solid = "SOLID",
        GradientLinear = "GRADIENT_LINEAR",
        GradientRadial = "GRADIENT_RADIAL",
        GradientAngular = "GRADIENT_ANGULAR",
        GradientDiamond = "GRADIENT_DIAMOND",
        Image = "IMAGE",
        Emoji = "EMOJI",
    }
}

tagged_enum! {
    /// How an image paint fills its layer.
    pub enum ScaleMode as "scale mode" {
        Fill = "FILL",
        Fit = "FIT",
        Tile = "TILE",
        Stretch = "STRETCH",
    }
}

tagged_enum! {
    pub enum EffectType as "effect type" {
        InnerShadow = "INNER_SHADOW",
        DropShadow = "DROP_SHADOW",
        LayerBlur = "LAYER_BLUR",
        BackgroundBlur = "BACKGROUND_BLUR",
    }
}

tagged_enum! {
    pub enum TextAlignHorizontal as "horizontal text align" {
        Left = "LEFT",
        Right = "RIGHT",
        Center = "CENTER",
        Justified = "JUSTIFIED",
    }
}

tagged_enum! {
    pub enum TextAlignVertical as "vertical text align" {
        Top = "TOP",
        Center = "CENTER",
        Bottom = "BOTTOM",
    }
}

tagged_enum! {
    pub enum TextCase as "text case" {
        Upper = "UPPER",
        Lower = "LOWER",
        Title = "TITLE",
    }
}

tagged_enum! {
    pub enum TextDecoration as "text decoration" {
        Strikethrough = "STRIKETHROUGH",
        Underline = "UNDERLINE",
    }
}
