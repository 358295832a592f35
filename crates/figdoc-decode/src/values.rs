//! Decoders for the value records nested inside node payloads.

use crate::cursor::{Field, Object};
use crate::enums::export_constraint;
use figdoc_core::{
    BlendMode, Color, ColorStop, Effect, EffectKind, EffectType, ExportSetting, GradientKind,
    GridLayout, GridPattern, GridTrack, LayoutGrid, Paint, PaintFill, PaintType, Rect, Result,
    Shadow, TextStyle, TextStyleOverride,
};
use glam::Vec2;

pub fn color(field: Field<'_>) -> Result<Color> {
    let obj = field.object()?;
    Ok(Color {
        r: obj.f32("r")?,
        g: obj.f32("g")?,
        b: obj.f32("b")?,
        a: obj.f32_or("a", 1.0)?,
    })
}

pub fn rect(field: Field<'_>) -> Result<Rect> {
    let obj = field.object()?;
    Ok(Rect {
        x: obj.f64("x")?,
        y: obj.f64("y")?,
        width: obj.f64("width")?,
        height: obj.f64("height")?,
    })
}

pub fn vec2(field: Field<'_>) -> Result<Vec2> {
    let obj = field.object()?;
    Ok(Vec2::new(obj.f32("x")?, obj.f32("y")?))
}

pub fn export_setting(field: Field<'_>) -> Result<ExportSetting> {
    let obj = field.object()?;
    Ok(ExportSetting {
        suffix: obj.string("suffix")?,
        format: obj.tag("format")?,
        constraint: export_constraint(obj.required("constraint")?)?,
    })
}

pub fn paint(field: Field<'_>) -> Result<Paint> {
    let obj = field.object()?;
    let kind: PaintType = obj.tag("type")?;
    let is_visible = obj.bool_or("visible", true)?;
    let opacity = obj.f64_or("opacity", 1.0)?;
    let fill = match kind {
        PaintType::Solid => PaintFill::Solid(color(obj.required("color")?)?),
        PaintType::GradientLinear => gradient(&obj, GradientKind::Linear)?,
        PaintType::GradientRadial => gradient(&obj, GradientKind::Radial)?,
        PaintType::GradientAngular => gradient(&obj, GradientKind::Angular)?,
        PaintType::GradientDiamond => gradient(&obj, GradientKind::Diamond)?,
        PaintType::Image => PaintFill::Image {
            scale_mode: obj.tag("scaleMode")?,
            image_ref: obj.opt_string("imageRef")?,
        },
        PaintType::Emoji => PaintFill::Emoji,
    };
    Ok(Paint {
        is_visible,
        opacity,
        fill,
    })
}

fn gradient(obj: &Object<'_>, kind: GradientKind) -> Result<PaintFill> {
    Ok(PaintFill::Gradient {
        kind,
        handles: obj.list("gradientHandlePositions", vec2)?,
        stops: obj.list("gradientStops", color_stop)?,
    })
}

fn color_stop(field: Field<'_>) -> Result<ColorStop> {
    let obj = field.object()?;
    Ok(ColorStop {
        position: obj.f32("position")?,
        color: color(obj.required("color")?)?,
    })
}

pub fn effect(field: Field<'_>) -> Result<Effect> {
    let obj = field.object()?;
    let effect_type: EffectType = obj.tag("type")?;
    let is_visible = obj.bool_or("visible", true)?;
    let radius = obj.f64("radius")?;
    let kind = match effect_type {
        EffectType::InnerShadow => EffectKind::InnerShadow(shadow(&obj)?),
        EffectType::DropShadow => EffectKind::DropShadow(shadow(&obj)?),
        EffectType::LayerBlur => EffectKind::LayerBlur,
        EffectType::BackgroundBlur => EffectKind::BackgroundBlur,
    };
    Ok(Effect {
        is_visible,
        radius,
        kind,
    })
}

fn shadow(obj: &Object<'_>) -> Result<Shadow> {
    Ok(Shadow {
        color: color(obj.required("color")?)?,
        offset: vec2(obj.required("offset")?)?,
        blend_mode: obj.tag_or("blendMode", BlendMode::Normal)?,
    })
}

pub fn layout_grid(field: Field<'_>) -> Result<LayoutGrid> {
    let obj = field.object()?;
    let pattern: GridPattern = obj.tag("pattern")?;
    let section_size = obj.f64("sectionSize")?;
    let is_visible = obj.bool_or("visible", true)?;
    let color = color(obj.required("color")?)?;
    let layout = match pattern {
        GridPattern::Columns => GridLayout::Columns(grid_track(&obj)?),
        GridPattern::Rows => GridLayout::Rows(grid_track(&obj)?),
        GridPattern::Square => GridLayout::Square,
    };
    Ok(LayoutGrid {
        is_visible,
        section_size,
        color,
        layout,
    })
}

fn grid_track(obj: &Object<'_>) -> Result<GridTrack> {
    Ok(GridTrack {
        alignment: obj.tag("alignment")?,
        gutter_size: obj.f64("gutterSize")?,
        offset: obj.f64("offset")?,
        count: obj.u32("count")?,
    })
}

pub fn text_style(field: Field<'_>) -> Result<TextStyle> {
    let obj = field.object()?;
    Ok(TextStyle {
        font_family: obj.string("fontFamily")?,
        font_post_script_name: obj.opt_string("fontPostScriptName")?,
        italic: obj.bool_or("italic", false)?,
        font_weight: obj.f64("fontWeight")?,
        font_size: obj.f64("fontSize")?,
        text_align_horizontal: obj.tag("textAlignHorizontal")?,
        text_align_vertical: obj.tag("textAlignVertical")?,
        letter_spacing: obj.f64("letterSpacing")?,
        fills: obj.list_or_empty("fills", paint)?,
        line_height_px: obj.f64("lineHeightPx")?,
        line_height_percent: obj.f64_or("lineHeightPercent", 100.0)?,
        paragraph_spacing: obj.f64_or("paragraphSpacing", 0.0)?,
        paragraph_indent: obj.f64_or("paragraphIndent", 0.0)?,
        text_case: obj.opt_tag("textCase")?,
        text_decoration: obj.opt_tag("textDecoration")?,
    })
}

pub fn text_style_override(field: Field<'_>) -> Result<TextStyleOverride> {
    let obj = field.object()?;
    Ok(TextStyleOverride {
        font_family: obj.opt_string("fontFamily")?,
        font_post_script_name: obj.opt_string("fontPostScriptName")?,
        italic: obj.opt_bool("italic")?,
        font_weight: obj.opt_f64("fontWeight")?,
        font_size: obj.opt_f64("fontSize")?,
        text_align_horizontal: obj.opt_tag("textAlignHorizontal")?,
        text_align_vertical: obj.opt_tag("textAlignVertical")?,
        letter_spacing: obj.opt_f64("letterSpacing")?,
        fills: obj.opt_list("fills", paint)?,
        line_height_px: obj.opt_f64("lineHeightPx")?,
        line_height_percent: obj.opt_f64("lineHeightPercent")?,
        paragraph_spacing: obj.opt_f64("paragraphSpacing")?,
        paragraph_indent: obj.opt_f64("paragraphIndent")?,
        text_case: obj.opt_tag("textCase")?,
        text_decoration: obj.opt_tag("textDecoration")?,
    })
}
