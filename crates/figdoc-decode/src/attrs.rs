//! Decoders for the attribute groups shared between node kinds.
//!
//! Each group reads its own fields from the node object and nothing else, so
//! variant decoders compose them freely.

use crate::cursor::Object;
use crate::values;
use figdoc_core::{
    Appearance, AutoLayout, Blending, ContainerAttrs, CounterAxisSizingMode, ExportSetting,
    Geometry, Identity, LayoutConstraints, LayoutMode, NodeId, Paints, Result,
};

/// `id`, `name`, `visible` (default `true`).
pub fn identity(obj: &Object<'_>) -> Result<Identity> {
    Ok(Identity {
        id: NodeId(obj.string("id")?),
        name: obj.string("name")?,
        is_visible: obj.bool_or("visible", true)?,
    })
}

/// `exportSettings` (default empty).
pub fn export_settings(obj: &Object<'_>) -> Result<Vec<ExportSetting>> {
    obj.list_or_empty("exportSettings", values::export_setting)
}

/// `backgroundColor`, `exportSettings`.
pub fn appearance(obj: &Object<'_>) -> Result<Appearance> {
    Ok(Appearance {
        background_color: values::color(obj.required("backgroundColor")?)?,
        export_settings: export_settings(obj)?,
    })
}

/// `blendMode`, `effects` (default empty), `isMask` (default `false`).
pub fn blending(obj: &Object<'_>) -> Result<Blending> {
    Ok(Blending {
        blend_mode: obj.tag("blendMode")?,
        effects: obj.list_or_empty("effects", values::effect)?,
        is_mask: obj.bool_or("isMask", false)?,
    })
}

/// `absoluteBoundingBox`, `preserveRatio` (default `false`).
pub fn geometry(obj: &Object<'_>) -> Result<Geometry> {
    Ok(Geometry {
        bounding_box: values::rect(obj.required("absoluteBoundingBox")?)?,
        preserve_ratio: obj.bool_or("preserveRatio", false)?,
    })
}

/// `constraints.horizontal`, `constraints.vertical`, `transitionNodeID`,
/// `opacity` (default `1.0`), `layoutAlign`.
pub fn layout_constraints(obj: &Object<'_>) -> Result<LayoutConstraints> {
    let constraints = obj.object("constraints")?;
    Ok(LayoutConstraints {
        horizontal: constraints.tag("horizontal")?,
        vertical: constraints.tag("vertical")?,
        transition_to: obj.opt_string("transitionNodeID")?.map(NodeId),
        opacity: obj.f64_or("opacity", 1.0)?,
        layout_align: obj.opt_tag("layoutAlign")?,
    })
}

/// `fills` (default empty), `strokes`, `strokeWeight`, `strokeAlign`.
pub fn paints(obj: &Object<'_>) -> Result<Paints> {
    Ok(Paints {
        fills: obj.list_or_empty("fills", values::paint)?,
        strokes: obj.list("strokes", values::paint)?,
        stroke_weight: obj.f64("strokeWeight")?,
        stroke_align: obj.tag("strokeAlign")?,
    })
}

/// `clipsContent`, `layoutGrids` (default empty).
pub fn container(obj: &Object<'_>) -> Result<ContainerAttrs> {
    Ok(ContainerAttrs {
        clip_content: obj.bool("clipsContent")?,
        layout_grids: obj.list_or_empty("layoutGrids", values::layout_grid)?,
    })
}

/// Auto layout, keyed on the optional `layoutMode`.
///
/// An absent mode means the frame does not use auto layout. A mode outside
/// the closed set is an error, never treated as absent.
pub fn auto_layout(obj: &Object<'_>) -> Result<Option<AutoLayout>> {
    let Some(mode) = obj.opt_tag::<LayoutMode>("layoutMode")? else {
        return Ok(None);
    };
    Ok(Some(AutoLayout {
        mode,
        counter_axis_sizing_mode: obj
            .tag_or("counterAxisSizingMode", CounterAxisSizingMode::Auto)?,
        item_spacing: obj.f64_or("itemSpacing", 0.0)?,
        horizontal_padding: obj.f64_or("horizontalPadding", 0.0)?,
        vertical_padding: obj.f64_or("verticalPadding", 0.0)?,
    }))
}
