//! Decoders for closed tag enumerations.

use crate::cursor::Field;
use figdoc_core::{DecodeError, ExportConstraint, ExportConstraintType, Result, Tagged};

/// Decode a string tag into a variant of `T`.
///
/// A string outside the set fails with `UnrecognizedDiscriminator` naming
/// both the set and the literal; a non-string fails with `TypeMismatch`.
pub fn decode_tag<T: Tagged>(field: &Field<'_>) -> Result<T> {
    let literal = field.as_str()?;
    T::from_tag(literal)
        .ok_or_else(|| DecodeError::unrecognized(field.path().clone(), T::NAME, literal))
}

/// Decode `{"type": "SCALE" | "WIDTH" | "HEIGHT", "value": number}`.
pub fn export_constraint(field: Field<'_>) -> Result<ExportConstraint> {
    let obj = field.object()?;
    let kind: ExportConstraintType = obj.tag("type")?;
    let value = obj.f64("value")?;
    Ok(match kind {
        ExportConstraintType::Scale => ExportConstraint::Scale(value),
        ExportConstraintType::Width => ExportConstraint::Width(value),
        ExportConstraintType::Height => ExportConstraint::Height(value),
    })
}
