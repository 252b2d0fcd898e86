use super::{Attributes, ShapeKind};
use crate::error::{ShapeError, ShapeResult};

/// Validates a size-like attribute (must be strictly positive)
pub(crate) fn positive(attribute: &'static str, value: i64) -> ShapeResult<i64> {
    if value <= 0 {
        Err(ShapeError::InvalidDimension {
            attribute,
            value,
            reason: "must be > 0",
        })
    } else {
        Ok(value)
    }
}

/// Validates a coordinate attribute (must not be negative)
pub(crate) fn non_negative(attribute: &'static str, value: i64) -> ShapeResult<i64> {
    if value < 0 {
        Err(ShapeError::InvalidDimension {
            attribute,
            value,
            reason: "must be >= 0",
        })
    } else {
        Ok(value)
    }
}

/// Pairs positional values with the kind's attribute order.
///
/// Shorter inputs only fill the leading attributes; values beyond the last
/// attribute are reported through `Err(count)` with the number of columns
/// the kind accepts.
pub(crate) fn zip_attributes(kind: ShapeKind, values: &[i64]) -> Result<Attributes, usize> {
    let order = kind.attribute_order();
    if values.len() > order.len() {
        return Err(order.len());
    }
    Ok(order
        .iter()
        .zip(values)
        .map(|(name, value)| (name.to_string(), *value))
        .collect())
}
