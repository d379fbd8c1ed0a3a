//! Min/max derivation over numeric entity fields.
//!
//! Used to seed range-filter slider bounds: the derived minimum is floored
//! and the maximum ceiled so the initial range always contains every value
//! in the collection.

use crate::models::neo::{NearEarthObject, NumberRange, NumericField};

/// Minimum of `field` across the collection, `None` when empty.
///
/// Single linear scan; on ties the first occurrence wins.
pub fn min_value_of(objects: &[NearEarthObject], field: NumericField) -> Option<f64> {
    let mut iter = objects.iter().map(|neo| field.value_of(neo));
    let first = iter.next()?;
    Some(iter.fold(first, |min, value| if value < min { value } else { min }))
}

/// Maximum of `field` across the collection, `None` when empty.
pub fn max_value_of(objects: &[NearEarthObject], field: NumericField) -> Option<f64> {
    let mut iter = objects.iter().map(|neo| field.value_of(neo));
    let first = iter.next()?;
    Some(iter.fold(first, |max, value| if value > max { value } else { max }))
}

/// Initial slider range for `field`: floored min to ceiled max, with `0.0`
/// substituted for either bound when the collection is empty.
pub fn initial_range(objects: &[NearEarthObject], field: NumericField) -> NumberRange {
    NumberRange::new(
        min_value_of(objects, field).unwrap_or(0.0).floor(),
        max_value_of(objects, field).unwrap_or(0.0).ceil(),
    )
}
