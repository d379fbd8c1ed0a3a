//! Filter engine: applying settings to an entity list, extracting the
//! active subset, and the coarse equality behind the "Apply" affordance.
//!
//! Matching dispatches on the runtime pairing of field value and filter
//! value, with an explicit no-match arm for incompatible pairings. A kind
//! tag alone is never trusted to decide how a field is compared.

use crate::models::neo::{
    FieldValue, Filter, FilterField, FilterSettings, NearEarthObject, NumberRange,
};
use crate::services::ranges::{max_value_of, min_value_of};

/// Return the entities satisfying every filter in `settings`.
///
/// Logical AND across fields; empty settings match everything.
pub fn apply_filters(
    objects: &[NearEarthObject],
    settings: &FilterSettings,
) -> Vec<NearEarthObject> {
    objects
        .iter()
        .filter(|neo| {
            settings
                .iter()
                .all(|(field, filter)| is_filter_match(neo, *field, filter))
        })
        .cloned()
        .collect()
}

/// Match one entity field against one filter.
fn is_filter_match(neo: &NearEarthObject, field: FilterField, filter: &Filter) -> bool {
    match (field.value_of(neo), filter) {
        (FieldValue::Text(value), Filter::Text(query)) => {
            value.to_lowercase().contains(&query.to_lowercase())
        }
        (FieldValue::Number(value), Filter::Range(range)) => range.contains(value),
        (FieldValue::Bool(value), Filter::Bool(query)) => value == *query,
        // Incompatible pairing (e.g. a range filter on the name field).
        _ => false,
    }
}

/// Extract the filters that represent a real constraint.
///
/// A text filter counts once its trimmed value is non-empty, a boolean
/// filter always counts, and a range filter counts only when it differs
/// from the full derived bounds of its field over `objects`. Resetting a
/// slider to its full extent is thereby the same as removing the filter.
pub fn active_filters(
    settings: &FilterSettings,
    objects: &[NearEarthObject],
) -> FilterSettings {
    settings
        .iter()
        .filter(|(field, filter)| is_active_filter(**field, filter, objects))
        .map(|(field, filter)| (*field, filter.clone()))
        .collect()
}

fn is_active_filter(field: FilterField, filter: &Filter, objects: &[NearEarthObject]) -> bool {
    match filter {
        Filter::Text(value) => !value.trim().is_empty(),
        Filter::Bool(_) => true,
        Filter::Range(range) => match field.numeric() {
            Some(numeric) => {
                let full = NumberRange::new(
                    min_value_of(objects, numeric).unwrap_or(0.0),
                    max_value_of(objects, numeric).unwrap_or(0.0),
                );
                *range != full
            }
            // Range filter on a non-numeric field never constrains anything.
            None => false,
        },
    }
}

/// Coarse filter equality: same kind and identical stringified value.
///
/// Intentionally string-based (see [`Filter`]'s `Display`): two floats that
/// render the same are treated as equal. This only gates a UI affordance.
pub fn filters_equal(first: &Filter, second: &Filter) -> bool {
    first.kind() == second.kind() && first.to_string() == second.to_string()
}

/// Settings equality: same key set, pairwise [`filters_equal`] values.
pub fn settings_equal(first: &FilterSettings, second: &FilterSettings) -> bool {
    first.len() == second.len()
        && first.iter().all(|(field, filter)| {
            second
                .get(field)
                .is_some_and(|other| filters_equal(filter, other))
        })
}
