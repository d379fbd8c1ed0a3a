//! Simplified near-Earth-object entity and the filter model applied to it.
//!
//! `NearEarthObject` is the flattened view the UI works with; the raw NeoWs
//! payload shapes live in [`crate::models::raw`] and are converted by
//! [`crate::models::neo_adapter`]. Filters are a closed sum type so that a
//! filter of the wrong shape for a field is unrepresentable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// NEO identifier as issued by the NeoWs API (e.g. `"2000433"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NeoId(pub String);

impl NeoId {
    pub fn new(value: impl Into<String>) -> Self {
        NeoId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Flattened near-Earth object as consumed by list and filter screens.
///
/// Immutable once constructed by the adapter; diameters are in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    pub id: NeoId,
    pub name: String,
    pub is_potentially_hazardous: bool,
    pub absolute_magnitude: f64,
    pub estimated_diameter_min_m: f64,
    pub estimated_diameter_max_m: f64,
}

/// Inclusive numeric interval, used for range filters and slider bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
}

impl NumberRange {
    pub fn new(min: f64, max: f64) -> Self {
        NumberRange { min, max }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<[f64; 2]> for NumberRange {
    fn from([min, max]: [f64; 2]) -> Self {
        NumberRange::new(min, max)
    }
}

/// Numeric entity fields a range can be derived over or filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    AbsoluteMagnitude,
    EstimatedDiameterMinMeters,
    EstimatedDiameterMaxMeters,
}

impl NumericField {
    /// Select this field's value from an entity.
    pub fn value_of(&self, neo: &NearEarthObject) -> f64 {
        match self {
            NumericField::AbsoluteMagnitude => neo.absolute_magnitude,
            NumericField::EstimatedDiameterMinMeters => neo.estimated_diameter_min_m,
            NumericField::EstimatedDiameterMaxMeters => neo.estimated_diameter_max_m,
        }
    }
}

/// Entity fields that can carry a filter. Keys serialize with the NeoWs
/// field names so stored settings stay readable next to raw payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "absolute_magnitude_h")]
    AbsoluteMagnitude,
    #[serde(rename = "estimated_diameter_min_meters")]
    EstimatedDiameterMinMeters,
    #[serde(rename = "estimated_diameter_max_meters")]
    EstimatedDiameterMaxMeters,
    #[serde(rename = "is_potentially_hazardous_asteroid")]
    Hazardous,
}

impl FilterField {
    /// Runtime value of this field on an entity. Matching dispatches on this
    /// value's type paired with the filter's type, not on the field alone.
    pub fn value_of(&self, neo: &NearEarthObject) -> FieldValue {
        match self {
            FilterField::Name => FieldValue::Text(neo.name.clone()),
            FilterField::AbsoluteMagnitude => FieldValue::Number(neo.absolute_magnitude),
            FilterField::EstimatedDiameterMinMeters => {
                FieldValue::Number(neo.estimated_diameter_min_m)
            }
            FilterField::EstimatedDiameterMaxMeters => {
                FieldValue::Number(neo.estimated_diameter_max_m)
            }
            FilterField::Hazardous => FieldValue::Bool(neo.is_potentially_hazardous),
        }
    }

    /// The numeric selector for this field, when it is numeric.
    pub fn numeric(&self) -> Option<NumericField> {
        match self {
            FilterField::AbsoluteMagnitude => Some(NumericField::AbsoluteMagnitude),
            FilterField::EstimatedDiameterMinMeters => Some(NumericField::EstimatedDiameterMinMeters),
            FilterField::EstimatedDiameterMaxMeters => Some(NumericField::EstimatedDiameterMaxMeters),
            FilterField::Name | FilterField::Hazardous => None,
        }
    }
}

/// Runtime value of an entity field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// A single filter criterion.
///
/// The variant is the filter's kind: text filters match as case-insensitive
/// substrings, range filters as inclusive intervals, boolean filters as exact
/// equality. There is no variant wrapping an absent value; an unconstrained
/// field is simply missing from the settings map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    Text(String),
    Bool(bool),
    Range(NumberRange),
}

impl Filter {
    /// Discriminant used by the coarse equality in
    /// [`crate::services::filters::filters_equal`].
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Text(_) => FilterKind::Text,
            Filter::Bool(_) => FilterKind::Bool,
            Filter::Range(_) => FilterKind::Range,
        }
    }
}

/// Stringification mirrors how the values render in the UI layer: text as-is,
/// booleans as `true`/`false`, ranges as `min,max`.
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Text(s) => write!(f, "{}", s),
            Filter::Bool(b) => write!(f, "{}", b),
            Filter::Range(r) => write!(f, "{},{}", r.min, r.max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    Bool,
    Range,
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Filter::Text(value.to_string())
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Filter::Text(value)
    }
}

impl From<bool> for Filter {
    fn from(value: bool) -> Self {
        Filter::Bool(value)
    }
}

impl From<NumberRange> for Filter {
    fn from(value: NumberRange) -> Self {
        Filter::Range(value)
    }
}

impl From<[f64; 2]> for Filter {
    fn from(value: [f64; 2]) -> Self {
        Filter::Range(value.into())
    }
}

/// The full set of configured constraints: at most one filter per field,
/// key order irrelevant. Rebuilt on every edit cycle rather than mutated.
pub type FilterSettings = BTreeMap<FilterField, Filter>;

/// Build settings from field/value pairs, omitting fields without a value.
///
/// This is the settings-level factory: each raw control value arrives already
/// converted into a [`Filter`] (or `None` when the control is unset), and
/// only the set fields survive into the map.
pub fn build_filter_settings<I>(criteria: I) -> FilterSettings
where
    I: IntoIterator<Item = (FilterField, Option<Filter>)>,
{
    criteria
        .into_iter()
        .filter_map(|(field, value)| value.map(|filter| (field, filter)))
        .collect()
}
