//! Raw NeoWs wire types.
//!
//! These structs mirror the JSON shapes returned by the NASA NeoWs REST API:
//! the `/feed` endpoint (objects grouped per calendar date) and the
//! `/neo/{id}` lookup (same object shape plus an `orbital_data` block).
//! Velocity and miss-distance figures arrive as decimal strings and are kept
//! that way; only the fields the simplified entity needs are parsed as
//! numbers upstream.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pagination links attached to feed responses and individual objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
}

/// Response body of `/feed?start_date=..&end_date=..`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoFeedResponse {
    #[serde(default)]
    pub links: PageLinks,
    pub element_count: u64,
    /// Objects grouped by approach date; `BTreeMap` keeps dates ascending.
    pub near_earth_objects: BTreeMap<NaiveDate, Vec<NearEarthObjectRaw>>,
}

/// A single NEO as returned by the feed or the by-id lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObjectRaw {
    #[serde(default)]
    pub links: PageLinks,
    pub id: String,
    pub neo_reference_id: String,
    pub name: String,
    #[serde(default)]
    pub nasa_jpl_url: String,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproachData>,
    #[serde(default)]
    pub is_sentry_object: bool,
    /// Only present on the `/neo/{id}` lookup, never in the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_data: Option<OrbitalData>,
}

/// Estimated diameter ranges, one per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
    pub meters: DiameterRange,
    pub miles: DiameterRange,
    pub feet: DiameterRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

/// One close-approach record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproachData {
    pub close_approach_date: NaiveDate,
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
    pub epoch_date_close_approach: i64,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
    pub orbiting_body: String,
}

/// Relative velocity in the API's string-decimal encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
    pub kilometers_per_hour: String,
    pub miles_per_hour: String,
}

/// Miss distance in the API's string-decimal encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissDistance {
    pub astronomical: String,
    pub lunar: String,
    pub kilometers: String,
    pub miles: String,
}

/// Orbital data block on the by-id lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalData {
    #[serde(default)]
    pub first_observation_date: Option<String>,
    #[serde(default)]
    pub orbital_period: Option<String>,
    pub orbit_class: OrbitClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitClass {
    pub orbit_class_type: String,
    #[serde(default)]
    pub orbit_class_description: Option<String>,
    #[serde(default)]
    pub orbit_class_range: Option<String>,
}
