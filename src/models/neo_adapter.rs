//! Adapter module converting raw NeoWs payloads into the simplified types
//! the rest of the crate works with.
//!
//! Three conversions live here:
//!
//! - Feed payload -> flat `Vec<NearEarthObject>` across all dates
//! - Raw object -> `NearEarthObject` (diameters taken in meters)
//! - By-id payload -> `NeoObjectDetails` (close-approach history split into
//!   previous/next relative to a caller-supplied date)

use crate::models::neo::{NearEarthObject, NeoId};
use crate::models::raw::{
    CloseApproachData, EstimatedDiameter, MissDistance, NearEarthObjectRaw, NeoFeedResponse,
    RelativeVelocity,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Detail view model for a single object, built from the `/neo/{id}` payload.
///
/// Approach dates that do not exist (no past approach, no future approach)
/// are `None` rather than a placeholder string.
#[derive(Debug, Clone, PartialEq)]
pub struct NeoObjectDetails {
    pub id: NeoId,
    pub name: String,
    pub is_potentially_hazardous: bool,
    pub absolute_magnitude: f64,
    pub is_sentry_object: bool,
    pub previous_approach_date: Option<String>,
    pub next_approach_date: Option<String>,
    pub first_observation: Option<String>,
    pub orbital_period: Option<String>,
    pub orbiting_body: Option<String>,
    pub estimated_diameter: EstimatedDiameter,
    pub relative_velocity: Option<RelativeVelocity>,
    pub miss_distance: Option<MissDistance>,
    pub orbit_class_type: String,
    pub orbit_class_description: Option<String>,
    pub orbit_class_range: Option<String>,
}

/// Errors for structurally incomplete detail payloads.
#[derive(Debug, thiserror::Error)]
pub enum NeoDataError {
    /// The by-id lookup is expected to carry `orbital_data`; the feed does not.
    #[error("object {0} has no orbital data; was this a feed payload?")]
    MissingOrbitalData(NeoId),
}

fn validate_feed(feed_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(feed_json).context("Invalid feed JSON")?;
    let has_objects = value
        .as_object()
        .and_then(|obj| obj.get("near_earth_objects"))
        .is_some();
    if !has_objects {
        anyhow::bail!("Missing required 'near_earth_objects' field");
    }
    Ok(())
}

/// Parse a `/feed` response body.
pub fn parse_feed_json_str(feed_json: &str) -> Result<NeoFeedResponse> {
    validate_feed(feed_json)?;
    let feed: NeoFeedResponse =
        serde_json::from_str(feed_json).context("Failed to deserialize NeoWs feed JSON")?;

    log::debug!(
        "parsed feed: {} objects across {} dates",
        feed.element_count,
        feed.near_earth_objects.len()
    );
    Ok(feed)
}

/// Parse a `/neo/{id}` response body.
pub fn parse_neo_json_str(neo_json: &str) -> Result<NearEarthObjectRaw> {
    serde_json::from_str(neo_json).context("Failed to deserialize NeoWs object JSON")
}

/// Convert one raw object into the simplified entity (diameters in meters).
pub fn map_neo_object(raw: &NearEarthObjectRaw) -> NearEarthObject {
    NearEarthObject {
        id: NeoId::new(&raw.id),
        name: raw.name.clone(),
        is_potentially_hazardous: raw.is_potentially_hazardous_asteroid,
        absolute_magnitude: raw.absolute_magnitude_h,
        estimated_diameter_min_m: raw.estimated_diameter.meters.estimated_diameter_min,
        estimated_diameter_max_m: raw.estimated_diameter.meters.estimated_diameter_max,
    }
}

/// Convert a raw object list into simplified entities.
pub fn map_neo_objects(raw: &[NearEarthObjectRaw]) -> Vec<NearEarthObject> {
    raw.iter().map(map_neo_object).collect()
}

/// Flatten a feed response into a single entity list, date-ascending.
pub fn flatten_feed(feed: &NeoFeedResponse) -> Vec<NearEarthObject> {
    feed.near_earth_objects
        .values()
        .flat_map(|objects| objects.iter().map(map_neo_object))
        .collect()
}

/// Build the detail view model from a by-id payload.
///
/// `today` is injected so the previous/next split is deterministic; callers
/// pass the current calendar date. Approaches are scanned in date order, the
/// latest one strictly before `today` becomes the previous approach and the
/// earliest one strictly after it the next. Velocity, miss distance and
/// orbiting body come from the date-earliest approach, regardless of the
/// payload's ordering.
pub fn map_neo_details(
    raw: &NearEarthObjectRaw,
    today: NaiveDate,
) -> std::result::Result<NeoObjectDetails, NeoDataError> {
    let orbital = raw
        .orbital_data
        .as_ref()
        .ok_or_else(|| NeoDataError::MissingOrbitalData(NeoId::new(&raw.id)))?;

    let mut approaches: Vec<&CloseApproachData> = raw.close_approach_data.iter().collect();
    approaches.sort_by_key(|a| a.close_approach_date);

    let previous_approach = approaches
        .iter()
        .filter(|a| a.close_approach_date < today)
        .last();
    let next_approach = approaches.iter().find(|a| a.close_approach_date > today);

    let first_approach = approaches.first().copied();

    Ok(NeoObjectDetails {
        id: NeoId::new(&raw.id),
        name: raw.name.clone(),
        is_potentially_hazardous: raw.is_potentially_hazardous_asteroid,
        absolute_magnitude: raw.absolute_magnitude_h,
        is_sentry_object: raw.is_sentry_object,
        previous_approach_date: previous_approach.and_then(|a| approach_label(a)),
        next_approach_date: next_approach.and_then(|a| approach_label(a)),
        first_observation: orbital.first_observation_date.clone(),
        orbital_period: orbital.orbital_period.clone(),
        orbiting_body: first_approach.map(|a| a.orbiting_body.clone()),
        estimated_diameter: raw.estimated_diameter.clone(),
        relative_velocity: first_approach.map(|a| a.relative_velocity.clone()),
        miss_distance: first_approach.map(|a| a.miss_distance.clone()),
        orbit_class_type: orbital.orbit_class.orbit_class_type.clone(),
        orbit_class_description: orbital.orbit_class.orbit_class_description.clone(),
        orbit_class_range: orbital.orbit_class.orbit_class_range.clone(),
    })
}

/// Prefer the full timestamp label when the API provides one.
fn approach_label(approach: &CloseApproachData) -> Option<String> {
    approach
        .close_approach_date_full
        .clone()
        .or_else(|| Some(approach.close_approach_date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw::{DiameterRange, OrbitClass, OrbitalData};

    fn diameter(min_m: f64, max_m: f64) -> EstimatedDiameter {
        EstimatedDiameter {
            kilometers: DiameterRange {
                estimated_diameter_min: min_m / 1000.0,
                estimated_diameter_max: max_m / 1000.0,
            },
            meters: DiameterRange {
                estimated_diameter_min: min_m,
                estimated_diameter_max: max_m,
            },
            miles: DiameterRange {
                estimated_diameter_min: 0.0,
                estimated_diameter_max: 0.0,
            },
            feet: DiameterRange {
                estimated_diameter_min: 0.0,
                estimated_diameter_max: 0.0,
            },
        }
    }

    fn approach(date: &str, full: &str, body: &str, kps: &str) -> CloseApproachData {
        CloseApproachData {
            close_approach_date: date.parse().unwrap(),
            close_approach_date_full: Some(full.to_string()),
            epoch_date_close_approach: 0,
            relative_velocity: RelativeVelocity {
                kilometers_per_second: kps.to_string(),
                kilometers_per_hour: "20067.0".into(),
                miles_per_hour: "12469.3".into(),
            },
            miss_distance: MissDistance {
                astronomical: "0.17".into(),
                lunar: "68.6".into(),
                kilometers: "26400000".into(),
                miles: "16400000".into(),
            },
            orbiting_body: body.to_string(),
        }
    }

    fn raw_eros(approaches: Vec<CloseApproachData>, with_orbital: bool) -> NearEarthObjectRaw {
        NearEarthObjectRaw {
            links: Default::default(),
            id: "2000433".into(),
            neo_reference_id: "2000433".into(),
            name: "433 Eros (A898 PA)".into(),
            nasa_jpl_url: String::new(),
            absolute_magnitude_h: 10.31,
            estimated_diameter: diameter(22006.0, 49208.0),
            is_potentially_hazardous_asteroid: false,
            close_approach_data: approaches,
            is_sentry_object: false,
            orbital_data: with_orbital.then(|| OrbitalData {
                first_observation_date: Some("1893-10-29".into()),
                orbital_period: Some("643.1".into()),
                orbit_class: OrbitClass {
                    orbit_class_type: "AMO".into(),
                    orbit_class_description: Some("Near-Earth asteroid orbits".into()),
                    orbit_class_range: Some("1.017 AU < q < 1.3 AU".into()),
                },
            }),
        }
    }

    #[test]
    fn test_map_neo_object_takes_meter_diameters() {
        let raw = raw_eros(vec![], false);
        let neo = map_neo_object(&raw);

        assert_eq!(neo.id.value(), "2000433");
        assert_eq!(neo.name, "433 Eros (A898 PA)");
        assert!(!neo.is_potentially_hazardous);
        assert_eq!(neo.absolute_magnitude, 10.31);
        assert_eq!(neo.estimated_diameter_min_m, 22006.0);
        assert_eq!(neo.estimated_diameter_max_m, 49208.0);
    }

    #[test]
    fn test_map_neo_details_splits_previous_and_next() {
        // Payload order is deliberately not date order.
        let raw = raw_eros(
            vec![
                approach("2031-01-02", "2031-Jan-02 18:34", "Venus", "7.21"),
                approach("2019-01-15", "2019-Jan-15 06:01", "Earth", "5.57"),
                approach("2025-11-30", "2025-Nov-30 02:18", "Mars", "6.02"),
            ],
            true,
        );

        let today = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let details = map_neo_details(&raw, today).unwrap();

        assert_eq!(
            details.previous_approach_date.as_deref(),
            Some("2025-Nov-30 02:18")
        );
        assert_eq!(
            details.next_approach_date.as_deref(),
            Some("2031-Jan-02 18:34")
        );
        // Velocity/distance/body come from the date-earliest approach, not
        // the payload-first one.
        assert_eq!(details.orbiting_body.as_deref(), Some("Earth"));
        assert_eq!(
            details
                .relative_velocity
                .as_ref()
                .map(|v| v.kilometers_per_second.as_str()),
            Some("5.57")
        );
        assert_eq!(details.orbit_class_type, "AMO");
        assert_eq!(details.first_observation.as_deref(), Some("1893-10-29"));
    }

    #[test]
    fn test_map_neo_details_no_approaches() {
        let raw = raw_eros(vec![], true);
        let today = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let details = map_neo_details(&raw, today).unwrap();

        assert!(details.previous_approach_date.is_none());
        assert!(details.next_approach_date.is_none());
        assert!(details.orbiting_body.is_none());
        assert!(details.relative_velocity.is_none());
        assert!(details.miss_distance.is_none());
    }

    #[test]
    fn test_map_neo_details_requires_orbital_data() {
        let raw = raw_eros(vec![], false);
        let today = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let err = map_neo_details(&raw, today).unwrap_err();
        assert!(matches!(err, NeoDataError::MissingOrbitalData(_)));
    }

    #[test]
    fn test_parse_feed_rejects_missing_objects_field() {
        let result = parse_feed_json_str(r#"{"element_count": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_feed_rejects_invalid_json() {
        let result = parse_feed_json_str("not json");
        assert!(result.is_err());
    }
}
