use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::{AstroError, AstroResult, Body, Location};

// ---------------------------
// ## Approximation constants
// ---------------------------

const SECONDS_PER_DAY: i64 = 86_400;

// Mean daily motion, degrees per day.
const SUN_DEG_PER_DAY: f64 = 0.9856;
const MOON_DEG_PER_DAY: f64 = 13.1763;

// The remaining bodies are modelled as offsets drifting away from the Sun.
const PLANET_DEG_PER_DAY: [(Body, f64); 5] = [
    (Body::Mercury, 4.1),
    (Body::Venus, 1.6),
    (Body::Mars, 0.5),
    (Body::Jupiter, 0.08),
    (Body::Saturn, 0.03),
];

// Whole days from the Unix epoch to 2000-01-01.
const J2000_UNIX_DAYS: i64 = 10957;
const GST_AT_J2000_HOURS: f64 = 18.697374558;
const GST_ADVANCE_HOURS_PER_DAY: f64 = 24.06570982441908;

// ---------------------------
// ## Position sets
// ---------------------------

/// Ecliptic longitudes in degrees keyed by body, in insertion order.
///
/// Values produced by [`compute_positions`] fall in `[0, 360)`, but sets
/// assembled elsewhere may carry un-normalized longitudes; consumers that
/// care about range normalize explicitly. Serializes as a flat map of body
/// name to longitude.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionSet {
    entries: Vec<(Body, f64)>,
}

impl PositionSet {
    pub fn new() -> Self {
        PositionSet {
            entries: Vec::new(),
        }
    }

    /// Inserts or overwrites the longitude for a body. A body keeps the slot
    /// of its first insertion.
    pub fn insert(&mut self, body: Body, longitude: f64) {
        match self.entries.iter_mut().find(|(b, _)| *b == body) {
            Some(entry) => entry.1 = longitude,
            None => self.entries.push((body, longitude)),
        }
    }

    pub fn get(&self, body: Body) -> Option<f64> {
        self.entries
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, longitude)| *longitude)
    }

    pub fn contains(&self, body: Body) -> bool {
        self.get(body).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Body, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Body, f64)> for PositionSet {
    fn from_iter<I: IntoIterator<Item = (Body, f64)>>(iter: I) -> Self {
        let mut positions = PositionSet::new();
        for (body, longitude) in iter {
            positions.insert(body, longitude);
        }
        positions
    }
}

impl Serialize for PositionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (body, longitude) in &self.entries {
            map.serialize_entry(body, longitude)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PositionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PositionSetVisitor;

        impl<'de> Visitor<'de> for PositionSetVisitor {
            type Value = PositionSet;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of body names to longitudes in degrees")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut positions = PositionSet::new();
                while let Some((body, longitude)) = access.next_entry::<Body, f64>()? {
                    positions.insert(body, longitude);
                }
                Ok(positions)
            }
        }

        deserializer.deserialize_map(PositionSetVisitor)
    }
}

// ---------------------------
// ## Position model
// ---------------------------

// Truncating division; pre-epoch instants are not supported inputs.
fn day_number(date_time: DateTime<Utc>) -> i64 {
    date_time.timestamp() / SECONDS_PER_DAY
}

/// Local sidereal time folded onto the ecliptic. This is the horizon point
/// the model reports as the Ascendant; geographic latitude does not enter
/// the formula.
fn ascendant_longitude(days: i64, longitude: f64) -> f64 {
    let days_since_j2000 = (days - J2000_UNIX_DAYS) as f64;
    let gst =
        (GST_AT_J2000_HOURS + GST_ADVANCE_HOURS_PER_DAY * days_since_j2000).rem_euclid(24.0);
    let lst = (gst + longitude / 15.0).rem_euclid(24.0);
    (lst * 15.0).rem_euclid(360.0)
}

/// Computes approximate longitudes for all eight bodies at the given instant
/// and place.
///
/// The model is a whole-day linear approximation: every instant of a UTC day
/// yields the same set. All longitudes are reduced into `[0, 360)` with a
/// mathematical modulo, so the result is reproducible bit for bit.
pub fn compute_positions(
    date_time: DateTime<Utc>,
    location: &Location,
) -> AstroResult<PositionSet> {
    if !location.latitude.is_finite() || !location.longitude.is_finite() {
        return Err(AstroError::InvalidInput(format!(
            "location coordinates must be finite, got ({}, {})",
            location.latitude, location.longitude
        )));
    }

    let days = day_number(date_time);
    let sun = (days as f64 * SUN_DEG_PER_DAY).rem_euclid(360.0);
    let moon = (days as f64 * MOON_DEG_PER_DAY).rem_euclid(360.0);
    trace!(days, sun, moon, "computed luminary longitudes");

    let mut positions = PositionSet::new();
    positions.insert(Body::Sun, sun);
    positions.insert(Body::Moon, moon);
    for (body, rate) in PLANET_DEG_PER_DAY {
        // The reduction applies to the whole sum, not to the rate term alone.
        positions.insert(body, (sun + days as f64 * rate).rem_euclid(360.0));
    }
    positions.insert(
        Body::Ascendant,
        ascendant_longitude(days, location.longitude),
    );

    debug!(days, entries = positions.len(), "computed position set");
    Ok(positions)
}
