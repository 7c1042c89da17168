use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ephemeris::PositionSet;
use crate::Body;

// ---------------------------
// ## Aspect vocabulary
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

/// Tolerance around the exact angle, shared by every aspect kind.
pub const ASPECT_ORB: f64 = 5.0;

// Checked in this order; the first window containing the orb wins.
const ASPECT_ANGLES: [(Aspect, f64); 5] = [
    (Aspect::Conjunction, 0.0),
    (Aspect::Square, 90.0),
    (Aspect::Trine, 120.0),
    (Aspect::Opposition, 180.0),
    (Aspect::Sextile, 60.0),
];

impl Aspect {
    pub fn exact_angle(self) -> f64 {
        match self {
            Aspect::Conjunction => 0.0,
            Aspect::Opposition => 180.0,
            Aspect::Trine => 120.0,
            Aspect::Square => 90.0,
            Aspect::Sextile => 60.0,
        }
    }

    /// Classifies a separation in `[0, 180]` degrees, if any aspect window
    /// contains it.
    pub fn from_orb(orb: f64) -> Option<Aspect> {
        ASPECT_ANGLES
            .iter()
            .copied()
            .find(|&(_, angle)| (orb - angle).abs() <= ASPECT_ORB)
            .map(|(aspect, _)| aspect)
    }

    pub fn name(self) -> &'static str {
        match self {
            Aspect::Conjunction => "Conjunction",
            Aspect::Opposition => "Opposition",
            Aspect::Trine => "Trine",
            Aspect::Square => "Square",
            Aspect::Sextile => "Sextile",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRecord {
    pub transiting: Body,
    pub natal: Body,
    pub aspect: Aspect,
}

// ---------------------------
// ## Analysis
// ---------------------------

/// Shortest angular separation between two longitudes, in `[0, 180]`.
/// Both inputs are wrapped into `[0, 360)` first, so un-normalized
/// longitudes compare like their canonical angles.
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let mut orb = (a.rem_euclid(360.0) - b.rem_euclid(360.0)).abs();
    if orb > 180.0 {
        orb = 360.0 - orb;
    }
    orb
}

/// Scans every transit and natal pair and records those whose separation
/// lands in an aspect window.
///
/// Record order follows the insertion order of both sets, transit outer,
/// natal inner. Nothing is deduplicated or ranked; callers treat the first
/// record as the leading influence. A body missing from either set simply
/// produces no pairs.
pub fn analyze_aspects(transit: &PositionSet, natal: &PositionSet) -> Vec<AspectRecord> {
    let mut records = Vec::new();
    for (transiting, transit_longitude) in transit.iter() {
        for (natal_body, natal_longitude) in natal.iter() {
            let orb = angular_separation(transit_longitude, natal_longitude);
            if let Some(aspect) = Aspect::from_orb(orb) {
                records.push(AspectRecord {
                    transiting,
                    natal: natal_body,
                    aspect,
                });
            }
        }
    }
    debug!(records = records.len(), "analyzed transit aspects");
    records
}
