use std::fmt;
use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aspects::{analyze_aspects, AspectRecord};
use crate::chart::Chart;
use crate::ephemeris::compute_positions;
use crate::{AstroResult, Body, Location};

// ---------------------------
// ## Deterministic scoring
// ---------------------------

/// Message reported when no transit aspects the natal chart.
pub const STABLE_MESSAGE: &str =
    "The skies are quiet today. Cosmic energies hold steady, favoring rest and routine.";

/// One sentence about the day, built from the first aspect record only.
pub fn transit_influence_summary(aspects: &[AspectRecord]) -> String {
    match aspects.first() {
        None => STABLE_MESSAGE.to_string(),
        Some(first) => format!(
            "Transiting {} forms a {} with your natal {} and sets the tone for the day.",
            first.transiting, first.aspect, first.natal
        ),
    }
}

/// The transiting body of the first record, or the Sun when nothing aspects
/// the chart.
pub fn dominant_planet(aspects: &[AspectRecord]) -> Body {
    aspects
        .first()
        .map(|record| record.transiting)
        .unwrap_or(Body::Sun)
}

/// Step function on the record count: quiet days score 3, busy days cap at 5.
pub fn intensity(aspects: &[AspectRecord]) -> u8 {
    match aspects.len() {
        0 | 1 => 3,
        2 => 4,
        _ => 5,
    }
}

// ---------------------------
// ## Ratings
// ---------------------------

// Rating values vary run to run on purpose; only the bounds are contractual.
pub const LIFE_AREA_RANGE: RangeInclusive<u8> = 1..=10;
pub const ACCURACY_RANGE: RangeInclusive<u8> = 70..=99;
pub const COSMIC_ENERGY_RANGE: RangeInclusive<u8> = 1..=100;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeAreaRatings {
    pub love: u8,
    pub career: u8,
    pub health: u8,
    pub spiritual: u8,
}

impl LifeAreaRatings {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        LifeAreaRatings {
            love: rng.gen_range(LIFE_AREA_RANGE),
            career: rng.gen_range(LIFE_AREA_RANGE),
            health: rng.gen_range(LIFE_AREA_RANGE),
            spiritual: rng.gen_range(LIFE_AREA_RANGE),
        }
    }
}

// ---------------------------
// ## Readings
// ---------------------------

/// A daily reading: the reproducible aspect analysis plus playful random
/// ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitReading {
    pub aspects: Vec<AspectRecord>,
    pub summary: String,
    pub dominant_planet: Body,
    pub intensity: u8,
    pub ratings: LifeAreaRatings,
    pub accuracy: u8,
    pub cosmic_energy: u8,
}

impl TransitReading {
    /// Compares the transit sky at the given instant and place against a
    /// natal chart and assembles the day's reading. Rating fields draw from
    /// `rng`; everything else is reproducible.
    pub fn calculate<R: Rng + ?Sized>(
        natal: &Chart,
        date_time: DateTime<Utc>,
        location: &Location,
        rng: &mut R,
    ) -> AstroResult<TransitReading> {
        let transit = compute_positions(date_time, location)?;
        let aspects = analyze_aspects(&transit, &natal.positions);
        debug!(aspects = aspects.len(), "assembled transit reading");

        let summary = transit_influence_summary(&aspects);
        let dominant = dominant_planet(&aspects);
        let level = intensity(&aspects);
        Ok(TransitReading {
            aspects,
            summary,
            dominant_planet: dominant,
            intensity: level,
            ratings: LifeAreaRatings::random(rng),
            accuracy: rng.gen_range(ACCURACY_RANGE),
            cosmic_energy: rng.gen_range(COSMIC_ENERGY_RANGE),
        })
    }
}

impl fmt::Display for TransitReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        writeln!(f, "Dominant planet: {}", self.dominant_planet)?;
        writeln!(f, "Intensity: {}/5", self.intensity)?;
        writeln!(
            f,
            "Love {}/10  Career {}/10  Health {}/10  Spiritual {}/10",
            self.ratings.love, self.ratings.career, self.ratings.health, self.ratings.spiritual
        )?;
        write!(
            f,
            "Accuracy {}%  Cosmic energy {}/100",
            self.accuracy, self.cosmic_energy
        )
    }
}
