//! Fast approximate horoscope calculations, no ephemeris required.
//!
//! `aztro_lite` trades the precision of a real ephemeris for closed-form
//! linear and periodic approximations of planetary longitudes. On top of
//! that position model it derives zodiac signs and elements, assembles natal
//! and transit charts, detects aspects between two position sets and scores
//! their influence. Outputs are reproducible bit for bit across platforms;
//! none of them are astronomically accurate.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod influence;
pub mod zodiac;

pub use aspects::{analyze_aspects, Aspect, AspectRecord};
pub use chart::{BirthInfo, Chart, ChartMode};
pub use ephemeris::{compute_positions, PositionSet};
pub use influence::{
    dominant_planet, intensity, transit_influence_summary, LifeAreaRatings, TransitReading,
};
pub use zodiac::{dominant_element, element_distribution, Element, ZodiacSign};

// ---------------------------
// ## Enumerations
// ---------------------------

/// The fixed set of points a position set can carry. The Ascendant is not a
/// planet but is computed and compared like one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Ascendant,
}

impl Body {
    pub const ALL: [Body; 8] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Ascendant,
    ];

    pub fn iter() -> impl Iterator<Item = Body> {
        Self::ALL.iter().copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Ascendant => "Ascendant",
        }
    }

    pub fn from_name(name: &str) -> Option<Body> {
        Self::ALL
            .iter()
            .copied()
            .find(|body| body.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------
// ## Structures
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude,
            longitude,
        }
    }

    pub fn delhi() -> Self { Location { latitude: 28.6139, longitude: 77.2090 } }
    pub fn mumbai() -> Self { Location { latitude: 19.0760, longitude: 72.8777 } }
    pub fn bangalore() -> Self { Location { latitude: 12.9716, longitude: 77.5946 } }
    pub fn kochi() -> Self { Location { latitude: 9.9312, longitude: 76.2673 } }
    pub fn dubai() -> Self { Location { latitude: 25.276987, longitude: 55.296234 } }
}

// ---------------------------
// ## Errors
// ---------------------------

#[derive(Debug, thiserror::Error)]
pub enum AstroError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type AstroResult<T> = Result<T, AstroError>;
