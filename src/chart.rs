use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ephemeris::{compute_positions, PositionSet};
use crate::zodiac::{dominant_element, Element, ZodiacSign};
use crate::{AstroError, AstroResult, Body, Location};

// ---------------------------
// ## Birth data
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub date_time: DateTime<Utc>,
    pub location: Location,
}

impl BirthInfo {
    /// Builds the full natal chart for this birth data.
    pub fn natal_chart(&self) -> AstroResult<Chart> {
        let positions = compute_positions(self.date_time, &self.location)?;
        Chart::build(&positions, ChartMode::Full)
    }
}

// ---------------------------
// ## Charts
// ---------------------------

/// Selects how the rising sign is derived. `Full` reads the Ascendant entry;
/// `Simplified` reuses the sun sign, for callers that never computed a
/// horizon point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartMode {
    Full,
    Simplified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    /// `None` when the rising point could not be derived in the chosen mode.
    pub rising_sign: Option<ZodiacSign>,
    pub dominant_element: Element,
    pub positions: PositionSet,
}

impl Chart {
    /// Assembles a chart from a position set. Both modes require Sun and
    /// Moon longitudes; a Full chart with no Ascendant entry keeps an
    /// unknown rising sign rather than failing.
    pub fn build(positions: &PositionSet, mode: ChartMode) -> AstroResult<Chart> {
        let sun = positions.get(Body::Sun).ok_or_else(|| {
            AstroError::InvalidInput("position set is missing the Sun longitude".to_string())
        })?;
        let moon = positions.get(Body::Moon).ok_or_else(|| {
            AstroError::InvalidInput("position set is missing the Moon longitude".to_string())
        })?;

        let sun_sign = ZodiacSign::from_longitude(sun);
        let moon_sign = ZodiacSign::from_longitude(moon);
        let rising_sign = match mode {
            ChartMode::Full => positions
                .get(Body::Ascendant)
                .map(ZodiacSign::from_longitude),
            ChartMode::Simplified => Some(sun_sign),
        };
        debug!(?mode, %sun_sign, %moon_sign, "built chart");

        Ok(Chart {
            sun_sign,
            moon_sign,
            rising_sign,
            dominant_element: dominant_element(positions),
            positions: positions.clone(),
        })
    }

    pub fn rising_sign_name(&self) -> &'static str {
        match self.rising_sign {
            Some(sign) => sign.name(),
            None => "Unknown",
        }
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Sun in {}, Moon in {}, {} rising",
            self.sun_sign,
            self.moon_sign,
            self.rising_sign_name()
        )?;
        writeln!(f, "Dominant element: {}", self.dominant_element)?;
        for (body, longitude) in self.positions.iter() {
            writeln!(f, "  {:<10} {:>8.3}", body, longitude)?;
        }
        Ok(())
    }
}
