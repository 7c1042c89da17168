use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ephemeris::PositionSet;
use crate::AstroError;

// ---------------------------
// ## Signs
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Classifies an ecliptic longitude into its 30 degree sign segment.
    /// Longitudes outside `[0, 360)` are wrapped first.
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized_longitude = longitude.rem_euclid(360.0);
        let sign_index = (normalized_longitude / 30.0).floor() as usize;
        match sign_index {
            0 => ZodiacSign::Aries,
            1 => ZodiacSign::Taurus,
            2 => ZodiacSign::Gemini,
            3 => ZodiacSign::Cancer,
            4 => ZodiacSign::Leo,
            5 => ZodiacSign::Virgo,
            6 => ZodiacSign::Libra,
            7 => ZodiacSign::Scorpio,
            8 => ZodiacSign::Sagittarius,
            9 => ZodiacSign::Capricorn,
            10 => ZodiacSign::Aquarius,
            11 => ZodiacSign::Pisces,
            _ => ZodiacSign::Aries, // Fallback
        }
    }

    pub fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn from_name(name: &str) -> Option<ZodiacSign> {
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZodiacSign::from_name(s)
            .ok_or_else(|| AstroError::InvalidInput(format!("unrecognized zodiac sign: {s}")))
    }
}

// ---------------------------
// ## Elements
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    /// Element lookup by sign name. Unrecognized names fall back to Fire.
    pub fn for_sign_name(name: &str) -> Element {
        ZodiacSign::from_name(name)
            .map(ZodiacSign::element)
            .unwrap_or(Element::Fire)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------
// ## Element statistics
// ---------------------------

/// Counts how many longitudes in the set fall in each element, in the fixed
/// order Fire, Earth, Air, Water. Counters start at zero, so elements with no
/// observations still appear.
pub fn element_distribution(positions: &PositionSet) -> [(Element, usize); 4] {
    let mut counts = [
        (Element::Fire, 0),
        (Element::Earth, 0),
        (Element::Air, 0),
        (Element::Water, 0),
    ];
    for (_, longitude) in positions.iter() {
        let element = ZodiacSign::from_longitude(longitude).element();
        for slot in counts.iter_mut() {
            if slot.0 == element {
                slot.1 += 1;
            }
        }
    }
    counts
}

/// The element with the highest count across the set. Ties go to the first
/// element reaching the maximum in the Fire, Earth, Air, Water order.
pub fn dominant_element(positions: &PositionSet) -> Element {
    let counts = element_distribution(positions);
    let mut leader = counts[0];
    for candidate in counts.iter().copied().skip(1) {
        if candidate.1 > leader.1 {
            leader = candidate;
        }
    }
    leader.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Body;

    #[test]
    fn test_sign_boundaries() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(359.9), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
    }

    #[test]
    fn test_sign_is_periodic() {
        for longitude in [0.0, 12.5, 100.0, 187.3, 359.0] {
            assert_eq!(
                ZodiacSign::from_longitude(longitude),
                ZodiacSign::from_longitude(longitude + 360.0)
            );
        }
    }

    #[test]
    fn test_negative_longitudes_wrap() {
        assert_eq!(ZodiacSign::from_longitude(-10.0), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(-350.0), ZodiacSign::Aries);
    }

    #[test]
    fn test_elements_group_signs_in_threes() {
        for element in Element::ALL {
            let members = ZodiacSign::ALL
                .iter()
                .filter(|sign| sign.element() == element)
                .count();
            assert_eq!(members, 3, "{element} should hold exactly three signs");
        }
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::Virgo.element(), Element::Earth);
        assert_eq!(ZodiacSign::Libra.element(), Element::Air);
        assert_eq!(ZodiacSign::Scorpio.element(), Element::Water);
    }

    #[test]
    fn test_unrecognized_sign_name_falls_back_to_fire() {
        assert_eq!(Element::for_sign_name("Ophiuchus"), Element::Fire);
        assert_eq!(Element::for_sign_name("cancer"), Element::Water);
    }

    #[test]
    fn test_sign_parsing() {
        assert_eq!("Sagittarius".parse::<ZodiacSign>().unwrap(), ZodiacSign::Sagittarius);
        assert_eq!("aries".parse::<ZodiacSign>().unwrap(), ZodiacSign::Aries);
        assert!("Midheaven".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn test_dominant_element_uniform_set() {
        // Cancer, Scorpio and Pisces longitudes only.
        let positions: PositionSet = [
            (Body::Sun, 95.0),
            (Body::Moon, 215.0),
            (Body::Venus, 340.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(dominant_element(&positions), Element::Water);
    }

    #[test]
    fn test_dominant_element_tie_takes_first_in_order() {
        // One Taurus and one Gemini longitude: Earth and Air tie at one each,
        // and Earth sits earlier in the enumeration.
        let positions: PositionSet =
            [(Body::Sun, 45.0), (Body::Moon, 75.0)].into_iter().collect();

        assert_eq!(dominant_element(&positions), Element::Earth);
    }

    #[test]
    fn test_dominant_element_empty_set_is_fire() {
        assert_eq!(dominant_element(&PositionSet::new()), Element::Fire);
    }

    #[test]
    fn test_element_distribution_counts() {
        let positions: PositionSet = [
            (Body::Sun, 5.0),    // Aries, Fire
            (Body::Moon, 125.0), // Leo, Fire
            (Body::Mars, 35.0),  // Taurus, Earth
        ]
        .into_iter()
        .collect();

        let counts = element_distribution(&positions);
        assert_eq!(counts[0], (Element::Fire, 2));
        assert_eq!(counts[1], (Element::Earth, 1));
        assert_eq!(counts[2], (Element::Air, 0));
        assert_eq!(counts[3], (Element::Water, 0));
    }
}
