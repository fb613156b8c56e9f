//! Closed astrological enumerations: signs, elements, qualities and the nine bodies.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
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

/// First day (month, day) of each sun sign, in calendar order.
const SIGN_STARTS: [(u32, u32, Sign); 12] = [
    (1, 20, Sign::Aquarius),
    (2, 19, Sign::Pisces),
    (3, 21, Sign::Aries),
    (4, 20, Sign::Taurus),
    (5, 21, Sign::Gemini),
    (6, 21, Sign::Cancer),
    (7, 23, Sign::Leo),
    (8, 23, Sign::Virgo),
    (9, 23, Sign::Libra),
    (10, 23, Sign::Scorpio),
    (11, 22, Sign::Sagittarius),
    (12, 22, Sign::Capricorn),
];

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    /// Zero-based position in the zodiac wheel.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The sign that follows this one on the wheel.
    pub fn next(self) -> Sign {
        Sign::ALL[(self.index() + 1) % 12]
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub fn quality(self) -> Quality {
        match self.index() % 3 {
            0 => Quality::Cardinal,
            1 => Quality::Fixed,
            _ => Quality::Mutable,
        }
    }

    /// Case-insensitive lookup; returns `None` for anything outside the zodiac.
    pub fn parse(s: &str) -> Option<Sign> {
        let wanted = s.trim();
        Sign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
    }

    /// Tropical sun sign for a birth date.
    pub fn from_birth_date(date: NaiveDate) -> Sign {
        let day = (date.month(), date.day());
        SIGN_STARTS
            .iter()
            .rev()
            .find(|(m, d, _)| (*m, *d) <= day)
            .map(|(_, _, sign)| *sign)
            .unwrap_or(Sign::Capricorn)
    }

    /// Sign whose season begins within the given month.
    pub fn entering_in_month(month: u32) -> (Sign, u32) {
        let (_, day, sign) = SIGN_STARTS[(month.clamp(1, 12) - 1) as usize];
        (sign, day)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::parse(s).ok_or_else(|| ValidationError::InvalidSign(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
    Shadow,
}

impl Element {
    pub fn parse(s: &str) -> Option<Element> {
        match s.trim().to_lowercase().as_str() {
            "fire" => Some(Element::Fire),
            "earth" => Some(Element::Earth),
            "air" => Some(Element::Air),
            "water" => Some(Element::Water),
            "shadow" => Some(Element::Shadow),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

/// The nine bodies of a chart, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

impl Planet {
    pub const ALL: [Planet; 9] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Planet::Sun => "☉",
            Planet::Moon => "☽",
            Planet::Mercury => "☿",
            Planet::Venus => "♀",
            Planet::Mars => "♂",
            Planet::Jupiter => "♃",
            Planet::Saturn => "♄",
            Planet::Rahu => "☊",
            Planet::Ketu => "☋",
        }
    }

    /// Lunar nodes carry no sign element of their own.
    pub fn is_shadow(self) -> bool {
        matches!(self, Planet::Rahu | Planet::Ketu)
    }

    /// Element a position of this body takes when the payload omits it.
    pub fn element_in(self, sign: Sign) -> Element {
        if self.is_shadow() {
            Element::Shadow
        } else {
            sign.element()
        }
    }

    pub fn parse(s: &str) -> Option<Planet> {
        let wanted = s.trim();
        Planet::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlanetStatus {
    #[default]
    Strong,
    Weak,
}

impl PlanetStatus {
    pub fn parse(s: &str) -> Option<PlanetStatus> {
        match s.trim().to_lowercase().as_str() {
            "strong" => Some(PlanetStatus::Strong),
            "weak" => Some(PlanetStatus::Weak),
            _ => None,
        }
    }
}
