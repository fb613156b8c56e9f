//! Domain records returned to callers.
//!
//! Every record is built once by a normalizer or a fallback generator and
//! never mutated afterwards. Wire names are camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::zodiac::{Element, Planet, PlanetStatus, Quality, Sign};

/// Provenance of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    AiGenerated,
    Fallback,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::AiGenerated => "ai_generated",
            DataSource::Fallback => "fallback",
        }
    }
}

// ============================================================================
// Birth chart
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub name: Planet,
    pub symbol: String,
    pub element: Element,
    pub degree: u8,
    pub house: u8,
    pub status: PlanetStatus,
    pub sign: Sign,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HousePosition {
    pub number: u8,
    pub name: String,
    pub area: String,
    pub sign: Sign,
}

/// Exactly nine planetary positions (canonical order) and twelve houses (ascending).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChartRecord {
    pub ascendant: Sign,
    pub sun_sign: Sign,
    pub moon_sign: Sign,
    pub planetary_positions: Vec<PlanetPosition>,
    pub house_positions: Vec<HousePosition>,
}

// ============================================================================
// Horoscope
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeRecord {
    pub id: String,
    pub full_name: String,
    pub zodiac_sign: Sign,
    pub date: NaiveDate,
    pub prediction: String,
    pub lucky_color: String,
    pub lucky_number: u32,
    pub compatibility: Vec<Sign>,
    pub health: String,
    pub career: String,
    pub love: String,
    pub finance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planetary_influence: Option<String>,
    pub element: Element,
    pub quality: Quality,
    pub data_source: DataSource,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Calendar
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Cosmic,
    Zodiac,
    Planetary,
}

impl EventType {
    pub fn parse(s: &str) -> Option<EventType> {
        match s.trim().to_lowercase().as_str() {
            "cosmic" => Some(EventType::Cosmic),
            "zodiac" => Some(EventType::Zodiac),
            "planetary" => Some(EventType::Planetary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventRecord {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub significance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyForecastRecord {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub overall_energy: String,
    pub predictions: Vec<String>,
    pub lucky_days: Vec<String>,
    pub challenging_days: Vec<String>,
}

// ============================================================================
// Matchmaking
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    High,
    Medium,
    Low,
}

impl MatchLevel {
    pub fn from_score(score: u8) -> MatchLevel {
        if score >= 80 {
            MatchLevel::High
        } else if score >= 60 {
            MatchLevel::Medium
        } else {
            MatchLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchLevel::High => "high",
            MatchLevel::Medium => "medium",
            MatchLevel::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub compatibility: u8,
    pub level: MatchLevel,
    pub message: String,
    pub love_compatibility: String,
    pub friendship_compatibility: String,
    pub business_compatibility: String,
    pub tips: Vec<String>,
}

// ============================================================================
// Mantras and remedies
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MantraCategory {
    #[serde(rename = "Planetary Mantras")]
    Planetary,
    #[serde(rename = "Zodiac Specific Mantras")]
    ZodiacSpecific,
    #[serde(rename = "Healing Mantras")]
    Healing,
}

impl MantraCategory {
    pub const ALL: [MantraCategory; 3] = [
        MantraCategory::Planetary,
        MantraCategory::ZodiacSpecific,
        MantraCategory::Healing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MantraCategory::Planetary => "Planetary Mantras",
            MantraCategory::ZodiacSpecific => "Zodiac Specific Mantras",
            MantraCategory::Healing => "Healing Mantras",
        }
    }

    /// Accepts the full label or its leading word.
    pub fn parse(s: &str) -> Option<MantraCategory> {
        match s.trim().to_lowercase().as_str() {
            "planetary mantras" | "planetary" => Some(MantraCategory::Planetary),
            "zodiac specific mantras" | "zodiac specific" | "zodiac" => {
                Some(MantraCategory::ZodiacSpecific)
            }
            "healing mantras" | "healing" => Some(MantraCategory::Healing),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MantraRecord {
    pub id: String,
    pub name: String,
    pub sanskrit: String,
    pub transliteration: String,
    pub meaning: String,
    pub benefits: Vec<String>,
    pub best_time: String,
    pub repetitions: u32,
    pub category: MantraCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemedyCategory {
    #[serde(rename = "Planetary Gemstones")]
    PlanetaryGemstones,
    #[serde(rename = "Zodiac Remedies")]
    ZodiacRemedies,
    #[serde(rename = "General Remedies")]
    GeneralRemedies,
}

impl RemedyCategory {
    pub const ALL: [RemedyCategory; 3] = [
        RemedyCategory::PlanetaryGemstones,
        RemedyCategory::ZodiacRemedies,
        RemedyCategory::GeneralRemedies,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RemedyCategory::PlanetaryGemstones => "Planetary Gemstones",
            RemedyCategory::ZodiacRemedies => "Zodiac Remedies",
            RemedyCategory::GeneralRemedies => "General Remedies",
        }
    }

    pub fn parse(s: &str) -> Option<RemedyCategory> {
        match s.trim().to_lowercase().as_str() {
            "planetary gemstones" | "planetary" | "gemstones" => {
                Some(RemedyCategory::PlanetaryGemstones)
            }
            "zodiac remedies" | "zodiac" => Some(RemedyCategory::ZodiacRemedies),
            "general remedies" | "general" => Some(RemedyCategory::GeneralRemedies),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gemstone {
    pub name: String,
    pub planet: Planet,
    pub color: String,
    pub finger: String,
    pub day: String,
    pub benefits: String,
    pub price: String,
    pub alternatives: String,
    pub mantra: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedyRecord {
    pub id: String,
    pub name: String,
    pub category: RemedyCategory,
    pub description: String,
    pub solutions: Vec<String>,
    pub gemstones: Vec<Gemstone>,
    pub mantras: Vec<String>,
}

// ============================================================================
// Tarot
// ============================================================================

/// A card from the static deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotCard {
    pub id: &'static str,
    pub name: &'static str,
    pub meaning: &'static str,
    pub reversed: &'static str,
    pub image: &'static str,
    pub suit: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardPosition {
    Past,
    Present,
    Future,
}

impl CardPosition {
    pub const SPREAD: [CardPosition; 3] =
        [CardPosition::Past, CardPosition::Present, CardPosition::Future];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawnCard {
    #[serde(flatten)]
    pub card: &'static TarotCard,
    pub is_reversed: bool,
    pub position: CardPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotReading {
    pub cards: Vec<DrawnCard>,
    pub interpretation: String,
    pub message: String,
}

// ============================================================================
// Panchang
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paksha {
    #[serde(rename = "Shukla Paksha (Waxing Moon)")]
    Shukla,
    #[serde(rename = "Krishna Paksha (Waning Moon)")]
    Krishna,
}

impl Paksha {
    /// Tithi positions 1..=15 are waxing, 16..=30 waning.
    pub fn from_tithi_position(position: usize) -> Paksha {
        if position <= 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangRecord {
    pub date: NaiveDate,
    pub tithi: String,
    pub nakshatra: String,
    pub yoga: String,
    pub karana: String,
    pub sunrise: String,
    pub sunset: String,
    pub auspicious_timings: Vec<String>,
    pub inauspicious_timings: Vec<String>,
    pub daily_wisdom: String,
    pub paksha: Paksha,
    pub day_name: String,
    pub tithi_significance: String,
    pub nakshatra_significance: String,
    pub data_source: DataSource,
}

// ============================================================================
// Zodiac profiles
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub ruling_planet: &'static str,
    pub dates: &'static str,
    pub traits: &'static [&'static str],
    pub description: &'static str,
    pub lucky_colors: &'static [&'static str],
    pub lucky_numbers: &'static [u32],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_level_tiers() {
        assert_eq!(MatchLevel::from_score(100), MatchLevel::High);
        assert_eq!(MatchLevel::from_score(80), MatchLevel::High);
        assert_eq!(MatchLevel::from_score(79), MatchLevel::Medium);
        assert_eq!(MatchLevel::from_score(60), MatchLevel::Medium);
        assert_eq!(MatchLevel::from_score(59), MatchLevel::Low);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            MantraCategory::parse("healing mantras"),
            Some(MantraCategory::Healing)
        );
        assert_eq!(MantraCategory::parse("Zodiac"), Some(MantraCategory::ZodiacSpecific));
        assert_eq!(MantraCategory::parse("weather"), None);
        assert_eq!(
            RemedyCategory::parse("General Remedies"),
            Some(RemedyCategory::GeneralRemedies)
        );
    }

    #[test]
    fn test_wire_names() {
        let event = CalendarEventRecord {
            id: "evt-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            title: "New Moon".to_string(),
            description: String::new(),
            event_type: EventType::Planetary,
            significance: String::new(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "planetary");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(
            serde_json::to_value(Paksha::Krishna).unwrap(),
            "Krishna Paksha (Waning Moon)"
        );
        assert_eq!(serde_json::to_value(DataSource::Fallback).unwrap(), "fallback");
    }
}
