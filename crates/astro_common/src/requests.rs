//! Inbound request bodies and query strings, and their validation.
//!
//! Every field is optional at the serde layer so that a missing field is
//! reported by name instead of as a generic deserialization failure.
//! Blank strings count as missing.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::prompts::ContentKind;
use crate::records::{MantraCategory, RemedyCategory};
use crate::zodiac::Sign;

/// Years accepted for calendar queries.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate { field })
}

fn parse_time(value: &str, field: &'static str) -> Result<NaiveTime, ValidationError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime { field })
}

fn parse_sign(value: &str) -> Result<Sign, ValidationError> {
    value.parse()
}

// ============================================================================
// Birth chart
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChartRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub place: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BirthDetails {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub place: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl BirthChartRequest {
    pub fn validate(&self) -> Result<BirthDetails, ValidationError> {
        let name = required(&self.name, "name")?;
        let date = required(&self.date, "date")?;
        let time = required(&self.time, "time")?;
        let place = required(&self.place, "place")?;

        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ValidationError::InvalidCoordinate { field: "latitude", value: lat });
            }
        }
        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(ValidationError::InvalidCoordinate { field: "longitude", value: lon });
            }
        }

        Ok(BirthDetails {
            name: name.to_string(),
            date: parse_date(date, "date")?,
            time: parse_time(time, "time")?,
            place: place.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

// ============================================================================
// Horoscope
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeRequest {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub zodiac_sign: Option<String>,
    pub time_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoroscopeSubject {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub sign: Sign,
    pub time_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub gender: Option<String>,
}

impl HoroscopeRequest {
    pub fn validate(&self) -> Result<HoroscopeSubject, ValidationError> {
        let full_name = required(&self.full_name, "fullName")?;
        let date_of_birth = required(&self.date_of_birth, "dateOfBirth")?;
        let sign = required(&self.zodiac_sign, "zodiacSign")?;

        Ok(HoroscopeSubject {
            full_name: full_name.to_string(),
            sign: parse_sign(sign)?,
            date_of_birth: parse_date(date_of_birth, "dateOfBirth")?,
            time_of_birth: optional(&self.time_of_birth),
            place_of_birth: optional(&self.place_of_birth),
            gender: optional(&self.gender),
        })
    }
}

// ============================================================================
// Matchmaking
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub zodiac_sign1: Option<String>,
    pub zodiac_sign2: Option<String>,
}

impl MatchRequest {
    pub fn validate(&self) -> Result<(Sign, Sign), ValidationError> {
        let first = required(&self.zodiac_sign1, "zodiacSign1")?;
        let second = required(&self.zodiac_sign2, "zodiacSign2")?;
        Ok((parse_sign(first)?, parse_sign(second)?))
    }
}

// ============================================================================
// Query strings
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

impl DateQuery {
    /// Requested date, or `today` when absent.
    pub fn validate(&self, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
        match optional(&self.date) {
            Some(d) => parse_date(&d, "date"),
            None => Ok(today),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
    pub year: Option<String>,
}

impl MonthQuery {
    /// `(year, month)`, each defaulting to the month containing `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<(i32, u32), ValidationError> {
        let month = match optional(&self.month) {
            Some(m) => m
                .parse::<u32>()
                .ok()
                .filter(|m| (1..=12).contains(m))
                .ok_or(ValidationError::InvalidMonth(m))?,
            None => today.month(),
        };
        let year = match optional(&self.year) {
            Some(y) => y
                .parse::<i32>()
                .ok()
                .filter(|y| YEAR_RANGE.contains(y))
                .ok_or(ValidationError::InvalidYear(y))?,
            None => today.year(),
        };
        Ok((year, month))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekQuery {
    pub week_start: Option<String>,
}

impl WeekQuery {
    /// `(week_start, week_end)`, six days apart.
    pub fn validate(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), ValidationError> {
        let start = match optional(&self.week_start) {
            Some(d) => parse_date(&d, "weekStart")?,
            None => today,
        };
        if !YEAR_RANGE.contains(&start.year()) {
            return Err(ValidationError::InvalidYear(start.year().to_string()));
        }
        let end = start
            .checked_add_signed(Duration::days(6))
            .ok_or(ValidationError::InvalidDate { field: "weekStart" })?;
        Ok((start, end))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    pub fn mantra_category(&self) -> Result<Option<MantraCategory>, ValidationError> {
        optional(&self.category)
            .map(|c| MantraCategory::parse(&c).ok_or(ValidationError::InvalidCategory(c)))
            .transpose()
    }

    pub fn remedy_category(&self) -> Result<Option<RemedyCategory>, ValidationError> {
        optional(&self.category)
            .map(|c| RemedyCategory::parse(&c).ok_or(ValidationError::InvalidCategory(c)))
            .transpose()
    }
}

// ============================================================================
// Accuracy tracking
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub prediction_id: Option<i64>,
    pub rating: Option<i64>,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub prediction_id: i64,
    pub rating: u8,
    pub text: Option<String>,
}

impl FeedbackRequest {
    pub fn validate(&self) -> Result<Feedback, ValidationError> {
        let prediction_id = self
            .prediction_id
            .ok_or(ValidationError::MissingField("predictionId"))?;
        let rating = self.rating.ok_or(ValidationError::MissingField("rating"))?;
        if !(1..=5).contains(&rating) {
            return Err(ValidationError::InvalidRating(rating));
        }
        Ok(Feedback {
            prediction_id,
            rating: rating as u8,
            text: optional(&self.feedback),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccuracyQuery {
    pub days: Option<u32>,
    pub kind: Option<String>,
}

impl AccuracyQuery {
    /// `(days, kind)`; days defaults to 30 and is capped at ten years.
    pub fn validate(&self) -> Result<(u32, Option<ContentKind>), ValidationError> {
        let days = self.days.unwrap_or(30).clamp(1, 3650);
        let kind = optional(&self.kind)
            .map(|k| ContentKind::parse(&k).ok_or(ValidationError::InvalidKind(k)))
            .transpose()?;
        Ok((days, kind))
    }
}
