//! Panchang normalization.
//!
//! The four calendar elements must be names from the almanac tables. Anything
//! the model gets wrong is replaced with the deterministic value for the date,
//! so a partially valid payload still yields a consistent record.

use chrono::{NaiveDate, NaiveTime};

use super::{parse_object, require_any};
use crate::coerce::{self, field};
use crate::error::NormalizeError;
use crate::fallback;
use crate::records::{DataSource, Paksha, PanchangRecord};
use crate::tables::panchang::{self as table, KARANAS, NAKSHATRAS, TITHIS, YOGAS};

const MAX_AUSPICIOUS: usize = 4;
const MAX_INAUSPICIOUS: usize = 3;

pub fn normalize(raw: &str, date: NaiveDate) -> Result<PanchangRecord, NormalizeError> {
    let obj = parse_object(raw)?;
    require_any(&obj, &["tithi", "nakshatra", "yoga", "karana"], "panchang")?;
    let base = fallback::panchang::generate(date);

    let element = |key: &str, names: &'static [&'static str], default: &str| {
        coerce::text(field(&obj, &[key]))
            .and_then(|name| table::canonical(names, &name))
            .map_or_else(|| default.to_string(), str::to_string)
    };
    let tithi = element("tithi", &TITHIS, &base.tithi);
    let nakshatra = element("nakshatra", &NAKSHATRAS, &base.nakshatra);

    let timings = |keys: &[&str], max: usize, default: &[String]| {
        let list = coerce::text_list(field(&obj, keys), max);
        if list.is_empty() {
            default.to_vec()
        } else {
            list
        }
    };

    Ok(PanchangRecord {
        date,
        yoga: element("yoga", &YOGAS, &base.yoga),
        karana: element("karana", &KARANAS, &base.karana),
        sunrise: clock_or(field(&obj, &["sunrise"]), &base.sunrise),
        sunset: clock_or(field(&obj, &["sunset"]), &base.sunset),
        auspicious_timings: timings(
            &["auspiciousTimings", "auspicious_timings"],
            MAX_AUSPICIOUS,
            &base.auspicious_timings,
        ),
        inauspicious_timings: timings(
            &["inauspiciousTimings", "inauspicious_timings"],
            MAX_INAUSPICIOUS,
            &base.inauspicious_timings,
        ),
        daily_wisdom: coerce::text_or(field(&obj, &["dailyWisdom", "daily_wisdom"]), &base.daily_wisdom)
            .value(),
        paksha: paksha_for(&tithi, &base),
        day_name: date.format("%A").to_string(),
        tithi_significance: coerce::text_or(
            field(&obj, &["tithiSignificance"]),
            table::tithi_significance(&tithi),
        )
        .value(),
        nakshatra_significance: coerce::text_or(
            field(&obj, &["nakshatraSignificance"]),
            table::nakshatra_significance(&nakshatra),
        )
        .value(),
        tithi,
        nakshatra,
        data_source: DataSource::AiGenerated,
    })
}

/// Tithi names repeat across the fortnights. When the name matches the
/// date's deterministic tithi its fortnight is kept; otherwise the first
/// table position decides.
fn paksha_for(tithi: &str, base: &PanchangRecord) -> Paksha {
    if tithi == base.tithi {
        return base.paksha;
    }
    let position = TITHIS.iter().position(|t| *t == tithi).unwrap_or(0);
    Paksha::from_tithi_position(position + 1)
}

/// Accepts `HH:MM`, normalising single-digit hours.
fn clock_or(value: Option<&serde_json::Value>, default: &str) -> String {
    coerce::text(value)
        .and_then(|t| NaiveTime::parse_from_str(&t, "%H:%M").ok())
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| default.to_string())
}
