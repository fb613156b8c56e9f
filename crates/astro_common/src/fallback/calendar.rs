//! Calendar fallbacks: a deterministic month of events and a random weekly forecast.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use super::stable_hash;
use crate::records::{CalendarEventRecord, EventType, WeeklyForecastRecord};
use crate::tables::calendar as table;
use crate::zodiac::Sign;

/// Four events inside the requested month: new moon, full moon, the sun's
/// ingress and one planetary event. Same month, same events.
pub fn events(year: i32, month: u32) -> Vec<CalendarEventRecord> {
    let h = stable_hash(&format!("calendar_{:04}-{:02}", year, month));
    let last_day = days_in_month(year, month);
    let day = |d: u32| NaiveDate::from_ymd_opt(year, month, d.clamp(1, last_day));

    let new_moon_day = 1 + (h % 14) as u32;
    let full_moon_day = new_moon_day + 14;
    let (ingress_sign, ingress_day) = Sign::entering_in_month(month);
    let (title, description, significance) =
        table::PLANETARY_EVENTS[((h >> 8) % table::PLANETARY_EVENTS.len() as u64) as usize];
    let planetary_day = 1 + ((h >> 16) % last_day as u64) as u32;

    let mut drafts: Vec<(Option<NaiveDate>, String, String, EventType, String)> = Vec::with_capacity(4);
    if let Some(date) = day(new_moon_day) {
        drafts.push((
            Some(date),
            format!("New Moon in {}", Sign::from_birth_date(date)),
            table::NEW_MOON_DESCRIPTION.to_string(),
            EventType::Cosmic,
            table::NEW_MOON_SIGNIFICANCE.to_string(),
        ));
    }
    if let Some(date) = day(full_moon_day) {
        let opposite = Sign::ALL[(Sign::from_birth_date(date).index() + 6) % 12];
        drafts.push((
            Some(date),
            format!("Full Moon in {}", opposite),
            table::FULL_MOON_DESCRIPTION.to_string(),
            EventType::Cosmic,
            table::FULL_MOON_SIGNIFICANCE.to_string(),
        ));
    }
    drafts.push((
        day(ingress_day),
        format!("Sun enters {}", ingress_sign),
        format!("The sun moves into the sign of {}", ingress_sign),
        EventType::Zodiac,
        table::ingress_significance(ingress_sign.index()).to_string(),
    ));
    drafts.push((
        day(planetary_day),
        title.to_string(),
        description.to_string(),
        EventType::Planetary,
        significance.to_string(),
    ));

    let mut events: Vec<CalendarEventRecord> = drafts
        .into_iter()
        .filter_map(|(date, title, description, event_type, significance)| {
            Some(CalendarEventRecord {
                id: String::new(),
                date: date?,
                title,
                description,
                event_type,
                significance,
            })
        })
        .collect();
    events.sort_by_key(|e| e.date);
    for (n, event) in events.iter_mut().enumerate() {
        event.id = format!("evt-{:04}-{:02}-{}", year, month, n + 1);
    }
    events
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map_or(28, |d| d.day())
}

pub fn weekly<R: Rng + ?Sized>(
    rng: &mut R,
    week_start: NaiveDate,
    week_end: NaiveDate,
) -> WeeklyForecastRecord {
    let overall_energy = table::ENERGY_LEVELS
        .choose(rng)
        .copied()
        .unwrap_or("Medium")
        .to_string();
    let count = rng.gen_range(4..=6);
    let predictions = table::WEEKLY_PREDICTIONS
        .choose_multiple(rng, count)
        .map(|p| p.to_string())
        .collect();

    WeeklyForecastRecord {
        week_start,
        week_end,
        overall_energy,
        predictions,
        lucky_days: table::LUCKY_DAYS.iter().map(|d| d.to_string()).collect(),
        challenging_days: table::CHALLENGING_DAYS.iter().map(|d| d.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::RngSource;

    #[test]
    fn test_events_inside_month_and_stable() {
        for month in 1..=12 {
            let events = events(2024, month);
            assert_eq!(events.len(), 4);
            assert!(events.iter().all(|e| e.date.month() == month && e.date.year() == 2024));
            assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
            assert_eq!(events, super::events(2024, month));
        }
    }

    #[test]
    fn test_event_ids_unique() {
        let events = events(2025, 2);
        let ids: std::collections::HashSet<_> = events.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), events.len());
        assert!(events.iter().any(|e| e.title == "Sun enters Pisces"));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_weekly_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        let week = weekly(&mut RngSource::seeded(7).rng(), start, end);
        assert_eq!((week.week_start, week.week_end), (start, end));
        assert!((4..=6).contains(&week.predictions.len()));
        assert!(table::ENERGY_LEVELS.contains(&week.overall_energy.as_str()));
        assert_eq!(week.lucky_days, vec!["Monday", "Wednesday", "Friday"]);
    }
}
