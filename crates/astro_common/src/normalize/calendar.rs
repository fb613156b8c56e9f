//! Monthly events and weekly forecasts.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use super::{parse_list, parse_object, require_any};
use crate::coerce::{self, field};
use crate::error::NormalizeError;
use crate::records::{CalendarEventRecord, EventType, WeeklyForecastRecord};

const MAX_EVENTS: usize = 10;
const MAX_PREDICTIONS: usize = 6;
const MAX_LUCKY_DAYS: usize = 4;
const MAX_CHALLENGING_DAYS: usize = 3;

pub fn normalize_events(
    raw: &str,
    year: i32,
    month: u32,
) -> Result<Vec<CalendarEventRecord>, NormalizeError> {
    let items = parse_list(raw, &["events", "calendarEvents"])?;

    let mut events: Vec<CalendarEventRecord> = items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| {
            let title = coerce::text(field(entry, &["title", "name"]))?;
            let date = coerce::text(field(entry, &["date"]))
                .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok())
                .filter(|d| d.year() == year && d.month() == month)?;
            Some(CalendarEventRecord {
                id: coerce::text(field(entry, &["id"])).unwrap_or_default(),
                date,
                title,
                description: coerce::text_or(field(entry, &["description"]), "").value(),
                event_type: coerce::enum_value(field(entry, &["type", "eventType"]), EventType::parse, EventType::Cosmic)
                    .value(),
                significance: coerce::text_or(field(entry, &["significance"]), "").value(),
            })
        })
        .take(MAX_EVENTS)
        .collect();

    if events.is_empty() {
        return Err(NormalizeError::Insufficient("calendar events"));
    }

    let mut seen = HashSet::new();
    for (n, event) in events.iter_mut().enumerate() {
        if event.id.is_empty() || seen.contains(&event.id) {
            event.id = (n + 1..)
                .map(|suffix| format!("evt-{:04}-{:02}-{}", year, month, suffix))
                .find(|candidate| !seen.contains(candidate))
                .unwrap_or_default();
        }
        seen.insert(event.id.clone());
    }

    // Stable sort keeps model order within a day
    events.sort_by_key(|e| e.date);
    Ok(events)
}

pub fn normalize_weekly(
    raw: &str,
    week_start: NaiveDate,
    week_end: NaiveDate,
) -> Result<WeeklyForecastRecord, NormalizeError> {
    let obj = parse_object(raw)?;
    require_any(&obj, &["predictions", "forecast"], "weekly forecast")?;

    let predictions = coerce::text_list(field(&obj, &["predictions", "forecast"]), MAX_PREDICTIONS);
    if predictions.is_empty() {
        return Err(NormalizeError::MissingField("predictions"));
    }

    Ok(WeeklyForecastRecord {
        week_start,
        week_end,
        overall_energy: coerce::text(field(&obj, &["overallEnergy", "overall_energy"]))
            .map(|e| coerce::title_case(&e))
            .unwrap_or_else(|| "Medium".to_string()),
        predictions,
        lucky_days: weekdays(field(&obj, &["luckyDays", "lucky_days"]), MAX_LUCKY_DAYS),
        challenging_days: weekdays(
            field(&obj, &["challengingDays", "challenging_days"]),
            MAX_CHALLENGING_DAYS,
        ),
    })
}

fn weekdays(value: Option<&Value>, max: usize) -> Vec<String> {
    let mut days: Vec<String> = Vec::with_capacity(max);
    for name in coerce::text_list(value, 14) {
        match coerce::weekday(&name) {
            Some(day) if !days.iter().any(|d| d == day) => days.push(day.to_string()),
            _ => {}
        }
        if days.len() == max {
            break;
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_events_filtered_to_month_and_sorted() {
        let raw = json!({"events": [
            {"id": "a", "date": "2024-03-20", "title": "Equinox", "type": "ZODIAC"},
            {"id": "b", "date": "2024-04-01", "title": "Outside"},
            {"id": "c", "date": "2024-03-10", "title": "New Moon", "type": "lunar"},
            {"id": "d", "date": "2024-03-12"},
            {"id": "e", "date": "not a date", "title": "Broken"}
        ]})
        .to_string();
        let events = normalize_events(&raw, 2024, 3).unwrap();
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["New Moon", "Equinox"]);
        assert_eq!(events[0].event_type, EventType::Cosmic);
        assert_eq!(events[1].event_type, EventType::Zodiac);
    }

    #[test]
    fn test_event_ids_deduplicated() {
        let raw = json!([
            {"id": "x", "date": "2024-03-01", "title": "One"},
            {"id": "x", "date": "2024-03-02", "title": "Two"},
            {"date": "2024-03-03", "title": "Three"}
        ])
        .to_string();
        let events = normalize_events(&raw, 2024, 3).unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "evt-2024-03-2", "evt-2024-03-3"]);
    }

    #[test]
    fn test_generated_id_skips_taken_ids() {
        let raw = json!([
            {"id": "evt-2024-03-2", "date": "2024-03-01", "title": "One"},
            {"date": "2024-03-02", "title": "Two"},
            {"id": "evt-2024-03-3", "date": "2024-03-03", "title": "Three"}
        ])
        .to_string();
        let events = normalize_events(&raw, 2024, 3).unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["evt-2024-03-2", "evt-2024-03-3", "evt-2024-03-4"]);
    }

    #[test]
    fn test_events_capped_and_empty_rejected() {
        let many: Vec<Value> = (1..=15)
            .map(|day| json!({"date": format!("2024-03-{:02}", day), "title": "E"}))
            .collect();
        let events = normalize_events(&Value::Array(many).to_string(), 2024, 3).unwrap();
        assert_eq!(events.len(), MAX_EVENTS);

        let raw = json!([{"date": "2023-03-01", "title": "Wrong year"}]).to_string();
        assert_eq!(
            normalize_events(&raw, 2024, 3),
            Err(NormalizeError::Insufficient("calendar events"))
        );
    }

    #[test]
    fn test_weekly_forecast() {
        let raw = json!({
            "overallEnergy": "high",
            "predictions": ["p1", "p2", "p3", "p4", "p5", "p6", "p7"],
            "luckyDays": ["monday", "Fri", "Funday", "Monday", "Sunday", "Tuesday", "Wednesday"],
            "challengingDays": "thursday"
        })
        .to_string();
        let start = d(2024, 6, 3);
        let week = normalize_weekly(&raw, start, d(2024, 6, 9)).unwrap();
        assert_eq!(week.week_start, start);
        assert_eq!(week.overall_energy, "High");
        assert_eq!(week.predictions.len(), 6);
        assert_eq!(week.lucky_days, vec!["Monday", "Friday", "Sunday", "Tuesday"]);
        assert_eq!(week.challenging_days, vec!["Thursday"]);
    }

    #[test]
    fn test_weekly_requires_predictions() {
        let raw = json!({"predictions": [], "overallEnergy": "Low"}).to_string();
        assert_eq!(
            normalize_weekly(&raw, d(2024, 6, 3), d(2024, 6, 9)),
            Err(NormalizeError::MissingField("predictions"))
        );
        let raw = json!({"predictions": ["Steady"]}).to_string();
        let week = normalize_weekly(&raw, d(2024, 6, 3), d(2024, 6, 9)).unwrap();
        assert_eq!(week.overall_energy, "Medium");
        assert!(week.lucky_days.is_empty());
    }
}
