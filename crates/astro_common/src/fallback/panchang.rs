//! Deterministic panchang for a date.

use chrono::{Datelike, NaiveDate};

use super::{stable_hash, stable_index};
use crate::records::{DataSource, Paksha, PanchangRecord};
use crate::tables::panchang::{
    nakshatra_significance, tithi_significance, AUSPICIOUS_SLOTS, DAILY_WISDOMS,
    INAUSPICIOUS_SLOTS, KARANAS, NAKSHATRAS, TITHIS, YOGAS,
};

const BASE_SUNRISE_MIN: i64 = 6 * 60;
const BASE_SUNSET_MIN: i64 = 18 * 60;

pub fn generate(date: NaiveDate) -> PanchangRecord {
    let day = date.format("%Y-%m-%d").to_string();
    let tithi_pos = stable_index(&format!("tithi_{}", day), TITHIS.len());
    let tithi = TITHIS[tithi_pos];
    let nakshatra = NAKSHATRAS[stable_index(&format!("nakshatra_{}", day), NAKSHATRAS.len())];
    let (sunrise, sunset) = sun_times(date);

    PanchangRecord {
        date,
        tithi: tithi.to_string(),
        nakshatra: nakshatra.to_string(),
        yoga: YOGAS[stable_index(&format!("yoga_{}", day), YOGAS.len())].to_string(),
        karana: KARANAS[stable_index(&format!("karana_{}", day), KARANAS.len())].to_string(),
        sunrise,
        sunset,
        auspicious_timings: auspicious_timings(&day),
        inauspicious_timings: inauspicious_timings(&day),
        daily_wisdom: DAILY_WISDOMS[stable_index(&format!("wisdom_{}", day), DAILY_WISDOMS.len())]
            .to_string(),
        paksha: Paksha::from_tithi_position(tithi_pos + 1),
        day_name: date.format("%A").to_string(),
        tithi_significance: tithi_significance(tithi).to_string(),
        nakshatra_significance: nakshatra_significance(nakshatra).to_string(),
        data_source: DataSource::Fallback,
    }
}

/// 3 or 4 slots at stride 7 (mod 6). Strides can revisit a slot.
pub fn auspicious_timings(day: &str) -> Vec<String> {
    pick_slots(&AUSPICIOUS_SLOTS, &format!("auspicious_{}", day), 3, 7)
}

/// 2 or 3 slots at stride 5 (mod 6).
pub fn inauspicious_timings(day: &str) -> Vec<String> {
    pick_slots(&INAUSPICIOUS_SLOTS, &format!("inauspicious_{}", day), 2, 5)
}

fn pick_slots(slots: &[&str], key: &str, base_count: u64, stride: u64) -> Vec<String> {
    let len = slots.len() as u64;
    let h = stable_hash(key);
    let start = h % len;
    let count = base_count + h % 2;
    (0..count)
        .map(|i| slots[((start + i * stride) % len) as usize].to_string())
        .collect()
}

/// Seasonal sunrise/sunset around 06:00/18:00 with a hashed ±15 minute shift.
pub fn sun_times(date: NaiveDate) -> (String, String) {
    let (rise_shift, set_shift) = match date.ordinal() {
        d if d < 80 || d > 300 => (30, -60),
        d if d < 172 => (15, -30),
        d if d < 266 => (-15, 30),
        _ => (15, -30),
    };
    let key = format!("sun_{}", date.format("%Y-%m-%d"));
    let variation = (stable_hash(&key) % 30) as i64 - 15;
    (
        clock(BASE_SUNRISE_MIN + rise_shift + variation),
        clock(BASE_SUNSET_MIN + set_shift + variation),
    )
}

fn clock(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
