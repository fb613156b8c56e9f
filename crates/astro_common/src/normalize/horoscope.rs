//! Daily horoscope normalization. `prediction` is the only field the model must supply.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::{parse_object, require_any};
use crate::coerce::{self, field};
use crate::error::NormalizeError;
use crate::records::{DataSource, HoroscopeRecord};
use crate::requests::HoroscopeSubject;
use crate::tables;
use crate::zodiac::Sign;

const MAX_COMPATIBLE: usize = 3;

pub fn normalize(
    raw: &str,
    subject: &HoroscopeSubject,
    today: NaiveDate,
) -> Result<HoroscopeRecord, NormalizeError> {
    let obj = parse_object(raw)?;
    require_any(&obj, &["prediction", "horoscope"], "horoscope")?;
    let prediction = coerce::text(field(&obj, &["prediction", "horoscope"]))
        .ok_or(NormalizeError::MissingField("prediction"))?;

    let sign = subject.sign;
    let profile = tables::zodiac::profile(sign);
    let default_number = profile.lucky_numbers.first().copied().unwrap_or(1) as i64;

    let mut compatibility: Vec<Sign> = Vec::with_capacity(MAX_COMPATIBLE);
    for name in coerce::text_list(field(&obj, &["compatibility", "compatibleSigns"]), 12) {
        if let Some(s) = Sign::parse(&name) {
            if !compatibility.contains(&s) && compatibility.len() < MAX_COMPATIBLE {
                compatibility.push(s);
            }
        }
    }
    if compatibility.is_empty() {
        compatibility = tables::zodiac::compatible_signs(sign).to_vec();
    }

    Ok(HoroscopeRecord {
        id: Uuid::new_v4().to_string(),
        full_name: subject.full_name.clone(),
        zodiac_sign: sign,
        date: today,
        prediction,
        lucky_color: coerce::text(field(&obj, &["luckyColor", "lucky_color"]))
            .map(|c| coerce::title_case(&c))
            .unwrap_or_else(|| profile.lucky_colors[0].to_string()),
        lucky_number: coerce::clamped_int(
            field(&obj, &["luckyNumber", "lucky_number"]),
            1,
            99,
            default_number,
        )
        .value() as u32,
        compatibility,
        health: coerce::text_or(field(&obj, &["health"]), tables::horoscope::HEALTH[0]).value(),
        career: coerce::text_or(field(&obj, &["career"]), tables::horoscope::CAREER[0]).value(),
        love: coerce::text_or(field(&obj, &["love"]), tables::horoscope::LOVE[0]).value(),
        finance: coerce::text_or(field(&obj, &["finance"]), tables::horoscope::FINANCE[0]).value(),
        planetary_influence: coerce::text(field(&obj, &["planetaryInfluence", "planetary_influence"])),
        element: sign.element(),
        quality: sign.quality(),
        data_source: DataSource::AiGenerated,
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::Element;
    use serde_json::json;

    fn subject() -> HoroscopeSubject {
        HoroscopeSubject {
            full_name: "Asha".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(),
            sign: Sign::Aries,
            time_of_birth: None,
            place_of_birth: None,
            gender: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_full_payload() {
        let raw = json!({
            "prediction": "A bold day.",
            "luckyColor": "deep red",
            "luckyNumber": 7.5,
            "compatibility": "Leo, Sagittarius, Gemini, Libra",
            "health": "Rest.",
            "planetaryInfluence": "Mars drives you."
        })
        .to_string();
        let h = normalize(&raw, &subject(), today()).unwrap();
        assert_eq!(h.prediction, "A bold day.");
        assert_eq!(h.lucky_color, "Deep Red");
        assert_eq!(h.lucky_number, 7);
        assert_eq!(h.compatibility, vec![Sign::Leo, Sign::Sagittarius, Sign::Gemini]);
        assert_eq!(h.health, "Rest.");
        assert_eq!(h.career, tables::horoscope::CAREER[0]);
        assert_eq!(h.element, Element::Fire);
        assert_eq!(h.data_source, DataSource::AiGenerated);
        assert_eq!(h.date, today());
    }

    #[test]
    fn test_defaults_from_profile() {
        let raw = json!({"prediction": "Calm.", "luckyNumber": 500, "compatibility": ["Dragon"]}).to_string();
        let h = normalize(&raw, &subject(), today()).unwrap();
        assert_eq!(h.lucky_color, "Red");
        assert_eq!(h.lucky_number, 99);
        assert_eq!(h.compatibility, tables::zodiac::compatible_signs(Sign::Aries).to_vec());
        assert!(h.planetary_influence.is_none());
    }

    #[test]
    fn test_prediction_required() {
        let raw = json!({"prediction": "  ", "luckyColor": "Red"}).to_string();
        assert_eq!(
            normalize(&raw, &subject(), today()),
            Err(NormalizeError::MissingField("prediction"))
        );
        assert_eq!(
            normalize("{\"luckyColor\": \"Red\"}", &subject(), today()),
            Err(NormalizeError::NoContent("horoscope"))
        );
    }
}
