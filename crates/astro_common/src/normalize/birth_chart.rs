//! Birth chart normalization.
//!
//! The output always holds the nine bodies in canonical order and houses
//! 1..=12 ascending. Entries the model omitted are synthesized on the
//! ascendant with placeholder values.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::{parse_object, require_any};
use crate::coerce::{self, field};
use crate::error::NormalizeError;
use crate::records::{BirthChartRecord, HousePosition, PlanetPosition};
use crate::requests::BirthDetails;
use crate::tables;
use crate::zodiac::{Element, Planet, PlanetStatus, Sign};

const SUN_KEYS: &[&str] = &["sunSign", "sun_sign"];
const ASC_KEYS: &[&str] = &["ascendant", "lagna"];
const MOON_KEYS: &[&str] = &["moonSign", "moon_sign"];
const PLANET_KEYS: &[&str] = &["planetaryPositions", "planetary_positions", "planets"];
const HOUSE_KEYS: &[&str] = &["housePositions", "house_positions", "houses"];

pub fn normalize(raw: &str, details: &BirthDetails) -> Result<BirthChartRecord, NormalizeError> {
    let obj = parse_object(raw)?;
    let recognised: Vec<&str> = [SUN_KEYS, ASC_KEYS, MOON_KEYS, PLANET_KEYS, HOUSE_KEYS].concat();
    require_any(&obj, &recognised, "birth chart")?;

    let sun_sign = sign_at(&obj, SUN_KEYS, Sign::from_birth_date(details.date));
    let ascendant = sign_at(&obj, ASC_KEYS, sun_sign);
    let moon_sign = sign_at(&obj, MOON_KEYS, ascendant);

    Ok(BirthChartRecord {
        ascendant,
        sun_sign,
        moon_sign,
        planetary_positions: planets(field(&obj, PLANET_KEYS), ascendant),
        house_positions: houses(field(&obj, HOUSE_KEYS), ascendant),
    })
}

fn sign_at(obj: &Map<String, Value>, keys: &[&str], default: Sign) -> Sign {
    coerce::enum_value(field(obj, keys), Sign::parse, default).value()
}

/// Planet entries keyed by body. Accepts a list of objects or a name-keyed map.
fn planet_entries(value: Option<&Value>) -> Vec<(Planet, &Map<String, Value>)> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(name, v)| Some((Planet::parse(name)?, v.as_object()?)))
            .collect(),
        _ => coerce::object_list(value)
            .into_iter()
            .filter_map(|entry| {
                let name = coerce::text(field(entry, &["name", "planet"]))?;
                Some((Planet::parse(&name)?, entry))
            })
            .collect(),
    }
}

fn planets(value: Option<&Value>, ascendant: Sign) -> Vec<PlanetPosition> {
    let mut found: BTreeMap<Planet, PlanetPosition> = BTreeMap::new();
    for (planet, entry) in planet_entries(value) {
        // First occurrence wins
        found
            .entry(planet)
            .or_insert_with(|| planet_position(planet, entry, ascendant));
    }

    Planet::ALL
        .iter()
        .map(|p| {
            found
                .remove(p)
                .unwrap_or_else(|| placeholder_planet(*p, ascendant))
        })
        .collect()
}

fn planet_position(planet: Planet, entry: &Map<String, Value>, ascendant: Sign) -> PlanetPosition {
    let sign = sign_at(entry, &["sign", "rashi"], ascendant);
    PlanetPosition {
        name: planet,
        symbol: coerce::text_or(field(entry, &["symbol"]), planet.symbol()).value(),
        element: coerce::enum_value(field(entry, &["element"]), Element::parse, planet.element_in(sign))
            .value(),
        degree: coerce::clamped_int(field(entry, &["degree", "degrees"]), 0, 29, 0).value() as u8,
        house: coerce::clamped_int(field(entry, &["house"]), 1, 12, 1).value() as u8,
        status: coerce::enum_value(field(entry, &["status"]), PlanetStatus::parse, PlanetStatus::Strong)
            .value(),
        sign,
    }
}

fn placeholder_planet(planet: Planet, ascendant: Sign) -> PlanetPosition {
    PlanetPosition {
        name: planet,
        symbol: planet.symbol().to_string(),
        element: planet.element_in(ascendant),
        degree: 0,
        house: 1,
        status: PlanetStatus::Strong,
        sign: ascendant,
    }
}

fn houses(value: Option<&Value>, ascendant: Sign) -> Vec<HousePosition> {
    let mut found: BTreeMap<u8, HousePosition> = BTreeMap::new();
    for entry in coerce::object_list(value) {
        let number = coerce::int(field(entry, &["number", "house"]), 1);
        if number.is_defaulted() {
            continue;
        }
        let number = number.value().clamp(1, 12) as u8;
        found.entry(number).or_insert_with(|| {
            let (name, area) = tables::zodiac::house(number);
            HousePosition {
                number,
                name: coerce::text_or(field(entry, &["name"]), name).value(),
                area: coerce::text_or(field(entry, &["area", "significance"]), area).value(),
                sign: sign_at(entry, &["sign"], ascendant),
            }
        });
    }

    (1..=12u8)
        .map(|n| {
            found
                .remove(&n)
                .unwrap_or_else(|| placeholder_house(n, ascendant))
        })
        .collect()
}

fn placeholder_house(number: u8, sign: Sign) -> HousePosition {
    let (name, area) = tables::zodiac::house(number);
    HousePosition {
        number,
        name: name.to_string(),
        area: area.to_string(),
        sign,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::json;

    fn details() -> BirthDetails {
        BirthDetails {
            name: "A".to_string(),
            date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            place: "X".to_string(),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_clamps_degree_and_house() {
        let raw = json!({
            "ascendant": "leo",
            "planetaryPositions": [
                {"name": "Sun", "degree": 45, "house": 0, "sign": "Aries"},
                {"name": "Moon", "degree": -4, "house": 19},
                {"name": "Mars", "degree": "12.7", "house": "5"}
            ]
        })
        .to_string();
        let chart = normalize(&raw, &details()).unwrap();
        let sun = &chart.planetary_positions[0];
        assert_eq!((sun.degree, sun.house), (29, 1));
        assert_eq!(sun.element, Element::Fire);
        let moon = &chart.planetary_positions[1];
        assert_eq!((moon.degree, moon.house), (0, 12));
        assert_eq!(moon.sign, Sign::Leo);
        let mars = &chart.planetary_positions[4];
        assert_eq!((mars.degree, mars.house), (12, 5));
    }

    #[test]
    fn test_synthesizes_missing_bodies_and_houses() {
        let raw = json!({
            "ascendant": "Virgo",
            "planetaryPositions": [{"name": "Jupiter", "degree": 3, "house": 9, "status": "weak"}],
            "housePositions": [{"number": 7, "sign": "Pisces"}]
        })
        .to_string();
        let chart = normalize(&raw, &details()).unwrap();

        let names: Vec<Planet> = chart.planetary_positions.iter().map(|p| p.name).collect();
        assert_eq!(names, Planet::ALL.to_vec());
        let jupiter = &chart.planetary_positions[5];
        assert_eq!(jupiter.status, PlanetStatus::Weak);
        let rahu = &chart.planetary_positions[7];
        assert_eq!(rahu.sign, Sign::Virgo);
        assert_eq!(rahu.element, Element::Shadow);
        assert_eq!((rahu.degree, rahu.house), (0, 1));

        let numbers: Vec<u8> = chart.house_positions.iter().map(|h| h.number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());
        assert_eq!(chart.house_positions[6].sign, Sign::Pisces);
        assert_eq!(chart.house_positions[6].name, "Spouse");
        assert_eq!(chart.house_positions[0].sign, Sign::Virgo);
    }

    #[test]
    fn test_drops_unknown_and_duplicate_bodies() {
        let raw = json!({
            "planetaryPositions": [
                {"name": "Pluto", "degree": 10},
                {"name": "venus", "degree": 4},
                {"name": "Venus", "degree": 20},
                {"degree": 11}
            ]
        })
        .to_string();
        let chart = normalize(&raw, &details()).unwrap();
        assert_eq!(chart.planetary_positions.len(), 9);
        assert_eq!(chart.planetary_positions[3].degree, 4);
    }

    #[test]
    fn test_houses_dedupe_after_clamp() {
        let raw = json!({
            "housePositions": [
                {"number": 0, "name": "First"},
                {"number": 1, "name": "Second"},
                {"name": "No number"},
                {"number": 14, "area": "Endings"}
            ]
        })
        .to_string();
        let chart = normalize(&raw, &details()).unwrap();
        assert_eq!(chart.house_positions.len(), 12);
        assert_eq!(chart.house_positions[0].name, "First");
        assert_eq!(chart.house_positions[11].area, "Endings");
    }

    #[test]
    fn test_sign_defaults_chain_from_birth_date() {
        let raw = json!({"planetaryPositions": []}).to_string();
        let chart = normalize(&raw, &details()).unwrap();
        assert_eq!(chart.sun_sign, Sign::Capricorn);
        assert_eq!(chart.ascendant, Sign::Capricorn);
        assert_eq!(chart.moon_sign, Sign::Capricorn);
    }

    #[test]
    fn test_accepts_planet_map_form() {
        let raw = json!({"planets": {"Saturn": {"degree": 8, "house": 10}}}).to_string();
        let chart = normalize(&raw, &details()).unwrap();
        assert_eq!(chart.planetary_positions[6].house, 10);
    }

    #[test]
    fn test_rejects_empty_and_prose() {
        assert_eq!(
            normalize("{}", &details()),
            Err(NormalizeError::NoContent("birth chart"))
        );
        assert!(matches!(
            normalize("Your chart is lovely", &details()),
            Err(NormalizeError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_fenced_payload() {
        let raw = "```json\n{\"ascendant\": \"Aries\"}\n```";
        let chart = normalize(raw, &details()).unwrap();
        assert_eq!(chart.ascendant, Sign::Aries);
        assert_eq!(chart.moon_sign, Sign::Aries);
    }
}
