//! Mantra and remedy lists.
//!
//! Both lists share the same shape rules: items need a name, ids default to
//! the slug of the name and stay unique, and a requested category filter
//! drops items the model filed under another recognised category.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::parse_list;
use crate::coerce::{self, field};
use crate::error::NormalizeError;
use crate::records::{Gemstone, MantraCategory, MantraRecord, RemedyCategory, RemedyRecord};
use crate::zodiac::Planet;

const MAX_ITEMS: usize = 12;
const MAX_BENEFITS: usize = 5;
const MAX_SOLUTIONS: usize = 6;
const MAX_GEMSTONES: usize = 3;
const MAX_REMEDY_MANTRAS: usize = 5;

/// Resolves an item's category against an optional filter. `None` means drop.
fn resolve_category<C: Copy + PartialEq>(
    parsed: Option<C>,
    filter: Option<C>,
    default: C,
) -> Option<C> {
    match (parsed, filter) {
        (Some(c), Some(f)) if c != f => None,
        (Some(c), _) => Some(c),
        (None, Some(f)) => Some(f),
        (None, None) => Some(default),
    }
}

/// Named entries with unique ids, capped at [`MAX_ITEMS`].
fn named_entries<'a>(items: &'a [Value]) -> Vec<(String, String, &'a Map<String, Value>)> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| {
            let name = coerce::text(field(entry, &["name", "title"]))?;
            let id = coerce::text(field(entry, &["id"]))
                .map(|id| coerce::slug(&id))
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| coerce::slug(&name));
            seen.insert(id.clone()).then_some((id, name, entry))
        })
        .collect()
}

pub fn normalize_mantras(
    raw: &str,
    filter: Option<MantraCategory>,
) -> Result<Vec<MantraRecord>, NormalizeError> {
    let items = parse_list(raw, &["mantras", "items"])?;

    let mantras: Vec<MantraRecord> = named_entries(&items)
        .into_iter()
        .filter_map(|(id, name, entry)| {
            let parsed = coerce::text(field(entry, &["category"])).and_then(|c| MantraCategory::parse(&c));
            let category = resolve_category(parsed, filter, MantraCategory::Planetary)?;
            Some(MantraRecord {
                id,
                sanskrit: coerce::text_or(field(entry, &["sanskrit"]), "").value(),
                transliteration: coerce::text_or(field(entry, &["transliteration"]), &name).value(),
                meaning: coerce::text_or(field(entry, &["meaning"]), "").value(),
                benefits: coerce::text_list(field(entry, &["benefits"]), MAX_BENEFITS),
                best_time: coerce::text_or(field(entry, &["bestTime", "best_time"]), "Morning").value(),
                repetitions: coerce::clamped_int(field(entry, &["repetitions", "count"]), 1, 1008, 108)
                    .value() as u32,
                category,
                name,
            })
        })
        .take(MAX_ITEMS)
        .collect();

    if mantras.is_empty() {
        return Err(NormalizeError::Insufficient("mantras"));
    }
    Ok(mantras)
}

pub fn normalize_remedies(
    raw: &str,
    filter: Option<RemedyCategory>,
) -> Result<Vec<RemedyRecord>, NormalizeError> {
    let items = parse_list(raw, &["remedies", "items"])?;

    let remedies: Vec<RemedyRecord> = named_entries(&items)
        .into_iter()
        .filter_map(|(id, name, entry)| {
            let parsed = coerce::text(field(entry, &["category"])).and_then(|c| RemedyCategory::parse(&c));
            let category = resolve_category(parsed, filter, RemedyCategory::GeneralRemedies)?;
            Some(RemedyRecord {
                id,
                name,
                category,
                description: coerce::text_or(field(entry, &["description"]), "").value(),
                solutions: coerce::text_list(field(entry, &["solutions"]), MAX_SOLUTIONS),
                gemstones: coerce::object_list(field(entry, &["gemstones"]))
                    .into_iter()
                    .filter_map(gemstone)
                    .take(MAX_GEMSTONES)
                    .collect(),
                mantras: coerce::text_list(field(entry, &["mantras"]), MAX_REMEDY_MANTRAS),
            })
        })
        .take(MAX_ITEMS)
        .collect();

    if remedies.is_empty() {
        return Err(NormalizeError::Insufficient("remedies"));
    }
    Ok(remedies)
}

/// A gemstone needs a name and a recognised planet.
fn gemstone(entry: &Map<String, Value>) -> Option<Gemstone> {
    let name = coerce::text(field(entry, &["name"]))?;
    let planet = coerce::text(field(entry, &["planet"])).and_then(|p| Planet::parse(&p))?;
    let text = |keys: &[&str]| coerce::text_or(field(entry, keys), "").value();
    Some(Gemstone {
        name,
        planet,
        color: text(&["color", "colour"]),
        finger: text(&["finger"]),
        day: text(&["day"]),
        benefits: text(&["benefits"]),
        price: text(&["price"]),
        alternatives: text(&["alternatives"]),
        mantra: text(&["mantra"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mantras_slug_ids_and_bounds() {
        let raw = json!({"mantras": [
            {"name": "Surya Mantra", "repetitions": 5000, "benefits": ["a", "b", "c", "d", "e", "f"]},
            {"name": "surya mantra"},
            {"sanskrit": "ॐ"},
            {"name": "Chandra Mantra", "repetitions": "0", "category": "Healing Mantras"}
        ]})
        .to_string();
        let mantras = normalize_mantras(&raw, None).unwrap();
        assert_eq!(mantras.len(), 2);
        assert_eq!(mantras[0].id, "surya-mantra");
        assert_eq!(mantras[0].repetitions, 1008);
        assert_eq!(mantras[0].benefits.len(), 5);
        assert_eq!(mantras[0].category, MantraCategory::Planetary);
        assert_eq!(mantras[0].transliteration, "Surya Mantra");
        assert_eq!(mantras[1].repetitions, 1);
        assert_eq!(mantras[1].category, MantraCategory::Healing);
    }

    #[test]
    fn test_mantra_category_filter() {
        let raw = json!([
            {"name": "A", "category": "Healing Mantras"},
            {"name": "B", "category": "Planetary Mantras"},
            {"name": "C", "category": "Cosmic"}
        ])
        .to_string();
        let mantras = normalize_mantras(&raw, Some(MantraCategory::Healing)).unwrap();
        let names: Vec<&str> = mantras.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(mantras.iter().all(|m| m.category == MantraCategory::Healing));
    }

    #[test]
    fn test_items_capped() {
        let items: Vec<Value> = (0..20).map(|i| json!({"name": format!("Mantra {}", i)})).collect();
        let mantras = normalize_mantras(&Value::Array(items).to_string(), None).unwrap();
        assert_eq!(mantras.len(), MAX_ITEMS);
    }

    #[test]
    fn test_remedies_gemstones_need_planet() {
        let raw = json!({"remedies": [{
            "name": "Blue Sapphire",
            "category": "planetary gemstones",
            "solutions": "Wear on Saturday, Use silver",
            "gemstones": [
                {"name": "Blue Sapphire", "planet": "Saturn", "color": "Blue"},
                {"name": "Moonstone", "planet": "Pluto"},
                {"planet": "Moon"}
            ]
        }]})
        .to_string();
        let remedies = normalize_remedies(&raw, None).unwrap();
        let r = &remedies[0];
        assert_eq!(r.id, "blue-sapphire");
        assert_eq!(r.category, RemedyCategory::PlanetaryGemstones);
        assert_eq!(r.solutions, vec!["Wear on Saturday", "Use silver"]);
        assert_eq!(r.gemstones.len(), 1);
        assert_eq!(r.gemstones[0].planet, Planet::Saturn);
    }

    #[test]
    fn test_empty_lists_rejected() {
        assert_eq!(
            normalize_remedies("[]", None),
            Err(NormalizeError::Insufficient("remedies"))
        );
        let raw = json!([{"name": "X", "category": "Zodiac Remedies"}]).to_string();
        assert_eq!(
            normalize_remedies(&raw, Some(RemedyCategory::GeneralRemedies)),
            Err(NormalizeError::Insufficient("remedies"))
        );
        assert!(matches!(
            normalize_mantras("{\"mantras\": \"none\"}", None),
            Err(NormalizeError::UnexpectedShape(_))
        ));
    }
}
