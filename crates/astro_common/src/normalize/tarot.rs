//! Three-card tarot reading normalization.

use serde_json::{Map, Value};

use super::parse_payload;
use crate::coerce::{self, field};
use crate::error::NormalizeError;
use crate::records::{CardPosition, DrawnCard, TarotReading};
use crate::tables::tarot;

/// Three-card spread. Cards are matched against the deck by name; positions
/// are assigned by order.
pub fn normalize(raw: &str) -> Result<TarotReading, NormalizeError> {
    let payload = parse_payload(raw)?;
    let (cards, obj): (&[Value], Option<&Map<String, Value>>) = match &payload {
        Value::Array(items) => (items.as_slice(), None),
        Value::Object(o) => {
            let cards = o
                .get("cards")
                .and_then(Value::as_array)
                .ok_or(NormalizeError::NoContent("tarot"))?;
            (cards.as_slice(), Some(o))
        }
        _ => return Err(NormalizeError::UnexpectedShape("object")),
    };

    let mut drawn: Vec<DrawnCard> = Vec::with_capacity(CardPosition::SPREAD.len());
    for entry in cards.iter().filter_map(Value::as_object) {
        let Some(card) = coerce::text(field(entry, &["name", "card"])).and_then(|n| tarot::find(&n)) else {
            continue;
        };
        if drawn.iter().any(|d| d.card.id == card.id) {
            continue;
        }
        drawn.push(DrawnCard {
            card,
            is_reversed: coerce::flag(field(entry, &["isReversed", "reversed"])).unwrap_or(false),
            position: CardPosition::SPREAD[drawn.len()],
        });
        if drawn.len() == CardPosition::SPREAD.len() {
            break;
        }
    }

    if drawn.len() < CardPosition::SPREAD.len() {
        return Err(NormalizeError::Insufficient("tarot cards"));
    }

    let text = |key: &str, default: &str| match obj {
        Some(o) => coerce::text_or(field(o, &[key]), default).value(),
        None => default.to_string(),
    };
    Ok(TarotReading {
        cards: drawn,
        interpretation: text("interpretation", tarot::READING_INTERPRETATION),
        message: text("message", tarot::READING_MESSAGE),
    })
}
