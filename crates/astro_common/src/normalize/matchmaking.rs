//! Compatibility normalization between two signs.

use super::{parse_object, require_any};
use crate::coerce::{self, field};
use crate::error::NormalizeError;
use crate::records::{MatchLevel, MatchRecord};
use crate::tables::matchmaking as table;
use crate::zodiac::Sign;

const MAX_TIPS: usize = 5;

const TEXT_KEYS: &[&str] = &[
    "compatibility",
    "message",
    "loveCompatibility",
    "friendshipCompatibility",
    "businessCompatibility",
    "tips",
];

/// The level is always derived from the final score, never taken from the payload.
pub fn normalize(raw: &str, a: Sign, b: Sign) -> Result<MatchRecord, NormalizeError> {
    let obj = parse_object(raw)?;
    require_any(&obj, TEXT_KEYS, "matchmaking")?;

    let score = coerce::clamped_int(
        field(&obj, &["compatibility", "score"]),
        0,
        100,
        table::score(a, b) as i64,
    )
    .value() as u8;
    let level = MatchLevel::from_score(score);

    let message = coerce::text_or(field(&obj, &["message"]), table::messages(level)[0]).value();
    let love = coerce::text(field(&obj, &["loveCompatibility", "love"]))
        .unwrap_or_else(|| table::love_text(a, b, score, &message));

    let mut tips = coerce::text_list(field(&obj, &["tips"]), MAX_TIPS);
    if tips.is_empty() {
        tips = table::tips(level).iter().map(|t| t.to_string()).collect();
    }

    Ok(MatchRecord {
        compatibility: score,
        level,
        love_compatibility: love,
        friendship_compatibility: coerce::text(field(&obj, &["friendshipCompatibility", "friendship"]))
            .unwrap_or_else(|| table::friendship_text(a, b, level)),
        business_compatibility: coerce::text(field(&obj, &["businessCompatibility", "business"]))
            .unwrap_or_else(|| table::business_text(a, b, level)),
        message,
        tips,
    })
}
