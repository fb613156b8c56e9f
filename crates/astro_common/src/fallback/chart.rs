//! Pseudo-random fallbacks drawn from the static tables.

use chrono::{NaiveDate, Utc};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use uuid::Uuid;

use crate::records::{
    BirthChartRecord, CardPosition, DataSource, DrawnCard, HoroscopeRecord, HousePosition,
    MatchLevel, MatchRecord, PlanetPosition, TarotReading,
};
use crate::requests::{BirthDetails, HoroscopeSubject};
use crate::tables;
use crate::zodiac::{Planet, PlanetStatus, Sign};

fn any_sign<R: Rng + ?Sized>(rng: &mut R) -> Sign {
    Sign::ALL[rng.gen_range(0..Sign::ALL.len())]
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

/// The sun sign follows the birth date; everything else is drawn at random.
pub fn birth_chart<R: Rng + ?Sized>(rng: &mut R, details: &BirthDetails) -> BirthChartRecord {
    let planetary_positions = Planet::ALL
        .iter()
        .map(|&planet| {
            let sign = any_sign(rng);
            PlanetPosition {
                name: planet,
                symbol: planet.symbol().to_string(),
                element: planet.element_in(sign),
                degree: rng.gen_range(0..=29),
                house: rng.gen_range(1..=12),
                status: if rng.gen_bool(0.5) {
                    PlanetStatus::Strong
                } else {
                    PlanetStatus::Weak
                },
                sign,
            }
        })
        .collect();

    let house_positions = (1..=12u8)
        .map(|number| {
            let (name, area) = tables::zodiac::house(number);
            HousePosition {
                number,
                name: name.to_string(),
                area: area.to_string(),
                sign: any_sign(rng),
            }
        })
        .collect();

    BirthChartRecord {
        ascendant: any_sign(rng),
        sun_sign: Sign::from_birth_date(details.date),
        moon_sign: any_sign(rng),
        planetary_positions,
        house_positions,
    }
}

pub fn horoscope<R: Rng + ?Sized>(
    rng: &mut R,
    subject: &HoroscopeSubject,
    today: NaiveDate,
) -> HoroscopeRecord {
    let sign = subject.sign;
    let profile = tables::zodiac::profile(sign);

    HoroscopeRecord {
        id: Uuid::new_v4().to_string(),
        full_name: subject.full_name.clone(),
        zodiac_sign: sign,
        date: today,
        prediction: pick(rng, tables::horoscope::predictions(sign)),
        lucky_color: pick(rng, &tables::horoscope::LUCKY_COLORS),
        lucky_number: rng.gen_range(1..=9),
        compatibility: tables::zodiac::compatible_signs(sign).to_vec(),
        health: pick(rng, &tables::horoscope::HEALTH),
        career: pick(rng, &tables::horoscope::CAREER),
        love: pick(rng, &tables::horoscope::LOVE),
        finance: pick(rng, &tables::horoscope::FINANCE),
        planetary_influence: Some(tables::horoscope::planetary_influence(profile.ruling_planet)),
        element: sign.element(),
        quality: sign.quality(),
        data_source: DataSource::Fallback,
        created_at: Utc::now(),
    }
}

/// Score straight from the matrix; only the message is drawn at random.
pub fn matchmaking<R: Rng + ?Sized>(rng: &mut R, a: Sign, b: Sign) -> MatchRecord {
    let score = tables::matchmaking::score(a, b);
    let level = MatchLevel::from_score(score);
    let message = pick(rng, tables::matchmaking::messages(level));

    MatchRecord {
        compatibility: score,
        level,
        love_compatibility: tables::matchmaking::love_text(a, b, score, &message),
        friendship_compatibility: tables::matchmaking::friendship_text(a, b, level),
        business_compatibility: tables::matchmaking::business_text(a, b, level),
        tips: tables::matchmaking::tips(level).iter().map(|t| t.to_string()).collect(),
        message,
    }
}

/// Three distinct cards in random order, each reversed with even odds.
pub fn tarot<R: Rng + ?Sized>(rng: &mut R) -> TarotReading {
    let mut picked = tables::tarot::DECK.iter().choose_multiple(rng, CardPosition::SPREAD.len());
    // choose_multiple keeps deck order
    picked.shuffle(rng);

    let cards = picked
        .into_iter()
        .zip(CardPosition::SPREAD)
        .map(|(card, position)| DrawnCard {
            card,
            is_reversed: rng.gen_bool(0.5),
            position,
        })
        .collect();

    TarotReading {
        cards,
        interpretation: tables::tarot::READING_INTERPRETATION.to_string(),
        message: tables::tarot::READING_MESSAGE.to_string(),
    }
}
