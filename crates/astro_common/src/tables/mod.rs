//! Read-only content tables used by fallbacks and normalizer defaults.

pub mod calendar;
pub mod horoscope;
pub mod mantra;
pub mod matchmaking;
pub mod panchang;
pub mod remedy;
pub mod tarot;
pub mod zodiac;
