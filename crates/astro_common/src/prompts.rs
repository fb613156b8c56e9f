//! Prompt construction for each content kind.
//!
//! Each prompt spells out the exact JSON object the model must return. The
//! normalizers accept that shape and tolerate drift from it.

use std::collections::BTreeMap;

use crate::error::DispatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    BirthChart,
    Horoscope,
    CalendarEvents,
    WeeklyForecast,
    Matchmaking,
    Mantras,
    Remedies,
    Tarot,
    Panchang,
}

impl ContentKind {
    pub const ALL: [ContentKind; 9] = [
        ContentKind::BirthChart,
        ContentKind::Horoscope,
        ContentKind::CalendarEvents,
        ContentKind::WeeklyForecast,
        ContentKind::Matchmaking,
        ContentKind::Mantras,
        ContentKind::Remedies,
        ContentKind::Tarot,
        ContentKind::Panchang,
    ];

    /// Stable identifier, used in logs and the tracking store.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::BirthChart => "birth_chart",
            ContentKind::Horoscope => "horoscope",
            ContentKind::CalendarEvents => "calendar_events",
            ContentKind::WeeklyForecast => "weekly_forecast",
            ContentKind::Matchmaking => "matchmaking",
            ContentKind::Mantras => "mantras",
            ContentKind::Remedies => "remedies",
            ContentKind::Tarot => "tarot",
            ContentKind::Panchang => "panchang",
        }
    }

    pub fn parse(s: &str) -> Option<ContentKind> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        ContentKind::ALL.iter().copied().find(|k| k.as_str() == wanted)
    }

    /// Parameters the prompt for this kind cannot be built without.
    pub fn required_params(self) -> &'static [&'static str] {
        match self {
            ContentKind::BirthChart => &["name", "date", "time", "place"],
            ContentKind::Horoscope => &["full_name", "zodiac_sign", "date"],
            ContentKind::CalendarEvents => &["month_name", "year"],
            ContentKind::WeeklyForecast => &["week_start", "week_end"],
            ContentKind::Matchmaking => &["sign1", "sign2"],
            ContentKind::Mantras | ContentKind::Remedies | ContentKind::Tarot => &[],
            ContentKind::Panchang => &["date", "day_name"],
        }
    }
}

/// Parameter bag handed to the prompt builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptParams {
    values: BTreeMap<&'static str, String>,
}

impl PromptParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Adds `key` only when `value` is present.
    pub fn with_opt(self, key: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    fn require(&self, key: &'static str) -> Result<&str, DispatchError> {
        self.get(key).ok_or(DispatchError::MissingParam(key))
    }
}

const JSON_ONLY: &str = "Return ONLY the JSON object, no additional text.";

/// Builds the instruction for `kind`; a missing required parameter is a dispatch failure.
pub fn build_prompt(kind: ContentKind, params: &PromptParams) -> Result<String, DispatchError> {
    for &key in kind.required_params() {
        params.require(key)?;
    }
    let p = |key: &str| params.get(key).unwrap_or_default();

    let prompt = match kind {
        ContentKind::BirthChart => {
            let coords = match (params.get("latitude"), params.get("longitude")) {
                (Some(lat), Some(lon)) => format!(" (latitude {}, longitude {})", lat, lon),
                _ => String::new(),
            };
            format!(
                r#"You are an expert Vedic astrologer. Prepare a birth chart for {name}, born on {date} at {time} in {place}{coords}.

Respond with a JSON object of this exact shape:
{{
  "ascendant": "one of the 12 zodiac signs",
  "sunSign": "one of the 12 zodiac signs",
  "moonSign": "one of the 12 zodiac signs",
  "planetaryPositions": [
    {{"name": "Sun|Moon|Mercury|Venus|Mars|Jupiter|Saturn|Rahu|Ketu", "symbol": "glyph", "element": "Fire|Earth|Air|Water|Shadow", "degree": 0-29, "house": 1-12, "status": "Strong|Weak", "sign": "zodiac sign"}}
  ],
  "housePositions": [
    {{"number": 1-12, "name": "house name", "area": "life areas", "sign": "zodiac sign"}}
  ]
}}
Include all nine bodies exactly once and all twelve houses exactly once.
{json_only}"#,
                name = p("name"),
                date = p("date"),
                time = p("time"),
                place = p("place"),
                coords = coords,
                json_only = JSON_ONLY,
            )
        }
        ContentKind::Horoscope => {
            let mut about = format!("{}, a {} born on", p("full_name"), p("zodiac_sign"));
            about.push(' ');
            about.push_str(params.get("date_of_birth").unwrap_or("an unknown date"));
            if let Some(t) = params.get("time_of_birth") {
                about.push_str(&format!(" at {}", t));
            }
            if let Some(place) = params.get("place_of_birth") {
                about.push_str(&format!(" in {}", place));
            }
            format!(
                r#"You are a warm, insightful astrologer. Write today's ({date}) horoscope for {about}.

Respond with a JSON object of this exact shape:
{{
  "prediction": "3-4 sentences for the day",
  "luckyColor": "a colour",
  "luckyNumber": 1-99,
  "compatibility": ["up to three zodiac signs"],
  "health": "one sentence",
  "career": "one sentence",
  "love": "one sentence",
  "finance": "one sentence",
  "planetaryInfluence": "one sentence on the ruling planet's influence"
}}
{json_only}"#,
                date = p("date"),
                about = about,
                json_only = JSON_ONLY,
            )
        }
        ContentKind::CalendarEvents => format!(
            r#"You are an astrologer preparing an events calendar for {month} {year}.

Respond with a JSON object of this exact shape:
{{
  "events": [
    {{"id": "short unique id", "date": "YYYY-MM-DD within {month} {year}", "title": "event title", "description": "one sentence", "type": "cosmic|zodiac|planetary", "significance": "one sentence"}}
  ]
}}
List between 4 and 10 notable lunar phases, sign ingresses and planetary aspects.
{json_only}"#,
            month = p("month_name"),
            year = p("year"),
            json_only = JSON_ONLY,
        ),
        ContentKind::WeeklyForecast => format!(
            r#"You are an astrologer writing the general forecast for the week {start} to {end}.

Respond with a JSON object of this exact shape:
{{
  "overallEnergy": "High|Medium|Low",
  "predictions": ["4 to 6 short forecast lines"],
  "luckyDays": ["up to 4 weekday names"],
  "challengingDays": ["up to 3 weekday names"]
}}
{json_only}"#,
            start = p("week_start"),
            end = p("week_end"),
            json_only = JSON_ONLY,
        ),
        ContentKind::Matchmaking => format!(
            r#"You are an astrologer assessing the compatibility of {a} and {b}.

Respond with a JSON object of this exact shape:
{{
  "compatibility": 0-100,
  "message": "one sentence summary",
  "loveCompatibility": "two sentences",
  "friendshipCompatibility": "two sentences",
  "businessCompatibility": "two sentences",
  "tips": ["up to five short tips"]
}}
{json_only}"#,
            a = p("sign1"),
            b = p("sign2"),
            json_only = JSON_ONLY,
        ),
        ContentKind::Mantras => {
            let scope = match params.get("category") {
                Some(c) => format!("in the category \"{}\"", c),
                None => "across the categories \"Planetary Mantras\", \"Zodiac Specific Mantras\" and \"Healing Mantras\"".to_string(),
            };
            format!(
                r#"You are a Vedic scholar. Recommend up to 12 traditional mantras {scope}.

Respond with a JSON object of this exact shape:
{{
  "mantras": [
    {{"name": "mantra name", "sanskrit": "Devanagari text", "transliteration": "Latin transliteration", "meaning": "one sentence", "benefits": ["up to five"], "bestTime": "when to chant", "repetitions": 1-1008, "category": "Planetary Mantras|Zodiac Specific Mantras|Healing Mantras"}}
  ]
}}
{json_only}"#,
                scope = scope,
                json_only = JSON_ONLY,
            )
        }
        ContentKind::Remedies => {
            let scope = match params.get("category") {
                Some(c) => format!("in the category \"{}\"", c),
                None => "across the categories \"Planetary Gemstones\", \"Zodiac Remedies\" and \"General Remedies\"".to_string(),
            };
            format!(
                r#"You are a Vedic astrologer. Recommend up to 12 traditional remedies {scope}.

Respond with a JSON object of this exact shape:
{{
  "remedies": [
    {{"name": "remedy name", "category": "Planetary Gemstones|Zodiac Remedies|General Remedies", "description": "one sentence", "solutions": ["up to six"], "gemstones": [{{"name": "", "planet": "Sun|Moon|Mercury|Venus|Mars|Jupiter|Saturn|Rahu|Ketu", "color": "", "finger": "", "day": "", "benefits": "", "price": "", "alternatives": "", "mantra": ""}}], "mantras": ["up to five mantra names"]}}
  ]
}}
{json_only}"#,
                scope = scope,
                json_only = JSON_ONLY,
            )
        }
        ContentKind::Tarot => format!(
            r#"You are a tarot reader. Draw a three-card Past, Present, Future spread from the 22 Major Arcana.

Respond with a JSON object of this exact shape:
{{
  "cards": [
    {{"name": "exact Major Arcana card name", "isReversed": true|false}}
  ],
  "interpretation": "two or three sentences connecting the cards",
  "message": "one sentence of guidance"
}}
{json_only}"#,
            json_only = JSON_ONLY,
        ),
        ContentKind::Panchang => format!(
            r#"You are an expert in Hindu astrology and Panchang calculations. Generate authentic Panchang data for {date} ({day}).

Respond with a JSON object of this exact shape:
{{
  "tithi": "one of the 30 tithis, e.g. Pratipada, Ekadashi, Purnima, Amavasya",
  "nakshatra": "one of the 27 nakshatras",
  "yoga": "one of the 27 yogas",
  "karana": "one of Bava, Balava, Kaulava, Taitila, Garija, Vanija, Vishti, Shakuni, Chatushpada, Naga",
  "sunrise": "HH:MM",
  "sunset": "HH:MM",
  "auspiciousTimings": ["3-4 muhurtas with times and names"],
  "inauspiciousTimings": ["2-3 periods with times and names"],
  "dailyWisdom": "a spiritual message for the day",
  "tithiSignificance": "what this tithi is auspicious for",
  "nakshatraSignificance": "what this nakshatra represents"
}}
{json_only}"#,
            date = p("date"),
            day = p("day_name"),
            json_only = JSON_ONLY,
        ),
    };

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_param() {
        let params = PromptParams::new().with("name", "A").with("date", "2000-01-01");
        assert_eq!(
            build_prompt(ContentKind::BirthChart, &params),
            Err(DispatchError::MissingParam("time"))
        );
    }

    #[test]
    fn test_blank_param_counts_as_missing() {
        let params = PromptParams::new().with("sign1", "Aries").with("sign2", " ");
        assert_eq!(
            build_prompt(ContentKind::Matchmaking, &params),
            Err(DispatchError::MissingParam("sign2"))
        );
    }

    #[test]
    fn test_birth_chart_prompt_mentions_inputs() {
        let params = PromptParams::new()
            .with("name", "Asha")
            .with("date", "2000-01-01")
            .with("time", "10:00")
            .with("place", "Pune")
            .with("latitude", "18.52")
            .with("longitude", "73.85");
        let prompt = build_prompt(ContentKind::BirthChart, &params).unwrap();
        assert!(prompt.contains("Asha"));
        assert!(prompt.contains("Pune (latitude 18.52, longitude 73.85)"));
        assert!(prompt.contains("\"planetaryPositions\""));
    }

    #[test]
    fn test_parameterless_kinds_build() {
        for kind in [ContentKind::Tarot, ContentKind::Mantras, ContentKind::Remedies] {
            assert!(build_prompt(kind, &PromptParams::new()).is_ok());
        }
        let prompt = build_prompt(
            ContentKind::Mantras,
            &PromptParams::new().with("category", "Healing Mantras"),
        )
        .unwrap();
        assert!(prompt.contains("in the category \"Healing Mantras\""));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ContentKind::parse("birth-chart"), Some(ContentKind::BirthChart));
        assert_eq!(ContentKind::parse("PANCHANG"), Some(ContentKind::Panchang));
        assert_eq!(ContentKind::parse("weather"), None);
    }
}
