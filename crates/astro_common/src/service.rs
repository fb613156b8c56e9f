//! Content service: dispatch, normalize, and fall back.
//!
//! Every operation returns a record. AI-path failures are logged and absorbed
//! by the kind's fallback generator; they never reach the caller as errors.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::dispatcher::Dispatcher;
use crate::error::{DispatchError, NormalizeError};
use crate::fallback::{self, RngSource};
use crate::normalize;
use crate::prompts::{ContentKind, PromptParams};
use crate::records::{
    BirthChartRecord, CalendarEventRecord, DataSource, HoroscopeRecord, MantraCategory,
    MantraRecord, MatchRecord, PanchangRecord, RemedyCategory, RemedyRecord, TarotReading,
    WeeklyForecastRecord,
};
use crate::requests::{BirthDetails, HoroscopeSubject};
use crate::zodiac::Sign;

/// A record together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    pub record: T,
    pub source: DataSource,
}

impl<T> Generated<T> {
    fn ai(record: T) -> Self {
        Self {
            record,
            source: DataSource::AiGenerated,
        }
    }

    fn fallback(record: T) -> Self {
        Self {
            record,
            source: DataSource::Fallback,
        }
    }
}

/// Why the AI path was abandoned.
#[derive(Debug)]
enum Unavailable {
    Dispatch(DispatchError),
    Normalize(NormalizeError),
}

#[derive(Clone)]
pub struct ContentService {
    dispatcher: Dispatcher,
    rng: RngSource,
}

impl ContentService {
    pub fn new(dispatcher: Dispatcher, rng: RngSource) -> Self {
        Self { dispatcher, rng }
    }

    pub fn ai_configured(&self) -> bool {
        self.dispatcher.is_configured()
    }

    async fn try_ai<T>(
        &self,
        kind: ContentKind,
        params: &PromptParams,
        normalize: impl FnOnce(&str) -> Result<T, NormalizeError>,
    ) -> Result<T, Unavailable> {
        let raw = self
            .dispatcher
            .dispatch(kind, params)
            .await
            .map_err(Unavailable::Dispatch)?;
        normalize(&raw).map_err(Unavailable::Normalize)
    }

    /// Runs the AI path and falls back on any failure.
    async fn produce<T>(
        &self,
        kind: ContentKind,
        params: PromptParams,
        normalize: impl FnOnce(&str) -> Result<T, NormalizeError>,
        fallback: impl FnOnce(&RngSource) -> T,
    ) -> Generated<T> {
        match self.try_ai(kind, &params, normalize).await {
            Ok(record) => {
                info!("{}: served AI-generated content", kind.as_str());
                Generated::ai(record)
            }
            Err(Unavailable::Dispatch(DispatchError::MissingCredential)) => {
                debug!("{}: no AI credential, using fallback", kind.as_str());
                Generated::fallback(fallback(&self.rng))
            }
            Err(Unavailable::Dispatch(e)) => {
                warn!("{}: AI dispatch failed, using fallback: {}", kind.as_str(), e);
                Generated::fallback(fallback(&self.rng))
            }
            Err(Unavailable::Normalize(e)) => {
                warn!("{}: AI response rejected, using fallback: {}", kind.as_str(), e);
                Generated::fallback(fallback(&self.rng))
            }
        }
    }

    pub async fn birth_chart(&self, details: &BirthDetails) -> Generated<BirthChartRecord> {
        let params = PromptParams::new()
            .with("name", details.name.as_str())
            .with("date", details.date.format("%Y-%m-%d").to_string())
            .with("time", details.time.format("%H:%M").to_string())
            .with("place", details.place.as_str())
            .with_opt("latitude", details.latitude.map(|v| v.to_string()))
            .with_opt("longitude", details.longitude.map(|v| v.to_string()));

        self.produce(
            ContentKind::BirthChart,
            params,
            |raw| normalize::birth_chart::normalize(raw, details),
            |rng| fallback::chart::birth_chart(&mut rng.rng(), details),
        )
        .await
    }

    pub async fn horoscope(
        &self,
        subject: &HoroscopeSubject,
        today: NaiveDate,
    ) -> Generated<HoroscopeRecord> {
        let params = PromptParams::new()
            .with("full_name", subject.full_name.as_str())
            .with("zodiac_sign", subject.sign.name())
            .with("date", today.format("%Y-%m-%d").to_string())
            .with("date_of_birth", subject.date_of_birth.format("%Y-%m-%d").to_string())
            .with_opt("time_of_birth", subject.time_of_birth.as_deref())
            .with_opt("place_of_birth", subject.place_of_birth.as_deref());

        self.produce(
            ContentKind::Horoscope,
            params,
            |raw| normalize::horoscope::normalize(raw, subject, today),
            |rng| fallback::chart::horoscope(&mut rng.rng(), subject, today),
        )
        .await
    }

    pub async fn matchmaking(&self, a: Sign, b: Sign) -> Generated<MatchRecord> {
        let params = PromptParams::new().with("sign1", a.name()).with("sign2", b.name());
        self.produce(
            ContentKind::Matchmaking,
            params,
            |raw| normalize::matchmaking::normalize(raw, a, b),
            |rng| fallback::chart::matchmaking(&mut rng.rng(), a, b),
        )
        .await
    }

    pub async fn panchang(&self, date: NaiveDate) -> Generated<PanchangRecord> {
        let params = PromptParams::new()
            .with("date", date.format("%Y-%m-%d").to_string())
            .with("day_name", date.format("%A").to_string());
        self.produce(
            ContentKind::Panchang,
            params,
            |raw| normalize::panchang::normalize(raw, date),
            |_| fallback::panchang::generate(date),
        )
        .await
    }

    pub async fn calendar_events(&self, year: i32, month: u32) -> Generated<Vec<CalendarEventRecord>> {
        let month_name = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%B").to_string())
            .unwrap_or_default();
        let params = PromptParams::new()
            .with("month_name", month_name)
            .with("year", year.to_string());
        self.produce(
            ContentKind::CalendarEvents,
            params,
            |raw| normalize::calendar::normalize_events(raw, year, month),
            |_| fallback::calendar::events(year, month),
        )
        .await
    }

    pub async fn weekly_forecast(
        &self,
        week_start: NaiveDate,
        week_end: NaiveDate,
    ) -> Generated<WeeklyForecastRecord> {
        let params = PromptParams::new()
            .with("week_start", week_start.format("%Y-%m-%d").to_string())
            .with("week_end", week_end.format("%Y-%m-%d").to_string());
        self.produce(
            ContentKind::WeeklyForecast,
            params,
            |raw| normalize::calendar::normalize_weekly(raw, week_start, week_end),
            |rng| fallback::calendar::weekly(&mut rng.rng(), week_start, week_end),
        )
        .await
    }

    pub async fn mantras(&self, category: Option<MantraCategory>) -> Generated<Vec<MantraRecord>> {
        let params = PromptParams::new().with_opt("category", category.map(MantraCategory::label));
        self.produce(
            ContentKind::Mantras,
            params,
            |raw| normalize::catalogue::normalize_mantras(raw, category),
            |_| fallback::mantras(category),
        )
        .await
    }

    pub async fn remedies(&self, category: Option<RemedyCategory>) -> Generated<Vec<RemedyRecord>> {
        let params = PromptParams::new().with_opt("category", category.map(RemedyCategory::label));
        self.produce(
            ContentKind::Remedies,
            params,
            |raw| normalize::catalogue::normalize_remedies(raw, category),
            |_| fallback::remedies(category),
        )
        .await
    }

    pub async fn tarot(&self) -> Generated<TarotReading> {
        self.produce(
            ContentKind::Tarot,
            PromptParams::new(),
            normalize::tarot::normalize,
            |rng| fallback::chart::tarot(&mut rng.rng()),
        )
        .await
    }
}
