//! Astro Common - shared content pipeline for the astrology daemon.
//!
//! Prompt building and dispatch, response normalization, deterministic
//! fallback generators, the static content tables and the accuracy store.

pub mod coerce;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod prompts;
pub mod records;
pub mod requests;
pub mod service;
pub mod tables;
pub mod tracking;
pub mod zodiac;

pub use config::{AiConfig, FallbackConfig, Provider};
pub use dispatcher::{Dispatcher, FakeGenerator, HttpGenerator, TextGenerator};
pub use error::{DispatchError, NormalizeError, ValidationError};
pub use fallback::RngSource;
pub use prompts::ContentKind;
pub use records::DataSource;
pub use service::{ContentService, Generated};
pub use tracking::{AccuracyStats, AccuracyTracker};
pub use zodiac::Sign;
