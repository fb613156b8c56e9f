// Prediction accuracy tracking
//
// Every served record can be logged with its inputs and provenance; users
// rate predictions later and the aggregates are reported per content kind
// and per data source.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::prompts::ContentKind;
use crate::records::DataSource;
use crate::requests::Feedback;

/// Ratings at or above this count as accurate.
const HIGH_RATING: i64 = 4;

/// Per-kind or per-source aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub total: u64,
    pub rated: u64,
    pub avg_user_rating: Option<f64>,
    pub avg_expert_rating: Option<f64>,
    /// Share of all predictions rated 4 or 5
    pub high_rated_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyStats {
    pub period_days: u32,
    pub total_predictions: u64,
    pub by_kind: BTreeMap<String, Aggregate>,
    pub by_source: BTreeMap<String, Aggregate>,
    pub overall_accuracy: f64,
}

/// SQLite-backed store (single connection behind an async mutex)
#[derive(Clone)]
pub struct AccuracyTracker {
    conn: Arc<Mutex<Connection>>,
}

impl AccuracyTracker {
    /// Open or create the store at `path`
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db_path: PathBuf = path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create tracking database directory")?;
        }

        info!("Opening accuracy database at: {}", db_path.display());

        let conn = tokio::task::spawn_blocking(move || -> Result<Connection> {
            let conn = Connection::open(&db_path).context("Failed to open SQLite database")?;
            conn.pragma_update(None, "journal_mode", "WAL")
                .context("Failed to enable WAL mode")?;
            conn.pragma_update(None, "foreign_keys", "ON")
                .context("Failed to enable foreign keys")?;
            Ok(conn)
        })
        .await??;

        Self::with_connection(conn).await
    }

    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::with_connection(conn).await
    }

    async fn with_connection(conn: Connection) -> Result<Self> {
        let tracker = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        tracker.initialize_schema().await?;
        Ok(tracker)
    }

    async fn initialize_schema(&self) -> Result<()> {
        self.execute(|conn| {
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS predictions (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    prediction_type TEXT NOT NULL,
                    input_data TEXT NOT NULL,
                    prediction_output TEXT NOT NULL,
                    data_source TEXT NOT NULL,
                    timestamp TEXT NOT NULL,
                    user_feedback INTEGER DEFAULT NULL,
                    expert_validation INTEGER DEFAULT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_predictions_timestamp
                    ON predictions(timestamp);
                CREATE TABLE IF NOT EXISTS user_feedback (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    prediction_id INTEGER NOT NULL,
                    user_rating INTEGER NOT NULL CHECK (user_rating >= 1 AND user_rating <= 5),
                    feedback_text TEXT,
                    timestamp TEXT NOT NULL,
                    FOREIGN KEY (prediction_id) REFERENCES predictions (id)
                );",
            )
            .context("Failed to create tracking schema")?;
            debug!("Tracking schema initialized");
            Ok(())
        })
        .await
    }

    /// Run `f` against the connection on the blocking pool
    async fn execute<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&Connection) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            f(&conn)
        })
        .await?
    }

    /// Records a served prediction and returns its id.
    pub async fn log_prediction(
        &self,
        kind: ContentKind,
        input: serde_json::Value,
        output: serde_json::Value,
        source: DataSource,
    ) -> Result<i64> {
        self.log_prediction_at(kind, input, output, source, Utc::now()).await
    }

    async fn log_prediction_at(
        &self,
        kind: ContentKind,
        input: serde_json::Value,
        output: serde_json::Value,
        source: DataSource,
        at: DateTime<Utc>,
    ) -> Result<i64> {
        let input = serde_json::to_string(&input)?;
        let output = serde_json::to_string(&output)?;
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO predictions (prediction_type, input_data, prediction_output, data_source, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![kind.as_str(), input, output, source.as_str(), stamp(at)],
            )
            .context("Failed to log prediction")?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    /// Stores a rating. Returns false when the prediction id is unknown.
    pub async fn add_feedback(&self, feedback: &Feedback) -> Result<bool> {
        let feedback = feedback.clone();
        self.execute(move |conn| {
            if !prediction_exists(conn, feedback.prediction_id)? {
                return Ok(false);
            }
            conn.execute(
                "INSERT INTO user_feedback (prediction_id, user_rating, feedback_text, timestamp)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    feedback.prediction_id,
                    feedback.rating,
                    feedback.text,
                    stamp(Utc::now())
                ],
            )?;
            conn.execute(
                "UPDATE predictions SET user_feedback = ?1 WHERE id = ?2",
                params![feedback.rating, feedback.prediction_id],
            )?;
            Ok(true)
        })
        .await
    }

    /// Stores an expert score (1..=10). Returns false when the prediction id is unknown.
    pub async fn add_expert_validation(&self, prediction_id: i64, score: u8) -> Result<bool> {
        let score = score.clamp(1, 10);
        self.execute(move |conn| {
            let updated = conn.execute(
                "UPDATE predictions SET expert_validation = ?1 WHERE id = ?2",
                params![score, prediction_id],
            )?;
            Ok(updated > 0)
        })
        .await
    }

    /// Aggregates over the last `days` days, optionally for one kind.
    pub async fn accuracy_stats(&self, days: u32, kind: Option<ContentKind>) -> Result<AccuracyStats> {
        let since = stamp(Utc::now() - Duration::days(i64::from(days)));
        let kind = kind.map(|k| k.as_str().to_string());

        self.execute(move |conn| {
            let by_kind = aggregate_by(conn, "prediction_type", &since, kind.as_deref())?;
            let by_source = aggregate_by(conn, "data_source", &since, kind.as_deref())?;

            let total_predictions: u64 = by_source.values().map(|a| a.total).sum();
            let high_rated: f64 = by_source
                .values()
                .map(|a| a.high_rated_percentage * a.total as f64 / 100.0)
                .sum();
            let overall_accuracy = if total_predictions > 0 {
                high_rated / total_predictions as f64 * 100.0
            } else {
                0.0
            };

            Ok(AccuracyStats {
                period_days: days,
                total_predictions,
                by_kind,
                by_source,
                overall_accuracy,
            })
        })
        .await
    }
}

fn stamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn prediction_exists(conn: &Connection, id: i64) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row("SELECT id FROM predictions WHERE id = ?1", params![id], |row| row.get(0))
        .optional()?;
    Ok(found.is_some())
}

/// `column` is one of two fixed names, never user input.
fn aggregate_by(
    conn: &Connection,
    column: &'static str,
    since: &str,
    kind: Option<&str>,
) -> Result<BTreeMap<String, Aggregate>> {
    let sql = format!(
        "SELECT {col},
                COUNT(*),
                COUNT(user_feedback),
                AVG(user_feedback),
                AVG(expert_validation),
                COUNT(CASE WHEN user_feedback >= ?3 THEN 1 END)
         FROM predictions
         WHERE timestamp >= ?1 AND (?2 IS NULL OR prediction_type = ?2)
         GROUP BY {col}",
        col = column
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![since, kind, HIGH_RATING], |row| {
        let total: i64 = row.get(1)?;
        let high: i64 = row.get(5)?;
        Ok((
            row.get::<_, String>(0)?,
            Aggregate {
                total: total as u64,
                rated: row.get::<_, i64>(2)? as u64,
                avg_user_rating: row.get(3)?,
                avg_expert_rating: row.get(4)?,
                high_rated_percentage: if total > 0 {
                    high as f64 / total as f64 * 100.0
                } else {
                    0.0
                },
            },
        ))
    })?;

    let mut out = BTreeMap::new();
    for row in rows {
        let (key, aggregate) = row?;
        out.insert(key, aggregate);
    }
    Ok(out)
}
