use crate::model::{AnalysisReport, HistoryEntry, StorageError};
use crate::utils::parse_datetime;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

/// Analysis history keyed by requester and URL.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens the database and creates the schema if needed.
    pub fn new(db_path: &str) -> Result<Self, StorageError> {
        Self::with_connection(Connection::open(db_path)?)
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS analyses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                requester TEXT NOT NULL,
                url TEXT NOT NULL,
                seo_score REAL NOT NULL,
                analysis_data TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_analyses_requester
                ON analyses (requester, created_at);
            "
        )?;

        Ok(Self { conn })
    }

    /// Stores the serialized report with its score and the current time. Returns the row id.
    pub fn save_analysis(&self, requester: &str, report: &AnalysisReport) -> Result<i64, StorageError> {
        self.save_analysis_at(requester, report, Utc::now())
    }

    pub fn save_analysis_at(
        &self,
        requester: &str,
        report: &AnalysisReport,
        created_at: DateTime<Utc>,
    ) -> Result<i64, StorageError> {
        let analysis_data = serde_json::to_string(report)?;
        self.conn.execute(
            "INSERT INTO analyses (requester, url, seo_score, analysis_data, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                requester,
                &report.url,
                report.seo_score,
                analysis_data,
                created_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Most recent analyses of a requester, newest first.
    pub fn recent_history(&self, requester: &str, limit: usize) -> Result<Vec<HistoryEntry>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, url, seo_score, created_at FROM analyses
             WHERE requester = ?1
             ORDER BY created_at DESC, id DESC
             LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![requester, limit as i64], Self::map_history)?;
        let mut entries = Vec::new();
        for entry in rows {
            entries.push(entry?);
        }

        Ok(entries)
    }

    /// Loads the full stored report.
    pub fn load_analysis(&self, id: i64) -> Result<AnalysisReport, StorageError> {
        let mut stmt = self.conn.prepare("SELECT analysis_data FROM analyses WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => {
                let data: String = row.get(0)?;
                Ok(serde_json::from_str(&data)?)
            }
            None => Err(StorageError::NotFound),
        }
    }

    fn map_history(row: &Row) -> Result<HistoryEntry, rusqlite::Error> {
        let created_at_str: String = row.get(3)?;
        let created_at = parse_datetime(&created_at_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                format!("invalid timestamp `{}`", created_at_str).into(),
            )
        })?;

        Ok(HistoryEntry {
            id: row.get(0)?,
            url: row.get(1)?,
            seo_score: row.get(2)?,
            created_at,
        })
    }
}
