use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use rusqlite::{Connection, params};
use tracing::debug;

use crate::{
    consts::pixel_const::{OPENS_TABLE, STATS_UA_MAX_CHARS},
    errors::Result,
    models::open_event::{NewOpenEvent, OpenStat},
};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

// ! append-only; each call opens its own connection
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Create the opens table if it is missing. Safe to call on every startup.
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {OPENS_TABLE} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                ts TEXT NOT NULL,
                rid TEXT,
                mid TEXT,
                ua TEXT,
                ip TEXT,
                country TEXT,
                referer TEXT
            )"
        ))?;
        Ok(())
    }

    /// Insert one event and return the id SQLite assigned to it.
    pub fn append(&self, event: &NewOpenEvent) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            &format!(
                "INSERT INTO {OPENS_TABLE} (ts, rid, mid, ua, ip, country, referer)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
            ),
            params![
                event.timestamp,
                event.recipient_id,
                event.message_id,
                event.user_agent,
                event.client_ip,
                event.country,
                event.referer,
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, rid = %event.recipient_id, mid = %event.message_id, "open recorded");
        Ok(id)
    }

    /// Up to `limit` events, newest first.
    pub fn recent(&self, limit: i64) -> Result<Vec<OpenStat>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT ts, rid, mid, ip, substr(ua, 1, {STATS_UA_MAX_CHARS}), referer
             FROM {OPENS_TABLE} ORDER BY id DESC LIMIT ?1"
        ))?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok(OpenStat {
                ts: row.get(0)?,
                rid: row.get(1)?,
                mid: row.get(2)?,
                ip: row.get(3)?,
                ua: row.get(4)?,
                referer: row.get(5)?,
            })
        })?;
        let stats = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(stats)
    }
}
