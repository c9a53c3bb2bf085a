//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas required by core behavior.
//! - Trigger schema migrations before returning a bootstrapped connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON` and a busy timeout set.
//! - File databases are switched to WAL so readers never wait on writers.
//! - `open_db*` connections have migrations fully applied; `connect_db`
//!   connections assume a prior `open_db` on the same file.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{debug, error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Busy timeout applied when callers do not pick one.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a SQLite database file and applies all pending migrations.
///
/// # Side effects
/// - Performs connection bootstrap and migration checks.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_with_timeout(path, DEFAULT_BUSY_TIMEOUT)
}

/// Same as [`open_db`] with an explicit busy timeout.
pub fn open_db_with_timeout(path: impl AsRef<Path>, busy_timeout: Duration) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let mut conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(DbError::Open {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match bootstrap_connection(&mut conn, busy_timeout, JournalMode::Wal) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory SQLite database and applies all pending migrations.
///
/// # Side effects
/// - Performs connection bootstrap and migration checks.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let mut conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn, DEFAULT_BUSY_TIMEOUT, JournalMode::Default) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens a short-lived connection for a single store operation.
///
/// Skips migrations; repositories verify schema readiness on construction.
pub fn connect_db(path: impl AsRef<Path>, busy_timeout: Duration) -> DbResult<Connection> {
    let path = path.as_ref();
    let conn = Connection::open(path).map_err(|source| DbError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    configure_connection(&conn, busy_timeout)?;
    debug!("event=db_connect module=db status=ok");
    Ok(conn)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JournalMode {
    Default,
    Wal,
}

fn bootstrap_connection(
    conn: &mut Connection,
    busy_timeout: Duration,
    journal_mode: JournalMode,
) -> DbResult<()> {
    configure_connection(conn, busy_timeout)?;
    if journal_mode == JournalMode::Wal {
        enable_wal(conn)?;
    }
    apply_migrations(conn)?;
    Ok(())
}

fn configure_connection(conn: &Connection, busy_timeout: Duration) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(busy_timeout)?;
    Ok(())
}

fn enable_wal(conn: &Connection) -> DbResult<()> {
    let mode: String = conn.query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))?;
    debug!("event=db_journal_mode module=db status=ok mode={mode}");
    Ok(())
}
