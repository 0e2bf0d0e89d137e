pub mod backup;
pub mod clock;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod guest;
pub mod init;
pub mod list;
pub mod log;
pub mod names;
pub mod serve;
pub mod stats;
pub mod volunteer;

use crate::config::{Backend, Config};
use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::PathBuf;

/// Path of the SQLite file for maintenance commands.
pub(crate) fn sqlite_path(cfg: &Config, command: &str) -> AppResult<PathBuf> {
    if cfg.backend == Backend::Memory {
        return Err(AppError::Config(format!(
            "'{command}' requires the sqlite backend"
        )));
    }
    Ok(cfg.database_path())
}

/// Open the configured database file, creating its directory if needed.
/// The schema is left as found.
pub(crate) fn connect(cfg: &Config, command: &str) -> AppResult<(Connection, PathBuf)> {
    let path = sqlite_path(cfg, command)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(&path)?;
    Ok((conn, path))
}

/// Open the configured database with the schema up to date.
pub(crate) fn open_connection(cfg: &Config, command: &str) -> AppResult<Connection> {
    let (conn, _) = connect(cfg, command)?;
    init_db(&conn)?;
    Ok(conn)
}
