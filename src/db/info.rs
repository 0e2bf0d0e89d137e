use crate::errors::AppResult;
use crate::models::PersonKind;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use rusqlite::Connection;
use std::fs;

/// Row count of one record kind.
pub fn count_rows(conn: &Connection, kind: PersonKind) -> AppResult<i64> {
    let count = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", kind.table()),
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROWS PER KIND
    //
    for kind in PersonKind::ALL {
        let count = count_rows(conn, kind)?;
        println!(
            "{}• {}:{} {}{}{}",
            CYAN,
            kind.table(),
            RESET,
            GREEN,
            count,
            RESET
        );
    }

    //
    // 3) LOG SIZE
    //
    let log_rows: i64 = conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
