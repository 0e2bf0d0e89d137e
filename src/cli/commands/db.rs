use super::connect;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::info;
use crate::db::migrate::{applied_versions, run_pending_migrations};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let (conn, path) = connect(cfg, "db")?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let applied = run_pending_migrations(&conn)?;
            if applied.is_empty() {
                println!("{}✔ Schema already up to date.{}\n", GREEN, RESET);
            } else {
                for v in &applied {
                    println!("   • {}", v);
                }
                println!("{}✔ Migration completed.{}\n", GREEN, RESET);
            }
        } else {
            // every other operation expects the current schema
            run_pending_migrations(&conn)?;
        }

        //
        // 2) INFO
        //
        if *show_info {
            info::print_db_info(&conn, &path.to_string_lossy())?;
            println!("{}• Schema versions:{}", CYAN, RESET);
            for v in applied_versions(&conn)? {
                println!("   {}", v);
            }
            println!();
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
