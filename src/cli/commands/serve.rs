use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::errors::AppResult;
use crate::server;

/// Run the HTTP API on a multi-threaded runtime until Ctrl-C.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        let mut cfg = cfg.clone();
        if let Some(addr) = bind {
            cfg.bind = addr.clone();
        }

        let store = db::open(&cfg)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(server::serve(&cfg, store))?;
    }
    Ok(())
}
