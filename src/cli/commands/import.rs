use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { kind, file } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let path = expand_tilde(file);

        let stored = ImportLogic::import(&mut pool, *kind, &path)?;

        if stored == 0 {
            warning(format!("No rows found in {}", path.display()));
        } else {
            success(format!(
                "Imported {} {} rows from {}",
                stored,
                kind.as_str(),
                path.display()
            ));
        }
    }
    Ok(())
}
