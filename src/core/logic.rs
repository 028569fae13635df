use crate::config::Config;
use crate::core::calculator::audit::audit_employees;
use crate::core::calculator::intervals::IntervalOptions;
use crate::db::pool::DbPool;
use crate::db::queries::{PeriodFilter, load_period};
use crate::errors::AppResult;
use crate::models::coverage::CoverageResult;

pub struct Core;

impl Core {
    pub fn interval_options(cfg: &Config) -> IntervalOptions {
        IntervalOptions {
            midnight_rollover: cfg.job_midnight_rollover,
        }
    }

    /// Recompute the coverage of every employee in the period from the raw
    /// imported rows. Nothing derived is stored.
    pub fn audit_period(
        pool: &mut DbPool,
        filter: &PeriodFilter,
        cfg: &Config,
    ) -> AppResult<Vec<CoverageResult>> {
        let data = load_period(pool, filter)?;
        Ok(audit_employees(&data, Self::interval_options(cfg)))
    }
}
