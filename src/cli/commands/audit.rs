use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::PeriodFilter;
use crate::errors::AppResult;
use crate::models::coverage::CoverageResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{color_for_gap, color_for_ratio, paint};
use crate::utils::date::{current_month_bounds, parse_range};
use crate::utils::formatting::{bold, hours2readable, ratio2readable};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Audit {
        range,
        employee,
        details,
    } = cmd
    {
        let bounds = match range {
            Some(r) => parse_range(r)?,
            None => Some(current_month_bounds()),
        };

        let filter = PeriodFilter {
            bounds,
            employee: employee.clone(),
        };

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let results = Core::audit_period(&mut pool, &filter, cfg)?;

        header(period_label(bounds));

        if results.is_empty() {
            warning("No work orders or presence found for the selected period.");
            return Ok(());
        }

        print!("{}", build_table(&results, &cfg.separator_char).render());

        if *details {
            for r in &results {
                print_details(r);
            }
        }
    }
    Ok(())
}

fn period_label(bounds: Option<(NaiveDate, NaiveDate)>) -> String {
    match bounds {
        Some((a, b)) if a == b => format!("Audit for {}", a),
        Some((a, b)) => format!("Audit from {} to {}", a, b),
        None => "Audit (all imported data)".to_string(),
    }
}

fn build_table(results: &[CoverageResult], separator: &str) -> Table {
    let mut table = Table::new(vec![
        Column::left("EMPLOYEE"),
        Column::right("PRESENCE"),
        Column::right("PRODUCED"),
        Column::right("COVERED"),
        Column::right("IMPROD."),
        Column::right("GAP"),
        Column::right("OVERLAP"),
        Column::right("SKIPPED"),
    ])
    .with_separator(separator);

    for r in results {
        table.add_row(vec![
            r.employee_id.clone(),
            hours2readable(r.total_presence),
            hours2readable(r.total_job_time_produced),
            hours2readable(r.total_time_covered),
            hours2readable(r.improductive_time_produced),
            hours2readable(r.time_gap),
            ratio2readable(r.overlap_ratio),
            r.discarded_records.to_string(),
        ]);
    }

    let sum = |f: fn(&CoverageResult) -> f64| results.iter().map(f).sum::<f64>();
    table.add_row(vec![
        "TOTAL".to_string(),
        hours2readable(sum(|r| r.total_presence)),
        hours2readable(sum(|r| r.total_job_time_produced)),
        hours2readable(sum(|r| r.total_time_covered)),
        hours2readable(sum(|r| r.improductive_time_produced)),
        hours2readable(sum(|r| r.time_gap)),
        String::new(),
        results
            .iter()
            .map(|r| r.discarded_records)
            .sum::<usize>()
            .to_string(),
    ]);

    table
}

fn print_details(r: &CoverageResult) {
    println!("\n{}", bold(&r.employee_id));
    println!(
        "  presence      {}  (excess {}, holiday {})",
        hours2readable(r.total_presence),
        hours2readable(r.excess_hours),
        hours2readable(r.holiday_hours)
    );
    println!(
        "  produced      {}  (productive {}, improductive {})",
        hours2readable(r.total_job_time_produced),
        hours2readable(r.productive_time_produced),
        hours2readable(r.improductive_time_produced)
    );
    println!("  covered       {}", hours2readable(r.total_time_covered));
    println!(
        "  gap           {}",
        paint(
            color_for_gap(r.time_gap, r.total_presence),
            &hours2readable(r.time_gap)
        )
    );

    let ratio = ratio2readable(r.overlap_ratio);
    let ratio = if r.has_multitasking() {
        format!("{ratio}  parallel work logged")
    } else {
        ratio
    };
    println!("  overlap       {}", paint(color_for_ratio(r.overlap_ratio), &ratio));

    println!(
        "  records       {} valid, {} skipped",
        r.valid_records, r.discarded_records
    );
    if r.qty_planned > 0.0 || r.qty_produced > 0.0 {
        println!(
            "  quantities    {} produced / {} planned",
            r.qty_produced, r.qty_planned
        );
    }
}
