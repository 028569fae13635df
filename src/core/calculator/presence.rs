use crate::core::calculator::coverage::seconds_to_hours;
use crate::core::calculator::intervals::presence_intervals;
use crate::models::presence::{PresenceSource, PresenceSummary, PresenceTotal};
use crate::models::punch::Punch;
use chrono::NaiveDate;

/// Presence of one employee over a period.
///
/// Aggregated totals from the ERP win over punches when both exist.
/// With `bounds`, a punch pair counts when its entry falls inside them,
/// wherever its exit lands.
pub fn summarize_presence(
    employee_id: &str,
    punches: &[Punch],
    totals: &[PresenceTotal],
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> PresenceSummary {
    if !totals.is_empty() {
        return PresenceSummary {
            employee_id: employee_id.to_string(),
            total_presence: totals.iter().map(|t| t.presence_hours).sum(),
            excess_hours: totals.iter().map(|t| t.excess_hours).sum(),
            holiday_hours: totals.iter().map(|t| t.holiday_hours).sum(),
            source: PresenceSource::Totals,
        };
    }

    let secs: i64 = presence_intervals(employee_id, punches)
        .iter()
        .filter(|p| match bounds {
            Some((from, to)) => {
                let day = p.span.start.date();
                day >= from && day <= to
            }
            None => true,
        })
        .map(|p| p.span.duration_seconds())
        .sum();

    PresenceSummary {
        employee_id: employee_id.to_string(),
        total_presence: seconds_to_hours(secs),
        source: PresenceSource::Punches,
        ..Default::default()
    }
}
