use chrono::{NaiveDate, TimeZone};
use indexmap::IndexMap;
use serde::Serialize;

use super::entry::SessionLogEntry;
use crate::timer::format_mm_ss;

/// Logged time for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Month/day/year without padding, e.g. `3/7/2025`.
    pub label: String,
    pub total_secs: i64,
    pub entries: usize,
}

impl DailySummary {
    pub fn total_clock(&self) -> String {
        format_mm_ss(self.total_secs)
    }
}

/// Group entries by calendar date in `tz` and sum their durations.
///
/// Days are listed in the order their first entry appears in the log.
pub fn daily_summaries<Tz: TimeZone>(entries: &[SessionLogEntry], tz: &Tz) -> Vec<DailySummary> {
    let mut days: IndexMap<NaiveDate, DailySummary> = IndexMap::new();
    for entry in entries {
        let date = entry.timestamp().with_timezone(tz).date_naive();
        let day = days.entry(date).or_insert_with(|| DailySummary {
            date,
            label: date.format("%-m/%-d/%Y").to_string(),
            total_secs: 0,
            entries: 0,
        });
        day.total_secs += entry.duration_secs();
        day.entries += 1;
    }
    days.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn entry(y: i32, m: u32, d: u32, h: u32, secs: i64) -> SessionLogEntry {
        let at = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        SessionLogEntry::new(at, secs, "", "")
    }

    #[test]
    fn sums_per_day_in_first_seen_order() {
        let entries = vec![
            entry(2025, 3, 8, 9, 1500),
            entry(2025, 3, 7, 9, 300),
            entry(2025, 3, 8, 15, 600),
        ];
        let days = daily_summaries(&entries, &Utc);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].label, "3/8/2025");
        assert_eq!(days[0].total_secs, 2100);
        assert_eq!(days[0].entries, 2);
        assert_eq!(days[0].total_clock(), "35:00");
        assert_eq!(days[1].label, "3/7/2025");
        assert_eq!(days[1].total_secs, 300);
    }

    #[test]
    fn day_boundary_follows_time_zone() {
        // 23:00 UTC on the 7th is already the 8th at UTC+2.
        let entries = vec![entry(2025, 3, 7, 23, 60), entry(2025, 3, 8, 1, 60)];
        let utc = daily_summaries(&entries, &Utc);
        assert_eq!(utc.len(), 2);

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let shifted = daily_summaries(&entries, &plus_two);
        assert_eq!(shifted.len(), 1);
        assert_eq!(shifted[0].total_secs, 120);
    }

    #[test]
    fn empty_log_has_no_days() {
        assert!(daily_summaries(&[], &Utc).is_empty());
    }
}
