//! Sprint status resolution and date formatting

use chrono::{Datelike, Local, NaiveDate};

use super::models::{Sprint, SprintStatus};

/// Classify a sprint relative to a reference day.
///
/// Comparison is at day granularity: a reference day before the start
/// day is future, after the end day is past, anything within the
/// inclusive range is current. Each sprint is evaluated independently,
/// so caller-constructed overlapping ranges can both report current.
pub fn sprint_status(sprint: &Sprint, on: NaiveDate) -> SprintStatus {
    if on < sprint.start_date {
        SprintStatus::Future
    } else if on > sprint.end_date {
        SprintStatus::Past
    } else {
        SprintStatus::Current
    }
}

/// Status against the local calendar today
pub fn sprint_status_today(sprint: &Sprint) -> SprintStatus {
    sprint_status(sprint, Local::now().date_naive())
}

/// Format a date as "M/D" without zero padding
pub fn format_day(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// Format a sprint's inclusive range as "YYYY/M/D — YYYY/M/D"
pub fn format_range(sprint: &Sprint) -> String {
    format!(
        "{}/{}/{} — {}/{}/{}",
        sprint.start_date.year(),
        sprint.start_date.month(),
        sprint.start_date.day(),
        sprint.end_date.year(),
        sprint.end_date.month(),
        sprint.end_date.day(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprints::generator::generate;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_sprint() -> Sprint {
        // 2026-01-17 ..= 2026-02-13
        generate(date(2026, 1, 17), 1).remove(0)
    }

    #[test]
    fn test_status_partition() {
        let sprint = sample_sprint();

        assert_eq!(sprint_status(&sprint, date(2026, 1, 1)), SprintStatus::Future);
        assert_eq!(sprint_status(&sprint, date(2026, 1, 20)), SprintStatus::Current);
        assert_eq!(sprint_status(&sprint, date(2026, 3, 1)), SprintStatus::Past);
    }

    #[test]
    fn test_status_boundary_days_inclusive() {
        let sprint = sample_sprint();

        assert_eq!(sprint_status(&sprint, date(2026, 1, 16)), SprintStatus::Future);
        assert_eq!(sprint_status(&sprint, date(2026, 1, 17)), SprintStatus::Current);
        assert_eq!(sprint_status(&sprint, date(2026, 2, 13)), SprintStatus::Current);
        assert_eq!(sprint_status(&sprint, date(2026, 2, 14)), SprintStatus::Past);
    }

    #[test]
    fn test_status_monotonic_over_time() {
        let sprint = sample_sprint();

        // Walking forward a day at a time never jumps future -> past
        let mut day = date(2025, 12, 1);
        let mut previous = sprint_status(&sprint, day);
        while day < date(2026, 4, 1) {
            day += Duration::days(1);
            let status = sprint_status(&sprint, day);
            if previous == SprintStatus::Future && status == SprintStatus::Past {
                panic!("status jumped future -> past at {}", day);
            }
            previous = status;
        }
        assert_eq!(previous, SprintStatus::Past);
    }

    #[test]
    fn test_overlapping_sprints_both_current() {
        let mut a = sample_sprint();
        let mut b = sample_sprint();
        b.id = "sprint-2".to_string();
        a.start_date = date(2026, 1, 1);
        a.end_date = date(2026, 1, 31);
        b.start_date = date(2026, 1, 15);
        b.end_date = date(2026, 2, 15);

        let on = date(2026, 1, 20);
        assert_eq!(sprint_status(&a, on), SprintStatus::Current);
        assert_eq!(sprint_status(&b, on), SprintStatus::Current);
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(date(2026, 1, 17)), "1/17");
        assert_eq!(format_day(date(2026, 12, 3)), "12/3");
    }

    #[test]
    fn test_format_range() {
        let sprint = sample_sprint();
        assert_eq!(format_range(&sprint), "2026/1/17 — 2026/2/13");
    }
}
