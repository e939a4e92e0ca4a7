//! Completion report derived from the task list and the column settings.
//!
//! Nothing here is cached: build a fresh [`CompletionReport`] whenever the
//! tasks or columns change.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use focusboard_core::Clock;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::column::{completion_statuses, Column};
use crate::task::Task;

/// A task counted as completed, with its local completion date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTask {
    pub id: String,
    pub title: String,
    pub status: String,
    pub tags: Vec<String>,
    pub completed_at: DateTime<Utc>,
    pub completed_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    pub today: usize,
    pub this_week: usize,
    pub days: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    groups: BTreeMap<NaiveDate, Vec<CompletedTask>>,
    today: NaiveDate,
    total: usize,
    today_count: usize,
    this_week: usize,
}

impl CompletionReport {
    /// Group the tasks sitting in a completion column that carry a
    /// completion time by their local calendar date.
    pub fn build(tasks: &[Task], columns: &[Column], clock: &dyn Clock) -> Self {
        let done_statuses = completion_statuses(columns);

        let now = clock.now();
        let today = clock.local_date(now);
        let week_start = now - Duration::days(7);

        let mut groups: BTreeMap<NaiveDate, Vec<CompletedTask>> = BTreeMap::new();
        let mut this_week = 0;

        for task in tasks {
            if !done_statuses.contains(task.status.as_str()) {
                continue;
            }
            let Some(completed_at) = task.completed_at else {
                continue;
            };
            if completed_at >= week_start {
                this_week += 1;
            }
            let completed_on = clock.local_date(completed_at);
            groups.entry(completed_on).or_default().push(CompletedTask {
                id: task.id.clone(),
                title: task.title.clone(),
                status: task.status.clone(),
                tags: task.tags.clone(),
                completed_at,
                completed_on,
            });
        }

        for entries in groups.values_mut() {
            entries.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        }

        let total = groups.values().map(Vec::len).sum();
        let today_count = groups.get(&today).map_or(0, Vec::len);

        Self {
            groups,
            today,
            total,
            today_count,
            this_week,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn today_count(&self) -> usize {
        self.today_count
    }

    /// Completed at or after seven days before now.
    pub fn this_week(&self) -> usize {
        self.this_week
    }

    /// Distinct completion dates, most recent first.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.groups.keys().rev().copied().collect()
    }

    /// Entries completed on `date`, most recent first. Empty for a date
    /// without completions.
    pub fn tasks_on(&self, date: NaiveDate) -> &[CompletedTask] {
        self.groups.get(&date).map_or(&[], Vec::as_slice)
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total: self.total,
            today: self.today_count,
            this_week: self.this_week,
            days: self.groups.len(),
        }
    }

    pub fn label_for(&self, date: NaiveDate) -> DayLabel {
        DayLabel::relative_to(date, self.today)
    }

    /// Most recent date with completions, falling back to today.
    pub fn default_date(&self) -> NaiveDate {
        self.groups.keys().next_back().copied().unwrap_or(self.today)
    }
}

/// How a report date is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Today,
    Yesterday,
    Date(NaiveDate),
}

impl DayLabel {
    pub fn relative_to(date: NaiveDate, today: NaiveDate) -> Self {
        if date == today {
            Self::Today
        } else if Some(date) == today.pred_opt() {
            Self::Yesterday
        } else {
            Self::Date(date)
        }
    }

    /// Translation key for the relative labels.
    pub fn translation_key(&self) -> Option<&'static str> {
        match self {
            Self::Today => Some("reports.today"),
            Self::Yesterday => Some("reports.yesterday"),
            Self::Date(_) => None,
        }
    }
}

impl std::fmt::Display for DayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => f.write_str("Today"),
            Self::Yesterday => f.write_str("Yesterday"),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::default_columns;
    use chrono::TimeZone;
    use focusboard_core::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn columns() -> Vec<Column> {
        let mut columns = default_columns();
        columns[2].is_completion_column = Some(true);
        columns
    }

    fn task(title: &str, status: &str, completed_at: Option<DateTime<Utc>>) -> Task {
        Task {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: String::new(),
            status: status.to_string(),
            tags: Vec::new(),
            completed_at,
        }
    }

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_groups_by_date() {
        let tasks = vec![
            task("A", "done", Some(at(1, 9))),
            task("B", "done", Some(at(1, 15))),
            task("C", "done", Some(at(2, 10))),
        ];
        let clock = FixedClock::new(at(2, 18));
        let report = CompletionReport::build(&tasks, &columns(), &clock);

        assert_eq!(report.tasks_on(date(2024, 1, 1)).len(), 2);
        assert_eq!(report.tasks_on(date(2024, 1, 2)).len(), 1);
        assert!(report.tasks_on(date(2024, 1, 3)).is_empty());
        assert_eq!(report.dates(), vec![date(2024, 1, 2), date(2024, 1, 1)]);
        assert_eq!(report.total(), 3);
        assert_eq!(report.today_count(), 1);
    }

    #[test]
    fn test_entries_most_recent_first() {
        let tasks = vec![
            task("Early", "done", Some(at(1, 8))),
            task("Late", "done", Some(at(1, 20))),
        ];
        let report = CompletionReport::build(&tasks, &columns(), &FixedClock::new(at(1, 21)));
        let titles: Vec<&str> = report
            .tasks_on(date(2024, 1, 1))
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Late", "Early"]);
    }

    #[test]
    fn test_excludes_non_completion_and_unstamped() {
        let tasks = vec![
            task("Moved back", "todo", Some(at(1, 9))),
            task("Never stamped", "done", None),
            task("Counted", "done", Some(at(1, 9))),
        ];
        let report = CompletionReport::build(&tasks, &columns(), &FixedClock::new(at(1, 12)));
        assert_eq!(report.total(), 1);
        assert_eq!(report.tasks_on(date(2024, 1, 1))[0].title, "Counted");
    }

    #[test]
    fn test_no_completion_columns_means_empty() {
        let tasks = vec![task("A", "done", Some(at(1, 9)))];
        let report =
            CompletionReport::build(&tasks, &default_columns(), &FixedClock::new(at(1, 12)));
        assert_eq!(report.summary().total, 0);
        assert!(report.dates().is_empty());
        assert_eq!(report.default_date(), date(2024, 1, 1));
    }

    #[test]
    fn test_this_week_window() {
        let now = at(20, 12);
        let tasks = vec![
            task("Recent", "done", Some(now - Duration::days(2))),
            task("Edge", "done", Some(now - Duration::days(7))),
            task("Old", "done", Some(now - Duration::days(8))),
        ];
        let report = CompletionReport::build(&tasks, &columns(), &FixedClock::new(now));
        assert_eq!(report.this_week(), 2);
        assert_eq!(report.summary().days, 3);
    }

    #[test]
    fn test_grouping_uses_local_calendar() {
        let offset = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
        let clock = FixedClock::with_offset(at(2, 12), offset);
        // 02:00 UTC on the 2nd is still the evening of the 1st at UTC-5.
        let tasks = vec![task("Late night", "done", Some(at(2, 2)))];
        let report = CompletionReport::build(&tasks, &columns(), &clock);
        assert_eq!(report.dates(), vec![date(2024, 1, 1)]);
        assert_eq!(report.today_count(), 0);
    }

    #[test]
    fn test_day_labels_and_navigation() {
        let today = date(2024, 1, 10);
        assert_eq!(DayLabel::relative_to(today, today), DayLabel::Today);
        assert_eq!(
            DayLabel::relative_to(date(2024, 1, 9), today),
            DayLabel::Yesterday
        );
        assert_eq!(
            DayLabel::relative_to(date(2024, 1, 2), today).to_string(),
            "2024-01-02"
        );
        assert_eq!(previous_day(date(2024, 3, 1)), date(2024, 2, 29));
        assert_eq!(next_day(date(2023, 12, 31)), date(2024, 1, 1));
    }
}
