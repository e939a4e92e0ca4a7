pub mod config;
pub mod tracker;

pub use config::{PomodoroConfig, PomodoroPreset};
pub use tracker::PomodoroTracker;

use chrono::{DateTime, NaiveDate, Utc};
use focusboard_core::FocusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "short-break",
            Self::LongBreak => "long-break",
        }
    }

    pub fn is_break(self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionKind {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Self::Work),
            "short-break" => Ok(Self::ShortBreak),
            "long-break" => Ok(Self::LongBreak),
            other => Err(FocusError::Validation(format!(
                "Unknown session type: {}",
                other
            ))),
        }
    }
}

/// One work or break interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroSession {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    /// Planned length in seconds.
    pub duration: u32,
    pub start_time: DateTime<Utc>,
    /// Equals `start_time` until the session completes.
    pub end_time: DateTime<Utc>,
    pub completed: bool,
}

impl PomodoroSession {
    pub fn start(kind: SessionKind, duration: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            kind,
            duration,
            start_time: now,
            end_time: now,
            completed: false,
        }
    }

    pub fn complete(mut self, now: DateTime<Utc>) -> Self {
        self.end_time = now;
        self.completed = true;
        self
    }
}

/// Aggregate of the sessions completed on one calendar day.
///
/// The three totals are always re-derived from `sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    pub total_pomodoros: u32,
    pub total_work_time: u64,
    pub total_break_time: u64,
    pub sessions: Vec<PomodoroSession>,
}

impl DailyStats {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_pomodoros: 0,
            total_work_time: 0,
            total_break_time: 0,
            sessions: Vec::new(),
        }
    }

    /// Rescan the full session list and rebuild the totals.
    pub fn recompute(&mut self) {
        let completed = || self.sessions.iter().filter(|s| s.completed);

        self.total_pomodoros = completed()
            .filter(|s| s.kind == SessionKind::Work)
            .count() as u32;
        self.total_work_time = completed()
            .filter(|s| s.kind == SessionKind::Work)
            .map(|s| u64::from(s.duration))
            .sum();
        self.total_break_time = completed()
            .filter(|s| s.kind.is_break())
            .map(|s| u64::from(s.duration))
            .sum();
    }

    pub fn completed_sessions(&self) -> impl Iterator<Item = &PomodoroSession> {
        self.sessions.iter().filter(|s| s.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(kind: SessionKind, duration: u32, completed: bool) -> PomodoroSession {
        let mut s = PomodoroSession::start(kind, duration, Utc::now());
        s.completed = completed;
        s
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [SessionKind::Work, SessionKind::ShortBreak, SessionKind::LongBreak] {
            assert_eq!(kind.as_str().parse::<SessionKind>().unwrap(), kind);
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::Value::String(kind.as_str().to_string())
            );
        }
        assert!("nap".parse::<SessionKind>().is_err());
    }

    #[test]
    fn test_recompute_from_sessions() {
        let mut stats = DailyStats::empty(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        stats.sessions = vec![
            session(SessionKind::Work, 1500, true),
            session(SessionKind::ShortBreak, 300, true),
            session(SessionKind::Work, 1500, true),
            session(SessionKind::LongBreak, 900, true),
            session(SessionKind::Work, 1500, false),
        ];
        stats.recompute();

        assert_eq!(stats.total_pomodoros, 2);
        assert_eq!(stats.total_work_time, 3000);
        assert_eq!(stats.total_break_time, 1200);
        assert_eq!(stats.completed_sessions().count(), 4);
    }

    #[test]
    fn test_serialized_shape() {
        let stats = DailyStats::empty(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["totalPomodoros"], 0);

        let s = session(SessionKind::ShortBreak, 300, false);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "short-break");
        assert!(json["startTime"].is_string());
    }
}
