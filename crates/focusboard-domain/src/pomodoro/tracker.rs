use focusboard_core::{Clock, FocusResult, JsonStoreExt, SharedClock, SharedStore, StorageKey};

use super::{DailyStats, PomodoroSession, SessionKind};

/// Tracks the in-flight session and today's aggregate.
///
/// Only start and completion events are recorded; the countdown belongs to
/// whoever drives the timer.
pub struct PomodoroTracker {
    storage: SharedStore,
    clock: SharedClock,
    current: Option<PomodoroSession>,
    stats: DailyStats,
}

impl PomodoroTracker {
    /// Load today's aggregate. A saved aggregate from another day is
    /// replaced by an empty one for today, and that reset is persisted.
    pub fn load(storage: SharedStore, clock: SharedClock) -> FocusResult<Self> {
        let today = clock.today();
        let stats = match storage.load::<DailyStats>(StorageKey::PomodoroStats) {
            Some(stats) if stats.date == today => stats,
            Some(stale) => {
                tracing::info!(
                    "Daily stats from {} discarded, starting {}",
                    stale.date,
                    today
                );
                let fresh = DailyStats::empty(today);
                storage.save(StorageKey::PomodoroStats, &fresh)?;
                fresh
            }
            None => DailyStats::empty(today),
        };

        Ok(Self {
            storage,
            clock,
            current: None,
            stats,
        })
    }

    pub fn current(&self) -> Option<&PomodoroSession> {
        self.current.as_ref()
    }

    pub fn daily_stats(&self) -> &DailyStats {
        &self.stats
    }

    /// Completed sessions of the current day, in completion order.
    pub fn today_sessions(&self) -> Vec<&PomodoroSession> {
        self.stats.completed_sessions().collect()
    }

    /// Begin a session. An unfinished current session is dropped without
    /// being recorded.
    pub fn start_session(&mut self, kind: SessionKind, duration: u32) -> &PomodoroSession {
        if let Some(abandoned) = self.current.take() {
            tracing::debug!("Abandoning unfinished {} session {}", abandoned.kind, abandoned.id);
        }
        let session = PomodoroSession::start(kind, duration, self.clock.now());
        tracing::debug!("Started {} session of {}s", kind, duration);
        self.current.insert(session)
    }

    /// Finish the current session, append it to today's log and rebuild
    /// the totals. Does nothing when no session is running.
    pub fn complete_session(&mut self) -> FocusResult<Option<PomodoroSession>> {
        let Some(session) = self.current.as_ref() else {
            return Ok(None);
        };
        let completed = session.clone().complete(self.clock.now());

        let mut next = self.stats.clone();
        next.sessions.push(completed.clone());
        next.recompute();
        // A failed write leaves the session running and today's log untouched.
        self.storage.save(StorageKey::PomodoroStats, &next)?;
        self.stats = next;
        self.current = None;

        tracing::info!(
            "Completed {} session; {} pomodoros today",
            completed.kind,
            self.stats.total_pomodoros
        );
        Ok(Some(completed))
    }

    /// Drop the current session without recording it.
    pub fn abandon_session(&mut self) -> Option<PomodoroSession> {
        self.current.take()
    }

    /// Back to an empty aggregate for today, in memory only.
    pub fn reset(&mut self) {
        self.current = None;
        self.stats = DailyStats::empty(self.clock.today());
    }
}
