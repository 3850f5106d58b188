//! In-memory session records
//!
//! One process session can hold many runs (restart after game over). Final
//! score and survival time for each run are kept here so the UI can show a
//! best-run line. Nothing is persisted; records die with the process.

use serde::{Deserialize, Serialize};

use crate::sim::{Frame, RunState};

/// Outcome of one finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub score: u32,
    pub survived_seconds: u64,
}

/// All run records for the current process session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    runs: Vec<RunRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run from its final frame. Ignored unless the frame
    /// actually shows a terminal state.
    pub fn record_from_frame(&mut self, frame: &Frame<'_>) {
        if frame.run_state != RunState::Over {
            return;
        }
        self.record(RunRecord {
            score: frame.score,
            survived_seconds: frame.elapsed_seconds,
        });
    }

    pub fn record(&mut self, run: RunRecord) {
        log::info!(
            "run #{}: score {} in {}s",
            self.runs.len() + 1,
            run.score,
            run.survived_seconds
        );
        self.runs.push(run);
    }

    /// Highest-scoring run so far, ties broken by survival time
    pub fn best(&self) -> Option<RunRecord> {
        self.runs
            .iter()
            .copied()
            .max_by_key(|r| (r.score, r.survived_seconds))
    }

    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
