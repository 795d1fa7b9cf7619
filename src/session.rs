use crate::config::SeatingConfig;
use crate::error::Result;
use crate::history::History;
use crate::roster::Roster;
use crate::search::{self, SearchOutcome};
use rand::Rng;
use std::path::Path;

/// Roster and pairing history for one classroom.
///
/// The history only changes between searches: loaded or merged explicitly,
/// and extended with each accepted seating.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    history: History,
}

impl Session {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            history: History::new(),
        }
    }

    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Replaces the current history with the contents of a history file.
    pub fn load_history(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.history = History::load(path)?;
        Ok(())
    }

    pub fn merge_history(&mut self, history: History) {
        self.history.extend(history);
    }

    /// Runs the seat search and, once a seating is accepted, folds it into
    /// the history.
    pub fn assign<R: Rng + ?Sized>(
        &mut self,
        config: &SeatingConfig,
        rng: &mut R,
    ) -> Result<SearchOutcome> {
        let outcome = search::assign(
            &self.roster,
            &self.history,
            &config.forced_pair,
            config.attempt_bound,
            rng,
        )?;
        self.history.record(&outcome.assignment);
        tracing::info!(
            conflicts = outcome.conflicts,
            attempts = outcome.attempts,
            history_entries = self.history.len(),
            "seating accepted"
        );
        Ok(outcome)
    }
}
