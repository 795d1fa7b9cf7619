//! # Pairing History
//!
//! Records which desks each student has already occupied. History files are
//! the same format as exported assignment records: `#` comment lines and
//! `id,desk` lines, any number of lines per student.

use crate::assignment::Assignment;
use crate::desks::{self, DeskId};
use crate::error::{Result, SeatingError};
use crate::roster::StudentId;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    desks: BTreeMap<StudentId, BTreeSet<DeskId>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses history text. Comment lines and lines without a comma are
    /// skipped, as are desk labels outside `P1`..`P15`.
    pub fn parse(text: &str) -> Self {
        let mut history = Self::new();
        for (i, line) in text.lines().enumerate() {
            if line.starts_with('#') || !line.contains(',') {
                continue;
            }
            let mut fields = line.trim().split(',');
            let id = fields.next().unwrap_or_default().trim();
            let label = fields.next().unwrap_or_default();
            match desks::get_desk(label) {
                Some(desk) if !id.is_empty() => {
                    history.insert(StudentId::new(id), desk);
                }
                _ => tracing::warn!(line = i + 1, content = line, "skipping history line"),
            }
        }
        history
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SeatingError::io(path, e))?;
        let history = Self::parse(&text);
        tracing::info!(
            path = %path.display(),
            students = history.desks.len(),
            entries = history.len(),
            "loaded history"
        );
        Ok(history)
    }

    /// Returns `true` if the desk was not already recorded for the student.
    pub fn insert(&mut self, id: StudentId, desk: DeskId) -> bool {
        self.desks.entry(id).or_default().insert(desk)
    }

    pub fn contains(&self, id: &str, desk: DeskId) -> bool {
        self.desks.get(id).is_some_and(|set| set.contains(&desk))
    }

    /// Desks the student has used so far, in label order.
    pub fn desks_of(&self, id: &str) -> impl Iterator<Item = DeskId> + '_ {
        self.desks.get(id).into_iter().flatten().copied()
    }

    /// Absorbs every pair of an accepted assignment.
    pub fn record(&mut self, assignment: &Assignment) {
        for (id, desk) in assignment.seats() {
            self.insert(id.clone(), *desk);
        }
    }

    pub fn extend(&mut self, other: History) {
        for (id, set) in other.desks {
            self.desks.entry(id).or_default().extend(set);
        }
    }

    /// Number of recorded (student, desk) pairs.
    pub fn len(&self) -> usize {
        self.desks.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk(label: &str) -> DeskId {
        desks::get_desk(label).unwrap()
    }

    #[test]
    fn parse_skips_comments_and_malformed_lines() {
        let text = "# Assigned at: 2025-03-04 09:00:00\n\
                    1,P3\n\
                    no comma here\n\
                    2,P4\n\
                    #3,P5\n\
                    1,P7\n\
                    4,P99\n\
                    \n";
        let h = History::parse(text);
        assert!(h.contains("1", desk("P3")));
        assert!(h.contains("1", desk("P7")));
        assert!(h.contains("2", desk("P4")));
        assert!(!h.contains("3", desk("P5")));
        assert!(h.desks_of("4").next().is_none());
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn duplicates_accumulate_into_a_set() {
        let h = History::parse("5,P1\n5,P1\n5 , P2 \r\n");
        assert_eq!(h.desks_of("5").collect::<Vec<_>>(), vec![desk("P1"), desk("P2")]);
    }

    #[test]
    fn extend_merges_sets() {
        let mut a = History::parse("1,P1\n");
        let b = History::parse("1,P2\n2,P2\n");
        a.extend(b);
        assert_eq!(a.len(), 3);
        assert!(a.contains("1", desk("P1")));
        assert!(a.contains("2", desk("P2")));
    }

    #[test]
    fn empty_history() {
        let h = History::parse("# nothing yet\n");
        assert!(h.is_empty());
        assert!(!h.contains("1", desk("P1")));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seating_history.txt");
        std::fs::write(&path, "7,P9\n").unwrap();
        let h = History::load(&path).unwrap();
        assert!(h.contains("7", desk("P9")));
    }
}
