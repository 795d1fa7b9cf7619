use crate::desks::{self, DeskId, SEATS_PER_DESK};
use crate::error::{Result, SeatingError};
use crate::history::History;
use crate::roster::{Roster, StudentId};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// A complete seating: every student of the roster mapped to one desk.
///
/// Seats are kept in roster order, which is also the order of exported
/// records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    seats: Vec<(StudentId, DeskId)>,
}

impl Assignment {
    /// Builds an assignment from `(student, desk)` pairs, ordered like the roster.
    pub fn from_seats(
        roster: &Roster,
        seats: impl IntoIterator<Item = (StudentId, DeskId)>,
    ) -> Self {
        let by_id: BTreeMap<StudentId, DeskId> = seats.into_iter().collect();
        let seats = roster
            .students()
            .iter()
            .filter_map(|s| by_id.get(&s.id).map(|&d| (s.id.clone(), d)))
            .collect();
        Self { seats }
    }

    pub fn seats(&self) -> impl Iterator<Item = (&StudentId, &DeskId)> {
        self.seats.iter().map(|(id, desk)| (id, desk))
    }

    pub fn desk_of(&self, id: &str) -> Option<DeskId> {
        self.seats
            .iter()
            .find(|(s, _)| s.as_str() == id)
            .map(|&(_, d)| d)
    }

    pub fn students_at(&self, desk: DeskId) -> impl Iterator<Item = &StudentId> {
        self.seats
            .iter()
            .filter(move |&&(_, d)| d == desk)
            .map(|(id, _)| id)
    }

    /// Number of seats that repeat a (student, desk) pair from `history`.
    pub fn conflicts(&self, history: &History) -> usize {
        self.seats
            .iter()
            .filter(|(id, desk)| history.contains(id.as_str(), *desk))
            .count()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Checks that every roster student has exactly one seat and every desk
    /// holds exactly two students.
    pub fn validate(&self, roster: &Roster) -> Result<()> {
        if self.seats.len() != roster.len() {
            return Err(SeatingError::InvalidAssignment(format!(
                "{} seats for {} students",
                self.seats.len(),
                roster.len()
            )));
        }
        for s in roster.students() {
            if self.desk_of(s.id.as_str()).is_none() {
                return Err(SeatingError::InvalidAssignment(format!(
                    "student {} has no desk",
                    s.id
                )));
            }
        }
        let mut occupancy: BTreeMap<DeskId, usize> = BTreeMap::new();
        for &(_, desk) in &self.seats {
            *occupancy.entry(desk).or_default() += 1;
        }
        for &desk in desks::all_desks() {
            let n = occupancy.get(&desk).copied().unwrap_or(0);
            if n != SEATS_PER_DESK {
                return Err(SeatingError::InvalidAssignment(format!(
                    "desk {} holds {} students",
                    desk, n
                )));
            }
        }
        Ok(())
    }
}

impl Serialize for Assignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.seats.len()))?;
        for (id, desk) in &self.seats {
            map.serialize_entry(id, desk)?;
        }
        map.end()
    }
}
