//! # Seat Assignment Search
//!
//! Random-restart search for a seating that avoids repeating desks from the
//! pairing history. Each attempt shuffles the desks and the students outside
//! the forced pair, gives the forced pair the first desk, and pairs the rest
//! up in shuffled order. The first conflict-free attempt is accepted as is;
//! otherwise the least-conflicted attempt within the bound is returned.
//!
//! The search holds no state of its own: everything it needs is passed in,
//! including the random number generator.

use crate::SetMin;
use crate::assignment::Assignment;
use crate::config::ForcedPair;
use crate::desks::{self, SEATS_PER_DESK};
use crate::error::{Result, SeatingError};
use crate::history::History;
use crate::roster::{Roster, StudentId};
use rand::Rng;
use rand::seq::SliceRandom;

/// Attempts made before settling for the best seating found.
pub const DEFAULT_ATTEMPT_BOUND: usize = 3000;

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub assignment: Assignment,
    /// Seats repeating a (student, desk) pair from the history.
    pub conflicts: usize,
    /// Attempts actually made; less than the bound only on a conflict-free hit.
    pub attempts: usize,
}

/// Searches for a seating of `roster` with as few history conflicts as
/// possible, keeping `forced_pair` at one desk.
///
/// # Errors
/// [`SeatingError::AssignmentFailure`] if no seating could be constructed at
/// all: a forced-pair member is missing from the roster, both members are the
/// same student, or `attempt_bound` is zero.
/// [`SeatingError::UnevenRemainder`] if the other students cannot fill the
/// remaining desks two by two.
pub fn assign<R: Rng + ?Sized>(
    roster: &Roster,
    history: &History,
    forced_pair: &ForcedPair,
    attempt_bound: usize,
    rng: &mut R,
) -> Result<SearchOutcome> {
    let ForcedPair(first, second) = forced_pair;
    if first == second {
        return Err(SeatingError::AssignmentFailure(format!(
            "forced pair names student {} twice",
            first
        )));
    }
    for id in [first, second] {
        if !roster.contains(id.as_str()) {
            return Err(SeatingError::AssignmentFailure(format!(
                "forced-pair student {} is not on the roster",
                id
            )));
        }
    }

    let mut rest: Vec<&StudentId> = roster
        .students()
        .iter()
        .map(|s| &s.id)
        .filter(|&id| id != first && id != second)
        .collect();
    let mut desk_ids = desks::all_desks().to_vec();
    let free_desks = desk_ids.len() - 1;
    if rest.len() != free_desks * SEATS_PER_DESK {
        return Err(SeatingError::UnevenRemainder {
            remaining: rest.len(),
            desks: free_desks,
        });
    }

    let mut best = None;
    let mut min_conflicts = usize::MAX;
    let mut attempts = 0;
    while attempts < attempt_bound {
        attempts += 1;
        desk_ids.shuffle(rng);
        rest.shuffle(rng);

        let mut seats = Vec::with_capacity(roster.len());
        seats.push((first.clone(), desk_ids[0]));
        seats.push((second.clone(), desk_ids[0]));
        for (pair, &desk) in rest.chunks_exact(SEATS_PER_DESK).zip(&desk_ids[1..]) {
            seats.extend(pair.iter().map(|&id| (id.clone(), desk)));
        }
        let candidate = Assignment::from_seats(roster, seats);
        let conflicts = candidate.conflicts(history);

        if conflicts == 0 {
            min_conflicts = 0;
            best = Some(candidate);
            break;
        }
        if min_conflicts.setmin(conflicts) {
            best = Some(candidate);
        }
    }

    let assignment = best.ok_or_else(|| {
        SeatingError::AssignmentFailure(format!(
            "no seating constructed in {} attempts",
            attempt_bound
        ))
    })?;
    tracing::debug!(attempts, conflicts = min_conflicts, "seat search finished");
    Ok(SearchOutcome {
        assignment,
        conflicts: min_conflicts,
        attempts,
    })
}
