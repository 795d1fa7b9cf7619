use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Number of students in the class.
pub const TOTAL_STUDENTS: usize = 30;
/// Number of two-seat desks in the classroom.
pub const DESK_COUNT: usize = 15;
/// Students sharing one desk.
pub const SEATS_PER_DESK: usize = 2;

/// A two-seat desk, labelled `P1`..`P15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeskId(u8);

impl DeskId {
    /// The 1-based desk number, as printed in the label.
    pub fn number(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DeskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl FromStr for DeskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_desk(s).ok_or_else(|| format!("unknown desk label: {:?}", s))
    }
}

impl Serialize for DeskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

static DESKS: Lazy<Vec<DeskId>> = Lazy::new(|| (1..=DESK_COUNT as u8).map(DeskId).collect());

// Build a label -> desk map once for O(1) lookup.
static DESK_MAP: Lazy<HashMap<String, DeskId>> =
    Lazy::new(|| DESKS.iter().map(|&d| (d.to_string(), d)).collect());

/// All desks in label order.
pub fn all_desks() -> &'static [DeskId] {
    &DESKS
}

/// Looks up a desk by its label (`"P7"`). Surrounding whitespace is ignored.
pub fn get_desk(label: &str) -> Option<DeskId> {
    DESK_MAP.get(label.trim()).copied()
}
