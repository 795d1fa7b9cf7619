//! # Class Roster
//!
//! The roster file lists one student per line: a numeric identifier followed
//! by the display name, separated by whitespace. A class always has exactly
//! [`TOTAL_STUDENTS`] students.

use crate::desks::TOTAL_STUDENTS;
use crate::error::{Result, SeatingError};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Stable identifier of a student, as written in the roster and history files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StudentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
}

impl Student {
    /// The `"<id> <name>"` label shown on a seat.
    pub fn label(&self) -> String {
        format!("{} {}", self.id, self.name)
    }
}

/// The full class, in file order. Immutable once built.
#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<Student>,
    index: HashMap<StudentId, usize>,
}

impl Roster {
    /// Builds a roster, checking the class size and that identifiers are unique.
    pub fn new(students: Vec<Student>) -> Result<Self> {
        if students.len() != TOTAL_STUDENTS {
            return Err(SeatingError::RosterSize {
                expected: TOTAL_STUDENTS,
                found: students.len(),
            });
        }
        let mut index = HashMap::with_capacity(students.len());
        for (i, s) in students.iter().enumerate() {
            if index.insert(s.id.clone(), i).is_some() {
                return Err(SeatingError::DuplicateStudent(s.id.clone()));
            }
        }
        Ok(Self { students, index })
    }

    /// Parses roster text. Blank lines are ignored; everything after the
    /// identifier is the display name.
    pub fn parse(text: &str) -> Result<Self> {
        let mut students = Vec::with_capacity(TOTAL_STUDENTS);
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut parts = line.splitn(2, char::is_whitespace);
            let id = parts.next().unwrap_or_default();
            let name = parts.next().map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return Err(SeatingError::RosterLine {
                    line: i + 1,
                    content: line.to_string(),
                });
            }
            students.push(Student {
                id: StudentId::new(id),
                name: name.to_string(),
            });
        }
        Self::new(students)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SeatingError::io(path, e))?;
        let roster = Self::parse(&text)?;
        tracing::info!(path = %path.display(), students = roster.len(), "loaded roster");
        Ok(roster)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.index.get(id).map(|&i| &self.students[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
