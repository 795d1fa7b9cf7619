use crate::assignment::Assignment;
use crate::desks::{self, DeskId};
use crate::roster::Roster;
use itertools::Itertools;

/// Caption of the teacher's desk at the front of the room.
pub const LECTERN: &str = "Lectern";

/// One desk as displayed: its label and the two seat labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskRow {
    pub desk: DeskId,
    pub seats: [String; 2],
}

/// A seating laid out desk by desk in label order (`P1`, `P2`, ..., `P15`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingChart {
    rows: Vec<DeskRow>,
}

impl SeatingChart {
    pub fn new(roster: &Roster, assignment: &Assignment) -> Self {
        let rows = desks::all_desks()
            .iter()
            .map(|&desk| {
                let mut labels = assignment
                    .students_at(desk)
                    .map(|id| match roster.get(id.as_str()) {
                        Some(s) => s.label(),
                        None => id.to_string(),
                    });
                DeskRow {
                    desk,
                    seats: [
                        labels.next().unwrap_or_default(),
                        labels.next().unwrap_or_default(),
                    ],
                }
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[DeskRow] {
        &self.rows
    }

    /// Plain-text rendering: the lectern, then one desk per line.
    pub fn to_text(&self) -> String {
        let width = self
            .rows
            .iter()
            .flat_map(|r| r.seats.iter())
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);
        let lines = self.rows.iter().map(|r| {
            format!(
                "{:>4} | {:<width$} | {:<width$}",
                r.desk.to_string(),
                r.seats[0],
                r.seats[1],
                width = width
            )
        });
        std::iter::once(format!("[ {} ]", LECTERN)).chain(lines).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::tests::sample_roster;

    #[test]
    fn chart_lists_desks_in_label_order() {
        let roster = sample_roster();
        // Students 1 and 2 at P15, ..., 29 and 30 at P1.
        let seats = roster.students().iter().enumerate().map(|(i, s)| {
            let desk = desks::get_desk(&format!("P{}", 15 - i / 2)).unwrap();
            (s.id.clone(), desk)
        });
        let a = Assignment::from_seats(&roster, seats);
        let chart = SeatingChart::new(&roster, &a);

        assert_eq!(chart.rows().len(), 15);
        assert_eq!(chart.rows()[0].desk.to_string(), "P1");
        assert_eq!(chart.rows()[0].seats[0], "29 Student29");
        assert_eq!(chart.rows()[0].seats[1], "30 Student30");
        assert_eq!(chart.rows()[14].seats[0], "1 Student1");

        let text = chart.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "[ Lectern ]");
        assert!(lines[1].starts_with("  P1 | 29 Student29"));
    }
}
