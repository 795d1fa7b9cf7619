//! # Assignment Records
//!
//! An accepted seating is saved as a text record that doubles as a history
//! file for later runs:
//!
//! ```text
//! # Assigned at: 2025-03-04 09:00:00
//! 1,P7
//! 2,P3
//! ...
//!
//! ```

use crate::assignment::Assignment;
use crate::error::{Result, SeatingError};
use crate::history::History;
use crate::roster::Roster;
use crate::roster::StudentId;
use chrono::NaiveDateTime;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// Lines are ordered by student id: canonical integer ids ascending by
/// value, then any other ids in roster order.
pub fn render(assignment: &Assignment, assigned_at: NaiveDateTime) -> String {
    let mut out = format!("# Assigned at: {}\n", assigned_at.format(TIMESTAMP_FORMAT));
    let mut seats: Vec<_> = assignment.seats().collect();
    seats.sort_by_key(|(id, _)| export_key(id));
    for (id, desk) in seats {
        out.push_str(&format!("{},{}\n", id, desk));
    }
    out.push('\n');
    out
}

fn export_key(id: &StudentId) -> (bool, u32) {
    match id.as_str().parse::<u32>() {
        Ok(n) if n.to_string() == id.as_str() => (false, n),
        _ => (true, 0),
    }
}

/// `seating_history_<YYYY-MM-DD_HHMMSS>.txt`
pub fn file_name(assigned_at: NaiveDateTime) -> String {
    format!(
        "seating_history_{}.txt",
        assigned_at.format(FILE_STAMP_FORMAT)
    )
}

/// Writes the record into `dir` and returns the path written. Existing files
/// are never overwritten: a record stamped with the same second as an
/// earlier one gets a `_2`, `_3`, ... suffix.
pub fn write(
    dir: &Path,
    assignment: &Assignment,
    assigned_at: NaiveDateTime,
) -> Result<PathBuf> {
    let text = render(assignment, assigned_at);
    let stamp = assigned_at.format(FILE_STAMP_FORMAT);
    let mut n = 1;
    loop {
        let path = if n == 1 {
            dir.join(file_name(assigned_at))
        } else {
            dir.join(format!("seating_history_{}_{}.txt", stamp, n))
        };
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(text.as_bytes())
                    .map_err(|e| SeatingError::io(&path, e))?;
                tracing::info!(path = %path.display(), "wrote seating record");
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(SeatingError::io(&path, e)),
        }
    }
}

/// Reads a record back as a seating of `roster`. Every student must have
/// exactly one desk and every desk exactly two students.
pub fn parse(roster: &Roster, text: &str) -> Result<Assignment> {
    let entries = History::parse(text);
    let mut seats = Vec::with_capacity(roster.len());
    for s in roster.students() {
        let desks: Vec<_> = entries.desks_of(s.id.as_str()).collect();
        match desks.as_slice() {
            [desk] => seats.push((s.id.clone(), *desk)),
            [] => {
                return Err(SeatingError::InvalidAssignment(format!(
                    "student {} has no desk in the record",
                    s.id
                )));
            }
            _ => {
                return Err(SeatingError::InvalidAssignment(format!(
                    "student {} has {} desks in the record",
                    s.id,
                    desks.len()
                )));
            }
        }
    }
    let assignment = Assignment::from_seats(roster, seats);
    assignment.validate(roster)?;
    Ok(assignment)
}

pub fn load(roster: &Roster, path: &Path) -> Result<Assignment> {
    let text = std::fs::read_to_string(path).map_err(|e| SeatingError::io(path, e))?;
    parse(roster, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ForcedPair;
    use crate::roster::tests::sample_roster;
    use crate::search;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn at_time(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn at() -> NaiveDateTime {
        at_time(9, 5)
    }

    fn seating_of(roster: &Roster, seed: u64) -> Assignment {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        search::assign(roster, &History::new(), &ForcedPair::default(), 10, &mut rng)
            .unwrap()
            .assignment
    }

    fn seating() -> Assignment {
        seating_of(&sample_roster(), 2)
    }

    fn record_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn record_layout() {
        let a = seating();
        let text = render(&a, at());
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines[0], "# Assigned at: 2025-03-04 09:05:00");
        assert_eq!(lines.len(), 1 + 30 + 2);
        assert!(lines[1].starts_with("1,P"));
        assert!(lines[30].starts_with("30,P"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn record_reloads_as_history() {
        let a = seating();
        let history = History::parse(&render(&a, at()));
        assert_eq!(history.len(), 30);
        for (id, &desk) in a.seats() {
            assert!(history.contains(id.as_str(), desk));
        }
        assert_eq!(a.conflicts(&history), 30);
    }

    #[test]
    fn record_parses_back_to_the_same_seating() {
        let roster = sample_roster();
        let a = seating();
        let back = parse(&roster, &render(&a, at())).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn history_with_many_runs_is_not_a_record() {
        let roster = sample_roster();
        let a = seating();
        let mut text = render(&a, at());
        text.push_str("1,P1\n1,P2\n");
        assert!(matches!(
            parse(&roster, &text),
            Err(SeatingError::InvalidAssignment(_))
        ));
        assert!(parse(&roster, "# empty\n").is_err());
    }

    #[test]
    fn lines_follow_numeric_id_order_not_roster_order() {
        let text: String = (1..=30)
            .rev()
            .map(|i| format!("{i} Student{i}\n"))
            .collect();
        let roster = Roster::parse(&text).unwrap();
        let a = seating_of(&roster, 5);
        let ids: Vec<String> = render(&a, at())
            .lines()
            .skip(1)
            .filter(|l| !l.is_empty())
            .filter_map(|l| l.split(',').next())
            .map(str::to_owned)
            .collect();
        let expected: Vec<String> = (1..=30).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
        assert_eq!(parse(&roster, &render(&a, at())).unwrap(), a);
    }

    #[test]
    fn non_numeric_ids_follow_numeric_ones() {
        let key = |s: &str| export_key(&StudentId::from(s));
        assert!(key("2") < key("10"));
        assert!(key("30") < key("07"));
        assert!(key("30") < key("x1"));
        assert_eq!(key("07"), key("x1"));
    }

    #[test]
    fn write_uses_timestamped_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), &seating(), at()).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("seating_history_2025-03-04_090500.txt")
        );
        let history = History::load(&path).unwrap();
        assert_eq!(history.len(), 30);
    }

    #[test]
    fn two_runs_on_the_same_day_keep_both_records() {
        let roster = sample_roster();
        let dir = tempfile::tempdir().unwrap();
        let morning = seating_of(&roster, 2);
        let afternoon = seating_of(&roster, 3);
        assert_ne!(morning, afternoon);

        let p1 = write(dir.path(), &morning, at_time(9, 0)).unwrap();
        let p2 = write(dir.path(), &afternoon, at_time(14, 0)).unwrap();
        assert_ne!(p1, p2);
        assert_eq!(record_files(dir.path()).len(), 2);
        assert_eq!(load(&roster, &p1).unwrap(), morning);
        assert_eq!(load(&roster, &p2).unwrap(), afternoon);
    }

    #[test]
    fn same_second_gets_a_suffix_instead_of_overwriting() {
        let roster = sample_roster();
        let dir = tempfile::tempdir().unwrap();
        let first = seating_of(&roster, 2);
        let second = seating_of(&roster, 3);

        let p1 = write(dir.path(), &first, at()).unwrap();
        let p2 = write(dir.path(), &second, at()).unwrap();
        let p3 = write(dir.path(), &first, at()).unwrap();
        assert_eq!(
            record_files(dir.path()),
            vec![
                "seating_history_2025-03-04_090500.txt",
                "seating_history_2025-03-04_090500_2.txt",
                "seating_history_2025-03-04_090500_3.txt",
            ]
        );
        assert_eq!(load(&roster, &p1).unwrap(), first);
        assert_eq!(load(&roster, &p2).unwrap(), second);
        assert_eq!(load(&roster, &p3).unwrap(), first);

        let mut merged = History::load(&p1).unwrap();
        merged.extend(History::load(&p2).unwrap());
        assert_eq!(first.conflicts(&merged), 30);
        assert_eq!(second.conflicts(&merged), 30);
    }
}
