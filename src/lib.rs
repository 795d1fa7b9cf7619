// # Deskmate: Classroom Desk-Pair Seating
//
// Seats a class of 30 students at 15 two-seat desks, steering away from the
// desks each student has already used. The crate loads the roster and the
// pairing history, runs a bounded random-restart search, and exports the
// result as a history-compatible record and a chart image.
//
// PNG export is behind the `resvg` feature (enabled by default).

/// Crate-wide error type.
pub mod error;

/// The fixed desk set and class size.
pub mod desks;

/// Students and the class roster.
pub mod roster;

/// Desks previously used by each student.
pub mod history;

/// A complete student-to-desk seating.
pub mod assignment;

/// Run configuration: forced pair, attempt bound, countdown, seed.
pub mod config;

/// The seat assignment search.
pub mod search;

/// Roster and history owned across runs.
pub mod session;

/// Text records of accepted seatings.
pub mod record;

/// Desk-by-desk view of a seating.
pub mod chart;

/// SVG rendering of a seating chart.
pub mod svg;

/// PNG export. Enabled with the `resvg` feature.
#[cfg(feature = "resvg")]
pub mod png;

/// Countdown shown before a seating is drawn.
pub mod countdown;

pub use error::{Result, SeatingError};

/// Keeps the lowest value seen so far.
pub trait SetMin {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Ties leave `self` untouched.
    fn setmin(&mut self, v: Self) -> bool;
}
impl<T> SetMin for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
}

/// Installs the stderr log subscriber used by the binaries. The filter comes
/// from `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
