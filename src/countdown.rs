use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

/// The numbers shown by a countdown from `seconds`: `seconds`, ..., `1`, `0`.
pub fn ticks(seconds: u64) -> impl Iterator<Item = u64> {
    (0..=seconds).rev()
}

/// Counts down on stderr, one number per second, and returns when it
/// reaches zero. A zero-second countdown returns immediately.
pub fn run(seconds: u64) {
    run_with_tick(seconds, Duration::from_secs(1));
}

pub fn run_with_tick(seconds: u64, tick: Duration) {
    if seconds == 0 {
        return;
    }
    let bar = ProgressBar::new(seconds + 1);
    if let Ok(style) = ProgressStyle::with_template("Seating in {msg:>2} {bar:30.cyan/blue}") {
        bar.set_style(style);
    }
    for remaining in ticks(seconds) {
        bar.set_message(remaining.to_string());
        thread::sleep(tick);
        bar.inc(1);
    }
    bar.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_zero() {
        assert_eq!(ticks(5).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1, 0]);
        assert_eq!(ticks(0).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn zero_tick_countdown_finishes() {
        run_with_tick(3, Duration::ZERO);
        run(0);
    }
}
