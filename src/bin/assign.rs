use anyhow::{Context, bail};
use clap::Parser;
use deskmate::chart::SeatingChart;
use deskmate::config::{ForcedPair, SeatingConfig};
use deskmate::history::History;
use deskmate::roster::Roster;
use deskmate::search::DEFAULT_ATTEMPT_BOUND;
use deskmate::session::Session;
use deskmate::{countdown, record};
use std::fs;
use std::path::{Path, PathBuf};

/// Draws a new desk-pair seating that avoids desks students have already used.
#[derive(Parser)]
struct Cli {
    /// Roster file: one `<id> <name>` line per student.
    #[clap(long, short = 'r', default_value = "txt/student.txt")]
    roster: PathBuf,
    /// Earlier seating records. Repeat to merge several.
    #[clap(long = "history", short = 'H')]
    history: Vec<PathBuf>,
    /// Directory for the new record and chart image.
    #[clap(long, short = 'o', default_value = ".")]
    out_dir: PathBuf,
    /// Random seatings tried before settling for the best one.
    #[clap(long, short = 'a', default_value_t = DEFAULT_ATTEMPT_BOUND)]
    attempts: usize,
    /// Two students who always share a desk.
    #[clap(long, num_args = 2, value_names = ["A", "B"], default_values = ["6", "11"])]
    forced_pair: Vec<String>,
    /// Seconds to count down before drawing; 0 to skip.
    #[clap(long, short = 'c', default_value_t = 5)]
    countdown: u64,
    #[clap(long, short = 's')]
    seed: Option<u64>,
    /// Skip the PNG chart.
    #[clap(long, default_value_t = false)]
    no_image: bool,
    /// Print the seating as JSON instead of a chart.
    #[clap(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    deskmate::init_logging();
    let args = Cli::parse();

    let forced_pair = match args.forced_pair.as_slice() {
        [a, b] => ForcedPair::new(a.as_str(), b.as_str()),
        other => bail!("--forced-pair takes two students, got {}", other.len()),
    };
    let config = SeatingConfig {
        attempt_bound: args.attempts,
        forced_pair,
        countdown_secs: args.countdown,
        seed: args.seed,
    };

    let roster = Roster::load(&args.roster).with_context(|| {
        format!(
            "cannot seat the class without a roster ({})",
            args.roster.display()
        )
    })?;
    let mut session = Session::new(roster);
    for path in &args.history {
        session.merge_history(History::load(path)?);
    }

    countdown::run(config.countdown_secs);
    let mut rng = config.rng();
    let outcome = session
        .assign(&config, &mut rng)
        .context("seat assignment failed")?;
    let chart = SeatingChart::new(session.roster(), &outcome.assignment);

    if args.json {
        let out = serde_json::json!({
            "conflicts": outcome.conflicts,
            "attempts": outcome.attempts,
            "assignment": outcome.assignment,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", chart.to_text());
        if outcome.conflicts > 0 {
            eprintln!(
                "{} students were seated at a desk they had used before.",
                outcome.conflicts
            );
        }
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create {}", args.out_dir.display()))?;
    let now = chrono::Local::now().naive_local();
    let path = record::write(&args.out_dir, &outcome.assignment, now)?;
    eprintln!("Saved seating record to {}", path.display());

    if !args.no_image {
        export_image(&args.out_dir, &chart);
    }
    Ok(())
}

/// Saves the chart as seen from the lectern. Failures are logged only.
#[cfg(feature = "resvg")]
fn export_image(dir: &Path, chart: &SeatingChart) {
    use deskmate::png;
    use deskmate::svg::{self, Orientation};

    let path = dir.join(png::file_name(chrono::Utc::now().date_naive()));
    let document = svg::render(chart, Orientation::Teacher);
    match png::write(&path, &document) {
        Ok(()) => eprintln!("Saved seating chart to {}", path.display()),
        Err(e) => tracing::error!(error = %e, "failed to export the seating chart image"),
    }
}

#[cfg(not(feature = "resvg"))]
fn export_image(_dir: &Path, _chart: &SeatingChart) {
    tracing::warn!("built without the `resvg` feature; skipping the chart image");
}
