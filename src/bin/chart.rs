use anyhow::{Context, bail};
use clap::Parser;
use clap::ValueEnum;
use deskmate::chart::SeatingChart;
use deskmate::record;
use deskmate::roster::Roster;
use deskmate::svg::{self, Orientation};
use std::fs;
use std::path::PathBuf;

/// Draws a saved seating record as text, SVG or PNG.
#[derive(Parser)]
struct Cli {
    /// Roster file the record was made from.
    #[clap(long, short = 'r', default_value = "txt/student.txt")]
    roster: PathBuf,
    /// Seating record written by `assign`.
    #[clap(long)]
    record: PathBuf,
    /// Path to output file. If not provided, prints the chart as text to stdout.
    #[clap(long, short = 'o', default_value = "")]
    output: String,
    /// File format: text, svg or png. If not provided, infers from output file extension.
    #[clap(long, short = 'f', default_value = "unspecified")]
    format: Format,
    /// Turn the labels to read from the lectern.
    #[clap(long, short = 't', default_value_t = false)]
    teacher_view: bool,
}

#[derive(Default, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Unspecified,
    Text,
    Svg,
    Png,
}

fn main() -> anyhow::Result<()> {
    deskmate::init_logging();
    let args = Cli::parse();
    let roster = Roster::load(&args.roster).context("failed to load roster")?;
    let assignment = record::load(&roster, &args.record)
        .with_context(|| format!("failed to read record {}", args.record.display()))?;
    let chart = SeatingChart::new(&roster, &assignment);

    // Infer format from output file extension if not specified.
    let format = if args.format == Format::Unspecified {
        if args.output.ends_with(".svg") {
            Format::Svg
        } else if args.output.ends_with(".png") {
            Format::Png
        } else if args.output.is_empty() || args.output.ends_with(".txt") {
            Format::Text
        } else {
            bail!("Cannot infer format from output file extension. Specify format with -f option.")
        }
    } else {
        args.format.clone()
    };
    let orientation = if args.teacher_view {
        Orientation::Teacher
    } else {
        Orientation::Students
    };

    use std::io::Write;

    match format {
        Format::Text => {
            let mut w: Box<dyn Write> = if args.output.is_empty() {
                Box::new(std::io::stdout())
            } else {
                Box::new(fs::File::create(&args.output)?)
            };
            writeln!(w, "{}", chart.to_text())?;
        }
        Format::Svg => {
            let svg_content = svg::render(&chart, orientation);
            if args.output.is_empty() {
                println!("{}", svg_content);
            } else {
                fs::write(&args.output, svg_content)?;
            }
        }
        Format::Png => write_png(&args.output, &svg::render(&chart, orientation))?,
        Format::Unspecified => {
            unreachable!()
        }
    }
    Ok(())
}

#[cfg(feature = "resvg")]
fn write_png(output: &str, svg_content: &str) -> anyhow::Result<()> {
    if output.is_empty() {
        bail!("PNG output needs a file path (-o)");
    }
    deskmate::png::write(std::path::Path::new(output), svg_content)?;
    Ok(())
}

#[cfg(not(feature = "resvg"))]
fn write_png(_output: &str, _svg_content: &str) -> anyhow::Result<()> {
    bail!("PNG output requires the `resvg` feature")
}
