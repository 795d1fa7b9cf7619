use crate::chart::{LECTERN, SeatingChart};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text};

/// Which way the labels face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Readable from the students' side, as shown on screen.
    #[default]
    Students,
    /// Every label turned 180° so the printout reads from the lectern.
    Teacher,
}

const COLUMNS: usize = 3;
const DESK_WIDTH: f64 = 320.0;
const DESK_HEIGHT: f64 = 72.0;
const GAP: f64 = 24.0;
const MARGIN: f64 = 20.0;
const LECTERN_WIDTH: f64 = 220.0;
const LECTERN_HEIGHT: f64 = 56.0;
const FONT_SIZE: f64 = 18.0;

fn label(content: &str, x: f64, y: f64, size: f64, orientation: Orientation) -> Text {
    let text = Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central")
        .set("font-family", "sans-serif")
        .set("font-size", format!("{}px", size));
    match orientation {
        Orientation::Students => text,
        Orientation::Teacher => text.set("transform", format!("rotate(180 {} {})", x, y)),
    }
}

/// Renders the chart as an SVG document: the lectern on top, then the desks
/// in label order, three to a row.
pub fn render(chart: &SeatingChart, orientation: Orientation) -> String {
    let rows = chart.rows().len().div_ceil(COLUMNS);
    let width = 2.0 * MARGIN + COLUMNS as f64 * DESK_WIDTH + (COLUMNS - 1) as f64 * GAP;
    let top = MARGIN + LECTERN_HEIGHT + 2.0 * GAP;
    let height = top + rows as f64 * (DESK_HEIGHT + GAP) - GAP + MARGIN;

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height));

    document = document.add(
        Rectangle::new()
            .set("width", width)
            .set("height", height)
            .set("fill", "white"),
    );

    let lectern_x = (width - LECTERN_WIDTH) / 2.0;
    document = document.add(
        Group::new()
            .set("class", "lectern")
            .add(
                Rectangle::new()
                    .set("x", lectern_x)
                    .set("y", MARGIN)
                    .set("width", LECTERN_WIDTH)
                    .set("height", LECTERN_HEIGHT)
                    .set("rx", 8)
                    .set("fill", "#d9c2a0")
                    .set("stroke", "black")
                    .set("stroke-width", 2),
            )
            .add(label(
                LECTERN,
                width / 2.0,
                MARGIN + LECTERN_HEIGHT / 2.0,
                FONT_SIZE + 2.0,
                orientation,
            )),
    );

    for (i, row) in chart.rows().iter().enumerate() {
        let x = MARGIN + (i % COLUMNS) as f64 * (DESK_WIDTH + GAP);
        let y = top + (i / COLUMNS) as f64 * (DESK_HEIGHT + GAP);
        let cy = y + DESK_HEIGHT / 2.0;

        let mut desk = Group::new()
            .set("class", "desk")
            .set("id", row.desk.to_string())
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", DESK_WIDTH)
                    .set("height", DESK_HEIGHT)
                    .set("rx", 6)
                    .set("fill", "#f5ecd7")
                    .set("stroke", "black")
                    .set("stroke-width", 2),
            )
            .add(
                svg::node::element::Line::new()
                    .set("x1", x + DESK_WIDTH / 2.0)
                    .set("y1", y + 8.0)
                    .set("x2", x + DESK_WIDTH / 2.0)
                    .set("y2", y + DESK_HEIGHT - 8.0)
                    .set("stroke", "#999")
                    .set("stroke-dasharray", "4 4"),
            );
        for (k, seat) in row.seats.iter().enumerate() {
            let sx = x + DESK_WIDTH * (0.25 + 0.5 * k as f64);
            desk = desk.add(label(seat, sx, cy, FONT_SIZE, orientation));
        }
        document = document.add(desk);
    }

    document.to_string()
}
