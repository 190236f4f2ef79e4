//! Plain-text cut list table

use cabinetkit_core::{format_length, MeasurementSystem};
use cabinetkit_engine::CutPiece;

const HEADERS: [&str; 5] = ["Piece", "Qty", "Width", "Length", "Notes"];
const COLUMN_GAP: &str = "  ";

/// Render pieces as an aligned table
///
/// Width and length are rounded for display here; the pieces themselves keep
/// full precision.
pub fn render_cut_list(pieces: &[CutPiece], units: MeasurementSystem) -> String {
    let rows: Vec<[String; 5]> = pieces
        .iter()
        .map(|piece| {
            [
                piece.name.clone(),
                piece.qty.to_string(),
                format_length(piece.width, units),
                format_length(piece.length, units),
                piece.notes.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(String::from);
    let rule = widths.map(|width| "-".repeat(width));

    let mut out = String::new();
    for row in std::iter::once(&header)
        .chain(std::iter::once(&rule))
        .chain(rows.iter())
    {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str(COLUMN_GAP);
        }
        // Qty is right-aligned, everything else left-aligned
        if index == 1 {
            line.push_str(&format!("{:>width$}", cell, width = width));
        } else {
            line.push_str(&format!("{:<width$}", cell, width = width));
        }
    }
    line.trim_end().to_string()
}
