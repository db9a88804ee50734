//! The serialized logo format: one unit square per painted cell inside a
//! `0 0 16 16` viewBox. Stored logos embed this markup verbatim (card
//! thumbnails, profile badges), so the rect syntax and viewBox are a stable
//! contract.

use super::color::Rgba;
use super::grid::{LogoGrid, GRID_DIM};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize the grid to logo markup. Pure and deterministic: rects are
/// emitted in row-major order, so an unchanged grid yields byte-identical
/// output. An empty grid yields a well-formed document with zero rects.
pub fn serialize(grid: &LogoGrid) -> String {
    let mut out = format!(
        "<svg xmlns=\"{}\" viewBox=\"0 0 {} {}\">",
        SVG_NS, GRID_DIM, GRID_DIM
    );
    for (row, col, color) in grid.painted() {
        out.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" fill=\"{}\"/>",
            col,
            row,
            color.hex()
        ));
    }
    out.push_str("</svg>");
    out
}

/// One painted unit square recovered from serialized markup
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PaintedRect {
    pub row: usize,
    pub col: usize,
    pub color: Rgba,
}

/// Recover the painted cells from logo markup. Previews render from the
/// serialized string alone, so this is the only road back; rects that do not
/// fit the unit-square shape are skipped rather than rejected.
pub fn parse(markup: &str) -> Vec<PaintedRect> {
    let mut rects = Vec::new();
    for fragment in markup.split("<rect ").skip(1) {
        let Some(end) = fragment.find('>') else {
            continue;
        };
        if let Some(rect) = parse_rect(&fragment[..end]) {
            rects.push(rect);
        }
    }
    rects
}

fn parse_rect(body: &str) -> Option<PaintedRect> {
    let col: usize = attr(body, "x")?.parse().ok()?;
    let row: usize = attr(body, "y")?.parse().ok()?;
    let color = Rgba::from_hex(attr(body, "fill")?)?;
    if row >= GRID_DIM || col >= GRID_DIM {
        return None;
    }
    Some(PaintedRect { row, col, color })
}

fn attr<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("{}=\"", name);
    let start = body.find(&marker)? + marker.len();
    let end = body[start..].find('"')? + start;
    Some(&body[start..end])
}
