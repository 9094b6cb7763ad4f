//! Side-by-side layout of banner glyph rows and detail lines.
//!
//! The detail panel starts at a fixed content column, two characters past
//! the widest glyph row. Whichever side runs out first is padded with empty
//! rows so every terminal row carries one glyph row and one detail line.

use std::fmt;

use console::measure_text_width;

use crate::palette::{BannerColor, ColorSource};

/// Blank columns between the widest glyph row and the detail panel.
pub const GUTTER: usize = 2;

/// One composed terminal row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub color: BannerColor,
    pub glyph: String,
    pub padding: usize,
    pub detail: String,
}

impl PanelRow {
    /// The row as printed: colored glyph row, padding, detail line.
    pub fn render(&self) -> String {
        format!(
            "{}{}{}",
            self.color.style().apply_to(&self.glyph),
            " ".repeat(self.padding),
            self.detail
        )
    }
}

impl fmt::Display for PanelRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Column at which detail lines begin for the given glyph rows.
pub fn content_column<S: AsRef<str>>(glyph_rows: &[S]) -> usize {
    glyph_rows
        .iter()
        .map(|row| measure_text_width(row.as_ref()))
        .max()
        .unwrap_or(0)
        + GUTTER
}

/// Interleaves glyph rows with detail lines, drawing one color per row.
///
/// The result has `max(glyph_rows.len(), detail_lines.len())` rows. A glyph
/// row wider than the content column gets zero padding and the panel shifts
/// right on that row. `terminal_width` is only compared against the block
/// width for logging; nothing is wrapped or truncated.
pub fn layout_panel<G, D>(
    glyph_rows: &[G],
    detail_lines: &[D],
    terminal_width: Option<u16>,
    colors: &mut dyn ColorSource,
) -> Vec<PanelRow>
where
    G: AsRef<str>,
    D: AsRef<str>,
{
    let column = content_column(glyph_rows);
    let n = glyph_rows.len().max(detail_lines.len());

    if let Some(width) = terminal_width {
        let widest_detail = detail_lines
            .iter()
            .map(|line| measure_text_width(line.as_ref()))
            .max()
            .unwrap_or(0);
        if column + widest_detail > usize::from(width) {
            tracing::debug!(
                block_width = column + widest_detail,
                terminal_width = width,
                "panel is wider than the terminal"
            );
        }
    }

    (0..n)
        .map(|i| {
            let glyph = glyph_rows.get(i).map(AsRef::as_ref).unwrap_or("");
            let detail = detail_lines.get(i).map(AsRef::as_ref).unwrap_or("");
            let glyph_width = measure_text_width(glyph);
            if glyph_width > column {
                tracing::debug!(row = i, glyph_width, column, "glyph row overruns content column");
            }
            PanelRow {
                color: colors.next_color(),
                glyph: glyph.to_string(),
                padding: column.saturating_sub(glyph_width),
                detail: detail.to_string(),
            }
        })
        .collect()
}
