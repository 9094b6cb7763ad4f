//! Turns one totals record into the lines printed to the terminal.

use std::fmt;
use std::str::FromStr;

use console::style;
use openfec_api::types::CommitteeTotals;

use crate::banner::{combine_words, split_name};
use crate::details::detail_lines;
use crate::error::BannerError;
use crate::glyph::{render_banner, GlyphRenderer};
use crate::layout::layout_panel;
use crate::palette::ColorSource;

/// How the committee name and the detail panel are arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Banner on the left, details beside it.
    #[default]
    Panel,
    /// Banner first, details underneath.
    Stacked,
    /// Committee name as a bold line, no banner.
    Plain,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RenderMode::Panel => "panel",
                RenderMode::Stacked => "stacked",
                RenderMode::Plain => "plain",
            }
        )
    }
}

impl FromStr for RenderMode {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "panel" => Ok(RenderMode::Panel),
            "stacked" => Ok(RenderMode::Stacked),
            "plain" => Ok(RenderMode::Plain),
            other => Err(BannerError::InvalidInput(format!(
                "unknown layout '{}'. Valid layouts: panel, stacked, plain",
                other
            ))),
        }
    }
}

/// Renders a totals record in the given mode.
///
/// Any failure (empty name, unrenderable glyph text) aborts the whole render;
/// no partial output is returned.
pub fn render_totals(
    totals: &CommitteeTotals,
    mode: RenderMode,
    renderer: &dyn GlyphRenderer,
    colors: &mut dyn ColorSource,
    terminal_width: Option<u16>,
) -> Result<Vec<String>, BannerError> {
    let name = totals.committee_name.as_deref().unwrap_or("N/A");
    let details = detail_lines(totals);

    let lines = match mode {
        RenderMode::Plain => {
            let mut lines = Vec::with_capacity(details.len() + 1);
            lines.push(style(name).bold().to_string());
            lines.extend(details);
            lines
        }
        RenderMode::Stacked => {
            let glyph_rows = banner_rows(name, renderer)?;
            let mut lines = Vec::with_capacity(glyph_rows.len() + details.len());
            for row in glyph_rows {
                lines.push(colors.next_color().style().apply_to(row).to_string());
            }
            lines.extend(details);
            lines
        }
        RenderMode::Panel => {
            let glyph_rows = banner_rows(name, renderer)?;
            layout_panel(&glyph_rows, &details, terminal_width, colors)
                .iter()
                .map(|row| row.render())
                .collect()
        }
    };
    Ok(lines)
}

fn banner_rows(name: &str, renderer: &dyn GlyphRenderer) -> Result<Vec<String>, BannerError> {
    let words = split_name(name);
    let combined = combine_words(&words)?;
    render_banner(renderer, &combined)
}
