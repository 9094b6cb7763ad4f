//! ASCII-art rendering of banner lines.

use std::path::Path;

use figlet_rs::FIGfont;

use crate::error::BannerError;

/// Turns a short piece of text into rows of ASCII art.
///
/// Implementations must be deterministic for a given text and font.
pub trait GlyphRenderer {
    fn render(&self, text: &str) -> Result<Vec<String>, BannerError>;
}

/// [`GlyphRenderer`] backed by a FIGlet font.
pub struct FigletRenderer {
    font: FIGfont,
}

impl FigletRenderer {
    /// Uses the `standard` font bundled with figlet-rs.
    pub fn standard() -> Result<Self, BannerError> {
        let font = FIGfont::standard().map_err(BannerError::Font)?;
        Ok(Self { font })
    }

    /// Loads a `.flf` font file.
    pub fn from_file(path: &Path) -> Result<Self, BannerError> {
        let name = path
            .to_str()
            .ok_or_else(|| BannerError::Font(format!("non UTF-8 font path {}", path.display())))?;
        let font = FIGfont::from_file(name).map_err(BannerError::Font)?;
        tracing::debug!("Loaded banner font from {}", path.display());
        Ok(Self { font })
    }
}

impl GlyphRenderer for FigletRenderer {
    /// Rows are the figure split on newlines. The figure ends with a newline,
    /// so the last row is empty and separates consecutive blocks.
    fn render(&self, text: &str) -> Result<Vec<String>, BannerError> {
        if text.is_empty() {
            return Err(BannerError::Glyph(text.to_string()));
        }
        let figure = self
            .font
            .convert(text)
            .ok_or_else(|| BannerError::Glyph(text.to_string()))?;
        Ok(figure.to_string().split('\n').map(str::to_string).collect())
    }
}

/// Renders every banner line and concatenates the rows in order.
pub fn render_banner<S: AsRef<str>>(
    renderer: &dyn GlyphRenderer,
    lines: &[S],
) -> Result<Vec<String>, BannerError> {
    let mut rows = Vec::new();
    for line in lines {
        rows.extend(renderer.render(line.as_ref())?);
    }
    Ok(rows)
}
