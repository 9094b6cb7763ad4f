//! Banner row colors and the sources that hand them out.

use console::Style;
use rand::Rng;

/// Red/white/blue banner palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerColor {
    BrightRed,
    Red,
    BrightBlue,
    Blue,
    BrightWhite,
    White,
}

impl BannerColor {
    pub const PALETTE: [BannerColor; 6] = [
        BannerColor::BrightRed,
        BannerColor::Red,
        BannerColor::BrightBlue,
        BannerColor::Blue,
        BannerColor::BrightWhite,
        BannerColor::White,
    ];

    /// Terminal style for this color. `console` drops the escapes when
    /// stdout is not a terminal or `NO_COLOR` is set.
    pub fn style(self) -> Style {
        match self {
            BannerColor::BrightRed => Style::new().red().bright(),
            BannerColor::Red => Style::new().red(),
            BannerColor::BrightBlue => Style::new().blue().bright(),
            BannerColor::Blue => Style::new().blue(),
            BannerColor::BrightWhite => Style::new().white().bright(),
            BannerColor::White => Style::new().white(),
        }
    }
}

/// Supplies the color for each emitted banner row.
pub trait ColorSource {
    fn next_color(&mut self) -> BannerColor;
}

/// Picks a palette entry uniformly at random on every call.
#[derive(Debug, Default)]
pub struct RandomPalette;

impl ColorSource for RandomPalette {
    fn next_color(&mut self) -> BannerColor {
        let idx = rand::thread_rng().gen_range(0..BannerColor::PALETTE.len());
        BannerColor::PALETTE[idx]
    }
}

/// Walks the palette in order, wrapping around.
#[derive(Debug, Default)]
pub struct CyclePalette {
    next: usize,
}

impl ColorSource for CyclePalette {
    fn next_color(&mut self) -> BannerColor {
        let color = BannerColor::PALETTE[self.next % BannerColor::PALETTE.len()];
        self.next = self.next.wrapping_add(1);
        color
    }
}

/// Always returns the same color.
#[derive(Debug, Clone, Copy)]
pub struct FixedColor(pub BannerColor);

impl ColorSource for FixedColor {
    fn next_color(&mut self) -> BannerColor {
        self.0
    }
}
