//! Library layer for fecbanner: committee totals lookup, banner composition,
//! and side-by-side terminal layout.
//!
//! Wraps the `openfec_api` client with key loading and input validation, and
//! turns a totals record into colored terminal lines through two ports:
//! [`GlyphRenderer`] for ASCII art and [`ColorSource`] for row colors.

pub mod banner;
pub mod config;
pub mod details;
pub mod error;
pub mod fetch;
pub mod glyph;
pub mod layout;
pub mod palette;
pub mod render;
pub mod validation;

pub use openfec_api;
pub use openfec_api::types;

pub use banner::{combine_words, split_name};
pub use error::BannerError;
pub use fetch::fetch_totals;
pub use glyph::{render_banner, FigletRenderer, GlyphRenderer};
pub use layout::{content_column, layout_panel, PanelRow};
pub use palette::{BannerColor, ColorSource, CyclePalette, FixedColor, RandomPalette};
pub use render::{render_totals, RenderMode};
