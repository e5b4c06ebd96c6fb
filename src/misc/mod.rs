//! Odds and ends shared across the tool.

mod color_mode;

pub use color_mode::ColorMode;
