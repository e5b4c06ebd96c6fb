use clap::ValueEnum;
use std::io::{IsTerminal, stdout};

/// When to use colored console output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colorize when writing to a terminal
    Auto,

    /// Always colorize
    Always,

    /// Never colorize
    Never,
}

impl ColorMode {
    /// Whether output written to stdout should be colorized
    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Auto => stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}
