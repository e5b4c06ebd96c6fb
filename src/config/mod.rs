//! Tool configuration
//!
//! All policy thresholds live in [`Config`], loadable from TOML, YAML, or
//! JSON. The built-in defaults match the reference behavior this tool
//! enforces and are embedded from `default_config.yml`.

mod config;

pub use config::{Config, DEFAULT_CONFIG_YAML};
