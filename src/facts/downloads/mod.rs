//! Download statistics from pypistats.org.

mod provider;

pub use provider::Provider;
