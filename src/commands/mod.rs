//! Command implementations for the `pypi-vet` binary.

mod check;
mod common;
mod init;
mod validate;

pub use check::{CheckArgs, run_check};
pub use init::{InitArgs, init_config};
pub use validate::{ValidateArgs, validate_config};
