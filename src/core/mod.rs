//! Process-wide configuration: CLI arguments and the overrides document.

pub mod cli;
pub mod overrides;
