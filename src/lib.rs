//! sdf-fontgen
pub mod core;
pub mod error;
pub mod gen;
