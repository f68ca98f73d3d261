//! CLI command implementations.

pub mod check;
pub mod common;
pub mod decode;
pub mod generate;
pub mod solve;
pub mod version;
