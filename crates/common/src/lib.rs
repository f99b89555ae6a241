//! Pieces shared by the binary and the server crate.

pub mod types;
pub mod utils;
