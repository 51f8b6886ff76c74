//! Domain entities exchanged with the supplier API.

pub mod supplier;
pub mod types;
