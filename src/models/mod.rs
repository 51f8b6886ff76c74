//! Models for external configuration of the client.

pub mod config;
