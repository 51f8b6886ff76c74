//! DTO modules that bridge the page with its views.

pub mod supplier;
