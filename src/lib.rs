//! Library entry for folio exposing the listing engine, data sources and
//! configuration for integration tests and other front-ends.

pub mod app;
pub mod args;
pub mod config;
pub mod logic;
pub mod sources;
pub mod state;
pub mod util;
