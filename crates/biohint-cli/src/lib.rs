//! biohint-cli — command-line front end for hint extraction.
//! File I/O, configuration and output shaping live here; extraction itself
//! is in `biohint-ingestion`.

pub mod config;
pub mod run;

pub use config::Config;
