// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod report;
pub mod row;
pub mod runner;
pub mod specs;

pub use error::{ParseError, Result, ScrapeError};
pub use report::Report;
pub use row::Row;
