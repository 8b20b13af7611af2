// src/specs/mod.rs
//! # Page specs
//!
//! Each spec encodes *where the data lives in one page's HTML* and turns it
//! into typed rows. Specs never fetch and never write; the runner owns I/O.
//!
//! ## Conventions
//! - Work on an already-fetched body (`&str`), so specs test offline against
//!   inline fixtures.
//! - Use `core::html` for lookups rather than ad-hoc string scanning.
//! - Fail loudly: a missing table is a `Structure` error, a bad cell a
//!   `Parse` error carrying the row position. No partial results.
//!
//! ## Known fragility
//! Country rows are recognised only as direct children of a `<tbody>`. Extra
//! wrapper elements between `<tbody>` and `<tr>` would drop rows silently.
pub mod countries;
