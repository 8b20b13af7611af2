// src/row.rs
//
// One country's line from the "today" table, typed.
//
// Column layout (position is significant, extra trailing cells are ignored):
//   0 Country, 1 Total cases, 2 New cases, 3 Total deaths, 4 New deaths,
//   5 Total recovered, 6 Active cases, 7 Serious/critical,
//   8 Cases per 1M, 9 Deaths per 1M

use std::str::FromStr;

use crate::core::sanitize::strip_unneeded;
use crate::error::ParseError;

pub const FIELD_COUNT: usize = 10;

const COLUMNS: [&str; FIELD_COUNT] = [
    "country",
    "total_cases",
    "new_cases",
    "total_deaths",
    "new_deaths",
    "total_recovered",
    "active_cases",
    "serious_cases",
    "total_cases_per_million",
    "total_deaths_per_million",
];

/// Immutable once built. `ratio` (the HOT index, Healthcare On Top) is
/// computed at construction: total cases / total deaths, or 0 with no deaths.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    country: String,
    total_cases: u64,
    new_cases: u64,
    total_deaths: u64,
    new_deaths: u64,
    total_recovered: u64,
    active_cases: u64,
    serious_cases: u64,
    total_cases_per_million: f64,
    total_deaths_per_million: f64,
    ratio: f64,
}

impl Row {
    /// Build a row from scraped cell text. Cell 0 is taken verbatim.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Result<Self, ParseError> {
        if cells.len() < FIELD_COUNT {
            return Err(ParseError::MissingFields { expected: FIELD_COUNT, found: cells.len() });
        }
        let int = |i: usize| parse_int(COLUMNS[i], cells[i].as_ref());
        let real = |i: usize| parse_real(COLUMNS[i], cells[i].as_ref());

        let total_cases = int(1)?;
        let total_deaths = int(3)?;

        Ok(Self {
            country: s!(cells[0].as_ref()),
            total_cases,
            new_cases: int(2)?,
            total_deaths,
            new_deaths: int(4)?,
            total_recovered: int(5)?,
            active_cases: int(6)?,
            serious_cases: int(7)?,
            total_cases_per_million: real(8)?,
            total_deaths_per_million: real(9)?,
            ratio: hot_index(total_cases, total_deaths),
        })
    }

    pub fn country(&self) -> &str { &self.country }
    pub fn total_cases(&self) -> u64 { self.total_cases }
    pub fn new_cases(&self) -> u64 { self.new_cases }
    pub fn total_deaths(&self) -> u64 { self.total_deaths }
    pub fn new_deaths(&self) -> u64 { self.new_deaths }
    pub fn total_recovered(&self) -> u64 { self.total_recovered }
    pub fn active_cases(&self) -> u64 { self.active_cases }
    pub fn serious_cases(&self) -> u64 { self.serious_cases }
    pub fn total_cases_per_million(&self) -> f64 { self.total_cases_per_million }
    pub fn total_deaths_per_million(&self) -> f64 { self.total_deaths_per_million }

    pub fn ratio(&self) -> f64 { self.ratio }

    /// `ratio` to one decimal place, e.g. `"50.0"`.
    pub fn ratio_str(&self) -> String {
        format!("{:.1}", self.ratio)
    }
}

fn hot_index(cases: u64, deaths: u64) -> f64 {
    if deaths == 0 { 0.0 } else { cases as f64 / deaths as f64 }
}

fn parse_int(column: &'static str, raw: &str) -> Result<u64, ParseError> {
    let clean = strip_unneeded(raw);
    u64::from_str(&clean).map_err(|_| ParseError::InvalidInteger { column, value: clean })
}

fn parse_real(column: &'static str, raw: &str) -> Result<f64, ParseError> {
    let clean = strip_unneeded(raw);
    match f64::from_str(&clean) {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ParseError::InvalidReal { column, value: clean }),
    }
}
