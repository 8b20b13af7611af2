// src/report.rs
//
// Ranking + rendering. Pure: no I/O here, the runner decides where text goes.

use std::fmt;

use crate::config::consts::{HEADER_LEGEND, HEADER_TITLE_PREFIX};
use crate::row::Row;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub country: String,
    pub ratio: String,
}

/// Header lines plus one entry per country, best HOT index first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    headers: [String; 2],
    entries: Vec<RankedEntry>,
}

impl Report {
    /// Rank `rows` by ratio, descending. The sort is stable, so countries with
    /// equal ratios stay in scrape order.
    pub fn rank(mut rows: Vec<Row>, source_url: &str) -> Self {
        rows.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));

        let entries = rows
            .iter()
            .enumerate()
            .map(|(i, row)| RankedEntry {
                rank: i + 1,
                country: s!(row.country()),
                ratio: row.ratio_str(),
            })
            .collect();

        Self {
            headers: [format!("{HEADER_TITLE_PREFIX}{source_url}:"), s!(HEADER_LEGEND)],
            entries,
        }
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn entries(&self) -> &[RankedEntry] { &self.entries }

    /// Newline-joined, no trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}: {}", self.rank, self.country, self.ratio)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [title, legend] = &self.headers;
        write!(f, "{title}\n{legend}")?;
        for entry in &self.entries {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}
