// src/config/options.rs
use std::path::PathBuf;

use super::consts::{OUTPUT_PATH, SOURCE_URL, TABLE_ID};

/// Everything a single run needs to know. The binary always runs with
/// `RunOptions::default()`; tests point it elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub source_url: String,
    pub table_id: String,
    pub out_path: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source_url: s!(SOURCE_URL),
            table_id: s!(TABLE_ID),
            out_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl RunOptions {
    pub fn with_out_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_worldometers() {
        let opts = RunOptions::default();
        assert_eq!(opts.source_url, "https://www.worldometers.info/coronavirus/");
        assert_eq!(opts.table_id, "main_table_countries_today");
        assert_eq!(opts.out_path, PathBuf::from("output").join("coronav.txt"));
    }
}
