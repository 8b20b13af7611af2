// src/config/consts.rs

// Source page
pub const SOURCE_URL: &str = "https://www.worldometers.info/coronavirus/";
pub const TABLE_ID: &str = "main_table_countries_today";

// Net config
pub const USER_AGENT: &str = concat!("coronav/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Report
pub const OUTPUT_PATH: &str = "output/coronav.txt";
pub const HEADER_TITLE_PREFIX: &str = "HOT index for countries based on ";
pub const HEADER_LEGEND: &str = "(Healthcare On Top = total cases / total deaths)";
