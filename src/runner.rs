// src/runner.rs
use crate::{
    config::RunOptions,
    core::Fetch,
    error::Result,
    file::write_report,
    report::Report,
    specs,
};

/// Fetch → extract → rank → write. Returns the report so the caller can print it.
///
/// Every step before the write is fallible and aborts the run, so a failed run
/// never leaves an output file behind (nor touches an existing one).
pub fn run(opts: &RunOptions, fetcher: &dyn Fetch) -> Result<Report> {
    logf!(url = %opts.source_url, "fetching");
    let body = fetcher.fetch_document(&opts.source_url)?;

    let rows = specs::countries::extract_rows(&body, &opts.table_id)?;
    logf!(rows = rows.len(), "rows parsed");

    let report = Report::rank(rows, &opts.source_url);
    write_report(&opts.out_path, &report.render())?;
    Ok(report)
}
