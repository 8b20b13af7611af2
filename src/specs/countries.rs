// src/specs/countries.rs
//
// worldometers.info/coronavirus/ — the "Now" tab table.
// Ground truth: <table id="main_table_countries_today">, one <tr> per country
// directly under a <tbody>. Cell order is documented in `row.rs`.

use crate::core::html::{cells_of, find_table, parse_document, rows_of};
use crate::error::{Result, ScrapeError};
use crate::row::Row;

/// Parse a fetched page into typed rows, in page order.
/// The first bad row aborts the whole extraction.
pub fn extract_rows(html_doc: &str, table_id: &str) -> Result<Vec<Row>> {
    let doc = parse_document(html_doc);
    let table = find_table(&doc, table_id)?;

    let trs = rows_of(table);
    logd!(rows = trs.len(), "table body rows");

    trs.into_iter()
        .enumerate()
        .map(|(i, tr)| {
            Row::from_cells(&cells_of(tr)).map_err(|source| ScrapeError::Parse { row: i + 1, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    const ID: &str = "main_table_countries_today";

    fn page(body_rows: &str) -> String {
        format!(
            r#"<html><body>
            <table id="{ID}">
              <thead><tr><th>Country</th><th>Total Cases</th></tr></thead>
              <tbody>{body_rows}</tbody>
            </table>
            </body></html>"#
        )
    }

    #[test]
    fn extracts_rows_in_page_order() {
        let doc = page(
            r#"<tr><td><a href="country/testland/">Testland</a></td><td>1,000</td><td>+50</td>
                   <td>20</td><td>+1</td><td>900</td><td>80</td><td>5</td><td>123.4</td><td>5.6</td></tr>
               <tr><td>Otherland</td><td>10</td><td></td><td></td><td></td><td>10</td><td>0</td><td></td><td>1</td><td></td></tr>"#,
        );
        let rows = extract_rows(&doc, ID).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country(), "Testland");
        assert_eq!(rows[0].ratio(), 50.0);
        assert_eq!(rows[1].country(), "Otherland");
        assert_eq!(rows[1].ratio(), 0.0);
    }

    #[test]
    fn short_row_reports_position() {
        let doc = page(
            r#"<tr><td>A</td><td>1</td><td></td><td>1</td><td></td><td></td><td></td><td></td><td></td><td></td></tr>
               <tr><td>B</td><td>1</td><td></td><td>1</td><td></td><td></td><td></td><td></td><td></td></tr>"#,
        );
        match extract_rows(&doc, ID) {
            Err(ScrapeError::Parse { row, source }) => {
                assert_eq!(row, 2);
                assert_eq!(source, ParseError::MissingFields { expected: 10, found: 9 });
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_id_is_structure_error() {
        let doc = page("");
        assert!(matches!(extract_rows(&doc, "main_table_countries_yesterday"), Err(ScrapeError::Structure(_))));
    }

    #[test]
    fn empty_body_yields_no_rows() {
        assert!(extract_rows(&page(""), ID).unwrap().is_empty());
    }
}
