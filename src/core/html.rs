// src/core/html.rs
// Thin layer over `scraper` for the three lookups the extractor needs:
// a table by id, its body rows, and the text of each cell.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

// Constant selectors; `Selector::parse` only fails on malformed CSS.
static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").expect("valid selector"));
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid selector"));
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("valid selector"));

/// html5ever is error-tolerant, so any body yields a document.
pub fn parse_document(body: &str) -> Html {
    Html::parse_document(body)
}

/// First `<table>` whose `id` attribute is exactly `id`.
pub fn find_table<'a>(doc: &'a Html, id: &str) -> Result<ElementRef<'a>> {
    doc.select(&TABLE)
        .find(|t| t.value().id() == Some(id))
        .ok_or_else(|| ScrapeError::Structure(format!("no <table id=\"{id}\"> in document")))
}

/// Rows whose immediate parent is a `<tbody>`. Header/footer rows sit under
/// `<thead>`/`<tfoot>` and are skipped.
pub fn rows_of<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    table
        .select(&TR)
        .filter(|tr| parent_is(tr, "tbody"))
        .collect()
}

/// Text content of every `<td>` under the row, in document order. Not trimmed.
pub fn cells_of(row: ElementRef<'_>) -> Vec<String> {
    row.select(&TD).map(|td| td.text().collect::<String>()).collect()
}

fn parent_is(el: &ElementRef<'_>, tag: &str) -> bool {
    el.parent()
        .and_then(|p| p.value().as_element().map(|e| e.name() == tag))
        .unwrap_or(false)
}
