//! Record extractor: raw page markup to typed proxy records
//!
//! Extraction is a pure function over the page markup: no I/O, no shared
//! state. Records come out in document order.

use crate::{HarvestError, Result};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// One extracted proxy record
///
/// A flat value object with no identity beyond field equality. Created solely
/// by the extractor and consumed by the persistence sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRecord {
    pub address: String,
    pub port: u32,
    pub region: String,
    pub scheme: String,
}

/// Extracts proxy records from a page's markup
///
/// Scans the markup for `<tr>` row blocks. Within each row, positional `<td>`
/// cells map to fields in fixed column order: 0 -> address, 1 -> port,
/// 2 -> region, 4 -> scheme. Column 3 is skipped.
///
/// Address, region, and scheme default silently to the empty string when their
/// cell is missing; the port cell alone fails hard when it is absent or not a
/// valid integer, which aborts the whole page's extraction. Rows are never
/// dropped for missing fields, so short rows yield partially-empty records.
///
/// # Arguments
///
/// * `markup` - The raw page markup
///
/// # Returns
///
/// * `Ok(Vec<ProxyRecord>)` - Records in document order (possibly empty)
/// * `Err(HarvestError::PortParse)` - A row's port cell was not numeric
pub fn extract(markup: &str) -> Result<Vec<ProxyRecord>> {
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let document = Html::parse_document(markup);
    let mut records = Vec::new();

    for row in document.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        let port_text = cells.get(1).cloned().unwrap_or_default();
        let port = port_text
            .parse::<u32>()
            .map_err(|_| HarvestError::PortParse { value: port_text })?;

        records.push(ProxyRecord {
            address: cells.first().cloned().unwrap_or_default(),
            port,
            region: cells.get(2).cloned().unwrap_or_default(),
            scheme: cells.get(4).cloned().unwrap_or_default(),
        });
    }

    Ok(records)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| HarvestError::HtmlParse(e.to_string()))
}
