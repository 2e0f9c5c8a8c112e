//! Paginator: drives navigation through a paginated listing
//!
//! One paginator run serves one job. It renders the entry URL, discovers the
//! total page count from the last-page navigation link, then walks pages in
//! strictly ascending order, extracting records and saving one raw-markup
//! artifact per page.

use crate::crawler::extractor::{extract, ProxyRecord};
use crate::crawler::fetcher::PageRenderer;
use crate::output::save_page_markup;
use crate::Result;
use scraper::{Html, Selector};
use std::path::Path;
use url::Url;

/// CSS selector locating the "last page" navigation link
const LAST_PAGE_SELECTOR: &str = "ul.pagination li:last-child a";

/// Result of one crawl cycle
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Extracted records in page-then-row order
    pub records: Vec<ProxyRecord>,

    /// Number of pages visited
    pub pages_visited: u32,
}

/// Crawls the paginated listing starting at `entry_url`
///
/// Pages `2..=total` are reached by navigating to `{entry_url}?page={i}`. A
/// total page count of 1 means no navigation beyond the entry render. An entry
/// page with no records yields an empty outcome, not an error.
///
/// # Arguments
///
/// * `entry_url` - The listing's entry URL
/// * `renderer` - The page-rendering capability for this job
/// * `pages_dir` - Artifacts directory for raw page markup
pub async fn crawl<R: PageRenderer>(
    entry_url: &str,
    renderer: &mut R,
    pages_dir: &Path,
) -> Result<CrawlOutcome> {
    let mut markup = renderer.render(entry_url).await?;

    let total_pages = discover_total_pages(&markup, entry_url);
    tracing::debug!("discovered {total_pages} pages at {entry_url}");

    let mut records = Vec::new();
    for page in 1..=total_pages {
        let mut page_records = extract(&markup)?;
        tracing::trace!("page {page}: {} records", page_records.len());
        records.append(&mut page_records);

        save_page_markup(pages_dir, page, &markup).await?;

        if page < total_pages {
            let next_url = format!("{entry_url}?page={}", page + 1);
            markup = renderer.render(&next_url).await?;
        }
    }

    Ok(CrawlOutcome {
        records,
        pages_visited: total_pages,
    })
}

/// Determines the total page count from the rendered entry page
///
/// Looks for the last-page navigation link and parses the numeric `page=`
/// query parameter of its target URL. A missing link or parameter is a soft
/// condition: the total defaults to 1.
fn discover_total_pages(markup: &str, entry_url: &str) -> u32 {
    let selector = match Selector::parse(LAST_PAGE_SELECTOR) {
        Ok(s) => s,
        Err(_) => return 1,
    };

    let document = Html::parse_document(markup);
    document
        .select(&selector)
        .next()
        .and_then(|link| link.value().attr("href"))
        .and_then(|href| page_number_from_href(href, entry_url))
        .unwrap_or(1)
}

/// Parses the `page` query parameter from a (possibly relative) link target
fn page_number_from_href(href: &str, entry_url: &str) -> Option<u32> {
    let resolved = match Url::parse(href) {
        Ok(url) => url,
        Err(_) => Url::parse(entry_url).ok()?.join(href).ok()?,
    };

    resolved
        .query_pairs()
        .find_map(|(key, value)| if key == "page" { value.parse().ok() } else { None })
}
