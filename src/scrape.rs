// src/scrape.rs
use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::{
    config::options::CollectOptions,
    driver::{Driver, Session},
    error::{CollectError, DriverError},
    progress::Progress,
    record::Record,
    specs::listing,
};

/// Where the page loop goes after a page has been read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pagination {
    /// Another page exists; load it.
    HasNext(Url),
    /// The page had no "next" control. Terminal.
    NoNext,
    /// `max_pages` pages have been read. Terminal.
    PageLimitReached,
}

impl Pagination {
    /// Decide from the page just read. The limit is checked before the
    /// "next" control, so a limited run never touches the extra page.
    pub fn after_page(
        page: u32,
        max_pages: Option<i64>,
        next_href: Option<&str>,
        origin: &Url,
    ) -> Result<Self, DriverError> {
        if max_pages.is_some_and(|max| i64::from(page) >= max) {
            return Ok(Self::PageLimitReached);
        }
        match next_href {
            None => Ok(Self::NoNext),
            Some(href) => origin
                .join(href)
                .map(Self::HasNext)
                .map_err(|source| DriverError::InvalidUrl { url: s!(href), source }),
        }
    }
}

fn parse_url(raw: &str) -> Result<Url, DriverError> {
    Url::parse(raw).map_err(|source| DriverError::InvalidUrl { url: s!(raw), source })
}

/// Walk the user's listing page by page and return every entry, in listing order.
///
/// The driver is owned for the duration of the call and closed before
/// returning, whether the run succeeds or not. Any load/navigation failure
/// or (under `EntryPolicy::FailFast`) any broken entry aborts the run; nothing
/// collected so far is returned in that case.
pub fn collect<D: Driver>(
    driver: D,
    opts: &CollectOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Record>, CollectError> {
    let mut session = Session::open(driver);
    let origin = parse_url(&opts.origin)?;
    let start = parse_url(&opts.listing_url())?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(start.as_str());
    }
    info!(user = %opts.user_id, max_pages = ?opts.max_pages, "Collect: begin");

    session.load(&start)?;

    let mut records: Vec<Record> = Vec::new();
    let mut page: u32 = 1;

    loop {
        let doc = Html::parse_document(session.content()?);
        let listing = listing::parse_page(&doc, opts.include_poster, opts.entry_policy)?;

        debug!(page, entries = listing.records.len(), skipped = listing.skipped, "Collect: page parsed");
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, listing.records.len());
            if listing.skipped > 0 {
                p.log(&format!("Page {page}: skipped {} broken entries", listing.skipped));
            }
        }
        records.extend(listing.records);

        match Pagination::after_page(page, opts.max_pages, listing.next_href.as_deref(), &origin)? {
            Pagination::HasNext(next) => {
                session.navigate(&next)?;
                session.wait_until_idle()?;
                page += 1;
            }
            state => {
                debug!(?state, "Collect: stop");
                break;
            }
        }
    }

    info!(pages = page, records = records.len(), "Collect: done");
    if let Some(p) = progress.as_deref_mut() {
        p.finish(records.len());
    }
    Ok(records)
}
