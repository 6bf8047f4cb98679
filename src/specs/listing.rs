// src/specs/listing.rs
//! Scraping *spec* for the "collect" listing (`/people/{id}/collect`).
//!
//! Each entry looks roughly like:
//! ```text
//! div.item.comment-item[data-cid]
//!   .pic img[src]                      poster
//!   .title a[href]                     "Native / Alias / …"
//!   .intro                             "YYYY-MM-DD(Region) / people / tags"
//!   span.ratingN-t                     user stars, N in 1..=5
//!   span.date                          when it was marked
//!   span.comment                       short review
//! ```
//! and the page ends with `.paginator .next a[href]` while more pages exist.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::config::consts::*;
use crate::config::options::EntryPolicy;
use crate::core::html::{attr, block_text_of, find, selector, text_of};
use crate::error::ExtractError;
use crate::record::Record;

/// Everything the collector needs from one loaded page.
#[derive(Debug)]
pub struct ListingPage {
    pub records: Vec<Record>,
    /// Entries dropped under `EntryPolicy::SkipInvalid`.
    pub skipped: usize,
    /// Raw `href` of the "next page" control, if the page has one.
    pub next_href: Option<String>,
}

macro_rules! cached {
    ($name:ident, $css:expr) => {
        fn $name() -> &'static Selector {
            static CELL: OnceLock<Selector> = OnceLock::new();
            selector(&CELL, $css)
        }
    };
}

cached!(entry_sel, ENTRY_SELECTOR);
cached!(title_sel, TITLE_ANCHOR_SELECTOR);
cached!(intro_sel, INTRO_SELECTOR);
cached!(rating_sel, RATING_SELECTOR);
cached!(date_sel, DATE_SELECTOR);
cached!(comment_sel, COMMENT_SELECTOR);
cached!(poster_sel, POSTER_SELECTOR);
cached!(next_sel, NEXT_PAGE_SELECTOR);

/// Parse every entry on the page, in document order.
pub fn parse_page(
    doc: &Html,
    include_poster: bool,
    policy: EntryPolicy,
) -> Result<ListingPage, ExtractError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for entry in doc.select(entry_sel()) {
        match parse_entry(entry, include_poster) {
            Ok(rec) => records.push(rec),
            Err(e) if policy == EntryPolicy::SkipInvalid => {
                warn!("Skipping entry: {e}");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(ListingPage { records, skipped, next_href: next_page_href(doc) })
}

/// Split out for unit tests.
pub fn parse_entry(entry: ElementRef<'_>, include_poster: bool) -> Result<Record, ExtractError> {
    let id = attr(entry, ENTRY_ID_ATTR)
        .map(str::to_owned)
        .ok_or_else(|| ExtractError::missing("data-cid attribute", "?"))?;

    let anchor = find(entry, title_sel()).ok_or_else(|| ExtractError::missing("title anchor", &id))?;
    let full_title = text_of(anchor);
    let link = attr(anchor, "href")
        .map(str::to_owned)
        .ok_or_else(|| ExtractError::missing("title link", &id))?;

    let description = find(entry, intro_sel())
        .map(text_of)
        .ok_or_else(|| ExtractError::missing("intro block", &id))?;

    let rating = find(entry, rating_sel())
        .and_then(|el| attr(el, "class"))
        .and_then(|class| {
            let parsed = parse_rating_class(class);
            if parsed.is_none() {
                debug!(id = %id, class, "unusable rating class, leaving rating out");
            }
            parsed
        });

    let date = find(entry, date_sel()).map(text_of).filter(|d| !d.is_empty());
    let comment = find(entry, comment_sel()).map(block_text_of);

    let poster_url = if include_poster {
        find(entry, poster_sel()).and_then(|img| attr(img, "src")).map(str::to_owned)
    } else {
        None
    };

    Ok(Record::new(id, full_title, link, description)
        .with_rating(rating)
        .with_date(date)
        .with_comment(comment)
        .with_poster_url(poster_url))
}

/// `"rating4-t"` → `Some(4)`.
/// Anything that does not start with the prefix, has no number before the
/// separator, or falls outside 1..=5 is treated as "no rating".
pub fn parse_rating_class(class: &str) -> Option<u8> {
    let rest = class.trim().strip_prefix(RATING_CLASS_PREFIX)?;
    let digits = rest.split(RATING_CLASS_SEP).next()?;
    let value: u8 = digits.parse().ok()?;
    (1..=MAX_STARS).contains(&value).then_some(value)
}

pub fn next_page_href(doc: &Html) -> Option<String> {
    doc.select(next_sel())
        .next()
        .and_then(|a| attr(a, "href"))
        .map(str::to_owned)
}
