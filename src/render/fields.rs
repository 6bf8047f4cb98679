// src/render/fields.rs
//! Display-only fields derived from a record's free text.
//!
//! These are heuristics, not parsers: a miss yields `None` and is never an
//! error. Each one is a pure function over `&str` so it can be checked
//! against a table of literal inputs.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::consts::{FIELD_SEP, MAX_STARS};
use crate::record::Record;

const FILLED_STAR: &str = "★";
const EMPTY_STAR: &str = "☆";

fn get_regex(re: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    re.get_or_init(|| Regex::new(pattern).expect("Invalid regex pattern defined in code"))
}

/// Only ASCII word characters, whitespace and `' - . , : ; ( )`.
fn latin_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    get_regex(&RE, r"^[A-Za-z0-9_\s'\-.,:;()]+$")
}

/// `YYYY-MM-DD`, capturing the year.
fn date_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    get_regex(&RE, r"\b([0-9]{4})-[0-9]{2}-[0-9]{2}\b")
}

/// Title variants in listing order. Never empty.
pub fn split_titles(full_title: &str) -> Vec<&str> {
    full_title.split(FIELD_SEP).collect()
}

/// First variant; the native-script title on this site.
pub fn main_title(full_title: &str) -> &str {
    full_title.split(FIELD_SEP).next().unwrap_or(full_title)
}

/// First variant after the main one that looks like a Latin-script alias.
pub fn alias_title(full_title: &str) -> Option<&str> {
    full_title.split(FIELD_SEP).skip(1).find(|t| is_latin_title(t))
}

pub fn is_latin_title(variant: &str) -> bool {
    latin_title_re().is_match(variant) && variant.bytes().any(|b| b.is_ascii_alphabetic())
}

/// Year of the first date-shaped token, scanning `" / "` segments in order.
pub fn release_year(description: &str) -> Option<&str> {
    description.split(FIELD_SEP).find_map(|segment| {
        date_token_re()
            .captures(segment)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    })
}

/// `rating` filled stars then `5 - rating` empty ones.
///
/// Ratings are expected in 1..=5 and are not re-checked here. Above 5 the
/// empty run is simply omitted, so the result is longer than five glyphs.
pub fn star_glyphs(rating: u8) -> String {
    let empty = MAX_STARS.saturating_sub(rating);
    join!(&FILLED_STAR.repeat(usize::from(rating)), &EMPTY_STAR.repeat(usize::from(empty)))
}

/// All derived values for one record, borrowed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFields<'a> {
    pub main_title: &'a str,
    pub alias_title: Option<&'a str>,
    pub release_year: Option<&'a str>,
    pub star_glyphs: Option<String>,
}

impl<'a> DerivedFields<'a> {
    pub fn derive(record: &'a Record) -> Self {
        Self {
            main_title: main_title(record.full_title()),
            alias_title: alias_title(record.full_title()),
            release_year: release_year(record.description()),
            star_glyphs: record.rating().map(star_glyphs),
        }
    }
}
