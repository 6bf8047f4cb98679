// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// What to do with a listed entry that lacks a required element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryPolicy {
    /// Abort the whole collection on the first broken entry.
    #[default]
    FailFast,
    /// Log the entry id and keep going.
    SkipInvalid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    pub user_id: String,
    pub include_poster: bool,
    /// `None` walks every page. Values <= 0 stop after the first page.
    pub max_pages: Option<i64>,
    pub entry_policy: EntryPolicy,
    /// Base for the listing URL and for relative "next page" links.
    pub origin: String,
}

impl CollectOptions {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            include_poster: false,
            max_pages: None,
            entry_policy: EntryPolicy::default(),
            origin: s!(ORIGIN),
        }
    }

    /// `{origin}/people/{user_id}/collect`. The id goes in unescaped.
    pub fn listing_url(&self) -> String {
        join!(self.origin.trim_end_matches('/'), PEOPLE_PATH, &self.user_id, COLLECT_PATH)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverOptions {
    pub user_agent: String,
    pub accept_language: String,
    /// `None` keeps the HTTP client's own default.
    pub timeout: Option<Duration>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            accept_language: s!(ACCEPT_LANGUAGE),
            timeout: None,
        }
    }
}
