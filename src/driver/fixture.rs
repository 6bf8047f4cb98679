// src/driver/fixture.rs
// In-memory driver serving captured pages by URL. Used for offline runs
// against saved markup and throughout the tests.

use std::collections::HashMap;

use url::Url;

use super::Driver;
use crate::error::DriverError;

#[derive(Debug, Default)]
pub struct FixtureDriver {
    pages: HashMap<String, String>,
    current: Option<String>,
    visited: Vec<String>,
    closed: bool,
}

impl FixtureDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`. The key is normalized the same way the
    /// collector normalizes links, so `https://host` and `https://host/` agree.
    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        let key = Url::parse(url).map(|u| u.to_string()).unwrap_or_else(|_| s!(url));
        self.pages.insert(key, html.into());
        self
    }

    /// Every URL successfully loaded, in order.
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Driver for FixtureDriver {
    fn load(&mut self, url: &Url) -> Result<(), DriverError> {
        let key = url.to_string();
        if !self.pages.contains_key(&key) {
            return Err(DriverError::MissingPage(key));
        }
        self.visited.push(key.clone());
        self.current = Some(key);
        Ok(())
    }

    fn wait_until_idle(&mut self) -> Result<(), DriverError> {
        match self.current {
            Some(_) => Ok(()),
            None => Err(DriverError::NoDocument),
        }
    }

    fn content(&self) -> Result<&str, DriverError> {
        self.current
            .as_ref()
            .and_then(|k| self.pages.get(k))
            .map(String::as_str)
            .ok_or(DriverError::NoDocument)
    }

    fn close(&mut self) {
        self.current = None;
        self.closed = true;
    }
}
