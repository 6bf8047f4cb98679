// src/driver/mod.rs
//! Page-loading collaborator.
//!
//! The collector needs a tiny slice of what a browser does: load a URL,
//! follow a link, wait until the page is settled, and hand back the current
//! document. Element lookup happens on a parsed snapshot of that document
//! (`scraper::Html`), so parsing never touches the driver.
//!
//! A driver lives for one `collect` call. `Session` closes it on drop, which
//! covers every return path including `?` early exits.

mod fixture;
mod http;

pub use fixture::FixtureDriver;
pub use http::HttpDriver;

use std::ops::{Deref, DerefMut};

use url::Url;

use crate::error::DriverError;

pub trait Driver {
    /// Open `url` as the current document. Blocks until the response is in.
    fn load(&mut self, url: &Url) -> Result<(), DriverError>;

    /// Follow a link from the current document.
    fn navigate(&mut self, url: &Url) -> Result<(), DriverError> {
        self.load(url)
    }

    /// Block until the current document has finished loading.
    fn wait_until_idle(&mut self) -> Result<(), DriverError>;

    /// Markup of the current document.
    fn content(&self) -> Result<&str, DriverError>;

    /// Release whatever the driver holds. Called exactly once by `Session`.
    fn close(&mut self) {}
}

impl<D: Driver + ?Sized> Driver for &mut D {
    fn load(&mut self, url: &Url) -> Result<(), DriverError> { (**self).load(url) }
    fn navigate(&mut self, url: &Url) -> Result<(), DriverError> { (**self).navigate(url) }
    fn wait_until_idle(&mut self) -> Result<(), DriverError> { (**self).wait_until_idle() }
    fn content(&self) -> Result<&str, DriverError> { (**self).content() }
    fn close(&mut self) { (**self).close() }
}

/// Scope guard owning a driver for the duration of one collection.
pub struct Session<D: Driver> {
    driver: D,
}

impl<D: Driver> Session<D> {
    pub fn open(driver: D) -> Self {
        Self { driver }
    }
}

impl<D: Driver> Deref for Session<D> {
    type Target = D;
    fn deref(&self) -> &D { &self.driver }
}

impl<D: Driver> DerefMut for Session<D> {
    fn deref_mut(&mut self) -> &mut D { &mut self.driver }
}

impl<D: Driver> Drop for Session<D> {
    fn drop(&mut self) {
        self.driver.close();
        tracing::debug!("driver session closed");
    }
}
