// src/driver/http.rs
// Blocking HTTP driver. The listing pages are server-rendered, so a full
// response body is already a settled document: once `load` returns there is
// nothing left to wait for.

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use super::Driver;
use crate::config::options::DriverOptions;
use crate::error::DriverError;

pub struct HttpDriver {
    client: Client,
    /// Body of the current document.
    current: Option<String>,
}

impl HttpDriver {
    pub fn new(opts: &DriverOptions) -> Result<Self, DriverError> {
        let mut headers = HeaderMap::new();
        if let Ok(v) = HeaderValue::from_str(&opts.accept_language) {
            headers.insert(header::ACCEPT_LANGUAGE, v);
        }

        let mut builder = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .default_headers(headers)
            .cookie_store(true);
        if let Some(t) = opts.timeout {
            builder = builder.timeout(t);
        }

        Ok(Self { client: builder.build()?, current: None })
    }
}

impl Driver for HttpDriver {
    fn load(&mut self, url: &Url) -> Result<(), DriverError> {
        let t = std::time::Instant::now();
        let resp = self.client.get(url.as_str()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DriverError::Status { url: url.to_string(), status: status.as_u16() });
        }
        let final_url = resp.url().to_string();
        let body = resp.text()?;
        debug!(url = %final_url, bytes = body.len(), elapsed = ?t.elapsed(), "page loaded");
        self.current = Some(body);
        Ok(())
    }

    fn wait_until_idle(&mut self) -> Result<(), DriverError> {
        match self.current {
            Some(_) => Ok(()),
            None => Err(DriverError::NoDocument),
        }
    }

    fn content(&self) -> Result<&str, DriverError> {
        self.current.as_deref().ok_or(DriverError::NoDocument)
    }

    fn close(&mut self) {
        self.current = None;
    }
}
