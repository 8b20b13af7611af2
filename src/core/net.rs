// src/core/net.rs

// HTTPS GET via reqwest's blocking client. One request per run, no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;

/// Source of raw HTML. The runner only ever needs "GET this URL, give me the body".
pub trait Fetch {
    fn fetch_document(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch_document(&self, url: &str) -> Result<String> {
        logd!(url, "GET");
        let resp = self.client.get(url).send()?;

        // The body is parsed regardless; a non-2xx page simply won't contain the table.
        let status = resp.status();
        if !status.is_success() {
            logw!(%status, url, "non-success status");
        }

        let body = resp.text()?;
        logf!(bytes = body.len(), %status, "fetched document");
        Ok(body)
    }
}
