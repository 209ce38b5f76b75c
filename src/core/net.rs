// src/core/net.rs

// Blocking HTTPS GET for the catalog API.
// The catalog client only sees the `HttpGet` seam, so tests can swap in a
// canned transport.

use std::{error::Error, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

/// Query string pairs, in send order.
pub type Query = Vec<(String, String)>;

pub trait HttpGet {
    /// GET `url` with `query` appended; returns the body on 2xx.
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<String, Box<dyn Error>>;
}

impl<T: HttpGet + ?Sized> HttpGet for &T {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<String, Box<dyn Error>> {
        (**self).get(url, query)
    }
}

pub struct ReqwestGet {
    client: reqwest::blocking::Client,
}

impl ReqwestGet {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl HttpGet for ReqwestGet {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<String, Box<dyn Error>> {
        // Never log `query`: it carries the signature.
        logd!("Net: GET {}", url);

        let resp = self.client.get(url).query(query).send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            loge!("Net: {} from {}", status, url);
            return Err(format!("HTTP error: {} {} {}", status, url, snippet.trim()).into());
        }
        Ok(resp.text()?)
    }
}
