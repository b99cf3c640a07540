// src/core/net.rs

// Blocking HTTPS GET. The pipeline is strictly sequential, so the
// blocking reqwest client is all that is needed: no runtime, no retry.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::params::HTTP_TIMEOUT_SECS;

// Scholar serves an interstitial to clients without a browser UA.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Build the shared blocking client.
pub fn client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
}

/// GET `url` and return the body. Any transport failure or non-2xx
/// status is an error; callers decide which pipeline stage it aborts.
pub fn http_get(client: &Client, url: &str) -> reqwest::Result<String> {
    debug!("GET {url}");
    client.get(url).send()?.error_for_status()?.text()
}
