use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{Config, HTTP_TIMEOUT_SECS};
use crate::error::{AppError, Result};

/// One page of a paginated pretix listing. `next` holds the absolute URL of
/// the following page, absent on the last one.
#[derive(Debug, Deserialize)]
struct Page {
    results: Vec<Value>,
    #[serde(default)]
    next: Option<String>,
}

/// Fetch every order of the configured event, walking the server-supplied
/// `next` links verbatim until exhausted. Pages are concatenated in response
/// order, each page exactly once. Any non-2xx response aborts the walk and
/// discards the accumulated pages; no partial snapshot is ever written.
pub async fn fetch_orders(cfg: &Config) -> Result<Vec<Value>> {
    let client = build_client()?;

    let mut orders: Vec<Value> = Vec::new();
    let mut url = endpoint_url(cfg, "orders/");
    let mut page_count = 0usize;

    loop {
        let page: Page = request(&client, cfg, &url).await?.json().await?;
        page_count += 1;
        debug!("page {page_count}: {} orders", page.results.len());
        orders.extend(page.results);

        match page.next {
            Some(next) if !next.is_empty() => url = next,
            _ => break,
        }
    }

    info!("Fetched {} orders across {page_count} pages", orders.len());
    Ok(orders)
}

/// Fetch the event's item catalog. A single request; the raw payload,
/// pagination envelope included, is persisted as-is.
pub async fn fetch_items(cfg: &Config) -> Result<Value> {
    let client = build_client()?;
    let url = endpoint_url(cfg, "items/");
    let payload: Value = request(&client, cfg, &url).await?.json().await?;
    Ok(payload)
}

fn build_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?)
}

fn endpoint_url(cfg: &Config, endpoint: &str) -> String {
    format!(
        "{}/organizers/{}/events/{}/{}",
        cfg.api_url.trim_end_matches('/'),
        cfg.organizer_id,
        cfg.event_id,
        endpoint
    )
}

/// Issue one authenticated GET. Non-2xx responses become `AppError::Api`
/// carrying the status and whatever body the server sent.
async fn request(client: &reqwest::Client, cfg: &Config, url: &str) -> Result<reqwest::Response> {
    let response = client
        .get(url)
        .header("Authorization", format!("Token {}", cfg.api_token))
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Api { status, body });
    }

    Ok(response)
}
