//! Web search collaborator trait and DuckDuckGo implementation
//!
//! Last-resort tier of the cascade. Network failures propagate to the
//! caller as errors; they are not part of the "no match" semantics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{GlossaryError, Result};

/// Request timeout for the search endpoint
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One web search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebHit {
    /// Result snippet text
    pub body: String,
    /// Source URL
    pub href: String,
}

/// Opaque web text-search collaborator
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Search for `keywords`, returning up to `max_results` hits
    async fn search(&self, keywords: &str, max_results: usize) -> Result<Vec<WebHit>>;
}

/// DuckDuckGo HTML search (no API key required)
pub struct DuckDuckGo {
    client: reqwest::Client,
}

impl DuckDuckGo {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("glossary-engine/0.1")
            .timeout(SEARCH_TIMEOUT)
            .build()
            .map_err(|e| GlossaryError::WebSearch(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WebSearch for DuckDuckGo {
    async fn search(&self, keywords: &str, max_results: usize) -> Result<Vec<WebHit>> {
        let url = format!(
            "https://html.duckduckgo.com/html/?q={}",
            urlencoding::encode(keywords)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GlossaryError::WebSearch(e.to_string()))?;

        let html = response
            .text()
            .await
            .map_err(|e| GlossaryError::WebSearch(e.to_string()))?;

        Ok(parse_results(&html, max_results))
    }
}

/// Pull `(href, snippet)` pairs out of the DuckDuckGo HTML result page
fn parse_results(html: &str, max: usize) -> Vec<WebHit> {
    let mut hits = Vec::new();

    for segment in html.split("class=\"result__a\"").skip(1) {
        if hits.len() >= max {
            break;
        }

        let href = extract_between(segment, "href=\"", "\"").unwrap_or_default();

        let body = segment
            .split("class=\"result__snippet\"")
            .nth(1)
            .and_then(|snippet| extract_between(snippet, ">", "</a>"))
            .unwrap_or_default()
            .replace("<b>", "")
            .replace("</b>", "");

        if !href.is_empty() {
            hits.push(WebHit {
                body: body.trim().to_string(),
                href: href.trim().to_string(),
            });
        }
    }

    hits
}

fn extract_between(text: &str, start: &str, end: &str) -> Option<String> {
    let start_idx = text.find(start)? + start.len();
    let remaining = &text[start_idx..];
    let end_idx = remaining.find(end)?;
    Some(remaining[..end_idx].to_string())
}
