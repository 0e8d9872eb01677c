// External job-listing providers and the chain that tries them in order.

pub mod arbeitnow;
pub mod chain;
pub mod jsearch;
pub mod remotive;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;
use crate::error::ProviderError;
use crate::models::listing::JobListing;
use crate::models::query::JobQuery;

pub use chain::{ChainOutcome, ProviderAttempt, ProviderChain};

/// Trait that all job-search providers implement.
/// Each provider issues one request to its source and normalizes the payload
/// into `JobListing`s. An empty vector is a valid return; the chain decides
/// what it means.
#[async_trait]
pub trait JobProvider: Send + Sync {
    /// Short identifier used in logs and the response envelope.
    fn name(&self) -> &str;

    /// Whether returned listings carry a location worth filtering on.
    fn filters_location(&self) -> bool {
        false
    }

    async fn search(&self, query: &JobQuery) -> Result<Vec<JobListing>, ProviderError>;
}

/// Build the shared HTTP client. Every provider call is bounded by `timeout`.
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("jobsearch/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
}

/// The providers in priority order: JSearch, Remotive, Arbeitnow.
pub fn default_providers(
    config: &Config,
    client: reqwest::Client,
) -> Vec<Box<dyn JobProvider>> {
    vec![
        Box::new(jsearch::JSearch::new(
            client.clone(),
            &config.jsearch_base_url,
            config.rapidapi_key().map(String::from),
        )),
        Box::new(remotive::Remotive::new(client.clone(), &config.remotive_base_url)),
        Box::new(arbeitnow::Arbeitnow::new(client, &config.arbeitnow_base_url)),
    ]
}

/// Send a prepared request and decode a JSON body, mapping non-2xx to an error.
async fn fetch_json(request: reqwest::RequestBuilder) -> Result<Value, ProviderError> {
    let resp = request.send().await?;

    if !resp.status().is_success() {
        return Err(ProviderError::Status(resp.status()));
    }

    resp.json::<Value>()
        .await
        .map_err(|e| ProviderError::Payload(format!("invalid JSON body: {e}")))
}

fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Query text with the category appended as a keyword qualifier.
fn qualified_text(query: &JobQuery) -> String {
    match query.category_filter() {
        Some(category) => format!("{} {}", query.text, category.replace('-', " ")),
        None => query.text.clone(),
    }
}

/// Drop a trailing slash so paths can be appended with `format!`.
fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::query::SearchParams;

    fn query(text: &str, category: Option<&str>) -> JobQuery {
        JobQuery::from_params(SearchParams {
            query: Some(text.to_string()),
            category: category.map(String::from),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn qualified_text_appends_category_words() {
        assert_eq!(
            qualified_text(&query("python", Some("data-science"))),
            "python data science"
        );
        assert_eq!(qualified_text(&query("python", Some("all"))), "python");
        assert_eq!(qualified_text(&query("python", None)), "python");
    }

    #[test]
    fn default_chain_order_is_jsearch_remotive_arbeitnow() {
        use clap::Parser;
        let config = Config::parse_from(["jobsearch"]);
        let client = http_client(Duration::from_secs(1)).unwrap();
        let names: Vec<String> = default_providers(&config, client)
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, ["jsearch", "remotive", "arbeitnow"]);
    }
}
