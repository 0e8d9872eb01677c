use async_trait::async_trait;
use serde_json::Value;

use crate::error::ProviderError;
use crate::models::listing::JobListing;
use crate::models::query::JobQuery;
use crate::providers::{JobProvider, fetch_json, str_field, trim_base};

/// Arbeitnow job board. The API has no search parameter, so the requested
/// page is fetched and matched against the query text locally.
pub struct Arbeitnow {
    client: reqwest::Client,
    base_url: String,
}

impl Arbeitnow {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
        }
    }
}

#[async_trait]
impl JobProvider for Arbeitnow {
    fn name(&self) -> &str {
        "arbeitnow"
    }

    fn filters_location(&self) -> bool {
        true
    }

    async fn search(&self, query: &JobQuery) -> Result<Vec<JobListing>, ProviderError> {
        let request = self
            .client
            .get(format!("{}/api/job-board-api", self.base_url))
            .query(&[("page", query.page.max(1).to_string())]);

        let data = fetch_json(request).await?;
        let jobs = data
            .get("data")
            .and_then(|v| v.as_array())
            .ok_or_else(|| ProviderError::Payload("missing 'data' in response".to_string()))?;

        let needle = query.text.to_lowercase();
        Ok(jobs
            .iter()
            .filter(|raw| matches_text(raw, &needle))
            .filter_map(parse_job)
            .filter(|job| !query.remote_only || job.is_remote)
            .collect())
    }
}

/// Title or any tag contains the (lowercased) search text.
fn matches_text(raw: &Value, needle: &str) -> bool {
    let title_match = raw
        .get("title")
        .and_then(|v| v.as_str())
        .is_some_and(|t| t.to_lowercase().contains(needle));

    title_match
        || raw
            .get("tags")
            .and_then(|v| v.as_array())
            .is_some_and(|tags| {
                tags.iter()
                    .filter_map(|t| t.as_str())
                    .any(|t| t.to_lowercase().contains(needle))
            })
}

fn parse_job(raw: &Value) -> Option<JobListing> {
    let id = str_field(raw, "slug")?;
    let title = str_field(raw, "title")?;

    let employment_type = raw
        .get("job_types")
        .and_then(|v| v.as_array())
        .and_then(|types| types.first())
        .and_then(|v| v.as_str())
        .map(String::from);

    Some(JobListing {
        id,
        title,
        employer_name: str_field(raw, "company_name").unwrap_or_else(|| "Unknown".to_string()),
        city: str_field(raw, "location"),
        country: None,
        employment_type,
        apply_link: str_field(raw, "url"),
        description: str_field(raw, "description").unwrap_or_default(),
        is_remote: raw.get("remote").and_then(|v| v.as_bool()).unwrap_or(false),
        posted_at_epoch_seconds: raw.get("created_at").and_then(|v| v.as_i64()),
        salary_min: None,
        salary_max: None,
        salary_currency: None,
        salary_period: None,
        highlights: None,
    })
}
