use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::Value;

use crate::error::ProviderError;
use crate::models::listing::JobListing;
use crate::models::query::JobQuery;
use crate::providers::{JobProvider, fetch_json, str_field, trim_base};

/// Remotive has no page parameter, only `limit`. Page `n` is the window
/// `[(n-1)*PAGE_SIZE, n*PAGE_SIZE)` of a `limit = n*PAGE_SIZE` request.
const PAGE_SIZE: i64 = 20;

/// Remotive public API. Every listing is remote; the candidate location
/// restriction is exposed as the country and filtered by the aggregator.
pub struct Remotive {
    client: reqwest::Client,
    base_url: String,
}

impl Remotive {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
        }
    }
}

#[async_trait]
impl JobProvider for Remotive {
    fn name(&self) -> &str {
        "remotive"
    }

    fn filters_location(&self) -> bool {
        true
    }

    async fn search(&self, query: &JobQuery) -> Result<Vec<JobListing>, ProviderError> {
        let page = query.page.max(1);
        let limit = page.saturating_mul(PAGE_SIZE);

        let request = self
            .client
            .get(format!("{}/api/remote-jobs", self.base_url))
            .query(&[
                ("search", query.text.clone()),
                ("limit", limit.to_string()),
            ]);

        let data = fetch_json(request).await?;
        let listings = parse_results(&data)?;

        let skip = usize::try_from((page - 1).saturating_mul(PAGE_SIZE)).unwrap_or(usize::MAX);
        Ok(listings.into_iter().skip(skip).collect())
    }
}

fn parse_results(data: &Value) -> Result<Vec<JobListing>, ProviderError> {
    let jobs = data
        .get("jobs")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ProviderError::Payload("missing 'jobs' in response".to_string()))?;

    Ok(jobs.iter().filter_map(parse_job).collect())
}

fn parse_job(raw: &Value) -> Option<JobListing> {
    let id = match raw.get("id")? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => return None,
    };
    let title = str_field(raw, "title")?;

    let posted_at_epoch_seconds = str_field(raw, "publication_date")
        .and_then(|d| NaiveDateTime::parse_from_str(&d, "%Y-%m-%dT%H:%M:%S").ok())
        .map(|d| d.and_utc().timestamp());

    Some(JobListing {
        id,
        title,
        employer_name: str_field(raw, "company_name").unwrap_or_else(|| "Unknown".to_string()),
        city: None,
        country: str_field(raw, "candidate_required_location"),
        employment_type: str_field(raw, "job_type"),
        apply_link: str_field(raw, "url"),
        description: str_field(raw, "description").unwrap_or_default(),
        is_remote: true,
        posted_at_epoch_seconds,
        // Remotive salaries are free text ("$80k - $100k"), not bounds.
        salary_min: None,
        salary_max: None,
        salary_currency: None,
        salary_period: None,
        highlights: None,
    })
}
