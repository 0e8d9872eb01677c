use async_trait::async_trait;
use serde_json::Value;

use crate::error::ProviderError;
use crate::models::listing::{JobHighlights, JobListing};
use crate::models::query::JobQuery;
use crate::providers::{JobProvider, fetch_json, qualified_text, str_field, trim_base};

const RAPIDAPI_HOST: &str = "jsearch.p.rapidapi.com";

/// JSearch on RapidAPI. Requires an API key; location is folded into the
/// query text so results need no post-filtering.
pub struct JSearch {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl JSearch {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
            api_key,
        }
    }
}

#[async_trait]
impl JobProvider for JSearch {
    fn name(&self) -> &str {
        "jsearch"
    }

    async fn search(&self, query: &JobQuery) -> Result<Vec<JobListing>, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential("RAPIDAPI_KEY"))?;

        let mut params = vec![
            ("query", search_text(query)),
            ("page", query.page.to_string()),
            ("num_pages", "1".to_string()),
        ];
        if query.remote_only {
            params.push(("remote_jobs_only", "true".to_string()));
        }
        if let Some(employment_type) = &query.employment_type {
            params.push(("employment_types", employment_type.to_uppercase()));
        }

        let request = self
            .client
            .get(format!("{}/search", self.base_url))
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .query(&params);

        let data = fetch_json(request).await?;
        parse_results(&data)
    }
}

/// "python developer software development in Berlin"
fn search_text(query: &JobQuery) -> String {
    let text = qualified_text(query);
    match &query.location {
        Some(location) => format!("{text} in {location}"),
        None => text,
    }
}

fn parse_results(data: &Value) -> Result<Vec<JobListing>, ProviderError> {
    let results = data
        .get("data")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ProviderError::Payload("missing 'data' in response".to_string()))?;

    Ok(results.iter().filter_map(parse_job).collect())
}

fn parse_job(raw: &Value) -> Option<JobListing> {
    let id = str_field(raw, "job_id")?;
    let title = str_field(raw, "job_title")?;

    let salary = |primary: &str, legacy: &str| {
        raw.get(primary)
            .or_else(|| raw.get(legacy))
            .and_then(|v| v.as_f64())
            .map(|v| v as i64)
    };

    Some(JobListing {
        id,
        title,
        employer_name: str_field(raw, "employer_name").unwrap_or_else(|| "Unknown".to_string()),
        city: str_field(raw, "job_city"),
        country: str_field(raw, "job_country"),
        employment_type: str_field(raw, "job_employment_type"),
        apply_link: str_field(raw, "job_apply_link"),
        description: str_field(raw, "job_description").unwrap_or_default(),
        is_remote: raw
            .get("job_is_remote")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        posted_at_epoch_seconds: raw.get("job_posted_at_timestamp").and_then(|v| v.as_i64()),
        salary_min: salary("job_min_salary", "job_salary_min"),
        salary_max: salary("job_max_salary", "job_salary_max"),
        salary_currency: str_field(raw, "job_salary_currency"),
        salary_period: str_field(raw, "job_salary_period"),
        highlights: raw.get("job_highlights").and_then(parse_highlights),
    })
}

fn parse_highlights(raw: &Value) -> Option<JobHighlights> {
    let list = |key: &str| -> Vec<String> {
        raw.get(key)
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    };

    let highlights = JobHighlights {
        qualifications: list("Qualifications"),
        responsibilities: list("Responsibilities"),
        benefits: list("Benefits"),
    };

    let empty = highlights.qualifications.is_empty()
        && highlights.responsibilities.is_empty()
        && highlights.benefits.is_empty();
    (!empty).then_some(highlights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::query::SearchParams;
    use mockito::Matcher;
    use serde_json::json;

    fn query(text: &str, location: Option<&str>) -> JobQuery {
        JobQuery::from_params(SearchParams {
            query: Some(text.to_string()),
            location: location.map(String::from),
            ..Default::default()
        })
        .unwrap()
    }

    fn provider(base_url: &str, api_key: Option<&str>) -> JSearch {
        JSearch::new(reqwest::Client::new(), base_url, api_key.map(String::from))
    }

    #[tokio::test]
    async fn skips_without_api_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let err = provider(&server.url(), None)
            .search(&query("rust", None))
            .await
            .unwrap_err();
        assert!(err.is_skip());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn sends_credentials_and_normalizes_listings() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_header("X-RapidAPI-Key", "secret")
            .match_header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "rust developer in Berlin".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("num_pages".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "status": "OK",
                    "data": [{
                        "job_id": "abc",
                        "job_title": "Rust Developer",
                        "employer_name": "Ferrous",
                        "job_city": "Berlin",
                        "job_country": "DE",
                        "job_employment_type": "FULLTIME",
                        "job_apply_link": "https://example.com/apply",
                        "job_description": "Write Rust.",
                        "job_is_remote": false,
                        "job_posted_at_timestamp": 1700000000,
                        "job_min_salary": 70000.0,
                        "job_max_salary": 90000.0,
                        "job_salary_currency": "EUR",
                        "job_salary_period": "YEAR",
                        "job_highlights": { "Qualifications": ["Rust"] }
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let listings = provider(&server.url(), Some("secret"))
            .search(&query("rust developer", Some("Berlin")))
            .await
            .unwrap();

        assert_eq!(listings.len(), 1);
        let job = &listings[0];
        assert_eq!(job.id, "abc");
        assert_eq!(job.employer_name, "Ferrous");
        assert_eq!(job.city.as_deref(), Some("Berlin"));
        assert_eq!(job.salary_min, Some(70000));
        assert_eq!(job.salary_max, Some(90000));
        assert_eq!(job.posted_at_epoch_seconds, Some(1700000000));
        let highlights = job.highlights.as_ref().unwrap();
        assert_eq!(highlights.qualifications, vec!["Rust".to_string()]);
        assert!(highlights.benefits.is_empty());
    }

    #[tokio::test]
    async fn forwards_remote_and_employment_type_filters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("remote_jobs_only".into(), "true".into()),
                Matcher::UrlEncoded("employment_types".into(), "CONTRACT".into()),
            ]))
            .with_status(200)
            .with_body(json!({ "data": [] }).to_string())
            .create_async()
            .await;

        let mut q = query("rust", None);
        q.remote_only = true;
        q.employment_type = Some("contract".to_string());

        let listings = provider(&server.url(), Some("secret"))
            .search(&q)
            .await
            .unwrap();
        assert!(listings.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let err = provider(&server.url(), Some("secret"))
            .search(&query("rust", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Status(s) if s.as_u16() == 429));
    }

    #[test]
    fn skips_entries_without_id_or_title() {
        let data = json!({ "data": [{ "job_title": "No id" }, { "job_id": "1" }] });
        assert!(parse_results(&data).unwrap().is_empty());
    }
}
