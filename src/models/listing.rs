use serde::Serialize;

/// A job posting normalized across providers.
///
/// Field names follow the JSearch response schema so portal front-ends
/// render every source the same way. `id` is only unique within the
/// source that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobListing {
    #[serde(rename = "job_id")]
    pub id: String,
    #[serde(rename = "job_title")]
    pub title: String,
    pub employer_name: String,
    #[serde(rename = "job_city")]
    pub city: Option<String>,
    #[serde(rename = "job_country")]
    pub country: Option<String>,
    #[serde(rename = "job_employment_type")]
    pub employment_type: Option<String>,
    #[serde(rename = "job_apply_link")]
    pub apply_link: Option<String>,
    #[serde(rename = "job_description")]
    pub description: String,
    #[serde(rename = "job_is_remote")]
    pub is_remote: bool,
    #[serde(rename = "job_posted_at_timestamp")]
    pub posted_at_epoch_seconds: Option<i64>,
    #[serde(rename = "job_min_salary")]
    pub salary_min: Option<i64>,
    #[serde(rename = "job_max_salary")]
    pub salary_max: Option<i64>,
    #[serde(rename = "job_salary_currency")]
    pub salary_currency: Option<String>,
    #[serde(rename = "job_salary_period")]
    pub salary_period: Option<String>,
    #[serde(rename = "job_highlights", skip_serializing_if = "Option::is_none")]
    pub highlights: Option<JobHighlights>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobHighlights {
    #[serde(rename = "Qualifications")]
    pub qualifications: Vec<String>,
    #[serde(rename = "Responsibilities")]
    pub responsibilities: Vec<String>,
    #[serde(rename = "Benefits")]
    pub benefits: Vec<String>,
}

impl JobListing {
    /// Human-readable location used for substring filtering, e.g. "Berlin, DE".
    pub fn location_text(&self) -> String {
        match (self.city.as_deref(), self.country.as_deref()) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (Some(city), None) => city.to_string(),
            (None, Some(country)) => country.to_string(),
            (None, None) => String::new(),
        }
    }
}
