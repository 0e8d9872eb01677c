use serde::Deserialize;

use crate::error::AppError;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Raw `/search` query-string parameters, before validation.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub location: Option<String>,
    pub page: Option<String>,
    pub category: Option<String>,
    pub remote_only: Option<String>,
    pub employment_type: Option<String>,
}

/// A validated job search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub text: String,
    pub location: Option<String>,
    /// Not clamped: zero and negative pages are kept as given.
    pub page: i64,
    pub category: Option<String>,
    pub remote_only: bool,
    pub employment_type: Option<String>,
}

impl JobQuery {
    /// Shape raw request parameters into a query.
    ///
    /// Only the search text is mandatory. `page` falls back to 1 when absent
    /// or non-numeric and `remote_only` is true only for the literal "true".
    pub fn from_params(params: SearchParams) -> Result<Self, AppError> {
        let text = params
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| AppError::Validation("Query is required".to_string()))?
            .to_string();

        let page = params
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1);

        let remote_only = params
            .remote_only
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));

        Ok(Self {
            text,
            location: params.location.filter(|s| !s.is_empty()),
            page,
            category: params.category.filter(|s| !s.is_empty()),
            remote_only,
            employment_type: params.employment_type.filter(|s| !s.is_empty()),
        })
    }

    /// The requested category, with the "all" sentinel treated as unset.
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.eq_ignore_ascii_case(ALL_CATEGORIES))
    }
}
