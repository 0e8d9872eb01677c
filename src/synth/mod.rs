// Deterministic fallback listings for when every provider comes up empty.

pub mod catalog;
pub mod content;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::listing::JobListing;
use crate::models::query::JobQuery;
use crate::synth::catalog::Catalog;

const BASE_SALARY: i64 = 60_000;
const SALARY_STEP: i64 = 10_000;
const PAGE_SALARY_STEP: i64 = 5_000;
const SALARY_SPREAD: i64 = 40_000;
const SENIOR_MIN_UPLIFT: i64 = 20_000;
const SENIOR_MAX_UPLIFT: i64 = 30_000;
const DAY_SECS: i64 = 86_400;

/// Number of synthetic listings on a page: always 6, 7 or 8.
///
/// Uses Euclidean remainder so zero and negative pages stay in range.
pub fn job_count(page: i64) -> i64 {
    6 + page.rem_euclid(3)
}

/// Generates plausible listings from the query alone.
///
/// Output is a pure function of the query, the catalog and the anchor time,
/// so the same search yields identical listings for the life of the process.
#[derive(Debug, Clone)]
pub struct MockSynthesizer {
    catalog: Arc<Catalog>,
    anchor: DateTime<Utc>,
}

impl MockSynthesizer {
    /// `anchor` is the reference point for posting dates, normally process start.
    pub fn new(catalog: Arc<Catalog>, anchor: DateTime<Utc>) -> Self {
        Self { catalog, anchor }
    }

    /// The explicit category unless it is "all", else the first table match.
    pub fn category_for(&self, query: &JobQuery) -> Option<String> {
        query
            .category_filter()
            .map(String::from)
            .or_else(|| self.catalog.categories.infer(&query.text).map(String::from))
    }

    pub fn synthesize(&self, query: &JobQuery) -> Vec<JobListing> {
        let catalog = &*self.catalog;
        let page = query.page;
        let category = self.category_for(query);
        let titles = content::titles(catalog, &query.text, category.as_deref());

        let num_jobs = job_count(page);
        let start_idx = page.saturating_sub(1).saturating_mul(num_jobs);

        tracing::debug!(
            "Synthesizing {num_jobs} listings for '{}' (page {page}, category {category:?})",
            query.text
        );

        (0..num_jobs)
            .map(|i| {
                let idx = start_idx.saturating_add(i);
                let pick = |len: usize| idx.rem_euclid(len as i64) as usize;

                let title = titles[pick(titles.len())].clone();
                let company = catalog.companies[pick(catalog.companies.len())];
                let (city, country) = match &query.location {
                    Some(location) => (location.clone(), None),
                    None => {
                        let (city, country) = catalog.locations[pick(catalog.locations.len())];
                        (city.to_string(), Some(country.to_string()))
                    }
                };

                let employment_type = query.employment_type.clone().unwrap_or_else(|| {
                    catalog.employment_types[pick(catalog.employment_types.len())].to_string()
                });

                let mut salary_min = (BASE_SALARY + i * SALARY_STEP)
                    .saturating_add(page.saturating_sub(1).saturating_mul(PAGE_SALARY_STEP));
                let mut salary_max = salary_min.saturating_add(SALARY_SPREAD);
                if content::is_senior(&title) {
                    salary_min = salary_min.saturating_add(SENIOR_MIN_UPLIFT);
                    salary_max = salary_max.saturating_add(SENIOR_MAX_UPLIFT);
                }

                let id = format!("mock-{page}-{i}");
                let description = content::description(catalog, &title, company, &city);
                let highlights = (i % 3 == 0).then(|| content::highlights(catalog, &title, i));

                JobListing {
                    apply_link: Some(format!(
                        "https://careers.example.com/{}/{id}",
                        slug(company)
                    )),
                    id,
                    employer_name: company.to_string(),
                    city: Some(city),
                    country,
                    employment_type: Some(employment_type),
                    description,
                    is_remote: query.remote_only || idx.rem_euclid(2) == 0,
                    posted_at_epoch_seconds: Some(
                        self.anchor.timestamp() - (idx.rem_euclid(14) + 1) * DAY_SECS,
                    ),
                    salary_min: Some(salary_min),
                    salary_max: Some(salary_max),
                    salary_currency: Some("USD".to_string()),
                    salary_period: Some("YEAR".to_string()),
                    highlights,
                    title,
                }
            })
            .collect()
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::query::SearchParams;

    fn synthesizer() -> MockSynthesizer {
        MockSynthesizer::new(
            Arc::new(Catalog::standard()),
            Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
        )
    }

    fn query(text: &str, page: i64) -> JobQuery {
        let mut query = JobQuery::from_params(SearchParams {
            query: Some(text.to_string()),
            ..Default::default()
        })
        .unwrap();
        query.page = page;
        query
    }

    #[test]
    fn job_count_cycles_through_six_to_eight() {
        assert_eq!(job_count(1), 7);
        assert_eq!(job_count(2), 8);
        assert_eq!(job_count(3), 6);
        for page in -10..50 {
            assert!((6..=8).contains(&job_count(page)), "page {page}");
        }
    }

    #[test]
    fn python_developer_first_page() {
        let synth = synthesizer();
        let q = query("python developer", 1);
        assert_eq!(synth.category_for(&q).as_deref(), Some("software-development"));

        let listings = synth.synthesize(&q);
        assert_eq!(listings.len(), 7);

        let first = &listings[0];
        assert_eq!(first.title, "Python Developer");
        assert_eq!(first.salary_min, Some(60_000));
        assert_eq!(first.salary_max, Some(100_000));
        assert!(first.highlights.is_some());
        assert!(listings[3].highlights.is_some());

        let second = &listings[1];
        assert_eq!(second.title, "Senior Python Engineer");
        assert_eq!(second.salary_min, Some(90_000));
        assert_eq!(second.salary_max, Some(140_000));
    }

    #[test]
    fn output_is_deterministic() {
        let synth = synthesizer();
        for page in [1, 2, 5] {
            let q = query("data analyst", page);
            let a = serde_json::to_string(&synth.synthesize(&q)).unwrap();
            let b = serde_json::to_string(&synth.synthesize(&q)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn salary_spread_depends_only_on_seniority() {
        let synth = synthesizer();
        for page in 1..6 {
            for listing in synth.synthesize(&query("ux designer", page)) {
                let spread = listing.salary_max.unwrap() - listing.salary_min.unwrap();
                let expected = if content::is_senior(&listing.title) { 50_000 } else { 40_000 };
                assert_eq!(spread, expected, "{}", listing.title);
            }
        }
    }

    #[test]
    fn later_pages_shift_salary_base() {
        let listings = synthesizer().synthesize(&query("barista", 3));
        // page 3, i = 0: 60000 + 0 + 2 * 5000; start_idx 12 -> title index 0.
        assert_eq!(listings[0].title, "Barista Specialist");
        assert_eq!(listings[0].salary_min, Some(70_000));
    }

    #[test]
    fn highlights_only_on_every_third_listing() {
        let listings = synthesizer().synthesize(&query("registered nurse", 2));
        assert_eq!(listings.len(), 8);
        for (i, listing) in listings.iter().enumerate() {
            assert_eq!(listing.highlights.is_some(), i % 3 == 0, "index {i}");
        }
    }

    #[test]
    fn explicit_category_overrides_inference() {
        let synth = synthesizer();
        let mut q = query("python developer", 1);
        q.category = Some("design".to_string());
        assert_eq!(synth.category_for(&q).as_deref(), Some("design"));
        assert_eq!(synth.synthesize(&q)[0].title, "Python Designer");

        q.category = Some("all".to_string());
        assert_eq!(synth.category_for(&q).as_deref(), Some("software-development"));
    }

    #[test]
    fn honors_location_remote_and_employment_type() {
        let mut q = query("rust engineer", 1);
        q.location = Some("Berlin".to_string());
        q.remote_only = true;
        q.employment_type = Some("CONTRACTOR".to_string());

        for listing in synthesizer().synthesize(&q) {
            assert_eq!(listing.city.as_deref(), Some("Berlin"));
            assert_eq!(listing.country, None);
            assert!(listing.is_remote);
            assert_eq!(listing.employment_type.as_deref(), Some("CONTRACTOR"));
            assert!(listing.description.contains("Berlin"));
        }
    }

    #[test]
    fn remote_flag_alternates_by_parity() {
        let listings = synthesizer().synthesize(&query("rust engineer", 1));
        let remote: Vec<bool> = listings.iter().map(|l| l.is_remote).collect();
        assert_eq!(remote, [true, false, true, false, true, false, true]);
    }

    #[test]
    fn non_positive_pages_still_generate() {
        let synth = synthesizer();
        let zero = synth.synthesize(&query("rust", 0));
        assert_eq!(zero.len(), 6);
        assert_eq!(zero[0].salary_min, Some(55_000));

        let negative = synth.synthesize(&query("rust", -1));
        assert_eq!(negative.len(), 8);
        assert!(negative.iter().all(|l| l.posted_at_epoch_seconds.is_some()));
    }

    #[test]
    fn extreme_pages_saturate_instead_of_overflowing() {
        let synth = synthesizer();

        let max = synth.synthesize(&query("rust", i64::MAX));
        assert_eq!(max.len(), job_count(i64::MAX) as usize);
        assert!(max.iter().all(|l| l.salary_max.unwrap() == i64::MAX));

        let min = synth.synthesize(&query("rust", i64::MIN));
        assert_eq!(min.len(), job_count(i64::MIN) as usize);
        assert!(min.iter().all(|l| l.salary_min.unwrap() < 0));
        assert!(min.iter().all(|l| l.posted_at_epoch_seconds.is_some()));
    }

    #[test]
    fn posted_dates_precede_anchor() {
        let synth = synthesizer();
        let anchor = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap().timestamp();
        let listings = synth.synthesize(&query("rust", 1));
        assert_eq!(listings[0].posted_at_epoch_seconds, Some(anchor - DAY_SECS));
        assert!(
            listings
                .iter()
                .all(|l| l.posted_at_epoch_seconds.unwrap() < anchor)
        );
    }
}
