use serde::Serialize;

use crate::models::listing::JobListing;
use crate::models::query::JobQuery;
use crate::providers::JobProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Skipped,
    Failed,
    Succeeded,
}

/// Diagnostic record of one provider attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderAttempt {
    pub provider: String,
    pub status: AttemptStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum ChainOutcome {
    Success {
        provider: String,
        filters_location: bool,
        listings: Vec<JobListing>,
    },
    Exhausted,
}

#[derive(Debug)]
pub struct ChainReport {
    pub outcome: ChainOutcome,
    pub attempts: Vec<ProviderAttempt>,
}

/// Providers tried strictly in order until one returns listings.
pub struct ProviderChain {
    providers: Vec<Box<dyn JobProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Box<dyn JobProvider>>) -> Self {
        Self { providers }
    }

    /// Try each provider in turn, stopping at the first non-empty result.
    /// Provider errors never escape; they are recorded as attempts.
    pub async fn run(&self, query: &JobQuery) -> ChainReport {
        let mut attempts = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let name = provider.name().to_string();

            match provider.search(query).await {
                Ok(listings) if !listings.is_empty() => {
                    tracing::info!("Provider '{name}' returned {} listings", listings.len());
                    attempts.push(ProviderAttempt {
                        provider: name.clone(),
                        status: AttemptStatus::Succeeded,
                        detail: None,
                    });
                    return ChainReport {
                        outcome: ChainOutcome::Success {
                            provider: name,
                            filters_location: provider.filters_location(),
                            listings,
                        },
                        attempts,
                    };
                }
                Ok(_) => {
                    tracing::warn!("Provider '{name}' returned no listings");
                    attempts.push(ProviderAttempt {
                        provider: name,
                        status: AttemptStatus::Failed,
                        detail: Some("no listings".to_string()),
                    });
                }
                Err(e) if e.is_skip() => {
                    tracing::info!("Provider '{name}' skipped: {e}");
                    attempts.push(ProviderAttempt {
                        provider: name,
                        status: AttemptStatus::Skipped,
                        detail: Some(e.to_string()),
                    });
                }
                Err(e) => {
                    tracing::warn!("Provider '{name}' failed: {e}");
                    attempts.push(ProviderAttempt {
                        provider: name,
                        status: AttemptStatus::Failed,
                        detail: Some(e.to_string()),
                    });
                }
            }
        }

        ChainReport {
            outcome: ChainOutcome::Exhausted,
            attempts,
        }
    }
}
