pub mod aggregate;

use crate::models::query::JobQuery;
use crate::providers::{ChainOutcome, ProviderChain};
use crate::search::aggregate::{ResultSource, SearchResponse};
use crate::synth::MockSynthesizer;

/// Runs a validated query through the provider chain, falling back to
/// synthetic listings when every provider fails. Never returns an error.
pub struct SearchService {
    chain: ProviderChain,
    synthesizer: MockSynthesizer,
}

impl SearchService {
    pub fn new(chain: ProviderChain, synthesizer: MockSynthesizer) -> Self {
        Self { chain, synthesizer }
    }

    pub async fn search(&self, query: &JobQuery) -> SearchResponse {
        let report = self.chain.run(query).await;

        let (source, listings) = match report.outcome {
            ChainOutcome::Success {
                provider,
                filters_location,
                listings,
            } => (
                ResultSource::Provider {
                    name: provider,
                    filters_location,
                },
                listings,
            ),
            ChainOutcome::Exhausted => {
                tracing::warn!(
                    "All {} providers failed for '{}', serving synthetic listings",
                    report.attempts.len(),
                    query.text
                );
                (ResultSource::Synthetic, self.synthesizer.synthesize(query))
            }
        };

        aggregate::aggregate(query, source, listings, report.attempts)
    }
}
