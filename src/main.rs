mod config;
mod error;
mod models;
mod providers;
mod routes;
mod search;
mod synth;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::{Command, Config, LogFormat};
use crate::models::query::{JobQuery, SearchParams};
use crate::providers::ProviderChain;
use crate::search::SearchService;
use crate::synth::MockSynthesizer;
use crate::synth::catalog::Catalog;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jobsearch=info,tower_http=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn build_service(config: &Config) -> anyhow::Result<SearchService> {
    let client = providers::http_client(Duration::from_secs(config.provider_timeout_secs))?;
    let chain = ProviderChain::new(providers::default_providers(config, client));

    if config.rapidapi_key().is_none() {
        tracing::warn!("RAPIDAPI_KEY not set, JSearch provider will be skipped");
    }

    let catalog = Arc::new(Catalog::standard());
    let synthesizer = MockSynthesizer::new(catalog, chrono::Utc::now());

    Ok(SearchService::new(chain, synthesizer))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::parse();
    init_tracing(config.log_format);

    let service = build_service(&config)?;

    match config.resolved_command() {
        Command::Serve { listen_addr } => {
            let app = routes::router(Arc::new(service))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive());

            let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
            tracing::info!("Listening on {listen_addr}");
            axum::serve(listener, app).await?;
        }
        Command::Search {
            query,
            location,
            page,
            category,
            remote_only,
            employment_type,
        } => {
            let query = JobQuery::from_params(SearchParams {
                query: Some(query),
                location,
                page,
                category,
                remote_only: Some(remote_only.to_string()),
                employment_type,
            })?;
            let response = service.search(&query).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
