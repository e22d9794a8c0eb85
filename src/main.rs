use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use salon_match::config::{LoggingSettings, Settings};
use salon_match::core::{RecommendationMatcher, StyleHeuristic};
use salon_match::error::handle_json_payload_error;
use salon_match::models::ScoringWeights;
use salon_match::routes::{self, recommendations::AppState};
use salon_match::services::{CatalogCache, CatalogClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging; `RUST_LOG` takes precedence over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_tracing(&settings.logging);

    info!("Starting Salon Match recommendation service...");

    let catalog = match CatalogClient::new(
        settings.catalog.endpoint.clone(),
        settings.catalog.api_key.clone(),
        settings.catalog.timeout_secs,
    ) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to create catalog client: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };

    info!("Catalog client initialized ({})", settings.catalog.endpoint);

    let cache = Arc::new(CatalogCache::new(
        settings.cache.capacity,
        settings.cache.ttl_secs,
    ));

    info!("Catalog cache initialized (TTL: {}s)", settings.cache.ttl_secs);

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = RecommendationMatcher::new(weights);
    let heuristic = StyleHeuristic::new(settings.recommendations.max_results);

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        catalog,
        cache,
        matcher,
        heuristic,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
