use catalog_search::catalog::loader::load_catalog;
use catalog_search::config::{Config, usage, wants_help};
use catalog_search::server::{RequestStats, SearchSettings, create_router, serve};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("catalog-search");
    let flags = args.get(1..).unwrap_or_default();

    if wants_help(flags) {
        println!("{}", usage(program));
        return Ok(());
    }

    let config = Config::from_env()?.apply_args(flags)?;
    tracing::debug!("Configuration: {:?}", config);

    // 1. Catalog (must complete before the listener exists):
    let catalog = Arc::new(load_catalog(&config.source, config.fetch_timeout).await?);

    // 2. HTTP Router:
    let settings = SearchSettings {
        query_param: config.query_param.clone(),
    };
    let stats = RequestStats::new();
    let app = create_router(catalog, settings, stats.clone());

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        "Starting service on {} (GET /search?{}=...)",
        listener.local_addr()?,
        config.query_param
    );
    tracing::info!("Press Ctrl+C to shutdown");

    serve(listener, app).await?;

    tracing::info!("Served {} search requests", stats.total());
    Ok(())
}
