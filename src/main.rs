use std::sync::Arc;
use tokio::net::TcpListener;
use hacker_news_proxy::{
    api::routes::create_router,
    cache::ItemCache,
    config::Config,
    hn_client::HnClient,
    service::StoryService,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    // Wire the service: upstream client, item cache, aggregation core
    let api = Arc::new(HnClient::new(&config.hn_base_url));
    let cache = Arc::new(ItemCache::new(config.cache_ttl));
    let service = Arc::new(StoryService::new(api, cache));

    let app_state = AppState { service };

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    // Start the server
    tracing::info!("listening on {server_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
