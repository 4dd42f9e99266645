use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use eventdesk_server::config::{is_development, Config};
use eventdesk_server::routes::create_routes;
use eventdesk_server::{storage, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("eventdesk_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");
    if is_development() {
        tracing::info!("Development mode: error details are exposed");
    }

    let store = storage::open(&config.storage)
        .await
        .expect("Failed to open storage");

    let app = create_routes(AppState::new(store));

    tracing::info!("🚀 Server running at http://{}", config.addr);

    let listener = TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
