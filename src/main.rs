use std::sync::Arc;

use poem::{listener::TcpListener, Server};

use default_param_backend::api::build_app;
use default_param_backend::config::{init_logging, SessionProvider, Settings};
use default_param_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let settings = Arc::new(Settings::from_env()?);
    tracing::debug!("Loaded settings: {:?}", settings);

    let sessions = SessionProvider::connect(&settings).await?;
    sessions.migrate().await?;
    let sessions = Arc::new(sessions);

    let app_data = Arc::new(AppData::init(settings.clone(), sessions.clone()));
    let app = build_app(app_data.clone());

    let address = settings.server_address();
    tracing::info!("Starting server on http://{}", address);

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutdown signal received");
            },
            None,
        )
        .await?;

    sessions.close().await?;

    tracing::info!("Server stopped");

    Ok(())
}
