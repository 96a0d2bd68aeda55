// API layer - HTTP endpoints and middleware
pub mod default;
pub mod helpers;
pub mod middleware;

use std::sync::Arc;

use poem::middleware::Cors;
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

pub use default::DefaultApi;
pub use middleware::{ApiKeyGuard, RequestLogger};

use crate::app_data::AppData;
use crate::config::Settings;

/// Build the full HTTP application
///
/// Layering, outermost first: request logger, CORS, API key guard, routes.
/// The logger therefore records rejected and preflight requests too.
pub fn build_app(app_data: Arc<AppData>) -> impl Endpoint {
    let api_service = OpenApiService::new(
        DefaultApi::new(app_data.clone()),
        "Default Parameter API",
        env!("CARGO_PKG_VERSION"),
    );

    let cors = cors_for(&app_data.settings);

    Route::new()
        .nest("/", api_service)
        .with(ApiKeyGuard::new(app_data.settings.clone()))
        .with(cors)
        .with(RequestLogger::new(app_data.request_log_store.clone()))
}

/// CORS policy for the configured origins
///
/// An empty origin list refuses every cross-origin request. poem's `Cors`
/// treats an empty list as "any origin", so that case is closed explicitly.
fn cors_for(settings: &Settings) -> Cors {
    let cors = Cors::new().allow_credentials(true);

    if settings.allowed_origins().is_empty() {
        cors.allow_origins_fn(|_| false)
    } else {
        cors.allow_origins(settings.allowed_origins().iter())
    }
}
