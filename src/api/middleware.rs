use std::sync::Arc;
use std::time::Instant;

use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::api::helpers::{api_key_matches, forwarded_for, peer_ip, API_KEY_HEADER};
use crate::config::Settings;
use crate::errors::DefaultError;
use crate::stores::RequestLogStore;
use crate::types::internal::RequestLogEntry;

/// Rejects requests whose `x-api-key` header does not equal the configured secret
pub struct ApiKeyGuard {
    settings: Arc<Settings>,
}

impl ApiKeyGuard {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}

impl<E: Endpoint> Middleware<E> for ApiKeyGuard {
    type Output = ApiKeyGuardEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ApiKeyGuardEndpoint {
            inner: ep,
            settings: self.settings.clone(),
        }
    }
}

pub struct ApiKeyGuardEndpoint<E> {
    inner: E,
    settings: Arc<Settings>,
}

impl<E: Endpoint> Endpoint for ApiKeyGuardEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        if !api_key_matches(req.header(API_KEY_HEADER), self.settings.secret_key()) {
            tracing::debug!("Rejected {} {}: bad or missing API key", req.method(), req.uri().path());
            return Ok(DefaultError::unauthorized().into_response());
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

/// Writes one request audit row per request, after the response is produced
///
/// The audit write is best-effort: failures are logged and the response is
/// returned unchanged.
pub struct RequestLogger {
    store: Arc<RequestLogStore>,
}

impl RequestLogger {
    pub fn new(store: Arc<RequestLogStore>) -> Self {
        Self { store }
    }
}

impl<E: Endpoint> Middleware<E> for RequestLogger {
    type Output = RequestLoggerEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequestLoggerEndpoint {
            inner: ep,
            store: self.store.clone(),
        }
    }
}

pub struct RequestLoggerEndpoint<E> {
    inner: E,
    store: Arc<RequestLogStore>,
}

impl<E: Endpoint> Endpoint for RequestLoggerEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let proxy_ip = peer_ip(&req);
        let client_ip = forwarded_for(&req).or_else(|| proxy_ip.clone());

        tracing::info!("Request: {} {}", method, path);

        let start = Instant::now();
        // Errors become responses here so the logged status is the one the client sees
        let response = match self.inner.call(req).await {
            Ok(response) => response.into_response(),
            Err(err) => err.into_response(),
        };
        let elapsed = start.elapsed();

        let status = response.status().as_u16();
        tracing::info!(
            "Response: {} for {} {} (Duration: {}s)",
            status,
            method,
            path,
            elapsed.as_secs_f64()
        );

        let entry = RequestLogEntry::new(method, path, status)
            .with_client_ip(client_ip)
            .with_proxy_ip(proxy_ip);

        if let Err(err) = self.store.record(entry).await {
            tracing::error!("Failed to write request log: {}", err);
        }

        Ok(response)
    }
}
