//! HTTP client for the events API.
//!
//! Pages depend on the `EventApi` trait rather than on reqwest directly, so
//! they can be driven by an in-memory store in tests.

use std::future::Future;

use log::{debug, warn};
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{MeetupsError, MeetupsResult};
use crate::event::{Event, NewEvent};

/// The four operations pages perform against the events API.
pub trait EventApi {
    /// GET /events
    fn list(&self) -> impl Future<Output = MeetupsResult<Vec<Event>>> + Send;

    /// GET /events/slug/:slug
    fn get_by_slug(&self, slug: &str) -> impl Future<Output = MeetupsResult<Event>> + Send;

    /// POST /events
    fn create(&self, payload: &NewEvent) -> impl Future<Output = MeetupsResult<Event>> + Send;

    /// DELETE /events/:id
    fn delete_by_id(&self, id: &str) -> impl Future<Output = MeetupsResult<()>> + Send;
}

/// Error body shapes the API is known to send
#[derive(Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    error: Option<String>,
}

/// `EventApi` over HTTP
#[derive(Clone)]
pub struct HttpEventApi {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpEventApi {
    pub fn new(config: ClientConfig) -> MeetupsResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(MeetupsError::Transport)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("{method} {url}");
        self.http.request(method, url)
    }

    async fn send(&self, request: RequestBuilder) -> MeetupsResult<Response> {
        let resp = request.send().await.map_err(|e| {
            warn!("Request failed: {e}");
            MeetupsError::Transport(e)
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = error_message(&body);
        warn!(
            "{} responded {status}{}",
            self.config.base_url(),
            message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
        );

        Err(MeetupsError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> MeetupsResult<T> {
        let resp = self.send(request).await?;
        let bytes = resp.bytes().await.map_err(MeetupsError::Transport)?;
        serde_json::from_slice(&bytes).map_err(|e| MeetupsError::Decode(e.to_string()))
    }
}

impl EventApi for HttpEventApi {
    async fn list(&self) -> MeetupsResult<Vec<Event>> {
        self.send_json(self.request(Method::GET, "/events")).await
    }

    async fn get_by_slug(&self, slug: &str) -> MeetupsResult<Event> {
        let path = format!("/events/slug/{}", urlencoding::encode(slug));
        self.send_json(self.request(Method::GET, &path)).await
    }

    async fn create(&self, payload: &NewEvent) -> MeetupsResult<Event> {
        let request = self.request(Method::POST, "/events").json(payload);
        self.send_json(request).await
    }

    async fn delete_by_id(&self, id: &str) -> MeetupsResult<()> {
        let path = format!("/events/{}", urlencoding::encode(id));
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}

/// Pull a human-readable message out of an error body, if there is one.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}
