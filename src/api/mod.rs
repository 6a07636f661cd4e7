//! REST client for the RoadGuard trips API.
//!
//! Two read-only endpoints, both plain `GET` without headers or auth:
//! `/api/trip/latest/` and `/api/trips/`.

use crate::errors::{AppError, AppResult};
use crate::models::Trip;
use serde::de::DeserializeOwned;
use std::future::Future;

pub const LATEST_TRIP_PATH: &str = "/api/trip/latest/";
pub const TRIPS_PATH: &str = "/api/trips/";

/// Anything the screens can load trips from.
pub trait TripSource {
    fn latest_trip(&self) -> impl Future<Output = AppResult<Trip>> + Send;
    fn list_trips(&self) -> impl Future<Output = AppResult<Vec<Trip>>> + Send;
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct TripApi {
    client: reqwest::Client,
    base_url: String,
}

impl TripApi {
    /// * `base_url` - scheme + host (+ optional prefix), e.g.
    ///   `http://192.168.1.20:8000`. A trailing slash is ignored.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let response = Self::ensure_success(response).await?;

        // Read the body first so a decode failure reports as a JSON error
        // rather than a transport error.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Return the response unchanged on 2xx, or an [`AppError::Api`]
    /// carrying status and body text.
    async fn ensure_success(response: reqwest::Response) -> AppResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl TripSource for TripApi {
    async fn latest_trip(&self) -> AppResult<Trip> {
        self.get_json(LATEST_TRIP_PATH).await
    }

    async fn list_trips(&self) -> AppResult<Vec<Trip>> {
        self.get_json(TRIPS_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = TripApi::new("http://localhost:8000/");
        assert_eq!(api.url(LATEST_TRIP_PATH), "http://localhost:8000/api/trip/latest/");
        assert_eq!(api.url(TRIPS_PATH), "http://localhost:8000/api/trips/");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        let api = TripApi::new(&format!("http://127.0.0.1:{port}"));
        let err = api.list_trips().await.unwrap_err();
        assert!(matches!(err, AppError::Http(_)));
    }
}
