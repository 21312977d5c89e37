//! # bach-client
//!
//! Async REST client for the BACH GUI server.
//!
//! Covers the endpoints the dashboard and the skills board consume:
//! - status and dashboard counters
//! - tasks and scanned tasks
//! - messages
//! - daemon jobs and runs
//! - scanner control
//! - agents
//! - the skills-board hierarchy document and item source files
//! - headless AI sessions and the desktop prompt manager
//!
//! Every call fails with [`ClientError`] on transport errors and non-2xx
//! statuses. Endpoints that report `{"success": false}` on a 2xx response
//! fail with [`ClientError::Application`]. Nothing is retried.

pub mod actions;
pub mod agents;
pub mod daemon;
pub mod messages;
pub mod scanner;
pub mod skills_board;
pub mod status;
pub mod tasks;

mod error;
mod http;

pub use error::ClientError;

use std::time::Duration;

use bach_config::ServerConfig;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::{check_response, decode, decode_checked};

/// HTTP client bound to one BACH server.
#[derive(Debug, Clone)]
pub struct BachClient {
    http: reqwest::Client,
    base_url: String,
}

impl BachClient {
    /// Create a client from server settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ServerConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, path, "bach request");
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        check_response(request.send().await?).await
    }

    /// `GET` a path and decode the body without interpreting `success`.
    async fn get_raw<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        decode(self.send::<()>(Method::GET, path, None).await?).await
    }

    /// `GET` a path, rejecting `{"success": false}` bodies.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        decode_checked(self.send::<()>(Method::GET, path, None).await?).await
    }

    /// Send a JSON body (or none), rejecting `{"success": false}` bodies.
    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        decode_checked(self.send(method, path, body).await?).await
    }
}

/// Append `key=value` pairs whose value is present, URL-encoded.
pub(crate) fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query = params
        .iter()
        .filter_map(|(key, value)| value.map(|value| format!("{key}={}", urlencoding::encode(value))))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
