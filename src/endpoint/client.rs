//! HTTP client for the RSVP endpoint
//!
//! Submissions go to `POST {base}/save_guest` as JSON; attendance totals come
//! from `GET {base}/api/stats`.

use super::traits::RsvpEndpoint;
use crate::error::TransportError;
use crate::state::{AttendanceStats, SubmitAck, Submission};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the RSVP endpoint
pub struct HttpRsvpClient {
    http: Client,
    base_url: String,
}

impl HttpRsvpClient {
    /// Create a client with a timeout applied to every request
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RsvpEndpoint for HttpRsvpClient {
    async fn submit(&self, submission: &Submission) -> Result<SubmitAck, TransportError> {
        let response = self
            .http
            .post(format!("{}/save_guest", self.base_url))
            .json(submission)
            .send()
            .await?;
        decode(response).await
    }

    async fn fetch_stats(&self) -> Result<AttendanceStats, TransportError> {
        let response = self
            .http
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .await?;
        decode(response).await
    }
}

/// Non-2xx statuses and bodies that are not the expected JSON are transport failures
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status(status.as_u16()));
    }
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))
}
