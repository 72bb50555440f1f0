//! Native HTTP client for the Zc backend.

use crate::endpoints::Endpoint;
use crate::error::{Result, ZcError};
use crate::model::{
    CurrentReading, HealthStatus, HistoryPoint, HistoryResponse, RecommendationSet, SummaryStats,
};
use crate::source::DashboardSource;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default backend address for native use.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed [`DashboardSource`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, endpoint: Endpoint<'_>) -> Result<reqwest::Response> {
        let url = endpoint.url(&self.base_url);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .query(&endpoint.query())
            .send()
            .await?;
        Ok(response)
    }

    /// GET and decode; a non-OK status is `Ok(None)` and so is a JSON `null`.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<Option<T>> {
        let response = self.send(endpoint).await?;
        let status = response.status();
        let body = if status.is_success() {
            response.text().await?
        } else {
            String::new()
        };
        decode_dashboard(endpoint, status, &body)
    }

    /// Backend health report. Unlike the dashboard endpoints, a non-OK status
    /// is an error here.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.send(Endpoint::Health).await?;
        let status = response.status();
        let body = if status.is_success() {
            response.text().await?
        } else {
            String::new()
        };
        decode_health(status, &body)
    }
}

fn decode_dashboard<T: DeserializeOwned>(
    endpoint: Endpoint<'_>,
    status: StatusCode,
    body: &str,
) -> Result<Option<T>> {
    if !status.is_success() {
        warn!("Bad response status for {}: {}", endpoint.path(), status);
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<T>>(body)?)
}

fn decode_health(status: StatusCode, body: &str) -> Result<HealthStatus> {
    if !status.is_success() {
        return Err(ZcError::Status {
            endpoint: Endpoint::Health.path(),
            status: status.as_u16(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

impl DashboardSource for ApiClient {
    async fn fetch_current(&self) -> Result<Option<CurrentReading>> {
        self.get_json(Endpoint::Current).await
    }

    async fn fetch_history(&self, hours: u32) -> Result<Option<Vec<HistoryPoint>>> {
        let response: Option<HistoryResponse> =
            self.get_json(Endpoint::History { hours }).await?;
        Ok(response.map(|r| r.data))
    }

    async fn fetch_stats(&self) -> Result<Option<SummaryStats>> {
        self.get_json(Endpoint::Summary).await
    }

    async fn fetch_recommendations(
        &self,
        team_context: Option<&str>,
    ) -> Result<Option<RecommendationSet>> {
        self.get_json(Endpoint::Recommendations { team_context })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_base_url() {
        let client = ApiClient::new(DEFAULT_API_URL).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_non_ok_status_is_no_update() {
        let decoded: Option<SummaryStats> =
            decode_dashboard(Endpoint::Summary, StatusCode::SERVICE_UNAVAILABLE, "").unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn test_null_body_is_no_update() {
        let decoded: Option<CurrentReading> =
            decode_dashboard(Endpoint::Current, StatusCode::OK, "null").unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn test_history_body_decodes() {
        let body = r#"{"data": [{"timestamp": "2024-01-15T10:30:00", "zc": 0.85, "zone": "YELLOW"}], "count": 1}"#;
        let decoded: Option<HistoryResponse> =
            decode_dashboard(Endpoint::History { hours: 168 }, StatusCode::OK, body).unwrap();
        let history = decoded.unwrap();
        assert_eq!(history.data.len(), 1);
        assert_eq!(history.data[0].zc, 0.85);
        assert_eq!(history.count, Some(1));
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        let decoded: Result<Option<CurrentReading>> =
            decode_dashboard(Endpoint::Current, StatusCode::OK, "<html>");
        assert!(matches!(decoded, Err(ZcError::Decode(_))));
    }

    #[test]
    fn test_unhealthy_status_is_an_error() {
        let err = decode_health(StatusCode::INTERNAL_SERVER_ERROR, "").unwrap_err();
        assert!(matches!(
            err,
            ZcError::Status {
                endpoint: "/api/health",
                status: 500
            }
        ));

        let body = r#"{"status": "healthy", "version": "3.0.0", "team_size": 4, "monitor_active": true, "recommender_active": false}"#;
        let health = decode_health(StatusCode::OK, body).unwrap();
        assert_eq!(health.team_size, 4);
        assert!(!health.recommender_active);
    }
}
