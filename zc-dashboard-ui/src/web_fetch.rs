//! Browser-side HTTP and timers via `web_sys`.
//!
//! Requests go through `window.fetch`; bodies are read as text and decoded
//! with `serde_json`, so the same model types serve both native and WASM.

use serde::de::DeserializeOwned;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;
use zc_core::endpoints::Endpoint;
use zc_core::error::{Result, ZcError};
use zc_core::model::{CurrentReading, HistoryPoint, HistoryResponse, RecommendationSet, SummaryStats};
use zc_core::source::DashboardSource;

fn js_error(value: JsValue) -> ZcError {
    ZcError::Request(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

fn encode_component(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

/// GET `url` and decode its JSON body.
///
/// A non-OK status resolves to `Ok(None)`, as does a JSON `null` body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<Option<T>> {
    let window = web_sys::window().ok_or_else(|| ZcError::Request("no global window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        log::warn!("Bad response status for {}: {}", url, response.status());
        return Ok(None);
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| ZcError::Request(format!("non-text body from {}", url)))?;
    Ok(serde_json::from_str::<Option<T>>(&body)?)
}

/// Resolve after `duration` using `setTimeout`.
pub async fn sleep(duration: Duration) {
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            if let Err(e) =
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            {
                log::error!("setTimeout failed: {:?}", e);
            }
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// [`DashboardSource`] over the browser's `fetch`.
#[derive(Debug, Clone, PartialEq)]
pub struct WebSource {
    api_base: String,
}

impl WebSource {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    fn url(&self, endpoint: Endpoint<'_>) -> String {
        endpoint.url_with_query(&self.api_base, encode_component)
    }
}

impl DashboardSource for WebSource {
    async fn fetch_current(&self) -> Result<Option<CurrentReading>> {
        get_json(&self.url(Endpoint::Current)).await
    }

    async fn fetch_history(&self, hours: u32) -> Result<Option<Vec<HistoryPoint>>> {
        let response: Option<HistoryResponse> =
            get_json(&self.url(Endpoint::History { hours })).await?;
        Ok(response.map(|r| r.data))
    }

    async fn fetch_stats(&self) -> Result<Option<SummaryStats>> {
        get_json(&self.url(Endpoint::Summary)).await
    }

    async fn fetch_recommendations(
        &self,
        team_context: Option<&str>,
    ) -> Result<Option<RecommendationSet>> {
        get_json(&self.url(Endpoint::Recommendations { team_context })).await
    }
}
