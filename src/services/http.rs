//! HTTP implementation of the dashboard API
//!
//! Uses the synchronous `ureq` client. A non-2xx status is not treated as a
//! failure: the proxy always answers with a JSON envelope, so the body is
//! read the same way regardless of status. Only connection errors, timeouts
//! and malformed JSON are reported as `Err`.

use crate::config::Config;
use crate::model::schema::{
    ApiResponse, DeleteAllReport, HealthStatus, MetaData, NodesData, ObjectsData, SchemaData,
};
use crate::services::api::DashboardApi;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Dashboard API client bound to one base URL
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    base_url: String,
    timeout: Duration,
}

impl HttpDashboardApi {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Absolute URL for an API path such as `/api/schema`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let result = ureq::get(&url).timeout(self.timeout).call();
        read_json(result, "GET", path)
    }

    fn get_with_limit<T: DeserializeOwned>(&self, path: &str, limit: u32) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, limit, "GET");
        let result = ureq::get(&url)
            .timeout(self.timeout)
            .query("limit", &limit.to_string())
            .call();
        read_json(result, "GET", path)
    }

    fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let result = ureq::delete(&url).timeout(self.timeout).call();
        read_json(result, "DELETE", path)
    }

    fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let result = ureq::post(&url)
            .timeout(self.timeout)
            .set("Content-Type", "application/json")
            .call();
        read_json(result, "POST", path)
    }
}

/// Parse the JSON body of a response, whatever its status code
fn read_json<T: DeserializeOwned>(
    result: std::result::Result<ureq::Response, ureq::Error>,
    method: &str,
    path: &str,
) -> Result<T> {
    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            tracing::warn!(method, path, code, "server answered with error status");
            response
        }
        Err(err) => {
            tracing::warn!(method, path, error = %err, "request failed");
            return Err(err).with_context(|| format!("{} {} failed", method, path));
        }
    };

    response
        .into_json::<T>()
        .with_context(|| format!("{} {} returned malformed JSON", method, path))
}

impl DashboardApi for HttpDashboardApi {
    fn health(&self) -> Result<HealthStatus> {
        self.get("/api/health")
    }

    fn schema(&self) -> Result<ApiResponse<SchemaData>> {
        self.get("/api/schema")
    }

    fn delete_class(&self, class_name: &str) -> Result<ApiResponse<Value>> {
        self.delete(&format!("/api/schema/{}", class_name))
    }

    fn delete_all_classes(&self) -> Result<DeleteAllReport> {
        self.post("/api/schema/delete-all")
    }

    fn objects(&self, class_name: &str, limit: u32) -> Result<ApiResponse<ObjectsData>> {
        self.get_with_limit(&format!("/api/objects/{}", class_name), limit)
    }

    fn delete_object(&self, class_name: &str, object_id: &str) -> Result<ApiResponse<Value>> {
        self.delete(&format!("/api/objects/{}/{}", class_name, object_id))
    }

    fn meta(&self) -> Result<ApiResponse<MetaData>> {
        self.get("/api/meta")
    }

    fn nodes(&self) -> Result<ApiResponse<NodesData>> {
        self.get("/api/nodes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpDashboardApi::new("http://localhost:5000/", Duration::from_secs(1));
        assert_eq!(api.url("/api/schema"), "http://localhost:5000/api/schema");
    }

    #[test]
    fn test_from_config_uses_configured_url() {
        let config = Config {
            base_url: "http://dashboard.internal:8000".to_string(),
            ..Config::default()
        };
        let api = HttpDashboardApi::from_config(&config);
        assert_eq!(api.url("/api/health"), "http://dashboard.internal:8000/api/health");
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is closed on any sane test machine
        let api = HttpDashboardApi::new("http://127.0.0.1:9", Duration::from_millis(500));
        let err = api.health().unwrap_err();
        assert!(err.to_string().contains("GET /api/health failed"));
    }
}
