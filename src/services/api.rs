//! Dashboard API seam
//!
//! The app talks to the server only through [`DashboardApi`]. The production
//! implementation is [`HttpDashboardApi`](super::HttpDashboardApi); tests
//! drive the app with a scripted implementation.
//!
//! `Err` means a transport or parse failure. API-level failures come back as
//! `Ok` with `success: false` and are interpreted by the caller.

use crate::model::schema::{
    ApiResponse, DeleteAllReport, HealthStatus, MetaData, NodesData, ObjectsData, SchemaData,
};
use anyhow::Result;
use serde_json::Value;

pub trait DashboardApi {
    /// `GET /api/health`
    fn health(&self) -> Result<HealthStatus>;

    /// `GET /api/schema`
    fn schema(&self) -> Result<ApiResponse<SchemaData>>;

    /// `DELETE /api/schema/{class_name}`
    fn delete_class(&self, class_name: &str) -> Result<ApiResponse<Value>>;

    /// `POST /api/schema/delete-all`
    fn delete_all_classes(&self) -> Result<DeleteAllReport>;

    /// `GET /api/objects/{class_name}?limit={limit}`
    fn objects(&self, class_name: &str, limit: u32) -> Result<ApiResponse<ObjectsData>>;

    /// `DELETE /api/objects/{class_name}/{object_id}`
    fn delete_object(&self, class_name: &str, object_id: &str) -> Result<ApiResponse<Value>>;

    /// `GET /api/meta`
    fn meta(&self) -> Result<ApiResponse<MetaData>>;

    /// `GET /api/nodes`
    fn nodes(&self) -> Result<ApiResponse<NodesData>>;
}
