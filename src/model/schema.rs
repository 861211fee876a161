//! Wire types for the dashboard API
//!
//! Every endpoint wraps its payload in the same `{success, data, error}`
//! envelope. Fields the dashboard does not display are kept in `extra` so an
//! exported schema is written back exactly as the store described it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generic `{success, data, error}` response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// The payload, but only when the call reported success
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }

    /// Error text for an unsuccessful call, falling back to `default`
    pub fn error_or(&self, default: &str) -> String {
        self.error
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

/// `GET /api/health`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub connected: bool,
    /// Store URL the proxy forwards to
    #[serde(default)]
    pub url: Option<String>,
}

/// Payload of `GET /api/schema`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<ClassInfo>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SchemaData {
    /// Look up one class by its exact name
    pub fn find_class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.as_ref()?.iter().find(|c| c.name == name)
    }
}

/// A schema class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    #[serde(rename = "class")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vectorizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClassInfo {
    pub fn property_count(&self) -> usize {
        self.properties.as_ref().map_or(0, Vec::len)
    }

    /// Vectorizer module name, `none` when unset or blank
    pub fn vectorizer_label(&self) -> &str {
        match self.vectorizer.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => "none",
        }
    }
}

/// A class property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "dataType", default)]
    pub data_type: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Property {
    pub fn data_type_label(&self) -> String {
        self.data_type.join(", ")
    }
}

/// Payload of `GET /api/objects/{class}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectsData {
    #[serde(default)]
    pub objects: Option<Vec<StoredObject>>,
}

/// One object stored in a class
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredObject {
    pub id: String,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl StoredObject {
    /// Properties rendered as 2-space indented JSON, `{}` when absent
    pub fn properties_json(&self) -> String {
        let empty = Map::new();
        let properties = self.properties.as_ref().unwrap_or(&empty);
        serde_json::to_string_pretty(properties).unwrap_or_else(|_| "{}".to_string())
    }
}

/// `POST /api/schema/delete-all`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteAllReport {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub total_deleted: usize,
    #[serde(default)]
    pub total_errors: usize,
    #[serde(default)]
    pub deleted_classes: Vec<String>,
    #[serde(default)]
    pub errors: Vec<ClassDeleteError>,
    /// Set when the schema could not be read, so nothing was attempted
    #[serde(default)]
    pub error: Option<String>,
}

impl DeleteAllReport {
    /// Reason the bulk delete never started, if it did not
    pub fn aborted(&self) -> Option<&str> {
        if self.success {
            return None;
        }
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Alert text shown once the bulk delete has finished
    pub fn summary(&self) -> String {
        if self.success {
            format!(
                "All classes deleted successfully. Deleted {} classes.",
                self.total_deleted
            )
        } else {
            format!(
                "Partially successful. Deleted {} classes, {} errors.",
                self.total_deleted, self.total_errors
            )
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassDeleteError {
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub error: String,
}

/// Payload of `GET /api/meta`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaData {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub modules: Map<String, Value>,
}

impl MetaData {
    pub fn module_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Payload of `GET /api/nodes`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodesData {
    #[serde(default)]
    pub nodes: Vec<NodeStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeStatus {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub stats: Option<NodeStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStats {
    #[serde(default)]
    pub shard_count: u64,
    #[serde(default)]
    pub object_count: u64,
}

#[cfg(test)]
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
impl SchemaData {
    pub fn with_classes(classes: Vec<ClassInfo>) -> Self {
        Self {
            classes: Some(classes),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
impl ClassInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_vectorizer(mut self, vectorizer: impl Into<String>) -> Self {
        self.vectorizer = Some(vectorizer.into());
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.get_or_insert_with(Vec::new).push(property);
        self
    }
}

#[cfg(test)]
impl Property {
    pub fn new(name: impl Into<String>, data_type: &[&str]) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.iter().map(|t| t.to_string()).collect(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_response_parses_classes() {
        let body = json!({
            "success": true,
            "status_code": 200,
            "data": {
                "classes": [
                    {
                        "class": "Article",
                        "vectorizer": "text2vec-openai",
                        "properties": [
                            {"name": "title", "dataType": ["text"]},
                            {"name": "wordCount", "dataType": ["int"]}
                        ],
                        "invertedIndexConfig": {"bm25": {"b": 0.75}}
                    },
                    {"class": "Author"}
                ]
            }
        });

        let response: ApiResponse<SchemaData> = serde_json::from_value(body).unwrap();
        let schema = response.into_data().unwrap();
        let classes = schema.classes.as_ref().unwrap();

        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].property_count(), 2);
        assert_eq!(classes[0].vectorizer_label(), "text2vec-openai");
        assert_eq!(classes[1].property_count(), 0);
        assert_eq!(classes[1].vectorizer_label(), "none");
        assert!(classes[0].extra.contains_key("invertedIndexConfig"));
    }

    #[test]
    fn test_blank_vectorizer_is_none() {
        let class = ClassInfo::new("Thing").with_vectorizer("");
        assert_eq!(class.vectorizer_label(), "none");
    }

    #[test]
    fn test_failed_response_has_no_data() {
        let body = json!({"success": false, "error": "connection refused", "status_code": 500});
        let response: ApiResponse<SchemaData> = serde_json::from_value(body).unwrap();

        assert_eq!(response.error_or("Failed"), "connection refused");
        assert!(response.into_data().is_none());
    }

    #[test]
    fn test_error_or_falls_back_to_default() {
        let response: ApiResponse<Value> = ApiResponse {
            success: false,
            data: None,
            error: None,
        };
        assert_eq!(response.error_or("Failed to delete class"), "Failed to delete class");
    }

    #[test]
    fn test_export_keeps_unknown_fields() {
        let body = json!({
            "classes": [{"class": "Article", "moduleConfig": {"x": 1}}]
        });
        let schema: SchemaData = serde_json::from_value(body.clone()).unwrap();
        let exported = serde_json::to_value(&schema).unwrap();

        assert_eq!(exported, body);
    }

    #[test]
    fn test_object_properties_json_is_indented() {
        let object: StoredObject = serde_json::from_value(json!({
            "id": "1b2c",
            "properties": {"title": "Hello"}
        }))
        .unwrap();

        assert_eq!(object.properties_json(), "{\n  \"title\": \"Hello\"\n}");
    }

    #[test]
    fn test_missing_object_properties_render_empty() {
        let object: StoredObject = serde_json::from_value(json!({"id": "1b2c"})).unwrap();
        assert_eq!(object.properties_json(), "{}");
    }

    #[test]
    fn test_delete_all_summary() {
        let report: DeleteAllReport = serde_json::from_value(json!({
            "success": false,
            "total_deleted": 3,
            "total_errors": 1,
            "deleted_classes": ["A", "B", "C"],
            "errors": [{"class": "D", "error": "boom"}]
        }))
        .unwrap();

        assert_eq!(
            report.summary(),
            "Partially successful. Deleted 3 classes, 1 errors."
        );
        assert_eq!(report.errors[0].class_name, "D");
        assert_eq!(report.deleted_classes, vec!["A", "B", "C"]);
        assert_eq!(report.aborted(), None);
    }

    #[test]
    fn test_delete_all_aborted_when_schema_unreadable() {
        let report: DeleteAllReport = serde_json::from_value(json!({
            "success": false,
            "error": "connection refused",
            "status_code": 500
        }))
        .unwrap();

        assert_eq!(report.aborted(), Some("connection refused"));
    }

    #[test]
    fn test_nodes_parse_stats() {
        let nodes: NodesData = serde_json::from_value(json!({
            "nodes": [{
                "name": "node1",
                "status": "HEALTHY",
                "version": "1.24.1",
                "stats": {"shardCount": 4, "objectCount": 1200}
            }]
        }))
        .unwrap();

        let stats = nodes.nodes[0].stats.as_ref().unwrap();
        assert_eq!(stats.shard_count, 4);
        assert_eq!(stats.object_count, 1200);
    }
}
