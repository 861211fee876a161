//! Schema export to a JSON file

use crate::model::schema::SchemaData;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of every schema export
pub const EXPORT_FILE_NAME: &str = "weaviate-schema.json";

/// Write the schema as indented JSON into `dir`, returning the written path
pub fn write_schema(schema: &SchemaData, dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    }

    let path = dir.join(EXPORT_FILE_NAME);
    let contents = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::{ClassInfo, Property};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "weaviate-tui-export-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_write_schema_creates_indented_file() {
        let dir = temp_dir("indented");
        let schema = SchemaData::with_classes(vec![ClassInfo::new("Article")
            .with_vectorizer("none")
            .with_property(Property::new("title", &["text"]))]);

        let path = write_schema(&schema, &dir).unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("{\n  \"classes\""));

        let reparsed: SchemaData = serde_json::from_str(&contents).unwrap();
        assert_eq!(reparsed.find_class("Article").unwrap().property_count(), 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_schema_overwrites_previous_export() {
        let dir = temp_dir("overwrite");
        write_schema(&SchemaData::with_classes(vec![ClassInfo::new("Old")]), &dir).unwrap();
        let path = write_schema(&SchemaData::with_classes(vec![]), &dir).unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert!(!contents.contains("Old"));

        let _ = fs::remove_dir_all(&dir);
    }
}
