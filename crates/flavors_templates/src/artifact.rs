//! The aggregated template artifact.
//!
//! A single JSON document, `{"allTemplates": [...]}`, holding every
//! assembled asset so consumers can load the whole catalog without
//! reading template files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use flavors_core::AssetRecord;

use crate::assets::AssetCatalog;
use crate::error::TemplateResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateArtifact {
    pub all_templates: Vec<AssetRecord>,
}

impl TemplateArtifact {
    /// Assemble every asset of `catalog`.
    pub fn build(catalog: &AssetCatalog) -> TemplateResult<Self> {
        Ok(Self {
            all_templates: catalog.all_templates()?,
        })
    }

    pub fn to_json(&self) -> TemplateResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> TemplateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the artifact to `path`, creating parent directories.
    pub fn write(&self, path: &Path) -> TemplateResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        info!(
            "Wrote {} templates to {}",
            self.all_templates.len(),
            path.display()
        );
        Ok(())
    }

    pub fn read(path: &Path) -> TemplateResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.all_templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record() -> AssetRecord {
        AssetRecord {
            content: "echo hi".to_string(),
            name: "hello_world.sh".to_string(),
            context_providers: Vec::new(),
            application_name: "shell".to_string(),
            executable_name: "sh".to_string(),
        }
    }

    #[test]
    fn test_json_shape() {
        let artifact = TemplateArtifact {
            all_templates: vec![record()],
        };
        let value: serde_json::Value = serde_json::from_str(&artifact.to_json().unwrap()).unwrap();
        assert_eq!(value["allTemplates"][0]["applicationName"], "shell");
        assert_eq!(value["allTemplates"][0]["contextProviders"], serde_json::json!([]));
    }

    #[test]
    fn test_write_creates_parents() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("build/templates.json");
        let artifact = TemplateArtifact {
            all_templates: vec![record()],
        };

        artifact.write(&path).unwrap();
        assert_eq!(TemplateArtifact::read(&path).unwrap(), artifact);
    }

    #[test]
    fn test_read_rejects_garbage() {
        assert!(TemplateArtifact::from_json("{\"allTemplates\": 3}").is_err());
    }
}
