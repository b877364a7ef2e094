//! Static application metadata.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// One installable version (or build of a version) of an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDescriptor {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_licensed: Option<bool>,
    /// Build variant, e.g. "VTST" or "Non-collinear"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_advanced_compute_options: Option<bool>,
}

/// Display name and supported versions of an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub name: String,
    pub short_name: String,
    pub summary: String,
    pub default_version: String,
    #[serde(default)]
    pub versions: Vec<VersionDescriptor>,
}

impl AppData {
    pub fn from_yaml(source_name: &str, yaml: &str) -> CatalogResult<Self> {
        serde_yaml::from_str(yaml).map_err(|error| CatalogError::Yaml {
            source_name: source_name.to_string(),
            error,
        })
    }

    /// The entry describing `default_version`, preferring one flagged as
    /// default when several builds share that version.
    pub fn default_version_descriptor(&self) -> Option<&VersionDescriptor> {
        let mut matching = self
            .versions
            .iter()
            .filter(|v| v.version == self.default_version);
        let first = matching.clone().next();
        matching
            .find(|v| v.is_default == Some(true))
            .or(first)
    }

    /// Build variants declared for `version`, in declaration order.
    pub fn builds(&self, version: &str) -> Vec<&str> {
        self.versions
            .iter()
            .filter(|v| v.version == version)
            .filter_map(|v| v.build.as_deref())
            .collect()
    }

    pub fn has_version(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v.version == version)
    }
}
