//! Application registry.
//!
//! Maps application names to expanded trees and to application data. The
//! two key sets are configured independently: an application may have a
//! tree without data and the other way round.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::data::AppData;
use crate::error::{CatalogError, CatalogResult};
use crate::tree::{AppTree, Executable, Flavor, TreeManifest};

/// Lookup service over expanded trees and application data.
///
/// Trees are expanded when the registry is built, so lookups never
/// mutate anything and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    trees: BTreeMap<String, AppTree>,
    data: BTreeMap<String, AppData>,
}

impl AppRegistry {
    pub fn builder() -> AppRegistryBuilder {
        AppRegistryBuilder::default()
    }

    /// Get the expanded tree of an application.
    pub fn get_app_tree(&self, app_name: &str) -> CatalogResult<&AppTree> {
        self.trees
            .get(app_name)
            .ok_or_else(|| CatalogError::TreeNotFound(app_name.to_string()))
    }

    /// Get the data record of an application.
    pub fn get_app_data(&self, app_name: &str) -> CatalogResult<&AppData> {
        self.data
            .get(app_name)
            .ok_or_else(|| CatalogError::DataNotFound(app_name.to_string()))
    }

    pub fn get_executable(&self, app_name: &str, executable: &str) -> CatalogResult<Option<&Executable>> {
        Ok(self.get_app_tree(app_name)?.get(executable))
    }

    pub fn get_flavor(
        &self,
        app_name: &str,
        executable: &str,
        flavor: &str,
    ) -> CatalogResult<Option<&Flavor>> {
        Ok(self.get_app_tree(app_name)?.flavor(executable, flavor))
    }

    /// Default executable name of an application, if it has any.
    pub fn default_executable(&self, app_name: &str) -> CatalogResult<Option<&str>> {
        Ok(self
            .get_app_tree(app_name)?
            .default_executable()
            .map(|(name, _)| name))
    }

    /// Default flavor name of an executable, if the executable exists and
    /// has flavors.
    pub fn default_flavor(&self, app_name: &str, executable: &str) -> CatalogResult<Option<&str>> {
        Ok(self
            .get_app_tree(app_name)?
            .get(executable)
            .and_then(Executable::default_flavor)
            .map(|(name, _)| name))
    }

    pub fn has_tree(&self, app_name: &str) -> bool {
        self.trees.contains_key(app_name)
    }

    pub fn has_data(&self, app_name: &str) -> bool {
        self.data.contains_key(app_name)
    }

    pub fn tree_names(&self) -> Vec<&str> {
        self.trees.keys().map(String::as_str).collect()
    }

    pub fn data_names(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }

    pub fn trees(&self) -> impl Iterator<Item = (&str, &AppTree)> {
        self.trees.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Collects tree manifests and data records, then expands every tree.
#[derive(Debug, Default)]
pub struct AppRegistryBuilder {
    trees: Vec<(String, TreeManifest)>,
    data: Vec<(String, AppData)>,
}

impl AppRegistryBuilder {
    /// Register a tree manifest. A later registration under the same name
    /// replaces the earlier one.
    pub fn tree(mut self, app_name: impl Into<String>, manifest: TreeManifest) -> Self {
        self.trees.push((app_name.into(), manifest));
        self
    }

    /// Register a data record. A later registration under the same name
    /// replaces the earlier one.
    pub fn data(mut self, app_name: impl Into<String>, data: AppData) -> Self {
        self.data.push((app_name.into(), data));
        self
    }

    pub fn build(self) -> CatalogResult<AppRegistry> {
        let mut registry = AppRegistry::default();

        for (app_name, manifest) in self.trees {
            let tree = AppTree::expand(&app_name, &manifest)?;
            debug!("Registering tree: {}", app_name);
            registry.trees.insert(app_name, tree);
        }

        for (app_name, data) in self.data {
            debug!("Registering data: {}", app_name);
            registry.data.insert(app_name, data);
        }

        info!(
            "Application registry ready: {} trees, {} data records",
            registry.trees.len(),
            registry.data.len()
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_manifest() -> TreeManifest {
        TreeManifest::from_yaml(
            "shell",
            r#"
executables:
  sh:
    monitors: [standard_output]
    flavors:
      hello_world:
        input:
          - name: hello_world.sh
        monitors: [standard_output]
"#,
        )
        .unwrap()
    }

    fn shell_data() -> AppData {
        AppData::from_yaml(
            "shell",
            "{name: shell, shortName: sh, summary: Shell Script, defaultVersion: '4.2.46'}",
        )
        .unwrap()
    }

    #[test]
    fn test_independent_key_sets() {
        let registry = AppRegistry::builder()
            .tree("shell", shell_manifest())
            .data("bash", shell_data())
            .build()
            .unwrap();

        assert!(registry.get_app_tree("shell").is_ok());
        assert!(registry.get_app_data("bash").is_ok());
        assert_eq!(
            registry.get_app_data("shell").unwrap_err().to_string(),
            "shell is not a known application with data."
        );
        assert_eq!(
            registry.get_app_tree("bash").unwrap_err().to_string(),
            "bash is not a known application with a tree."
        );
        assert_eq!(registry.tree_names(), vec!["shell"]);
        assert_eq!(registry.data_names(), vec!["bash"]);
    }

    #[test]
    fn test_repeated_lookup_is_same_tree() {
        let registry = AppRegistry::builder()
            .tree("shell", shell_manifest())
            .build()
            .unwrap();

        let first = registry.get_app_tree("shell").unwrap();
        let second = registry.get_app_tree("shell").unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_flavor_helpers() {
        let registry = AppRegistry::builder()
            .tree("shell", shell_manifest())
            .build()
            .unwrap();

        assert_eq!(registry.default_executable("shell").unwrap(), Some("sh"));
        assert_eq!(registry.default_flavor("shell", "sh").unwrap(), Some("hello_world"));
        assert_eq!(registry.default_flavor("shell", "bash").unwrap(), None);

        let flavor = registry.get_flavor("shell", "sh", "hello_world").unwrap().unwrap();
        assert_eq!(flavor.application_name, "shell");
        assert!(registry.get_flavor("missing", "sh", "hello_world").is_err());
    }

    #[test]
    fn test_invalid_manifest_fails_build() {
        let manifest = TreeManifest::from_yaml(
            "bad",
            "{executables: {run: {results: [not_a_result]}}}",
        )
        .unwrap();
        assert!(AppRegistry::builder().tree("bad", manifest).build().is_err());
    }
}
