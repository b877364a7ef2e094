//! Asset manifests and catalog assembly.
//!
//! Each application declares its assets in a YAML manifest: the file name
//! to render under, the template source(s) in the [`TemplateStore`], the
//! context providers that feed it and the executable it belongs to.
//! Assembly resolves the sources and normalizes the providers into
//! [`AssetRecord`]s.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use flavors_core::{normalize_context_providers, AssetRecord, ContextProviderSpec};

use crate::error::{TemplateError, TemplateResult};
use crate::store::TemplateStore;

/// Applications with assets, in aggregation order.
pub const REGISTRATION_ORDER: &[&str] = &["espresso", "shell", "python", "vasp", "jupyterLab", "nwchem"];

/// Embedded asset manifests, in aggregation order.
pub const ASSET_MANIFESTS: &[(&str, &str)] = &[
    ("espresso", include_str!("../manifests/espresso.yaml")),
    ("shell", include_str!("../manifests/shell.yaml")),
    ("python", include_str!("../manifests/python.yaml")),
    ("vasp", include_str!("../manifests/vasp.yaml")),
    ("jupyterLab", include_str!("../manifests/jupyterLab.yaml")),
    ("nwchem", include_str!("../manifests/nwchem.yaml")),
];

/// One template source file or several concatenated in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateSources {
    One(String),
    Many(Vec<String>),
}

impl TemplateSources {
    pub fn files(&self) -> Vec<&str> {
        match self {
            TemplateSources::One(file) => vec![file.as_str()],
            TemplateSources::Many(files) => files.iter().map(String::as_str).collect(),
        }
    }
}

/// A raw asset definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDefinition {
    /// File name the rendered content is written under
    pub name: String,
    /// Source file(s) relative to the manifest's directory
    pub template: TemplateSources,
    /// Overrides the manifest-level executable
    #[serde(default)]
    pub executable_name: Option<String>,
    #[serde(default)]
    pub context_providers: Vec<ContextProviderSpec>,
}

/// Asset manifest for one application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetManifest {
    pub application_name: String,
    /// Executable used by assets that don't name their own
    #[serde(default)]
    pub executable_name: Option<String>,
    /// Directory in the store holding the sources; defaults to the
    /// application name
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub assets: Vec<AssetDefinition>,
}

impl AssetManifest {
    pub fn from_yaml(yaml: &str) -> TemplateResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn directory(&self) -> &str {
        self.directory.as_deref().unwrap_or(&self.application_name)
    }

    fn invalid(&self, message: impl Into<String>) -> TemplateError {
        TemplateError::InvalidManifest {
            application: self.application_name.clone(),
            message: message.into(),
        }
    }

    /// Resolve every asset definition against `store`.
    pub fn assemble(&self, store: &TemplateStore) -> TemplateResult<Vec<AssetRecord>> {
        let mut records = Vec::with_capacity(self.assets.len());

        for asset in &self.assets {
            let executable_name = asset
                .executable_name
                .as_ref()
                .or(self.executable_name.as_ref())
                .ok_or_else(|| self.invalid(format!("asset {} has no executable", asset.name)))?;

            let mut content = String::new();
            for file in asset.template.files() {
                content.push_str(store.require(&format!("{}/{}", self.directory(), file))?);
            }

            records.push(AssetRecord {
                content,
                name: asset.name.clone(),
                context_providers: normalize_context_providers(&asset.context_providers),
                application_name: self.application_name.clone(),
                executable_name: executable_name.clone(),
            });
        }

        debug!(
            "Assembled {} assets for {}",
            records.len(),
            self.application_name
        );
        Ok(records)
    }
}

/// Asset manifests bound to a template store.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    manifests: Vec<AssetManifest>,
    store: TemplateStore,
}

impl AssetCatalog {
    pub fn new(store: TemplateStore) -> Self {
        Self {
            manifests: Vec::new(),
            store,
        }
    }

    /// Built-in manifests over the embedded templates.
    pub fn builtin() -> TemplateResult<Self> {
        Self::with_store(TemplateStore::embedded())
    }

    /// Built-in manifests over a caller-supplied store.
    pub fn with_store(store: TemplateStore) -> TemplateResult<Self> {
        let mut catalog = Self::new(store);
        for (app_name, yaml) in ASSET_MANIFESTS {
            let manifest = AssetManifest::from_yaml(yaml)?;
            if manifest.application_name != *app_name {
                return Err(manifest.invalid(format!(
                    "manifest registered as {app_name} declares {}",
                    manifest.application_name
                )));
            }
            catalog.register(manifest);
        }
        Ok(catalog)
    }

    /// Append a manifest; its assets follow those already registered.
    pub fn register(&mut self, manifest: AssetManifest) {
        debug!("Registering assets for {}", manifest.application_name);
        self.manifests.push(manifest);
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    pub fn application_names(&self) -> Vec<&str> {
        self.manifests
            .iter()
            .map(|m| m.application_name.as_str())
            .collect()
    }

    /// Assets of one application, in manifest order.
    pub fn app_templates(&self, app_name: &str) -> TemplateResult<Vec<AssetRecord>> {
        let manifest = self
            .manifests
            .iter()
            .find(|m| m.application_name == app_name)
            .ok_or_else(|| TemplateError::UnknownApplication(app_name.to_string()))?;
        manifest.assemble(&self.store)
    }

    /// Assets of every application, grouped by application in
    /// registration order.
    pub fn all_templates(&self) -> TemplateResult<Vec<AssetRecord>> {
        let mut all = Vec::new();
        for manifest in &self.manifests {
            all.extend(manifest.assemble(&self.store)?);
        }
        info!("Assembled {} assets", all.len());
        Ok(all)
    }
}

/// Every built-in asset, assembled from the embedded templates.
pub fn get_all_app_templates() -> TemplateResult<Vec<AssetRecord>> {
    AssetCatalog::builtin()?.all_templates()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flavors_core::ContextProviderRef;

    fn store() -> TemplateStore {
        let mut store = TemplateStore::new();
        store.insert("vasp/INCAR.j2", "ISTART = 0\n");
        store.insert("vasp/_MIXIN_INCAR_hse.j2", "LHFCALC = .TRUE.\n");
        store
    }

    fn manifest() -> AssetManifest {
        AssetManifest::from_yaml(
            r#"
applicationName: vasp
executableName: vasp
assets:
  - name: INCAR
    template: INCAR.j2
    contextProviders: [VASPInputDataManager]
  - name: INCAR_HSE
    template: [INCAR.j2, _MIXIN_INCAR_hse.j2]
    contextProviders:
      - name: VASPInputDataManager
        isEdited: false
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_assemble_concatenates_sources() {
        let records = manifest().assemble(&store()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].content, "ISTART = 0\n");
        assert_eq!(records[1].content, "ISTART = 0\nLHFCALC = .TRUE.\n");
        assert_eq!(records[1].executable_name, "vasp");
    }

    #[test]
    fn test_assemble_normalizes_providers() {
        let records = manifest().assemble(&store()).unwrap();
        assert_eq!(
            records[0].context_providers,
            vec![ContextProviderRef::new("VASPInputDataManager")]
        );
        assert_eq!(
            records[1].context_providers,
            vec![ContextProviderRef::new("VASPInputDataManager")
                .with_field("isEdited", serde_json::json!(false))]
        );
    }

    #[test]
    fn test_missing_source() {
        let err = manifest().assemble(&TemplateStore::new()).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(ref path) if path == "vasp/INCAR.j2"));
    }

    #[test]
    fn test_missing_executable() {
        let manifest = AssetManifest::from_yaml(
            "{applicationName: shell, assets: [{name: hello.sh, template: hello.j2.sh}]}",
        )
        .unwrap();
        let mut store = TemplateStore::new();
        store.insert("shell/hello.j2.sh", "echo hi");
        let err = manifest.assemble(&store).unwrap_err();
        assert!(err.to_string().contains("hello.sh has no executable"));
    }

    #[test]
    fn test_directory_override() {
        let manifest = AssetManifest::from_yaml(
            "{applicationName: python, executableName: python, directory: py, assets: [{name: a.py, template: ml/a.j2.py}]}",
        )
        .unwrap();
        let mut store = TemplateStore::new();
        store.insert("py/ml/a.j2.py", "import settings");
        let records = manifest.assemble(&store).unwrap();
        assert_eq!(records[0].content, "import settings");
    }

    #[test]
    fn test_catalog_order_and_unknown_application() {
        let catalog = AssetCatalog::builtin().unwrap();
        assert_eq!(catalog.application_names(), REGISTRATION_ORDER.to_vec());
        assert!(matches!(
            catalog.app_templates("exabyteml"),
            Err(TemplateError::UnknownApplication(_))
        ));
    }
}
