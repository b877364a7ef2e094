//! Built-in catalogs shipped with the crate.
//!
//! Tree and data manifests are embedded at compile time, so lookups never
//! touch the file system.

use std::sync::OnceLock;

use crate::data::AppData;
use crate::error::{CatalogError, CatalogResult};
use crate::registry::AppRegistry;
use crate::tree::{AppTree, TreeManifest};

/// Embedded tree manifests, keyed by application name.
pub const TREE_MANIFESTS: &[(&str, &str)] = &[
    ("espresso", include_str!("../catalog/trees/espresso.yaml")),
    ("jupyterLab", include_str!("../catalog/trees/jupyterLab.yaml")),
    ("exabyteml", include_str!("../catalog/trees/exabyteml.yaml")),
    ("nwchem", include_str!("../catalog/trees/nwchem.yaml")),
    ("python", include_str!("../catalog/trees/python.yaml")),
    ("shell", include_str!("../catalog/trees/shell.yaml")),
    ("vasp", include_str!("../catalog/trees/vasp.yaml")),
];

/// Embedded data records, keyed by application name.
pub const DATA_MANIFESTS: &[(&str, &str)] = &[
    ("espresso", include_str!("../catalog/data/espresso.yaml")),
    ("jupyterLab", include_str!("../catalog/data/jupyterLab.yaml")),
    ("ml", include_str!("../catalog/data/ml.yaml")),
    ("nwchem", include_str!("../catalog/data/nwchem.yaml")),
    ("python", include_str!("../catalog/data/python.yaml")),
    ("shell", include_str!("../catalog/data/shell.yaml")),
    ("vasp", include_str!("../catalog/data/vasp.yaml")),
];

impl AppRegistry {
    /// Build a registry from the embedded catalogs.
    pub fn builtin() -> CatalogResult<Self> {
        let mut builder = AppRegistry::builder();
        for (app_name, yaml) in TREE_MANIFESTS {
            builder = builder.tree(*app_name, TreeManifest::from_yaml(app_name, yaml)?);
        }
        for (app_name, yaml) in DATA_MANIFESTS {
            builder = builder.data(*app_name, AppData::from_yaml(app_name, yaml)?);
        }
        builder.build()
    }
}

static BUILTIN: OnceLock<Result<AppRegistry, String>> = OnceLock::new();

/// The process-wide built-in registry, built on first use.
///
/// A failed build is cached as its message. Every call then reports it as
/// `InvalidCatalog` for application `builtin`, whatever the original
/// variant was. Use [`AppRegistry::builtin`] to get the typed error.
pub fn builtin_registry() -> CatalogResult<&'static AppRegistry> {
    cached_registry(BUILTIN.get_or_init(|| AppRegistry::builtin().map_err(|e| e.to_string())))
}

fn cached_registry(cached: &Result<AppRegistry, String>) -> CatalogResult<&AppRegistry> {
    cached
        .as_ref()
        .map_err(|message| CatalogError::invalid("builtin", message.clone()))
}

/// Get the expanded tree of a built-in application.
pub fn get_app_tree(app_name: &str) -> CatalogResult<&'static AppTree> {
    builtin_registry()?.get_app_tree(app_name)
}

/// Get the data record of a built-in application.
pub fn get_app_data(app_name: &str) -> CatalogResult<&'static AppData> {
    builtin_registry()?.get_app_data(app_name)
}
