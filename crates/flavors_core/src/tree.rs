//! Application trees.
//!
//! A tree is described by a [`TreeManifest`] (executables, their flavors
//! and optional flavor mixins) and expanded into an [`AppTree`] whose
//! flavors know which application and executable they belong to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::allowed::{is_allowed_result, Monitor, PostProcessor, ALLOWED_RESULTS};
use crate::error::{CatalogError, CatalogResult};

/// Reference from a flavor to one of its input files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRef {
    /// File name the rendered input is written under
    pub name: String,
    /// Asset to render; defaults to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
}

impl InputRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template_name: None,
        }
    }

    pub fn with_template(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = Some(template_name.into());
        self
    }

    /// Name of the asset that provides this input's content.
    pub fn template(&self) -> &str {
        match self.template_name.as_deref() {
            Some(template_name) if !template_name.is_empty() => template_name,
            _ => &self.name,
        }
    }
}

/// A flavor as written in a tree manifest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorManifest {
    #[serde(default)]
    pub input: Vec<InputRef>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub monitors: Vec<Monitor>,
    #[serde(default)]
    pub post_processors: Vec<PostProcessor>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_multi_material: bool,
}

/// An executable as written in a tree manifest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutableManifest {
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub advanced_compute_options: bool,
    #[serde(default)]
    pub monitors: Vec<Monitor>,
    /// Explicit result keys
    #[serde(default)]
    pub results: Option<Vec<String>>,
    /// Every allowed result except these
    #[serde(default)]
    pub results_excluding: Option<Vec<String>>,
    #[serde(default)]
    pub post_processors: Vec<PostProcessor>,
    #[serde(default)]
    pub flavors: BTreeMap<String, FlavorManifest>,
}

impl ExecutableManifest {
    fn resolve_results(&self, application: &str, executable: &str) -> CatalogResult<Vec<String>> {
        match (&self.results, &self.results_excluding) {
            (Some(_), Some(_)) => Err(CatalogError::invalid(
                application,
                format!("executable {executable} sets both results and resultsExcluding"),
            )),
            (Some(results), None) => Ok(results.clone()),
            (None, Some(excluded)) => Ok(ALLOWED_RESULTS
                .iter()
                .filter(|key| !excluded.iter().any(|e| e == *key))
                .map(|key| key.to_string())
                .collect()),
            (None, None) => Ok(Vec::new()),
        }
    }
}

/// Derives extra flavors from existing ones by pointing one input at a
/// suffixed template, e.g. `vasp` -> `vasp_hse` rendering `INCAR_HSE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorMixin {
    /// Suffix appended to flavor keys and template names
    pub name: String,
    pub executable: String,
    /// Base flavors to derive from
    pub flavors: Vec<String>,
    /// Input whose template is swapped
    #[serde(default = "default_mixin_input")]
    pub input: String,
}

fn default_mixin_input() -> String {
    "INCAR".to_string()
}

impl FlavorMixin {
    fn apply(
        &self,
        application: &str,
        flavors: &mut BTreeMap<String, FlavorManifest>,
    ) -> CatalogResult<()> {
        let mut derived = Vec::with_capacity(self.flavors.len());

        for key in &self.flavors {
            let base = flavors.get(key).ok_or_else(|| {
                CatalogError::invalid(
                    application,
                    format!("mixin {} refers to unknown flavor {}", self.name, key),
                )
            })?;

            let mut flavor = base.clone();
            flavor.is_default = false;
            for input in flavor.input.iter_mut().filter(|i| i.name == self.input) {
                input.template_name = Some(format!("{}_{}", input.template(), self.name));
            }
            derived.push((format!("{}_{}", key, self.name).to_lowercase(), flavor));
        }

        for (key, flavor) in derived {
            debug!("Derived flavor {} via mixin {}", key, self.name);
            flavors.insert(key, flavor);
        }
        Ok(())
    }
}

/// Tree manifest for one application.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeManifest {
    #[serde(default)]
    pub executables: BTreeMap<String, ExecutableManifest>,
    #[serde(default)]
    pub mixins: Vec<FlavorMixin>,
}

impl TreeManifest {
    pub fn from_yaml(source_name: &str, yaml: &str) -> CatalogResult<Self> {
        serde_yaml::from_str(yaml).map_err(|error| CatalogError::Yaml {
            source_name: source_name.to_string(),
            error,
        })
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A flavor that carries its owning application and executable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flavor {
    pub input: Vec<InputRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<String>,
    pub monitors: Vec<Monitor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_processors: Vec<PostProcessor>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_multi_material: bool,
    pub application_name: String,
    pub executable_name: String,
}

impl Flavor {
    pub fn from_manifest(
        application_name: &str,
        executable_name: &str,
        manifest: &FlavorManifest,
    ) -> Self {
        Self {
            input: manifest.input.clone(),
            results: manifest.results.clone(),
            monitors: manifest.monitors.clone(),
            post_processors: manifest.post_processors.clone(),
            is_default: manifest.is_default,
            is_multi_material: manifest.is_multi_material,
            application_name: application_name.to_string(),
            executable_name: executable_name.to_string(),
        }
    }

    /// Asset names this flavor renders, in input order.
    pub fn template_names(&self) -> Vec<&str> {
        self.input.iter().map(InputRef::template).collect()
    }
}

/// An executable with expanded flavors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Executable {
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub advanced_compute_options: bool,
    pub monitors: Vec<Monitor>,
    pub results: Vec<String>,
    pub post_processors: Vec<PostProcessor>,
    pub flavors: BTreeMap<String, Flavor>,
}

impl Executable {
    /// The flavor flagged as default, falling back to the first one.
    pub fn default_flavor(&self) -> Option<(&str, &Flavor)> {
        self.flavors
            .iter()
            .find(|(_, flavor)| flavor.is_default)
            .or_else(|| self.flavors.iter().next())
            .map(|(key, flavor)| (key.as_str(), flavor))
    }
}

/// Expanded tree of one application, keyed by executable name.
#[derive(Debug, Clone, PartialEq)]
pub struct AppTree {
    application_name: String,
    executables: BTreeMap<String, Executable>,
}

impl Serialize for AppTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.executables.serialize(serializer)
    }
}

impl AppTree {
    /// Expand a manifest: apply mixins, resolve result lists and stamp
    /// every flavor with its application and executable names.
    pub fn expand(application_name: &str, manifest: &TreeManifest) -> CatalogResult<Self> {
        let mut manifest = manifest.clone();
        for mixin in &manifest.mixins {
            let executable = manifest.executables.get_mut(&mixin.executable).ok_or_else(|| {
                CatalogError::invalid(
                    application_name,
                    format!("mixin {} refers to unknown executable {}", mixin.name, mixin.executable),
                )
            })?;
            mixin.apply(application_name, &mut executable.flavors)?;
        }

        let mut executables = BTreeMap::new();
        for (executable_name, executable) in &manifest.executables {
            let results = executable.resolve_results(application_name, executable_name)?;

            let flavors: BTreeMap<String, Flavor> = executable
                .flavors
                .iter()
                .map(|(key, flavor)| {
                    (
                        key.clone(),
                        Flavor::from_manifest(application_name, executable_name, flavor),
                    )
                })
                .collect();

            let declared = results
                .iter()
                .map(|r| (None, r))
                .chain(flavors.iter().flat_map(|(key, f)| f.results.iter().map(move |r| (Some(key), r))));
            for (flavor, result) in declared {
                if !is_allowed_result(result) {
                    let location = match flavor {
                        Some(flavor) => format!("flavor {executable_name}/{flavor}"),
                        None => format!("executable {executable_name}"),
                    };
                    return Err(CatalogError::invalid(
                        application_name,
                        format!("{location} declares unknown result {result}"),
                    ));
                }
            }

            executables.insert(
                executable_name.clone(),
                Executable {
                    is_default: executable.is_default,
                    advanced_compute_options: executable.advanced_compute_options,
                    monitors: executable.monitors.clone(),
                    results,
                    post_processors: executable.post_processors.clone(),
                    flavors,
                },
            );
        }

        debug!(
            "Expanded tree for {} ({} executables)",
            application_name,
            executables.len()
        );

        Ok(Self {
            application_name: application_name.to_string(),
            executables,
        })
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn get(&self, executable: &str) -> Option<&Executable> {
        self.executables.get(executable)
    }

    pub fn contains_key(&self, executable: &str) -> bool {
        self.executables.contains_key(executable)
    }

    pub fn executable_names(&self) -> Vec<&str> {
        self.executables.keys().map(String::as_str).collect()
    }

    pub fn executables(&self) -> impl Iterator<Item = (&str, &Executable)> {
        self.executables.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every flavor of every executable as `(executable, flavor key, flavor)`.
    pub fn flavors(&self) -> impl Iterator<Item = (&str, &str, &Flavor)> {
        self.executables.iter().flat_map(|(executable, node)| {
            node.flavors
                .iter()
                .map(move |(key, flavor)| (executable.as_str(), key.as_str(), flavor))
        })
    }

    pub fn flavor(&self, executable: &str, flavor: &str) -> Option<&Flavor> {
        self.executables.get(executable)?.flavors.get(flavor)
    }

    /// The executable flagged as default, falling back to the first one.
    pub fn default_executable(&self) -> Option<(&str, &Executable)> {
        self.executables
            .iter()
            .find(|(_, executable)| executable.is_default)
            .or_else(|| self.executables.iter().next())
            .map(|(key, executable)| (key.as_str(), executable))
    }

    pub fn len(&self) -> usize {
        self.executables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executables.is_empty()
    }
}
