//! Template text store.
//!
//! Named text blobs keyed by their path relative to the assets root, e.g.
//! `espresso/pw_scf.j2.in`. The built-in store is embedded at compile
//! time; [`TemplateStore::load_dir`] reads the same layout from disk for
//! packaging edited templates.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::embedded::EMBEDDED_TEMPLATES;
use crate::error::{TemplateError, TemplateResult};

/// Named template blobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateStore {
    templates: BTreeMap<String, String>,
    root: Option<PathBuf>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The templates compiled into this crate.
    pub fn embedded() -> Self {
        let mut store = Self::new();
        for (path, content) in EMBEDDED_TEMPLATES {
            store.insert(*path, *content);
        }
        store
    }

    /// Load every file under `root`, keyed by its `/`-separated relative path.
    pub fn load_dir(root: impl Into<PathBuf>) -> TemplateResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(TemplateError::MissingDirectory(root));
        }

        let mut store = Self {
            templates: BTreeMap::new(),
            root: Some(root.clone()),
        };

        for entry in WalkDir::new(&root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Some(key) = relative_key(&root, path) else {
                warn!("Skipping template outside of {:?}: {:?}", root, path);
                continue;
            };

            debug!("Loading template {}", key);
            let content = fs::read_to_string(path)?;
            store.templates.insert(key, content);
        }

        info!("Loaded {} templates from {:?}", store.len(), root);
        Ok(store)
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(path.into(), content.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.templates.get(path).map(String::as_str)
    }

    /// Get a template, failing when it is absent.
    pub fn require(&self, path: &str) -> TemplateResult<&str> {
        self.get(path)
            .ok_or_else(|| TemplateError::NotFound(self.describe(path)))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.templates.contains_key(path)
    }

    pub fn paths(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Directory the store was loaded from, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn describe(&self, path: &str) -> String {
        match &self.root {
            Some(root) => root.join(path).display().to_string(),
            None => path.to_string(),
        }
    }
}

fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Lists the context variables a template reads.
///
/// Only top-level names are reported (`kgrid` for `{{ kgrid.dimensions }}`).
/// Loop variables and `{% raw %}` sections, which hold placeholders for
/// the job runtime, are skipped.
pub struct PlaceholderScanner {
    raw_block: Regex,
    for_loop: Regex,
    expression: Regex,
}

impl Default for PlaceholderScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderScanner {
    pub fn new() -> Self {
        Self {
            raw_block: Regex::new(r"(?s)\{%-?\s*raw\s*-?%\}.*?\{%-?\s*endraw\s*-?%\}")
                .expect("raw block pattern is valid"),
            for_loop: Regex::new(r"\{%-?\s*for\s+([A-Za-z_][A-Za-z0-9_]*)\s+in\s+([A-Za-z_][A-Za-z0-9_]*)")
                .expect("for loop pattern is valid"),
            expression: Regex::new(r"\{\{-?\s*([A-Za-z_][A-Za-z0-9_]*)")
                .expect("expression pattern is valid"),
        }
    }

    pub fn scan(&self, content: &str) -> BTreeSet<String> {
        let content = self.raw_block.replace_all(content, "");

        let mut loop_vars = BTreeSet::from(["loop".to_string()]);
        let mut names = BTreeSet::new();
        for caps in self.for_loop.captures_iter(&content) {
            loop_vars.insert(caps[1].to_string());
            names.insert(caps[2].to_string());
        }

        for caps in self.expression.captures_iter(&content) {
            let name = &caps[1];
            if !loop_vars.contains(name) {
                names.insert(name.to_string());
            }
        }

        names.retain(|name| !loop_vars.contains(name));
        names
    }
}
