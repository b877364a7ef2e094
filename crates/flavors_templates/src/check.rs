//! Cross-checks application trees against asset catalogs.

use std::collections::BTreeSet;

use tracing::debug;

use flavors_core::{AppRegistry, AssetRecord};

use crate::assets::AssetCatalog;
use crate::error::TemplateResult;

/// Outcome of a consistency check.
#[derive(Debug, Default)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Errors followed by warnings.
    pub fn issues(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .map(String::as_str)
    }
}

/// Check every application that has both a tree and assets.
///
/// A flavor input whose template does not name an asset of the same
/// application, or an asset bound to an executable the tree lacks, is an
/// error. Assets no flavor refers to are reported as warnings.
pub fn check_consistency(
    registry: &AppRegistry,
    catalog: &AssetCatalog,
) -> TemplateResult<CheckResult> {
    let mut result = CheckResult::new();

    for app_name in catalog.application_names() {
        let Ok(tree) = registry.get_app_tree(app_name) else {
            result.add_warning(format!("{app_name}: assets registered without a tree"));
            continue;
        };

        let assets = catalog.app_templates(app_name)?;
        let asset_names: BTreeSet<&str> = assets.iter().map(|a| a.name.as_str()).collect();
        let mut referenced = BTreeSet::new();

        for (executable, key, flavor) in tree.flavors() {
            for template in flavor.template_names() {
                if asset_names.contains(template) {
                    referenced.insert(template);
                } else {
                    result.add_error(format!(
                        "{app_name}/{executable}/{key}: input template {template} has no asset"
                    ));
                }
            }
        }

        for asset in &assets {
            check_asset(app_name, asset, &referenced, tree.contains_key(&asset.executable_name), &mut result);
        }

        debug!(
            "Checked {}: {} assets, {} referenced",
            app_name,
            assets.len(),
            referenced.len()
        );
    }

    Ok(result)
}

fn check_asset(
    app_name: &str,
    asset: &AssetRecord,
    referenced: &BTreeSet<&str>,
    executable_known: bool,
    result: &mut CheckResult,
) {
    if !executable_known {
        result.add_error(format!(
            "{app_name}: asset {} targets unknown executable {}",
            asset.name, asset.executable_name
        ));
    }
    if !referenced.contains(asset.name.as_str()) {
        result.add_warning(format!(
            "{app_name}: asset {} is not used by any flavor",
            asset.name
        ));
    }
}
