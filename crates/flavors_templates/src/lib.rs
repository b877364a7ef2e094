//! # flavors_templates
//!
//! Input-file templates for every application, the manifests that bind
//! them to executables and context providers, and the build step that
//! aggregates them into a single JSON artifact.
//!
//! ## Example
//!
//! ```rust,no_run
//! use flavors_templates::{get_all_app_templates, AssetCatalog, TemplateArtifact};
//!
//! let templates = get_all_app_templates().unwrap();
//! println!("{} templates", templates.len());
//!
//! let catalog = AssetCatalog::builtin().unwrap();
//! let artifact = TemplateArtifact::build(&catalog).unwrap();
//! artifact.write(std::path::Path::new("build/templates.json")).unwrap();
//! ```

pub mod artifact;
pub mod assets;
pub mod check;
mod embedded;
pub mod error;
pub mod store;

pub use artifact::TemplateArtifact;
pub use assets::{
    get_all_app_templates, AssetCatalog, AssetDefinition, AssetManifest, TemplateSources,
    ASSET_MANIFESTS, REGISTRATION_ORDER,
};
pub use check::{check_consistency, CheckResult};
pub use error::{TemplateError, TemplateResult};
pub use store::{PlaceholderScanner, TemplateStore};
