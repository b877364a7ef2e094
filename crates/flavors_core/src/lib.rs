//! # flavors_core
//!
//! Application trees, application data and the registry that serves them.
//!
//! An application (e.g. `espresso`, `vasp`) runs one or more executables;
//! each executable offers named flavors, which list the input files to
//! render together with the results, monitors and post-processors that
//! apply. Trees and data are declared in YAML manifests embedded in the
//! crate and expanded once into an [`AppRegistry`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use flavors_core::{get_app_data, get_app_tree};
//!
//! let tree = get_app_tree("espresso").unwrap();
//! let scf = tree.flavor("pw.x", "pw_scf").unwrap();
//! assert_eq!(scf.executable_name, "pw.x");
//!
//! let data = get_app_data("espresso").unwrap();
//! println!("{} {}", data.summary, data.default_version);
//! ```

pub mod allowed;
pub mod asset;
pub mod builtin;
pub mod data;
pub mod error;
pub mod provider;
pub mod registry;
pub mod tree;

pub use allowed::{
    allowed_monitors, allowed_post_processors, allowed_results, Monitor, MonitorDescriptor,
    PostProcessor, PostProcessorDescriptor, ALLOWED_RESULTS,
};
pub use asset::AssetRecord;
pub use builtin::{builtin_registry, get_app_data, get_app_tree};
pub use data::{AppData, VersionDescriptor};
pub use error::{CatalogError, CatalogResult};
pub use provider::{normalize_context_providers, ContextProviderRef, ContextProviderSpec};
pub use registry::{AppRegistry, AppRegistryBuilder};
pub use tree::{
    AppTree, Executable, ExecutableManifest, Flavor, FlavorManifest, FlavorMixin, InputRef,
    TreeManifest,
};
