//! Context provider references.
//!
//! Asset manifests list context providers either by plain name or as a
//! structured descriptor. Both shapes are accepted when deserializing and
//! collapsed into [`ContextProviderRef`] once, when an asset is assembled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A normalized reference to an external component that supplies template
/// values at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextProviderRef {
    pub name: String,
    /// Any further fields of a structured descriptor, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ContextProviderRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// A context provider as written in a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextProviderSpec {
    Name(String),
    Descriptor(ContextProviderRef),
}

impl ContextProviderSpec {
    pub fn name(&self) -> &str {
        match self {
            ContextProviderSpec::Name(name) => name,
            ContextProviderSpec::Descriptor(descriptor) => &descriptor.name,
        }
    }

    pub fn normalize(&self) -> ContextProviderRef {
        match self {
            ContextProviderSpec::Name(name) => ContextProviderRef::new(name.clone()),
            ContextProviderSpec::Descriptor(descriptor) => descriptor.clone(),
        }
    }
}

impl From<&str> for ContextProviderSpec {
    fn from(name: &str) -> Self {
        ContextProviderSpec::Name(name.to_string())
    }
}

impl From<ContextProviderRef> for ContextProviderSpec {
    fn from(descriptor: ContextProviderRef) -> Self {
        ContextProviderSpec::Descriptor(descriptor)
    }
}

/// Normalize a provider list: plain names become `{name}` descriptors,
/// descriptors pass through unchanged. Length and order are preserved.
pub fn normalize_context_providers(specs: &[ContextProviderSpec]) -> Vec<ContextProviderRef> {
    specs.iter().map(ContextProviderSpec::normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_become_descriptors() {
        let specs = vec![ContextProviderSpec::from("X"), ContextProviderSpec::from("Y")];
        let normalized = normalize_context_providers(&specs);
        assert_eq!(
            normalized,
            vec![ContextProviderRef::new("X"), ContextProviderRef::new("Y")]
        );
    }

    #[test]
    fn test_descriptors_pass_through() {
        let descriptor = ContextProviderRef::new("KGridFormDataManager")
            .with_field("isEdited", serde_json::json!(true));
        let specs = vec![ContextProviderSpec::from(descriptor.clone())];
        assert_eq!(normalize_context_providers(&specs), vec![descriptor]);
    }

    #[test]
    fn test_empty_list() {
        assert!(normalize_context_providers(&[]).is_empty());
    }

    #[test]
    fn test_mixed_yaml_list() {
        let specs: Vec<ContextProviderSpec> = serde_yaml::from_str(
            r#"
- QEPWXInputDataManager
- name: PlanewaveCutoffDataManager
  extraData: {}
"#,
        )
        .unwrap();

        let normalized = normalize_context_providers(&specs);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0], ContextProviderRef::new("QEPWXInputDataManager"));
        assert_eq!(normalized[1].name, "PlanewaveCutoffDataManager");
        assert!(normalized[1].extra.contains_key("extraData"));
    }

    #[test]
    fn test_serializes_flat() {
        let value = serde_json::to_value(ContextProviderRef::new("NWChemInputDataManager")).unwrap();
        assert_eq!(value, serde_json::json!({"name": "NWChemInputDataManager"}));
    }
}
