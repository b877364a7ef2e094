//! Asset records: one renderable input file per record.

use serde::{Deserialize, Serialize};

use crate::provider::ContextProviderRef;

/// A template ready for rendering, tagged with the application and
/// executable it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Template text with placeholders
    pub content: String,
    /// File name the rendered content is written under
    pub name: String,
    pub context_providers: Vec<ContextProviderRef>,
    pub application_name: String,
    pub executable_name: String,
}

impl AssetRecord {
    /// Names of the context providers feeding this template.
    pub fn context_provider_names(&self) -> Vec<&str> {
        self.context_providers.iter().map(|p| p.name.as_str()).collect()
    }

    /// Whether every identity and content field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.content.is_empty()
            && !self.name.is_empty()
            && !self.application_name.is_empty()
            && !self.executable_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        let record = AssetRecord {
            content: "task dft energy".to_string(),
            name: "nwchem_total_energy.inp".to_string(),
            context_providers: vec![ContextProviderRef::new("NWChemInputDataManager")],
            application_name: "nwchem".to_string(),
            executable_name: "nwchem".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "applicationName",
                "content",
                "contextProviders",
                "executableName",
                "name"
            ]
        );
        assert!(record.is_complete());
        assert_eq!(record.context_provider_names(), vec!["NWChemInputDataManager"]);
    }
}
