//! Integration tests for the built-in asset catalog and the artifact.

use std::fs;

use flavors_core::builtin_registry;
use flavors_templates::{
    check_consistency, get_all_app_templates, AssetCatalog, PlaceholderScanner, TemplateArtifact,
    TemplateStore, REGISTRATION_ORDER,
};
use tempfile::tempdir;

#[test]
fn test_all_templates_are_complete() {
    let templates = get_all_app_templates().unwrap();
    assert!(!templates.is_empty());
    for template in &templates {
        assert!(template.is_complete(), "{}/{}", template.application_name, template.name);
    }
}

#[test]
fn test_aggregate_follows_registration_order() {
    let catalog = AssetCatalog::builtin().unwrap();
    let all = catalog.all_templates().unwrap();

    let mut expected = Vec::new();
    for app in REGISTRATION_ORDER {
        expected.extend(catalog.app_templates(app).unwrap());
    }
    assert_eq!(all, expected);

    let counts: Vec<_> = REGISTRATION_ORDER
        .iter()
        .map(|app| catalog.app_templates(app).unwrap().len())
        .collect();
    assert_eq!(counts, vec![27, 5, 10, 15, 3, 1]);
    assert_eq!(all.first().unwrap().name, "pw_scf.in");
    assert_eq!(all.last().unwrap().name, "nwchem_total_energy.inp");
}

#[test]
fn test_artifact_round_trip() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("templates.json");

    let artifact = TemplateArtifact::build(&AssetCatalog::builtin().unwrap()).unwrap();
    artifact.write(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(value["allTemplates"].is_array());

    let read = TemplateArtifact::read(&path).unwrap();
    assert_eq!(read.all_templates, get_all_app_templates().unwrap());
}

#[test]
fn test_builtin_catalogs_are_consistent() {
    let registry = builtin_registry().unwrap();
    let catalog = AssetCatalog::builtin().unwrap();
    let result = check_consistency(registry, &catalog).unwrap();
    assert!(result.valid, "{:?}", result.errors);
    assert_eq!(
        result.warnings,
        vec!["espresso: asset pw_scf_kpt_conv.in is not used by any flavor"]
    );
}

#[test]
fn test_vasp_hse_assets() {
    let catalog = AssetCatalog::builtin().unwrap();
    let vasp = catalog.app_templates("vasp").unwrap();
    let content = |name: &str| {
        vasp.iter()
            .find(|a| a.name == name)
            .map(|a| a.content.clone())
            .unwrap()
    };

    assert!(content("INCAR_HSE").starts_with(&content("INCAR")));
    assert!(content("INCAR_HSE").contains("LHFCALC = .TRUE."));
    assert!(content("INCAR_BANDS_HSE").starts_with(&content("INCAR_BANDS")));
}

#[test]
fn test_context_providers_are_normalized() {
    let catalog = AssetCatalog::builtin().unwrap();
    let nwchem = catalog.app_templates("nwchem").unwrap();
    assert_eq!(nwchem[0].context_provider_names(), vec!["NWChemInputDataManager"]);

    let json = serde_json::to_value(&nwchem[0]).unwrap();
    assert_eq!(
        json["contextProviders"],
        serde_json::json!([{"name": "NWChemInputDataManager"}])
    );
}

#[test]
fn test_catalog_from_assets_directory() {
    let temp = tempdir().unwrap();
    let embedded = TemplateStore::embedded();
    for path in embedded.paths() {
        let target = temp.path().join(path);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, embedded.get(path).unwrap()).unwrap();
    }
    fs::write(temp.path().join("nwchem/nwchem_total_energy.j2.inp"), "task dft energy\n").unwrap();

    let store = TemplateStore::load_dir(temp.path()).unwrap();
    assert_eq!(store.len(), embedded.len());

    let catalog = AssetCatalog::with_store(store).unwrap();
    let nwchem = catalog.app_templates("nwchem").unwrap();
    assert_eq!(nwchem[0].content, "task dft energy\n");
}

#[test]
fn test_placeholders_of_builtin_templates() {
    let scanner = PlaceholderScanner::new();
    let catalog = AssetCatalog::builtin().unwrap();
    let espresso = catalog.app_templates("espresso").unwrap();
    let scf = espresso.iter().find(|a| a.name == "pw_scf.in").unwrap();

    let names: Vec<_> = scanner.scan(&scf.content).into_iter().collect();
    assert_eq!(names, vec!["cutoffs", "input", "kgrid"]);
}
