//! Runs in its own process so the process-wide dataset is still unloaded.
#![cfg(feature = "json")]

use countrydb_core::prelude::*;

const ATLANTIS: &str = r#"[{
    "name": {"common": "Atlantis", "official": "Kingdom of Atlantis"},
    "cca2": "AX", "cca3": "ATL", "region": "Oceania",
    "population": 1200, "capital": ["Poseidonis"],
    "flags": {"png": "https://example.org/atl.png"},
    "languages": {"atl": "Atlantean"}
}]"#;

#[test]
fn init_from_path_installs_the_custom_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("atlantis.json");
    std::fs::write(&path, ATLANTIS).unwrap();

    let installed = CountryDb::init_from_path(&path).unwrap();
    let loaded = CountryDb::load().unwrap();
    assert!(std::ptr::eq(installed, loaded));
    assert_eq!(loaded.countries().len(), 1);
    assert_eq!(load_all().unwrap().len(), 1);

    let atl = loaded.find_by_code("ax").unwrap();
    assert_eq!(atl.name(), "Atlantis");
    assert_eq!(loaded.find_by_code("atl"), Some(atl));
    assert_eq!(atl.languages_label(), "Atlantean");
    assert_eq!(loaded.regions(), vec!["Oceania".to_string()]);

    // The bundled dataset never replaces it, and a second install is refused.
    assert!(loaded.find_by_code("de").is_none());
    assert!(matches!(
        CountryDb::init_from_path(&path),
        Err(CountryDbError::AlreadyInitialized)
    ));
}
