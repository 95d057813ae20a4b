use std::io::Write;

use paramflow_rust::errors::CatalogError;
use paramflow_rust::Catalog;

#[test]
fn demo_catalog_loads_from_disk() {
    let catalog = Catalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/catalog.json")).expect("demo catalog");
    assert_eq!(catalog.job_names().collect::<Vec<_>>(), vec!["team/deploy", "team/build", "ops/rotate-keys"]);
    let build = catalog.get("team/build").unwrap();
    assert_eq!(build.definition.parameters.len(), 4);
    assert!(build.definition.parameter("notes").unwrap().is_required());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Catalog::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let path = std::env::temp_dir().join(format!("paramflow-bad-{}.json", std::process::id()));
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(b"{ \"jobs\": [ { \"fullName\": ").unwrap();
    drop(f);
    let err = Catalog::load(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn duplicate_parameter_names_are_rejected() {
    let raw = r#"{"jobs":[{"fullName":"deploy","parameters":[
        {"type":"StringParameterDefinition","name":"env"},
        {"type":"ChoiceParameterDefinition","name":" env ","choices":["a"]}]}]}"#;
    match Catalog::from_json_str(raw).unwrap_err() {
        CatalogError::DuplicateParameter { job, parameter } => {
            assert_eq!(job, "deploy");
            assert_eq!(parameter, "env");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_parameter_name_is_rejected() {
    let raw = r#"{"jobs":[{"fullName":"deploy","parameters":[{"type":"StringParameterDefinition","name":"  "}]}]}"#;
    assert!(matches!(Catalog::from_json_str(raw).unwrap_err(), CatalogError::EmptyParameterName { .. }));
}

#[test]
fn duplicate_jobs_are_rejected() {
    let raw = r#"{"jobs":[{"fullName":"a/b"},{"fullName":"a/b"}]}"#;
    assert!(matches!(Catalog::from_json_str(raw).unwrap_err(), CatalogError::DuplicateJob(name) if name == "a/b"));
}

#[test]
fn unknown_provider_kind_is_a_json_error() {
    let raw = r#"{"jobs":[{"fullName":"a","parameters":[
        {"type":"ChoiceParameter","name":"x","provider":{"kind":"groovy","script":"return []"}}]}]}"#;
    assert!(matches!(Catalog::from_json_str(raw).unwrap_err(), CatalogError::Json(_)));
}
