use std::fs;

use ladder_content::ContentFactory;
use ladder_core::{LadderKind, LadderTable};

#[test]
fn empty_directory_falls_back_to_bundled_content() {
    let dir = tempfile::tempdir().unwrap();
    let factory = ContentFactory::new(dir.path());

    assert!(factory.load_config().unwrap().combine_buffs);
    assert_eq!(factory.load_table().unwrap(), LadderTable::standard());

    let registry = factory.build_registry().unwrap();
    assert_eq!(registry.kinds().count(), LadderKind::COUNT);
}

#[test]
fn split_config_from_file_reaches_the_registry() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "combine_buffs = false\n").unwrap();

    let registry = ContentFactory::new(dir.path()).build_registry().unwrap();
    assert!(!registry.config().combine_buffs);

    let upper = registry.effective_ladder(LadderKind::Def, 1).unwrap();
    assert_eq!(upper.min_tier(), 0);
}

#[test]
fn toml_table_is_loaded_when_present() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("ladders.toml"),
        r#"
        [[ladders]]
        kind = "afraid"
        positions = [0, 18, 19]
        aliases = ["Scared"]
        "#,
    )
    .unwrap();

    let registry = ContentFactory::new(dir.path()).build_registry().unwrap();
    assert_eq!(registry.lookup("scared").unwrap(), LadderKind::Afraid);
    assert_eq!(registry.ladder(LadderKind::Afraid).unwrap().max_tier(), 2);
    assert!(registry.ladder(LadderKind::Sad).is_err());
}

#[test]
fn invalid_table_is_reported_with_its_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("ladders.ron"),
        "(ladders: [(kind: sad, positions: [10, 11])])",
    )
    .unwrap();

    let error = ContentFactory::new(dir.path())
        .build_registry()
        .unwrap_err()
        .to_string();
    assert!(error.contains("Invalid ladder table"));
    assert!(error.contains("no neutral position"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ladders.json");
    fs::write(&path, "{}").unwrap();
    assert!(ladder_content::LadderTableLoader::load(&path).is_err());
}
