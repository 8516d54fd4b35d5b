use crate::commands::verify::find_unclaimed_fixtures;
use libgraphql_client_tck::fixtures_dir;

#[test]
fn bundled_fixtures_are_all_claimed() {
    let unclaimed = find_unclaimed_fixtures(fixtures_dir()).unwrap();
    assert!(unclaimed.is_empty(), "unclaimed fixtures: {unclaimed:#?}");
}

#[test]
fn stray_fixture_is_reported() {
    let dir = std::env::temp_dir().join(format!(
        "graphql-tck-verify-{}",
        std::process::id(),
    ));
    std::fs::create_dir_all(dir.join("core")).unwrap();
    std::fs::write(dir.join("core/variablesFlat.graphql"), "{ a }").unwrap();
    std::fs::write(dir.join("core/stray.graphql"), "{ a }").unwrap();
    std::fs::write(dir.join("core/notes.txt"), "ignored").unwrap();

    let unclaimed = find_unclaimed_fixtures(&dir);
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(
        unclaimed.unwrap(),
        vec![std::path::PathBuf::from("core/stray.graphql")],
    );
}
