use crate::assert_equivalent_graphql_request;
use crate::fixtures_dir;
use crate::read_fixture;
use crate::run_scenario;
use crate::Scenario;
use libgraphql_client::PrintOptions;

fn build(name: &str) -> libgraphql_client::operation::Document {
    let scenario = Scenario::find(name).unwrap();
    (scenario.build)().unwrap()
}

#[test]
fn scenario_names_are_unique() {
    let mut names = Scenario::all().iter().map(|s| s.name).collect::<Vec<_>>();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn find_unknown_scenario() {
    assert!(Scenario::find("no_such_scenario").is_none());
}

#[test]
fn variables_default_value_exact_text() {
    assert_eq!(
        build("variables_default_value").build(),
        "query($name: String = \"Lee Byron\") {\n  helloYou(name: $name)\n}",
    );
}

#[test]
fn variables_in_input_object_keeps_prop_order() {
    let text = build("variables_in_input_object").build();
    assert!(text.contains(
        "basicScalarHolder(basicScalarHolder: \
        {bool: $varBool, int: $varInt, float: $varFloat, string: $varString, iD: $varID})",
    ));
}

#[test]
fn scalar_literals_exact_text() {
    assert_eq!(
        build("scalar_literals").build(),
        concat!(
            "query {\n",
            "  search(text: \"say \\\"hi\\\"\\n\", limit: 10, ratio: 0.5, exact: true, ",
            "cursor: null, order: DESC, tags: [\"a\", \"b\"], ",
            "filter: {minStars: 4, owner: {login: \"octocat\"}}) {\n",
            "    id\n",
            "  }\n",
            "}",
        ),
    );
}

#[test]
fn every_print_style_matches_the_fixture() {
    let styles = [
        PrintOptions::pretty(),
        PrintOptions::pretty().with_indent_width(4),
        PrintOptions::compact(),
        PrintOptions::compact().with_query_shorthand(true),
    ];
    for scenario in Scenario::all() {
        let expected = read_fixture(fixtures_dir(), scenario.fixture).unwrap();
        let document = (scenario.build)().unwrap();
        for options in &styles {
            assert_equivalent_graphql_request(&expected, &document.build_with(options));
        }
    }
}

#[test]
fn broken_fixture_path_fails_the_scenario() {
    let scenario = Scenario {
        fixture: "core/missing.graphql",
        ..*Scenario::find("variables_flat").unwrap()
    };
    let result = run_scenario(fixtures_dir(), &scenario);
    assert!(!result.passed);
    assert!(result.error_message.unwrap().contains("is not a file"));
}

#[test]
fn mismatched_fixture_fails_the_scenario() {
    let scenario = Scenario {
        fixture: "core/variablesFlat.graphql",
        ..*Scenario::find("variables_default_value").unwrap()
    };
    let result = run_scenario(fixtures_dir(), &scenario);
    assert!(!result.passed);
    assert!(result.error_message.unwrap().contains("not equivalent"));
}
