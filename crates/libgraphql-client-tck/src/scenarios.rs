use libgraphql_client::directive;
use libgraphql_client::directive_with_args;
use libgraphql_client::enum_value;
use libgraphql_client::input_object;
use libgraphql_client::operation::Definition;
use libgraphql_client::operation::Document;
use libgraphql_client::operation::Field;
use libgraphql_client::operation::FragmentDefinition;
use libgraphql_client::operation::MUTATION;
use libgraphql_client::operation::QUERY;
use libgraphql_client::operation::SUBSCRIPTION;
use libgraphql_client::operation::Variables;
use libgraphql_client::operation::aliased_field;
use libgraphql_client::operation::arg;
use libgraphql_client::operation::args;
use libgraphql_client::operation::document;
use libgraphql_client::operation::field;
use libgraphql_client::operation::field_with;
use libgraphql_client::operation::fragment_spread;
use libgraphql_client::operation::inline_fragment;
use libgraphql_client::operation::named_operation;
use libgraphql_client::operation::operation;
use libgraphql_client::operation::var;
use libgraphql_client::operation::var_with_default;
use libgraphql_client::operation::vars;
use libgraphql_client::prop;
use libgraphql_client::types::GQL_BOOL;
use libgraphql_client::types::GQL_FLOAT;
use libgraphql_client::types::GQL_ID;
use libgraphql_client::types::GQL_INT;
use libgraphql_client::types::GQL_STRING;
use libgraphql_client::types::list;
use libgraphql_client::types::non_null;
use libgraphql_client::DuplicateNameError;
use libgraphql_client::Value;

type BuildResult = std::result::Result<Document, DuplicateNameError>;

/// One conformance case: a document built with the client API, and the
/// fixture (relative to the fixtures directory) it must be equivalent to.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub build: fn() -> BuildResult,
    pub fixture: &'static str,
    pub name: &'static str,
}
impl Scenario {
    pub fn all() -> &'static [Scenario] {
        SCENARIOS
    }

    pub fn find(name: &str) -> Option<&'static Scenario> {
        SCENARIOS.iter().find(|scenario| scenario.name == name)
    }
}

static SCENARIOS: &[Scenario] = &[
    Scenario {
        build: variables_default_value,
        fixture: "core/variablesDefaultValue.graphql",
        name: "variables_default_value",
    },
    Scenario {
        build: variables_flat,
        fixture: "core/variablesFlat.graphql",
        name: "variables_flat",
    },
    Scenario {
        build: variables_in_input_object,
        fixture: "core/variablesInInputObject.graphql",
        name: "variables_in_input_object",
    },
    Scenario {
        build: variables_arrays,
        fixture: "core/variablesArrays.graphql",
        name: "variables_arrays",
    },
    Scenario {
        build: scalar_literals,
        fixture: "core/scalarLiterals.graphql",
        name: "scalar_literals",
    },
    Scenario {
        build: aliases_and_directives,
        fixture: "core/aliasesAndDirectives.graphql",
        name: "aliases_and_directives",
    },
    Scenario {
        build: fragments,
        fixture: "core/fragments.graphql",
        name: "fragments",
    },
    Scenario {
        build: multiple_operations,
        fixture: "core/multipleOperations.graphql",
        name: "multiple_operations",
    },
];

fn variables_default_value() -> BuildResult {
    let var_name = var_with_default("name", GQL_STRING, "Lee Byron");

    document([operation(
        QUERY,
        vars([var_name.clone()])?,
        [field_with("helloYou", args([arg("name", &var_name)])?, [])],
    )])
}

fn variables_flat() -> BuildResult {
    let var_bool = var("varBool", non_null(GQL_BOOL));
    let var_double = var("varDouble", non_null(GQL_FLOAT));
    let var_string = var("varString", non_null(GQL_STRING));

    document([operation(
        QUERY,
        vars([var_bool.clone(), var_double.clone(), var_string.clone()])?,
        [field_with(
            "withArgWithSubField",
            args([
                arg("aString", &var_string),
                arg("aDouble", &var_double),
                arg("aBool", &var_bool),
            ])?,
            [field("bool"), field("double"), field("string")],
        )],
    )])
}

fn variables_in_input_object() -> BuildResult {
    let var_bool = var("varBool", non_null(GQL_BOOL));
    let var_int = var("varInt", non_null(GQL_INT));
    let var_float = var("varFloat", non_null(GQL_FLOAT));
    let var_string = var("varString", non_null(GQL_STRING));
    let var_id = var("varID", GQL_ID);

    let holder = input_object([
        prop("bool", &var_bool),
        prop("int", &var_int),
        prop("float", &var_float),
        prop("string", &var_string),
        prop("iD", &var_id),
    ])?;

    document([operation(
        QUERY,
        vars([var_bool, var_int, var_float, var_string, var_id])?,
        [field_with(
            "basicScalarHolder",
            args([arg("basicScalarHolder", holder)])?,
            [
                field("bool"),
                field("int"),
                field("float"),
                field("string"),
                field("iD"),
            ],
        )],
    )])
}

fn variables_arrays() -> BuildResult {
    let var_int_1 = var("varInt_1", list(GQL_INT));
    let var_int_1_bang = var("varInt_1_bang", non_null(list(GQL_INT)));
    let var_int_bang_1 = var("varInt_bang_1", list(non_null(GQL_INT)));
    let var_int_1_2 = var("varInt_1_2", list(list(GQL_INT)));
    let var_int_1_2_3 = var("varInt_1_2_3", list(list(list(GQL_INT))));
    let var_int_1_bang_2_3_bang = var(
        "varInt_1_bang_2_3_bang",
        non_null(list(list(non_null(list(GQL_INT))))),
    );
    let var_int_bang_1_bang_2_bang_3_bang = var(
        "varInt_bang_1_bang_2_bang_3_bang",
        non_null(list(non_null(list(non_null(list(non_null(GQL_INT))))))),
    );

    let holder = input_object([
        prop("int_1", &var_int_1),
        prop("int_1_2", &var_int_1_2),
        prop("int_1_2_3", &var_int_1_2_3),
        prop("int_1_bang", &var_int_1_bang),
        prop("int_bang_1", &var_int_bang_1),
        prop("int_1_bang_2_3_bang", &var_int_1_bang_2_3_bang),
        prop("int_bang_1_bang_2_bang_3_bang", &var_int_bang_1_bang_2_bang_3_bang),
    ])?;

    document([operation(
        MUTATION,
        vars([
            var_int_1,
            var_int_1_2,
            var_int_1_2_3,
            var_int_1_bang,
            var_int_bang_1,
            var_int_1_bang_2_3_bang,
            var_int_bang_1_bang_2_bang_3_bang,
        ])?,
        [field_with(
            "nestedArraysHolder",
            args([arg("nestedArraysHolder", holder)])?,
            [
                field("int_1"),
                field("int_1_2"),
                field("int_1_2_3"),
                field("int_1_bang"),
                field("int_1_bang_2_3_bang"),
                field("int_bang_1"),
                field("int_bang_1_bang_2_bang_3_bang"),
            ],
        )],
    )])
}

fn scalar_literals() -> BuildResult {
    let filter = input_object([
        prop("minStars", 4),
        prop("owner", input_object([prop("login", "octocat")])?),
    ])?;

    document([operation(
        QUERY,
        Variables::empty(),
        [field_with(
            "search",
            args([
                arg("text", "say \"hi\"\n"),
                arg("limit", 10),
                arg("ratio", 0.5),
                arg("exact", true),
                arg("cursor", Value::Null),
                arg("order", enum_value("DESC")),
                arg("tags", vec!["a", "b"]),
                arg("filter", filter),
            ])?,
            [field("id")],
        )],
    )])
}

fn aliases_and_directives() -> BuildResult {
    let with_friends = var_with_default("withFriends", GQL_BOOL, false);
    let include_if = directive_with_args(
        "include",
        args([arg("if", &with_friends)])?,
    );
    let skip_if = directive_with_args(
        "skip",
        args([arg("if", &with_friends)])?,
    );

    let left = Field::builder("hero")
        .alias("leftComparison")
        .add_argument(arg("episode", enum_value("EMPIRE")))?
        .add_directive(include_if)
        .add_selection(field("name"))
        .build();
    let right = aliased_field(
        "rightComparison",
        "hero",
        args([arg("episode", enum_value("JEDI"))])?,
        [
            field("name"),
            Field::builder("friends")
                .add_directive(skip_if)
                .add_selection(field("name"))
                .build(),
        ],
    );

    document([named_operation(
        QUERY,
        "HeroComparison",
        vars([with_friends])?,
        [left, right],
    )])
}

fn fragments() -> BuildResult {
    let hero = Field::builder("hero")
        .add_selection(fragment_spread("heroFields"))
        .add_selection(inline_fragment("Droid", [field("primaryFunction")]))
        .build();
    let hero_fields = FragmentDefinition::builder("heroFields", "Character")
        .add_directive(directive("cached"))
        .add_selections([field("name"), field("id")])
        .build();

    document([
        Definition::from(operation(QUERY, Variables::empty(), [hero])),
        Definition::from(hero_fields),
    ])
}

fn multiple_operations() -> BuildResult {
    let name = var("name", non_null(GQL_STRING));

    document([
        named_operation(
            QUERY,
            "Hero",
            Variables::empty(),
            [field_with("hero", args([])?, [field("name")])],
        ),
        named_operation(
            MUTATION,
            "Rename",
            vars([name.clone()])?,
            [field_with("rename", args([arg("name", &name)])?, [field("name")])],
        ),
        named_operation(
            SUBSCRIPTION,
            "OnRename",
            Variables::empty(),
            [field_with("renamed", args([])?, [field("name")])],
        ),
    ])
}
