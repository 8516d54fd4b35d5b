use crate::directive;
use crate::input_object;
use crate::operation::arg;
use crate::operation::args;
use crate::operation::document;
use crate::operation::field;
use crate::operation::field_with;
use crate::operation::named_operation;
use crate::operation::operation;
use crate::operation::var;
use crate::operation::var_with_default;
use crate::operation::vars;
use crate::operation::Field;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Variables;
use crate::operation::MUTATION;
use crate::operation::QUERY;
use crate::operation::SUBSCRIPTION;
use crate::prop;
use crate::types::GQL_BOOL;
use crate::types::GQL_FLOAT;
use crate::types::GQL_ID;
use crate::types::GQL_INT;
use crate::types::GQL_STRING;
use crate::types::list;
use crate::types::non_null;
use crate::DuplicateNameError;
use crate::RequestNode;

#[test]
fn variables_default_value() {
    let var_name = var_with_default("name", GQL_STRING, "Lee Byron");

    let doc = document([operation(
        QUERY,
        vars([var_name.clone()]).unwrap(),
        [field_with("helloYou", args([arg("name", &var_name)]).unwrap(), [])],
    )]).unwrap();

    assert_eq!(
        doc.build(),
        "query($name: String = \"Lee Byron\") {\n  helloYou(name: $name)\n}",
    );
}

#[test]
fn variables_flat() {
    let var_bool = var("varBool", non_null(GQL_BOOL));
    let var_double = var("varDouble", non_null(GQL_FLOAT));
    let var_string = var("varString", non_null(GQL_STRING));

    let doc = document([operation(
        QUERY,
        vars([var_bool.clone(), var_double.clone(), var_string.clone()]).unwrap(),
        [field_with(
            "withArgWithSubField",
            args([
                arg("aString", &var_string),
                arg("aDouble", &var_double),
                arg("aBool", &var_bool),
            ]).unwrap(),
            [field("bool"), field("double"), field("string")],
        )],
    )]).unwrap();

    assert_eq!(
        doc.build(),
        concat!(
            "query($varBool: Boolean!, $varDouble: Float!, $varString: String!) {\n",
            "  withArgWithSubField(aString: $varString, aDouble: $varDouble, aBool: $varBool) {\n",
            "    bool\n",
            "    double\n",
            "    string\n",
            "  }\n",
            "}",
        ),
    );
}

#[test]
fn variables_in_input_object_keep_prop_order() {
    let var_bool = var("varBool", non_null(GQL_BOOL));
    let var_int = var("varInt", non_null(GQL_INT));
    let var_float = var("varFloat", non_null(GQL_FLOAT));
    let var_string = var("varString", non_null(GQL_STRING));
    let var_id = var("varID", GQL_ID);

    // Declared in a different order than the props reference them.
    let doc = document([operation(
        QUERY,
        vars([
            var_id.clone(),
            var_string.clone(),
            var_float.clone(),
            var_int.clone(),
            var_bool.clone(),
        ]).unwrap(),
        [field_with(
            "basicScalarHolder",
            args([arg("basicScalarHolder", input_object([
                prop("bool", &var_bool),
                prop("int", &var_int),
                prop("float", &var_float),
                prop("string", &var_string),
                prop("iD", &var_id),
            ]).unwrap())]).unwrap(),
            [field("bool"), field("int"), field("float"), field("string"), field("iD")],
        )],
    )]).unwrap();

    let text = doc.build();
    assert!(text.contains(
        "{bool: $varBool, int: $varInt, float: $varFloat, string: $varString, iD: $varID}",
    ));
    assert!(text.starts_with(
        "query($varID: ID, $varString: String!, $varFloat: Float!, $varInt: Int!, $varBool: Boolean!) {",
    ));
}

#[test]
fn variables_arrays() {
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

    let doc = document([operation(
        MUTATION,
        vars([
            var_int_1.clone(),
            var_int_1_2.clone(),
            var_int_1_2_3.clone(),
            var_int_1_bang.clone(),
            var_int_bang_1.clone(),
            var_int_1_bang_2_3_bang.clone(),
            var_int_bang_1_bang_2_bang_3_bang.clone(),
        ]).unwrap(),
        [field_with(
            "nestedArraysHolder",
            args([arg("nestedArraysHolder", input_object([
                prop("int_1", &var_int_1),
                prop("int_1_2", &var_int_1_2),
                prop("int_1_2_3", &var_int_1_2_3),
                prop("int_1_bang", &var_int_1_bang),
                prop("int_bang_1", &var_int_bang_1),
                prop("int_1_bang_2_3_bang", &var_int_1_bang_2_3_bang),
                prop("int_bang_1_bang_2_bang_3_bang", &var_int_bang_1_bang_2_bang_3_bang),
            ]).unwrap())]).unwrap(),
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
    )]).unwrap();

    let text = doc.build();
    assert!(text.starts_with(concat!(
        "mutation(",
        "$varInt_1: [Int], ",
        "$varInt_1_2: [[Int]], ",
        "$varInt_1_2_3: [[[Int]]], ",
        "$varInt_1_bang: [Int]!, ",
        "$varInt_bang_1: [Int!], ",
        "$varInt_1_bang_2_3_bang: [[[Int]!]]!, ",
        "$varInt_bang_1_bang_2_bang_3_bang: [[[Int!]!]!]!",
        ") {\n",
    )));
    assert!(text.contains("int_bang_1_bang_2_bang_3_bang: $varInt_bang_1_bang_2_bang_3_bang}) {\n"));
}

#[test]
fn anonymous_operation_without_variables_omits_parens() {
    let op = operation(QUERY, Variables::empty(), [field("me")]);
    assert_eq!(op.to_graphql(), "query {\n  me\n}");
    assert_eq!(op.name(), None);
}

#[test]
fn named_operation_with_variables() {
    let var_id = var("id", non_null(GQL_ID));
    let op = named_operation(
        QUERY,
        "HeroById",
        vars([var_id.clone()]).unwrap(),
        [field_with("hero", args([arg("id", &var_id)]).unwrap(), [field("name")])],
    );
    assert_eq!(
        op.to_graphql(),
        "query HeroById($id: ID!) {\n  hero(id: $id) {\n    name\n  }\n}",
    );
}

#[test]
fn subscription_keyword() {
    let op = named_operation(SUBSCRIPTION, "OnReview", Variables::empty(), [field("reviewAdded")]);
    assert_eq!(op.kind(), OperationKind::Subscription);
    assert_eq!(op.to_graphql(), "subscription OnReview {\n  reviewAdded\n}");
}

#[test]
fn operation_directives_follow_variables() {
    let op = Operation::builder(QUERY)
        .name("Cached")
        .add_variable(var("id", GQL_ID)).unwrap()
        .add_directive(directive("cached"))
        .add_selection(field("me"))
        .build();
    assert_eq!(op.to_graphql(), "query Cached($id: ID) @cached {\n  me\n}");
}

#[test]
fn builder_rejects_duplicate_variable() {
    let result = Operation::builder(MUTATION)
        .add_variable(var("input", GQL_STRING)).unwrap()
        .add_variable(var("input", GQL_INT));
    assert_eq!(
        result.unwrap_err(),
        DuplicateNameError::Variable {
            variable_name: "input".to_string(),
        },
    );
}

#[test]
fn operation_with_empty_selection_set_still_prints_braces() {
    let op = Operation::builder(QUERY).build();
    assert_eq!(op.to_graphql(), "query {\n}");
}

#[test]
fn mixed_selections_at_root() {
    let op = Operation::builder(QUERY)
        .add_selection(field("a"))
        .add_selection(Field::builder("b").alias("renamed").build())
        .build();
    assert_eq!(op.to_graphql(), "query {\n  a\n  renamed: b\n}");
}
