use graphql_parser::query::Definition;
use graphql_parser::query::Document;
use graphql_parser::query::OperationDefinition;

type Result<T> = std::result::Result<T, EquivalenceError>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EquivalenceError {
    #[error("Failed to parse the actual request: {message}\n\n{source_text}")]
    ActualParse {
        message: String,
        source_text: String,
    },

    #[error("Failed to parse the expected request: {message}\n\n{source_text}")]
    ExpectedParse {
        message: String,
        source_text: String,
    },

    #[error(
        "Requests are not equivalent.\n\
        Expected (normalized):\n{expected}\n\n\
        Actual (normalized):\n{actual}"
    )]
    Mismatch {
        actual: String,
        expected: String,
    },
}

/// Parse `request` and print it back out in canonical form.
///
/// Whitespace and the `query` keyword of an anonymous, variable-free,
/// directive-free query do not survive normalization; everything else
/// (selection order, argument order, variable declaration order) does.
pub fn normalize_graphql_request(
    request: &str,
) -> std::result::Result<String, graphql_parser::query::ParseError> {
    let mut doc: Document<'_, String> =
        graphql_parser::query::parse_query::<String>(request)?;
    for def in doc.definitions.iter_mut() {
        if let Definition::Operation(op) = def {
            collapse_query_shorthand(op);
        }
    }
    Ok(doc.to_string())
}

fn collapse_query_shorthand(op: &mut OperationDefinition<'_, String>) {
    let OperationDefinition::Query(query) = op else {
        return;
    };
    if query.name.is_some()
        || !query.variable_definitions.is_empty()
        || !query.directives.is_empty() {
        return;
    }
    let span = query.selection_set.span;
    let selection_set = std::mem::replace(
        &mut query.selection_set,
        graphql_parser::query::SelectionSet { span, items: vec![] },
    );
    *op = OperationDefinition::SelectionSet(selection_set);
}

/// Check that `actual` is the same GraphQL request as `expected`, ignoring
/// formatting.
///
/// Input-object field order is not compared: the parser keeps object
/// literals in a sorted map, so `{a: 1, b: 2}` and `{b: 2, a: 1}` are
/// equivalent here.
pub fn check_equivalent_graphql_request(expected: &str, actual: &str) -> Result<()> {
    let expected_normalized = normalize_graphql_request(expected)
        .map_err(|err| EquivalenceError::ExpectedParse {
            message: err.to_string(),
            source_text: expected.to_string(),
        })?;
    let actual_normalized = normalize_graphql_request(actual)
        .map_err(|err| EquivalenceError::ActualParse {
            message: err.to_string(),
            source_text: actual.to_string(),
        })?;

    if expected_normalized != actual_normalized {
        return Err(EquivalenceError::Mismatch {
            actual: actual_normalized,
            expected: expected_normalized,
        });
    }
    Ok(())
}

/// Panicking variant of [`check_equivalent_graphql_request`] for use in
/// tests.
#[track_caller]
pub fn assert_equivalent_graphql_request(expected: &str, actual: &str) {
    if let Err(err) = check_equivalent_graphql_request(expected, actual) {
        panic!("{err}");
    }
}
