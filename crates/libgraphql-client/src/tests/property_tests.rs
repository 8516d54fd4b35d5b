use crate::operation::arg;
use crate::operation::args;
use crate::operation::document;
use crate::operation::field;
use crate::operation::field_with;
use crate::operation::operation;
use crate::operation::var;
use crate::operation::vars;
use crate::operation::QUERY;
use crate::types::GQL_INT;
use crate::types::list;
use crate::types::named;
use crate::types::non_null;
use crate::types::TypeRef;
use crate::PrintOptions;
use crate::RequestNode;
use proptest::prelude::*;
use std::collections::HashSet;

fn unique_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-zA-Z0-9_]{0,8}", 1..8).prop_map(|names| {
        let mut seen = HashSet::new();
        names.into_iter().filter(|name| seen.insert(name.clone())).collect()
    })
}

fn type_refs() -> impl Strategy<Value = TypeRef> {
    let leaf = "[A-Z][a-zA-Z]{0,6}".prop_map(|name: String| named(name));
    leaf.prop_recursive(4, 16, 1, |inner| prop_oneof![
        inner.clone().prop_map(|inner| list(inner)),
        inner.prop_map(|inner| non_null(inner)),
    ])
}

/// Render a [`TypeRef`] the slow way, counting brackets and bangs from the
/// structure, to cross-check the printer.
fn expected_type_text(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::List(inner) => format!("[{}]", expected_type_text(inner)),
        TypeRef::Named(name) => name.to_string(),
        TypeRef::NonNull(inner) => format!("{}!", expected_type_text(inner)),
    }
}

proptest! {
    #[test]
    fn argument_order_matches_declaration_order(names in unique_names()) {
        let arguments = args(
            names.iter().enumerate().map(|(idx, name)| arg(name.as_str(), idx as i64)),
        ).unwrap();
        let rendered = field_with("f", arguments, []).to_graphql();

        let expected = format!(
            "f({})",
            names.iter()
                .enumerate()
                .map(|(idx, name)| format!("{name}: {idx}"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn build_is_deterministic(names in unique_names(), compact in any::<bool>()) {
        let variables = vars(names.iter().map(|name| var(name.as_str(), GQL_INT))).unwrap();
        let arguments = args(
            variables.iter().map(|variable| arg(variable.name(), variable)),
        ).unwrap();
        let doc = document([operation(
            QUERY,
            variables,
            [field_with("root", arguments, names.iter().map(|name| field(name.as_str())))],
        )]).unwrap();

        let options = if compact { PrintOptions::compact() } else { PrintOptions::pretty() };
        let first = doc.build_with(&options);
        let second = doc.build_with(&options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn type_ref_nesting_is_reproduced(type_ref in type_refs()) {
        prop_assert_eq!(type_ref.to_string(), expected_type_text(&type_ref));
    }
}
