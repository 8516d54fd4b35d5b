use crate::input_object;
use crate::operation::arg;
use crate::operation::args;
use crate::operation::document;
use crate::operation::field;
use crate::operation::field_with;
use crate::operation::named_operation;
use crate::operation::var;
use crate::operation::vars;
use crate::operation::MUTATION;
use crate::prop;
use crate::types::GQL_INT;
use crate::types::non_null;
use rayon::prelude::IntoParallelIterator;
use rayon::prelude::ParallelIterator;

fn build_counter_document(idx: usize) -> String {
    let var_amount = var("amount", non_null(GQL_INT));
    document([named_operation(
        MUTATION,
        format!("Increment{idx}"),
        vars([var_amount.clone()]).unwrap(),
        [field_with(
            "increment",
            args([arg("input", input_object([
                prop("counter", idx as i64),
                prop("amount", &var_amount),
            ]).unwrap())]).unwrap(),
            [field("value")],
        )],
    )]).unwrap().build()
}

#[test]
fn independent_documents_build_in_parallel() {
    let parallel: Vec<String> =
        (0..64).into_par_iter().map(build_counter_document).collect();
    let sequential: Vec<String> =
        (0..64).map(build_counter_document).collect();

    assert_eq!(parallel, sequential);
    assert_eq!(
        parallel[3],
        "mutation Increment3($amount: Int!) {\n  \
        increment(input: {counter: 3, amount: $amount}) {\n    \
        value\n  \
        }\n\
        }",
    );
}

#[test]
fn one_document_renders_identically_from_many_threads() {
    let doc = document([named_operation(
        MUTATION,
        "Shared",
        vars([]).unwrap(),
        [field("ping")],
    )]).unwrap();

    let outputs: Vec<String> =
        (0..32).into_par_iter().map(|_| doc.build()).collect();
    assert!(outputs.iter().all(|output| output == "mutation Shared {\n  ping\n}"));
}
