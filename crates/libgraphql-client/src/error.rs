use thiserror::Error;

/// Raised when a name is added twice to a namespace that GraphQL requires to
/// be unique (the arguments of one field, the variables of one operation, the
/// fields of one input object, the fragments or operations of one document).
///
/// Duplicates are rejected at the point of insertion; nothing is overwritten.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DuplicateNameError {
    #[error(
        "The `{argument_name}` argument was specified more than once in the \
        same argument list."
    )]
    Argument {
        argument_name: String,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once.")]
    Field {
        field_name: String,
        type_name: String,
    },

    #[error("Multiple fragments named `{fragment_name}` were defined in the same document.")]
    Fragment {
        fragment_name: String,
    },

    #[error(
        "The `{field_name}` field was specified more than once in the same \
        input object."
    )]
    InputObjectField {
        field_name: String,
    },

    #[error("Multiple operations named `{operation_name}` were defined in the same document.")]
    Operation {
        operation_name: String,
    },

    #[error("The `${variable_name}` variable was declared more than once.")]
    Variable {
        variable_name: String,
    },
}
