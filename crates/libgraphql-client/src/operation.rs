mod argument;
mod definition;
mod document;
mod document_builder;
mod field;
mod field_builder;
mod fragment_definition;
mod fragment_definition_builder;
mod fragment_spread;
mod inline_fragment;
mod inline_fragment_builder;
#[allow(clippy::module_inception)]
mod operation;
mod operation_builder;
mod operation_kind;
mod selection;
mod selection_set;
mod selection_set_builder;
mod variable;

pub use argument::arg;
pub use argument::args;
pub use argument::Argument;
pub use argument::Arguments;
pub use definition::Definition;
pub use document::document;
pub use document::Document;
pub use document_builder::DocumentBuilder;
pub use field::aliased_field;
pub use field::field;
pub use field::field_with;
pub use field::Field;
pub use field_builder::FieldBuilder;
pub use fragment_definition::fragment;
pub use fragment_definition::FragmentDefinition;
pub use fragment_definition_builder::FragmentDefinitionBuilder;
pub use fragment_spread::fragment_spread;
pub use fragment_spread::fragment_spread_with;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::inline_fragment;
pub use inline_fragment::InlineFragment;
pub use inline_fragment_builder::InlineFragmentBuilder;
pub use operation::named_operation;
pub use operation::operation;
pub use operation::Operation;
pub use operation_builder::OperationBuilder;
pub use operation_kind::MUTATION;
pub use operation_kind::OperationKind;
pub use operation_kind::QUERY;
pub use operation_kind::SUBSCRIPTION;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use selection_set_builder::SelectionSetBuilder;
pub use variable::var;
pub use variable::var_with_default;
pub use variable::Variable;
pub use variable::VariableRef;
pub use variable::Variables;
pub use variable::vars;

#[cfg(test)]
mod tests {
    mod document_tests;
    mod field_tests;
    mod fragment_tests;
    mod operation_tests;
    mod print_options_tests;
    mod variable_tests;
}
