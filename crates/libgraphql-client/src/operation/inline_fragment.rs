use crate::directive_annotation::append_directives;
use crate::DirectiveAnnotation;
use crate::operation::Field;
use crate::operation::InlineFragmentBuilder;
use crate::operation::SelectionSet;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// An [inline fragment](https://spec.graphql.org/October2021/#sec-Inline-Fragments):
/// `... on Type @directives { selections }`. The type condition may be
/// omitted, in which case the fragment applies to the enclosing type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: Option<String>,
}
impl InlineFragment {
    /// Convenience wrapper around [`InlineFragmentBuilder::new()`].
    pub fn builder() -> InlineFragmentBuilder {
        InlineFragmentBuilder::new()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}

#[inherent]
impl RequestNode for InlineFragment {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        printer.push_str("...");
        if let Some(type_name) = &self.type_condition {
            printer.push_str(" on ");
            printer.push_str(type_name);
        }
        append_directives(&self.directives, printer);
        printer.push(' ');
        self.selection_set.append_graphql(printer);
    }
}

/// `... on on_type { fields }`
pub fn inline_fragment(
    on_type: impl Into<String>,
    fields: impl IntoIterator<Item = Field>,
) -> InlineFragment {
    InlineFragmentBuilder::new()
        .type_condition(on_type)
        .add_selections(fields)
        .build()
}
