use crate::directive_annotation::append_directives;
use crate::DirectiveAnnotation;
use crate::operation::Field;
use crate::operation::FragmentDefinitionBuilder;
use crate::operation::SelectionSet;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// A named, reusable selection set:
/// `fragment Name on Type @directives { selections }`.
///
/// See [Fragments](https://spec.graphql.org/October2021/#sec-Language.Fragments).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: String,
}
impl FragmentDefinition {
    /// Convenience wrapper around [`FragmentDefinitionBuilder::new()`].
    pub fn builder(
        name: impl Into<String>,
        on_type: impl Into<String>,
    ) -> FragmentDefinitionBuilder {
        FragmentDefinitionBuilder::new(name, on_type)
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The name of the type this fragment applies to.
    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

#[inherent]
impl RequestNode for FragmentDefinition {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        printer.push_str("fragment ");
        printer.push_str(&self.name);
        printer.push_str(" on ");
        printer.push_str(&self.type_condition);
        append_directives(&self.directives, printer);
        printer.push(' ');
        self.selection_set.append_graphql(printer);
    }
}

/// `fragment name on on_type { fields }`
pub fn fragment(
    name: impl Into<String>,
    on_type: impl Into<String>,
    fields: impl IntoIterator<Item = Field>,
) -> FragmentDefinition {
    FragmentDefinitionBuilder::new(name, on_type)
        .add_selections(fields)
        .build()
}
