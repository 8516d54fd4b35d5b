use crate::directive_annotation::append_directives;
use crate::DirectiveAnnotation;
use crate::operation::Field;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::Variables;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// One query, mutation, or subscription definition.
///
/// See [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Operation {
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) kind: OperationKind,
    pub(super) name: Option<String>,
    pub(super) selection_set: SelectionSet,
    pub(super) variables: Variables,
}
impl Operation {
    /// Convenience wrapper around [`OperationBuilder::new()`].
    pub fn builder(kind: OperationKind) -> OperationBuilder {
        OperationBuilder::new(kind)
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`Operation`].
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Access the name of this [`Operation`] (if one was specified).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// Access the [`Variables`] declared by this [`Operation`].
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    fn prints_as_shorthand(&self, printer: &Printer<'_>) -> bool {
        printer.options().query_shorthand
            && self.kind == OperationKind::Query
            && self.name.is_none()
            && self.variables.is_empty()
            && self.directives.is_empty()
    }
}

#[inherent]
impl RequestNode for Operation {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        if !self.prints_as_shorthand(printer) {
            printer.push_str(self.kind.keyword());
            if let Some(name) = &self.name {
                printer.push(' ');
                printer.push_str(name);
            }
            self.variables.append_graphql(printer);
            append_directives(&self.directives, printer);
            printer.push(' ');
        }
        self.selection_set.append_graphql(printer);
    }
}

/// An anonymous operation, e.g. `query($id: ID) { ... }`.
pub fn operation(
    kind: OperationKind,
    variables: Variables,
    fields: impl IntoIterator<Item = Field>,
) -> Operation {
    OperationBuilder::new(kind)
        .variables(variables)
        .add_selections(fields)
        .build()
}

/// A named operation, e.g. `mutation CreateHero($name: String) { ... }`.
pub fn named_operation(
    kind: OperationKind,
    name: impl Into<String>,
    variables: Variables,
    fields: impl IntoIterator<Item = Field>,
) -> Operation {
    OperationBuilder::new(kind)
        .name(name)
        .variables(variables)
        .add_selections(fields)
        .build()
}
