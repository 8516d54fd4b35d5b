use crate::directive_annotation::append_directives;
use crate::DirectiveAnnotation;
use crate::operation::Arguments;
use crate::operation::FieldBuilder;
use crate::operation::SelectionSet;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// A [field selection](https://spec.graphql.org/October2021/#sec-Language.Fields):
/// `alias: name(arguments) @directives { selections }`.
///
/// A field with an empty [`SelectionSet`] is a leaf and prints without
/// braces.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(super) alias: Option<String>,
    pub(super) arguments: Arguments,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
}
impl Field {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Convenience wrapper around [`FieldBuilder::new()`].
    pub fn builder(name: impl Into<String>) -> FieldBuilder {
        FieldBuilder::new(name)
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /**
     * If an alias was specified for this selection, return the alias.
     * Otherwise return the name of the field.
     */
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}

#[inherent]
impl RequestNode for Field {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        if let Some(alias) = &self.alias {
            printer.push_str(alias);
            printer.push_str(": ");
        }
        printer.push_str(&self.name);
        self.arguments.append_graphql(printer);
        append_directives(&self.directives, printer);
        if !self.selection_set.is_empty() {
            printer.push(' ');
            self.selection_set.append_graphql(printer);
        }
    }
}

/// A leaf field with no arguments, e.g. `id`.
pub fn field(name: impl Into<String>) -> Field {
    FieldBuilder::new(name).build()
}

/// A field with arguments and (possibly empty) child fields.
pub fn field_with(
    name: impl Into<String>,
    arguments: Arguments,
    children: impl IntoIterator<Item = Field>,
) -> Field {
    FieldBuilder::new(name)
        .arguments(arguments)
        .add_selections(children)
        .build()
}

/// Same as [`field_with`], but the field's result is returned under `alias`.
pub fn aliased_field(
    alias: impl Into<String>,
    name: impl Into<String>,
    arguments: Arguments,
    children: impl IntoIterator<Item = Field>,
) -> Field {
    FieldBuilder::new(name)
        .alias(alias)
        .arguments(arguments)
        .add_selections(children)
        .build()
}
