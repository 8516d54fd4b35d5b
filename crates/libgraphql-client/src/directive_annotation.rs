use crate::operation::Arguments;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// Represents a
/// [directive](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// applied to a field, a fragment, or an operation, e.g.
/// `@include(if: $withFriends)`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    arguments: Arguments,
    name: String,
}
impl DirectiveAnnotation {
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[inherent]
impl RequestNode for DirectiveAnnotation {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        printer.push('@');
        printer.push_str(&self.name);
        self.arguments.append_graphql(printer);
    }
}

/// Append each directive, in order, preceded by a single space.
pub(crate) fn append_directives(
    directives: &[DirectiveAnnotation],
    printer: &mut Printer<'_>,
) {
    for directive in directives {
        printer.push(' ');
        directive.append_graphql(printer);
    }
}

/// A directive without arguments, e.g. `@live`.
pub fn directive(name: impl Into<String>) -> DirectiveAnnotation {
    directive_with_args(name, Arguments::empty())
}

pub fn directive_with_args(
    name: impl Into<String>,
    arguments: Arguments,
) -> DirectiveAnnotation {
    DirectiveAnnotation {
        arguments,
        name: name.into(),
    }
}
