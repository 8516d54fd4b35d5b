use crate::directive_annotation::append_directives;
use crate::DirectiveAnnotation;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// A [fragment spread](https://spec.graphql.org/October2021/#FragmentSpread):
/// `...FragmentName @directives`.
///
/// The named fragment is not required to be defined in the same
/// [`Document`](crate::operation::Document).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    directives: Vec<DirectiveAnnotation>,
    fragment_name: String,
}
impl FragmentSpread {
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}

#[inherent]
impl RequestNode for FragmentSpread {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        printer.push_str("...");
        printer.push_str(&self.fragment_name);
        append_directives(&self.directives, printer);
    }
}

pub fn fragment_spread(fragment_name: impl Into<String>) -> FragmentSpread {
    fragment_spread_with(fragment_name, [])
}

pub fn fragment_spread_with(
    fragment_name: impl Into<String>,
    directives: impl IntoIterator<Item = DirectiveAnnotation>,
) -> FragmentSpread {
    FragmentSpread {
        directives: directives.into_iter().collect(),
        fragment_name: fragment_name.into(),
    }
}
