use crate::DuplicateNameError;
use crate::operation::Definition;
use crate::operation::DocumentBuilder;
use crate::operation::FragmentDefinition;
use crate::operation::Operation;
use crate::PrintOptions;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// A request document: the ordered [`Operation`]s and
/// [`FragmentDefinition`]s sent to a GraphQL service in one request.
///
/// See [Document](https://spec.graphql.org/October2021/#sec-Document).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub(super) definitions: Vec<Definition>,
}
impl Document {
    /// Render the request text with the default [`PrintOptions`].
    ///
    /// Rendering is pure: the same tree always produces byte-identical
    /// output.
    pub fn build(&self) -> String {
        self.to_graphql()
    }

    /// Render the request text with explicit [`PrintOptions`].
    pub fn build_with(&self, options: &PrintOptions) -> String {
        self.to_graphql_with(options)
    }

    /// Convenience wrapper around [`DocumentBuilder::new()`].
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(fragment) => Some(fragment),
            Definition::Operation(_) => None,
        })
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(_) => None,
            Definition::Operation(operation) => Some(operation),
        })
    }
}

#[inherent]
impl RequestNode for Document {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        for (idx, definition) in self.definitions.iter().enumerate() {
            if idx > 0 {
                printer.push_definition_separator();
            }
            definition.append_graphql(printer);
        }
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

/// Collect top-level definitions into a [`Document`], in the order given.
///
/// Fails if two fragments, or two named operations, share a name.
pub fn document<D: Into<Definition>>(
    definitions: impl IntoIterator<Item = D>,
) -> Result<Document, DuplicateNameError> {
    definitions
        .into_iter()
        .try_fold(DocumentBuilder::new(), |builder, def| {
            builder.add_definition(def)
        })
        .map(DocumentBuilder::build)
}
