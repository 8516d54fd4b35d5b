use crate::DirectiveAnnotation;
use crate::DuplicateNameError;
use crate::operation::Argument;
use crate::operation::Arguments;
use crate::operation::Field;
use crate::operation::Selection;
use crate::operation::SelectionSetBuilder;

type Result<T> = std::result::Result<T, DuplicateNameError>;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldBuilder {
    alias: Option<String>,
    arguments: Arguments,
    directives: Vec<DirectiveAnnotation>,
    name: String,
    selection_set_builder: SelectionSetBuilder,
}
impl FieldBuilder {
    /// Add an [`Argument`] after any previously added `Argument`s.
    pub fn add_argument(mut self, argument: Argument) -> Result<Self> {
        self.arguments = self.arguments.add_argument(argument)?;
        Ok(self)
    }

    /// Add a [`DirectiveAnnotation`] after any previously added
    /// `DirectiveAnnotation`s.
    pub fn add_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    /// Add a [`Selection`] after any previously added `Selection`s.
    pub fn add_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection_set_builder =
            self.selection_set_builder.add_selection(selection);
        self
    }

    pub fn add_selections<S: Into<Selection>>(
        mut self,
        selections: impl IntoIterator<Item = S>,
    ) -> Self {
        self.selection_set_builder =
            self.selection_set_builder.add_selections(selections);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        let _ = self.alias.insert(alias.into());
        self
    }

    /// Replace all previously added arguments with `arguments`.
    pub fn arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }

    /// Consume the [`FieldBuilder`] to produce a [`Field`].
    pub fn build(self) -> Field {
        Field {
            alias: self.alias,
            arguments: self.arguments,
            directives: self.directives,
            name: self.name,
            selection_set: self.selection_set_builder.build(),
        }
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: Arguments::empty(),
            directives: vec![],
            name: name.into(),
            selection_set_builder: SelectionSetBuilder::new(),
        }
    }
}
