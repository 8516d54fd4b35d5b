use crate::DirectiveAnnotation;
use crate::DuplicateNameError;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSetBuilder;
use crate::operation::Variable;
use crate::operation::Variables;

type Result<T> = std::result::Result<T, DuplicateNameError>;

#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    directives: Vec<DirectiveAnnotation>,
    kind: OperationKind,
    name: Option<String>,
    selection_set_builder: SelectionSetBuilder,
    variables: Variables,
}
impl OperationBuilder {
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

    /// Add a [`Variable`] after any previously added `Variable`s.
    pub fn add_variable(mut self, variable: Variable) -> Result<Self> {
        self.variables = self.variables.add_variable(variable)?;
        Ok(self)
    }

    /// Consume the [`OperationBuilder`] to produce an [`Operation`].
    pub fn build(self) -> Operation {
        Operation {
            directives: self.directives,
            kind: self.kind,
            name: self.name,
            selection_set: self.selection_set_builder.build(),
            variables: self.variables,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        let _ = self.name.insert(name.into());
        self
    }

    pub fn new(kind: OperationKind) -> Self {
        Self {
            directives: vec![],
            kind,
            name: None,
            selection_set_builder: SelectionSetBuilder::new(),
            variables: Variables::empty(),
        }
    }

    /// Replace all previously added variables with `variables`.
    pub fn variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}
