use crate::DirectiveAnnotation;
use crate::operation::FragmentDefinition;
use crate::operation::Selection;
use crate::operation::SelectionSetBuilder;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinitionBuilder {
    directives: Vec<DirectiveAnnotation>,
    name: String,
    selection_set_builder: SelectionSetBuilder,
    type_condition: String,
}
impl FragmentDefinitionBuilder {
    /// Add a [`DirectiveAnnotation`] after any previously added
    /// `DirectiveAnnotation`s.
    pub fn add_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

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

    pub fn build(self) -> FragmentDefinition {
        FragmentDefinition {
            directives: self.directives,
            name: self.name,
            selection_set: self.selection_set_builder.build(),
            type_condition: self.type_condition,
        }
    }

    pub fn new(name: impl Into<String>, on_type: impl Into<String>) -> Self {
        Self {
            directives: vec![],
            name: name.into(),
            selection_set_builder: SelectionSetBuilder::new(),
            type_condition: on_type.into(),
        }
    }
}
