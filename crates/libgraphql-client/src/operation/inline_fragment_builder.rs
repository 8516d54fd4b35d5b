use crate::DirectiveAnnotation;
use crate::operation::InlineFragment;
use crate::operation::Selection;
use crate::operation::SelectionSetBuilder;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineFragmentBuilder {
    directives: Vec<DirectiveAnnotation>,
    selection_set_builder: SelectionSetBuilder,
    type_condition: Option<String>,
}
impl InlineFragmentBuilder {
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

    pub fn build(self) -> InlineFragment {
        InlineFragment {
            directives: self.directives,
            selection_set: self.selection_set_builder.build(),
            type_condition: self.type_condition,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_condition(mut self, type_name: impl Into<String>) -> Self {
        let _ = self.type_condition.insert(type_name.into());
        self
    }
}
