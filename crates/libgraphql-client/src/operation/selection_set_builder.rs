use crate::operation::Selection;
use crate::operation::SelectionSet;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSetBuilder {
    selections: Vec<Selection>,
}
impl SelectionSetBuilder {
    /// Add a [`Selection`] after any previously added `Selection`s.
    pub fn add_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selections.push(selection.into());
        self
    }

    /// Add each of `selections`, in order, after any previously added
    /// `Selection`s.
    pub fn add_selections<S: Into<Selection>>(
        mut self,
        selections: impl IntoIterator<Item = S>,
    ) -> Self {
        self.selections.extend(selections.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> SelectionSet {
        SelectionSet {
            selections: self.selections,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }
}
