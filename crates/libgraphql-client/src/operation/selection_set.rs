use crate::operation::Selection;
use crate::operation::SelectionSetBuilder;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// The ordered [`Selection`]s requested under a field, fragment, or
/// operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub(super) selections: Vec<Selection>,
}
impl SelectionSet {
    /// Convenience wrapper around [`SelectionSetBuilder::new()`].
    pub fn builder() -> SelectionSetBuilder {
        SelectionSetBuilder::new()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }
}

#[inherent]
impl RequestNode for SelectionSet {
    /// Prints the braced block, even when there are no selections.
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        printer.push_block(&self.selections, |printer, selection| {
            selection.append_graphql(printer)
        });
    }
}
