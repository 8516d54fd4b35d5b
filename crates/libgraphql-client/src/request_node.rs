use crate::PrintOptions;
use crate::Printer;

/// Trait implemented by every node of a request document tree. Provides text
/// synthesis.
///
/// All node types implement this trait via `#[inherent] impl RequestNode`,
/// giving each node an inherent `append_graphql` (no trait import needed) and
/// a trait bound for generic utilities.
///
/// Rendering never mutates the node: the same tree always produces the same
/// text for the same [`PrintOptions`].
pub trait RequestNode {
    /// Append this node's GraphQL representation to `printer`.
    fn append_graphql(&self, printer: &mut Printer<'_>);

    /// Render this node on its own with the default [`PrintOptions`].
    fn to_graphql(&self) -> String {
        self.to_graphql_with(&PrintOptions::default())
    }

    /// Render this node on its own with explicit [`PrintOptions`].
    fn to_graphql_with(&self, options: &PrintOptions) -> String {
        let mut printer = Printer::new(options);
        self.append_graphql(&mut printer);
        printer.finish()
    }
}
