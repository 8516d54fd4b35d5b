/// Layout choices applied when a [`Document`](crate::operation::Document) (or
/// any other [`RequestNode`](crate::RequestNode)) is rendered to text.
///
/// Every combination of options produces GraphQL-equivalent output; only
/// whitespace and the anonymous-query shorthand differ.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Number of spaces per nesting level in [`PrintStyle::Pretty`] output.
    pub indent_width: usize,

    /// Print an anonymous query that has no variables and no directives as
    /// the bare `{ ... }` shorthand instead of `query { ... }`.
    pub query_shorthand: bool,

    pub style: PrintStyle,
}
impl PrintOptions {
    pub fn compact() -> Self {
        Self {
            style: PrintStyle::Compact,
            ..Self::default()
        }
    }

    pub fn pretty() -> Self {
        Self::default()
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub fn with_query_shorthand(mut self, query_shorthand: bool) -> Self {
        self.query_shorthand = query_shorthand;
        self
    }
}
impl std::default::Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            query_shorthand: false,
            style: PrintStyle::Pretty,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum PrintStyle {
    /// Everything on one line; selections separated by single spaces.
    Compact,

    /// One selection per line, indented by nesting depth.
    #[default]
    Pretty,
}
