use crate::PrintOptions;
use crate::PrintStyle;

/// Accumulates the text of a request document while
/// [`RequestNode`](crate::RequestNode)s append themselves to it.
///
/// The printer owns the only mutable state involved in rendering (the output
/// buffer and the current nesting depth), so a tree can be rendered any
/// number of times, from any number of threads, without being touched.
#[derive(Debug)]
pub struct Printer<'opts> {
    depth: usize,
    options: &'opts PrintOptions,
    sink: String,
}
impl<'opts> Printer<'opts> {
    pub fn new(options: &'opts PrintOptions) -> Self {
        Self {
            depth: 0,
            options,
            sink: String::new(),
        }
    }

    /// Consume the [`Printer`] and return everything appended to it.
    pub fn finish(self) -> String {
        self.sink
    }

    pub fn options(&self) -> &PrintOptions {
        self.options
    }

    pub fn push(&mut self, ch: char) {
        self.sink.push(ch);
    }

    pub fn push_str(&mut self, text: &str) {
        self.sink.push_str(text);
    }

    /// Append `items` wrapped in a `{ ... }` block, one item per line (or
    /// space-separated in [`PrintStyle::Compact`]).
    pub fn push_block<I, F>(&mut self, items: I, mut append_item: F)
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item),
    {
        self.sink.push('{');
        self.depth += 1;
        for item in items {
            self.push_line_break();
            append_item(self, item);
        }
        self.depth -= 1;
        self.push_line_break();
        self.sink.push('}');
    }

    /// Separator placed between two top-level definitions.
    pub fn push_definition_separator(&mut self) {
        match self.options.style {
            PrintStyle::Compact => self.sink.push('\n'),
            PrintStyle::Pretty => self.sink.push_str("\n\n"),
        }
    }

    /// Append a finite float in its shortest round-trip decimal form.
    ///
    /// The text always reads as a GraphQL float rather than an int: whole
    /// values keep a `.0` and very large or small magnitudes use an exponent
    /// (`1.0`, `1e20`, `1e-10`).
    ///
    /// # Panics
    ///
    /// GraphQL has no literal for `NaN` or the infinities. Reaching this with
    /// one means a non-finite float made it into a [`Value`](crate::Value),
    /// which is a bug in the calling code rather than recoverable input.
    pub fn push_float(&mut self, value: f64) {
        assert!(
            value.is_finite(),
            "GraphQL has no literal representation for the float `{value}`",
        );
        self.sink.push_str(&format!("{value:?}"));
    }

    /// Append `items` separated by `separator`, each rendered by
    /// `append_item`.
    pub fn push_separated<I, F>(
        &mut self,
        items: I,
        separator: &str,
        mut append_item: F,
    )
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item),
    {
        for (idx, item) in items.into_iter().enumerate() {
            if idx > 0 {
                self.sink.push_str(separator);
            }
            append_item(self, item);
        }
    }

    /// Append `value` as a quoted GraphQL
    /// [string value](https://spec.graphql.org/October2021/#sec-String-Value).
    pub fn push_string_literal(&mut self, value: &str) {
        self.sink.reserve(value.len() + 2);
        self.sink.push('"');
        for ch in value.chars() {
            match ch {
                '"' => self.sink.push_str("\\\""),
                '\\' => self.sink.push_str("\\\\"),
                '\n' => self.sink.push_str("\\n"),
                '\r' => self.sink.push_str("\\r"),
                '\t' => self.sink.push_str("\\t"),
                '\u{0008}' => self.sink.push_str("\\b"),
                '\u{000C}' => self.sink.push_str("\\f"),
                ch if (ch as u32) < 0x20 =>
                    self.sink.push_str(&format!("\\u{:04X}", ch as u32)),
                ch => self.sink.push(ch),
            }
        }
        self.sink.push('"');
    }

    fn push_line_break(&mut self) {
        match self.options.style {
            PrintStyle::Compact => self.sink.push(' '),
            PrintStyle::Pretty => {
                self.sink.push('\n');
                let width = self.depth * self.options.indent_width;
                self.sink.extend(std::iter::repeat_n(' ', width));
            },
        }
    }
}
