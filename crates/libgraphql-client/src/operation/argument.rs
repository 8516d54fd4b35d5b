use crate::DuplicateNameError;
use crate::Printer;
use crate::RequestNode;
use crate::Value;
use indexmap::IndexMap;
use inherent::inherent;

/// One `name: value` pair passed to a field or a directive.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    name: String,
    value: Value,
}
impl Argument {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// The ordered [`Argument`]s of one field or directive. Names are unique.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Arguments(IndexMap<String, Value>);
impl Arguments {
    /// Add an [`Argument`] after any previously added `Argument`s.
    pub fn add_argument(mut self, argument: Argument) -> Result<Self, DuplicateNameError> {
        if self.0.contains_key(&argument.name) {
            return Err(DuplicateNameError::Argument {
                argument_name: argument.name,
            });
        }
        self.0.insert(argument.name, argument.value);
        Ok(self)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[inherent]
impl RequestNode for Arguments {
    /// Prints `(a: 1, b: 2)`, or nothing at all when empty.
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        if self.0.is_empty() {
            return;
        }
        printer.push('(');
        printer.push_separated(&self.0, ", ", |printer, (name, value)| {
            printer.push_str(name);
            printer.push_str(": ");
            value.append_graphql(printer);
        });
        printer.push(')');
    }
}

pub fn arg(name: impl Into<String>, value: impl Into<Value>) -> Argument {
    Argument {
        name: name.into(),
        value: value.into(),
    }
}

/// Collect arguments in the order given.
///
/// Fails if two arguments share a name.
pub fn args(
    arguments: impl IntoIterator<Item = Argument>,
) -> Result<Arguments, DuplicateNameError> {
    arguments.into_iter().try_fold(Arguments::empty(), Arguments::add_argument)
}
