use crate::DuplicateNameError;
use crate::Printer;
use crate::RequestNode;
use crate::types::TypeRef;
use crate::Value;
use indexmap::IndexMap;
use inherent::inherent;

/// A [variable definition](https://spec.graphql.org/October2021/#sec-Language.Variables):
/// a name, a declared type, and an optional default value.
///
/// A `Variable` prints as `$name: Type = default` when it sits in an
/// operation's [`Variables`] list. Converting it into a [`Value`] (e.g. by
/// passing `&variable` to [`arg`](crate::operation::arg) or
/// [`prop`](crate::prop)) yields a [`VariableRef`] that prints as `$name`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Variable {
    pub(super) default_value: Option<Value>,
    pub(super) name: String,
    pub(super) type_ref: TypeRef,
}
impl Variable {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A reference to this variable, for use in argument or input object
    /// positions.
    pub fn to_ref(&self) -> VariableRef {
        VariableRef {
            name: self.name.to_owned(),
        }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}

#[inherent]
impl RequestNode for Variable {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        printer.push('$');
        printer.push_str(&self.name);
        printer.push_str(": ");
        self.type_ref.append_graphql(printer);
        if let Some(default_value) = &self.default_value {
            printer.push_str(" = ");
            default_value.append_graphql(printer);
        }
    }
}

/// A by-name reference to a [`Variable`]. Two references with the same name
/// are interchangeable.
///
/// Whether the referenced variable is actually declared by the enclosing
/// operation is not checked.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableRef {
    name: String,
}
impl VariableRef {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
        }
    }
}

#[inherent]
impl RequestNode for VariableRef {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        printer.push('$');
        printer.push_str(&self.name);
    }
}

/// Declare a variable without a default value.
pub fn var(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Variable {
    Variable {
        default_value: None,
        name: name.into(),
        type_ref: type_ref.into(),
    }
}

/// Declare a variable with a default value.
pub fn var_with_default(
    name: impl Into<String>,
    type_ref: impl Into<TypeRef>,
    default_value: impl Into<Value>,
) -> Variable {
    Variable {
        default_value: Some(default_value.into()),
        name: name.into(),
        type_ref: type_ref.into(),
    }
}

/// The ordered variable definitions of one operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Variables(IndexMap<String, Variable>);
impl Variables {
    /// Add a [`Variable`] after any previously added `Variable`s.
    pub fn add_variable(mut self, variable: Variable) -> Result<Self, DuplicateNameError> {
        if self.0.contains_key(variable.name()) {
            return Err(DuplicateNameError::Variable {
                variable_name: variable.name,
            });
        }
        self.0.insert(variable.name.to_owned(), variable);
        Ok(self)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[inherent]
impl RequestNode for Variables {
    /// Prints `($a: A, $b: B)`, or nothing at all when empty.
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        if self.0.is_empty() {
            return;
        }
        printer.push('(');
        printer.push_separated(self.0.values(), ", ", |printer, variable| {
            variable.append_graphql(printer)
        });
        printer.push(')');
    }
}

/// Collect variable declarations in the order given.
///
/// Fails if two variables share a name.
pub fn vars(
    variables: impl IntoIterator<Item = Variable>,
) -> Result<Variables, DuplicateNameError> {
    variables.into_iter().try_fold(Variables::empty(), Variables::add_variable)
}
