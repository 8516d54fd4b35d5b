use crate::InputObject;
use crate::operation::Variable;
use crate::operation::VariableRef;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// A literal [input value](https://spec.graphql.org/October2021/#sec-Input-Values)
/// usable as an argument, an input object field, or a variable default.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Bool(bool),
    Enum(String),
    /// Must be finite; see [`Printer::push_float`].
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(InputObject),
    String(String),
    VarRef(VariableRef),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Build a [`Value::List`] from anything convertible into [`Value`]s,
    /// preserving iteration order.
    pub fn list<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

#[inherent]
impl RequestNode for Value {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        match self {
            Self::Bool(true) => printer.push_str("true"),
            Self::Bool(false) => printer.push_str("false"),
            Self::Enum(name) => printer.push_str(name),
            Self::Float(value) => printer.push_float(*value),
            Self::Int(value) => printer.push_str(&value.to_string()),
            Self::List(values) => {
                printer.push('[');
                printer.push_separated(values, ", ", |printer, value| {
                    value.append_graphql(printer)
                });
                printer.push(']');
            },
            Self::Null => printer.push_str("null"),
            Self::Object(object) => object.append_graphql(printer),
            Self::String(value) => printer.push_string_literal(value),
            Self::VarRef(var_ref) => var_ref.append_graphql(printer),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

/// An enum literal. Printed bare (unquoted), e.g. `NEWHOPE`.
pub fn enum_value(name: impl Into<String>) -> Value {
    Value::Enum(name.into())
}

impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<f32> for Value {
    /// Widens through the `f32`'s own shortest decimal form, so `0.1_f32`
    /// stays `0.1` instead of picking up the binary widening error.
    fn from(value: f32) -> Self {
        let widened = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        Self::Float(widened)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<InputObject> for Value {
    fn from(value: InputObject) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<VariableRef> for Value {
    fn from(value: VariableRef) -> Self {
        Self::VarRef(value)
    }
}
impl std::convert::From<&Variable> for Value {
    fn from(value: &Variable) -> Self {
        Self::VarRef(value.to_ref())
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::list(values)
    }
}
impl<T: Into<Value>> std::convert::From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
