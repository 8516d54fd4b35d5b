use crate::DuplicateNameError;
use crate::Printer;
use crate::RequestNode;
use crate::Value;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, DuplicateNameError>;

/// An [input object value](https://spec.graphql.org/October2021/#sec-Input-Object-Values):
/// named fields in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObject {
    fields: IndexMap<String, Value>,
}
impl InputObject {
    /// Add an [`InputObjectField`] after any previously added fields.
    pub fn add_field(mut self, field: InputObjectField) -> Result<Self> {
        if self.fields.contains_key(&field.name) {
            return Err(DuplicateNameError::InputObjectField {
                field_name: field.name,
            });
        }
        self.fields.insert(field.name, field.value);
        Ok(self)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn get(&self, field_name: &str) -> Option<&Value> {
        self.fields.get(field_name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[inherent]
impl RequestNode for InputObject {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        printer.push('{');
        printer.push_separated(&self.fields, ", ", |printer, (name, value)| {
            printer.push_str(name);
            printer.push_str(": ");
            value.append_graphql(printer);
        });
        printer.push('}');
    }
}

/// One `name: value` entry of an [`InputObject`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectField {
    name: String,
    value: Value,
}
impl InputObjectField {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A single input object field, for use with [`input_object`].
pub fn prop(name: impl Into<String>, value: impl Into<Value>) -> InputObjectField {
    InputObjectField {
        name: name.into(),
        value: value.into(),
    }
}

/// Build an [`InputObject`] whose fields appear in the order given.
///
/// Fails if two fields share a name.
pub fn input_object(
    fields: impl IntoIterator<Item = InputObjectField>,
) -> Result<InputObject> {
    fields.into_iter().try_fold(InputObject::empty(), InputObject::add_field)
}
