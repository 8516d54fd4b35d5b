use crate::DuplicateNameError;
use crate::PrintOptions;
use crate::Printer;
use crate::schema::FieldDescriptor;
use crate::schema::FieldsOrder;

/// Display metadata for an object type: its GraphQL name, description and
/// fields, plus an optional [`FieldsOrder`].
///
/// This is what a schema generator consumes when it documents a type; it is
/// not used when building request documents.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDescriptor {
    description: Option<String>,
    fields: Vec<FieldDescriptor>,
    fields_order: Option<FieldsOrder>,
    name: String,
}
impl ObjectTypeDescriptor {
    /// Add a [`FieldDescriptor`] after any previously added fields.
    pub fn add_field(mut self, field: FieldDescriptor) -> Result<Self, DuplicateNameError> {
        if self.fields.iter().any(|existing| existing.name == field.name) {
            return Err(DuplicateNameError::Field {
                field_name: field.name,
                type_name: self.name,
            });
        }
        self.fields.push(field);
        Ok(self)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn fields_order(&self) -> Option<&FieldsOrder> {
        self.fields_order.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: vec![],
            fields_order: None,
            name: name.into(),
        }
    }

    /// Fields in documentation order: the [`FieldsOrder`] applied to the
    /// declaration order, if one was set.
    pub fn ordered_fields(&self) -> Vec<&FieldDescriptor> {
        match &self.fields_order {
            Some(order) => order.apply(&self.fields, FieldDescriptor::name),
            None => self.fields.iter().collect(),
        }
    }

    /// Render a documentation stanza for this type, e.g.:
    ///
    /// ```text
    /// "Type for a starship"
    /// type Starship {
    ///   name: String
    ///   id: String
    ///   length: Float
    /// }
    /// ```
    pub fn to_sdl(&self) -> String {
        let options = PrintOptions::pretty();
        let mut printer = Printer::new(&options);
        if let Some(description) = &self.description {
            printer.push_string_literal(description);
            printer.push('\n');
        }
        printer.push_str("type ");
        printer.push_str(&self.name);
        printer.push(' ');
        printer.push_block(self.ordered_fields(), |printer, field| {
            if let Some(description) = &field.description {
                printer.push_string_literal(description);
                printer.push(' ');
            }
            printer.push_str(&field.name);
            printer.push_str(": ");
            printer.push_str(&field.type_ref.to_string());
        });
        printer.finish()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let _ = self.description.insert(description.into());
        self
    }

    pub fn with_fields_order(mut self, fields_order: FieldsOrder) -> Self {
        let _ = self.fields_order.insert(fields_order);
        self
    }
}
