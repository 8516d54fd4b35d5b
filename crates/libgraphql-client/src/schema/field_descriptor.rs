use crate::types::TypeRef;

/// Name, type and (optional) description of one field of an
/// [`ObjectTypeDescriptor`](crate::schema::ObjectTypeDescriptor).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDescriptor {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_ref: TypeRef,
}
impl FieldDescriptor {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Self {
            description: None,
            name: name.into(),
            type_ref: type_ref.into(),
        }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let _ = self.description.insert(description.into());
        self
    }
}
