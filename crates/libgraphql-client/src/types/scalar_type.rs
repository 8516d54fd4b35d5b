use crate::types::TypeRef;

/// The scalar types built into every GraphQL schema.
///
/// See [Scalars](https://spec.graphql.org/October2021/#sec-Scalars).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ScalarType {
    Boolean,
    Float,
    ID,
    Int,
    String,
}
impl ScalarType {
    /// The name this scalar is referenced by in GraphQL text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}
impl std::convert::From<ScalarType> for TypeRef {
    fn from(value: ScalarType) -> Self {
        TypeRef::Named(value.name().to_string())
    }
}
impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub const GQL_BOOL: ScalarType = ScalarType::Boolean;
pub const GQL_FLOAT: ScalarType = ScalarType::Float;
pub const GQL_ID: ScalarType = ScalarType::ID;
pub const GQL_INT: ScalarType = ScalarType::Int;
pub const GQL_STRING: ScalarType = ScalarType::String;
