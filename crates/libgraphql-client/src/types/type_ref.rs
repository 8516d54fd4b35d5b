use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// A [type reference](https://spec.graphql.org/October2021/#sec-Type-References)
/// as written in a variable declaration or a field definition.
///
/// Modifiers nest exactly as composed and print outer-to-inner, so
/// `non_null(list(non_null(GQL_INT)))` prints as `[Int!]!`. No attempt is
/// made to normalize the nesting: wrapping a [`TypeRef::NonNull`] in another
/// one prints `Int!!`, which a GraphQL service will reject.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named(String),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    /// Recursively unwrap all list and non-null modifiers and return the name
    /// of the type underneath them.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_type_name(),
            Self::Named(name) => name.as_str(),
        }
    }

    /// Indicates if this [`TypeRef`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null) at
    /// its outermost level.
    pub fn nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }
}

#[inherent]
impl RequestNode for TypeRef {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        match self {
            Self::List(inner) => {
                printer.push('[');
                inner.append_graphql(printer);
                printer.push(']');
            },
            Self::Named(name) => printer.push_str(name),
            Self::NonNull(inner) => {
                inner.append_graphql(printer);
                printer.push('!');
            },
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

/// Reference a type by name (a scalar, enum, or input object type).
pub fn named(name: impl Into<String>) -> TypeRef {
    TypeRef::Named(name.into())
}

/// Wrap `inner` in list brackets: `[inner]`.
pub fn list(inner: impl Into<TypeRef>) -> TypeRef {
    TypeRef::List(Box::new(inner.into()))
}

/// Mark `inner` as non-nullable: `inner!`.
pub fn non_null(inner: impl Into<TypeRef>) -> TypeRef {
    TypeRef::NonNull(Box::new(inner.into()))
}
