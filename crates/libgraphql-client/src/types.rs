mod scalar_type;
mod type_ref;

pub use scalar_type::GQL_BOOL;
pub use scalar_type::GQL_FLOAT;
pub use scalar_type::GQL_ID;
pub use scalar_type::GQL_INT;
pub use scalar_type::GQL_STRING;
pub use scalar_type::ScalarType;
pub use type_ref::list;
pub use type_ref::named;
pub use type_ref::non_null;
pub use type_ref::TypeRef;

#[cfg(test)]
mod tests {
    mod type_ref_tests;
}
