//! Schema-side display metadata: type descriptions and the documentation
//! order of fields.

mod field_descriptor;
mod fields_order;
mod object_type_descriptor;

pub use field_descriptor::FieldDescriptor;
pub use fields_order::FieldsOrder;
pub use object_type_descriptor::ObjectTypeDescriptor;

#[cfg(test)]
mod tests {
    mod fields_order_tests;
    mod object_type_descriptor_tests;
}
