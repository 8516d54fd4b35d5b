//! Build GraphQL request documents out of small, immutable value objects and
//! render them to deterministic GraphQL text.
//!
//! ```
//! use libgraphql_client::operation::{arg, args, document, field_with, operation, vars, var_with_default, QUERY};
//! use libgraphql_client::types::GQL_STRING;
//!
//! let name = var_with_default("name", GQL_STRING, "Lee Byron");
//! let doc = document([operation(
//!     QUERY,
//!     vars([name.clone()]).unwrap(),
//!     [field_with("helloYou", args([arg("name", &name)]).unwrap(), [])],
//! )]).unwrap();
//!
//! assert_eq!(
//!     doc.build(),
//!     "query($name: String = \"Lee Byron\") {\n  helloYou(name: $name)\n}",
//! );
//! ```

mod directive_annotation;
mod error;
mod input_object;
pub mod operation;
mod print_options;
mod printer;
mod request_node;
pub mod schema;
pub mod types;
mod value;

pub use directive_annotation::directive;
pub use directive_annotation::directive_with_args;
pub use directive_annotation::DirectiveAnnotation;
pub use error::DuplicateNameError;
pub use input_object::input_object;
pub use input_object::InputObject;
pub use input_object::InputObjectField;
pub use input_object::prop;
pub use print_options::PrintOptions;
pub use print_options::PrintStyle;
pub use printer::Printer;
pub use request_node::RequestNode;
pub use value::enum_value;
pub use value::Value;

#[cfg(test)]
mod tests {
    mod concurrency_tests;
    mod persistence_tests;
    mod printer_tests;
    mod property_tests;
    mod value_tests;
}
