use crate::DuplicateNameError;
use crate::schema::FieldDescriptor;
use crate::schema::FieldsOrder;
use crate::schema::ObjectTypeDescriptor;
use crate::types::GQL_FLOAT;
use crate::types::GQL_STRING;
use crate::types::list;
use crate::types::named;
use crate::types::non_null;

fn starship() -> ObjectTypeDescriptor {
    ObjectTypeDescriptor::new("Starship")
        .with_description("Type for a starship")
        .add_field(FieldDescriptor::new("id", GQL_STRING)).unwrap()
        .add_field(FieldDescriptor::new("name", GQL_STRING)).unwrap()
        .add_field(
            FieldDescriptor::new("length", GQL_FLOAT)
                .with_description("Length in meters"),
        ).unwrap()
}

#[test]
fn sdl_uses_declaration_order_without_fields_order() {
    assert_eq!(
        starship().to_sdl(),
        concat!(
            "\"Type for a starship\"\n",
            "type Starship {\n",
            "  id: String\n",
            "  name: String\n",
            "  \"Length in meters\" length: Float\n",
            "}",
        ),
    );
}

#[test]
fn sdl_follows_fields_order() {
    let descriptor = starship().with_fields_order(FieldsOrder::new(["name", "id"]));
    let ordered = descriptor.ordered_fields()
        .into_iter()
        .map(FieldDescriptor::name)
        .collect::<Vec<_>>();
    assert_eq!(ordered, vec!["name", "id", "length"]);
    assert!(descriptor.to_sdl().starts_with(
        "\"Type for a starship\"\ntype Starship {\n  name: String\n  id: String\n",
    ));

    // Declaration order itself is untouched.
    assert_eq!(descriptor.fields()[0].name(), "id");
}

#[test]
fn sdl_without_description() {
    let descriptor = ObjectTypeDescriptor::new("Fleet")
        .add_field(FieldDescriptor::new("ships", non_null(list(non_null(named("Starship")))))).unwrap();
    assert_eq!(descriptor.to_sdl(), "type Fleet {\n  ships: [Starship!]!\n}");
}

#[test]
fn duplicate_field_is_rejected() {
    let result = starship().add_field(FieldDescriptor::new("name", GQL_FLOAT));
    assert_eq!(
        result.unwrap_err(),
        DuplicateNameError::Field {
            field_name: "name".to_string(),
            type_name: "Starship".to_string(),
        },
    );
}
