/// The documentation order for the fields of an object type.
///
/// Purely presentational: it changes the order in which fields are listed
/// when a type is rendered for humans and has no effect on what the schema
/// means.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldsOrder(Vec<String>);
impl FieldsOrder {
    /// Order `items` (each named by `name_of`) according to this
    /// [`FieldsOrder`].
    ///
    /// Items whose names are listed come first, in listed order. The rest
    /// follow in their declaration order. Listed names that match no item, and
    /// repeated listings of a name, are ignored.
    pub fn apply<'a, T, F>(&self, items: &'a [T], name_of: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> &str,
    {
        let mut placed = vec![false; items.len()];
        let mut ordered = Vec::with_capacity(items.len());
        for listed_name in &self.0 {
            let found = items.iter().enumerate().find(|(idx, item)| {
                !placed[*idx] && name_of(item) == listed_name.as_str()
            });
            if let Some((idx, item)) = found {
                placed[idx] = true;
                ordered.push(item);
            }
        }
        ordered.extend(
            items.iter()
                .zip(placed)
                .filter(|(_, was_placed)| !was_placed)
                .map(|(item, _)| item),
        );
        ordered
    }

    pub fn field_names(&self) -> &[String] {
        &self.0
    }

    pub fn new<S: Into<String>>(field_names: impl IntoIterator<Item = S>) -> Self {
        Self(field_names.into_iter().map(Into::into).collect())
    }
}
