use crate::DuplicateNameError;
use crate::operation::Definition;
use crate::operation::Document;
use crate::operation::FragmentDefinition;
use crate::operation::Operation;

type Result<T> = std::result::Result<T, DuplicateNameError>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentBuilder {
    definitions: Vec<Definition>,
}
impl DocumentBuilder {
    /// Add a [`Definition`] after any previously added `Definition`s.
    pub fn add_definition(self, definition: impl Into<Definition>) -> Result<Self> {
        match definition.into() {
            Definition::Fragment(fragment) => self.add_fragment(fragment),
            Definition::Operation(operation) => self.add_operation(operation),
        }
    }

    /// Add a [`FragmentDefinition`] after any previously added
    /// `Definition`s.
    pub fn add_fragment(mut self, fragment: FragmentDefinition) -> Result<Self> {
        let is_duplicate = self.definitions.iter().any(|def| matches!(
            def,
            Definition::Fragment(existing) if existing.name() == fragment.name()
        ));
        if is_duplicate {
            return Err(DuplicateNameError::Fragment {
                fragment_name: fragment.name,
            });
        }
        self.definitions.push(Definition::Fragment(fragment));
        Ok(self)
    }

    /// Add an [`Operation`] after any previously added `Definition`s.
    ///
    /// Anonymous operations are never considered duplicates of one another.
    pub fn add_operation(mut self, operation: Operation) -> Result<Self> {
        if let Some(name) = operation.name() {
            let is_duplicate = self.definitions.iter().any(|def| matches!(
                def,
                Definition::Operation(existing) if existing.name() == Some(name)
            ));
            if is_duplicate {
                return Err(DuplicateNameError::Operation {
                    operation_name: name.to_string(),
                });
            }
        }
        self.definitions.push(Definition::Operation(operation));
        Ok(self)
    }

    /// Consume the [`DocumentBuilder`] to produce a [`Document`].
    pub fn build(self) -> Document {
        Document {
            definitions: self.definitions,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }
}
