use crate::operation::FragmentDefinition;
use crate::operation::Operation;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// A top-level entry of a [`Document`](crate::operation::Document).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Definition {
    Fragment(FragmentDefinition),
    Operation(Operation),
}

#[inherent]
impl RequestNode for Definition {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        match self {
            Self::Fragment(fragment) => fragment.append_graphql(printer),
            Self::Operation(operation) => operation.append_graphql(printer),
        }
    }
}

impl std::convert::From<FragmentDefinition> for Definition {
    fn from(value: FragmentDefinition) -> Self {
        Self::Fragment(value)
    }
}
impl std::convert::From<Operation> for Definition {
    fn from(value: Operation) -> Self {
        Self::Operation(value)
    }
}
