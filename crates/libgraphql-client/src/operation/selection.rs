use crate::operation::Field;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::Printer;
use crate::RequestNode;
use inherent::inherent;

/// One entry of a [`SelectionSet`](crate::operation::SelectionSet).
///
/// See [Selection Sets](https://spec.graphql.org/October2021/#sec-Selection-Sets).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[inherent]
impl RequestNode for Selection {
    pub fn append_graphql(&self, printer: &mut Printer<'_>) {
        match self {
            Self::Field(field) => field.append_graphql(printer),
            Self::FragmentSpread(spread) => spread.append_graphql(printer),
            Self::InlineFragment(inline) => inline.append_graphql(printer),
        }
    }
}

impl std::convert::From<Field> for Selection {
    fn from(value: Field) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<FragmentSpread> for Selection {
    fn from(value: FragmentSpread) -> Self {
        Self::FragmentSpread(value)
    }
}
impl std::convert::From<InlineFragment> for Selection {
    fn from(value: InlineFragment) -> Self {
        Self::InlineFragment(value)
    }
}
