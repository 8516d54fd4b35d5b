/// The kind of an [`Operation`](crate::operation::Operation), which decides
/// the keyword it is printed with.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

pub const QUERY: OperationKind = OperationKind::Query;
pub const MUTATION: OperationKind = OperationKind::Mutation;
pub const SUBSCRIPTION: OperationKind = OperationKind::Subscription;
