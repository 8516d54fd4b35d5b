//! Conformance kit for `libgraphql-client`.
//!
//! Each [`Scenario`] builds a request document with the client API and is
//! paired with a `.graphql` fixture holding the expected request text. A
//! scenario passes when the generated text is *equivalent* to the fixture
//! (see [`check_equivalent_graphql_request`]); exact whitespace does not
//! matter.

mod equivalence;
mod fixtures;
mod runner;
mod scenarios;

pub use equivalence::assert_equivalent_graphql_request;
pub use equivalence::check_equivalent_graphql_request;
pub use equivalence::EquivalenceError;
pub use equivalence::normalize_graphql_request;
pub use fixtures::fixtures_dir;
pub use fixtures::FixtureError;
pub use fixtures::read_fixture;
pub use runner::run_scenario;
pub use runner::run_scenarios;
pub use runner::TckResult;
pub use runner::TckResults;
pub use scenarios::Scenario;
