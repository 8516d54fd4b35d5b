use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_client_tck::Scenario;

#[derive(Debug, clap::Args)]
pub(crate) struct ListCmd {}

#[inherent::inherent]
impl RunnableCommand for ListCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let width = Scenario::all()
            .iter()
            .map(|scenario| scenario.name.len())
            .max()
            .unwrap_or_default();
        let lines = Scenario::all()
            .iter()
            .map(|scenario| format!("{:<width$}  {}", scenario.name, scenario.fixture))
            .collect::<Vec<_>>()
            .join("\n");
        CommandResult::stdout(format_args!("{lines}"))
    }
}
