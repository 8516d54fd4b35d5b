use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_client::PrintOptions;
use libgraphql_client_tck::Scenario;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        help="Print everything on a single line.",
        long,
    )]
    compact: bool,

    #[arg(
        default_value_t=2,
        help="Spaces per nesting level (ignored with --compact).",
        long,
    )]
    indent_width: usize,

    #[arg(
        help="Print plain anonymous queries as `{ ... }`.",
        long,
    )]
    query_shorthand: bool,

    #[arg(
        help="Name of the scenario to render (see `graphql-tck list`).",
        name="SCENARIO",
    )]
    scenario_name: String,
}
impl RenderCmd {
    fn print_options(&self) -> PrintOptions {
        let options =
            if self.compact {
                PrintOptions::compact()
            } else {
                PrintOptions::pretty()
            };
        options
            .with_indent_width(self.indent_width)
            .with_query_shorthand(self.query_shorthand)
    }
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let Some(scenario) = Scenario::find(&self.scenario_name) else {
            let known = Scenario::all()
                .iter()
                .map(|scenario| format!("`{}`", scenario.name))
                .collect::<Vec<_>>()
                .join(", ");
            return CommandResult::stderr(format_args!(
                "{} Unknown scenario `{}`. Known scenarios: {known}",
                output_utils::RED_X,
                self.scenario_name,
            ));
        };

        log::debug!("Rendering `{}` with {:?}.", scenario.name, self.print_options());
        match (scenario.build)() {
            Ok(document) => CommandResult::stdout(format_args!(
                "{}",
                document.build_with(&self.print_options()),
            )),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to build `{}`: {err}",
                output_utils::RED_X,
                scenario.name,
            )),
        }
    }
}
