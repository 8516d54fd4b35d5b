mod list;
mod render;
mod verify;

use crate::Cli;
use crate::CommandResult;
use list::ListCmd;
use render::RenderCmd;
use verify::VerifyCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-tck")]
pub(crate) enum CommandEnum {
    /// List the known conformance scenarios and their fixtures.
    List(ListCmd),

    /// Print the request document a scenario builds.
    Render(Box<RenderCmd>),

    /// Check every scenario against its fixture.
    Verify(Box<VerifyCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::List(cmd) => cmd.run(cli).await,
            Self::Render(cmd) => cmd.run(cli).await,
            Self::Verify(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests {
    mod verify_tests;
}
