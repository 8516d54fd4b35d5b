use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_client_tck::Scenario;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct VerifyCmd {
    #[arg(
        help="Directory holding the `.graphql` fixtures. Defaults to the \
             fixtures bundled with libgraphql-client-tck.",
        name="FIXTURE_DIR",
    )]
    fixtures_dir: Option<PathBuf>,
}

/// Every `.graphql` file under `fixtures_dir` that no [`Scenario`] refers
/// to, as paths relative to `fixtures_dir`.
pub(crate) fn find_unclaimed_fixtures(
    fixtures_dir: &Path,
) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut unclaimed = vec![];
    for entry in WalkDir::new(fixtures_dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file: {:#?}.", entry.path());
            continue;
        }
        let is_graphql = entry.path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("graphql"));
        if !is_graphql {
            continue;
        }
        let Ok(relative_path) = entry.path().strip_prefix(fixtures_dir) else {
            continue;
        };
        let is_claimed = Scenario::all()
            .iter()
            .any(|scenario| Path::new(scenario.fixture) == relative_path);
        if !is_claimed {
            unclaimed.push(relative_path.to_path_buf());
        }
    }
    Ok(unclaimed)
}

#[inherent::inherent]
impl RunnableCommand for VerifyCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let fixtures_dir = self.fixtures_dir
            .unwrap_or_else(|| libgraphql_client_tck::fixtures_dir().to_path_buf());
        if !fixtures_dir.is_dir() {
            return CommandResult::stderr(format_args!(
                "{} {fixtures_dir:#?} is not a directory.",
                output_utils::RED_X,
            ));
        }

        log::debug!("Scanning {fixtures_dir:#?} for fixtures...");
        let unclaimed = match find_unclaimed_fixtures(&fixtures_dir) {
            Ok(unclaimed) => unclaimed,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to scan {fixtures_dir:#?}: {err}",
                output_utils::RED_X,
            )),
        };
        for path in &unclaimed {
            log::warn!(
                "{} No scenario uses the fixture at {path:#?}.",
                output_utils::WARNING_SIGN,
            );
        }

        let results = libgraphql_client_tck::run_scenarios(&fixtures_dir);
        if results.all_passed() {
            CommandResult::stdout(format_args!(
                "{}\n{} Verified {} scenarios ({} unclaimed fixtures).",
                results.summary(),
                output_utils::GREEN_CHECK,
                results.results.len(),
                unclaimed.len(),
            ))
        } else {
            CommandResult::stderr(format_args!(
                "{}\n\n{}",
                results.failure_report(),
                results.summary(),
            ))
        }
    }
}
