use crate::check_equivalent_graphql_request;
use crate::read_fixture;
use crate::Scenario;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::path::Path;
use std::path::PathBuf;

/// Outcome of running a single [`Scenario`].
#[derive(Clone, Debug)]
pub struct TckResult {
    pub error_message: Option<String>,
    pub fixture_path: PathBuf,
    pub passed: bool,
    pub scenario_name: String,
}

#[derive(Clone, Debug, Default)]
pub struct TckResults {
    pub results: Vec<TckResult>,
}
impl TckResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| {
                let scenario_name = &r.scenario_name;
                let fixture_path = r.fixture_path.display();
                let error = r.error_message.as_deref().unwrap_or("error");
                format!("❌ {scenario_name}\n   Fixture: {fixture_path}\n   {error}")
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} scenarios failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let total = self.results.len();
        let failed = self.results.iter().filter(|r| !r.passed).count();
        let passed = total - failed;
        let emoji = if failed == 0 { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");

        let mut summary = format!(
            "{banner}\n{emoji} TCK SUMMARY\n{banner}\n\
            Total scenarios: {total}\nPassed: {passed}\nFailed: {failed}\n",
        );
        if failed > 0 {
            let failed_list = self.results
                .iter()
                .filter(|r| !r.passed)
                .map(|r| format!("  - {}", r.scenario_name))
                .collect::<Vec<_>>()
                .join("\n");
            summary.push_str(&format!("\nFailed scenarios:\n{failed_list}\n"));
        }
        summary.push_str(&banner);
        summary
    }
}

/// Build `scenario`'s document and compare it against its fixture under
/// `fixtures_dir`.
pub fn run_scenario(fixtures_dir: &Path, scenario: &Scenario) -> TckResult {
    let fixture_path = fixtures_dir.join(scenario.fixture);
    let failed = |error_message: String| TckResult {
        error_message: Some(error_message),
        fixture_path: fixture_path.clone(),
        passed: false,
        scenario_name: scenario.name.to_string(),
    };

    let expected = match read_fixture(fixtures_dir, scenario.fixture) {
        Ok(expected) => expected,
        Err(err) => return failed(err.to_string()),
    };
    let document = match (scenario.build)() {
        Ok(document) => document,
        Err(err) => return failed(format!("Failed to build the document: {err}")),
    };
    let generated = document.build();
    log::debug!("scenario `{}` generated:\n{generated}", scenario.name);

    match check_equivalent_graphql_request(&expected, &generated) {
        Ok(()) => TckResult {
            error_message: None,
            fixture_path,
            passed: true,
            scenario_name: scenario.name.to_string(),
        },
        Err(err) => failed(err.to_string()),
    }
}

/// Run every known [`Scenario`] against the fixtures in `fixtures_dir`.
pub fn run_scenarios(fixtures_dir: &Path) -> TckResults {
    let results = Scenario::all()
        .par_iter()
        .map(|scenario| run_scenario(fixtures_dir, scenario))
        .collect::<Vec<_>>();
    log::info!(
        "ran {} scenarios from {}",
        results.len(),
        fixtures_dir.display(),
    );
    TckResults { results }
}
