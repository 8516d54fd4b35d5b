use crate::Cli;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// The level the subscriber starts at, plus a warning to emit once it is
/// installed when `LOG_LEVEL` held something unrecognized.
#[derive(Debug, PartialEq)]
pub(crate) struct LogLevelChoice {
    pub level: tracing::Level,
    pub warning: Option<String>,
}

/// `--verbose` wins over `LOG_LEVEL`; an unset variable falls back to
/// `INFO`.
pub(crate) fn choose_log_level(
    verbose: bool,
    env_value: Option<&str>,
) -> LogLevelChoice {
    if verbose {
        return LogLevelChoice { level: tracing::Level::DEBUG, warning: None };
    }
    let Some(raw) = env_value.map(str::trim) else {
        return LogLevelChoice { level: DEFAULT_LOG_LEVEL, warning: None };
    };
    let level = match raw.to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    };
    match level {
        Some(level) => LogLevelChoice { level, warning: None },
        None => LogLevelChoice {
            level: DEFAULT_LOG_LEVEL,
            warning: Some(format!(
                "Invalid `LOG_LEVEL` environment variable value: `{raw}`"
            )),
        },
    }
}

/// Install a stderr subscriber so log lines never mix into rendered
/// documents on stdout.
pub(crate) fn setup_logger(cli: &Cli) {
    let env_value = std::env::var("LOG_LEVEL").ok();
    let choice = choose_log_level(cli.verbose, env_value.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(choice.level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{}`.", choice.level);

    if let Some(warning) = choice.warning {
        log::warn!("{warning}");
    }
}
