use crate::logging::choose_log_level;
use crate::logging::LogLevelChoice;

fn level(verbose: bool, env_value: Option<&str>) -> tracing::Level {
    choose_log_level(verbose, env_value).level
}

#[test]
fn unset_defaults_to_info() {
    assert_eq!(
        choose_log_level(false, None),
        LogLevelChoice { level: tracing::Level::INFO, warning: None },
    );
}

#[test]
fn verbose_flag_overrides_env() {
    assert_eq!(level(true, Some("error")), tracing::Level::DEBUG);
    assert_eq!(level(true, Some("nonsense")), tracing::Level::DEBUG);
}

#[test]
fn env_value_is_case_and_whitespace_insensitive() {
    assert_eq!(level(false, Some("TRACE")), tracing::Level::TRACE);
    assert_eq!(level(false, Some(" Debug\n")), tracing::Level::DEBUG);
    assert_eq!(level(false, Some("verbose")), tracing::Level::DEBUG);
    assert_eq!(level(false, Some("warn")), tracing::Level::WARN);
    assert_eq!(level(false, Some("Error")), tracing::Level::ERROR);
}

#[test]
fn unknown_env_value_warns_and_falls_back() {
    let choice = choose_log_level(false, Some(" loud "));
    assert_eq!(choice.level, tracing::Level::INFO);
    assert_eq!(
        choice.warning.as_deref(),
        Some("Invalid `LOG_LEVEL` environment variable value: `loud`"),
    );
}
