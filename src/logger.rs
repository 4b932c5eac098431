//! Process logging setup. The builders only use the `log` facade; applications that want the
//! trace output on disk call one of these once at startup.

use log::LevelFilter;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::{
    CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
};
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::{Path, PathBuf};

use crate::devlog::TRACE_TARGET;

const ENC_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";
const ROLL_SIZE: u64 = 10 * 1024 * 1024;

fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.unwrap_or("info").to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

fn rolling_appender(
    base: &Path,
    stem: &str,
    keep: u32,
) -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
    let roller = FixedWindowRoller::builder()
        .build(&format!("{}", base.join(format!("{stem}.{{}}.log")).display()), keep)?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE)), Box::new(roller));
    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(ENC_PATTERN)))
        .build(base.join(format!("{stem}.log")), Box::new(policy))?;
    Ok(appender)
}

/// Configure logging globally for the process.
/// - dir: base directory for logs; if None, current directory.
/// - level: off|error|warn|info|debug|trace
/// - retention: number of rolled files to keep (default 7)
///
/// # Errors
/// Returns an error if the appenders cannot be built or a logger is already installed.
pub fn configure_logging(
    dir: Option<&Path>,
    level: Option<&str>,
    retention: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    configure_logging_with_trace(dir, level, retention, false)
}

/// Configure logging globally, optionally persisting builder traces (`trace_builder!`) to
/// `trace.log`.
///
/// # Errors
/// Returns an error if the appenders cannot be built or a logger is already installed.
pub fn configure_logging_with_trace(
    dir: Option<&Path>,
    level: Option<&str>,
    retention: Option<usize>,
    enable_trace: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let base = match dir {
        Some(d) => PathBuf::from(d),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    let keep = u32::try_from(retention.unwrap_or(7)).unwrap_or(u32::MAX);
    let lvl = parse_level(level);

    let app = rolling_appender(&base, "app", keep)?;
    let mut builder = Config::builder().appender(Appender::builder().build("app", Box::new(app)));
    if enable_trace {
        let trace = rolling_appender(&base, "trace", keep)?;
        builder = builder
            .appender(Appender::builder().build("trace", Box::new(trace)))
            .logger(
                Logger::builder()
                    .appender("trace")
                    .additive(false)
                    .build(TRACE_TARGET, LevelFilter::Trace),
            );
    } else {
        builder = builder
            .logger(Logger::builder().additive(false).build(TRACE_TARGET, LevelFilter::Off));
    }

    let config = builder.build(Root::builder().appender("app").build(lvl))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Configure logging from environment variables if present:
/// - BSON_PIPELINE_LOG_DIR
/// - BSON_PIPELINE_LOG_LEVEL
/// - BSON_PIPELINE_LOG_RETENTION
/// - BSON_PIPELINE_TRACE (1|true|yes)
///
/// # Errors
/// Same as [`configure_logging_with_trace`].
pub fn configure_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::var("BSON_PIPELINE_LOG_DIR").ok().map(PathBuf::from);
    let level = std::env::var("BSON_PIPELINE_LOG_LEVEL").ok();
    let retention =
        std::env::var("BSON_PIPELINE_LOG_RETENTION").ok().and_then(|s| s.parse::<usize>().ok());
    let trace_enabled = std::env::var("BSON_PIPELINE_TRACE")
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    configure_logging_with_trace(dir.as_deref(), level.as_deref(), retention, trace_enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_map_to_filters() {
        assert_eq!(parse_level(Some("ERROR")), LevelFilter::Error);
        assert_eq!(parse_level(Some("trace")), LevelFilter::Trace);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("bogus")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }
}
