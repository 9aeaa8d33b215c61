use std::path::PathBuf;

use clap::Parser;
use liftsync_domain::{MAX_WEEK, MatchPolicy, SyncError, WeekRange};
use liftsync_storage::rest::DEFAULT_BASE_URL;
use log::LevelFilter;

pub const API_KEY_VARIABLE: &str = "HEVY_API_KEY";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "liftsync",
    version,
    about = "Synchronize a periodized training program with Hevy routines"
)]
pub struct Args {
    /// Program file with one line per exercise occurrence
    #[arg(long, default_value = "16-week-powerlifting-program.csv")]
    pub csv: PathBuf,

    /// Program name used in the routine folder titles
    #[arg(long, default_value = "15 Week Periodized Program")]
    pub program: String,

    /// Week (N) or inclusive week range (N-M) to synchronize
    #[arg(long)]
    pub week: Option<WeekRange>,

    /// Show what would be synchronized without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Lowest name similarity accepted for approximate exercise matches
    #[arg(long, default_value_t = MatchPolicy::default().threshold, value_parser = parse_threshold)]
    pub match_threshold: f64,

    #[arg(long, env = API_KEY_VARIABLE, hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "HEVY_API_BASE", default_value = DEFAULT_BASE_URL)]
    pub api_base: String,

    /// Log debug messages
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold = value
        .parse::<f64>()
        .map_err(|err| format!("{value}: {err}"))?;
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("{value} is not between 0 and 1"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Sync { api_key: String },
    /// Read-only listing with a key, no remote calls at all without one.
    Simulate { api_key: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub csv: PathBuf,
    pub program: String,
    pub weeks: WeekRange,
    pub policy: MatchPolicy,
    pub api_base: String,
    pub mode: Mode,
}

impl Args {
    #[must_use]
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = SyncError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let api_key = args.api_key.filter(|key| !key.trim().is_empty());
        let mode = if args.dry_run {
            Mode::Simulate { api_key }
        } else {
            Mode::Sync {
                api_key: api_key.ok_or(SyncError::MissingCredential(API_KEY_VARIABLE))?,
            }
        };
        Ok(Self {
            csv: args.csv,
            program: args.program,
            weeks: args.week.unwrap_or(WeekRange {
                first: 1,
                last: MAX_WEEK,
            }),
            policy: MatchPolicy {
                threshold: args.match_threshold,
            },
            api_base: args.api_base.trim_end_matches('/').to_string(),
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn args(flags: &[&str]) -> Args {
        let mut args =
            Args::try_parse_from(std::iter::once("liftsync").chain(flags.iter().copied()))
                .unwrap();
        if !flags.contains(&"--api-key") {
            args.api_key = None;
        }
        args
    }

    #[test]
    fn test_defaults() {
        let config = Config::try_from(args(&["--dry-run"])).unwrap();

        assert_eq!(config.csv, PathBuf::from("16-week-powerlifting-program.csv"));
        assert_eq!(config.program, "15 Week Periodized Program");
        assert_eq!(config.weeks, WeekRange { first: 1, last: 15 });
        assert_eq!(config.policy, MatchPolicy::default());
        assert_eq!(config.mode, Mode::Simulate { api_key: None });
    }

    #[test]
    fn test_sync_mode() {
        let config = Config::try_from(args(&[
            "--api-key",
            "secret",
            "--week",
            "3-5",
            "--program",
            "Block 2",
            "--match-threshold",
            "0.8",
            "--verbose",
        ]))
        .unwrap();

        assert_eq!(
            config.mode,
            Mode::Sync {
                api_key: "secret".to_string()
            }
        );
        assert_eq!(config.weeks, WeekRange { first: 3, last: 5 });
        assert_eq!(config.program, "Block 2");
        assert_eq!(config.policy, MatchPolicy { threshold: 0.8 });
    }

    #[test]
    fn test_single_week() {
        let config = Config::try_from(args(&["--dry-run", "--week", "4"])).unwrap();

        assert_eq!(config.weeks, WeekRange { first: 4, last: 4 });
    }

    #[test]
    fn test_simulate_mode_keeps_key() {
        let config = Config::try_from(args(&["--dry-run", "--api-key", "secret"])).unwrap();

        assert_eq!(
            config.mode,
            Mode::Simulate {
                api_key: Some("secret".to_string())
            }
        );
    }

    #[rstest]
    #[case::absent(&[])]
    #[case::blank(&["--api-key", " "])]
    fn test_missing_credential(#[case] flags: &[&str]) {
        assert!(matches!(
            Config::try_from(args(flags)),
            Err(SyncError::MissingCredential("HEVY_API_KEY"))
        ));
    }

    #[test]
    fn test_api_base_trailing_slash() {
        let config = Config::try_from(args(&[
            "--dry-run",
            "--api-base",
            "http://localhost:8080/v1/",
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://localhost:8080/v1");
    }

    #[rstest]
    #[case::quiet(&["--quiet"], LevelFilter::Warn)]
    #[case::verbose(&["-v"], LevelFilter::Debug)]
    #[case::default(&[], LevelFilter::Info)]
    fn test_level(#[case] flags: &[&str], #[case] expected: LevelFilter) {
        assert_eq!(args(flags).level(), expected);
    }

    #[rstest]
    #[case::above_one(&["--match-threshold", "1.5"])]
    #[case::not_a_number(&["--match-threshold", "high"])]
    #[case::reversed_weeks(&["--week", "5-3"])]
    #[case::verbose_and_quiet(&["--verbose", "--quiet"])]
    fn test_invalid_arguments(#[case] flags: &[&str]) {
        assert!(
            Args::try_parse_from(std::iter::once("liftsync").chain(flags.iter().copied()))
                .is_err()
        );
    }
}
