//! Command-line surface and dispatch.
//!
//! The set of subcommands is the `Command` enum: built once by the parser,
//! immutable afterwards. `dispatch` maps a parsed invocation to its handler
//! and reduces the outcome to an `ExitStatus`; `main` owns the actual
//! `process::exit` call, which keeps dispatch testable in-process.

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{self, CommandContext, CommandError};
use crate::config;

#[derive(Debug, Parser)]
#[command(
    name = "fetcher",
    version,
    about = "Fetch League of Legends match and summoner raw data, cache matches locally, and export the cache to CSV"
)]
pub struct Cli {
    /// Alternative config file (default: ~/.config/fetcher.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Cache root directory (default: platform cache dir, or FETCHER_CACHE_DIR)
    #[arg(long, global = true, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a match by id, serving it from the local cache when possible
    #[command(name = "match")]
    Match(MatchArgs),
    /// Fetch summoner profiles by name (never cached)
    Summoner(SummonerArgs),
    /// Flatten the local match cache into CSV, one row per participant
    CacheToCsv(CacheToCsvArgs),
}

#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Numeric match id
    pub id: i64,

    /// Region the match was played in (e.g. euw, na, kr)
    #[arg(long)]
    pub region: Option<String>,

    /// Riot API token (overrides RIOT_API_TOKEN and the config file)
    #[arg(long)]
    pub token: Option<String>,

    /// Skip the cache entirely: always fetch, never store
    #[arg(long)]
    pub no_cache: bool,

    /// Print the full match as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SummonerArgs {
    /// Summoner names (up to 40 per invocation)
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Region to look the summoners up in
    #[arg(long)]
    pub region: Option<String>,

    /// Riot API token (overrides RIOT_API_TOKEN and the config file)
    #[arg(long)]
    pub token: Option<String>,

    /// Print resolved summoners as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CacheToCsvArgs {
    /// Write CSV to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only export matches cached for this region
    #[arg(long)]
    pub region: Option<String>,
}

/// Process outcome. The process exit code is exactly `code()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    UsageError,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::UsageError => 2,
        }
    }
}

/// Exit status for an argument-parsing outcome. Help and version requests
/// surface as clap "errors" but are successful terminations.
pub fn parse_exit_status(error: &clap::Error) -> ExitStatus {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Success,
        _ => ExitStatus::UsageError,
    }
}

/// Run the selected subcommand and reduce its outcome to an exit status.
pub async fn dispatch(cli: Cli) -> ExitStatus {
    let config = match &cli.config {
        Some(path) => match config::load_config_from(path) {
            Ok(config) => config,
            Err(e) => {
                commands::print_error(&format!("{}", e));
                return ExitStatus::UsageError;
            }
        },
        None => match config::load_config() {
            Ok(config) => config,
            Err(config::ConfigError::NotFound(_)) => config::Config::default(),
            Err(e) => {
                commands::print_error(&format!("{}", e));
                return ExitStatus::Failure;
            }
        },
    };

    let ctx = CommandContext {
        config,
        cache_dir_flag: cli.cache_dir.clone(),
    };

    let result: Result<(), CommandError> = match &cli.command {
        Command::Match(args) => commands::matches::run(args, &ctx).await,
        Command::Summoner(args) => commands::summoner::run(args, &ctx).await,
        Command::CacheToCsv(args) => commands::cache_to_csv::run(args, &ctx),
    };

    match result {
        Ok(()) => ExitStatus::Success,
        Err(e) => {
            commands::print_error(&format!("{}", e));
            e.exit_status()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Failure.code(), 1);
        assert_eq!(ExitStatus::UsageError.code(), 2);
    }

    #[test]
    fn registered_subcommands_parse() {
        let cli = Cli::try_parse_from(["fetcher", "match", "42", "--region", "euw"]).unwrap();
        assert!(matches!(cli.command, Command::Match(_)));

        let cli = Cli::try_parse_from(["fetcher", "summoner", "Funky Sayu"]).unwrap();
        assert!(matches!(cli.command, Command::Summoner(_)));

        let cli = Cli::try_parse_from(["fetcher", "cache-to-csv"]).unwrap();
        assert!(matches!(cli.command, Command::CacheToCsv(_)));
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        let error = Cli::try_parse_from(["fetcher", "frobnicate"]).unwrap_err();
        assert_eq!(parse_exit_status(&error), ExitStatus::UsageError);
    }

    #[test]
    fn no_arguments_is_a_usage_error() {
        let error = Cli::try_parse_from(["fetcher"]).unwrap_err();
        assert_eq!(parse_exit_status(&error), ExitStatus::UsageError);
    }

    #[test]
    fn help_request_is_a_successful_exit() {
        let error = Cli::try_parse_from(["fetcher", "--help"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse_exit_status(&error), ExitStatus::Success);
    }

    #[test]
    fn match_args_pass_through_unmodified() {
        let cli = Cli::try_parse_from([
            "fetcher", "match", "2609689220", "--region", "euw", "--no-cache", "--json",
        ])
        .unwrap();
        let Command::Match(args) = cli.command else {
            panic!("expected match subcommand");
        };
        assert_eq!(args.id, 2_609_689_220);
        assert_eq!(args.region.as_deref(), Some("euw"));
        assert!(args.no_cache);
        assert!(args.json);
    }

    #[test]
    fn summoner_requires_at_least_one_name() {
        assert!(Cli::try_parse_from(["fetcher", "summoner"]).is_err());
    }
}
