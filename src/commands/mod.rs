//! Subcommand handlers and the plumbing they share: settings resolution,
//! the command error taxonomy, and colored terminal output.

pub mod cache_to_csv;
pub mod matches;
pub mod summoner;

use std::io;
use std::path::PathBuf;

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::cache;
use crate::cache::CacheError;
use crate::cli::ExitStatus;
use crate::config::Config;
use crate::convert::ConvertError;
use crate::export::ExportError;
use crate::model::Region;
use crate::riot::RiotError;

/// Everything a handler needs besides its own arguments.
pub struct CommandContext {
    pub config: Config,
    /// `--cache-dir`, when given.
    pub cache_dir_flag: Option<PathBuf>,
}

impl CommandContext {
    /// Region resolution: flag, then config default.
    pub fn region(&self, flag: Option<&str>) -> Result<Region, CommandError> {
        let token = flag.or(self.config.region.as_deref()).ok_or_else(|| {
            CommandError::Usage(
                "no region given: pass --region or set \"region\" in the config".to_string(),
            )
        })?;
        Region::parse(token)
            .ok_or_else(|| CommandError::Usage(format!("unknown region: {}", token)))
    }

    /// Token resolution: flag, then RIOT_API_TOKEN, then config.
    pub fn token(&self, flag: Option<&str>) -> Result<String, CommandError> {
        resolve_token(
            flag,
            std::env::var("RIOT_API_TOKEN").ok().as_deref(),
            &self.config,
        )
    }

    /// Cache root resolution: flag, then FETCHER_CACHE_DIR, then config,
    /// then the platform default.
    pub fn cache_root(&self) -> PathBuf {
        resolve_cache_root(
            self.cache_dir_flag.as_ref(),
            std::env::var_os("FETCHER_CACHE_DIR").map(PathBuf::from),
            &self.config,
        )
    }
}

pub fn resolve_token(
    flag: Option<&str>,
    env: Option<&str>,
    config: &Config,
) -> Result<String, CommandError> {
    flag.or(env)
        .or(config.riot_api_token.as_deref())
        .map(str::to_string)
        .ok_or(CommandError::MissingToken)
}

pub fn resolve_cache_root(
    flag: Option<&PathBuf>,
    env: Option<PathBuf>,
    config: &Config,
) -> PathBuf {
    flag.cloned()
        .or(env)
        .or_else(|| config.cache_dir.clone())
        .or_else(cache::default_root)
        .unwrap_or_else(|| PathBuf::from(".fetcher-cache"))
}

#[derive(Debug)]
pub enum CommandError {
    /// Bad user input this layer can detect itself.
    Usage(String),
    /// No API token from flag, environment, or config.
    MissingToken,
    Riot(RiotError),
    Convert(ConvertError),
    Cache(CacheError),
    Export(ExportError),
    Io(std::io::Error),
    /// None of the requested summoner names resolved.
    NoSummonerResolved,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(msg) => write!(f, "{}", msg),
            CommandError::MissingToken => write!(
                f,
                "no Riot API token: pass --token, set RIOT_API_TOKEN, or add \"riot_api_token\" to the config"
            ),
            CommandError::Riot(e) => write!(f, "{}", e),
            CommandError::Convert(e) => write!(f, "conversion failed: {}", e),
            CommandError::Cache(e) => write!(f, "{}", e),
            CommandError::Export(e) => write!(f, "{}", e),
            CommandError::Io(e) => write!(f, "IO error: {}", e),
            CommandError::NoSummonerResolved => {
                write!(f, "none of the requested summoners were found")
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<RiotError> for CommandError {
    fn from(e: RiotError) -> Self {
        CommandError::Riot(e)
    }
}

impl From<ConvertError> for CommandError {
    fn from(e: ConvertError) -> Self {
        CommandError::Convert(e)
    }
}

impl From<CacheError> for CommandError {
    fn from(e: CacheError) -> Self {
        CommandError::Cache(e)
    }
}

impl From<ExportError> for CommandError {
    fn from(e: ExportError) -> Self {
        CommandError::Export(e)
    }
}

impl From<std::io::Error> for CommandError {
    fn from(e: std::io::Error) -> Self {
        CommandError::Io(e)
    }
}

impl CommandError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            CommandError::Usage(_) => ExitStatus::UsageError,
            _ => ExitStatus::Failure,
        }
    }
}

/// Status and progress messages go to stderr so stdout stays clean for
/// data output (JSON, CSV).
pub fn print_status(message: &str, color: Color) {
    let mut stderr = io::stderr();
    let _ = execute!(
        stderr,
        SetForegroundColor(color),
        Print(message),
        ResetColor
    );
}

pub fn print_error(message: &str) {
    print_status(&format!("Error: {}\n", message), Color::Red);
}

/// Render an epoch-millisecond timestamp for human output.
pub fn format_timestamp(millis: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => format!("{}ms", millis),
    }
}

/// Render a duration in seconds as "36m12s".
pub fn format_duration(secs: i64) -> String {
    format!("{}m{:02}s", secs / 60, secs % 60)
}
