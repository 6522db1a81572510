//! `fetcher cache-to-csv` — flatten the match cache into CSV.

use std::fs::File;
use std::io;

use crossterm::style::Color;

use super::{print_status, CommandContext, CommandError};
use crate::cache::MatchCache;
use crate::cli::CacheToCsvArgs;
use crate::export;
use crate::model::Region;

pub fn run(args: &CacheToCsvArgs, ctx: &CommandContext) -> Result<(), CommandError> {
    let region = match args.region.as_deref() {
        Some(token) => Some(Region::parse(token).ok_or_else(|| {
            CommandError::Usage(format!("unknown region: {}", token))
        })?),
        None => None,
    };

    let cache = MatchCache::open(ctx.cache_root());
    let matches = cache.entries(region)?;

    let records = match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            export::write_csv(&matches, file)?
        }
        None => export::write_csv(&matches, io::stdout().lock())?,
    };

    print_status(
        &format!(
            "Exported {} participant rows from {} cached matches\n",
            records,
            matches.len()
        ),
        Color::Green,
    );
    Ok(())
}
