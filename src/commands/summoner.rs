//! `fetcher summoner` — fetch summoner profiles by name.
//!
//! Summoner data is mutable (level, icon, revision date), so unlike
//! matches it is never cached.

use crossterm::style::Color;

use super::{format_timestamp, print_status, CommandContext, CommandError};
use crate::cli::SummonerArgs;
use crate::model::Summoner;
use crate::riot::{canonical_name, RiotClient, MAX_SUMMONERS_PER_REQUEST};

pub async fn run(args: &SummonerArgs, ctx: &CommandContext) -> Result<(), CommandError> {
    if args.names.len() > MAX_SUMMONERS_PER_REQUEST {
        return Err(CommandError::Usage(format!(
            "at most {} summoner names per invocation, got {}",
            MAX_SUMMONERS_PER_REQUEST,
            args.names.len()
        )));
    }

    let region = ctx.region(args.region.as_deref())?;
    let token = ctx.token(args.token.as_deref())?;

    let client = RiotClient::new(region, &token);
    let by_key = client.get_summoners_by_name(&args.names).await?;

    // Report in the order the names were requested.
    let mut resolved: Vec<&Summoner> = Vec::new();
    for name in &args.names {
        match by_key.get(&canonical_name(name)) {
            Some(summoner) => resolved.push(summoner),
            None => print_status(
                &format!("Warning: no summoner named {:?} on {}\n", name, region),
                Color::DarkYellow,
            ),
        }
    }

    if resolved.is_empty() {
        return Err(CommandError::NoSummonerResolved);
    }

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&resolved).expect("summoners always serialize");
        println!("{}", rendered);
        return Ok(());
    }

    for summoner in resolved {
        println!(
            "{:<20} level {:<3} id {:<10} last revision {}",
            summoner.name,
            summoner.summoner_level,
            summoner.id,
            format_timestamp(summoner.revision_date)
        );
    }
    Ok(())
}
