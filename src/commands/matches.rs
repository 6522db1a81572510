//! `fetcher match` — fetch one match by id, through the local cache.

use crossterm::style::Color;

use super::{format_duration, format_timestamp, print_status, CommandContext, CommandError};
use crate::cache::MatchCache;
use crate::cli::MatchArgs;
use crate::convert;
use crate::model::MatchReference;
use crate::riot::RiotClient;

pub async fn run(args: &MatchArgs, ctx: &CommandContext) -> Result<(), CommandError> {
    if args.id <= 0 {
        return Err(CommandError::Usage(format!(
            "match id must be positive, got {}",
            args.id
        )));
    }

    let region = ctx.region(args.region.as_deref())?;
    let cache = MatchCache::open(ctx.cache_root());

    if !args.no_cache {
        if let Some(reference) = cache.get(region, args.id)? {
            print_status(
                &format!("Match {} served from cache\n", args.id),
                Color::DarkMagenta,
            );
            return report(&reference, args.json);
        }
    }

    let token = ctx.token(args.token.as_deref())?;
    let client = RiotClient::new(region, &token);
    let raw = client.get_match(args.id).await?;
    let reference = convert::match_from_raw(raw)?;

    if !args.no_cache {
        cache.put(&reference)?;
    }

    print_status(
        &format!("Match {} fetched from {}\n", args.id, region),
        Color::Green,
    );
    report(&reference, args.json)
}

fn report(reference: &MatchReference, json: bool) -> Result<(), CommandError> {
    if json {
        let rendered =
            serde_json::to_string_pretty(reference).expect("domain match always serializes");
        println!("{}", rendered);
        return Ok(());
    }

    println!(
        "Match {} — {} {} {} (patch {})",
        reference.id, reference.region, reference.queue_type, reference.season, reference.version
    );
    println!(
        "{}, {}, played {}",
        reference.detail.map.display_name(),
        format_duration(reference.detail.duration_secs),
        format_timestamp(reference.timestamp)
    );

    for team in &reference.detail.teams {
        let outcome = if team.winner { "victory" } else { "defeat" };
        println!(
            "Team {} — {} (barons {}, dragons {}, towers {})",
            team.id, outcome, team.baron_kills, team.dragon_kills, team.tower_kills
        );
        for p in &team.participants {
            let s = &p.statistics;
            println!(
                "  #{:<2} {:<20} champion {:<4} {:>2}/{:<2}/{:<2} gold {}",
                p.id, p.summoner.name, p.champion_id, s.kills, s.deaths, s.assists, s.gold_earned
            );
        }
    }
    Ok(())
}
