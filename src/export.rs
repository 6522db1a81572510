//! Cache-to-CSV conversion.
//!
//! Flattens cached matches into one record per participant so the result
//! can feed statistical tooling directly. Column order follows the record
//! struct; damage groups expand to `<prefix>_total`, `<prefix>_to_champions`
//! and `<prefix>_taken` columns.

use std::io::Write;

use serde::Serialize;

use crate::model::{MatchReference, Participant, TeamDetail};

#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Csv(e) => write!(f, "CSV write error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}

/// One CSV row: a participant in a match, with the match and team context.
#[derive(Debug, Serialize)]
struct ParticipantRecord<'a> {
    match_id: i64,
    region: &'a str,
    queue_type: &'a str,
    season: &'a str,
    map: &'a str,
    duration_secs: i64,
    team_id: i64,
    win: bool,
    participant_id: i64,
    summoner_id: i64,
    summoner_name: &'a str,
    champion_id: i64,
    kills: i64,
    deaths: i64,
    assists: i64,
    champion_level: i64,
    gold_earned: i64,
    gold_spent: i64,
    minions_killed: i64,
    neutral_minions_killed: i64,
    total_heal: i64,
    largest_critical_strike: i64,
    wards_placed: i64,
    wards_killed: i64,
    vision_wards_bought: i64,
    double_kills: i64,
    triple_kills: i64,
    quadra_kills: i64,
    penta_kills: i64,
    largest_killing_spree: i64,
    largest_multi_kill: i64,
    tower_kills: i64,
    inhibitor_kills: i64,
    first_blood_kill: bool,
    first_tower_kill: bool,
    magic_total: i64,
    magic_to_champions: i64,
    magic_taken: i64,
    physical_total: i64,
    physical_to_champions: i64,
    physical_taken: i64,
    true_total: i64,
    true_to_champions: i64,
    true_taken: i64,
    total_total: i64,
    total_to_champions: i64,
    total_taken: i64,
}

impl<'a> ParticipantRecord<'a> {
    fn new(reference: &'a MatchReference, team: &'a TeamDetail, p: &'a Participant) -> Self {
        let stats = &p.statistics;
        ParticipantRecord {
            match_id: reference.id,
            region: reference.region.token(),
            queue_type: reference.queue_type.token(),
            season: reference.season.token(),
            map: reference.detail.map.token(),
            duration_secs: reference.detail.duration_secs,
            team_id: team.id,
            win: team.winner,
            participant_id: p.id,
            summoner_id: p.summoner.id,
            summoner_name: &p.summoner.name,
            champion_id: p.champion_id,
            kills: stats.kills,
            deaths: stats.deaths,
            assists: stats.assists,
            champion_level: stats.champion_level,
            gold_earned: stats.gold_earned,
            gold_spent: stats.gold_spent,
            minions_killed: stats.minions_killed,
            neutral_minions_killed: stats.neutral_minions_killed,
            total_heal: stats.total_heal,
            largest_critical_strike: stats.largest_critical_strike,
            wards_placed: stats.wards_placed,
            wards_killed: stats.wards_killed,
            vision_wards_bought: stats.vision_wards_bought,
            double_kills: stats.double_kills,
            triple_kills: stats.triple_kills,
            quadra_kills: stats.quadra_kills,
            penta_kills: stats.penta_kills,
            largest_killing_spree: stats.largest_killing_spree,
            largest_multi_kill: stats.largest_multi_kill,
            tower_kills: stats.tower_kills,
            inhibitor_kills: stats.inhibitor_kills,
            first_blood_kill: stats.first_blood_kill,
            first_tower_kill: stats.first_tower_kill,
            magic_total: stats.magic_damages.total,
            magic_to_champions: stats.magic_damages.to_champions,
            magic_taken: stats.magic_damages.taken,
            physical_total: stats.physical_damages.total,
            physical_to_champions: stats.physical_damages.to_champions,
            physical_taken: stats.physical_damages.taken,
            true_total: stats.true_damages.total,
            true_to_champions: stats.true_damages.to_champions,
            true_taken: stats.true_damages.taken,
            total_total: stats.total_damages.total,
            total_to_champions: stats.total_damages.to_champions,
            total_taken: stats.total_damages.taken,
        }
    }
}

/// Write all participants of `matches` as CSV. Returns the number of
/// records written (the header row not included). An empty input still
/// produces the header.
pub fn write_csv<W: Write>(matches: &[MatchReference], out: W) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    let mut records = 0;

    if matches.is_empty() {
        // serde-driven headers only appear with the first record, so emit
        // them explicitly for the empty case.
        writer.write_record(HEADER)?;
    }

    for reference in matches {
        for team in &reference.detail.teams {
            for participant in &team.participants {
                writer.serialize(ParticipantRecord::new(reference, team, participant))?;
                records += 1;
            }
        }
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(records)
}

const HEADER: &[&str] = &[
    "match_id",
    "region",
    "queue_type",
    "season",
    "map",
    "duration_secs",
    "team_id",
    "win",
    "participant_id",
    "summoner_id",
    "summoner_name",
    "champion_id",
    "kills",
    "deaths",
    "assists",
    "champion_level",
    "gold_earned",
    "gold_spent",
    "minions_killed",
    "neutral_minions_killed",
    "total_heal",
    "largest_critical_strike",
    "wards_placed",
    "wards_killed",
    "vision_wards_bought",
    "double_kills",
    "triple_kills",
    "quadra_kills",
    "penta_kills",
    "largest_killing_spree",
    "largest_multi_kill",
    "tower_kills",
    "inhibitor_kills",
    "first_blood_kill",
    "first_tower_kill",
    "magic_total",
    "magic_to_champions",
    "magic_taken",
    "physical_total",
    "physical_to_champions",
    "physical_taken",
    "true_total",
    "true_to_champions",
    "true_taken",
    "total_total",
    "total_to_champions",
    "total_taken",
];
