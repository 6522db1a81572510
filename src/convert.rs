//! Conversion of raw Riot payloads into the domain model.
//!
//! Participants are joined with their identities, grouped under their team,
//! and the per-prefix damage counters are folded into `DamageStatistic`
//! groups. Unknown region/queue/season tokens and unknown map ids are
//! conversion errors rather than silently kept as strings.

use std::collections::HashMap;

use crate::model::{
    DamageStatistic, Map, MatchDetail, MatchReference, Participant, PlayerStatistics, QueueType,
    RawMatch, RawParticipantStats, Region, Season, SummonerRef, TeamDetail,
};

#[derive(Debug)]
pub enum ConvertError {
    UnknownRegion(String),
    UnknownQueueType(String),
    UnknownSeason(String),
    UnknownMap(i64),
    MissingIdentity(i64),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::UnknownRegion(token) => write!(f, "unknown region: {}", token),
            ConvertError::UnknownQueueType(token) => write!(f, "unknown queue type: {}", token),
            ConvertError::UnknownSeason(token) => write!(f, "unknown season: {}", token),
            ConvertError::UnknownMap(id) => write!(f, "unknown map id: {}", id),
            ConvertError::MissingIdentity(id) => {
                write!(f, "participant {} has no matching identity", id)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Convert a raw match payload into a `MatchReference`.
pub fn match_from_raw(raw: RawMatch) -> Result<MatchReference, ConvertError> {
    let region = Region::parse(&raw.region)
        .ok_or_else(|| ConvertError::UnknownRegion(raw.region.clone()))?;
    let queue_type = QueueType::from_token(&raw.queue_type)
        .ok_or_else(|| ConvertError::UnknownQueueType(raw.queue_type.clone()))?;
    let season = Season::from_token(&raw.season)
        .ok_or_else(|| ConvertError::UnknownSeason(raw.season.clone()))?;
    let map = Map::from_id(raw.map_id).ok_or(ConvertError::UnknownMap(raw.map_id))?;

    let identities: HashMap<i64, SummonerRef> = raw
        .participant_identities
        .iter()
        .map(|identity| {
            (
                identity.participant_id,
                SummonerRef {
                    id: identity.player.summoner_id,
                    name: identity.player.summoner_name.clone(),
                },
            )
        })
        .collect();

    let mut teams = Vec::with_capacity(raw.teams.len());
    for raw_team in &raw.teams {
        let mut participants = Vec::new();
        for raw_participant in raw
            .participants
            .iter()
            .filter(|p| p.team_id == raw_team.team_id)
        {
            let summoner = identities
                .get(&raw_participant.participant_id)
                .cloned()
                .ok_or(ConvertError::MissingIdentity(raw_participant.participant_id))?;

            participants.push(Participant {
                id: raw_participant.participant_id,
                champion_id: raw_participant.champion_id,
                summoner,
                statistics: statistics_from_raw(&raw_participant.stats),
            });
        }
        participants.sort_by_key(|p| p.id);

        teams.push(TeamDetail {
            id: raw_team.team_id,
            winner: raw_team.winner,
            baron_kills: raw_team.baron_kills,
            dragon_kills: raw_team.dragon_kills,
            tower_kills: raw_team.tower_kills,
            first_baron: raw_team.first_baron,
            first_dragon: raw_team.first_dragon,
            first_blood: raw_team.first_blood,
            first_tower: raw_team.first_tower,
            first_inhibitor: raw_team.first_inhibitor,
            first_rift_herald: raw_team.first_rift_herald,
            participants,
        });
    }

    Ok(MatchReference {
        id: raw.match_id,
        timestamp: raw.match_creation,
        version: raw.match_version,
        platform_id: raw.platform_id,
        region,
        queue_type,
        season,
        detail: MatchDetail {
            map,
            duration_secs: raw.match_duration,
            teams,
        },
    })
}

fn statistics_from_raw(stats: &RawParticipantStats) -> PlayerStatistics {
    PlayerStatistics {
        kills: stats.kills,
        deaths: stats.deaths,
        assists: stats.assists,
        champion_level: stats.champ_level,
        total_heal: stats.total_heal,
        largest_critical_strike: stats.largest_critical_strike,
        gold_earned: stats.gold_earned,
        gold_spent: stats.gold_spent,
        minions_killed: stats.minions_killed,
        neutral_minions_killed: stats.neutral_minions_killed,
        neutral_minions_killed_enemy_jungle: stats.neutral_minions_killed_enemy_jungle,
        neutral_minions_killed_team_jungle: stats.neutral_minions_killed_team_jungle,
        vision_wards_bought: stats.vision_wards_bought_in_game,
        wards_placed: stats.wards_placed,
        wards_killed: stats.wards_killed,
        double_kills: stats.double_kills,
        triple_kills: stats.triple_kills,
        quadra_kills: stats.quadra_kills,
        penta_kills: stats.penta_kills,
        unreal_kills: stats.unreal_kills,
        killing_sprees: stats.killing_sprees,
        largest_killing_spree: stats.largest_killing_spree,
        largest_multi_kill: stats.largest_multi_kill,
        inhibitor_kills: stats.inhibitor_kills,
        tower_kills: stats.tower_kills,
        first_blood_assist: stats.first_blood_assist,
        first_blood_kill: stats.first_blood_kill,
        first_inhibitor_kill: stats.first_inhibitor_kill,
        first_tower_assist: stats.first_tower_assist,
        first_tower_kill: stats.first_tower_kill,
        magic_damages: DamageStatistic {
            total: stats.magic_damage_dealt,
            to_champions: stats.magic_damage_dealt_to_champions,
            taken: stats.magic_damage_taken,
        },
        physical_damages: DamageStatistic {
            total: stats.physical_damage_dealt,
            to_champions: stats.physical_damage_dealt_to_champions,
            taken: stats.physical_damage_taken,
        },
        true_damages: DamageStatistic {
            total: stats.true_damage_dealt,
            to_champions: stats.true_damage_dealt_to_champions,
            taken: stats.true_damage_taken,
        },
        total_damages: DamageStatistic {
            total: stats.total_damage_dealt,
            to_champions: stats.total_damage_dealt_to_champions,
            taken: stats.total_damage_taken,
        },
    }
}
