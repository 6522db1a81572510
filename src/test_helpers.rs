//! Shared fixtures for unit tests. The sample match mirrors the shape of a
//! real v2.2 match payload: two teams, ten participants, identities, and
//! per-participant statistics derived deterministically from the
//! participant id.

use serde_json::{json, Value};

use crate::convert;
use crate::model::{MatchReference, RawMatch};

/// A raw match payload as the match endpoint would return it.
pub fn sample_match_json(match_id: i64) -> Value {
    let participants: Vec<Value> = (1..=10).map(sample_participant_json).collect();
    let identities: Vec<Value> = (1..=10)
        .map(|pid| {
            json!({
                "participantId": pid,
                "player": {
                    "summonerId": 20_000_000 + pid,
                    "summonerName": format!("Summoner{}", pid)
                }
            })
        })
        .collect();

    json!({
        "matchId": match_id,
        "matchCreation": 1_463_248_380_000i64,
        "matchDuration": 2172,
        "matchVersion": "6.9.1",
        "platformId": "EUW1",
        "region": "EUW",
        "queueType": "RANKED_SOLO_5x5",
        "season": "SEASON2016",
        "mapId": 11,
        "participants": participants,
        "participantIdentities": identities,
        "teams": [
            {
                "teamId": 100,
                "winner": true,
                "baronKills": 1,
                "dragonKills": 3,
                "towerKills": 9,
                "firstBaron": true,
                "firstDragon": true,
                "firstBlood": true,
                "firstTower": false,
                "firstInhibitor": true,
                "firstRiftHerald": false
            },
            {
                "teamId": 200,
                "winner": false,
                "baronKills": 0,
                "dragonKills": 1,
                "towerKills": 3,
                "firstBaron": false,
                "firstDragon": false,
                "firstBlood": false,
                "firstTower": true,
                "firstInhibitor": false,
                "firstRiftHerald": true
            }
        ]
    })
}

fn sample_participant_json(pid: i64) -> Value {
    json!({
        "participantId": pid,
        "championId": 100 + pid,
        "teamId": if pid <= 5 { 100 } else { 200 },
        "stats": {
            "kills": (pid % 5) + 3,
            "deaths": pid % 4,
            "assists": pid + 1,
            "champLevel": 12 + (pid % 6),
            "totalHeal": 1_500 + pid * 100,
            "largestCriticalStrike": 400 + pid * 10,
            "goldEarned": 9_000 + pid * 500,
            "goldSpent": 8_500 + pid * 500,
            "minionsKilled": 150 + pid * 10,
            "neutralMinionsKilled": 20 + pid,
            "neutralMinionsKilledEnemyJungle": pid,
            "neutralMinionsKilledTeamJungle": 10 + pid,
            "visionWardsBoughtInGame": pid % 3,
            "wardsPlaced": 8 + pid,
            "wardsKilled": pid % 5,
            "doubleKills": pid % 2,
            "tripleKills": 0,
            "quadraKills": 0,
            "pentaKills": 0,
            "unrealKills": 0,
            "killingSprees": pid % 3,
            "largestKillingSpree": (pid % 3) * 2,
            "largestMultiKill": (pid % 2) + 1,
            "inhibitorKills": pid % 2,
            "towerKills": pid % 3,
            "firstBloodAssist": false,
            "firstBloodKill": pid == 1,
            "firstInhibitorKill": pid == 3,
            "firstTowerAssist": pid == 6,
            "firstTowerKill": false,
            "magicDamageDealt": 10_000 + pid * 1_000,
            "magicDamageDealtToChampions": 5_000 + pid * 1_000,
            "magicDamageTaken": 3_000 + pid * 1_000,
            "physicalDamageDealt": 8_000 + pid * 1_000,
            "physicalDamageDealtToChampions": 4_000 + pid * 1_000,
            "physicalDamageTaken": 6_000 + pid * 1_000,
            "trueDamageDealt": 1_000 + pid * 1_000,
            "trueDamageDealtToChampions": 500 + pid * 100,
            "trueDamageTaken": 700 + pid * 100,
            "totalDamageDealt": 30_000 + pid * 1_000,
            "totalDamageDealtToChampions": 15_000 + pid * 1_000,
            "totalDamageTaken": 12_000 + pid * 1_000
        }
    })
}

/// The sample match, already converted to the domain model.
pub fn sample_match(match_id: i64) -> MatchReference {
    let raw: RawMatch =
        serde_json::from_value(sample_match_json(match_id)).expect("sample payload deserializes");
    convert::match_from_raw(raw).expect("sample payload converts")
}
