use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Riot platform region. Tokens match the API's upper-case region names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Br,
    Eune,
    Euw,
    Jp,
    Kr,
    Lan,
    Las,
    Na,
    Oce,
    Ru,
    Tr,
}

impl Region {
    pub const ALL: [Region; 11] = [
        Region::Br,
        Region::Eune,
        Region::Euw,
        Region::Jp,
        Region::Kr,
        Region::Lan,
        Region::Las,
        Region::Na,
        Region::Oce,
        Region::Ru,
        Region::Tr,
    ];

    /// Upper-case API token, e.g. "EUW".
    pub fn token(&self) -> &'static str {
        match self {
            Region::Br => "BR",
            Region::Eune => "EUNE",
            Region::Euw => "EUW",
            Region::Jp => "JP",
            Region::Kr => "KR",
            Region::Lan => "LAN",
            Region::Las => "LAS",
            Region::Na => "NA",
            Region::Oce => "OCE",
            Region::Ru => "RU",
            Region::Tr => "TR",
        }
    }

    /// Lower-case form used in hosts and URL paths.
    pub fn slug(&self) -> String {
        self.token().to_lowercase()
    }

    /// Case-insensitive parse of an API token ("euw", "EUW", ...).
    pub fn parse(s: &str) -> Option<Region> {
        let upper = s.trim().to_uppercase();
        Region::ALL.iter().copied().find(|r| r.token() == upper)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Region::parse(&s).ok_or_else(|| D::Error::custom(format!("unknown region: {}", s)))
    }
}

/// Queue the match was played in, as reported by the match endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueType {
    Custom,
    Normal5x5Blind,
    Normal5x5Draft,
    Normal3x3,
    RankedSolo5x5,
    RankedPremade5x5,
    RankedPremade3x3,
    RankedTeam3x3,
    RankedTeam5x5,
    TeamBuilderDraftRanked5x5,
    TeamBuilderDraftUnranked5x5,
    Bot5x5Intro,
    Bot5x5Beginner,
    Bot5x5Intermediate,
    BotTt3x3,
    Aram5x5,
    Urf5x5,
    OneForAll5x5,
}

impl QueueType {
    pub fn token(&self) -> &'static str {
        match self {
            QueueType::Custom => "CUSTOM",
            QueueType::Normal5x5Blind => "NORMAL_5x5_BLIND",
            QueueType::Normal5x5Draft => "NORMAL_5x5_DRAFT",
            QueueType::Normal3x3 => "NORMAL_3x3",
            QueueType::RankedSolo5x5 => "RANKED_SOLO_5x5",
            QueueType::RankedPremade5x5 => "RANKED_PREMADE_5x5",
            QueueType::RankedPremade3x3 => "RANKED_PREMADE_3x3",
            QueueType::RankedTeam3x3 => "RANKED_TEAM_3x3",
            QueueType::RankedTeam5x5 => "RANKED_TEAM_5x5",
            QueueType::TeamBuilderDraftRanked5x5 => "TEAM_BUILDER_DRAFT_RANKED_5x5",
            QueueType::TeamBuilderDraftUnranked5x5 => "TEAM_BUILDER_DRAFT_UNRANKED_5x5",
            QueueType::Bot5x5Intro => "BOT_5x5_INTRO",
            QueueType::Bot5x5Beginner => "BOT_5x5_BEGINNER",
            QueueType::Bot5x5Intermediate => "BOT_5x5_INTERMEDIATE",
            QueueType::BotTt3x3 => "BOT_TT_3x3",
            QueueType::Aram5x5 => "ARAM_5x5",
            QueueType::Urf5x5 => "URF_5x5",
            QueueType::OneForAll5x5 => "ONEFORALL_5x5",
        }
    }

    pub fn from_token(s: &str) -> Option<QueueType> {
        const ALL: [QueueType; 18] = [
            QueueType::Custom,
            QueueType::Normal5x5Blind,
            QueueType::Normal5x5Draft,
            QueueType::Normal3x3,
            QueueType::RankedSolo5x5,
            QueueType::RankedPremade5x5,
            QueueType::RankedPremade3x3,
            QueueType::RankedTeam3x3,
            QueueType::RankedTeam5x5,
            QueueType::TeamBuilderDraftRanked5x5,
            QueueType::TeamBuilderDraftUnranked5x5,
            QueueType::Bot5x5Intro,
            QueueType::Bot5x5Beginner,
            QueueType::Bot5x5Intermediate,
            QueueType::BotTt3x3,
            QueueType::Aram5x5,
            QueueType::Urf5x5,
            QueueType::OneForAll5x5,
        ];
        ALL.iter().copied().find(|q| q.token() == s)
    }
}

impl std::fmt::Display for QueueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for QueueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for QueueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        QueueType::from_token(&s)
            .ok_or_else(|| D::Error::custom(format!("unknown queue type: {}", s)))
    }
}

/// Season the match belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    PreSeason3,
    Season3,
    PreSeason2014,
    Season2014,
    PreSeason2015,
    Season2015,
    PreSeason2016,
    Season2016,
}

impl Season {
    pub fn token(&self) -> &'static str {
        match self {
            Season::PreSeason3 => "PRESEASON3",
            Season::Season3 => "SEASON3",
            Season::PreSeason2014 => "PRESEASON2014",
            Season::Season2014 => "SEASON2014",
            Season::PreSeason2015 => "PRESEASON2015",
            Season::Season2015 => "SEASON2015",
            Season::PreSeason2016 => "PRESEASON2016",
            Season::Season2016 => "SEASON2016",
        }
    }

    pub fn from_token(s: &str) -> Option<Season> {
        const ALL: [Season; 8] = [
            Season::PreSeason3,
            Season::Season3,
            Season::PreSeason2014,
            Season::Season2014,
            Season::PreSeason2015,
            Season::Season2015,
            Season::PreSeason2016,
            Season::Season2016,
        ];
        ALL.iter().copied().find(|s2| s2.token() == s)
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Season::from_token(&s).ok_or_else(|| D::Error::custom(format!("unknown season: {}", s)))
    }
}

/// Game map, resolved from the numeric map id of the raw payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Map {
    SummonersRiftSummer,
    SummonersRiftAutumn,
    ProvingGrounds,
    CrystalScar,
    TwistedTreeline,
    SummonersRift,
    HowlingAbyss,
    ButchersBridge,
}

impl Map {
    pub fn from_id(id: i64) -> Option<Map> {
        match id {
            1 => Some(Map::SummonersRiftSummer),
            2 => Some(Map::SummonersRiftAutumn),
            3 => Some(Map::ProvingGrounds),
            8 => Some(Map::CrystalScar),
            10 => Some(Map::TwistedTreeline),
            11 => Some(Map::SummonersRift),
            12 => Some(Map::HowlingAbyss),
            14 => Some(Map::ButchersBridge),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Map::SummonersRiftSummer => "SUMMONERS_RIFT_SUMMER",
            Map::SummonersRiftAutumn => "SUMMONERS_RIFT_AUTUMN",
            Map::ProvingGrounds => "PROVING_GROUNDS",
            Map::CrystalScar => "CRYSTAL_SCAR",
            Map::TwistedTreeline => "TWISTED_TREELINE",
            Map::SummonersRift => "SUMMONERS_RIFT",
            Map::HowlingAbyss => "HOWLING_ABYSS",
            Map::ButchersBridge => "BUTCHERS_BRIDGE",
        }
    }

    pub fn from_token(s: &str) -> Option<Map> {
        const ALL: [Map; 8] = [
            Map::SummonersRiftSummer,
            Map::SummonersRiftAutumn,
            Map::ProvingGrounds,
            Map::CrystalScar,
            Map::TwistedTreeline,
            Map::SummonersRift,
            Map::HowlingAbyss,
            Map::ButchersBridge,
        ];
        ALL.iter().copied().find(|m| m.token() == s)
    }

    /// Human-readable name for summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            Map::SummonersRiftSummer => "Summoner's Rift (summer)",
            Map::SummonersRiftAutumn => "Summoner's Rift (autumn)",
            Map::ProvingGrounds => "Proving Grounds",
            Map::CrystalScar => "Crystal Scar",
            Map::TwistedTreeline => "Twisted Treeline",
            Map::SummonersRift => "Summoner's Rift",
            Map::HowlingAbyss => "Howling Abyss",
            Map::ButchersBridge => "Butcher's Bridge",
        }
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Map {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Map::from_token(&s).ok_or_else(|| D::Error::custom(format!("unknown map: {}", s)))
    }
}

/// Damage dealt/taken totals for one damage type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageStatistic {
    pub total: i64,
    pub to_champions: i64,
    pub taken: i64,
}

/// Per-participant end-of-game statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStatistics {
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub champion_level: i64,
    pub total_heal: i64,
    pub largest_critical_strike: i64,
    pub gold_earned: i64,
    pub gold_spent: i64,
    pub minions_killed: i64,
    pub neutral_minions_killed: i64,
    pub neutral_minions_killed_enemy_jungle: i64,
    pub neutral_minions_killed_team_jungle: i64,
    pub vision_wards_bought: i64,
    pub wards_placed: i64,
    pub wards_killed: i64,
    pub double_kills: i64,
    pub triple_kills: i64,
    pub quadra_kills: i64,
    pub penta_kills: i64,
    pub unreal_kills: i64,
    pub killing_sprees: i64,
    pub largest_killing_spree: i64,
    pub largest_multi_kill: i64,
    pub inhibitor_kills: i64,
    pub tower_kills: i64,
    pub first_blood_assist: bool,
    pub first_blood_kill: bool,
    pub first_inhibitor_kill: bool,
    pub first_tower_assist: bool,
    pub first_tower_kill: bool,
    pub magic_damages: DamageStatistic,
    pub physical_damages: DamageStatistic,
    pub true_damages: DamageStatistic,
    pub total_damages: DamageStatistic,
}

/// Identity of the player behind a participant slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummonerRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    pub id: i64,
    pub champion_id: i64,
    pub summoner: SummonerRef,
    pub statistics: PlayerStatistics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamDetail {
    pub id: i64,
    pub winner: bool,
    pub baron_kills: i64,
    pub dragon_kills: i64,
    pub tower_kills: i64,
    pub first_baron: bool,
    pub first_dragon: bool,
    pub first_blood: bool,
    pub first_tower: bool,
    pub first_inhibitor: bool,
    pub first_rift_herald: bool,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub map: Map,
    /// Match duration in seconds.
    pub duration_secs: i64,
    pub teams: Vec<TeamDetail>,
}

/// A fully converted match. This is what the cache stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReference {
    pub id: i64,
    /// Match creation, epoch milliseconds.
    pub timestamp: i64,
    pub version: String,
    pub platform_id: String,
    pub region: Region,
    pub queue_type: QueueType,
    pub season: Season,
    pub detail: MatchDetail,
}

/// A summoner profile as returned by the by-name endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summoner {
    pub id: i64,
    pub name: String,
    pub summoner_level: i64,
    pub profile_icon_id: i64,
    /// Last profile modification, epoch milliseconds.
    pub revision_date: i64,
}

// ---------------------------------------------------------------------------
// Wire types: the raw JSON shapes of the Riot endpoints. Field names follow
// the API's camelCase. Counters and flags the API omits when zero default.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RawMatch {
    #[serde(rename = "matchId")]
    pub match_id: i64,
    #[serde(rename = "matchCreation")]
    pub match_creation: i64,
    #[serde(rename = "matchDuration")]
    pub match_duration: i64,
    #[serde(rename = "matchVersion")]
    pub match_version: String,
    #[serde(rename = "platformId")]
    pub platform_id: String,
    pub region: String,
    #[serde(rename = "queueType")]
    pub queue_type: String,
    pub season: String,
    #[serde(rename = "mapId")]
    pub map_id: i64,
    pub participants: Vec<RawParticipant>,
    #[serde(rename = "participantIdentities")]
    pub participant_identities: Vec<RawParticipantIdentity>,
    pub teams: Vec<RawTeam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawParticipant {
    #[serde(rename = "participantId")]
    pub participant_id: i64,
    #[serde(rename = "championId")]
    pub champion_id: i64,
    #[serde(rename = "teamId")]
    pub team_id: i64,
    pub stats: RawParticipantStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawParticipantIdentity {
    #[serde(rename = "participantId")]
    pub participant_id: i64,
    pub player: RawPlayer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayer {
    #[serde(rename = "summonerId")]
    pub summoner_id: i64,
    #[serde(rename = "summonerName")]
    pub summoner_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTeam {
    #[serde(rename = "teamId")]
    pub team_id: i64,
    #[serde(default)]
    pub winner: bool,
    #[serde(rename = "baronKills", default)]
    pub baron_kills: i64,
    #[serde(rename = "dragonKills", default)]
    pub dragon_kills: i64,
    #[serde(rename = "towerKills", default)]
    pub tower_kills: i64,
    #[serde(rename = "firstBaron", default)]
    pub first_baron: bool,
    #[serde(rename = "firstDragon", default)]
    pub first_dragon: bool,
    #[serde(rename = "firstBlood", default)]
    pub first_blood: bool,
    #[serde(rename = "firstTower", default)]
    pub first_tower: bool,
    #[serde(rename = "firstInhibitor", default)]
    pub first_inhibitor: bool,
    #[serde(rename = "firstRiftHerald", default)]
    pub first_rift_herald: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParticipantStats {
    #[serde(default)]
    pub kills: i64,
    #[serde(default)]
    pub deaths: i64,
    #[serde(default)]
    pub assists: i64,
    #[serde(rename = "champLevel", default)]
    pub champ_level: i64,
    #[serde(rename = "totalHeal", default)]
    pub total_heal: i64,
    #[serde(rename = "largestCriticalStrike", default)]
    pub largest_critical_strike: i64,
    #[serde(rename = "goldEarned", default)]
    pub gold_earned: i64,
    #[serde(rename = "goldSpent", default)]
    pub gold_spent: i64,
    #[serde(rename = "minionsKilled", default)]
    pub minions_killed: i64,
    #[serde(rename = "neutralMinionsKilled", default)]
    pub neutral_minions_killed: i64,
    #[serde(rename = "neutralMinionsKilledEnemyJungle", default)]
    pub neutral_minions_killed_enemy_jungle: i64,
    #[serde(rename = "neutralMinionsKilledTeamJungle", default)]
    pub neutral_minions_killed_team_jungle: i64,
    #[serde(rename = "visionWardsBoughtInGame", default)]
    pub vision_wards_bought_in_game: i64,
    #[serde(rename = "wardsPlaced", default)]
    pub wards_placed: i64,
    #[serde(rename = "wardsKilled", default)]
    pub wards_killed: i64,
    #[serde(rename = "doubleKills", default)]
    pub double_kills: i64,
    #[serde(rename = "tripleKills", default)]
    pub triple_kills: i64,
    #[serde(rename = "quadraKills", default)]
    pub quadra_kills: i64,
    #[serde(rename = "pentaKills", default)]
    pub penta_kills: i64,
    #[serde(rename = "unrealKills", default)]
    pub unreal_kills: i64,
    #[serde(rename = "killingSprees", default)]
    pub killing_sprees: i64,
    #[serde(rename = "largestKillingSpree", default)]
    pub largest_killing_spree: i64,
    #[serde(rename = "largestMultiKill", default)]
    pub largest_multi_kill: i64,
    #[serde(rename = "inhibitorKills", default)]
    pub inhibitor_kills: i64,
    #[serde(rename = "towerKills", default)]
    pub tower_kills: i64,
    #[serde(rename = "firstBloodAssist", default)]
    pub first_blood_assist: bool,
    #[serde(rename = "firstBloodKill", default)]
    pub first_blood_kill: bool,
    #[serde(rename = "firstInhibitorKill", default)]
    pub first_inhibitor_kill: bool,
    #[serde(rename = "firstTowerAssist", default)]
    pub first_tower_assist: bool,
    #[serde(rename = "firstTowerKill", default)]
    pub first_tower_kill: bool,
    #[serde(rename = "magicDamageDealt", default)]
    pub magic_damage_dealt: i64,
    #[serde(rename = "magicDamageDealtToChampions", default)]
    pub magic_damage_dealt_to_champions: i64,
    #[serde(rename = "magicDamageTaken", default)]
    pub magic_damage_taken: i64,
    #[serde(rename = "physicalDamageDealt", default)]
    pub physical_damage_dealt: i64,
    #[serde(rename = "physicalDamageDealtToChampions", default)]
    pub physical_damage_dealt_to_champions: i64,
    #[serde(rename = "physicalDamageTaken", default)]
    pub physical_damage_taken: i64,
    #[serde(rename = "trueDamageDealt", default)]
    pub true_damage_dealt: i64,
    #[serde(rename = "trueDamageDealtToChampions", default)]
    pub true_damage_dealt_to_champions: i64,
    #[serde(rename = "trueDamageTaken", default)]
    pub true_damage_taken: i64,
    #[serde(rename = "totalDamageDealt", default)]
    pub total_damage_dealt: i64,
    #[serde(rename = "totalDamageDealtToChampions", default)]
    pub total_damage_dealt_to_champions: i64,
    #[serde(rename = "totalDamageTaken", default)]
    pub total_damage_taken: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSummoner {
    pub id: i64,
    pub name: String,
    #[serde(rename = "summonerLevel")]
    pub summoner_level: i64,
    #[serde(rename = "profileIconId")]
    pub profile_icon_id: i64,
    #[serde(rename = "revisionDate")]
    pub revision_date: i64,
}

impl From<RawSummoner> for Summoner {
    fn from(raw: RawSummoner) -> Self {
        Summoner {
            id: raw.id,
            name: raw.name,
            summoner_level: raw.summoner_level,
            profile_icon_id: raw.profile_icon_id,
            revision_date: raw.revision_date,
        }
    }
}
