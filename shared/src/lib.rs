//! Region and parameter types shared by the league-mcp crates.
//!
//! Every user-supplied string that ends up in a request path goes through one
//! of these enums first, so malformed values are rejected before any network
//! call is issued. Parse errors carry a ready-to-display message listing the
//! accepted values.

/// Platform (per-shard) servers, e.g. `na1.api.riotgames.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Na1,
    Euw1,
    Eun1,
    Kr,
    Jp1,
    Br1,
    La1,
    La2,
    Oc1,
    Tr1,
    Ru,
}

impl Platform {
    pub const ALL: [Platform; 11] = [
        Platform::Na1,
        Platform::Euw1,
        Platform::Eun1,
        Platform::Kr,
        Platform::Jp1,
        Platform::Br1,
        Platform::La1,
        Platform::La2,
        Platform::Oc1,
        Platform::Tr1,
        Platform::Ru,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Na1 => "na1",
            Platform::Euw1 => "euw1",
            Platform::Eun1 => "eun1",
            Platform::Kr => "kr",
            Platform::Jp1 => "jp1",
            Platform::Br1 => "br1",
            Platform::La1 => "la1",
            Platform::La2 => "la2",
            Platform::Oc1 => "oc1",
            Platform::Tr1 => "tr1",
            Platform::Ru => "ru",
        }
    }

    pub fn host(&self) -> String {
        format!("{}.api.riotgames.com", self.as_str())
    }

    /// Region code expected in Tournament API request bodies ("NA", "EUW", ...).
    pub fn tournament_region(&self) -> &'static str {
        match self {
            Platform::Na1 => "NA",
            Platform::Euw1 => "EUW",
            Platform::Eun1 => "EUNE",
            Platform::Kr => "KR",
            Platform::Jp1 => "JP",
            Platform::Br1 => "BR",
            Platform::La1 => "LAN",
            Platform::La2 => "LAS",
            Platform::Oc1 => "OCE",
            Platform::Tr1 => "TR",
            Platform::Ru => "RU",
        }
    }

    /// Routing region used by the regionally routed APIs (Match-v5, Account-v1).
    pub fn routing(&self) -> Routing {
        match self {
            Platform::Na1 | Platform::Br1 | Platform::La1 | Platform::La2 => Routing::Americas,
            Platform::Euw1 | Platform::Eun1 | Platform::Tr1 | Platform::Ru => Routing::Europe,
            Platform::Kr | Platform::Jp1 | Platform::Oc1 => Routing::Asia,
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "na1" => Ok(Platform::Na1),
            "euw1" => Ok(Platform::Euw1),
            "eun1" => Ok(Platform::Eun1),
            "kr" => Ok(Platform::Kr),
            "jp1" => Ok(Platform::Jp1),
            "br1" => Ok(Platform::Br1),
            "la1" => Ok(Platform::La1),
            "la2" => Ok(Platform::La2),
            "oc1" => Ok(Platform::Oc1),
            "tr1" => Ok(Platform::Tr1),
            "ru" => Ok(Platform::Ru),
            _ => Err(format!(
                "Invalid region '{}'. Valid regions: {}",
                value,
                Platform::ALL.map(|p| p.as_str()).join(", ")
            )),
        }
    }
}

/// Regional routing servers, e.g. `americas.api.riotgames.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    Americas,
    Asia,
    Europe,
}

impl Routing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Routing::Americas => "americas",
            Routing::Asia => "asia",
            Routing::Europe => "europe",
        }
    }

    pub fn host(&self) -> String {
        format!("{}.api.riotgames.com", self.as_str())
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "americas" => Ok(Routing::Americas),
            "asia" => Ok(Routing::Asia),
            "europe" => Ok(Routing::Europe),
            _ => Err(format!(
                "Invalid routing region '{}'. Valid routing regions: americas, asia, europe",
                value
            )),
        }
    }
}

/// Game identifiers accepted by the Account-v1 shard/region endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    Lol,
    Tft,
    Val,
    Lor,
}

impl Game {
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::Lol => "lol",
            Game::Tft => "tft",
            Game::Val => "val",
            Game::Lor => "lor",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "lol" => Ok(Game::Lol),
            "tft" => Ok(Game::Tft),
            "val" => Ok(Game::Val),
            "lor" => Ok(Game::Lor),
            _ => Err(format!(
                "Invalid game '{}'. Valid games: lol, tft, val, lor",
                value
            )),
        }
    }

    /// Active-shard lookups only exist for VALORANT and Legends of Runeterra.
    pub fn has_shards(&self) -> bool {
        matches!(self, Game::Val | Game::Lor)
    }

    /// Active-region lookups only exist for LoL and TFT.
    pub fn has_account_region(&self) -> bool {
        matches!(self, Game::Lol | Game::Tft)
    }
}

/// Ranked queues served by League-v4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankedQueue {
    SoloDuo,
    Flex,
}

impl RankedQueue {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankedQueue::SoloDuo => "RANKED_SOLO_5x5",
            RankedQueue::Flex => "RANKED_FLEX_SR",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_uppercase().as_str() {
            "RANKED_SOLO_5X5" => Ok(RankedQueue::SoloDuo),
            "RANKED_FLEX_SR" => Ok(RankedQueue::Flex),
            _ => Err(format!(
                "Invalid queue '{}'. Valid queues: RANKED_SOLO_5x5, RANKED_FLEX_SR",
                value
            )),
        }
    }
}

/// Non-apex ranked tiers accepted by the entries-by-division endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_uppercase().as_str() {
            "IRON" => Ok(Tier::Iron),
            "BRONZE" => Ok(Tier::Bronze),
            "SILVER" => Ok(Tier::Silver),
            "GOLD" => Ok(Tier::Gold),
            "PLATINUM" => Ok(Tier::Platinum),
            "EMERALD" => Ok(Tier::Emerald),
            "DIAMOND" => Ok(Tier::Diamond),
            _ => Err(format!(
                "Invalid tier '{}'. Valid tiers: IRON, BRONZE, SILVER, GOLD, PLATINUM, EMERALD, DIAMOND",
                value
            )),
        }
    }
}

/// Ranked divisions within a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    I,
    II,
    III,
    IV,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::I => "I",
            Division::II => "II",
            Division::III => "III",
            Division::IV => "IV",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_uppercase().as_str() {
            "I" | "1" => Ok(Division::I),
            "II" | "2" => Ok(Division::II),
            "III" | "3" => Ok(Division::III),
            "IV" | "4" => Ok(Division::IV),
            _ => Err(format!(
                "Invalid division '{}'. Valid divisions: I, II, III, IV",
                value
            )),
        }
    }
}

/// Apex leaderboard levels for the Challenges API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApexLevel {
    Master,
    Grandmaster,
    Challenger,
}

impl ApexLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApexLevel::Master => "MASTER",
            ApexLevel::Grandmaster => "GRANDMASTER",
            ApexLevel::Challenger => "CHALLENGER",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_uppercase().as_str() {
            "MASTER" => Ok(ApexLevel::Master),
            "GRANDMASTER" => Ok(ApexLevel::Grandmaster),
            "CHALLENGER" => Ok(ApexLevel::Challenger),
            _ => Err(format!(
                "Invalid level '{}'. Valid levels: MASTER, GRANDMASTER, CHALLENGER",
                value
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_conversions() {
        assert_eq!(Platform::Euw1.host(), "euw1.api.riotgames.com");
        assert_eq!(Platform::Na1.routing(), Routing::Americas);
        assert_eq!(Platform::Ru.routing(), Routing::Europe);
        assert_eq!(Platform::Oc1.routing(), Routing::Asia);
        assert_eq!(Platform::parse("EUW1").unwrap(), Platform::Euw1);
    }

    #[test]
    fn platform_rejects_unknown_region() {
        let err = Platform::parse("euw").unwrap_err();
        assert!(err.contains("Invalid region 'euw'"));
        assert!(err.contains("na1"));
    }

    #[test]
    fn routing_conversions() {
        assert_eq!(Routing::Americas.host(), "americas.api.riotgames.com");
        assert_eq!(Routing::parse("Europe").unwrap(), Routing::Europe);
        assert!(Routing::parse("sea").is_err());
    }

    #[test]
    fn game_capabilities() {
        assert!(Game::parse("val").unwrap().has_shards());
        assert!(!Game::parse("lol").unwrap().has_shards());
        assert!(Game::parse("tft").unwrap().has_account_region());
        assert!(Game::parse("overwatch").is_err());
    }

    #[test]
    fn ranked_parameter_parsing() {
        assert_eq!(
            RankedQueue::parse("ranked_solo_5x5").unwrap().as_str(),
            "RANKED_SOLO_5x5"
        );
        assert_eq!(Tier::parse("gold").unwrap(), Tier::Gold);
        assert!(Tier::parse("MASTER").is_err()); // apex tiers have their own endpoints
        assert_eq!(Division::parse("2").unwrap(), Division::II);
        assert_eq!(ApexLevel::parse("challenger").unwrap(), ApexLevel::Challenger);
    }
}
