//! Text blocks for Account-v1 responses.

use league_mcp_riot_api::api::account::{AccountDto, AccountRegionDto, ActiveShardDto};

pub fn account(dto: &AccountDto) -> String {
    let game_name = dto.game_name.as_deref().unwrap_or("N/A");
    let tag_line = dto.tag_line.as_deref().unwrap_or("N/A");
    format!(
        "ACCOUNT INFORMATION\n\
         ===================\n\
         PUUID: {}\n\
         Game Name: {}\n\
         Tag Line: {}\n\
         Riot ID: {}#{}",
        dto.puuid, game_name, tag_line, game_name, tag_line
    )
}

pub fn active_shard(dto: &ActiveShardDto) -> String {
    format!(
        "ACTIVE SHARD\n\
         ============\n\
         Game: {}\n\
         Active Shard: {}\n\
         PUUID: {}",
        dto.game, dto.active_shard, dto.puuid
    )
}

pub fn active_region(dto: &AccountRegionDto) -> String {
    format!(
        "ACTIVE REGION\n\
         =============\n\
         Game: {}\n\
         Active Region: {}\n\
         PUUID: {}",
        dto.game, dto.region, dto.puuid
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_block_contains_riot_id() {
        let dto: AccountDto = serde_json::from_value(serde_json::json!({
            "puuid": "abc123",
            "gameName": "Le Conservateur",
            "tagLine": "3012"
        }))
        .unwrap();

        let text = account(&dto);
        assert!(text.contains("PUUID: abc123"));
        assert!(text.contains("Riot ID: Le Conservateur#3012"));
    }

    #[test]
    fn missing_name_falls_back_to_placeholder() {
        let dto: AccountDto =
            serde_json::from_value(serde_json::json!({"puuid": "abc123"})).unwrap();

        assert!(account(&dto).contains("Riot ID: N/A#N/A"));
    }
}
