//! Text block for Summoner-v4 responses.

use league_mcp_riot_api::api::summoner::SummonerDto;

use super::timestamp_ms;

pub fn summoner(dto: &SummonerDto) -> String {
    format!(
        "SUMMONER INFORMATION\n\
         ====================\n\
         Summoner ID: {}\n\
         Account ID: {}\n\
         PUUID: {}\n\
         Profile Icon ID: {}\n\
         Summoner Level: {}\n\
         Last Modified: {}",
        dto.id.as_deref().unwrap_or("N/A"),
        dto.account_id.as_deref().unwrap_or("N/A"),
        dto.puuid,
        dto.profile_icon_id,
        dto.summoner_level,
        timestamp_ms(dto.revision_date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summoner_block_formats_revision_date() {
        let dto: SummonerDto = serde_json::from_value(serde_json::json!({
            "puuid": "abc",
            "profileIconId": 4567,
            "revisionDate": 1_700_000_000_000_i64,
            "summonerLevel": 512
        }))
        .unwrap();

        let text = summoner(&dto);
        assert!(text.contains("Summoner Level: 512"));
        assert!(text.contains("Last Modified: 2023-11-14 22:13:20 UTC"));
        assert!(text.contains("Summoner ID: N/A"));
    }
}
