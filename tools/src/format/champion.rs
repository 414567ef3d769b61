//! Text block for the champion rotation response.

use league_mcp_riot_api::api::champion::ChampionRotationDto;

fn id_list(ids: &[i64]) -> String {
    if ids.is_empty() {
        return "None".to_string();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn rotation(dto: &ChampionRotationDto) -> String {
    format!(
        "CHAMPION ROTATION\n\
         =================\n\
         Free Champions ({}): {}\n\
         New Player Rotation (up to level {}): {}",
        dto.free_champion_ids.len(),
        id_list(&dto.free_champion_ids),
        dto.max_new_player_level,
        id_list(&dto.free_champion_ids_for_new_players),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_lists_champion_ids() {
        let dto: ChampionRotationDto = serde_json::from_value(serde_json::json!({
            "freeChampionIds": [1, 13, 57],
            "freeChampionIdsForNewPlayers": [18, 22],
            "maxNewPlayerLevel": 10
        }))
        .unwrap();

        let text = rotation(&dto);
        assert!(text.contains("Free Champions (3): 1, 13, 57"));
        assert!(text.contains("up to level 10"));
        assert!(text.contains("18, 22"));
    }
}
