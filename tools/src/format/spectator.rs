//! Text blocks for Spectator-v5 responses.

use std::fmt::Write;

use league_mcp_riot_api::api::spectator::{CurrentGameInfoDto, FeaturedGamesDto};

use super::duration_secs;

const BLUE_TEAM: i64 = 100;

pub fn active_game(dto: &CurrentGameInfoDto) -> String {
    let mut out = format!(
        "ACTIVE GAME INFORMATION\n\
         =======================\n\
         Game ID: {}\n\
         Game Type: {}\n\
         Game Mode: {}\n\
         Map ID: {}\n\
         Queue ID: {}\n\
         Duration: {}\n",
        dto.game_id,
        dto.game_type,
        dto.game_mode,
        dto.map_id,
        dto.game_queue_config_id
            .map_or_else(|| "N/A".to_string(), |id| id.to_string()),
        duration_secs(dto.game_length),
    );

    for (team_id, label) in [(BLUE_TEAM, "TEAM 1 (Blue Side)"), (200, "TEAM 2 (Red Side)")] {
        let _ = write!(out, "\n{label}:\n");
        let players: Vec<_> = dto
            .participants
            .iter()
            .filter(|p| p.team_id == team_id)
            .collect();
        if players.is_empty() {
            out.push_str("  No players found\n");
        }
        for p in players {
            let _ = match &p.riot_id {
                Some(riot_id) => writeln!(out, "  - {} (Champion ID: {})", riot_id, p.champion_id),
                None => writeln!(out, "  - Champion ID: {}", p.champion_id),
            };
        }

        out.push_str("Bans:\n");
        let bans: Vec<_> = dto
            .banned_champions
            .iter()
            .filter(|b| b.team_id == team_id)
            .collect();
        if bans.is_empty() {
            out.push_str("  No bans\n");
        }
        for ban in bans {
            let _ = writeln!(out, "  - Champion ID: {}", ban.champion_id);
        }
    }

    out.trim_end().to_string()
}

pub fn featured_games(dto: &FeaturedGamesDto) -> String {
    if dto.game_list.is_empty() {
        return "No featured games currently available.".to_string();
    }

    let mut out = format!(
        "FEATURED GAMES\n\
         ==============\n\
         Refresh Interval: {} seconds\n\
         Total Games: {}\n",
        dto.client_refresh_interval
            .map_or_else(|| "N/A".to_string(), |v| v.to_string()),
        dto.game_list.len(),
    );

    for (i, game) in dto.game_list.iter().enumerate() {
        let blue = game
            .participants
            .iter()
            .filter(|p| p.team_id == BLUE_TEAM)
            .count();
        let red = game.participants.len() - blue;
        let _ = write!(
            out,
            "\nGame #{}:\n  \
             Game ID: {}\n  \
             Mode: {}\n  \
             Type: {}\n  \
             Map ID: {}\n  \
             Duration: {}\n  \
             Players: {} vs {}\n",
            i + 1,
            game.game_id,
            game.game_mode,
            game.game_type,
            game.map_id,
            duration_secs(game.game_length),
            blue,
            red,
        );
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> CurrentGameInfoDto {
        serde_json::from_value(serde_json::json!({
            "gameId": 123,
            "gameType": "MATCHED",
            "gameMode": "CLASSIC",
            "gameLength": 725,
            "mapId": 11,
            "gameQueueConfigId": 420,
            "participants": [
                {"teamId": 100, "championId": 268, "riotId": "Azir Main#EUW"},
                {"teamId": 200, "championId": 157}
            ],
            "bannedChampions": [
                {"championId": 53, "teamId": 100, "pickTurn": 1}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn active_game_groups_teams_and_bans() {
        let text = active_game(&sample_game());
        assert!(text.contains("Duration: 12:05"));
        assert!(text.contains("TEAM 1 (Blue Side)"));
        assert!(text.contains("Azir Main#EUW (Champion ID: 268)"));
        assert!(text.contains("- Champion ID: 157"));
        assert!(text.contains("- Champion ID: 53"));
        assert!(text.contains("No bans"));
    }

    #[test]
    fn empty_featured_list_is_a_sentence() {
        let dto: FeaturedGamesDto = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(featured_games(&dto), "No featured games currently available.");
    }

    #[test]
    fn featured_games_count_players_per_team() {
        let dto: FeaturedGamesDto = serde_json::from_value(serde_json::json!({
            "gameList": [{
                "gameId": 9,
                "gameType": "MATCHED",
                "gameMode": "ARAM",
                "gameLength": 60,
                "mapId": 12,
                "participants": [
                    {"teamId": 100, "championId": 1},
                    {"teamId": 200, "championId": 2},
                    {"teamId": 200, "championId": 3}
                ]
            }],
            "clientRefreshInterval": 300
        }))
        .unwrap();

        let text = featured_games(&dto);
        assert!(text.contains("Total Games: 1"));
        assert!(text.contains("Players: 1 vs 2"));
    }
}
