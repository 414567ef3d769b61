//! Workflow prompts: reusable multi-step instructions for MCP hosts.

use rmcp::model::{GetPromptResult, Prompt, PromptArgument, PromptMessage, PromptMessageRole};
use serde_json::Value;

fn argument(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(required),
    }
}

/// The prompt catalog for `prompts/list`.
pub fn list() -> Vec<Prompt> {
    vec![
        Prompt::new(
            "find_player_stats",
            Some("Complete workflow to find a player's statistics"),
            Some(vec![
                argument("game_name", "Game name part of the Riot ID", true),
                argument("tag_line", "Tag line part of the Riot ID", true),
                argument("region", "Platform region, e.g. na1 or euw1", false),
            ]),
        ),
        Prompt::new(
            "tournament_setup",
            Some("Complete tournament organization workflow"),
            Some(vec![
                argument("tournament_name", "Display name of the tournament", true),
                argument("region", "Platform region, e.g. na1 or euw1", false),
            ]),
        ),
        Prompt::new(
            "champion_analysis",
            Some("Deep dive analysis of a specific champion"),
            Some(vec![
                argument("champion_name", "Champion to analyze", true),
                argument("region", "Platform region, e.g. na1 or euw1", false),
            ]),
        ),
    ]
}

/// Render one prompt for `prompts/get`; `None` for unknown names.
pub fn get(name: &str, arguments: Option<&serde_json::Map<String, Value>>) -> Option<GetPromptResult> {
    let arg = |key: &str, default: &str| -> String {
        arguments
            .and_then(|a| a.get(key))
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    };

    let (description, text) = match name {
        "find_player_stats" => {
            let game_name = arg("game_name", "Player");
            let tag_line = arg("tag_line", "NA1");
            let region = arg("region", "na1");
            (
                "Complete workflow to find a player's statistics",
                format!(
                    "# Complete Player Analysis Workflow\n\n\
                     You are analyzing League of Legends player **{game_name}#{tag_line}** \
                     in region **{region}**.\n\n\
                     1. Use `get_account_by_riot_id` with game_name=\"{game_name}\" and \
                     tag_line=\"{tag_line}\" and extract the PUUID.\n\
                     2. Use `get_summoner_by_puuid` with that PUUID to get level and profile data.\n\
                     3. Use `get_league_entries_by_puuid` and report tier, division, LP and \
                     win/loss for each queue.\n\
                     4. Use `get_match_ids_by_puuid` for the last 10 matches, then \
                     `get_match_details` on each to compute performance trends.\n\
                     5. Check `get_active_game` to see whether the player is in game right now.\n\n\
                     Present the analysis as a structured report with actionable insights."
                ),
            )
        }
        "tournament_setup" => {
            let tournament_name = arg("tournament_name", "My Tournament");
            let region = arg("region", "na1");
            (
                "Complete tournament organization workflow",
                format!(
                    "# Complete Tournament Setup Workflow\n\n\
                     You are organizing **{tournament_name}** in region **{region}**.\n\n\
                     Prerequisites: a production API key, tournament organizer verification \
                     from Riot, and a valid callback URL for match results.\n\n\
                     1. Use `create_tournament_provider` with the region and callback URL.\n\
                     2. Use `create_tournament` with the provider_id and \"{tournament_name}\".\n\
                     3. Use `generate_tournament_codes` for each match lobby.\n\
                     4. Use `get_tournament_lobby_events` to monitor the lobbies.\n\n\
                     Follow Riot's tournament policies throughout the process."
                ),
            )
        }
        "champion_analysis" => {
            let champion_name = arg("champion_name", "Azir");
            let region = arg("region", "na1");
            (
                "Deep dive analysis of a specific champion",
                format!(
                    "# Comprehensive Champion Analysis: {champion_name}\n\n\
                     You are conducting a deep analysis of **{champion_name}** in the \
                     **{region}** region.\n\n\
                     1. Read the `ddragon://champions` resource for {champion_name}'s base \
                     statistics and kit.\n\
                     2. Use `get_champion_rotation` to see whether {champion_name} is currently \
                     free to play.\n\
                     3. Use `get_challenger_league` and recent match history of top players to \
                     find {champion_name} games, then `get_match_details` to study builds and \
                     scorelines.\n\
                     4. Use `get_match_timeline` on a few of those matches to examine early \
                     objective control.\n\n\
                     Summarize strengths, weaknesses and the current meta position."
                ),
            )
        }
        _ => return None,
    };

    Some(GetPromptResult {
        description: Some(description.to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_three_prompts() {
        let prompts = list();
        assert_eq!(prompts.len(), 3);
        assert!(prompts.iter().any(|p| p.name == "find_player_stats"));
    }

    #[test]
    fn arguments_are_substituted() {
        let args: serde_json::Map<String, Value> = serde_json::from_value(serde_json::json!({
            "game_name": "Le Conservateur",
            "tag_line": "3012",
            "region": "euw1"
        }))
        .unwrap();

        let result = get("find_player_stats", Some(&args)).unwrap();
        let rendered = serde_json::to_string(&result.messages).unwrap();
        assert!(rendered.contains("Le Conservateur#3012"));
        assert!(rendered.contains("euw1"));
    }

    #[test]
    fn unknown_prompt_is_none() {
        assert!(get("nonexistent", None).is_none());
    }
}
