//! Text blocks for tournament-stub-v5 responses.

use std::fmt::Write;

use league_mcp_riot_api::api::tournament::LobbyEventsDto;

pub fn provider_created(provider_id: i64) -> String {
    format!(
        "TOURNAMENT PROVIDER CREATED\n\
         ===========================\n\
         Provider ID: {provider_id}\n\
         Use this ID when creating tournaments."
    )
}

pub fn tournament_created(tournament_id: i64, name: &str) -> String {
    format!(
        "TOURNAMENT CREATED\n\
         ==================\n\
         Tournament ID: {tournament_id}\n\
         Name: {name}\n\
         Use this ID when generating tournament codes."
    )
}

pub fn codes(list: &[String]) -> String {
    let mut out = format!(
        "TOURNAMENT CODES\n\
         ================\n\
         Generated Codes: {}\n\n",
        list.len()
    );
    for (i, code) in list.iter().enumerate() {
        let _ = writeln!(out, "{:2}. {code}", i + 1);
    }
    out.trim_end().to_string()
}

pub fn lobby_events(code: &str, dto: &LobbyEventsDto) -> String {
    if dto.event_list.is_empty() {
        return format!("No lobby events recorded for code {code}.");
    }

    let mut out = format!(
        "LOBBY EVENTS\n\
         ============\n\
         Tournament Code: {code}\n\
         Events: {}\n\n",
        dto.event_list.len()
    );
    for event in &dto.event_list {
        let _ = writeln!(
            out,
            "{} - {} ({})",
            event.timestamp.as_deref().unwrap_or("N/A"),
            event.event_type,
            event.puuid.as_deref().unwrap_or("no player"),
        );
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_numbered() {
        let list = vec!["EUW1-CODE1".to_string(), "EUW1-CODE2".to_string()];
        let text = codes(&list);
        assert!(text.contains("Generated Codes: 2"));
        assert!(text.contains(" 1. EUW1-CODE1"));
        assert!(text.contains(" 2. EUW1-CODE2"));
    }

    #[test]
    fn lobby_events_list_players() {
        let dto: LobbyEventsDto = serde_json::from_value(serde_json::json!({
            "eventList": [
                {"timestamp": "12345", "eventType": "PlayerJoinedGameEvent", "puuid": "p1"}
            ]
        }))
        .unwrap();

        let text = lobby_events("EUW1-CODE1", &dto);
        assert!(text.contains("Tournament Code: EUW1-CODE1"));
        assert!(text.contains("12345 - PlayerJoinedGameEvent (p1)"));
    }

    #[test]
    fn empty_lobby_events_are_a_sentence() {
        let dto: LobbyEventsDto = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(
            lobby_events("X", &dto),
            "No lobby events recorded for code X."
        );
    }
}
