//! Text blocks for Match-v5 responses.

use std::fmt::Write;

use league_mcp_riot_api::api::match_v5::{MatchDto, MatchTeamDto, TimelineDto};

use super::{duration_secs, short_id, timestamp_ms};

/// Match ids shown before the list is truncated.
const ID_LIMIT: usize = 10;
/// Timeline events shown before the list is truncated.
const EVENT_LIMIT: usize = 20;

pub fn match_ids(ids: &[String], puuid: &str) -> String {
    let short = short_id(puuid);
    if ids.is_empty() {
        return format!("No matches found for PUUID: {short}...");
    }

    let mut out = format!(
        "MATCH HISTORY\n\
         =============\n\
         PUUID: {short}...\n\
         Total Matches: {}\n\n\
         RECENT MATCH IDs:\n",
        ids.len()
    );
    for (i, id) in ids.iter().take(ID_LIMIT).enumerate() {
        let _ = writeln!(out, "{:2}. {id}", i + 1);
    }
    if ids.len() > ID_LIMIT {
        let _ = write!(out, "\n... and {} more matches", ids.len() - ID_LIMIT);
    }
    out.trim_end().to_string()
}

pub fn match_detail(dto: &MatchDto) -> String {
    let info = &dto.info;

    // gameDuration switched from milliseconds to seconds in patch 11.20;
    // gameEndTimestamp being present marks the new format.
    let duration = if info.game_end_timestamp.is_some() {
        duration_secs(info.game_duration)
    } else {
        duration_secs(info.game_duration / 1000)
    };

    let winning_team = info.teams.iter().find(|t| t.win).map(|t| t.team_id);

    let mut out = format!(
        "MATCH DETAILS\n\
         =============\n\
         Match ID: {}\n\
         Platform: {}\n\
         Game Mode: {}\n\
         Game Type: {}\n\
         Queue ID: {}\n\
         Map ID: {}\n\
         Version: {}\n\
         Created: {}\n\
         Duration: {}\n\
         Participants: {}\n",
        dto.metadata.match_id,
        info.platform_id.as_deref().unwrap_or("N/A"),
        info.game_mode,
        info.game_type,
        info.queue_id,
        info.map_id,
        info.game_version.as_deref().unwrap_or("N/A"),
        timestamp_ms(info.game_creation),
        duration,
        info.participants.len(),
    );

    for (team_id, label) in [(100, "TEAM 1 (Blue Side)"), (200, "TEAM 2 (Red Side)")] {
        let outcome = if winning_team == Some(team_id) {
            "VICTORY"
        } else {
            "DEFEAT"
        };
        let _ = write!(out, "\n{label}: {outcome}\n");

        for (i, p) in info
            .participants
            .iter()
            .filter(|p| p.team_id == team_id)
            .enumerate()
        {
            let _ = write!(
                out,
                "  {}. {} ({}) - {}\n     \
                 KDA: {}/{}/{} | CS: {} | Gold: {} | Damage: {}\n",
                i + 1,
                p.champion_name,
                p.team_position.as_deref().unwrap_or("N/A"),
                p.riot_id(),
                p.kills,
                p.deaths,
                p.assists,
                p.cs(),
                p.gold_earned,
                p.total_damage_dealt_to_champions,
            );
        }
    }

    out.push_str("\nOBJECTIVES:\n");
    for team in &info.teams {
        out.push_str(&objectives_line(team));
        out.push('\n');
    }
    out.trim_end().to_string()
}

fn objectives_line(team: &MatchTeamDto) -> String {
    let side = if team.team_id == 100 {
        "Blue Side"
    } else {
        "Red Side"
    };
    format!(
        "{side}: Baron {} | Dragons {} | Towers {} | Inhibitors {} | Rift Herald {}",
        team.objective_kills("baron"),
        team.objective_kills("dragon"),
        team.objective_kills("tower"),
        team.objective_kills("inhibitor"),
        team.objective_kills("riftHerald"),
    )
}

pub fn match_timeline(dto: &TimelineDto) -> String {
    let mut out = format!(
        "MATCH TIMELINE\n\
         ==============\n\
         Match ID: {}\n\
         Frame Interval: {}s\n\
         Total Frames: {}\n\n\
         KEY EVENTS:\n",
        dto.metadata.match_id,
        dto.info.frame_interval / 1000,
        dto.info.frames.len(),
    );

    let mut events: Vec<_> = dto
        .info
        .frames
        .iter()
        .flat_map(|f| f.events.iter())
        .filter(|e| {
            matches!(
                e.event_type.as_str(),
                "CHAMPION_KILL" | "ELITE_MONSTER_KILL" | "BUILDING_KILL" | "CHAMPION_SPECIAL_KILL"
            )
        })
        .collect();
    events.sort_by_key(|e| e.timestamp);

    for event in events.iter().take(EVENT_LIMIT) {
        let minutes = event.timestamp / 60_000;
        let seconds = (event.timestamp % 60_000) / 1000;
        let _ = write!(out, "{minutes:02}:{seconds:02} - ");

        let killer = event.killer_id.unwrap_or(0);
        match event.event_type.as_str() {
            "CHAMPION_KILL" => {
                let _ = write!(
                    out,
                    "Champion Kill: P{killer} killed P{}",
                    event.victim_id.unwrap_or(0)
                );
                if !event.assisting_participant_ids.is_empty() {
                    let assists: Vec<_> = event
                        .assisting_participant_ids
                        .iter()
                        .map(|id| format!("P{id}"))
                        .collect();
                    let _ = write!(out, " (Assists: {})", assists.join(", "));
                }
            }
            "ELITE_MONSTER_KILL" => {
                let _ = write!(
                    out,
                    "Elite Monster Kill: P{killer} killed {}",
                    event.monster_type.as_deref().unwrap_or("Unknown")
                );
            }
            "BUILDING_KILL" => {
                let _ = write!(
                    out,
                    "Building Kill: P{killer} destroyed {}",
                    event.building_type.as_deref().unwrap_or("Unknown")
                );
                if let Some(lane) = &event.lane_type {
                    let _ = write!(out, " in {lane}");
                }
            }
            other => {
                let _ = write!(out, "{other}: P{killer}");
            }
        }
        out.push('\n');
    }
    if events.len() > EVENT_LIMIT {
        let _ = write!(out, "\n... and {} more events", events.len() - EVENT_LIMIT);
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn match_ids_are_numbered_and_truncated() {
        let ids: Vec<String> = (0..12).map(|i| format!("EUW1_{i}")).collect();
        let text = match_ids(&ids, "long-puuid-value");

        assert!(text.contains("PUUID: long-puu..."));
        assert!(text.contains(" 1. EUW1_0"));
        assert!(text.contains("10. EUW1_9"));
        assert!(!text.contains("EUW1_10"));
        assert!(text.contains("... and 2 more matches"));
    }

    #[test]
    fn multibyte_puuid_does_not_panic() {
        // Byte index 8 lands inside the 'é'; truncation must stay on
        // character boundaries.
        let text = match_ids(&[], "aaaaaaa\u{e9}xxxx");

        assert_eq!(text, "No matches found for PUUID: aaaaaaa\u{e9}...");
    }

    #[test]
    fn legacy_duration_is_interpreted_as_milliseconds() {
        let dto: MatchDto = serde_json::from_value(json!({
            "metadata": {"matchId": "EUW1_1", "participants": []},
            "info": {
                "gameCreation": 0,
                "gameDuration": 1_805_000_i64,
                "gameMode": "CLASSIC",
                "gameType": "MATCHED_GAME",
                "participants": [],
                "teams": []
            }
        }))
        .unwrap();

        assert!(match_detail(&dto).contains("Duration: 30:05"));
    }

    #[test]
    fn match_detail_reports_winner_and_objectives() {
        let dto: MatchDto = serde_json::from_value(json!({
            "metadata": {"matchId": "EUW1_2", "participants": ["p1", "p2"]},
            "info": {
                "gameCreation": 1_700_000_000_000_i64,
                "gameDuration": 1805,
                "gameEndTimestamp": 1_700_000_000_000_i64,
                "gameMode": "CLASSIC",
                "gameType": "MATCHED_GAME",
                "queueId": 420,
                "participants": [
                    {"championName": "Azir", "teamId": 100, "teamPosition": "MIDDLE",
                     "win": true, "kills": 10, "deaths": 2, "assists": 8,
                     "totalMinionsKilled": 200, "neutralMinionsKilled": 12,
                     "goldEarned": 14_000, "totalDamageDealtToChampions": 25_000,
                     "riotIdGameName": "Emperor", "riotIdTagline": "EUW"},
                    {"championName": "Yasuo", "teamId": 200,
                     "win": false, "kills": 3, "deaths": 9, "assists": 2}
                ],
                "teams": [
                    {"teamId": 100, "win": true,
                     "objectives": {"baron": {"first": true, "kills": 2},
                                     "dragon": {"first": true, "kills": 4}}},
                    {"teamId": 200, "win": false, "objectives": {}}
                ]
            }
        }))
        .unwrap();

        let text = match_detail(&dto);
        assert!(text.contains("Duration: 30:05"));
        assert!(text.contains("TEAM 1 (Blue Side): VICTORY"));
        assert!(text.contains("TEAM 2 (Red Side): DEFEAT"));
        assert!(text.contains("Azir (MIDDLE) - Emperor#EUW"));
        assert!(text.contains("KDA: 10/2/8 | CS: 212"));
        assert!(text.contains("Blue Side: Baron 2 | Dragons 4"));
    }

    #[test]
    fn timeline_selects_key_events_in_order() {
        let dto: TimelineDto = serde_json::from_value(json!({
            "metadata": {"matchId": "EUW1_3", "participants": []},
            "info": {
                "frameInterval": 60000,
                "frames": [
                    {"timestamp": 60000, "events": [
                        {"type": "ITEM_PURCHASED", "timestamp": 30_000},
                        {"type": "CHAMPION_KILL", "timestamp": 95_000,
                         "killerId": 1, "victimId": 6, "assistingParticipantIds": [2, 3]}
                    ]},
                    {"timestamp": 120_000, "events": [
                        {"type": "ELITE_MONSTER_KILL", "timestamp": 84_000,
                         "killerId": 5, "monsterType": "DRAGON"}
                    ]}
                ]
            }
        }))
        .unwrap();

        let text = match_timeline(&dto);
        assert!(!text.contains("ITEM_PURCHASED"));
        let dragon = text.find("01:24 - Elite Monster Kill: P5 killed DRAGON").unwrap();
        let kill = text
            .find("01:35 - Champion Kill: P1 killed P6 (Assists: P2, P3)")
            .unwrap();
        assert!(dragon < kill);
    }
}
