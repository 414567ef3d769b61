//! Text blocks for Clash-v1 responses.

use std::fmt::Write;

use league_mcp_riot_api::api::clash::{ClashPlayerDto, ClashTeamDto, ClashTournamentDto};

use super::timestamp_ms;

pub fn players(registrations: &[ClashPlayerDto]) -> String {
    if registrations.is_empty() {
        return "No active Clash registrations for this player.".to_string();
    }

    let mut out = format!(
        "CLASH REGISTRATIONS\n\
         ===================\n\
         Active Registrations: {}\n",
        registrations.len()
    );
    for (i, reg) in registrations.iter().enumerate() {
        let _ = write!(
            out,
            "\nRegistration #{}:\n  \
             Team ID: {}\n  \
             Position: {}\n  \
             Role: {}\n",
            i + 1,
            reg.team_id.as_deref().unwrap_or("N/A"),
            reg.position.as_deref().unwrap_or("N/A"),
            reg.role.as_deref().unwrap_or("N/A"),
        );
    }
    out.trim_end().to_string()
}

pub fn team(dto: &ClashTeamDto) -> String {
    let mut out = format!(
        "CLASH TEAM\n\
         ==========\n\
         Team ID: {}\n\
         Name: {}\n\
         Abbreviation: {}\n\
         Tournament ID: {}\n\
         Tier: {}\n\
         Captain: {}\n\
         Roster ({} players):\n",
        dto.id,
        dto.name.as_deref().unwrap_or("N/A"),
        dto.abbreviation.as_deref().unwrap_or("N/A"),
        dto.tournament_id,
        dto.tier.map_or_else(|| "N/A".to_string(), |t| t.to_string()),
        dto.captain.as_deref().unwrap_or("N/A"),
        dto.players.len(),
    );
    if dto.players.is_empty() {
        out.push_str("  No players listed");
    }
    for player in &dto.players {
        let _ = writeln!(
            out,
            "  - {} ({})",
            player
                .puuid
                .as_deref()
                .or(player.summoner_id.as_deref())
                .unwrap_or("N/A"),
            player.position.as_deref().unwrap_or("UNSELECTED"),
        );
    }
    out.trim_end().to_string()
}

pub fn tournaments(list: &[ClashTournamentDto]) -> String {
    if list.is_empty() {
        return "No active or upcoming tournaments found.".to_string();
    }

    let mut out = format!(
        "CLASH TOURNAMENTS\n\
         =================\n\
         Active/Upcoming Tournaments: {}\n",
        list.len()
    );
    for (i, t) in list.iter().enumerate() {
        let _ = write!(out, "\nTournament #{}:\n", i + 1);
        out.push_str(&tournament_body(t, "  "));
        out.push('\n');
    }
    out.trim_end().to_string()
}

pub fn tournament(dto: &ClashTournamentDto) -> String {
    format!(
        "CLASH TOURNAMENT\n\
         ================\n{}",
        tournament_body(dto, "")
    )
    .trim_end()
    .to_string()
}

fn tournament_body(dto: &ClashTournamentDto, indent: &str) -> String {
    let mut out = format!(
        "{indent}ID: {}\n\
         {indent}Theme ID: {}\n\
         {indent}Name Key: {}\n\
         {indent}Secondary Name: {}\n",
        dto.id,
        dto.theme_id.map_or_else(|| "N/A".to_string(), |v| v.to_string()),
        dto.name_key.as_deref().unwrap_or("N/A"),
        dto.name_key_secondary.as_deref().unwrap_or("N/A"),
    );
    for phase in &dto.schedule {
        let _ = write!(
            out,
            "{indent}Phase {}: registration {}, start {}{}\n",
            phase.id,
            timestamp_ms(phase.registration_time),
            timestamp_ms(phase.start_time),
            if phase.cancelled { " (CANCELLED)" } else { "" },
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registrations_are_a_sentence() {
        assert_eq!(
            players(&[]),
            "No active Clash registrations for this player."
        );
    }

    #[test]
    fn team_block_lists_roster_positions() {
        let dto: ClashTeamDto = serde_json::from_value(serde_json::json!({
            "id": "team-1",
            "tournamentId": 2001,
            "name": "The Baron Stealers",
            "tier": 2,
            "players": [
                {"puuid": "p1", "position": "TOP"},
                {"puuid": "p2"}
            ]
        }))
        .unwrap();

        let text = team(&dto);
        assert!(text.contains("Name: The Baron Stealers"));
        assert!(text.contains("Roster (2 players):"));
        assert!(text.contains("p1 (TOP)"));
        assert!(text.contains("p2 (UNSELECTED)"));
    }

    #[test]
    fn tournament_schedule_shows_cancelled_phases() {
        let dto: ClashTournamentDto = serde_json::from_value(serde_json::json!({
            "id": 2001,
            "themeId": 7,
            "nameKey": "bandle_city",
            "schedule": [
                {"id": 1, "registrationTime": 0, "startTime": 3_600_000, "cancelled": true}
            ]
        }))
        .unwrap();

        let text = tournament(&dto);
        assert!(text.contains("Name Key: bandle_city"));
        assert!(text.contains("(CANCELLED)"));
        assert!(text.contains("1970-01-01 01:00:00 UTC"));
    }
}
