//! Text blocks for Challenges-v1 responses.

use std::fmt::Write;

use league_mcp_riot_api::api::challenges::{
    ApexPlayerInfoDto, ChallengeConfigDto, PlayerChallengesDto,
};

use super::{short_id, timestamp_ms};

/// Enabled challenges shown in the config listing.
const SAMPLE_LIMIT: usize = 10;
/// Rows shown from a leaderboard.
const LEADERBOARD_LIMIT: usize = 25;

pub fn configs(list: &[ChallengeConfigDto]) -> String {
    if list.is_empty() {
        return "No challenge configurations found.".to_string();
    }

    let count = |state: &str| list.iter().filter(|c| c.state == state).count();
    let enabled: Vec<_> = list.iter().filter(|c| c.state == "ENABLED").collect();

    let mut out = format!(
        "CHALLENGE CONFIGURATIONS\n\
         ========================\n\
         Total Challenges: {}\n\n\
         ENABLED: {} challenges\n\
         HIDDEN: {} challenges\n\
         DISABLED: {} challenges\n\
         ARCHIVED: {} challenges\n\n\
         SAMPLE ENABLED CHALLENGES:\n",
        list.len(),
        enabled.len(),
        count("HIDDEN"),
        count("DISABLED"),
        count("ARCHIVED"),
    );

    for (i, challenge) in enabled.iter().take(SAMPLE_LIMIT).enumerate() {
        let _ = write!(
            out,
            "{:2}. {} (ID: {})\n    \
             Tracking: {}\n    \
             Leaderboard: {}\n",
            i + 1,
            challenge.display_name(),
            challenge.id,
            challenge.tracking.as_deref().unwrap_or("N/A"),
            if challenge.leaderboard { "Yes" } else { "No" },
        );
    }
    out.trim_end().to_string()
}

pub fn config(dto: &ChallengeConfigDto) -> String {
    let mut out = format!(
        "CHALLENGE DETAILS\n\
         =================\n\
         Name: {}\n\
         ID: {}\n\
         Description: {}\n\n\
         Status: {}\n\
         Tracking: {}\n\
         Leaderboard: {}\n\
         Start Time: {}\n\
         End Time: {}\n\n\
         THRESHOLDS:\n",
        dto.display_name(),
        dto.id,
        dto.description().unwrap_or("No description available"),
        dto.state,
        dto.tracking.as_deref().unwrap_or("N/A"),
        if dto.leaderboard { "Enabled" } else { "Disabled" },
        dto.start_timestamp
            .map_or_else(|| "N/A".to_string(), timestamp_ms),
        dto.end_timestamp
            .map_or_else(|| "N/A".to_string(), timestamp_ms),
    );

    let mut thresholds: Vec<_> = dto.thresholds.iter().collect();
    thresholds.sort_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal));
    for (level, value) in thresholds {
        let _ = writeln!(out, "  {}: {}", level.to_uppercase(), value);
    }
    out.trim_end().to_string()
}

pub fn leaderboard(rows: &[ApexPlayerInfoDto], level: &str) -> String {
    if rows.is_empty() {
        return format!("No {level} players found for this challenge.");
    }

    let header = format!("{} CHALLENGE LEADERBOARD", level.to_uppercase());
    let mut out = format!(
        "{header}\n{}\n\
         Total Players: {}\n\n\
         TOP PLAYERS:\n",
        "=".repeat(header.len()),
        rows.len(),
    );
    for row in rows.iter().take(LEADERBOARD_LIMIT) {
        let short = short_id(&row.puuid);
        let _ = write!(
            out,
            "#{:3}. Score: {:.0}\n      PUUID: {short}...\n",
            row.position, row.value
        );
    }
    out.trim_end().to_string()
}

pub fn player(dto: &PlayerChallengesDto) -> String {
    let total = dto.total_points.as_ref();
    let mut out = format!(
        "PLAYER CHALLENGE SUMMARY\n\
         ========================\n\
         Total Points: {:.0}\n\
         Overall Level: {}\n\
         Percentile: {:.2}%\n\
         Active Challenges: {}\n\n\
         CATEGORY BREAKDOWN:\n",
        total.and_then(|p| p.current).unwrap_or(0.0),
        total.and_then(|p| p.level.as_deref()).unwrap_or("NONE"),
        total.and_then(|p| p.percentile).unwrap_or(0.0) * 100.0,
        dto.challenges.len(),
    );

    let mut categories: Vec<_> = dto.category_points.iter().collect();
    categories.sort_by_key(|(name, _)| name.as_str());
    for (category, points) in categories {
        let _ = write!(
            out,
            "  {}:\n    \
             Points: {:.0}\n    \
             Level: {}\n",
            category.to_uppercase(),
            points.current.unwrap_or(0.0),
            points.level.as_deref().unwrap_or("NONE"),
        );
    }

    let mut sorted: Vec<_> = dto.challenges.iter().collect();
    sorted.sort_by(|a, b| {
        b.value
            .unwrap_or(0.0)
            .partial_cmp(&a.value.unwrap_or(0.0))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    out.push_str("\nTOP CHALLENGES BY PROGRESS:\n");
    for (i, challenge) in sorted.iter().take(SAMPLE_LIMIT).enumerate() {
        let _ = write!(
            out,
            "{:2}. Challenge {}: {}\n    Progress: {:.0}\n",
            i + 1,
            challenge.challenge_id,
            challenge.level.as_deref().unwrap_or("NONE"),
            challenge.value.unwrap_or(0.0),
        );
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn configs_group_by_state() {
        let list: Vec<ChallengeConfigDto> = serde_json::from_value(json!([
            {"id": 1, "state": "ENABLED",
             "localizedNames": {"en_US": {"name": "ARAM Authority"}},
             "tracking": "LIFETIME", "leaderboard": true},
            {"id": 2, "state": "DISABLED"}
        ]))
        .unwrap();

        let text = configs(&list);
        assert!(text.contains("ENABLED: 1 challenges"));
        assert!(text.contains("DISABLED: 1 challenges"));
        assert!(text.contains(" 1. ARAM Authority (ID: 1)"));
        assert!(text.contains("Leaderboard: Yes"));
    }

    #[test]
    fn leaderboard_shortens_puuids() {
        let rows: Vec<ApexPlayerInfoDto> = serde_json::from_value(json!([
            {"puuid": "abcdefghijkl", "value": 4200.0, "position": 1}
        ]))
        .unwrap();

        let text = leaderboard(&rows, "challenger");
        assert!(text.contains("CHALLENGER CHALLENGE LEADERBOARD"));
        assert!(text.contains("#  1. Score: 4200"));
        assert!(text.contains("PUUID: abcdefgh..."));
    }

    #[test]
    fn leaderboard_handles_multibyte_puuids() {
        let rows: Vec<ApexPlayerInfoDto> = serde_json::from_value(json!([
            {"puuid": "aaaaaaa\u{e9}xxxx", "value": 100.0, "position": 1}
        ]))
        .unwrap();

        assert!(leaderboard(&rows, "master").contains("PUUID: aaaaaaa\u{e9}..."));
    }

    #[test]
    fn player_summary_sorts_challenges_by_value() {
        let dto: PlayerChallengesDto = serde_json::from_value(json!({
            "totalPoints": {"level": "DIAMOND", "current": 12_345.0, "percentile": 0.042},
            "categoryPoints": {
                "TEAMWORK": {"level": "GOLD", "current": 800.0}
            },
            "challenges": [
                {"challengeId": 1, "level": "SILVER", "value": 10.0},
                {"challengeId": 2, "level": "MASTER", "value": 900.0}
            ]
        }))
        .unwrap();

        let text = player(&dto);
        assert!(text.contains("Total Points: 12345"));
        assert!(text.contains("Percentile: 4.20%"));
        assert!(text.contains("TEAMWORK"));
        let first = text.find("Challenge 2: MASTER").unwrap();
        let second = text.find("Challenge 1: SILVER").unwrap();
        assert!(first < second);
    }
}
