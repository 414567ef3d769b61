//! Text blocks for League-v4 responses.

use std::fmt::Write;

use league_mcp_riot_api::api::league::{LeagueEntryDto, LeagueListDto};

/// Ladder entries shown for an apex league before truncation.
const LADDER_LIMIT: usize = 10;

pub fn league_list(dto: &LeagueListDto) -> String {
    let mut out = format!(
        "LEAGUE INFORMATION\n\
         ==================\n\
         League: {}\n\
         Tier: {}\n\
         Queue: {}\n\
         Total Players: {}\n",
        dto.name.as_deref().unwrap_or("N/A"),
        dto.tier,
        dto.queue,
        dto.entries.len(),
    );

    let mut entries: Vec<_> = dto.entries.iter().collect();
    entries.sort_by(|a, b| b.league_points.cmp(&a.league_points));

    let shown = entries.len().min(LADDER_LIMIT);
    let _ = write!(out, "\nTop {shown} Players:\n");
    for (i, entry) in entries.iter().take(LADDER_LIMIT).enumerate() {
        let total = entry.wins + entry.losses;
        let win_rate = if total > 0 {
            entry.wins as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let _ = writeln!(
            out,
            "{:2}. {} - {} LP ({}W/{}L, {:.1}% WR){}",
            i + 1,
            entry
                .puuid
                .as_deref()
                .or(entry.summoner_id.as_deref())
                .unwrap_or("N/A"),
            entry.league_points,
            entry.wins,
            entry.losses,
            win_rate,
            if entry.hot_streak { " (hot streak)" } else { "" },
        );
    }
    if entries.len() > LADDER_LIMIT {
        let _ = write!(out, "... and {} more players", entries.len() - LADDER_LIMIT);
    }
    out.trim_end().to_string()
}

pub fn league_entries(entries: &[LeagueEntryDto]) -> String {
    if entries.is_empty() {
        return "No ranked entries found for this player.".to_string();
    }

    let mut out = format!(
        "RANKED INFORMATION\n\
         ==================\n\
         Queues: {}\n",
        entries.len()
    );
    for entry in entries {
        let total = entry.wins + entry.losses;
        let win_rate = if total > 0 {
            entry.wins as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let _ = write!(
            out,
            "\n{}:\n  \
             Rank: {} {}\n  \
             LP: {}\n  \
             Record: {}W/{}L ({:.1}% WR)\n",
            entry.queue_type,
            entry.tier.as_deref().unwrap_or("UNRANKED"),
            entry.rank.as_deref().unwrap_or(""),
            entry.league_points,
            entry.wins,
            entry.losses,
            win_rate,
        );
        if entry.hot_streak {
            out.push_str("  Hot Streak: Yes\n");
        }
        if let Some(series) = &entry.mini_series {
            let _ = writeln!(
                out,
                "  Promotion Series: {} ({} of {} wins)",
                series.progress, series.wins, series.target
            );
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ladder_is_sorted_by_league_points() {
        let dto: LeagueListDto = serde_json::from_value(json!({
            "leagueId": "uuid",
            "tier": "CHALLENGER",
            "name": "Fiora's Duelists",
            "queue": "RANKED_SOLO_5x5",
            "entries": [
                {"puuid": "low", "rank": "I", "leaguePoints": 700, "wins": 100, "losses": 100},
                {"puuid": "high", "rank": "I", "leaguePoints": 1400, "wins": 300, "losses": 200,
                 "hotStreak": true}
            ]
        }))
        .unwrap();

        let text = league_list(&dto);
        let high = text.find("high").unwrap();
        let low = text.find("low").unwrap();
        assert!(high < low);
        assert!(text.contains("1400 LP (300W/200L, 60.0% WR)"));
    }

    #[test]
    fn entries_show_promotion_series() {
        let entries: Vec<LeagueEntryDto> = serde_json::from_value(json!([
            {"queueType": "RANKED_SOLO_5x5", "tier": "GOLD", "rank": "II",
             "leaguePoints": 100, "wins": 60, "losses": 40,
             "miniSeries": {"target": 3, "progress": "WLN", "wins": 1, "losses": 1}}
        ]))
        .unwrap();

        let text = league_entries(&entries);
        assert!(text.contains("Rank: GOLD II"));
        assert!(text.contains("Record: 60W/40L (60.0% WR)"));
        assert!(text.contains("Promotion Series: WLN (1 of 3 wins)"));
    }

    #[test]
    fn empty_entries_are_a_sentence() {
        assert_eq!(
            league_entries(&[]),
            "No ranked entries found for this player."
        );
    }
}
