//! Text block for the lol-status-v4 response.

use std::fmt::Write;

use league_mcp_riot_api::api::status::{PlatformDataDto, StatusDto};

pub fn platform_status(dto: &PlatformDataDto) -> String {
    let healthy = dto.maintenances.is_empty() && dto.incidents.is_empty();
    let mut out = format!(
        "PLATFORM STATUS\n\
         ===============\n\
         Platform: {} ({})\n\
         Supported Locales: {}\n\n\
         Current Status: {}\n",
        dto.name,
        dto.id,
        dto.locales.join(", "),
        if healthy { "OPERATIONAL" } else { "ISSUES DETECTED" },
    );

    if !dto.maintenances.is_empty() {
        let _ = write!(out, "\nACTIVE MAINTENANCES ({}):\n", dto.maintenances.len());
        for (i, m) in dto.maintenances.iter().enumerate() {
            out.push_str(&entry(i, m, m.maintenance_status.as_deref()));
        }
    }

    if !dto.incidents.is_empty() {
        let _ = write!(out, "\nACTIVE INCIDENTS ({}):\n", dto.incidents.len());
        for (i, incident) in dto.incidents.iter().enumerate() {
            out.push_str(&entry(i, incident, incident.incident_severity.as_deref()));
        }
    }

    if healthy {
        out.push_str("No active maintenances or incidents\n");
    }
    out.trim_end().to_string()
}

fn entry(index: usize, status: &StatusDto, state: Option<&str>) -> String {
    format!(
        "{}. {}\n   \
         Status: {}\n   \
         Platforms: {}\n   \
         Created: {}\n",
        index + 1,
        status.title(),
        state.unwrap_or("N/A").to_uppercase(),
        status.platforms.join(", "),
        status.created_at.as_deref().unwrap_or("N/A"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn healthy_platform_reports_operational() {
        let dto: PlatformDataDto = serde_json::from_value(json!({
            "id": "EUW1",
            "name": "EU West",
            "locales": ["en_GB", "fr_FR"]
        }))
        .unwrap();

        let text = platform_status(&dto);
        assert!(text.contains("Platform: EU West (EUW1)"));
        assert!(text.contains("Current Status: OPERATIONAL"));
        assert!(text.contains("No active maintenances or incidents"));
    }

    #[test]
    fn incidents_render_english_title_and_severity() {
        let dto: PlatformDataDto = serde_json::from_value(json!({
            "id": "EUW1",
            "name": "EU West",
            "incidents": [{
                "id": 42,
                "incident_severity": "warning",
                "titles": [
                    {"locale": "fr_FR", "content": "Problèmes de connexion"},
                    {"locale": "en_US", "content": "Login issues"}
                ],
                "platforms": ["windows"],
                "created_at": "2024-03-01T10:00:00Z"
            }]
        }))
        .unwrap();

        let text = platform_status(&dto);
        assert!(text.contains("Current Status: ISSUES DETECTED"));
        assert!(text.contains("1. Login issues"));
        assert!(text.contains("Status: WARNING"));
        assert!(text.contains("Platforms: windows"));
    }
}
