use std::{env, num::NonZeroU32, time::Duration};

use league_mcp_riot_api::ApiClient;
use league_mcp_shared::{Platform, Routing};

fn live_client() -> ApiClient {
    dotenvy::dotenv().ok();
    let key = env::var("RIOT_API_KEY").expect("RIOT_API_KEY not set");
    ApiClient::new(
        key,
        NonZeroU32::new(20).unwrap(),
        Duration::from_secs(30),
    )
    .unwrap()
}

#[tokio::test]
#[ignore = "API Key required"]
async fn get_account_by_riot_id_returns_expected_account() {
    let api = live_client();

    let account = api
        .get_account_by_riot_id(Routing::Europe, "Le Conservateur", "3012")
        .await
        .unwrap();

    assert_eq!(account.game_name.as_deref(), Some("Le Conservateur"));
    assert_eq!(account.tag_line.as_deref(), Some("3012"));
    assert!(!account.puuid.is_empty());
}

#[tokio::test]
#[ignore = "API Key required"]
async fn match_history_round_trip_works() {
    let api = live_client();

    let account = api
        .get_account_by_riot_id(Routing::Europe, "Le Conservateur", "3012")
        .await
        .unwrap();

    let ids = api
        .get_match_ids_by_puuid(Routing::Europe, &account.puuid, &Default::default())
        .await
        .unwrap();
    let last_id = ids.first().expect("should return at least one match id");

    let match_data = api.get_match(Routing::Europe, last_id).await.unwrap();

    assert_eq!(match_data.metadata.match_id, *last_id);
    assert!(!match_data.info.participants.is_empty());
}

#[tokio::test]
#[ignore = "API Key required"]
async fn get_league_entries_does_not_error() {
    let api = live_client();

    let account = api
        .get_account_by_riot_id(Routing::Europe, "Le Conservateur", "3012")
        .await
        .unwrap();

    let entries = api
        .get_league_entries_by_puuid(Platform::Euw1, &account.puuid)
        .await
        .unwrap();

    for entry in &entries {
        assert!(!entry.queue_type.is_empty());
    }
}

#[tokio::test]
#[ignore = "API Key required"]
async fn platform_status_reports_known_platform() {
    let api = live_client();

    let status = api.get_platform_status(Platform::Euw1).await.unwrap();

    assert_eq!(status.id.to_lowercase(), "euw1");
}
