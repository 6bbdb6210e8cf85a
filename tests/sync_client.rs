use chrono::{TimeZone, Utc};
use eventPlanner::clients::backend_client::SyncError;
use eventPlanner::models::event::{EventDraft, Reminder, ReminderMethod};
use eventPlanner::service::sync_service::{BackendSyncService, SyncClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn standup_draft() -> EventDraft {
    EventDraft {
        title: "Standup".to_string(),
        description: String::new(),
        start_date: Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 1, 2, 9, 15, 0).unwrap(),
        reminders: vec![Reminder {
            method: ReminderMethod::Popup,
            minutes: 5,
        }],
    }
}

#[tokio::test]
async fn fetch_all_events_decodes_the_backend_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "evt-1",
                "title": "Standup",
                "description": "",
                "startDate": "2024-01-02T09:00:00Z",
                "endDate": "2024-01-02T09:15:00Z",
                "reminders": [{"method": "popup", "minutes": 5}]
            }
        ])))
        .mount(&server)
        .await;

    let service = BackendSyncService::new(server.uri());
    let events = service.fetch_all_events().await.expect("fetch should succeed");

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "evt-1");
    assert_eq!(events[0].title, "Standup");
    assert_eq!(events[0].reminders[0].minutes, 5);
}

#[tokio::test]
async fn create_event_posts_the_draft_and_returns_the_echo() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create-event"))
        .and(body_json(json!({
            "title": "Standup",
            "description": "",
            "startDate": "2024-01-02T09:00:00Z",
            "endDate": "2024-01-02T09:15:00Z",
            "reminders": [{"method": "popup", "minutes": 5}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "evt-1",
            "title": "Standup",
            "description": "",
            "startDate": "2024-01-02T09:00:00Z",
            "endDate": "2024-01-02T09:15:00Z",
            "reminders": [{"method": "popup", "minutes": 5}]
        })))
        .mount(&server)
        .await;

    let service = BackendSyncService::new(server.uri());
    let created = service
        .create_event(&standup_draft())
        .await
        .expect("create should succeed");

    assert_eq!(created.id, "evt-1");
    assert_eq!(created.title, "Standup");
}

#[tokio::test]
async fn non_success_status_maps_to_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .mount(&server)
        .await;

    let service = BackendSyncService::new(server.uri());
    match service.fetch_all_events().await {
        Err(SyncError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "backend down");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn undecodable_body_maps_to_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let service = BackendSyncService::new(server.uri());
    assert!(matches!(
        service.fetch_all_events().await,
        Err(SyncError::Decode(_))
    ));
}

#[tokio::test]
async fn unreachable_backend_maps_to_an_http_error() {
    let service = BackendSyncService::new("http://127.0.0.1:1".to_string());
    assert!(matches!(
        service.fetch_all_events().await,
        Err(SyncError::Http(_))
    ));
}
