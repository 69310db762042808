// tests/session_flow_test.rs — Integration test: chat client + controller against the reception service

use axum::routing::post;
use axum::{Json, Router};
use tokio::sync::mpsc;

use frontdesk::api::{build_router, ApiState};
use frontdesk::client::HttpChatClient;
use frontdesk::core::types::CONNECTION_ERROR_TEXT;
use frontdesk::core::{Applied, Phase, SessionController};
use frontdesk::infra::session::UuidIdentity;

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_desk(webhook_url: Option<String>) -> HttpChatClient {
    let base = spawn(build_router(ApiState::new(webhook_url), &[])).await;
    HttpChatClient::new(format!("{base}/chat"))
}

fn controller() -> SessionController {
    let mut c = SessionController::new(Box::new(UuidIdentity));
    c.start();
    c
}

#[tokio::test]
async fn test_full_registration_raises_popup_and_fires_webhook() {
    let (tx, mut rx) = mpsc::unbounded_channel::<serde_json::Value>();
    let hook = Router::new().route(
        "/hook",
        post(move |Json(body): Json<serde_json::Value>| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(body);
                "ok"
            }
        }),
    );
    let hook_base = spawn(hook).await;
    let client = spawn_desk(Some(format!("{hook_base}/hook"))).await;
    let mut desk = controller();

    let first = desk.submit(&client, "I have a fever").await;
    assert_eq!(first, Some(Applied::Reply { completed: false }));
    assert!(desk.turns()[1]
        .text()
        .starts_with("Hello. I have noted your symptoms."));

    desk.submit(&client, "Jane Doe").await;
    assert_eq!(
        desk.turns()[3].text(),
        "Thank you. Now, could you please provide the patient's age?"
    );

    let done = desk.submit(&client, "I am 34").await;
    assert_eq!(done, Some(Applied::Reply { completed: true }));
    assert!(desk.popup_visible());
    assert!(desk.turns()[5].text().contains("General Ward"));
    assert_eq!(desk.turns().len(), 6);

    let payload = rx.recv().await.unwrap();
    assert_eq!(payload["patient_name"], "Jane Doe");
    assert_eq!(payload["patient_age"], 34);
    assert_eq!(payload["patient_query"], "I have a fever");
    assert_eq!(payload["ward"], "general");

    desk.dismiss_popup();
    assert!(!desk.popup_visible());
}

#[tokio::test]
async fn test_new_session_starts_intake_over() {
    let client = spawn_desk(None).await;
    let mut desk = controller();

    desk.submit(&client, "severe chest pain").await;
    desk.submit(&client, "John Smith").await;

    desk.reset();
    assert!(desk.turns().is_empty());
    assert_eq!(desk.phase(), Phase::Conversation);

    // The service sees a fresh session id and greets again instead of asking for the age.
    desk.submit(&client, "my knee hurts").await;
    assert_eq!(desk.turns().len(), 2);
    assert!(desk.turns()[1]
        .text()
        .starts_with("Hello. I have noted your symptoms."));
}

#[tokio::test]
async fn test_unreachable_service_appends_error_turn() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpChatClient::new(format!("http://{addr}/chat"));
    let mut desk = controller();

    let applied = desk.submit(&client, "hello").await;
    assert_eq!(applied, Some(Applied::Error));
    assert_eq!(desk.turns()[1].text(), CONNECTION_ERROR_TEXT);
    assert!(!desk.is_pending());
    assert!(!desk.popup_visible());
}
