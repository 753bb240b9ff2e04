//! Chatbot API integration tests
//!
//! The Ollama server is stubbed with wiremock; the supervisor is disabled
//! so outage scenarios never spawn real processes.

mod common;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{spawn_app, spawn_app_with_ollama};

const DEGRADED_REPLY: &str =
    "El servicio está experimentando problemas técnicos. Por favor, intenta en unos minutos.";

async fn mount_alive(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

#[tokio::test]
async fn chat_happy_path_returns_generated_text() {
    let ollama = MockServer::start().await;
    mount_alive(&ollama).await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": "Respira hondo." })),
        )
        .mount(&ollama)
        .await;

    let app = spawn_app_with_ollama(&ollama.uri()).await;

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "user_id": "u1", "mensaje": "me siento ansioso" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["respuesta"], json!("Respira hondo."));
    assert_eq!(body["user_id"], json!("u1"));
    assert_eq!(body["status"], json!("success"));
}

#[tokio::test]
async fn canned_answer_never_contacts_the_model() {
    let ollama = MockServer::start().await;
    mount_alive(&ollama).await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "no" })))
        .expect(0)
        .mount(&ollama)
        .await;

    let app = spawn_app_with_ollama(&ollama.uri()).await;

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "user_id": "u1", "mensaje": "  HOLA  " }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert!(body["respuesta"].as_str().unwrap().contains("Eyebot"));

    // Health confirms the failure counter was never touched
    let health: Value = app.server.get("/api/health").await.json();
    assert_eq!(health["fail_count"], json!(0));
}

#[tokio::test]
async fn empty_message_is_a_400() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "user_id": "u1", "mensaje": "   " }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Mensaje vacío"));
}

#[tokio::test]
async fn missing_user_id_defaults() {
    let ollama = MockServer::start().await;
    mount_alive(&ollama).await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
        .mount(&ollama)
        .await;

    let app = spawn_app_with_ollama(&ollama.uri()).await;

    let body: Value = app
        .server
        .post("/api/chat")
        .json(&json!({ "mensaje": "una pregunta" }))
        .await
        .json();
    assert_eq!(body["user_id"], json!("default"));
}

#[tokio::test]
async fn unreachable_model_degrades_after_max_retries() {
    // Nothing listens on this port; every probe and generation fails
    let app = spawn_app().await;

    // The first MAX_RETRIES calls each record one failure and answer
    // with transient apologetic text, still HTTP 200
    for _ in 0..3 {
        let response = app
            .server
            .post("/api/chat")
            .json(&json!({ "user_id": "u1", "mensaje": "¿estás ahí?" }))
            .await;
        assert_eq!(response.status_code(), 200);
        let body: Value = response.json();
        assert_ne!(body["respuesta"], json!(DEGRADED_REPLY));
    }

    let health: Value = app.server.get("/api/health").await.json();
    assert_eq!(health["fail_count"], json!(3));
    assert_eq!(health["ollama"], json!("disconnected"));

    // At the threshold the gateway answers the static degraded message
    // without another restart cycle
    let body: Value = app
        .server
        .post("/api/chat")
        .json(&json!({ "user_id": "u1", "mensaje": "¿estás ahí?" }))
        .await
        .json();
    assert_eq!(body["respuesta"], json!(DEGRADED_REPLY));

    let health: Value = app.server.get("/api/health").await.json();
    assert_eq!(health["fail_count"], json!(3));
}

#[tokio::test]
async fn generation_error_counts_and_success_resets() {
    let ollama = MockServer::start().await;
    mount_alive(&ollama).await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ollama)
        .await;

    let app = spawn_app_with_ollama(&ollama.uri()).await;

    let body: Value = app
        .server
        .post("/api/chat")
        .json(&json!({ "user_id": "u1", "mensaje": "pregunta" }))
        .await
        .json();
    assert_eq!(
        body["respuesta"],
        json!("Error temporal del servicio (código 500). Intenta de nuevo.")
    );

    let health: Value = app.server.get("/api/health").await.json();
    assert_eq!(health["fail_count"], json!(1));

    // A successful generation resets the counter
    ollama.reset().await;
    mount_alive(&ollama).await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "mejor" })))
        .mount(&ollama)
        .await;

    let body: Value = app
        .server
        .post("/api/chat")
        .json(&json!({ "user_id": "u1", "mensaje": "otra pregunta" }))
        .await
        .json();
    assert_eq!(body["respuesta"], json!("mejor"));

    let health: Value = app.server.get("/api/health").await.json();
    assert_eq!(health["fail_count"], json!(0));
}

#[tokio::test]
async fn empty_generation_text_counts_as_failure() {
    let ollama = MockServer::start().await;
    mount_alive(&ollama).await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "   " })))
        .mount(&ollama)
        .await;

    let app = spawn_app_with_ollama(&ollama.uri()).await;

    let body: Value = app
        .server
        .post("/api/chat")
        .json(&json!({ "user_id": "u1", "mensaje": "pregunta" }))
        .await
        .json();
    assert_eq!(
        body["respuesta"],
        json!("No pude generar una respuesta adecuada. ¿Podrías reformular tu pregunta?")
    );

    let health: Value = app.server.get("/api/health").await.json();
    assert_eq!(health["fail_count"], json!(1));
}

#[tokio::test]
async fn health_reports_connected_and_active_users() {
    let ollama = MockServer::start().await;
    mount_alive(&ollama).await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
        .mount(&ollama)
        .await;

    let app = spawn_app_with_ollama(&ollama.uri()).await;

    let health: Value = app.server.get("/api/health").await.json();
    assert_eq!(health["status"], json!("ok"));
    assert_eq!(health["ollama"], json!("connected"));
    assert_eq!(health["users_activos"], json!(0));

    app.server
        .post("/api/chat")
        .json(&json!({ "user_id": "u1", "mensaje": "hola" }))
        .await;
    app.server
        .post("/api/chat")
        .json(&json!({ "user_id": "u2", "mensaje": "hola" }))
        .await;

    let health: Value = app.server.get("/api/health").await.json();
    assert_eq!(health["users_activos"], json!(2));
}

#[tokio::test]
async fn restart_endpoint_reports_failure_when_supervision_disabled() {
    let app = spawn_app().await;

    let body: Value = app.server.post("/api/restart-ollama").await.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Error al reiniciar"));
}
