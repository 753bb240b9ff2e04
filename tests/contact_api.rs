//! Contact API integration tests

mod common;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::spawn_app;
use eyepsicol::contact::db::count_contacts;

#[tokio::test]
async fn contact_submission_is_persisted() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/contacto")
        .json(&json!({
            "name": "Test User",
            "email": "test@test.com",
            "message": "Mensaje de prueba",
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));

    assert_eq!(count_contacts(&app.state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn contact_defaults_fuente_to_general() {
    let app = spawn_app().await;

    app.server
        .post("/contacto")
        .json(&json!({
            "name": "Test User",
            "email": "test@test.com",
            "message": "Sin fuente",
        }))
        .await;

    let (fuente,): (String,) = sqlx::query_as("SELECT fuente FROM contactos LIMIT 1")
        .fetch_one(&app.state.db)
        .await
        .unwrap();
    assert_eq!(fuente, "general");
}

#[tokio::test]
async fn contact_keeps_explicit_fuente() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/contacto")
        .json(&json!({
            "name": "Test User",
            "email": "test@test.com",
            "message": "Con fuente",
            "fuente": "landing",
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let (fuente,): (String,) = sqlx::query_as("SELECT fuente FROM contactos LIMIT 1")
        .fetch_one(&app.state.db)
        .await
        .unwrap();
    assert_eq!(fuente, "landing");
}

#[tokio::test]
async fn malformed_email_is_rejected_and_nothing_is_persisted() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/contacto")
        .json(&json!({
            "name": "Test User",
            "email": "not-an-email",
            "message": "Mensaje de prueba",
        }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("El formato del email no es válido"));

    assert_eq!(count_contacts(&app.state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/contacto")
        .json(&json!({
            "name": "Test User",
            "email": "test@test.com",
            "message": "   ",
        }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("El campo message es requerido"));
    assert_eq!(count_contacts(&app.state.db).await.unwrap(), 0);
}
