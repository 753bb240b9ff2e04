/**
 * Contact Message Persistence
 *
 * This module owns the `contactos` table of inbound contact-form
 * submissions. Rows are written once and never mutated or read back by
 * any endpoint in this service.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// Default source tag when the form does not name one
pub const DEFAULT_FUENTE: &str = "general";

/// An inbound contact-form submission
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContactMessage {
    /// Autoincrement id
    pub id: i64,
    /// Sender name
    pub nombre: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub mensaje: String,
    /// Source tag (which form or page the message came from)
    pub fuente: String,
    /// Submission timestamp
    pub fecha_envio: DateTime<Utc>,
}

/// Create the `contactos` table if it does not exist
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contactos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            email TEXT NOT NULL,
            mensaje TEXT NOT NULL,
            fuente TEXT NOT NULL DEFAULT 'general',
            fecha_envio TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Persist a contact message
pub async fn insert_contact(
    pool: &SqlitePool,
    nombre: &str,
    email: &str,
    mensaje: &str,
    fuente: &str,
) -> Result<ContactMessage, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contactos (nombre, email, mensaje, fuente, fecha_envio)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, nombre, email, mensaje, fuente, fecha_envio
        "#,
    )
    .bind(nombre)
    .bind(email)
    .bind(mensaje)
    .bind(fuente)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Count stored submissions
///
/// Used by tests to assert that rejected submissions persist nothing.
pub async fn count_contacts(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contactos")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        ensure_schema(&pool).await.expect("Failed to create schema");
        pool
    }

    #[tokio::test]
    async fn test_insert_contact() {
        let pool = test_pool().await;

        let message = insert_contact(
            &pool,
            "Test User",
            "test@test.com",
            "Mensaje de prueba",
            DEFAULT_FUENTE,
        )
        .await
        .unwrap();

        assert_eq!(message.nombre, "Test User");
        assert_eq!(message.fuente, "general");
        assert_eq!(count_contacts(&pool).await.unwrap(), 1);
    }
}
