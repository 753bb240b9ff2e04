/**
 * Account Model and Database Operations
 *
 * This module owns the `usuarios` table: the persistent store of
 * registered accounts.
 *
 * # Schema
 *
 * - `id` - autoincrement primary key
 * - `nombre` - display name
 * - `usuario` - username, unique
 * - `email` - lowercased email, unique
 * - `contrasena` - bcrypt hash, never the plaintext
 * - `fecha_registro` - creation timestamp
 *
 * Accounts are created by registration and never mutated afterwards.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A registered account as stored in the `usuarios` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account id
    pub id: i64,
    /// Display name
    pub nombre: String,
    /// Username (unique)
    pub usuario: String,
    /// Email address (unique, lowercased)
    pub email: String,
    /// Bcrypt password hash
    pub contrasena: String,
    /// Registration timestamp
    pub fecha_registro: DateTime<Utc>,
}

/// Create the `usuarios` table if it does not exist
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS usuarios (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            usuario TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            contrasena TEXT NOT NULL,
            fecha_registro TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create a new account
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `nombre` - Display name
/// * `usuario` - Username
/// * `email` - Lowercased email
/// * `password_hash` - Bcrypt hash of the password
///
/// # Returns
/// The created account or a database error
pub async fn create_account(
    pool: &SqlitePool,
    nombre: &str,
    usuario: &str,
    email: &str,
    password_hash: &str,
) -> Result<Account, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO usuarios (nombre, usuario, email, contrasena, fecha_registro)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, nombre, usuario, email, contrasena, fecha_registro
        "#,
    )
    .bind(nombre)
    .bind(usuario)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Look up an account by login identifier
///
/// The identifier is matched against both the username and the email
/// column, so users can log in with either.
pub async fn find_by_identifier(
    pool: &SqlitePool,
    identifier: &str,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        r#"
        SELECT id, nombre, usuario, email, contrasena, fecha_registro
        FROM usuarios
        WHERE usuario = ?1 OR email = ?1
        "#,
    )
    .bind(identifier)
    .fetch_optional(pool)
    .await
}

/// Check whether a username or email is already registered
pub async fn identifier_taken(
    pool: &SqlitePool,
    usuario: &str,
    email: &str,
) -> Result<bool, sqlx::Error> {
    let existing: Option<(i64,)> = sqlx::query_as(
        r#"
        SELECT id FROM usuarios WHERE usuario = ?1 OR email = ?2
        "#,
    )
    .bind(usuario)
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(existing.is_some())
}
