/**
 * Session Store and Cookies
 *
 * Server-side session state keyed by an opaque token delivered in an
 * HttpOnly cookie. The token is a UUID v4; its value carries no meaning
 * for the client.
 *
 * # Lifecycle
 *
 * - Created on successful login or registration
 * - Read by check-auth
 * - Destroyed on logout or when the TTL has elapsed
 *
 * Sessions live in process memory; a restart logs everyone out. That is
 * the accepted scope of this service (no distributed session store).
 */

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "eyepsicol_session";

/// Authenticated identity held server-side for one session
#[derive(Debug, Clone)]
pub struct Session {
    /// Account id of the authenticated user
    pub account_id: i64,
    /// Display name
    pub nombre: String,
    /// Username
    pub usuario: String,
    /// Email address
    pub email: String,
    /// Instant after which the session is no longer valid
    pub expires_at: DateTime<Utc>,
}

/// In-memory session store shared across request handlers
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a store whose sessions expire after `ttl_hours`
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Establish a session for an authenticated account
    ///
    /// Returns the opaque token to be set as the session cookie.
    pub async fn create(
        &self,
        account_id: i64,
        nombre: &str,
        usuario: &str,
        email: &str,
    ) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        let session = Session {
            account_id,
            nombre: nombre.to_string(),
            usuario: usuario.to_string(),
            email: email.to_string(),
            expires_at: Utc::now() + self.ttl,
        };

        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    /// Look up a session by token
    ///
    /// Expired sessions are dropped on lookup and reported as absent.
    pub async fn get(&self, token: &str) -> Option<Session> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if session.expires_at > Utc::now() => {
                    return Some(session.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: remove under the write lock
        self.sessions.write().await.remove(token);
        None
    }

    /// Destroy a session
    ///
    /// Removing an unknown token is a no-op, which makes logout idempotent.
    pub async fn remove(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Number of live sessions (expired entries may still be counted
    /// until their next lookup)
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the store holds no sessions
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Extract the session token from the request's Cookie header
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Build the Set-Cookie value establishing a session
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// Build the Set-Cookie value clearing the session cookie
pub fn clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
