/**
 * Model Gateway
 *
 * Forwards chat messages to the Ollama generation endpoint and manages
 * its liveness and retry policy.
 *
 * # Respond Flow
 *
 * 1. Reject empty messages
 * 2. Take the caller's transcript lock (serializes per-user updates)
 * 3. Canned-answer short circuit (no model contact, failure counter
 *    untouched)
 * 4. Liveness probe with a short timeout; when the server is down and the
 *    consecutive-failure count is below the threshold, one
 *    restart-and-retry cycle; at or above the threshold, a static
 *    degraded message with no further restart attempts
 * 5. Generation request with persona preamble, rolling context and the
 *    new message; failures increment the counter and map to user-facing
 *    transient messages; success resets the counter
 * 6. Append the exchange to the transcript and truncate to the cap
 *
 * Upstream trouble is always recovered into apologetic text; it never
 * escapes this module as a server error.
 */

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chatbot::canned::canned_reply;
use crate::chatbot::context::{ConversationStore, DEFAULT_KEEP_CHARS, DEFAULT_MAX_CHARS};
use crate::chatbot::process::OllamaSupervisor;
use crate::error::ApiError;

/// Degraded-mode reply once the failure threshold is reached
const DEGRADED_REPLY: &str =
    "El servicio está experimentando problemas técnicos. Por favor, intenta en unos minutos.";

/// Reply for a generation timeout
const TIMEOUT_REPLY: &str =
    "El servicio está respondiendo lentamente. Intenta con una pregunta más breve.";

/// Reply for a connection error below the failure threshold
const CONNECTION_REPLY: &str = "Problema de conexión temporal. Intenta de nuevo.";

/// Reply for a connection error at or above the failure threshold
const UNAVAILABLE_REPLY: &str =
    "El servicio de IA no está disponible temporalmente. Estamos trabajando para solucionarlo.";

/// Reply when the model returns empty text
const EMPTY_REPLY: &str =
    "No pude generar una respuesta adecuada. ¿Podrías reformular tu pregunta?";

/// Reply for any other unexpected failure
const UNEXPECTED_REPLY: &str = "Error inesperado. Por favor, intenta más tarde.";

/// Fixed persona preamble for every generation request
const PERSONA: &str = "Eres Eyebot, un psicólogo virtual especializado en salud mental. \
Responde de manera empática y profesional EN ESPAÑOL. \
EyePsicol ofrece terapia individual, terapia de pareja y talleres de \
gestión de la ansiedad y el estrés, con sesiones presenciales y online.";

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct ChatbotConfig {
    /// Base URL of the Ollama server (no trailing slash)
    pub ollama_url: String,
    /// Model name passed to /api/generate
    pub model: String,
    /// Consecutive-failure threshold before degrading
    pub max_retries: u32,
    /// Timeout for the liveness probe
    pub probe_timeout: Duration,
    /// Timeout for a generation request
    pub generate_timeout: Duration,
    /// Transcript cap in characters
    pub context_max_chars: usize,
    /// Suffix kept after transcript truncation
    pub context_keep_chars: usize,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            ollama_url: "http://localhost:11434".to_string(),
            model: "gemma2:2b".to_string(),
            max_retries: 3,
            probe_timeout: Duration::from_secs(3),
            generate_timeout: Duration::from_secs(30),
            context_max_chars: DEFAULT_MAX_CHARS,
            context_keep_chars: DEFAULT_KEEP_CHARS,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    num_predict: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Gateway to the Ollama generation service
pub struct ChatGateway {
    http: reqwest::Client,
    config: ChatbotConfig,
    fail_count: AtomicU32,
    supervisor: OllamaSupervisor,
    contexts: ConversationStore,
}

impl ChatGateway {
    /// Create a gateway with the given configuration and supervisor
    pub fn new(config: ChatbotConfig, supervisor: OllamaSupervisor) -> Self {
        let contexts =
            ConversationStore::new(config.context_max_chars, config.context_keep_chars);

        Self {
            http: reqwest::Client::new(),
            config,
            fail_count: AtomicU32::new(0),
            supervisor,
            contexts,
        }
    }

    /// Current consecutive-failure count
    pub fn failures(&self) -> u32 {
        self.fail_count.load(Ordering::Relaxed)
    }

    fn record_failure(&self) -> u32 {
        self.fail_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn reset_failures(&self) {
        self.fail_count.store(0, Ordering::Relaxed);
    }

    /// Number of users with an active conversation
    pub async fn active_users(&self) -> usize {
        self.contexts.active_users().await
    }

    /// Restart the supervised Ollama process
    pub async fn restart_model(&self) -> bool {
        let restarted = self.supervisor.restart().await;
        if restarted {
            self.reset_failures();
        }
        restarted
    }

    /// Probe Ollama liveness with a short timeout
    pub async fn is_alive(&self) -> bool {
        let url = format!("{}/api/tags", self.config.ollama_url);
        match self
            .http
            .get(&url)
            .timeout(self.config.probe_timeout)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Produce a reply for a user's message
    ///
    /// Returns `Validation` for an empty message; every upstream failure
    /// mode is recovered into user-facing text.
    pub async fn respond(&self, user_id: &str, message: &str) -> Result<String, ApiError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ApiError::validation("Mensaje vacío"));
        }

        // Hold this user's transcript lock for the whole exchange so
        // concurrent requests from the same client cannot interleave
        let entry = self.contexts.entry(user_id).await;
        let mut transcript = entry.lock().await;

        let reply = match canned_reply(message) {
            Some(canned) => canned.to_string(),
            None => self.generate_with_recovery(message, &transcript).await,
        };

        self.contexts
            .append_exchange(&mut transcript, message, &reply);

        Ok(reply)
    }

    /// Liveness check, bounded restart-and-retry and generation
    ///
    /// At most one restart cycle per call: after a successful relaunch the
    /// probe is re-run once, and a second outage falls through to the
    /// generation attempt instead of restarting again.
    async fn generate_with_recovery(&self, message: &str, context: &str) -> String {
        let mut restarted = false;

        loop {
            if !self.is_alive().await {
                if self.failures() >= self.config.max_retries {
                    tracing::warn!(
                        "Ollama unreachable with {} consecutive failures; degrading",
                        self.failures()
                    );
                    return DEGRADED_REPLY.to_string();
                }

                if !restarted {
                    restarted = true;
                    tracing::warn!("Ollama unreachable, attempting restart");
                    if self.supervisor.restart().await {
                        self.reset_failures();
                        continue;
                    }
                }
                // Restart failed or already spent: let the generation
                // attempt record the failure
            }

            return self.generate(message, context).await;
        }
    }

    /// Issue one generation request and map every failure mode to
    /// user-facing text
    async fn generate(&self, message: &str, context: &str) -> String {
        let payload = GenerateRequest {
            model: &self.config.model,
            prompt: build_prompt(message, context),
            stream: false,
            options: GenerateOptions {
                num_predict: 200,
                temperature: 0.7,
                top_p: 0.8,
            },
        };

        let url = format!("{}/api/generate", self.config.ollama_url);
        tracing::debug!("Sending to Ollama: {:.30}...", message);

        let response = match self
            .http
            .post(&url)
            .timeout(self.config.generate_timeout)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                self.record_failure();
                tracing::warn!("Ollama generation timed out");
                return TIMEOUT_REPLY.to_string();
            }
            Err(e) if e.is_connect() => {
                let failures = self.record_failure();
                tracing::warn!("Ollama connection error: {}", e);
                return if failures >= self.config.max_retries {
                    UNAVAILABLE_REPLY.to_string()
                } else {
                    CONNECTION_REPLY.to_string()
                };
            }
            Err(e) => {
                self.record_failure();
                tracing::error!("Ollama request failed: {}", e);
                return UNEXPECTED_REPLY.to_string();
            }
        };

        if !response.status().is_success() {
            self.record_failure();
            let code = response.status().as_u16();
            tracing::warn!("Ollama returned HTTP {}", code);
            return format!("Error temporal del servicio (código {code}). Intenta de nuevo.");
        }

        match response.json::<GenerateResponse>().await {
            Ok(data) => {
                let text = data.response.trim().to_string();
                if text.is_empty() {
                    self.record_failure();
                    EMPTY_REPLY.to_string()
                } else {
                    self.reset_failures();
                    text
                }
            }
            Err(e) => {
                self.record_failure();
                tracing::error!("Failed to decode Ollama response: {}", e);
                UNEXPECTED_REPLY.to_string()
            }
        }
    }
}

/// Build the generation prompt from the persona preamble, the rolling
/// context and the new message
fn build_prompt(message: &str, context: &str) -> String {
    format!(
        "{PERSONA}\n\n\
         CONVERSACIÓN PREVIA:\n{context}\n\
         PREGUNTA ACTUAL: {message}\n\n\
         RESPUESTA (enfócate en psicología y salud mental, sé natural):"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway_at(url: &str) -> ChatGateway {
        let config = ChatbotConfig {
            ollama_url: url.to_string(),
            probe_timeout: Duration::from_millis(300),
            generate_timeout: Duration::from_millis(500),
            ..ChatbotConfig::default()
        };
        ChatGateway::new(config, OllamaSupervisor::disabled())
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let gateway = gateway_at("http://127.0.0.1:1");
        let err = gateway.respond("user", "   ").await.unwrap_err();
        assert_eq!(err.message(), "Mensaje vacío");
    }

    #[tokio::test]
    async fn test_canned_reply_skips_model_and_counter() {
        // Unreachable URL: any model contact would fail
        let gateway = gateway_at("http://127.0.0.1:1");
        let reply = gateway.respond("user", "hola").await.unwrap();
        assert!(reply.contains("Eyebot"));
        assert_eq!(gateway.failures(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_model_degrades_after_threshold() {
        let gateway = gateway_at("http://127.0.0.1:1");

        // Each failed call increments the counter by one
        for _ in 0..gateway.config.max_retries {
            let reply = gateway.respond("user", "¿qué es la ansiedad?").await.unwrap();
            assert_ne!(reply, DEGRADED_REPLY);
        }
        assert_eq!(gateway.failures(), gateway.config.max_retries);

        // At the threshold the gateway stops trying
        let reply = gateway.respond("user", "¿sigues ahí?").await.unwrap();
        assert_eq!(reply, DEGRADED_REPLY);
        assert_eq!(gateway.failures(), gateway.config.max_retries);
    }

    #[tokio::test]
    async fn test_exchange_is_recorded() {
        let gateway = gateway_at("http://127.0.0.1:1");
        gateway.respond("user", "hola").await.unwrap();

        let entry = gateway.contexts.entry("user").await;
        let transcript = entry.lock().await;
        assert!(transcript.starts_with("Usuario: hola\nAsistente: "));
    }

    #[test]
    fn test_prompt_contains_all_parts() {
        let prompt = build_prompt("¿qué es la ansiedad?", "Usuario: hola\n");
        assert!(prompt.contains("Eyebot"));
        assert!(prompt.contains("CONVERSACIÓN PREVIA:\nUsuario: hola\n"));
        assert!(prompt.contains("PREGUNTA ACTUAL: ¿qué es la ansiedad?"));
    }
}
