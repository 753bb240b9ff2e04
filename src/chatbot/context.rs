/**
 * Conversation Context
 *
 * Rolling per-user transcripts for the chatbot, keyed by the
 * client-supplied `user_id`. Each transcript is an append-only text
 * buffer capped at a maximum length; when the cap is exceeded the oldest
 * content is dropped and only the most recent suffix is kept.
 *
 * # Concurrency
 *
 * The mapping is shared process-wide. Each user's transcript sits behind
 * its own async mutex; the gateway holds that lock for the whole
 * read-generate-append sequence, so concurrent requests for the same
 * `user_id` cannot interleave and corrupt the transcript. Requests for
 * different users proceed in parallel.
 *
 * Transcripts live for the process lifetime only; there is no
 * persistence across restarts.
 */

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

/// Default maximum transcript length in characters
pub const DEFAULT_MAX_CHARS: usize = 1000;

/// Default suffix length kept after truncation
pub const DEFAULT_KEEP_CHARS: usize = 800;

/// Shared mapping from `user_id` to its transcript
#[derive(Clone)]
pub struct ConversationStore {
    contexts: Arc<RwLock<HashMap<String, Arc<Mutex<String>>>>>,
    max_chars: usize,
    keep_chars: usize,
}

impl ConversationStore {
    /// Create a store with the given truncation thresholds
    pub fn new(max_chars: usize, keep_chars: usize) -> Self {
        Self {
            contexts: Arc::new(RwLock::new(HashMap::new())),
            max_chars,
            keep_chars,
        }
    }

    /// Get the transcript handle for a user, creating it lazily
    pub async fn entry(&self, user_id: &str) -> Arc<Mutex<String>> {
        {
            let contexts = self.contexts.read().await;
            if let Some(entry) = contexts.get(user_id) {
                return entry.clone();
            }
        }

        let mut contexts = self.contexts.write().await;
        contexts
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(String::new())))
            .clone()
    }

    /// Number of users with a transcript
    pub async fn active_users(&self) -> usize {
        self.contexts.read().await.len()
    }

    /// Append an exchange to a transcript and truncate to the cap
    ///
    /// The caller must already hold the per-user lock.
    pub fn append_exchange(&self, transcript: &mut String, message: &str, reply: &str) {
        transcript.push_str("Usuario: ");
        transcript.push_str(message);
        transcript.push_str("\nAsistente: ");
        transcript.push_str(reply);
        transcript.push('\n');

        let len = transcript.chars().count();
        if len > self.max_chars {
            // Keep the most recent suffix, never the oldest content
            let skip = len - self.keep_chars;
            *transcript = transcript.chars().skip(skip).collect();
        }
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHARS, DEFAULT_KEEP_CHARS)
    }
}
