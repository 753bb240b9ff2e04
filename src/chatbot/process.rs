/**
 * Ollama Process Supervision
 *
 * Restart support for the locally hosted Ollama server: stop any running
 * instance, relaunch it detached and wait for warm-up. Supervision is
 * optional; when no start command is configured, restart reports failure
 * and the gateway falls back to its transient-error handling. Tests run
 * with supervision disabled.
 */

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

/// Supervisor for the local Ollama process
#[derive(Debug, Clone)]
pub struct OllamaSupervisor {
    stop_command: Option<Vec<String>>,
    start_command: Option<Vec<String>>,
    /// Pause after stopping, before the relaunch
    settle: Duration,
    /// Warm-up wait after the relaunch
    warmup: Duration,
}

impl OllamaSupervisor {
    /// Supervisor for a locally installed Ollama
    ///
    /// Stops via `pkill -f ollama` and relaunches with `ollama serve`.
    pub fn local() -> Self {
        Self {
            stop_command: Some(vec!["pkill".into(), "-f".into(), "ollama".into()]),
            start_command: Some(vec!["ollama".into(), "serve".into()]),
            settle: Duration::from_secs(2),
            warmup: Duration::from_secs(5),
        }
    }

    /// Supervisor that never restarts anything
    pub fn disabled() -> Self {
        Self {
            stop_command: None,
            start_command: None,
            settle: Duration::ZERO,
            warmup: Duration::ZERO,
        }
    }

    /// Whether a restart can be attempted at all
    pub fn is_enabled(&self) -> bool {
        self.start_command.is_some()
    }

    /// Stop any running instance, relaunch it and wait for warm-up
    ///
    /// Returns true when the relaunch was spawned successfully. A failed
    /// or disabled restart returns false; the caller decides how to
    /// degrade.
    pub async fn restart(&self) -> bool {
        let Some(start) = self.start_command.as_deref() else {
            tracing::warn!("Ollama restart requested but supervision is disabled");
            return false;
        };

        tracing::info!("Restarting Ollama...");

        if let Some(stop) = self.stop_command.as_deref() {
            // A failed stop is not fatal; the process may simply not be running
            match Command::new(&stop[0]).args(&stop[1..]).status().await {
                Ok(status) => {
                    tracing::debug!("Ollama stop command exited with {}", status);
                }
                Err(e) => {
                    tracing::warn!("Ollama stop command failed: {}", e);
                }
            }
            tokio::time::sleep(self.settle).await;
        }

        // Relaunch detached, discarding its output
        let spawned = Command::new(&start[0])
            .args(&start[1..])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(_child) => {
                tokio::time::sleep(self.warmup).await;
                tracing::info!("Ollama restarted");
                true
            }
            Err(e) => {
                tracing::error!("Failed to relaunch Ollama: {}", e);
                false
            }
        }
    }
}
