//! Dashboard actions that start work outside the server process.

use bach_core::responses::ActionResult;
use reqwest::Method;
use serde::Serialize;

use crate::{BachClient, ClientError};

/// Partner used when none is given for a headless session.
pub const DEFAULT_PARTNER: &str = "claude";

#[derive(Debug, Serialize)]
struct HeadlessRun<'a> {
    prompt: &'a str,
    partner: &'a str,
}

impl BachClient {
    /// Hand a prompt to a headless AI session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Application`] when the server reports `success: false`.
    pub async fn run_headless(&self, prompt: &str, partner: &str) -> Result<ActionResult, ClientError> {
        self.send_json(
            Method::POST,
            "/api/ai/headless/run",
            Some(&HeadlessRun { prompt, partner }),
        )
        .await
    }

    /// Launch the desktop prompt manager on the server host.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Application`] when the launch fails.
    pub async fn start_prompt_manager(&self) -> Result<ActionResult, ClientError> {
        self.send_json::<(), _>(Method::POST, "/api/prompt-generator/start-desktop", None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_body_shape() {
        let body = serde_json::to_value(HeadlessRun {
            prompt: "summarize inbox",
            partner: DEFAULT_PARTNER,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"prompt": "summarize inbox", "partner": "claude"}));
    }

    #[test]
    fn start_desktop_message_parses() {
        let result: ActionResult =
            serde_json::from_str(r#"{"success": true, "message": "Prompt-Manager gestartet"}"#).unwrap();
        assert_eq!(result.message.as_deref(), Some("Prompt-Manager gestartet"));
    }
}
