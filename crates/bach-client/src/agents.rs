//! Agent registry endpoints under `/api/agents`.

use bach_core::entities::{Agent, AgentDraft};
use bach_core::responses::{ActionResult, AgentList, Created, Toggled};
use reqwest::Method;
use serde::Deserialize;

use crate::{BachClient, ClientError};

#[derive(Deserialize)]
struct AgentEnvelope {
    agent: Agent,
}

impl BachClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn list_agents(&self) -> Result<AgentList, ClientError> {
        self.get_json("/api/agents").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 when the agent does not exist.
    pub async fn get_agent(&self, id: i64) -> Result<Agent, ClientError> {
        let envelope: AgentEnvelope = self.get_json(&format!("/api/agents/{id}")).await?;
        Ok(envelope.agent)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the server rejects the agent.
    pub async fn create_agent(&self, draft: &AgentDraft) -> Result<Created, ClientError> {
        self.send_json(Method::POST, "/api/agents", Some(draft)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the server rejects the update.
    pub async fn update_agent(&self, id: i64, draft: &AgentDraft) -> Result<ActionResult, ClientError> {
        self.send_json(Method::PUT, &format!("/api/agents/{id}"), Some(draft))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the server rejects the deletion.
    pub async fn delete_agent(&self, id: i64) -> Result<ActionResult, ClientError> {
        self.send_json::<(), _>(Method::DELETE, &format!("/api/agents/{id}"), None)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the agent does not exist.
    pub async fn toggle_agent(&self, id: i64) -> Result<Toggled, ClientError> {
        self.send_json::<(), _>(Method::PUT, &format!("/api/agents/{id}/toggle"), None)
            .await
    }
}
