//! Wire shapes for the hosted agent endpoint.
//!
//! The transport itself (HTTPS, retries, timeouts) belongs to the calling
//! application. This module only knows the shapes that cross the wire: the
//! request body the endpoint expects, the response envelope whose `response`
//! field carries the raw model text, and the id conventions the client uses.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Failures decoding the endpoint's response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The HTTP body was not the JSON envelope the endpoint documents.
    #[error("malformed agent envelope: {0}")]
    MalformedEnvelope(String),

    /// The envelope parsed but carries no string `response` field.
    #[error("agent envelope has no string `response` field")]
    MissingResponse,
}

/// API key for the `x-api-key` header.
///
/// Wrapped in [`SecretString`] so the key never lands in `Debug` output or
/// logs; call [`ApiKey::expose`] only at the point the header is built.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// The key material, for building the request header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Request body for the inference chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub user_id: String,
    pub agent_id: String,
    pub session_id: String,
    pub message: String,
}

impl AgentRequest {
    /// Build a request with freshly generated user and session ids.
    pub fn new(agent_id: impl Into<String>, message: impl Into<String>) -> Self {
        let agent_id = agent_id.into();
        Self {
            user_id: fresh_user_id(),
            session_id: fresh_session_id(&agent_id),
            agent_id,
            message: message.into(),
        }
    }

    /// Override the generated user id, e.g. to pin a stable identity.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Override the generated session id, e.g. to continue a conversation.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }
}

/// One-off pseudonymous user id in the endpoint's `user<id>@test.com` form.
pub fn fresh_user_id() -> String {
    format!("user{}@test.com", Uuid::new_v4().simple())
}

/// Session id scoped to one agent, in the `<agent_id>-<id>` form.
pub fn fresh_session_id(agent_id: &str) -> String {
    format!("{agent_id}-{}", Uuid::new_v4().simple())
}

/// Response envelope returned by the endpoint.
///
/// `response` is the raw model text that feeds the extractor. Anything else
/// the endpoint includes is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEnvelope {
    pub response: String,
}

/// Decode the endpoint's JSON envelope and pull out the raw model text.
pub fn response_text(body: &str) -> Result<String, EnvelopeError> {
    let value: Value = serde_json::from_str(body).map_err(|err| {
        tracing::debug!(error = %err, "agent envelope failed to parse");
        EnvelopeError::MalformedEnvelope(err.to_string())
    })?;
    match value.get("response").and_then(Value::as_str) {
        Some(text) => Ok(text.to_string()),
        None => Err(EnvelopeError::MissingResponse),
    }
}
