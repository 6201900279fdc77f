//! Command envelope handler.

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::dispatcher::{Command, Reply};
use crate::error::ApiResult;
use crate::middleware::RequestId;
use crate::state::AppState;

/// A command as sent by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandEnvelope {
    /// Echoed back in the reply; defaults to the request ID.
    #[serde(default)]
    pub correlation_id: Option<String>,
    pub command: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

/// Dispatch one command and return its reply.
pub async fn dispatch_command(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    Json(envelope): Json<CommandEnvelope>,
) -> ApiResult<Json<Reply>> {
    let command = Command::parse(&envelope.command, envelope.args)?;

    let correlation_id = envelope
        .correlation_id
        .or_else(|| request_id.map(|Extension(RequestId(id))| id))
        .unwrap_or_default();

    Ok(Json(state.dispatcher.dispatch(correlation_id, command).await))
}
