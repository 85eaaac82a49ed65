use crate::AppState;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use bytes::Bytes;
use fiire_core::error::ProxyError;
use serde_json::{Value, json};

const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
const DEFAULT_MAX_TOKENS: u64 = 1024;

/// Chat proxy endpoint (POST /api/chat): validate the inbound body, reshape
/// it for the upstream messages API, forward, and relay the reply.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ProxyError> {
    let inbound: Value = serde_json::from_slice(&body)?;

    let api_key = inbound
        .get("apiKey")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if api_key.is_empty() {
        return Err(ProxyError::MissingApiKey);
    }

    let payload = build_upstream_payload(&inbound);
    let reply = state.upstream.forward(api_key, &payload).await?;

    // Any 2xx upstream reply relays as 200, whatever the exact code.
    let reply: Value = serde_json::from_slice(&reply)?;
    Ok(Json(reply))
}

/// Reshape the inbound body into the upstream request: exactly `model`,
/// `max_tokens`, `system`, `messages`, with defaults substituted for absent
/// fields. Present fields pass through verbatim, including explicit nulls.
/// `apiKey` never reaches the body; it travels as a header.
fn build_upstream_payload(inbound: &Value) -> Value {
    json!({
        "model": inbound
            .get("model")
            .cloned()
            .unwrap_or_else(|| json!(DEFAULT_MODEL)),
        "max_tokens": inbound
            .get("max_tokens")
            .cloned()
            .unwrap_or_else(|| json!(DEFAULT_MAX_TOKENS)),
        "system": inbound.get("system").cloned().unwrap_or_else(|| json!("")),
        "messages": inbound
            .get("messages")
            .cloned()
            .unwrap_or_else(|| json!([])),
    })
}
