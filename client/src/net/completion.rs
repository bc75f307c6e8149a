//! Transport for the chat-completion endpoint.
//!
//! DESIGN
//! ======
//! The single suspend point of the app: one POST with bearer auth, raced
//! against a fixed deadline because the upstream service sets none of its
//! own. Request assembly and response classification are delegated to the
//! `assistant` crate; this module only moves bytes. The credential check
//! happens before any network traffic so an unconfigured deployment never
//! dials out.

#![allow(clippy::unused_async)]

use assistant::{AssistantError, ChatMessage, CompletionConfig};

/// Abort a completion request that outlives this window, surfaced as a
/// transport failure.
pub const COMPLETION_TIMEOUT_MS: u32 = 30_000;

/// Request one completion for the given surface prompt, context block, and
/// ordered turn list (rolling history plus the new user turn).
///
/// # Errors
///
/// Returns [`AssistantError::NotConfigured`] synchronously when no
/// credential is configured, [`AssistantError::Transport`] on network,
/// status, timeout, or body-shape failures, and
/// [`AssistantError::EmptyResponse`] when the service returns no usable
/// choice.
pub async fn request_completion(
    config: Option<&CompletionConfig>,
    system_prompt: &str,
    context_block: &str,
    turns: &[ChatMessage],
) -> Result<String, AssistantError> {
    let config = assistant::require_config(config)?;
    #[cfg(feature = "hydrate")]
    {
        let request = assistant::build_request(config, system_prompt, context_block, turns);
        send(config, &request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, system_prompt, context_block, turns);
        Err(AssistantError::Transport { status: 0, message: "not available on server".to_owned() })
    }
}

#[cfg(feature = "hydrate")]
async fn send(
    config: &CompletionConfig,
    request: &assistant::types::CompletionRequest,
) -> Result<String, AssistantError> {
    use futures::future::{Either, select};
    use std::pin::pin;

    let transport_error = |message: String| AssistantError::Transport { status: 0, message };

    let http = gloo_net::http::Request::post(&config.endpoint())
        .header("Authorization", &format!("Bearer {}", config.api_key))
        .json(request)
        .map_err(|e| transport_error(e.to_string()))?;

    let request_future = pin!(http.send());
    let deadline = pin!(gloo_timers::future::TimeoutFuture::new(COMPLETION_TIMEOUT_MS));
    let response = match select(request_future, deadline).await {
        Either::Left((result, _)) => result.map_err(|e| transport_error(e.to_string()))?,
        Either::Right(((), _)) => {
            log::warn!("completion request timed out after {COMPLETION_TIMEOUT_MS}ms");
            return Err(transport_error("request timed out".to_owned()));
        }
    };

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AssistantError::Transport { status, message: e.to_string() })?;
    let result = assistant::parse_completion(status, &body);
    if let Err(e) = &result {
        log::warn!("completion request failed: {e}");
    }
    result
}
