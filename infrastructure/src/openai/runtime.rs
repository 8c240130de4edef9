//! Chat-completion agent runtime
//!
//! Implements [`AgentRuntime`] against any OpenAI-compatible
//! `/v1/chat/completions` endpoint. Each exchange is a single round trip:
//! the persona's instructions, the transcript and the persona's actions go
//! out, and whichever actions the model calls are invoked locally.

use super::protocol::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseMessage, ToolDefinition,
};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use reqwest::Client;
use symposium_application::{AgentRuntime, Exchange, ExchangeRequest, RuntimeError};
use symposium_domain::{ContextUpdate, DebateContext, Message, Persona};
use tracing::debug;

/// [`AgentRuntime`] backed by an OpenAI-compatible HTTP API
#[derive(Debug, Clone)]
pub struct OpenAiAgentRuntime {
    client: Client,
    base_url: String,
    api_key: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl OpenAiAgentRuntime {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    /// Build a runtime from the `[provider]` section, reading the API key
    /// from the configured environment variable.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, RuntimeError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| RuntimeError::MissingCredential(config.api_key_env.clone()))?;

        let mut runtime = Self::new(&config.base_url, api_key);
        runtime.max_tokens = config.max_tokens;
        runtime.temperature = config.temperature;
        Ok(runtime)
    }

    fn api_url(&self) -> String {
        if self.base_url.ends_with("/chat/completions") {
            self.base_url.clone()
        } else if self.base_url.ends_with("/v1") {
            format!("{}/chat/completions", self.base_url)
        } else {
            format!("{}/v1/chat/completions", self.base_url)
        }
    }

    fn build_request(&self, request: &ExchangeRequest<'_>) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(ChatMessage::system(
            request.persona.instructions(request.context),
        ));
        messages.extend(
            request
                .messages
                .iter()
                .filter(|m| m.has_content())
                .map(ChatMessage::from),
        );

        ChatCompletionRequest {
            model: request.model().to_string(),
            messages,
            tools: request
                .persona
                .actions()
                .iter()
                .copied()
                .map(ToolDefinition::from)
                .collect(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    async fn complete(
        &self,
        body: &ChatCompletionRequest,
    ) -> Result<ResponseMessage, RuntimeError> {
        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    RuntimeError::ConnectionError(e.to_string())
                } else {
                    RuntimeError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RuntimeError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| RuntimeError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| RuntimeError::InvalidResponse("response has no choices".to_string()))
    }
}

/// Invoke the actions the model called and fold them into one exchange.
///
/// The last handoff wins; context proposals merge in call order.
fn resolve(
    persona: &Persona,
    context: &DebateContext,
    message: ResponseMessage,
) -> Result<Exchange, RuntimeError> {
    let mut handoff = None;
    let mut update = ContextUpdate::default();

    for call in &message.tool_calls {
        debug!(
            "{} called {}({})",
            persona.name(),
            call.function.name,
            call.function.arguments
        );
        let outcome = persona.invoke_action(&call.function.name, context)?;
        debug!("{} -> {}", call.function.name, outcome.value);
        handoff = outcome.handoff.or(handoff);
        update.merge(&outcome.update);
    }

    Ok(Exchange {
        reply: Message::assistant(persona.name(), message.content.unwrap_or_default()),
        handoff,
        update,
    })
}

#[async_trait]
impl AgentRuntime for OpenAiAgentRuntime {
    async fn run(&self, request: ExchangeRequest<'_>) -> Result<Exchange, RuntimeError> {
        let body = self.build_request(&request);
        debug!(
            "Requesting completion for {} on {} ({} messages)",
            request.persona.name(),
            body.model,
            body.messages.len()
        );

        let message = self.complete(&body).await?;
        resolve(request.persona, request.context, message)
    }
}
