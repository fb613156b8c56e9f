//! Prompt dispatcher.
//!
//! Builds the prompt for a content kind and performs exactly one call to the
//! generative-text provider. No retries, no caching. Every failure comes back
//! as a [`DispatchError`], which callers treat as "unavailable".

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::{AiConfig, Provider};
use crate::error::DispatchError;
use crate::prompts::{build_prompt, ContentKind, PromptParams};

/// A single-shot text generator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, DispatchError>;

    /// Whether a call could possibly succeed (credential present).
    fn is_configured(&self) -> bool {
        true
    }
}

// ============================================================================
// HTTP generator
// ============================================================================

pub struct HttpGenerator {
    provider: Provider,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout_secs: u64,
    max_tokens: u32,
    temperature: f32,
    client: reqwest::Client,
}

impl HttpGenerator {
    pub fn new(config: &AiConfig) -> Result<Self> {
        let timeout_secs = config.effective_timeout();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            provider: config.provider,
            endpoint: config.resolved_endpoint(),
            model: config.resolved_model(),
            api_key: config.api_key(),
            timeout_secs,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client,
        })
    }

    fn request_body(&self, prompt: &str) -> Value {
        match self.provider {
            Provider::Gemini => json!({
                "contents": [{"parts": [{"text": prompt}]}],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens,
                },
            }),
            Provider::OpenAi => json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens,
            }),
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> DispatchError {
        if e.is_timeout() {
            DispatchError::Timeout(self.timeout_secs)
        } else {
            DispatchError::Http(format!("Request failed: {}", e))
        }
    }
}

#[async_trait]
impl TextGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DispatchError> {
        let api_key = self.api_key.as_deref().ok_or(DispatchError::MissingCredential)?;

        let mut request = self.client.post(&self.endpoint).json(&self.request_body(prompt));
        request = match self.provider {
            Provider::Gemini => request.header("X-goog-api-key", api_key),
            Provider::OpenAi => request.bearer_auth(api_key),
        };

        debug!("Dispatching {} byte prompt to {}", prompt.len(), self.endpoint);
        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Status(status.as_u16()));
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| DispatchError::Envelope(format!("Failed to parse response: {}", e)))?;

        extract_text(self.provider, &envelope)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Pulls the generated text out of a provider envelope.
pub fn extract_text(provider: Provider, envelope: &Value) -> Result<String, DispatchError> {
    let text = match provider {
        Provider::Gemini => envelope
            .get("candidates")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.get("parts"))
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("text")),
        Provider::OpenAi => envelope
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("message"))
            .and_then(|v| v.get("content")),
    }
    .ok_or_else(|| DispatchError::Envelope("reply text not found".to_string()))?
    .as_str()
    .ok_or_else(|| DispatchError::Envelope("reply text is not a string".to_string()))?;

    if text.trim().is_empty() {
        return Err(DispatchError::EmptyResponse);
    }
    Ok(text.to_string())
}

// ============================================================================
// Fake generator
// ============================================================================

/// Scripted generator for tests.
///
/// Replies are consumed in order; a single remaining reply repeats forever.
pub struct FakeGenerator {
    replies: Mutex<Vec<Result<String, DispatchError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn new(replies: Vec<Result<String, DispatchError>>) -> Self {
        Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: impl Into<String>) -> Self {
        Self::new(vec![Ok(reply.into())])
    }

    pub fn always_error(error: DispatchError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Behaves like an HTTP generator with no credential.
    pub fn unconfigured() -> Self {
        Self::always_error(DispatchError::MissingCredential)
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DispatchError> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());

        let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        match replies.len() {
            0 => Err(DispatchError::EmptyResponse),
            1 => replies[0].clone(),
            _ => replies.remove(0),
        }
    }

    fn is_configured(&self) -> bool {
        let replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        !matches!(replies.first(), Some(Err(DispatchError::MissingCredential)))
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

#[derive(Clone)]
pub struct Dispatcher {
    generator: Arc<dyn TextGenerator>,
}

impl Dispatcher {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_configured()
    }

    /// Builds the prompt and performs the single provider call.
    pub async fn dispatch(
        &self,
        kind: ContentKind,
        params: &PromptParams,
    ) -> Result<String, DispatchError> {
        let prompt = build_prompt(kind, params)?;
        debug!("Dispatching {} prompt", kind.as_str());
        self.generator.generate(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_gemini_text() {
        let envelope = json!({"candidates": [{"content": {"parts": [{"text": "{\"a\": 1}"}]}}]});
        assert_eq!(extract_text(Provider::Gemini, &envelope).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_openai_text() {
        let envelope = json!({"choices": [{"message": {"content": "hello"}}]});
        assert_eq!(extract_text(Provider::OpenAi, &envelope).unwrap(), "hello");
    }

    #[test]
    fn test_extract_errors() {
        let empty = json!({"choices": [{"message": {"content": "  "}}]});
        assert_eq!(
            extract_text(Provider::OpenAi, &empty),
            Err(DispatchError::EmptyResponse)
        );
        assert!(matches!(
            extract_text(Provider::Gemini, &json!({"error": "quota"})),
            Err(DispatchError::Envelope(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let config = AiConfig {
            api_key: None,
            api_key_env: "ASTRO_TEST_UNSET_VARIABLE".to_string(),
            // Unroutable; must never be contacted
            endpoint: Some("http://192.0.2.1:9".to_string()),
            ..Default::default()
        };
        let generator = HttpGenerator::new(&config).unwrap();
        assert!(!generator.is_configured());
        assert_eq!(
            generator.generate("prompt").await,
            Err(DispatchError::MissingCredential)
        );
    }

    #[tokio::test]
    async fn test_fake_generator_sequence() {
        let fake = FakeGenerator::new(vec![
            Ok("one".to_string()),
            Err(DispatchError::Timeout(15)),
            Ok("last".to_string()),
        ]);
        assert_eq!(fake.generate("a").await.unwrap(), "one");
        assert_eq!(fake.generate("b").await, Err(DispatchError::Timeout(15)));
        assert_eq!(fake.generate("c").await.unwrap(), "last");
        assert_eq!(fake.generate("d").await.unwrap(), "last");
        assert_eq!(fake.call_count(), 4);
        assert_eq!(fake.last_prompt().as_deref(), Some("d"));
    }

    #[tokio::test]
    async fn test_dispatch_rejects_missing_params() {
        let fake = Arc::new(FakeGenerator::always("{}"));
        let dispatcher = Dispatcher::new(fake.clone());
        let result = dispatcher
            .dispatch(ContentKind::Matchmaking, &PromptParams::new().with("sign1", "Aries"))
            .await;
        assert_eq!(result, Err(DispatchError::MissingParam("sign2")));
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_sends_built_prompt() {
        let fake = Arc::new(FakeGenerator::always("{}"));
        let dispatcher = Dispatcher::new(fake.clone());
        let params = PromptParams::new().with("sign1", "Aries").with("sign2", "Leo");
        assert_eq!(dispatcher.dispatch(ContentKind::Matchmaking, &params).await.unwrap(), "{}");
        let prompt = fake.last_prompt().unwrap();
        assert!(prompt.contains("Aries"));
        assert!(prompt.ends_with("Return ONLY the JSON object, no additional text."));
    }
}
