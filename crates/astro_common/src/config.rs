//! Generator and fallback settings shared by the library and the daemon.

use serde::{Deserialize, Serialize};

/// Timeouts outside this window are clamped.
pub const MIN_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    /// Any OpenAI-compatible chat completions endpoint.
    OpenAi,
}

/// Generative-text provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default)]
    pub provider: Provider,

    /// Overrides the provider's public endpoint
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    /// Inline credential. Prefer `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Environment variable holding the credential
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            endpoint: None,
            model: None,
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl AiConfig {
    pub fn resolved_model(&self) -> String {
        match (&self.model, self.provider) {
            (Some(m), _) if !m.trim().is_empty() => m.clone(),
            (_, Provider::Gemini) => "gemini-2.0-flash".to_string(),
            (_, Provider::OpenAi) => "gpt-3.5-turbo".to_string(),
        }
    }

    pub fn resolved_endpoint(&self) -> String {
        if let Some(e) = self.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
            return e.trim_end_matches('/').to_string();
        }
        match self.provider {
            Provider::Gemini => format!(
                "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
                self.resolved_model()
            ),
            Provider::OpenAi => "https://api.openai.com/v1/chat/completions".to_string(),
        }
    }

    /// Inline key first, then the environment. Blank values count as absent.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    pub fn effective_timeout(&self) -> u64 {
        self.timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
    }
}

/// Fallback generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Fixed RNG seed for reproducible fallbacks
    #[serde(default)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_default() {
        let config = AiConfig::default();
        assert_eq!(config.provider, Provider::Gemini);
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.timeout_secs, 15);
        assert!(config.resolved_endpoint().ends_with("gemini-2.0-flash:generateContent"));
    }

    #[test]
    fn test_timeout_clamped() {
        let mut config = AiConfig::default();
        config.timeout_secs = 3;
        assert_eq!(config.effective_timeout(), 10);
        config.timeout_secs = 90;
        assert_eq!(config.effective_timeout(), 20);
    }

    #[test]
    fn test_partial_toml() {
        let config: AiConfig = toml::from_str("provider = \"openai\"\nmodel = \"local-model\"\nendpoint = \"http://localhost:8080/v1/chat/completions/\"").unwrap();
        assert_eq!(config.provider, Provider::OpenAi);
        assert_eq!(config.resolved_model(), "local-model");
        assert_eq!(config.resolved_endpoint(), "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.max_tokens, 2048);
    }

    #[test]
    fn test_inline_key_wins_and_blank_is_absent() {
        let config = AiConfig {
            api_key: Some("  secret ".to_string()),
            api_key_env: "ASTRO_TEST_UNSET_VARIABLE".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_key().as_deref(), Some("secret"));
        let blank = AiConfig {
            api_key: Some("   ".to_string()),
            api_key_env: "ASTRO_TEST_UNSET_VARIABLE".to_string(),
            ..Default::default()
        };
        assert_eq!(blank.api_key(), None);
    }
}
