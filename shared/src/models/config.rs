use serde::{Deserialize, Serialize};

/// User preferences shown in the settings drawer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub api_key: String,
    /// Display scale factor, one decimal digit of precision (0.8 ..= 1.2).
    pub fontsize: f32,
    pub save_session: bool,
    /// Enables slash commands in the composer.
    pub pre_prompt: bool,
}

impl Config {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            fontsize: 1.0,
            save_session: true,
            pre_prompt: false,
        }
    }
}

/// Per-session tuning sent along with every completion request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestParams {
    pub model: String,
    /// Sampling temperature, 0.0 ..= 2.0.
    pub temperature: f32,
    pub max_tokens: u16,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 1.0,
            max_tokens: 2048,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_uses_camel_case_keys() {
        let config = Config {
            api_key: "sk-test".to_string(),
            fontsize: 1.1,
            save_session: false,
            pre_prompt: true,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["apiKey"], "sk-test");
        assert_eq!(json["saveSession"], false);
        assert_eq!(json["prePrompt"], true);
        assert!(json.get("fontsize").is_some());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"apiKey":"sk-abc"}"#).unwrap();
        assert_eq!(config.api_key, "sk-abc");
        assert_eq!(config.fontsize, 1.0);
        assert!(config.save_session);
        assert!(!config.pre_prompt);
    }

    #[test]
    fn test_has_api_key() {
        let mut config = Config::default();
        assert!(!config.has_api_key());
        config.api_key = "sk-abc123xyz789".to_string();
        assert!(config.has_api_key());
    }

    #[test]
    fn test_request_params_partial_load() {
        let params: RequestParams = serde_json::from_str(r#"{"temperature":0.3}"#).unwrap();
        assert_eq!(params.temperature, 0.3);
        assert_eq!(params.max_tokens, 2048);
    }
}
