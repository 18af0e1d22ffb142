//! Scheduling modal and contact form configuration.

use serde::{Deserialize, Serialize};

/// Scheduling modal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// URL loaded into the modal's frame the first time it opens.
    pub embed_url: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            embed_url: "https://scheduling.example.com/embed".into(),
        }
    }
}

/// Contact form submission settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Business type selected on load and after a successful submit.
    pub default_business_type: String,
    /// Used when the form element carries no `action`.
    pub endpoint: Option<String>,
    /// Submit control label while a request is in flight.
    pub busy_label: String,
    /// Blocking notice shown when a submission fails.
    pub error_message: String,
    /// Whole-request timeout in seconds (valid range: 1-300).
    pub timeout_secs: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_business_type: "dental".into(),
            endpoint: None,
            busy_label: "Sending...".into(),
            error_message:
                "Sorry, something went wrong sending your message. Please try again.".into(),
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults() {
        let config = FormConfig::default();
        assert_eq!(config.default_business_type, "dental");
        assert!(config.endpoint.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn endpoint_from_toml() {
        let config: FormConfig =
            toml::from_str(r#"endpoint = "https://forms.example.com/f/abc""#).unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://forms.example.com/f/abc")
        );
        assert_eq!(config.busy_label, "Sending...");
    }
}
