//! Model value object representing a gateway model identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// LLM models addressable through the gateway (Value Object)
///
/// Identifiers use the gateway's `vendor/model` naming. Anything not listed
/// is carried as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // OpenAI models
    Gpt4o,
    Gpt4oMini,
    // Anthropic models
    Claude35Sonnet,
    Claude37Sonnet,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4o => "openai/gpt-4o",
            Model::Gpt4oMini => "openai/gpt-4o-mini",
            Model::Claude35Sonnet => "anthropic/claude-3.5-sonnet",
            Model::Claude37Sonnet => "anthropic/claude-3.7-sonnet",
            Model::Custom(s) => s,
        }
    }

    /// Model used to decide whether a request needs images
    pub fn default_classifier() -> Model {
        Model::Gpt4o
    }

    /// Model used to generate page changes
    pub fn default_generator() -> Model {
        Model::Claude35Sonnet
    }
}

impl Default for Model {
    /// Returns the default generation model
    fn default() -> Self {
        Model::default_generator()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from(s))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s {
            "openai/gpt-4o" => Model::Gpt4o,
            "openai/gpt-4o-mini" => Model::Gpt4oMini,
            "anthropic/claude-3.5-sonnet" => Model::Claude35Sonnet,
            "anthropic/claude-3.7-sonnet" => Model::Claude37Sonnet,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
