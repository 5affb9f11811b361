use crate::error::SuggestError;
use serde::{Deserialize, Serialize};

/// Which [`Backend`](crate::Backend) answers correction queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    BkTree,
    #[default]
    Automaton,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestConfig {
    pub strategy: Strategy,
    /// Maximum number of suggestions or completions returned per word.
    pub limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            strategy: Strategy::default(),
            limit: 3,
        }
    }
}

impl SuggestConfig {
    pub fn new(strategy: Strategy, limit: usize) -> Result<Self, SuggestError> {
        let config = SuggestConfig { strategy, limit };
        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SuggestError> {
        let config: SuggestConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SuggestError> {
        if self.limit == 0 {
            return Err(SuggestError::InvalidLimit(self.limit));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SuggestConfig::default();
        assert_eq!(config.strategy, Strategy::Automaton);
        assert_eq!(config.limit, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = SuggestConfig::from_json(r#"{"strategy": "bk_tree", "limit": 5}"#).unwrap();
        assert_eq!(config, SuggestConfig::new(Strategy::BkTree, 5).unwrap());

        let config = SuggestConfig::from_json(r#"{"limit": 1}"#).unwrap();
        assert_eq!(config.strategy, Strategy::Automaton);

        let config = SuggestConfig::from_json("{}").unwrap();
        assert_eq!(config, SuggestConfig::default());
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(matches!(
            SuggestConfig::from_json(r#"{"limit": 0}"#),
            Err(SuggestError::InvalidLimit(0))
        ));
        assert!(matches!(
            SuggestConfig::new(Strategy::BkTree, 0),
            Err(SuggestError::InvalidLimit(0))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SuggestConfig::from_json(r#"{"strategy": "phonetic"}"#),
            Err(SuggestError::Config(_))
        ));
        assert!(matches!(
            SuggestConfig::from_json(r#"{"limit": -1}"#),
            Err(SuggestError::Config(_))
        ));
    }
}
