//! Quiz limits.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default cap on "How many times to ask?".
const fn default_max_questions() -> u32 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizConfig {
    /// Largest question count accepted in one `ask`.
    #[serde(default = "default_max_questions")]
    pub max_questions: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
        }
    }
}

impl QuizConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `max_questions` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_questions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quiz.max_questions".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = QuizConfig::default();
        assert_eq!(config.max_questions, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_is_rejected() {
        let config = QuizConfig { max_questions: 0 };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "quiz.max_questions"
        ));
    }
}
