use serde::{Deserialize, Serialize};

/// Token counts reported by the model backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the prompt
    #[serde(alias = "input_tokens")]
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    #[serde(alias = "output_tokens")]
    pub completion_tokens: u32,
    /// Total number of tokens used
    pub total_tokens: u32,
}

impl Usage {
    /// Adds another response's counts to this one.
    pub fn accumulate(&mut self, other: &Usage) {
        self.prompt_tokens = self.prompt_tokens.saturating_add(other.prompt_tokens);
        self.completion_tokens = self
            .completion_tokens
            .saturating_add(other.completion_tokens);
        self.total_tokens = self.total_tokens.saturating_add(other.total_tokens);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_responses_api_names() {
        let usage: Usage = serde_json::from_str(
            r#"{"input_tokens": 12, "output_tokens": 5, "total_tokens": 17}"#,
        )
        .unwrap();
        assert_eq!(usage.prompt_tokens, 12);
        assert_eq!(usage.completion_tokens, 5);
    }

    #[test]
    fn accumulate_sums_counts() {
        let mut total = Usage::default();
        total.accumulate(&Usage {
            prompt_tokens: 10,
            completion_tokens: 2,
            total_tokens: 12,
        });
        total.accumulate(&Usage {
            prompt_tokens: 20,
            completion_tokens: 3,
            total_tokens: 23,
        });
        assert_eq!(total.total_tokens, 35);
        assert_eq!(total.prompt_tokens, 30);
    }
}
