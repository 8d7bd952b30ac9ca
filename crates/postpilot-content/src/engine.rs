//! Core content generation orchestration

use crate::config::EngineConfig;
use crate::error::ContentError;
use crate::parser::{parse_ideas, parse_post};
use crate::prompt::{IdeasPrompt, PostPrompt};
use postpilot_domain::traits::TextGenerator;
use postpilot_domain::GenerationRequest;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// The ContentEngine turns generation requests into ideas and posts.
///
/// Holds the generation provider behind `Arc<dyn TextGenerator>`; the
/// provider is the only shared state and it is read-only, so concurrent
/// calls are independent. The whole provider interaction (including its
/// internal retry) runs under the configured timeout.
pub struct ContentEngine {
    generator: Arc<dyn TextGenerator>,
    config: EngineConfig,
}

impl ContentEngine {
    /// Create a new engine around a generation provider
    pub fn new(generator: Arc<dyn TextGenerator>, config: EngineConfig) -> Self {
        Self { generator, config }
    }

    /// Generate a list of post ideas.
    ///
    /// Validates the request, renders the ideas prompt, calls the provider
    /// under the configured timeout, and splits the result on the
    /// numbered-list convention. The list is capped at
    /// `config.max_idea_count`.
    pub async fn generate_ideas(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<String>, ContentError> {
        request.validate()?;
        if !request.preferences.ai_generation_enabled {
            return Err(ContentError::Disabled);
        }

        let prompt = IdeasPrompt::new(
            &request.user_profile,
            &request.preferences,
            request.count,
            &request.trending_topics,
        )
        .build();

        debug!(prompt_len = prompt.len(), count = request.count, "built ideas prompt");

        let raw = self.call_generator(&prompt).await?;

        let mut ideas = parse_ideas(&raw);
        ideas.truncate(self.config.max_idea_count);

        info!(ideas = ideas.len(), "idea generation complete");

        Ok(ideas)
    }

    /// Expand one idea into a full post.
    ///
    /// The request must carry an idea; the generated text is passed
    /// through unsegmented.
    pub async fn generate_post(&self, request: &GenerationRequest) -> Result<String, ContentError> {
        request.validate()?;
        if !request.preferences.ai_generation_enabled {
            return Err(ContentError::Disabled);
        }

        let idea = request.require_idea()?;

        let prompt = PostPrompt::new(
            idea,
            &request.user_profile,
            &request.preferences,
            request.content_type,
            request.content_length,
        )
        .build();

        debug!(
            prompt_len = prompt.len(),
            content_type = request.content_type.as_str(),
            "built post prompt"
        );

        let raw = self.call_generator(&prompt).await?;

        info!(post_len = raw.len(), "post generation complete");

        Ok(parse_post(&raw))
    }

    /// Call the provider under the caller-side timeout
    async fn call_generator(&self, prompt: &str) -> Result<String, ContentError> {
        let raw = timeout(
            self.config.generation_timeout(),
            self.generator.generate(prompt),
        )
        .await
        .map_err(|_| ContentError::Timeout)??;

        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postpilot_domain::error::GenerationError;
    use postpilot_domain::{ContentLength, ContentType, UserPreferences, UserProfile};
    use postpilot_llm::MockProvider;

    fn engine_with(provider: MockProvider) -> ContentEngine {
        ContentEngine::new(Arc::new(provider), EngineConfig::default())
    }

    fn ideas_request(count: u32, trending: Vec<String>) -> GenerationRequest {
        GenerationRequest::for_ideas(
            UserProfile::default(),
            UserPreferences::default(),
            count,
            trending,
        )
    }

    #[tokio::test]
    async fn test_generate_ideas_parses_numbered_list() {
        let provider = MockProvider::new("Here you go: 1. Ship a postmortem 2. Run a poll");
        let engine = engine_with(provider);

        let ideas = engine.generate_ideas(&ideas_request(2, vec![])).await.unwrap();
        assert_eq!(ideas, vec!["Ship a postmortem", "Run a poll"]);
    }

    #[tokio::test]
    async fn test_generate_ideas_caps_output() {
        let raw = (1..=20)
            .map(|i| format!("{}. idea-{}", i, i))
            .collect::<Vec<_>>()
            .join(" ");
        let provider = MockProvider::new(raw);
        let engine = ContentEngine::new(
            Arc::new(provider),
            EngineConfig {
                max_idea_count: 5,
                ..EngineConfig::default()
            },
        );

        let ideas = engine.generate_ideas(&ideas_request(20, vec![])).await.unwrap();
        assert_eq!(ideas.len(), 5);
    }

    #[tokio::test]
    async fn test_generate_ideas_rejects_zero_count() {
        let engine = engine_with(MockProvider::default());

        let result = engine.generate_ideas(&ideas_request(0, vec![])).await;
        assert!(matches!(result, Err(ContentError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_ideas_respects_disabled_preference() {
        let provider = MockProvider::default();
        let engine = ContentEngine::new(Arc::new(provider.clone()), EngineConfig::default());

        let mut request = ideas_request(3, vec![]);
        request.preferences.ai_generation_enabled = false;

        let result = engine.generate_ideas(&request).await;
        assert!(matches!(result, Err(ContentError::Disabled)));
        // Provider never called
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_post_requires_idea() {
        let engine = engine_with(MockProvider::default());

        let request = ideas_request(3, vec![]);
        let result = engine.generate_post(&request).await;
        assert!(matches!(result, Err(ContentError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_post_passes_text_through() {
        let post_text = "Hook line.\n\nBody paragraph.\n\n#tag1 #tag2";
        let engine = engine_with(MockProvider::new(post_text));

        let request = GenerationRequest::for_post(
            "Why code review matters",
            UserProfile::default(),
            UserPreferences::default(),
            ContentType::Text,
            ContentLength::Medium,
        );

        let post = engine.generate_post(&request).await.unwrap();
        assert_eq!(post, post_text);
    }

    #[tokio::test]
    async fn test_generation_error_propagates_with_message() {
        let provider = MockProvider::default();
        provider.push_error(GenerationError::Exhausted("HTTP 503: overloaded".to_string()));
        let engine = engine_with(provider);

        let result = engine.generate_ideas(&ideas_request(3, vec![])).await;
        match result {
            Err(ContentError::Generation(err)) => {
                assert!(err.to_string().contains("HTTP 503: overloaded"));
            }
            other => panic!("Expected Generation error, got {:?}", other.map(|_| ())),
        }
    }
}
