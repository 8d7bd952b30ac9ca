//! Prompt templates for the generation provider
//!
//! Pure string builders: deterministic for a given input, never failing.
//! Template wording follows the production prompts the backend sends.

use postpilot_domain::{
    ContentLength, ContentTone, ContentType, UserPreferences, UserProfile,
};

/// Tone-specific style guideline embedded in post prompts.
///
/// Total over the tone set; unrecognized tone strings never reach this
/// function because `ContentTone` is validated at the boundary.
fn tone_guidelines(tone: ContentTone) -> &'static str {
    match tone {
        ContentTone::Professional => "formal, authoritative, industry-specific terminology",
        ContentTone::Conversational => "friendly, approachable, using first-person perspective",
        ContentTone::Educational => "informative, clear explanations, data-backed insights",
        ContentTone::Inspiring => "motivational, story-driven, emotionally resonant",
    }
}

/// Content-type-specific instruction embedded in post prompts.
///
/// Unknown wire values were already folded to `Text` at deserialization,
/// so the text instruction doubles as the fallback.
fn content_type_instructions(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Text => "text-only post with compelling narrative",
        ContentType::Poll => "include 2-4 poll options about a relevant industry topic",
        ContentType::Image => {
            "describe an ideal image to accompany this post and provide caption text"
        }
        ContentType::Video => "suggest a brief video concept and provide script/talking points",
    }
}

/// Word-count band for a target length. Unknown wire values fall back to
/// `Medium` at deserialization, making 200-300 the default band.
fn length_band(length: ContentLength) -> &'static str {
    match length {
        ContentLength::Short => "100-150",
        ContentLength::Medium => "200-300",
        ContentLength::Long => "350-500",
    }
}

/// Builds the prompt asking for a numbered list of post ideas
pub struct IdeasPrompt<'a> {
    profile: &'a UserProfile,
    preferences: &'a UserPreferences,
    count: u32,
    trending_topics: &'a [String],
}

impl<'a> IdeasPrompt<'a> {
    /// Create a new ideas prompt builder
    pub fn new(
        profile: &'a UserProfile,
        preferences: &'a UserPreferences,
        count: u32,
        trending_topics: &'a [String],
    ) -> Self {
        Self {
            profile,
            preferences,
            count,
            trending_topics,
        }
    }

    /// Render the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Who the ideas are for
        prompt.push_str(&format!(
            "Generate {} highly engaging LinkedIn post ideas for a professional with:\n",
            self.count
        ));
        prompt.push_str(&format!("- Industry: {}\n", self.profile.industry));
        prompt.push_str(&format!("- Role: {}\n", self.profile.role));
        prompt.push_str(&format!(
            "- Expertise: {}\n",
            self.profile.interests.join(", ")
        ));
        prompt.push_str(&format!(
            "- Tone: {}\n\n",
            self.preferences.content_tone.as_str()
        ));

        // 2. Engagement heuristics
        prompt.push_str(ENGAGEMENT_PRACTICES);
        prompt.push_str("\n\n");

        // 3. Trending context, only when terms exist - no placeholder otherwise
        if !self.trending_topics.is_empty() {
            prompt.push_str(&format!(
                "Current trending topics on LinkedIn: {}. Incorporate these where relevant.\n\n",
                self.trending_topics.join(", ")
            ));
        }

        // 4. Output shape
        prompt.push_str(IDEAS_FORMAT_INSTRUCTIONS);
        prompt.push_str(&format!(
            "\nIdeas should align with current {} trends and promote thought leadership.\n",
            self.profile.industry
        ));
        prompt.push_str("Format as numbered list with clear separation between ideas.\n");

        prompt
    }
}

/// Builds the prompt expanding one idea into a full post
pub struct PostPrompt<'a> {
    idea: &'a str,
    profile: &'a UserProfile,
    preferences: &'a UserPreferences,
    content_type: ContentType,
    content_length: ContentLength,
}

impl<'a> PostPrompt<'a> {
    /// Create a new post prompt builder
    pub fn new(
        idea: &'a str,
        profile: &'a UserProfile,
        preferences: &'a UserPreferences,
        content_type: ContentType,
        content_length: ContentLength,
    ) -> Self {
        Self {
            idea,
            profile,
            preferences,
            content_type,
            content_length,
        }
    }

    /// Render the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Generate a highly engaging LinkedIn {} post based on: \"{}\"\n\n",
            self.content_type.as_str(),
            self.idea
        ));

        prompt.push_str("Professional background:\n");
        prompt.push_str(&format!("- Industry: {}\n", self.profile.industry));
        prompt.push_str(&format!("- Role: {}\n", self.profile.role));
        prompt.push_str(&format!(
            "- Expertise areas: {}\n\n",
            self.profile.interests.join(", ")
        ));

        prompt.push_str("Content requirements:\n");
        prompt.push_str(&format!(
            "- Tone: {} ({})\n",
            self.preferences.content_tone.as_str(),
            tone_guidelines(self.preferences.content_tone)
        ));
        prompt.push_str(&format!(
            "- Length: {} words\n",
            length_band(self.content_length)
        ));
        prompt.push_str(&format!(
            "- Content type: {}\n",
            content_type_instructions(self.content_type)
        ));
        prompt.push_str(POST_REQUIREMENTS);
        prompt.push_str(&format!(
            "- Ensure content feels authentic and aligns with {} best practices\n",
            self.profile.industry
        ));

        prompt
    }
}

const ENGAGEMENT_PRACTICES: &str = "\
Consider these LinkedIn engagement best practices:
- Posts with questions get 50% more comments
- Posts with 1-5 hashtags get 29% more engagement
- Video content receives 5x more engagement than static posts
- Polls average 450% higher engagement rate
- Posts published Tuesday-Thursday between 8-10am get highest visibility";

const IDEAS_FORMAT_INSTRUCTIONS: &str = "\
For each idea, include:
1. A compelling hook/title (1-2 sentences)
2. Content type suggestion (text, poll, image, video)
3. 2-3 relevant hashtags
";

const POST_REQUIREMENTS: &str = "\
- Include 3-5 relevant hashtags that boost discoverability
- Start with an attention-grabbing hook
- End with a compelling question or call-to-action
- Format optimized for LinkedIn readability (short paragraphs, line breaks)
";
