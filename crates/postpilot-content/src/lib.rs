//! Postpilot Content Core
//!
//! Turns a user profile, preferences, and optionally scraped trending
//! terms into generated post ideas and full post drafts.
//!
//! # Architecture
//!
//! ```text
//! Scraped text → trending terms ─┐
//! Profile + preferences ─────────┴→ Prompt → TextGenerator → Parser → ideas / post
//! ```
//!
//! The trending extractor, prompt builders, and parsers are pure, total
//! functions; the [`ContentEngine`] orchestrates them around the single
//! fallible boundary, the generation client.
//!
//! # Example Usage
//!
//! ```no_run
//! use postpilot_content::{ContentEngine, EngineConfig};
//! use postpilot_domain::{GenerationRequest, UserPreferences, UserProfile};
//! use postpilot_llm::MockProvider;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new("1. First idea 2. Second idea");
//! let engine = ContentEngine::new(Arc::new(provider), EngineConfig::default());
//!
//! let request = GenerationRequest::for_ideas(
//!     UserProfile::default(),
//!     UserPreferences::default(),
//!     3,
//!     vec![],
//! );
//!
//! let ideas = engine.generate_ideas(&request).await?;
//! println!("Got {} ideas", ideas.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod parser;
mod prompt;
mod trending;

pub use config::EngineConfig;
pub use engine::ContentEngine;
pub use error::ContentError;
pub use parser::{parse_ideas, parse_post};
pub use prompt::{IdeasPrompt, PostPrompt};
pub use trending::{extract_trending_terms, MAX_TRENDING_TERMS};
