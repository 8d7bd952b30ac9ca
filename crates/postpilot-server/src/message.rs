//! Extension message dispatch.
//!
//! The browser extension funnels everything through one tagged-union
//! message; the dispatcher turns each variant into a typed response and
//! reports failures as `{error}` rather than an HTTP error status.

use crate::handlers::AppState;
use postpilot_content::extract_trending_terms;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Message sent by the extension, discriminated by the `type` field
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExtensionMessage {
    /// Return the captured post documents with a count
    AnalyzePost {
        /// Visible post texts, in feed order
        documents: Vec<String>,
    },
    /// Extract trending terms from captured post documents
    GetPostInsights {
        /// Visible post texts, in feed order
        documents: Vec<String>,
    },
    /// Run a free-form prompt through the generator
    GenerateContent {
        /// Prompt text, sent verbatim
        prompt: String,
    },
    /// Read a subset of the key-value storage
    GetStorageData {
        /// Keys to read; missing keys are omitted from the response
        keys: Vec<String>,
    },
    /// Merge entries into the key-value storage
    SetStorageData {
        /// Entries to write
        data: HashMap<String, serde_json::Value>,
    },
}

/// Typed response for a dispatched message
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MessageResponse {
    /// Reply to `analyzePost`
    Posts {
        /// The documents, passed back unchanged
        posts: Vec<String>,
        /// Number of documents
        count: usize,
    },
    /// Reply to `getPostInsights`
    Insights {
        /// Most frequent meaningful terms, capped at five
        #[serde(rename = "trendingTopics")]
        trending_topics: Vec<String>,
    },
    /// Reply to `generateContent`
    Content {
        /// Raw generator output
        content: String,
    },
    /// Reply to `getStorageData`
    StorageData {
        /// Requested entries that exist
        data: HashMap<String, serde_json::Value>,
    },
    /// Reply to `setStorageData`
    Success {
        /// Always true on this arm
        success: bool,
    },
    /// Any failure, reported in-band
    Error {
        /// What went wrong
        error: String,
    },
}

/// Route a message to its handler. Never panics; failures come back as
/// `MessageResponse::Error`.
pub async fn dispatch(state: &AppState, message: ExtensionMessage) -> MessageResponse {
    match message {
        ExtensionMessage::AnalyzePost { documents } => {
            let count = documents.len();
            MessageResponse::Posts {
                posts: documents,
                count,
            }
        }
        ExtensionMessage::GetPostInsights { documents } => MessageResponse::Insights {
            trending_topics: extract_trending_terms(&documents),
        },
        ExtensionMessage::GenerateContent { prompt } => {
            match state.generator.generate(&prompt).await {
                Ok(content) => MessageResponse::Content { content },
                Err(e) => MessageResponse::Error {
                    error: e.to_string(),
                },
            }
        }
        ExtensionMessage::GetStorageData { keys } => match state.storage.lock() {
            Ok(storage) => {
                let data = keys
                    .into_iter()
                    .filter_map(|key| {
                        let value = storage.get(&key).cloned()?;
                        Some((key, value))
                    })
                    .collect();
                MessageResponse::StorageData { data }
            }
            Err(_) => MessageResponse::Error {
                error: "Storage unavailable".to_string(),
            },
        },
        ExtensionMessage::SetStorageData { data } => match state.storage.lock() {
            Ok(mut storage) => {
                storage.extend(data);
                MessageResponse::Success { success: true }
            }
            Err(_) => MessageResponse::Error {
                error: "Storage unavailable".to_string(),
            },
        },
    }
}
