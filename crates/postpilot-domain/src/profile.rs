//! User profile - who the generated content is written for

use serde::{Deserialize, Serialize};

/// Professional profile used to personalize generated content.
///
/// Created on first use with defaults, overwritten by the settings UI,
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Industry the user works in (e.g. "Technology")
    pub industry: String,

    /// Current role or title (e.g. "Software Developer")
    pub role: String,

    /// Areas of expertise, in the order the user listed them
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Default for UserProfile {
    /// First-use profile applied before the user configures anything
    fn default() -> Self {
        Self {
            industry: "Technology".to_string(),
            role: "Software Developer".to_string(),
            interests: vec![
                "AI".to_string(),
                "Web Development".to_string(),
                "Career Growth".to_string(),
            ],
        }
    }
}
