//! Sentiment categories and their static response profiles
//!
//! The model is asked to answer with one of three fixed phrases
//! (`Sentiment is Positive` and so on). [`SentimentCategory::from_reply`] is
//! the only place a reply is interpreted:
//! - labels are checked in enumeration order Positive, Negative, Neutral
//! - the first label contained in the reply wins
//! - matching is case-sensitive and ignores everything around the label

mod classifier;
mod responder;

pub use classifier::{Classification, SentimentClassifier, classification_prompt};
pub use responder::ResponseGenerator;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of sentiment outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

/// Per-category response settings, fixed for the life of the process
#[derive(Debug, PartialEq)]
pub struct CategoryProfile {
    /// Instruction prefix; the user's message is appended verbatim
    pub instruction: &'static str,
    /// Position on the indicator bar, in `0.0..=1.0`
    pub score: f32,
    /// Display label (emoji + text)
    pub label: &'static str,
}

static POSITIVE_PROFILE: CategoryProfile = CategoryProfile {
    instruction: "The user is happy or excited. Reply in a cheerful and engaging way: ",
    score: 1.0,
    label: "😀 Very Positive",
};

static NEGATIVE_PROFILE: CategoryProfile = CategoryProfile {
    instruction: "The user is feeling down or upset. Respond in an empathetic and motivational way: ",
    score: 0.0,
    label: "😢 Very Negative",
};

static NEUTRAL_PROFILE: CategoryProfile = CategoryProfile {
    instruction: "The user's sentiment is neutral. Respond naturally: ",
    score: 0.5,
    label: "😐 Neutral",
};

impl SentimentCategory {
    /// All categories, in matching order
    pub const ALL: [SentimentCategory; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// The word the model is told to answer with
    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    pub fn profile(&self) -> &'static CategoryProfile {
        match self {
            Self::Positive => &POSITIVE_PROFILE,
            Self::Negative => &NEGATIVE_PROFILE,
            Self::Neutral => &NEUTRAL_PROFILE,
        }
    }

    pub fn score(&self) -> f32 {
        self.profile().score
    }

    pub fn label(&self) -> &'static str {
        self.profile().label
    }

    /// Parse a classification reply; see the module docs for the policy
    pub fn from_reply(reply: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| reply.contains(category.name()))
    }

    /// Render the response prompt for this category
    pub fn response_prompt(&self, message: &str) -> String {
        format!("{}{}", self.profile().instruction, message)
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
