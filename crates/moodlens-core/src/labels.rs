//! The fixed emotion label set
//!
//! Labels are declared in the same order as the training dataset's emotion
//! columns. Classifier bank slots, artifact layout, and prediction output
//! ordering all follow this declaration order, so the order is part of the
//! serialized model contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 18 emotion categories the classifier bank predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Afraid,
    Angry,
    Anxious,
    Ashamed,
    Awkward,
    Bored,
    Calm,
    Confused,
    Disgusted,
    Excited,
    Frustrated,
    Happy,
    Jealous,
    Nostalgic,
    Proud,
    Sad,
    Satisfied,
    Surprised,
}

impl EmotionLabel {
    /// All labels in declaration order.
    pub const ALL: [EmotionLabel; 18] = [
        EmotionLabel::Afraid,
        EmotionLabel::Angry,
        EmotionLabel::Anxious,
        EmotionLabel::Ashamed,
        EmotionLabel::Awkward,
        EmotionLabel::Bored,
        EmotionLabel::Calm,
        EmotionLabel::Confused,
        EmotionLabel::Disgusted,
        EmotionLabel::Excited,
        EmotionLabel::Frustrated,
        EmotionLabel::Happy,
        EmotionLabel::Jealous,
        EmotionLabel::Nostalgic,
        EmotionLabel::Proud,
        EmotionLabel::Sad,
        EmotionLabel::Satisfied,
        EmotionLabel::Surprised,
    ];

    /// Labels counted as negative by the trend gate. Everything else
    /// ("calm", "excited", "happy", "jealous", "nostalgic", "proud",
    /// "satisfied", "surprised") is never negative, regardless of context.
    pub const NEGATIVE: [EmotionLabel; 10] = [
        EmotionLabel::Afraid,
        EmotionLabel::Angry,
        EmotionLabel::Anxious,
        EmotionLabel::Ashamed,
        EmotionLabel::Awkward,
        EmotionLabel::Bored,
        EmotionLabel::Confused,
        EmotionLabel::Disgusted,
        EmotionLabel::Frustrated,
        EmotionLabel::Sad,
    ];

    /// Lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Afraid => "afraid",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Anxious => "anxious",
            EmotionLabel::Ashamed => "ashamed",
            EmotionLabel::Awkward => "awkward",
            EmotionLabel::Bored => "bored",
            EmotionLabel::Calm => "calm",
            EmotionLabel::Confused => "confused",
            EmotionLabel::Disgusted => "disgusted",
            EmotionLabel::Excited => "excited",
            EmotionLabel::Frustrated => "frustrated",
            EmotionLabel::Happy => "happy",
            EmotionLabel::Jealous => "jealous",
            EmotionLabel::Nostalgic => "nostalgic",
            EmotionLabel::Proud => "proud",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Satisfied => "satisfied",
            EmotionLabel::Surprised => "surprised",
        }
    }

    /// Column header for this label in the training dataset
    /// (`Answer.f1.<label>.raw`, values TRUE/FALSE).
    pub fn dataset_column(&self) -> String {
        format!("Answer.f1.{}.raw", self.as_str())
    }

    /// Position in [`EmotionLabel::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|l| l == self).unwrap_or(0)
    }

    /// Whether the trend gate counts this label as negative.
    pub fn is_negative(&self) -> bool {
        Self::NEGATIVE.contains(self)
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        EmotionLabel::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| format!("unknown emotion label: {s}"))
    }
}
