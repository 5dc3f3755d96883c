use serde::{Deserialize, Serialize};

/// The fixed label set the analyzer assigns at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Neutral,
    Surprise,
    Sadness,
    Anger,
    Fear,
    Disgust,
}

impl Emotion {
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Neutral => "neutral",
            Self::Surprise => "surprise",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Disgust => "disgust",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "joy" => Some(Self::Joy),
            "neutral" => Some(Self::Neutral),
            "surprise" => Some(Self::Surprise),
            "sadness" => Some(Self::Sadness),
            "anger" => Some(Self::Anger),
            "fear" => Some(Self::Fear),
            "disgust" => Some(Self::Disgust),
            _ => None,
        }
    }

    /// Labels outside the stored set (or a failed analysis) fall back here.
    pub fn from_label_or_neutral(s: &str) -> Self {
        Self::from_label(s).unwrap_or(Self::Neutral)
    }
}

/// A free-text note tagged with a single emotion label.
///
/// Immutable after creation apart from deletion; the emotion is never
/// recomputed for storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thought {
    pub id: String,
    pub thought: String,
    #[serde(deserialize_with = "emotion_or_neutral")]
    pub emotion: Emotion,
}

fn emotion_or_neutral<'de, D>(deserializer: D) -> Result<Emotion, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    Ok(Emotion::from_label_or_neutral(&label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for label in ["joy", "neutral", "surprise", "sadness", "anger", "fear", "disgust"] {
            let emotion = Emotion::from_label(label).unwrap();
            assert_eq!(emotion.as_label(), label);
        }
    }

    #[test]
    fn unknown_label_defaults_to_neutral() {
        assert_eq!(Emotion::from_label_or_neutral("love"), Emotion::Neutral);
        assert_eq!(Emotion::from_label_or_neutral(""), Emotion::Neutral);
    }

    #[test]
    fn thought_decodes_unrecognized_emotion_as_neutral() {
        let thought: Thought = serde_json::from_str(
            r#"{"id": "th1", "thought": "what a day", "emotion": "melancholy"}"#,
        )
        .unwrap();
        assert_eq!(thought.emotion, Emotion::Neutral);
    }
}
