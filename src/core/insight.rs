/// Coarse mood bucket derived from a fine-grained analyzer label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodBucket {
    Positive,
    Negative,
    Neutral,
}

impl MoodBucket {
    /// Fixed mapping over raw analyzer labels. The analyzer vocabulary is
    /// wider than the seven stored labels ("love" for instance), so this
    /// works on strings rather than [`crate::core::thought::Emotion`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "joy" | "love" | "surprise" => Self::Positive,
            "sadness" | "anger" | "fear" | "disgust" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

/// Emotion counts across the three buckets for one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl MoodDistribution {
    /// Tally the labels of every successfully analyzed thought. A `None`
    /// is a swallowed per-thought failure and contributes nothing.
    pub fn tally<S: AsRef<str>>(settled: &[Option<S>]) -> Self {
        let mut dist = Self::default();
        for label in settled.iter().flatten() {
            match MoodBucket::from_label(label.as_ref()) {
                MoodBucket::Positive => dist.positive += 1,
                MoodBucket::Negative => dist.negative += 1,
                MoodBucket::Neutral => dist.neutral += 1,
            }
        }
        dist
    }

    pub fn analyzed(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// The bucket with the strictly highest count, ties broken in
    /// Positive, Negative, Neutral order. "N/A" when nothing was analyzed.
    pub fn dominant_mood(&self) -> &'static str {
        if self.analyzed() == 0 {
            return "N/A";
        }
        let mut best = MoodBucket::Positive;
        let mut best_count = self.positive;
        for (bucket, count) in [
            (MoodBucket::Negative, self.negative),
            (MoodBucket::Neutral, self.neutral),
        ] {
            if count > best_count {
                best = bucket;
                best_count = count;
            }
        }
        best.as_str()
    }
}
