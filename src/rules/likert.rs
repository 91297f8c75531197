/// Two-pole summary of a 1..5 rating.
///
/// "1"/"2" map to `low`, "4"/"5" to `high`, everything else to `neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikertScale {
    pub low: &'static str,
    pub high: &'static str,
    pub neutral: Option<&'static str>,
}

pub const EXPERIENCE_WAS_COMMON: LikertScale = LikertScale {
    low: "Specific to few",
    high: "Common to most",
    neutral: None,
};

pub const AWARENESS_ON_SHORTCOMINGS: LikertScale = LikertScale {
    low: "Aware",
    high: "Not Aware",
    neutral: Some("Neutral"),
};

pub const AWARENESS_ON_STRENGTHS: LikertScale = LikertScale {
    low: "Aware",
    high: "Not Aware",
    neutral: Some("Neutral"),
};

pub const EASE_OF_RAISING_CONCERNS: LikertScale = LikertScale {
    low: "Made it difficult",
    high: "Made it easy",
    neutral: Some("Neutral"),
};

impl LikertScale {
    pub fn summarize(&self, value: &str) -> Option<&'static str> {
        match value {
            "1" | "2" => Some(self.low),
            "4" | "5" => Some(self.high),
            _ => self.neutral,
        }
    }

    /// Every label this scale can produce, `None` included when neutral is null
    pub fn labels(&self) -> [Option<&'static str>; 3] {
        [Some(self.low), Some(self.high), self.neutral]
    }
}

/// Whether a value is one of the literal ratings "1".."5"
pub fn is_rating(value: &str) -> bool {
    matches!(value, "1" | "2" | "3" | "4" | "5")
}
