use serde::Serialize;

/// Confidence category assigned to one observed feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreLabel {
    Perf,
    Good,
    #[serde(rename = "OK")]
    Ok,
    Risk,
    Amb,
    None,
}

impl ScoreLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Perf => "Perf",
            ScoreLabel::Good => "Good",
            ScoreLabel::Ok => "OK",
            ScoreLabel::Risk => "Risk",
            ScoreLabel::Amb => "Amb",
            ScoreLabel::None => "None",
        }
    }

    /// Only Perf, Good and OK identifications may be accepted without review.
    pub fn is_confident(&self) -> bool {
        matches!(self, ScoreLabel::Perf | ScoreLabel::Good | ScoreLabel::Ok)
    }
}

impl std::fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn label_order() -> &'static [ScoreLabel] {
    &[
        ScoreLabel::Perf,
        ScoreLabel::Good,
        ScoreLabel::Ok,
        ScoreLabel::Risk,
        ScoreLabel::Amb,
        ScoreLabel::None,
    ]
}
