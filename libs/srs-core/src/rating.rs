//! Rating choices offered to the learner after flipping a card.

use serde::Serialize;

use crate::types::Quality;

/// Presentation metadata for one quality rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityRatingOption {
    pub value: u8,
    pub label: &'static str,
    pub description: &'static str,
    /// Rough hint of the resulting interval, for display only.
    pub interval: &'static str,
    pub color: &'static str,
}

static RATING_OPTIONS: [QualityRatingOption; 6] = [
    QualityRatingOption {
        value: 0,
        label: "Blackout",
        description: "Complete blackout, nothing came to mind",
        interval: "1 day",
        color: "red",
    },
    QualityRatingOption {
        value: 1,
        label: "Wrong",
        description: "Wrong answer, but it looked familiar once revealed",
        interval: "1 day",
        color: "orange",
    },
    QualityRatingOption {
        value: 2,
        label: "Almost",
        description: "Wrong answer, but the right one felt obvious once revealed",
        interval: "1 day",
        color: "amber",
    },
    QualityRatingOption {
        value: 3,
        label: "Hard",
        description: "Correct, but it took serious effort",
        interval: "1+ days",
        color: "yellow",
    },
    QualityRatingOption {
        value: 4,
        label: "Good",
        description: "Correct after a short hesitation",
        interval: "6+ days",
        color: "blue",
    },
    QualityRatingOption {
        value: 5,
        label: "Easy",
        description: "Perfect recall, no hesitation",
        interval: "2+ weeks",
        color: "green",
    },
];

/// Rating options in ascending quality order, one per accepted [`Quality`].
pub fn get_quality_rating_options() -> &'static [QualityRatingOption] {
    &RATING_OPTIONS
}

impl Quality {
    /// Presentation metadata for this quality.
    pub fn option(self) -> &'static QualityRatingOption {
        &RATING_OPTIONS[self.to_value() as usize]
    }

    pub fn label(self) -> &'static str {
        self.option().label
    }
}
