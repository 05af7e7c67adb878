use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StepError;

/// Progress marker of the scripted demo. Ordered; a forward run only moves up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DemoStep {
    #[default]
    Idle = 0,
    UserTyping = 1,
    Gathering = 2,
    Recommendation = 3,
    Feedback = 4,
    Improved = 5,
}

impl DemoStep {
    pub const ALL: [DemoStep; 6] = [
        DemoStep::Idle,
        DemoStep::UserTyping,
        DemoStep::Gathering,
        DemoStep::Recommendation,
        DemoStep::Feedback,
        DemoStep::Improved,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn is_terminal(self) -> bool {
        self == DemoStep::Improved
    }

    pub fn label(self) -> &'static str {
        match self {
            DemoStep::Idle => "Idle",
            DemoStep::UserTyping => "User typing",
            DemoStep::Gathering => "Gathering data",
            DemoStep::Recommendation => "Recommendation",
            DemoStep::Feedback => "Feedback",
            DemoStep::Improved => "Improved recommendation",
        }
    }
}

impl fmt::Display for DemoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

impl From<DemoStep> for u8 {
    fn from(step: DemoStep) -> Self {
        step.ordinal()
    }
}

impl TryFrom<u8> for DemoStep {
    type Error = StepError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        DemoStep::ALL
            .get(usize::from(v))
            .copied()
            .ok_or(StepError::InvalidOrdinal(v))
    }
}
