use serde::Serialize;
use showcase_core::DemoStep;

use crate::domain::DemoState;

/// Visibility switches for the regions around the chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Disclosure {
    pub show_data_panel: bool,
    pub show_feedback_stage: bool,
    pub show_improved_recommendation: bool,
    pub feedback_processing_complete: bool,
    pub sidebar_expanded: bool,
}

impl Disclosure {
    pub fn from_state(state: &DemoState) -> Self {
        let step = state.step();
        let flags = &state.flags;
        Self {
            show_data_panel: flags.gathering_complete || step >= DemoStep::Recommendation,
            show_feedback_stage: step >= DemoStep::Feedback,
            show_improved_recommendation: step >= DemoStep::Improved
                || flags.feedback_processing_complete,
            feedback_processing_complete: flags.feedback_processing_complete,
            sidebar_expanded: flags.first_response_received,
        }
    }

    pub fn is_hidden(&self) -> bool {
        *self == Self::default()
    }
}
