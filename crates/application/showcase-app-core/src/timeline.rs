//! Timeline driver: the step counter and the timer primitive every script
//! delay goes through.

use std::time::Duration;

use showcase_config::{DemoTimings, StagePace, TypingPace};
use showcase_core::{DemoStep, StageList, StepError, Workflow};
use tokio_util::sync::CancellationToken;

/// Current step of a run. Only moves forward; `reset` is the single way back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    step: DemoStep,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> DemoStep {
        self.step
    }

    /// `Ok(true)` if the step moved, `Ok(false)` if already there.
    pub fn advance(&mut self, to: DemoStep) -> Result<bool, StepError> {
        if to < self.step {
            return Err(StepError::Backward {
                from: self.step,
                to,
            });
        }
        let moved = to != self.step;
        self.step = to;
        Ok(moved)
    }

    pub fn reset(&mut self) {
        self.step = DemoStep::Idle;
    }
}

/// Sleeps for `delay` unless `token` fires first. `false` means cancelled.
pub async fn hold(token: &CancellationToken, delay: Duration) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => !token.is_cancelled(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub at: Duration,
    pub label: &'static str,
    pub step: Option<DemoStep>,
}

/// Expected offsets of every scripted milestone, measured from the moment the
/// run was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    milestones: Vec<Milestone>,
}

fn typing_span(pace: &TypingPace, text: &str) -> Duration {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    pace.lead_in + pace.per_char * chars + pace.settle
}

fn stages_span(pace: &StagePace, stages: usize) -> Duration {
    pace.per_stage() * u32::try_from(stages).unwrap_or(u32::MAX)
}

impl Schedule {
    /// `lead` is the delay before step 1 (start or restart delay).
    pub fn compute(timings: &DemoTimings, workflow: &Workflow, lead: Duration) -> Self {
        let mut milestones = vec![Milestone {
            at: lead,
            label: "User starts typing",
            step: Some(DemoStep::UserTyping),
        }];

        if !workflow.is_active() {
            return Self { milestones };
        }

        let content = workflow.content();
        let query_sent = lead + typing_span(&timings.query_typing, &content.user_message);
        let gathered =
            query_sent + stages_span(&timings.gathering, StageList::gathering().len());
        let sidebar = gathered + timings.first_response_delay;
        let feedback_open = gathered + timings.feedback_stage_delay;
        let feedback_sent = feedback_open
            + typing_span(&timings.feedback_typing, showcase_core::canned::FEEDBACK_MESSAGE);
        let submitted = feedback_sent + timings.feedback_submit_delay;
        let processed = submitted
            + stages_span(
                &timings.feedback_processing,
                StageList::feedback_processing().len(),
            );

        milestones.extend([
            Milestone {
                at: query_sent,
                label: "Query sent, gathering data",
                step: Some(DemoStep::Gathering),
            },
            Milestone {
                at: gathered,
                label: "Recommendation shown",
                step: Some(DemoStep::Recommendation),
            },
            Milestone {
                at: sidebar,
                label: "Analytics sidebar expands",
                step: None,
            },
            Milestone {
                at: feedback_open,
                label: "Feedback stage opens",
                step: Some(DemoStep::Feedback),
            },
            Milestone {
                at: feedback_sent,
                label: "Feedback sent",
                step: None,
            },
            Milestone {
                at: submitted,
                label: "Feedback processing starts",
                step: None,
            },
            Milestone {
                at: processed,
                label: "Improved recommendation",
                step: Some(DemoStep::Improved),
            },
        ]);
        milestones.sort_by_key(|m| m.at);

        Self { milestones }
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn step_entry(&self, step: DemoStep) -> Option<Duration> {
        self.milestones
            .iter()
            .find(|m| m.step == Some(step))
            .map(|m| m.at)
    }

    pub fn total(&self) -> Duration {
        self.milestones
            .last()
            .map(|m| m.at)
            .unwrap_or_default()
    }
}
