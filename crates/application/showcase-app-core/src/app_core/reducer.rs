use showcase_core::PipelineKind;

use crate::domain::{DemoState, TypingState};
use crate::script::{ScriptEvent, TypingSlot};

use super::events::DomainEvent;

pub fn reduce(mut state: DemoState, ev: DomainEvent) -> DemoState {
    match ev {
        DomainEvent::RunReset { run_id } => {
            state = DemoState::initial(state.workflow, run_id);
        }

        DomainEvent::WorkflowSelected { workflow, run_id } => {
            state = DemoState::initial(workflow, run_id);
        }

        DomainEvent::Script { run_id: _, ev } => apply_script_event(&mut state, ev),
    }
    state
}

fn apply_script_event(state: &mut DemoState, ev: ScriptEvent) {
    match ev {
        ScriptEvent::StepAdvanced(step) => {
            if let Err(e) = state.timeline.advance(step) {
                tracing::warn!("ignoring step transition: {e}");
            }
        }

        ScriptEvent::TypingStarted(slot) => {
            *state.typing_mut(slot) = TypingState {
                value: String::new(),
                active: true,
            };
        }

        ScriptEvent::TypingProgress { slot, value } => {
            let typing = state.typing_mut(slot);
            if typing.active {
                typing.value = value;
            }
        }

        ScriptEvent::TypingFinished(slot) => {
            *state.typing_mut(slot) = TypingState::default();
            match slot {
                TypingSlot::Query => {
                    state.flags.show_user_message = true;
                    state.flags.show_ai_response = true;
                }
                TypingSlot::Feedback => state.flags.show_feedback_message = true,
            }
        }

        ScriptEvent::StageChanged {
            pipeline,
            index,
            status,
        } => {
            if let Err(e) = state.stages_mut(pipeline).apply(index, status) {
                tracing::warn!("ignoring {pipeline:?} stage update: {e}");
            }
        }

        ScriptEvent::PipelineComplete(pipeline) => {
            if !state.stages(pipeline).is_complete() {
                tracing::warn!("{pipeline:?} reported complete with unfinished stages");
                return;
            }
            match pipeline {
                PipelineKind::Gathering => state.flags.gathering_complete = true,
                PipelineKind::FeedbackProcessing => {
                    state.flags.feedback_processing_complete = true
                }
            }
        }

        ScriptEvent::FirstResponseReceived => state.flags.first_response_received = true,

        ScriptEvent::FeedbackSubmitted => {
            state.flags.feedback_submitted = true;
            state.flags.show_feedback_processing = true;
        }
    }
}
