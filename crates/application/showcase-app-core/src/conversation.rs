//! Conversation assembler: the visible chat as a pure function of script state.

use showcase_core::canned;
use showcase_core::{ChatMessage, DemoStep, Role, StageList, WorkflowContent};

use crate::domain::DemoState;

/// The subset of state the chat depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversationFlags {
    pub step: DemoStep,
    pub workflow_active: bool,
    pub show_user_message: bool,
    pub show_ai_response: bool,
    pub show_feedback_message: bool,
    pub show_feedback_processing: bool,
    pub feedback_processing_complete: bool,
}

impl From<&DemoState> for ConversationFlags {
    fn from(state: &DemoState) -> Self {
        Self {
            step: state.step(),
            workflow_active: state.workflow.is_active(),
            show_user_message: state.flags.show_user_message,
            show_ai_response: state.flags.show_ai_response,
            show_feedback_message: state.flags.show_feedback_message,
            show_feedback_processing: state.flags.show_feedback_processing,
            feedback_processing_complete: state.flags.feedback_processing_complete,
        }
    }
}

fn stage_block(prefix: &str, stages: &StageList) -> String {
    let mut content = format!("{prefix}\n\n");
    for stage in stages.stages() {
        content.push_str(&stage.line());
        content.push('\n');
    }
    content
}

/// Messages in narrative order:
/// user query, gathering answer, feedback, feedback answer, final answer.
///
/// A non-active workflow only ever shows the single "coming soon" system
/// message, and only once the step is past idle.
pub fn derive_messages(
    flags: &ConversationFlags,
    content: &WorkflowContent,
    gathering: &StageList,
    feedback: &StageList,
) -> Vec<ChatMessage> {
    if !flags.workflow_active {
        if flags.step == DemoStep::Idle {
            return Vec::new();
        }
        return vec![ChatMessage::new(
            "system-1",
            Role::System,
            format!("{}\n\n{}", content.ai_response, canned::BETA_INVITE),
        )];
    }

    let mut messages = Vec::new();

    if flags.show_user_message {
        messages.push(
            ChatMessage::new("user-1", Role::User, content.user_message.clone()).at("just now"),
        );

        if flags.show_ai_response {
            let mut text = stage_block(canned::GATHERING_PREFIX, gathering);
            let done = gathering.is_complete();
            if done {
                text.push('\n');
                text.push_str(canned::ANALYSIS_COMPLETE_NOTE);
            }
            messages.push(
                ChatMessage::new("ai-1", Role::Assistant, text)
                    .at("1 min ago")
                    .loading(!done),
            );
        }
    }

    if flags.show_feedback_message {
        messages.push(
            ChatMessage::new("user-2", Role::User, canned::FEEDBACK_MESSAGE).at("30 sec ago"),
        );
    }

    if flags.show_feedback_processing {
        messages.push(
            ChatMessage::new(
                "ai-2",
                Role::Assistant,
                stage_block(canned::FEEDBACK_PREFIX, feedback),
            )
            .at("20 sec ago")
            .loading(!feedback.is_complete()),
        );
    }

    if flags.feedback_processing_complete {
        messages.push(
            ChatMessage::new("ai-3", Role::Assistant, canned::FINAL_RESPONSE).at("10 sec ago"),
        );
    }

    messages
}

pub fn messages_for(state: &DemoState) -> Vec<ChatMessage> {
    derive_messages(
        &ConversationFlags::from(state),
        &state.content,
        &state.gathering,
        &state.feedback,
    )
}
