use serde::Serialize;
use showcase_core::analysis::AnalysisPanel;
use showcase_core::workflow::{self, Workflow, WorkflowId};
use showcase_core::{canned, ChatMessage, DemoStep, PipelineStage, Role, StageStatus};

use crate::conversation;
use crate::disclosure::Disclosure;
use crate::domain::DemoState;

#[derive(Debug, Clone, Serialize)]
pub struct HeaderVm {
    pub restart_label: &'static str,
    pub restart_aria_label: &'static str,
}

impl HeaderVm {
    fn for_step(step: DemoStep) -> Self {
        if step == DemoStep::Idle {
            Self {
                restart_label: "Start Demo",
                restart_aria_label: "Start the demo workflow",
            }
        } else {
            Self {
                restart_label: "Replay Demo",
                restart_aria_label: "Restart the demo from the beginning",
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceVm {
    pub title: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageVm {
    #[serde(flatten)]
    pub message: ChatMessage,
    /// Only finished assistant answers cite sources.
    pub sources: Vec<SourceVm>,
}

impl From<ChatMessage> for MessageVm {
    fn from(message: ChatMessage) -> Self {
        let sources = if message.role == Role::Assistant && !message.is_loading {
            canned::SOURCES
                .iter()
                .map(|&(title, href)| SourceVm { title, href })
                .collect()
        } else {
            Vec::new()
        };
        Self { message, sources }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    Ready,
    Streaming,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputVm {
    pub value: String,
    pub disabled: bool,
    pub placeholder: &'static str,
    pub status: SubmitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageVm {
    pub name: String,
    pub message: String,
    pub status: StageStatus,
    pub marker: &'static str,
}

impl From<&PipelineStage> for StageVm {
    fn from(s: &PipelineStage) -> Self {
        Self {
            name: s.name.clone(),
            message: s.message.clone(),
            status: s.status,
            marker: s.status.marker(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowCardVm {
    pub id: WorkflowId,
    pub title: String,
    pub description: String,
    pub badge: &'static str,
    pub selected: bool,
}

impl WorkflowCardVm {
    fn new(w: Workflow, selected_id: WorkflowId) -> Self {
        Self {
            id: w.id,
            selected: w.id == selected_id,
            badge: w.status.badge(),
            title: w.title,
            description: w.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryVm {
    pub title: &'static str,
    pub current: bool,
}

/// Everything a presentation layer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct DemoVm {
    pub step: DemoStep,
    pub header: HeaderVm,
    pub messages: Vec<MessageVm>,
    pub input: InputVm,
    pub gathering: Vec<StageVm>,
    pub feedback: Vec<StageVm>,
    pub disclosure: Disclosure,
    pub analysis: AnalysisPanel,
    pub workflows: Vec<WorkflowCardVm>,
    pub suggestions: Vec<&'static str>,
    pub history: Vec<HistoryEntryVm>,
    pub is_generating: bool,
}

fn is_generating(state: &DemoState) -> bool {
    state.step() == DemoStep::Gathering
        || (state.flags.show_feedback_processing && !state.flags.feedback_processing_complete)
}

fn input_vm(state: &DemoState, generating: bool) -> InputVm {
    let value = if state.query.active {
        state.query.value.clone()
    } else if state.feedback_input.active {
        state.feedback_input.value.clone()
    } else {
        String::new()
    };

    InputVm {
        value,
        disabled: state.is_typing(),
        placeholder: canned::INPUT_PLACEHOLDER,
        status: if generating {
            SubmitStatus::Streaming
        } else {
            SubmitStatus::Ready
        },
    }
}

pub fn demo_vm(state: &DemoState) -> DemoVm {
    let step = state.step();
    let disclosure = Disclosure::from_state(state);
    let generating = is_generating(state);

    let messages: Vec<MessageVm> = conversation::messages_for(state)
        .into_iter()
        .map(MessageVm::from)
        .collect();

    let suggestions = if !state.workflow.is_active() && messages.is_empty() {
        canned::SUGGESTIONS.to_vec()
    } else {
        Vec::new()
    };

    let history = canned::CONVERSATION_HISTORY
        .iter()
        .enumerate()
        .map(|(i, &title)| HistoryEntryVm {
            title,
            current: i == 0 && step > DemoStep::Idle,
        })
        .collect();

    DemoVm {
        step,
        header: HeaderVm::for_step(step),
        input: input_vm(state, generating),
        gathering: state.gathering.stages().iter().map(StageVm::from).collect(),
        feedback: state.feedback.stages().iter().map(StageVm::from).collect(),
        analysis: AnalysisPanel::build(
            &state.workflow,
            &state.content,
            disclosure.show_improved_recommendation,
        ),
        workflows: workflow::catalog()
            .into_iter()
            .map(|w| WorkflowCardVm::new(w, state.workflow.id))
            .collect(),
        disclosure,
        messages,
        suggestions,
        history,
        is_generating: generating,
    }
}
