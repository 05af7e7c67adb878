use serde::Serialize;
use showcase_core::workflow::default_workflow;
use showcase_core::{DemoStep, PipelineKind, StageList, Workflow, WorkflowContent};

use crate::script::{RunId, TypingSlot};
use crate::timeline::Timeline;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypingState {
    pub value: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptFlags {
    pub show_user_message: bool,
    pub show_ai_response: bool,
    pub gathering_complete: bool,
    pub first_response_received: bool,
    pub show_feedback_message: bool,
    pub feedback_submitted: bool,
    pub show_feedback_processing: bool,
    pub feedback_processing_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoState {
    pub run_id: Option<RunId>,
    pub timeline: Timeline,
    pub workflow: Workflow,
    pub content: WorkflowContent,

    pub query: TypingState,
    pub feedback_input: TypingState,

    pub gathering: StageList,
    pub feedback: StageList,

    pub flags: ScriptFlags,
}

impl Default for DemoState {
    fn default() -> Self {
        Self::initial(default_workflow(), None)
    }
}

impl DemoState {
    pub fn initial(workflow: Workflow, run_id: Option<RunId>) -> Self {
        Self {
            run_id,
            timeline: Timeline::new(),
            content: workflow.content(),
            workflow,
            query: TypingState::default(),
            feedback_input: TypingState::default(),
            gathering: StageList::gathering(),
            feedback: StageList::feedback_processing(),
            flags: ScriptFlags::default(),
        }
    }

    pub fn step(&self) -> DemoStep {
        self.timeline.step()
    }

    pub fn typing(&self, slot: TypingSlot) -> &TypingState {
        match slot {
            TypingSlot::Query => &self.query,
            TypingSlot::Feedback => &self.feedback_input,
        }
    }

    pub(crate) fn typing_mut(&mut self, slot: TypingSlot) -> &mut TypingState {
        match slot {
            TypingSlot::Query => &mut self.query,
            TypingSlot::Feedback => &mut self.feedback_input,
        }
    }

    pub fn stages(&self, kind: PipelineKind) -> &StageList {
        match kind {
            PipelineKind::Gathering => &self.gathering,
            PipelineKind::FeedbackProcessing => &self.feedback,
        }
    }

    pub(crate) fn stages_mut(&mut self, kind: PipelineKind) -> &mut StageList {
        match kind {
            PipelineKind::Gathering => &mut self.gathering,
            PipelineKind::FeedbackProcessing => &mut self.feedback,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.query.active || self.feedback_input.active
    }

    /// Nothing more will happen without a restart.
    pub fn is_settled(&self) -> bool {
        if self.workflow.is_active() {
            self.step().is_terminal() && self.flags.feedback_processing_complete
        } else {
            self.step() > DemoStep::Idle
        }
    }
}
