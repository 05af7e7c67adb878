use std::time::Duration;

use anyhow::Context;
use showcase_config::DemoTimings;
use showcase_core::{DemoStep, PipelineKind, Workflow};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::animator;
use crate::app_core::DomainEvent;
use crate::domain::DemoState;
use crate::script::{RunId, RunSink, ScriptEvent, TypingSlot};
use crate::typing;

#[derive(Debug, Clone)]
pub struct ScriptRun {
    pub run_id: RunId,
    pub workflow: Workflow,
    pub user_message: String,
    pub feedback_message: String,
    pub gathering_stages: usize,
    pub feedback_stages: usize,
    pub lead: Duration,
    pub timings: DemoTimings,
}

impl ScriptRun {
    pub fn for_state(state: &DemoState, run_id: RunId, lead: Duration, timings: DemoTimings) -> Self {
        Self {
            run_id,
            workflow: state.workflow.clone(),
            user_message: state.content.user_message.clone(),
            feedback_message: showcase_core::canned::FEEDBACK_MESSAGE.to_string(),
            gathering_stages: state.gathering.len(),
            feedback_stages: state.feedback.len(),
            lead,
            timings,
        }
    }
}

/// Owns the cancellation token of the one live script task.
pub struct ScriptOrchestrator {
    tx: mpsc::UnboundedSender<DomainEvent>,
    cancel: Option<CancellationToken>,
}

impl ScriptOrchestrator {
    pub fn new(tx: mpsc::UnboundedSender<DomainEvent>) -> Self {
        Self { tx, cancel: None }
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }

    pub fn start(&mut self, run: ScriptRun) -> anyhow::Result<()> {
        self.cancel();
        let token = CancellationToken::new();
        self.cancel = Some(token.clone());

        let sink = RunSink::new(run.run_id, self.tx.clone(), token);
        tracing::debug!(run_id = %run.run_id, workflow = run.workflow.id, "starting script run");

        crate::async_runtime::spawn(async move {
            let run_id = run.run_id;
            if !run_script(run, &sink).await {
                tracing::debug!(%run_id, "script run stopped early");
            }
        })
        .context("Failed to spawn demo script task")?;

        Ok(())
    }
}

impl Drop for ScriptOrchestrator {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The scripted sequence of one run. `false` means it was cut short by cancellation.
///
/// Step 5 is entered when feedback processing completes; there is no fixed timer out of step 4.
pub async fn run_script(run: ScriptRun, sink: &RunSink) -> bool {
    let t = run.timings;

    if !sink.hold(run.lead).await || !sink.advance(DemoStep::UserTyping) {
        return false;
    }
    if !run.workflow.is_active() {
        tracing::debug!(workflow = run.workflow.id, "workflow has no scripted content");
        return true;
    }

    if !typing::simulate(sink, TypingSlot::Query, &run.user_message, t.query_typing).await
        || !sink.advance(DemoStep::Gathering)
    {
        return false;
    }

    if !animator::animate(sink, PipelineKind::Gathering, run.gathering_stages, t.gathering).await
        || !sink.advance(DemoStep::Recommendation)
    {
        return false;
    }

    let sidebar = async {
        sink.hold(t.first_response_delay).await && sink.emit(ScriptEvent::FirstResponseReceived)
    };
    let feedback_stage =
        async { sink.hold(t.feedback_stage_delay).await && sink.advance(DemoStep::Feedback) };
    let (_, opened) = tokio::join!(sidebar, feedback_stage);
    if !opened {
        return false;
    }

    if !typing::simulate(sink, TypingSlot::Feedback, &run.feedback_message, t.feedback_typing).await
    {
        return false;
    }
    if !sink.hold(t.feedback_submit_delay).await || !sink.emit(ScriptEvent::FeedbackSubmitted) {
        return false;
    }

    animator::animate(
        sink,
        PipelineKind::FeedbackProcessing,
        run.feedback_stages,
        t.feedback_processing,
    )
    .await
        && sink.advance(DemoStep::Improved)
}
