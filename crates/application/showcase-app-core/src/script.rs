use std::time::Duration;

use serde::Serialize;
use showcase_core::{DemoStep, PipelineKind, StageStatus};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::app_core::DomainEvent;

pub type RunId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypingSlot {
    Query,
    Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    StepAdvanced(DemoStep),
    TypingStarted(TypingSlot),
    TypingProgress {
        slot: TypingSlot,
        value: String,
    },
    TypingFinished(TypingSlot),
    StageChanged {
        pipeline: PipelineKind,
        index: usize,
        status: StageStatus,
    },
    PipelineComplete(PipelineKind),
    FirstResponseReceived,
    FeedbackSubmitted,
}

/// Emission handle of one run. Nothing is sent once its token is cancelled.
#[derive(Debug, Clone)]
pub struct RunSink {
    run_id: RunId,
    tx: mpsc::UnboundedSender<DomainEvent>,
    token: CancellationToken,
}

impl RunSink {
    pub fn new(
        run_id: RunId,
        tx: mpsc::UnboundedSender<DomainEvent>,
        token: CancellationToken,
    ) -> Self {
        Self { run_id, tx, token }
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// `false` once the run is cancelled or the kernel is gone.
    pub fn emit(&self, ev: ScriptEvent) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        self.tx
            .send(DomainEvent::Script {
                run_id: self.run_id,
                ev,
            })
            .is_ok()
    }

    pub fn advance(&self, step: DemoStep) -> bool {
        tracing::debug!(run_id = %self.run_id, %step, "advancing step");
        self.emit(ScriptEvent::StepAdvanced(step))
    }

    /// Waits `delay`; `false` if the run was cancelled meanwhile.
    pub async fn hold(&self, delay: Duration) -> bool {
        crate::timeline::hold(&self.token, delay).await
    }
}
