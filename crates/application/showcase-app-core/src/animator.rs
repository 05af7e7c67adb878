use showcase_config::StagePace;
use showcase_core::{PipelineKind, StageStatus};

use crate::script::{RunSink, ScriptEvent};

/// Walks `stage_count` stages of `pipeline` strictly one after another:
/// connecting, `pace.connect`, complete, `pace.settle`. Emits
/// `PipelineComplete` once after the last stage.
///
/// Stage `i + 1` is only touched after stage `i`'s completion has been emitted,
/// so two stages are never connecting at once. Returns `false` if cancelled.
pub async fn animate(
    sink: &RunSink,
    pipeline: PipelineKind,
    stage_count: usize,
    pace: StagePace,
) -> bool {
    for index in 0..stage_count {
        let connecting = ScriptEvent::StageChanged {
            pipeline,
            index,
            status: StageStatus::Connecting,
        };
        if !sink.emit(connecting) || !sink.hold(pace.connect).await {
            return false;
        }

        let complete = ScriptEvent::StageChanged {
            pipeline,
            index,
            status: StageStatus::Complete,
        };
        if !sink.emit(complete) || !sink.hold(pace.settle).await {
            return false;
        }
    }

    tracing::debug!(run_id = %sink.run_id(), ?pipeline, "pipeline complete");
    sink.emit(ScriptEvent::PipelineComplete(pipeline))
}
