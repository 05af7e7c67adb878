use showcase_config::TypingPace;

use crate::script::{RunSink, ScriptEvent, TypingSlot};

/// Reveals `text` into `slot` one character per `pace.per_char`, holds for
/// `pace.settle`, then reports the slot finished (which clears it).
///
/// The slot is marked active immediately; the first character lands after
/// `pace.lead_in`. Returns `false` if the run was cancelled part-way.
pub async fn simulate(sink: &RunSink, slot: TypingSlot, text: &str, pace: TypingPace) -> bool {
    if !sink.emit(ScriptEvent::TypingStarted(slot)) {
        return false;
    }
    if !sink.hold(pace.lead_in).await {
        return false;
    }

    for (offset, ch) in text.char_indices() {
        let value = text[..offset + ch.len_utf8()].to_string();
        if !sink.emit(ScriptEvent::TypingProgress { slot, value }) {
            return false;
        }
        if !sink.hold(pace.per_char).await {
            return false;
        }
    }

    if !sink.hold(pace.settle).await {
        return false;
    }
    tracing::debug!(run_id = %sink.run_id(), ?slot, "typing finished");
    sink.emit(ScriptEvent::TypingFinished(slot))
}
