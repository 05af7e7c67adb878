use std::time::Duration;

use showcase_app_core::animator;
use showcase_app_core::app_core::DomainEvent;
use showcase_app_core::script::{RunSink, ScriptEvent, TypingSlot};
use showcase_app_core::typing;
use showcase_config::{StagePace, TypingPace};
use showcase_core::{PipelineKind, StageStatus};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

fn sink() -> (RunSink, CancellationToken, mpsc::UnboundedReceiver<DomainEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let token = CancellationToken::new();
    let sink = RunSink::new(uuid::Uuid::new_v4(), tx, token.clone());
    (sink, token, rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<DomainEvent>) -> Vec<ScriptEvent> {
    let mut out = Vec::new();
    while let Ok(ev) = rx.try_recv() {
        if let DomainEvent::Script { ev, .. } = ev {
            out.push(ev);
        }
    }
    out
}

const PACE: TypingPace = TypingPace {
    lead_in: Duration::from_millis(100),
    per_char: Duration::from_millis(10),
    settle: Duration::from_millis(50),
};

#[tokio::test(start_paused = true)]
async fn typing_reveals_every_prefix_then_clears() {
    let (sink, _token, mut rx) = sink();

    assert!(typing::simulate(&sink, TypingSlot::Feedback, "héllo", PACE).await);

    let events = drain(&mut rx);
    assert_eq!(events.first(), Some(&ScriptEvent::TypingStarted(TypingSlot::Feedback)));
    assert_eq!(events.last(), Some(&ScriptEvent::TypingFinished(TypingSlot::Feedback)));

    let values: Vec<String> = events
        .iter()
        .filter_map(|ev| match ev {
            ScriptEvent::TypingProgress { value, .. } => Some(value.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(values, ["h", "hé", "hél", "héll", "héllo"]);
}

#[tokio::test(start_paused = true)]
async fn typing_duration_is_lead_in_plus_chars_plus_settle() {
    let (sink, _token, _rx) = sink();
    let start = tokio::time::Instant::now();

    typing::simulate(&sink, TypingSlot::Query, "abcd", PACE).await;

    assert_eq!(start.elapsed(), Duration::from_millis(100 + 4 * 10 + 50));
}

#[tokio::test(start_paused = true)]
async fn empty_text_finishes_after_lead_in_and_settle() {
    let (sink, _token, mut rx) = sink();
    let start = tokio::time::Instant::now();

    assert!(typing::simulate(&sink, TypingSlot::Query, "", PACE).await);

    assert_eq!(start.elapsed(), Duration::from_millis(100 + 50));
    assert_eq!(
        drain(&mut rx),
        [
            ScriptEvent::TypingStarted(TypingSlot::Query),
            ScriptEvent::TypingFinished(TypingSlot::Query),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn cancelled_typing_stops_emitting() {
    let (sink, token, mut rx) = sink();

    let task = tokio::spawn({
        let sink = sink.clone();
        async move { typing::simulate(&sink, TypingSlot::Query, "abcdefghij", PACE).await }
    });

    tokio::time::sleep(Duration::from_millis(125)).await;
    token.cancel();
    assert!(!task.await.unwrap());

    let events = drain(&mut rx);
    assert!(!events.contains(&ScriptEvent::TypingFinished(TypingSlot::Query)));
    let progress = events
        .iter()
        .filter(|ev| matches!(ev, ScriptEvent::TypingProgress { .. }))
        .count();
    assert_eq!(progress, 3);

    assert!(!sink.emit(ScriptEvent::FeedbackSubmitted));
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn animator_walks_stages_strictly_in_order() {
    let (sink, _token, mut rx) = sink();
    let pace = StagePace {
        connect: Duration::from_millis(500),
        settle: Duration::from_millis(150),
    };

    assert!(animator::animate(&sink, PipelineKind::FeedbackProcessing, 4, pace).await);

    let events = drain(&mut rx);
    let mut expected = Vec::new();
    for index in 0..4 {
        for status in [StageStatus::Connecting, StageStatus::Complete] {
            expected.push(ScriptEvent::StageChanged {
                pipeline: PipelineKind::FeedbackProcessing,
                index,
                status,
            });
        }
    }
    expected.push(ScriptEvent::PipelineComplete(PipelineKind::FeedbackProcessing));
    assert_eq!(events, expected);
}

#[tokio::test(start_paused = true)]
async fn cancelled_animation_never_reports_completion() {
    let (sink, token, mut rx) = sink();
    let pace = StagePace {
        connect: Duration::from_millis(600),
        settle: Duration::from_millis(200),
    };

    let task = tokio::spawn({
        let sink = sink.clone();
        async move { animator::animate(&sink, PipelineKind::Gathering, 5, pace).await }
    });

    tokio::time::sleep(Duration::from_millis(1_000)).await;
    token.cancel();
    assert!(!task.await.unwrap());

    let events = drain(&mut rx);
    assert_eq!(events.len(), 3);
    assert!(!events.contains(&ScriptEvent::PipelineComplete(PipelineKind::Gathering)));
}
