use std::time::Duration;

use showcase_app_core::app_core::{AppStore, DemoCommand};
use showcase_app_core::domain::DemoState;
use showcase_app_core::kernel::DemoKernel;
use showcase_app_core::viewmodel::SubmitStatus;
use showcase_config::DemoTimings;
use showcase_core::{canned, DemoStep, Role, StageStatus, WorkflowStatus};
use tokio::time::Instant;

struct Harness {
    kernel: DemoKernel,
    origin: Instant,
}

impl Harness {
    fn mounted() -> Self {
        let mut kernel = DemoKernel::new(AppStore::default(), DemoTimings::default());
        let origin = Instant::now();
        kernel.dispatch(DemoCommand::Mount).unwrap();
        Self { kernel, origin }
    }

    /// Lets the paused clock run to `ms` after mount, then drains the queue.
    async fn at(&mut self, ms: u64) -> DemoState {
        tokio::time::sleep_until(self.origin + Duration::from_millis(ms)).await;
        self.kernel.tick();
        self.kernel.state()
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap()
    }
}

#[tokio::test(start_paused = true)]
async fn fresh_mount_walks_the_full_script() {
    let mut h = Harness::mounted();

    let s = h.at(1_999).await;
    assert_eq!(s.step(), DemoStep::Idle);
    assert!(h.kernel.view().messages.is_empty());
    assert_eq!(h.kernel.view().header.restart_label, "Start Demo");

    let s = h.at(2_001).await;
    assert_eq!(s.step(), DemoStep::UserTyping);
    assert!(s.query.active);
    assert!(s.query.value.is_empty());
    assert_eq!(h.kernel.view().header.restart_label, "Replay Demo");

    // first char at 3000, one more every 50ms
    let s = h.at(4_201).await;
    assert_eq!(s.query.value, &canned::QUERY_MESSAGE[..25]);
    let vm = h.kernel.view();
    assert_eq!(vm.input.value, s.query.value);
    assert!(vm.input.disabled);

    let s = h.at(6_301).await;
    assert_eq!(s.step(), DemoStep::Gathering);
    assert!(!s.query.active);
    assert!(s.query.value.is_empty());
    assert!(s.flags.show_user_message);
    let vm = h.kernel.view();
    assert!(vm.is_generating);
    assert_eq!(vm.input.status, SubmitStatus::Streaming);
    assert!(!vm.input.disabled);

    let s = h.at(10_301).await;
    assert_eq!(s.step(), DemoStep::Recommendation);
    assert!(s.gathering.is_complete());
    assert!(s.flags.gathering_complete);
    let vm = h.kernel.view();
    assert!(vm.disclosure.show_data_panel);
    assert!(!vm.disclosure.sidebar_expanded);
    assert_eq!(vm.input.status, SubmitStatus::Ready);

    let vm = {
        h.at(11_801).await;
        h.kernel.view()
    };
    assert!(vm.disclosure.sidebar_expanded);
    assert!(!vm.disclosure.show_feedback_stage);

    let s = h.at(14_301).await;
    assert_eq!(s.step(), DemoStep::Feedback);
    assert!(s.feedback_input.active);
    assert!(h.kernel.view().disclosure.show_feedback_stage);

    let s = h.at(26_399).await;
    assert_eq!(s.step(), DemoStep::Feedback);
    assert!(s.flags.show_feedback_processing);
    assert!(!s.flags.feedback_processing_complete);

    let s = h.at(26_401).await;
    assert_eq!(s.step(), DemoStep::Improved);
    assert!(s.is_settled());

    let vm = h.kernel.view();
    assert!(vm.disclosure.show_improved_recommendation);
    assert!(vm.analysis.is_improved());
    let ids: Vec<&str> = vm.messages.iter().map(|m| m.message.id.as_str()).collect();
    assert_eq!(ids, ["user-1", "ai-1", "user-2", "ai-2", "ai-3"]);
    assert!(vm.messages.iter().all(|m| !m.message.is_loading));
    assert_eq!(vm.messages[4].message.content, canned::FINAL_RESPONSE);
}

#[tokio::test(start_paused = true)]
async fn gathering_takes_four_seconds_and_never_overlaps_stages() {
    let mut h = Harness::mounted();

    let s = h.at(6_301).await;
    assert_eq!(s.gathering.status(0), Some(StageStatus::Connecting));
    assert_eq!(s.gathering.status(1), Some(StageStatus::Pending));
    let vm = h.kernel.view();
    let ai = &vm.messages[1];
    assert_eq!(ai.message.role, Role::Assistant);
    assert!(ai.message.is_loading);
    assert!(ai.sources.is_empty());

    let s = h.at(6_901).await;
    assert_eq!(s.gathering.status(0), Some(StageStatus::Complete));
    assert_eq!(s.gathering.status(1), Some(StageStatus::Pending));

    let s = h.at(7_101).await;
    assert_eq!(s.gathering.status(1), Some(StageStatus::Connecting));

    let mut t = 7_101;
    while t < 10_300 {
        let s = h.at(t).await;
        let connecting = s
            .gathering
            .stages()
            .iter()
            .filter(|st| st.status == StageStatus::Connecting)
            .count();
        assert!(connecting <= 1, "two stages connecting at {t}ms");
        assert_eq!(s.step(), DemoStep::Gathering);
        t += 100;
    }

    let s = h.at(10_301).await;
    assert_eq!(s.step(), DemoStep::Recommendation);
    let vm = h.kernel.view();
    let ai = &vm.messages[1];
    assert!(!ai.message.is_loading);
    assert!(ai.message.content.ends_with(canned::ANALYSIS_COMPLETE_NOTE));
    assert_eq!(ai.sources.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn steps_never_decrease_during_a_forward_run() {
    let mut h = Harness::mounted();

    let mut seen = vec![DemoStep::Idle];
    for ms in (0..=27_000).step_by(50) {
        let step = h.at(ms).await.step();
        if seen.last() != Some(&step) {
            seen.push(step);
        }
    }

    assert_eq!(seen, DemoStep::ALL.to_vec());
}

#[tokio::test(start_paused = true)]
async fn restart_mid_gathering_discards_the_old_run() {
    let mut h = Harness::mounted();

    let before = h.at(8_000).await;
    assert_eq!(before.step(), DemoStep::Gathering);
    assert!(before.gathering.completed_count() > 0);

    h.kernel.dispatch(DemoCommand::Restart).unwrap();
    let restarted = h.kernel.state();
    assert_ne!(restarted.run_id, before.run_id);
    assert_eq!(restarted.step(), DemoStep::Idle);
    assert!(restarted.gathering.is_untouched());
    assert!(restarted.feedback.is_untouched());
    assert_eq!(restarted.flags, Default::default());
    assert!(h.kernel.view().messages.is_empty());
    assert!(!h.kernel.view().disclosure.show_data_panel);

    let base = h.now_ms();

    let s = h.at(base + 999).await;
    assert_eq!(s.step(), DemoStep::Idle);
    assert!(s.gathering.is_untouched());

    let s = h.at(base + 1_001).await;
    assert_eq!(s.step(), DemoStep::UserTyping);
    assert!(s.gathering.is_untouched());

    // restart lead is 1000ms instead of 2000ms, the rest is unchanged
    let s = h.at(base + 5_301).await;
    assert_eq!(s.step(), DemoStep::Gathering);
    let s = h.at(base + 25_401).await;
    assert_eq!(s.step(), DemoStep::Improved);
}

#[tokio::test(start_paused = true)]
async fn restart_twice_is_the_same_as_once() {
    let mut h = Harness::mounted();
    h.at(15_000).await;

    h.kernel.dispatch(DemoCommand::Restart).unwrap();
    h.kernel.dispatch(DemoCommand::Restart).unwrap();
    let s = h.kernel.state();
    let fresh = DemoState::initial(s.workflow.clone(), s.run_id);
    assert_eq!(s, fresh);

    let base = h.now_ms();
    let s = h.at(base + 1_000 + 1_000 + 50 * 9 + 1).await;
    assert_eq!(s.query.value, &canned::QUERY_MESSAGE[..10]);
}

#[tokio::test(start_paused = true)]
async fn coming_soon_workflow_shows_a_single_system_message() {
    let mut h = Harness::mounted();
    h.at(3_000).await;

    h.kernel.dispatch(DemoCommand::SelectWorkflow(8)).unwrap();
    let s = h.kernel.state();
    assert_eq!(s.workflow.id, 8);
    assert_eq!(s.workflow.status, WorkflowStatus::ComingSoon);
    assert_eq!(s.step(), DemoStep::Idle);
    let vm = h.kernel.view();
    assert!(vm.messages.is_empty());
    assert_eq!(vm.suggestions.len(), 3);
    assert!(vm.workflows.iter().any(|w| w.id == 8 && w.selected));

    let base = h.now_ms();
    let s = h.at(base + 1_001).await;
    assert_eq!(s.step(), DemoStep::UserTyping);
    assert!(s.is_settled());

    let s = h.at(base + 30_000).await;
    assert_eq!(s.step(), DemoStep::UserTyping);
    assert!(!s.query.active);

    let vm = h.kernel.view();
    assert_eq!(vm.messages.len(), 1);
    let msg = &vm.messages[0].message;
    assert_eq!(msg.role, Role::System);
    assert!(msg.content.starts_with("Email Marketing workflow is coming soon!"));
    assert!(msg.content.ends_with(canned::BETA_INVITE));
    assert!(vm.suggestions.is_empty());
    assert!(!vm.analysis.is_improved());
}

#[tokio::test(start_paused = true)]
async fn selecting_an_unknown_workflow_changes_nothing() {
    let mut h = Harness::mounted();
    let before = h.at(4_000).await;

    h.kernel.dispatch(DemoCommand::SelectWorkflow(42)).unwrap();
    assert_eq!(h.kernel.state().run_id, before.run_id);

    let s = h.at(6_301).await;
    assert_eq!(s.step(), DemoStep::Gathering);
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_the_script() {
    let mut h = Harness::mounted();
    h.at(3_000).await;

    h.kernel.dispatch(DemoCommand::Unmount).unwrap();
    let s = h.kernel.state();
    assert_eq!(s.run_id, None);
    assert_eq!(s.step(), DemoStep::Idle);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(h.kernel.tick(), 0);
    assert_eq!(h.kernel.state().step(), DemoStep::Idle);
}
