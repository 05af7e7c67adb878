use showcase_app_core::domain::DemoState;
use showcase_app_core::viewmodel::demo_vm;
use showcase_app_core::Schedule;
use showcase_cli::render::{render_catalog, render_frame, render_schedule};
use showcase_config::DemoTimings;
use showcase_core::canned;
use showcase_core::workflow::default_workflow;
use showcase_core::DemoStep;

#[test]
fn idle_frame_shows_step_and_placeholder() {
    let vm = demo_vm(&DemoState::default());
    let frame = render_frame(&vm);

    assert!(frame.starts_with("== Step 0/5: Idle =="));
    assert!(frame.ends_with(&format!("> {}\n", canned::INPUT_PLACEHOLDER)));
    assert!(!frame.contains("Decision Framework"));
}

#[test]
fn recommendation_frame_includes_analysis_and_sources() {
    let mut state = DemoState::default();
    state.timeline.advance(DemoStep::Recommendation).unwrap();
    state.flags.show_user_message = true;
    state.flags.show_ai_response = true;
    state.flags.gathering_complete = true;
    for i in 0..state.gathering.len() {
        state.gathering.begin(i).unwrap();
        state.gathering.complete(i).unwrap();
    }

    let frame = render_frame(&demo_vm(&state));
    assert!(frame.contains("[you · just now]"));
    assert!(frame.contains("[assistant · 1 min ago]"));
    assert!(frame.contains("↳ "));
    assert!(frame.contains("Decision Framework"));
    assert!(frame.contains("Strategic Context"));
    assert!(!frame.contains("Context Learned"));
}

#[test]
fn catalog_lists_every_workflow_with_its_badge() {
    let vm = demo_vm(&DemoState::default());
    let text = render_catalog(&vm.workflows);

    assert_eq!(text.lines().count(), 10);
    assert_eq!(text.matches("[Coming Soon]").count(), 5);
    assert_eq!(text.matches("[Available]").count(), 4);
    assert!(text.lines().next().unwrap().starts_with("*  1. Budget Optimization"));
}

#[test]
fn schedule_prints_canonical_offsets() {
    let timings = DemoTimings::default();
    let schedule = Schedule::compute(&timings, &default_workflow(), timings.start_delay);
    let text = render_schedule(&schedule);

    assert!(text.contains("+2.000s  User starts typing (step 1)"));
    assert!(text.contains("+6.300s"));
    assert!(text.contains("+11.800s  Analytics sidebar expands"));
    assert!(text.contains("+26.400s  Improved recommendation (step 5)"));
}
