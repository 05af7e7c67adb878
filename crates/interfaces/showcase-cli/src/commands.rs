use std::time::Duration;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use showcase_app_core::app_core::{AppStore, DemoCommand};
use showcase_app_core::kernel::DemoKernel;
use showcase_app_core::viewmodel::{demo_vm, DemoVm};
use showcase_app_core::{DemoState, Schedule};
use showcase_config::{clamp_speed, DemoTimings};
use showcase_core::workflow::{self, Workflow, WorkflowId};
use showcase_core::DemoStep;
use tokio::time::{Instant, MissedTickBehavior};

use crate::render;

/// How often the player drains the event queue and redraws.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Time allowed past the expected end of the script before giving up.
const SETTLE_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub workflow: Option<WorkflowId>,
    pub speed: f64,
    pub transcript: Option<Utf8PathBuf>,
    pub restart_at: Option<Duration>,
    pub quiet: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            workflow: None,
            speed: 1.0,
            transcript: None,
            restart_at: None,
            quiet: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    pub elapsed_ms: u64,
    pub recorded_at: DateTime<Utc>,
    pub step: DemoStep,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub workflow: WorkflowId,
    pub speed: f64,
    pub started_at: DateTime<Utc>,
    pub restarted: bool,
    pub steps: Vec<TranscriptEntry>,
    pub final_view: DemoVm,
}

fn resolve_workflow(id: Option<WorkflowId>) -> Result<Workflow> {
    match id {
        None => Ok(workflow::default_workflow()),
        Some(id) => workflow::find(id).with_context(|| format!("Unknown workflow id {id}")),
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}

pub fn cmd_workflows() -> Result<()> {
    let vm = demo_vm(&DemoState::default());
    print!("{}", render::render_catalog(&vm.workflows));
    Ok(())
}

pub fn cmd_schedule(workflow: Option<WorkflowId>, speed: f64) -> Result<()> {
    let wf = resolve_workflow(workflow)?;
    let timings = DemoTimings::default().scaled(speed);
    let schedule = Schedule::compute(&timings, &wf, timings.start_delay);

    println!(":: Schedule for \"{}\" at {:.1}x", wf.title, clamp_speed(speed));
    print!("{}", render::render_schedule(&schedule));
    Ok(())
}

/// Plays the demo from mount until it settles, redrawing on every step change.
pub async fn cmd_play(opts: PlayOptions) -> Result<Transcript> {
    let wf = resolve_workflow(opts.workflow)?;
    let speed = clamp_speed(opts.speed);
    let timings = DemoTimings::default().scaled(speed);

    let expected = Schedule::compute(&timings, &wf, timings.start_delay).total();
    let budget = expected + opts.restart_at.unwrap_or_default() + SETTLE_GRACE;

    let mut kernel = DemoKernel::new(AppStore::default(), timings);
    let started = Instant::now();
    let started_at = Utc::now();
    kernel.dispatch(DemoCommand::Mount)?;
    if opts.workflow.is_some() {
        kernel.dispatch(DemoCommand::SelectWorkflow(wf.id))?;
    }

    let pb = if opts.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(u64::from(DemoStep::Improved.ordinal()))
    };
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:30.cyan/blue} {pos}/{len} {msg}")
            .context("Invalid progress template")?
            .progress_chars("=>-"),
    );

    let mut steps = Vec::new();
    let mut last_step = None;
    let mut restart_pending = opts.restart_at;
    let mut restarted = false;

    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        frames.tick().await;
        kernel.tick();

        if let Some(at) = restart_pending {
            if started.elapsed() >= at {
                tracing::debug!(elapsed_ms = elapsed_ms(started), "restarting demo");
                restart_pending = None;
                restarted = true;
                kernel.dispatch(DemoCommand::Restart)?;
                last_step = None;
            }
        }

        let vm = kernel.view();
        if last_step != Some(vm.step) {
            last_step = Some(vm.step);
            steps.push(TranscriptEntry {
                elapsed_ms: elapsed_ms(started),
                recorded_at: Utc::now(),
                step: vm.step,
                label: vm.step.label(),
            });
            pb.set_position(u64::from(vm.step.ordinal()));
            pb.set_message(vm.step.label());
            if !opts.quiet {
                pb.println(render::render_frame(&vm));
            }
        }

        if restart_pending.is_none() && kernel.state().is_settled() {
            break;
        }
        if started.elapsed() > budget {
            pb.abandon_with_message("Demo did not settle");
            anyhow::bail!("Demo did not settle within {budget:?}");
        }
    }

    let final_view = kernel.view();
    pb.finish_with_message("Demo complete");
    if !opts.quiet {
        println!("{}", render::render_frame(&final_view));
    }

    let transcript = Transcript {
        workflow: wf.id,
        speed,
        started_at,
        restarted,
        steps,
        final_view,
    };

    if let Some(path) = &opts.transcript {
        let json = serde_json::to_string_pretty(&transcript)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {path}"))?;
        if !opts.quiet {
            println!(":: Saved transcript to {path}");
        }
    }

    kernel.dispatch(DemoCommand::Unmount)?;
    Ok(transcript)
}
