use std::time::Duration;

use showcase_config::DemoTimings;
use showcase_core::{workflow, Workflow};
use tokio::sync::mpsc;

use crate::app_core::{AppStore, DemoCommand, DomainEvent};
use crate::domain::DemoState;
use crate::orchestrator::{ScriptOrchestrator, ScriptRun};
use crate::script::RunId;
use crate::viewmodel::{demo_vm, DemoVm};

pub struct DemoKernel {
    pub store: AppStore,
    orchestrator: ScriptOrchestrator,
    timings: DemoTimings,

    tx: mpsc::UnboundedSender<DomainEvent>,
    rx: mpsc::UnboundedReceiver<DomainEvent>,
}

impl DemoKernel {
    pub fn new(store: AppStore, timings: DemoTimings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            store,
            orchestrator: ScriptOrchestrator::new(tx.clone()),
            timings,
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: DemoCommand) -> anyhow::Result<()> {
        match cmd {
            DemoCommand::Mount => self.begin_run(None, self.timings.start_delay),

            DemoCommand::Restart => self.begin_run(None, self.timings.restart_delay),

            DemoCommand::SelectWorkflow(id) => match workflow::find(id) {
                Some(wf) => self.begin_run(Some(wf), self.timings.restart_delay),
                None => {
                    tracing::warn!(workflow = id, "ignoring selection of unknown workflow");
                    Ok(())
                }
            },

            DemoCommand::Unmount => {
                self.orchestrator.cancel();
                self.store.apply(DomainEvent::RunReset { run_id: None });
                Ok(())
            }
        }
    }

    /// Resets state under a fresh run id, then launches the script for it.
    /// The reset is applied before anything of the new run can be observed.
    fn begin_run(&mut self, workflow: Option<Workflow>, lead: Duration) -> anyhow::Result<()> {
        self.orchestrator.cancel();

        let run_id: RunId = uuid::Uuid::new_v4();
        let ev = match workflow {
            Some(workflow) => DomainEvent::WorkflowSelected {
                workflow,
                run_id: Some(run_id),
            },
            None => DomainEvent::RunReset {
                run_id: Some(run_id),
            },
        };
        self.store.apply(ev);

        let timings = self.timings;
        let run = self
            .store
            .with_state(|state| ScriptRun::for_state(state, run_id, lead, timings));
        self.orchestrator.start(run)
    }

    /// Applies every queued event of the current run; stale runs are dropped.
    /// Returns how many events were applied.
    pub fn tick(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(ev) = self.rx.try_recv() {
            if let DomainEvent::Script { run_id, .. } = &ev {
                let current = self.store.with_state(|s| s.run_id);
                if current != Some(*run_id) {
                    tracing::trace!(%run_id, "dropping event from stale run");
                    continue;
                }
            }
            self.store.apply(ev);
            applied += 1;
        }
        applied
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<DomainEvent> {
        self.tx.clone()
    }

    pub fn state(&self) -> DemoState {
        self.store.state()
    }

    pub fn view(&self) -> DemoVm {
        self.store.with_state(demo_vm)
    }
}
