use showcase_core::Workflow;

use crate::script::{RunId, ScriptEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainEvent {
    // Run lifecycle
    RunReset {
        run_id: Option<RunId>,
    },
    WorkflowSelected {
        workflow: Workflow,
        run_id: Option<RunId>,
    },

    // Script progress
    Script {
        run_id: RunId,
        ev: ScriptEvent,
    },
}
