use showcase_core::WorkflowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoCommand {
    // Lifecycle
    Mount,
    Unmount,

    // User triggers
    Restart,
    SelectWorkflow(WorkflowId),
}
