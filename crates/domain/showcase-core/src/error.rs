use crate::stage::StageStatus;
use crate::step::DemoStep;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    #[error("stage index {index} out of range (len={len})")]
    OutOfRange { index: usize, len: usize },
    #[error("stage {index} cannot start before stage {blocking} completes")]
    OutOfOrder { index: usize, blocking: usize },
    #[error("stage {index} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        index: usize,
        from: StageStatus,
        to: StageStatus,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("no demo step with ordinal {0}")]
    InvalidOrdinal(u8),
    #[error("cannot move back from step {from} to step {to}")]
    Backward { from: DemoStep, to: DemoStep },
}
