use serde::{Deserialize, Serialize};

pub mod analysis;
pub mod canned;
pub mod error;
pub mod stage;
pub mod step;
pub mod workflow;

pub use error::{StageError, StepError};
pub use stage::{PipelineKind, PipelineStage, StageIcon, StageList, StageStatus};
pub use step::DemoStep;
pub use workflow::{Workflow, WorkflowContent, WorkflowId, WorkflowStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One rendered chat entry. Lists of these are recomputed from state, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub is_loading: bool,
}

impl ChatMessage {
    pub fn new(id: &str, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            role,
            content: content.into(),
            timestamp: None,
            is_loading: false,
        }
    }

    pub fn at(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }
}
