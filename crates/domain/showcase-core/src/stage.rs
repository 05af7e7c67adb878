use serde::{Deserialize, Serialize};

use crate::error::StageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Pending,
    Connecting,
    Complete,
}

impl StageStatus {
    /// Marker used when a stage is written into chat text.
    pub fn marker(self) -> &'static str {
        match self {
            StageStatus::Complete => "✅",
            StageStatus::Connecting => "⏳",
            StageStatus::Pending => "⏸️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageIcon {
    Meta,
    Google,
    Shopify,
    Analysis,
    Insights,
}

/// The two stage pipelines of the script. They progress independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineKind {
    Gathering,
    FeedbackProcessing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub name: String,
    pub status: StageStatus,
    pub message: String,
    pub icon: StageIcon,
}

impl PipelineStage {
    pub fn pending(name: &str, message: &str, icon: StageIcon) -> Self {
        Self {
            name: name.to_string(),
            status: StageStatus::Pending,
            message: message.to_string(),
            icon,
        }
    }

    /// `"{marker} {name}: {message}"`
    pub fn line(&self) -> String {
        format!("{} {}: {}", self.status.marker(), self.name, self.message)
    }
}

/// Fixed, ordered stage sequence.
///
/// Statuses only move `pending -> connecting -> complete`, and a stage can only
/// start once every stage before it is complete. The stages themselves are not
/// reachable mutably from outside, so those rules hold for every caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StageList {
    stages: Vec<PipelineStage>,
}

impl StageList {
    pub fn new(stages: Vec<PipelineStage>) -> Self {
        let mut list = Self { stages };
        list.reset();
        list
    }

    pub fn for_kind(kind: PipelineKind) -> Self {
        match kind {
            PipelineKind::Gathering => Self::gathering(),
            PipelineKind::FeedbackProcessing => Self::feedback_processing(),
        }
    }

    pub fn gathering() -> Self {
        Self::new(vec![
            PipelineStage::pending("Meta Ads", "Connecting to Meta Ads API...", StageIcon::Meta),
            PipelineStage::pending(
                "Google Ads",
                "Retrieving Google Ads performance data...",
                StageIcon::Google,
            ),
            PipelineStage::pending(
                "Shopify",
                "Syncing Shopify product and sales data...",
                StageIcon::Shopify,
            ),
            PipelineStage::pending(
                "Analysis",
                "Analyzing cross-platform campaign performance...",
                StageIcon::Analysis,
            ),
            PipelineStage::pending(
                "Insights",
                "Generating optimization recommendations...",
                StageIcon::Insights,
            ),
        ])
    }

    pub fn feedback_processing() -> Self {
        Self::new(vec![
            PipelineStage::pending(
                "Feedback Analysis",
                "Analyzing your Valentine's Day campaign preferences...",
                StageIcon::Analysis,
            ),
            PipelineStage::pending(
                "Strategy Adjustment",
                "Adjusting brand vs generic campaign allocation...",
                StageIcon::Insights,
            ),
            PipelineStage::pending(
                "Seasonal Optimization",
                "Optimizing for gift-purchase behavior patterns...",
                StageIcon::Meta,
            ),
            PipelineStage::pending(
                "Budget Reallocation",
                "Recalculating optimal budget distribution...",
                StageIcon::Google,
            ),
        ])
    }

    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn status(&self, index: usize) -> Option<StageStatus> {
        self.stages.get(index).map(|s| s.status)
    }

    /// Every stage complete. An empty list counts as complete.
    pub fn is_complete(&self) -> bool {
        self.stages.iter().all(|s| s.status == StageStatus::Complete)
    }

    pub fn is_untouched(&self) -> bool {
        self.stages.iter().all(|s| s.status == StageStatus::Pending)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.stages
            .iter()
            .position(|s| s.status == StageStatus::Connecting)
    }

    pub fn completed_count(&self) -> usize {
        self.stages
            .iter()
            .filter(|s| s.status == StageStatus::Complete)
            .count()
    }

    /// `pending -> connecting` for `index`, once all earlier stages are complete.
    pub fn begin(&mut self, index: usize) -> Result<(), StageError> {
        let len = self.stages.len();
        let current = self
            .status(index)
            .ok_or(StageError::OutOfRange { index, len })?;
        if current != StageStatus::Pending {
            return Err(StageError::InvalidTransition {
                index,
                from: current,
                to: StageStatus::Connecting,
            });
        }
        if let Some(blocking) = self.stages[..index]
            .iter()
            .position(|s| s.status != StageStatus::Complete)
        {
            return Err(StageError::OutOfOrder { index, blocking });
        }
        self.stages[index].status = StageStatus::Connecting;
        Ok(())
    }

    /// `connecting -> complete` for `index`.
    pub fn complete(&mut self, index: usize) -> Result<(), StageError> {
        let len = self.stages.len();
        let current = self
            .status(index)
            .ok_or(StageError::OutOfRange { index, len })?;
        if current != StageStatus::Connecting {
            return Err(StageError::InvalidTransition {
                index,
                from: current,
                to: StageStatus::Complete,
            });
        }
        self.stages[index].status = StageStatus::Complete;
        Ok(())
    }

    pub fn apply(&mut self, index: usize, status: StageStatus) -> Result<(), StageError> {
        match status {
            StageStatus::Connecting => self.begin(index),
            StageStatus::Complete => self.complete(index),
            StageStatus::Pending => Err(StageError::InvalidTransition {
                index,
                from: self.status(index).ok_or(StageError::OutOfRange {
                    index,
                    len: self.stages.len(),
                })?,
                to: StageStatus::Pending,
            }),
        }
    }

    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.status = StageStatus::Pending;
        }
    }
}
