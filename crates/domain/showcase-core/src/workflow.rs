use serde::{Deserialize, Serialize};

use crate::canned;

pub type WorkflowId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStatus {
    Active,
    Available,
    ComingSoon,
}

impl WorkflowStatus {
    pub fn badge(self) -> &'static str {
        match self {
            WorkflowStatus::Active => "Live Demo",
            WorkflowStatus::Available => "Available",
            WorkflowStatus::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: WorkflowId,
    pub title: String,
    pub description: String,
    pub status: WorkflowStatus,
}

impl Workflow {
    fn new(id: WorkflowId, title: &str, description: &str, status: WorkflowStatus) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status,
        }
    }

    /// Only active workflows carry the scripted conversation.
    pub fn is_active(&self) -> bool {
        self.status == WorkflowStatus::Active
    }

    pub fn content(&self) -> WorkflowContent {
        WorkflowContent::for_workflow(self)
    }
}

/// The ten most time-consuming marketing workflows, in display order.
pub fn catalog() -> Vec<Workflow> {
    use WorkflowStatus::*;
    vec![
        Workflow::new(
            1,
            "Budget Optimization",
            "Cross-platform budget allocation and ROAS optimization",
            Active,
        ),
        Workflow::new(
            2,
            "Performance Analysis",
            "Campaign performance reporting and attribution modeling",
            Available,
        ),
        Workflow::new(
            3,
            "Audience Management",
            "Customer segmentation and lookalike creation",
            Available,
        ),
        Workflow::new(
            4,
            "Creative Optimization",
            "A/B testing and creative fatigue detection",
            Available,
        ),
        Workflow::new(
            5,
            "Cross-Channel Coordination",
            "Message consistency and timing optimization",
            Available,
        ),
        Workflow::new(
            6,
            "Competitive Analysis",
            "Automated competitor tracking and pricing analysis",
            ComingSoon,
        ),
        Workflow::new(
            7,
            "Product Feed Optimization",
            "Shopping feed quality and SEO optimization",
            ComingSoon,
        ),
        Workflow::new(
            8,
            "Email Marketing",
            "Behavioral triggers and lifecycle campaigns",
            ComingSoon,
        ),
        Workflow::new(
            9,
            "Attribution Analysis",
            "Customer journey mapping and multi-touch analysis",
            ComingSoon,
        ),
        Workflow::new(
            10,
            "Customer Lifecycle",
            "Onboarding, retention, and churn prediction",
            ComingSoon,
        ),
    ]
}

pub fn find(id: WorkflowId) -> Option<Workflow> {
    catalog().into_iter().find(|w| w.id == id)
}

/// The workflow the demo opens on.
pub fn default_workflow() -> Workflow {
    catalog()
        .into_iter()
        .find(Workflow::is_active)
        .unwrap_or_else(|| Workflow::new(1, "Budget Optimization", "", WorkflowStatus::Active))
}

/// Read-only copy shown for a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowContent {
    pub user_message: String,
    pub ai_response: String,
    pub analysis_title: String,
    pub analysis_subtitle: String,
}

impl WorkflowContent {
    pub fn for_workflow(workflow: &Workflow) -> Self {
        if workflow.id == 1 {
            return Self {
                user_message: canned::QUERY_MESSAGE.to_string(),
                ai_response: canned::GATHERING_RESPONSE.to_string(),
                analysis_title: "Campaign Analysis".to_string(),
                analysis_subtitle: "T-Shirt Campaign Optimization".to_string(),
            };
        }

        Self {
            user_message: format!("Help me with {}", workflow.title.to_lowercase()),
            ai_response: format!(
                "{} workflow is coming soon! We're building this capability to help automate your most time-consuming marketing tasks.",
                workflow.title
            ),
            analysis_title: workflow.title.clone(),
            analysis_subtitle: "Workflow in Development".to_string(),
        }
    }
}
