//! Fixed copy used by the scripted conversation.

pub const QUERY_MESSAGE: &str = "Optimize budget for my t-shirt campaigns this week";

pub const GATHERING_RESPONSE: &str =
    "Gathering relevant data from your platforms and analyzing market conditions...";

pub const GATHERING_PREFIX: &str = "I'll gather data from your connected platforms and analyze optimization opportunities for your t-shirt campaigns.";

pub const ANALYSIS_COMPLETE_NOTE: &str = "Data analysis complete! Check the analysis panel for detailed recommendations for your t-shirt campaigns.";

pub const FEEDBACK_MESSAGE: &str = "Great analysis! For Valentine's Day t-shirt campaigns, I'd prefer focusing more on brand campaigns since they convert better for gift purchases.";

pub const FEEDBACK_PREFIX: &str = "I'll incorporate your Valentine's Day insights and adjust the campaign strategy to prioritize brand campaigns for gift purchases.";

pub const FINAL_RESPONSE: &str = "Perfect! I've recalculated the optimization with your Valentine's Day insight for t-shirt campaigns. The refined strategy prioritizes brand campaigns and adjusts for seasonal gift buying behavior.";

pub const BETA_INVITE: &str = "Join our beta to get early access when this workflow is ready!";

pub const INPUT_PLACEHOLDER: &str = "Ask about your marketing data...";

pub const SUGGESTIONS: [&str; 3] = [
    "Analyze my Meta Ads performance",
    "Optimize Google Ads budget allocation",
    "Review cross-platform campaign ROI",
];

/// `(title, href)` pairs attached to finished assistant answers.
pub const SOURCES: [(&str, &str); 3] = [
    ("Campaign Performance Data", "https://docs.google.com/spreadsheets"),
    ("Google Analytics Insights", "https://analytics.google.com"),
    ("Google Ads Dashboard", "https://ads.google.com"),
];

pub const CONVERSATION_HISTORY: [&str; 7] = [
    "Budget Optimization Review",
    "Meta Ads Performance",
    "Google Ads Analysis",
    "Budget Reallocation",
    "Creative Performance",
    "Audience Insights",
    "Campaign Launch",
];
