//! Analysis stage: fixed insight templates keyed by the topic.

use serde::{Deserialize, Serialize};

use crate::utilities::string_utils::{interpolate_all, topic_inputs};

const KEY_INSIGHTS: [&str; 4] = [
    "Strategic positioning in {topic} requires comprehensive understanding of market dynamics",
    "Success in {topic} depends on balancing innovation with practical implementation",
    "Risk mitigation strategies are essential for {topic} initiatives",
    "Competitive advantage in {topic} comes from an integrated approach to challenges and opportunities",
];

const STRATEGIC_RECOMMENDATIONS: [&str; 4] = [
    "Develop a phased implementation strategy for {topic} adoption",
    "Invest in capability building and skills development for {topic}",
    "Establish partnerships to accelerate {topic} success",
    "Create a measurement framework to track {topic} performance",
];

const RISK_ASSESSMENT: [&str; 4] = [
    "Market volatility may impact {topic} investment returns",
    "Technology changes could affect {topic} solution relevance",
    "Competitive pressure requires an agile {topic} strategy",
    "Regulatory changes may influence {topic} implementation",
];

const SUCCESS_FACTORS: [&str; 4] = [
    "Leadership commitment drives {topic} transformation success",
    "Cross-functional collaboration enhances {topic} outcomes",
    "Continuous learning accelerates {topic} capability development",
    "Data-driven decision making optimizes {topic} performance",
];

/// Insights produced by the analysis stage.
///
/// Like the research findings, these are static templates keyed only by the
/// topic string; the stage exists to label the text with its simulated role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInsights {
    /// Headline strategic insights.
    pub key_insights: Vec<String>,
    /// Recommended actions.
    pub strategic_recommendations: Vec<String>,
    /// Identified risks.
    pub risk_assessment: Vec<String>,
    /// Conditions for success.
    pub success_factors: Vec<String>,
}

impl AnalysisInsights {
    /// Produce the insights for a topic.
    ///
    /// Pure transformation: identical inputs yield identical insights.
    pub fn analyze(topic: &str) -> Self {
        let inputs = topic_inputs(topic, "");

        Self {
            key_insights: interpolate_all(&KEY_INSIGHTS, &inputs),
            strategic_recommendations: interpolate_all(&STRATEGIC_RECOMMENDATIONS, &inputs),
            risk_assessment: interpolate_all(&RISK_ASSESSMENT, &inputs),
            success_factors: interpolate_all(&SUCCESS_FACTORS, &inputs),
        }
    }
}
