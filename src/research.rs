//! Research stage: fixed findings templates keyed by the topic.
//!
//! No searching happens here. The "research" output is a fully populated
//! record of topic-interpolated template text, so downstream stages never
//! need a fallback value.

use serde::{Deserialize, Serialize};

use crate::utilities::string_utils::{interpolate, interpolate_all, topic_inputs};

const OVERVIEW: &str =
    "Comprehensive analysis of {topic} reveals significant market dynamics and strategic opportunities";

const CURRENT_TRENDS: [&str; 4] = [
    "Emerging trends in {topic} show rapid evolution and adoption",
    "Market leaders are investing heavily in {topic} development",
    "Consumer demand for {topic} solutions is accelerating",
    "Technology integration is driving {topic} innovation",
];

const MARKET_SIZE: &str = "The {topic} market represents substantial economic value";
const MARKET_GROWTH_RATE: &str = "Year-over-year growth in {topic} exceeds industry averages";
const MARKET_KEY_PLAYERS: &str = "Major organizations leading {topic} implementation";
const MARKET_REGIONAL_INSIGHTS: &str = "Global adoption of {topic} varies by region and sector";

const CHALLENGES: [&str; 4] = [
    "Implementation barriers in {topic} require strategic planning",
    "Resource allocation for {topic} initiatives needs optimization",
    "Regulatory considerations affect {topic} deployment",
    "Skills gap in {topic} expertise impacts adoption rates",
];

const OPPORTUNITIES: [&str; 4] = [
    "Untapped potential in {topic} creates competitive advantages",
    "Innovation in {topic} opens new market segments",
    "Strategic partnerships can accelerate {topic} success",
    "Investment in {topic} capabilities drives long-term value",
];

const CUSTOM_FOCUS: &str = "Specialized research focus on: {requirements}";

const REQUIREMENT_ANALYSIS: [&str; 3] = [
    "Detailed analysis of {requirements} within {topic} context",
    "Strategic implications of {requirements} for {topic} implementation",
    "Best practices for {requirements} in {topic} scenarios",
];

/// Market-level findings produced by the research stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    /// Market size statement.
    pub size: String,
    /// Growth trajectory statement.
    pub growth_rate: String,
    /// Leading adopters statement.
    pub key_players: String,
    /// Regional adoption statement.
    pub regional_insights: String,
}

/// Findings produced by the research stage.
///
/// Every field is populated by [`ResearchFindings::conduct`]; slide assembly
/// never needs a fallback list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchFindings {
    /// One-line summary of the topic landscape.
    pub overview: String,
    /// Current market trends.
    pub current_trends: Vec<String>,
    /// Market-level figures.
    pub market_data: MarketData,
    /// Adoption challenges.
    pub challenges: Vec<String>,
    /// Growth opportunities.
    pub opportunities: Vec<String>,
    /// Present when the caller supplied custom requirements.
    pub custom_focus: Option<String>,
    /// Requirement-specific findings; empty without custom requirements.
    pub requirement_analysis: Vec<String>,
}

impl ResearchFindings {
    /// Produce the findings for a topic.
    ///
    /// Pure transformation: identical inputs yield identical findings.
    pub fn conduct(topic: &str, requirements: &str) -> Self {
        let inputs = topic_inputs(topic, requirements);
        let has_requirements = !requirements.trim().is_empty();

        Self {
            overview: interpolate(OVERVIEW, &inputs),
            current_trends: interpolate_all(&CURRENT_TRENDS, &inputs),
            market_data: MarketData {
                size: interpolate(MARKET_SIZE, &inputs),
                growth_rate: interpolate(MARKET_GROWTH_RATE, &inputs),
                key_players: interpolate(MARKET_KEY_PLAYERS, &inputs),
                regional_insights: interpolate(MARKET_REGIONAL_INSIGHTS, &inputs),
            },
            challenges: interpolate_all(&CHALLENGES, &inputs),
            opportunities: interpolate_all(&OPPORTUNITIES, &inputs),
            custom_focus: has_requirements.then(|| interpolate(CUSTOM_FOCUS, &inputs)),
            requirement_analysis: if has_requirements {
                interpolate_all(&REQUIREMENT_ANALYSIS, &inputs)
            } else {
                Vec::new()
            },
        }
    }
}
