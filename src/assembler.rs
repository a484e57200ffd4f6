//! Slide deck assembly pipeline.
//!
//! Four staged passes mirror the crew roles: research and analysis produce
//! fixed topic-keyed mappings, the organize pass lays out the slide
//! skeleton, and the design pass caps bullet counts and attaches layout
//! notes. Everything runs synchronously; output is deterministic for
//! identical inputs.

use crate::agent::Agent;
use crate::analysis::AnalysisInsights;
use crate::crew::Crew;
use crate::research::ResearchFindings;
use crate::slide::{Slide, SlideLayout, SlideType};
use crate::task::Task;
use crate::utilities::logger::Logger;
use crate::utilities::printer::PrinterColor;
use crate::utilities::string_utils::{interpolate_all, topic_inputs};

/// Maximum bullets kept on a slide after the design pass.
pub const MAX_CONTENT_BULLETS: usize = 6;

/// Longest requirements excerpt carried in the custom slide title.
const CUSTOM_TITLE_EXCERPT_CHARS: usize = 50;

/// Role names for the simulated crew.
const RESEARCHER_ROLE: &str = "Research Specialist";
const ANALYST_ROLE: &str = "Content Analyst";
const ORGANIZER_ROLE: &str = "Content Organizer";
const DESIGNER_ROLE: &str = "Presentation Designer";

/// Search tool label carried by the research agent. Never invoked.
const SEARCH_TOOL: &str = "DuckDuckGoSearchRun";

/// Focus description used when no custom requirements are supplied.
const DEFAULT_FOCUS: &str = "general overview, trends, challenges, opportunities";

const TITLE_SUBTITLE: &str = "Strategic Analysis & Implementation Framework";
const TITLE_POINTS: [&str; 4] = [
    "Research-Driven Insights and Recommendations",
    "Comprehensive Market Analysis",
    "Strategic Implementation Roadmap",
    "Data-Backed Decision Framework",
];

const EXECUTIVE_SUMMARY_POINTS: [&str; 4] = [
    "Key findings from comprehensive research and analysis",
    "Critical success factors and implementation considerations",
    "Recommended actions based on market intelligence",
    "Expected outcomes and value creation opportunities",
];

const IMPLEMENTATION_PHASES: [&str; 5] = [
    "Phase 1: Foundation & Strategy Development for {topic} (0-3 months)",
    "Phase 2: Pilot Implementation & Testing of {topic} solutions (3-6 months)",
    "Phase 3: Scaled Deployment & Optimization (6-12 months)",
    "Phase 4: Continuous Improvement & Innovation (12+ months)",
    "Success metrics and performance monitoring throughout all phases",
];

const CLOSING_TITLE: &str = "Next Steps & Discussion";
const CLOSING_SUBTITLE: &str = "Questions & Strategic Planning";
const CLOSING_POINTS: [&str; 5] = [
    "Strategic Discussion Points",
    "Implementation Planning Session",
    "Resource Allocation Decisions",
    "Timeline and Milestone Setting",
    "Follow-up Actions and Responsibilities",
];

/// Visual treatment attached to every slide by the design pass.
const VISUAL_ELEMENTS: &str = "Corporate template with consistent branding";

/// Coordinates the staged generation of a slide deck.
///
/// The crew's agents and tasks are configuration records labelling the
/// stages; `generate` runs the stages as a straight-line sequence.
#[derive(Debug, Clone)]
pub struct PresentationCrew {
    /// Logger receiving progress lines. Quiet by default.
    logger: Logger,
    /// Requested deck size. Recorded and logged; the skeleton is fixed.
    target_slide_count: usize,
}

impl Default for PresentationCrew {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationCrew {
    /// Create a crew with a quiet logger.
    pub fn new() -> Self {
        Self {
            logger: Logger::new(false),
            target_slide_count: 8,
        }
    }

    /// Replace the progress logger.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Record the caller's requested slide count.
    ///
    /// Accepted for interface compatibility: the template skeleton always
    /// decides the emitted deck size.
    pub fn with_target_slide_count(mut self, count: usize) -> Self {
        self.target_slide_count = count;
        self
    }

    /// Build the agent roster for a run.
    fn create_agents(&self) -> Vec<Agent> {
        vec![
            Agent::new(
                RESEARCHER_ROLE.to_string(),
                "Find accurate and relevant information about the given topic".to_string(),
                "Expert at finding and gathering information from various sources".to_string(),
            )
            .with_tools(vec![SEARCH_TOOL.to_string()]),
            Agent::new(
                ANALYST_ROLE.to_string(),
                "Analyze and synthesize information into meaningful insights".to_string(),
                "Expert at analyzing information and providing valuable insights".to_string(),
            ),
            Agent::new(
                ORGANIZER_ROLE.to_string(),
                "Structure the gathered information into a coherent presentation".to_string(),
                "Skilled at transforming raw information into compelling content that tells a story"
                    .to_string(),
            ),
            Agent::new(
                DESIGNER_ROLE.to_string(),
                "Create a professional and visually consistent slide deck".to_string(),
                "Experienced at balancing text, visuals, and layout for impactful slides"
                    .to_string(),
            ),
        ]
    }

    /// Build the task lineup, interpolating the run's inputs into each
    /// description.
    fn create_tasks(&self, topic: &str, requirements: &str) -> Vec<Task> {
        let mut inputs = topic_inputs(topic, requirements);
        let focus = if requirements.trim().is_empty() {
            DEFAULT_FOCUS.to_string()
        } else {
            requirements.to_string()
        };
        inputs.insert("focus".to_string(), focus);

        let research = Task::new(
            "Research and gather comprehensive information about: {topic}. Focus areas: {focus}"
                .to_string(),
            "Structured findings covering overview, trends, market data, challenges, and opportunities"
                .to_string(),
        )
        .with_agent(RESEARCHER_ROLE);

        let analysis = Task::new(
            "Analyze the research findings about: {topic} and extract key insights and strategic implications"
                .to_string(),
            "Key insights, recommendations, risks, and success factors".to_string(),
        )
        .with_agent(ANALYST_ROLE)
        .with_context(vec![research.id]);

        let organize = Task::new(
            "Create a logical presentation structure for {topic} and organize the findings into clear, engaging slides"
                .to_string(),
            "Structured slide content with titles, subtitles, and bullet points".to_string(),
        )
        .with_agent(ORGANIZER_ROLE)
        .with_context(vec![research.id, analysis.id]);

        let design = Task::new(
            "Finalize slide layouts and visual elements for the {topic} presentation".to_string(),
            "Final presentation with consistent formatting and layout notes".to_string(),
        )
        .with_agent(DESIGNER_ROLE)
        .with_context(vec![organize.id]);

        let mut tasks = vec![research, analysis, organize, design];
        for task in &mut tasks {
            task.interpolate_inputs(&inputs);
        }
        tasks
    }

    /// Run the full pipeline and return the finished deck.
    ///
    /// Never fails: any topic and requirements text, including empty
    /// strings, interpolates verbatim.
    pub fn generate(&self, topic: &str, requirements: &str) -> Vec<Slide> {
        let requirements_label = if requirements.trim().is_empty() {
            "general comprehensive analysis"
        } else {
            requirements
        };
        self.logger.log(
            "info",
            &format!("Starting presentation generation for '{}'", topic),
            None,
        );
        self.logger
            .log("info", &format!("Requirements: {}", requirements_label), None);
        log::debug!(
            "requested {} slides; the template skeleton decides the emitted count",
            self.target_slide_count
        );

        let agents = self.create_agents();
        let tasks = self.create_tasks(topic, requirements);
        let crew = Crew::new(agents, tasks);
        log::debug!("assembled {}", crew);

        self.logger.log(
            "info",
            &format!("{}: gathering findings for '{}'", RESEARCHER_ROLE, topic),
            Some(PrinterColor::Cyan),
        );
        let findings = ResearchFindings::conduct(topic, requirements);

        self.logger.log(
            "info",
            &format!("{}: extracting strategic insights", ANALYST_ROLE),
            Some(PrinterColor::Cyan),
        );
        let insights = AnalysisInsights::analyze(topic);

        self.logger.log(
            "info",
            &format!("{}: structuring the deck", ORGANIZER_ROLE),
            Some(PrinterColor::Cyan),
        );
        let slides = self.organize_slides(&findings, &insights, topic, requirements);

        self.logger.log(
            "info",
            &format!("{}: applying the layout pass", DESIGNER_ROLE),
            Some(PrinterColor::Cyan),
        );
        let deck = self.apply_design(slides);

        let summary = crew.kickoff();
        self.logger.log(
            "info",
            &format!("{} ({} slides)", summary, deck.len()),
            Some(PrinterColor::BoldGreen),
        );

        deck
    }

    /// Lay out the fixed slide skeleton.
    ///
    /// Ids are assigned from final positions, so they stay gapless whether
    /// or not the custom requirements slide is present.
    fn organize_slides(
        &self,
        findings: &ResearchFindings,
        insights: &AnalysisInsights,
        topic: &str,
        requirements: &str,
    ) -> Vec<Slide> {
        let inputs = topic_inputs(topic, requirements);
        let mut slides = Vec::new();

        slides.push(
            Slide::new(
                slides.len(),
                topic.to_string(),
                owned_bullets(&TITLE_POINTS),
                SlideType::Title,
                SlideLayout::Title,
            )
            .with_subtitle(TITLE_SUBTITLE)
            .with_source_note("Content Organizer - Presentation Structure"),
        );

        let mut executive_summary = vec![findings.overview.clone()];
        executive_summary.extend(owned_bullets(&EXECUTIVE_SUMMARY_POINTS));
        slides.push(
            Slide::new(
                slides.len(),
                "Executive Summary".to_string(),
                executive_summary,
                SlideType::Content,
                SlideLayout::Content,
            )
            .with_source_note("Research Specialist & Content Analyst Synthesis"),
        );

        slides.push(
            Slide::new(
                slides.len(),
                "Market Research & Current Trends".to_string(),
                findings.current_trends.clone(),
                SlideType::Content,
                SlideLayout::ContentWithImage,
            )
            .with_source_note("Research Specialist - Market Intelligence"),
        );

        slides.push(
            Slide::new(
                slides.len(),
                "Strategic Insights & Analysis".to_string(),
                insights.key_insights.clone(),
                SlideType::Content,
                SlideLayout::Content,
            )
            .with_source_note("Content Analyst - Strategic Intelligence"),
        );

        let mut opportunities = vec!["Opportunities:".to_string()];
        opportunities.extend(findings.opportunities.iter().cloned());
        opportunities.push("Key Challenges:".to_string());
        opportunities.extend(findings.challenges.iter().take(2).cloned());
        slides.push(
            Slide::new(
                slides.len(),
                "Opportunities & Challenges Analysis".to_string(),
                opportunities,
                SlideType::Content,
                SlideLayout::ContentWithImage,
            )
            .with_source_note("Research Specialist - Opportunity Assessment"),
        );

        slides.push(
            Slide::new(
                slides.len(),
                "Strategic Recommendations".to_string(),
                insights.strategic_recommendations.clone(),
                SlideType::Content,
                SlideLayout::Content,
            )
            .with_source_note("Content Analyst - Strategic Planning"),
        );

        slides.push(
            Slide::new(
                slides.len(),
                "Implementation Framework".to_string(),
                interpolate_all(&IMPLEMENTATION_PHASES, &inputs),
                SlideType::Content,
                SlideLayout::Content,
            )
            .with_source_note("Content Organizer - Implementation Planning"),
        );

        slides.push(
            Slide::new(
                slides.len(),
                "Risk Management & Mitigation".to_string(),
                insights.risk_assessment.clone(),
                SlideType::Content,
                SlideLayout::ContentWithImage,
            )
            .with_source_note("Content Analyst - Risk Assessment"),
        );

        slides.push(
            Slide::new(
                slides.len(),
                "Critical Success Factors".to_string(),
                insights.success_factors.clone(),
                SlideType::Content,
                SlideLayout::Content,
            )
            .with_source_note("Content Analyst - Success Framework"),
        );

        // The custom requirements slide sits immediately before the closing
        // slide.
        if !requirements.trim().is_empty() {
            slides.push(
                Slide::new(
                    slides.len(),
                    custom_requirements_title(requirements),
                    findings.requirement_analysis.clone(),
                    SlideType::Content,
                    SlideLayout::ContentWithImage,
                )
                .with_source_note("Research Specialist - Custom Requirements Analysis"),
            );
        }

        slides.push(
            Slide::new(
                slides.len(),
                CLOSING_TITLE.to_string(),
                owned_bullets(&CLOSING_POINTS),
                SlideType::Closing,
                SlideLayout::Title,
            )
            .with_subtitle(CLOSING_SUBTITLE)
            .with_source_note("Presentation Designer - Presentation Conclusion"),
        );

        slides
    }

    /// Normalize every slide: cap bullet counts and attach layout notes.
    fn apply_design(&self, slides: Vec<Slide>) -> Vec<Slide> {
        slides
            .into_iter()
            .map(|mut slide| {
                slide.content.truncate(MAX_CONTENT_BULLETS);
                slide.design_notes = Some(format!(
                    "Professional layout optimized for {} content",
                    slide.slide_type
                ));
                slide.visual_elements = Some(VISUAL_ELEMENTS.to_string());
                slide
            })
            .collect()
    }
}

/// Title of the custom requirements slide, carrying a bounded excerpt of the
/// requirements text. Truncation counts characters, not bytes.
fn custom_requirements_title(requirements: &str) -> String {
    let excerpt: String = requirements.chars().take(CUSTOM_TITLE_EXCERPT_CHARS).collect();
    format!("Custom Analysis: {}...", excerpt)
}

fn owned_bullets(points: &[&str]) -> Vec<String> {
    points.iter().map(|point| point.to_string()).collect()
}

/// Generate a deck with a default, quiet crew.
pub fn generate_presentation_content(topic: &str, requirements: &str) -> Vec<Slide> {
    PresentationCrew::new().generate(topic, requirements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_starts_with_title_and_ends_with_closing() {
        let deck = generate_presentation_content("Cloud Migration", "");
        assert_eq!(deck.first().unwrap().slide_type, SlideType::Title);
        assert_eq!(deck.last().unwrap().slide_type, SlideType::Closing);
    }

    #[test]
    fn test_ids_are_sequential_from_zero() {
        for requirements in ["", "data residency"] {
            let deck = generate_presentation_content("Cloud Migration", requirements);
            for (position, slide) in deck.iter().enumerate() {
                assert_eq!(slide.id, position);
            }
        }
    }

    #[test]
    fn test_title_slide_uses_topic_verbatim() {
        let deck = generate_presentation_content("Cloud Migration", "");
        assert_eq!(deck[0].title, "Cloud Migration");
        assert_eq!(deck[0].slide_type, SlideType::Title);
        assert_eq!(deck[0].subtitle.as_deref(), Some(TITLE_SUBTITLE));
    }

    #[test]
    fn test_deck_without_requirements_has_fixed_skeleton() {
        let deck = generate_presentation_content("Cloud Migration", "");
        assert_eq!(deck.len(), 10);
        assert!(deck.iter().all(|s| !s.title.starts_with("Custom Analysis")));
    }

    #[test]
    fn test_requirements_slide_sits_before_closing() {
        let deck = generate_presentation_content("Cloud Migration", "data residency");
        assert_eq!(deck.len(), 11);

        let mentioning: Vec<&Slide> = deck
            .iter()
            .filter(|slide| slide.content.iter().any(|b| b.contains("data residency")))
            .collect();
        assert_eq!(mentioning.len(), 1);
        assert_eq!(mentioning[0].id, deck.len() - 2);
        assert_eq!(deck[deck.len() - 1].slide_type, SlideType::Closing);
    }

    #[test]
    fn test_no_requirements_means_no_requirements_text() {
        let deck = generate_presentation_content("Cloud Migration", "");
        assert!(deck
            .iter()
            .all(|slide| slide.content.iter().all(|b| !b.contains("requirements"))));
    }

    #[test]
    fn test_bullet_counts_are_capped() {
        let deck = generate_presentation_content("Cloud Migration", "data residency");
        for slide in &deck {
            assert!(!slide.content.is_empty(), "{} has no content", slide);
            assert!(
                slide.content.len() <= MAX_CONTENT_BULLETS,
                "{} has {} bullets",
                slide,
                slide.content.len()
            );
        }

        // The opportunities slide assembles 8 bullets before the design pass
        // trims it.
        let opportunities = deck
            .iter()
            .find(|s| s.title == "Opportunities & Challenges Analysis")
            .unwrap();
        assert_eq!(opportunities.content.len(), MAX_CONTENT_BULLETS);
    }

    #[test]
    fn test_design_pass_attaches_notes_to_every_slide() {
        let deck = generate_presentation_content("Cloud Migration", "");
        for slide in &deck {
            let notes = slide.design_notes.as_deref().unwrap();
            assert!(notes.contains(&slide.slide_type.to_string()));
            assert_eq!(slide.visual_elements.as_deref(), Some(VISUAL_ELEMENTS));
            assert!(slide.source_note.is_some());
            assert!(slide.images.is_empty());
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let crew = PresentationCrew::new();
        let first = crew.generate("Cloud Migration", "data residency");
        let second = crew.generate("Cloud Migration", "data residency");
        assert_eq!(first, second);
    }

    #[test]
    fn test_target_slide_count_is_not_enforced() {
        let deck = PresentationCrew::new()
            .with_target_slide_count(3)
            .generate("Cloud Migration", "");
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn test_empty_topic_interpolates_as_empty() {
        let deck = generate_presentation_content("", "");
        assert_eq!(deck[0].title, "");
        assert_eq!(deck.len(), 10);
        assert!(deck.iter().all(|slide| !slide.content.is_empty()));
    }

    #[test]
    fn test_long_requirements_title_is_truncated() {
        let requirements = "r".repeat(80);
        let deck = generate_presentation_content("Topic", &requirements);
        let custom = deck
            .iter()
            .find(|s| s.title.starts_with("Custom Analysis"))
            .unwrap();
        assert_eq!(
            custom.title,
            format!("Custom Analysis: {}...", "r".repeat(50))
        );
    }

    #[test]
    fn test_whitespace_requirements_add_no_slide() {
        let deck = generate_presentation_content("Topic", "  \t ");
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn test_subtitles_only_on_title_and_closing() {
        let deck = generate_presentation_content("Topic", "req");
        for slide in &deck {
            match slide.slide_type {
                SlideType::Title | SlideType::Closing => assert!(slide.subtitle.is_some()),
                SlideType::Content => assert!(slide.subtitle.is_none()),
            }
        }
    }

    #[test]
    fn test_crew_lineup_matches_roles() {
        let crew = PresentationCrew::new();
        let agents = crew.create_agents();
        let roles: Vec<&str> = agents.iter().map(|a| a.role.as_str()).collect();
        assert_eq!(
            roles,
            vec![RESEARCHER_ROLE, ANALYST_ROLE, ORGANIZER_ROLE, DESIGNER_ROLE]
        );
        assert_eq!(agents[0].tools, vec![SEARCH_TOOL]);

        let tasks = crew.create_tasks("Cloud Migration", "");
        assert_eq!(tasks.len(), 4);
        assert!(tasks[0].description.contains("Cloud Migration"));
        assert!(tasks[0].description.contains(DEFAULT_FOCUS));
        assert_eq!(tasks[1].context, vec![tasks[0].id]);
        assert_eq!(tasks[2].context, vec![tasks[0].id, tasks[1].id]);
        assert_eq!(tasks[3].context, vec![tasks[2].id]);
    }

    #[test]
    fn test_topic_with_structural_characters_is_verbatim() {
        let topic = "Mergers \"&\" Acquisitions {2026}";
        let deck = generate_presentation_content(topic, "");
        assert_eq!(deck[0].title, topic);

        // Interpolation happens before serialization, so structural
        // characters survive the round trip.
        let json = serde_json::to_string_pretty(&deck).unwrap();
        let back: Vec<Slide> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deck);
    }
}
