//! Slide data model for generated presentation decks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of slide within a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideType {
    /// Opening slide carrying the presentation title.
    Title,
    /// Body slide with bullet content.
    Content,
    /// Final slide closing the presentation.
    Closing,
}

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideType::Title => write!(f, "title"),
            SlideType::Content => write!(f, "content"),
            SlideType::Closing => write!(f, "closing"),
        }
    }
}

/// Visual layout applied to a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    /// Centered title layout, used for opening and closing slides.
    Title,
    /// Standard bullet layout.
    Content,
    /// Bullet layout with a reserved image region.
    ContentWithImage,
}

impl fmt::Display for SlideLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideLayout::Title => write!(f, "title"),
            SlideLayout::Content => write!(f, "content"),
            SlideLayout::ContentWithImage => write!(f, "content_with_image"),
        }
    }
}

/// One page of a generated presentation.
///
/// Slides are constructed once by the assembly pipeline and serialized with
/// the wire names below; `slideType` keeps its upstream camelCase spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Position of the slide in the deck, starting at 0.
    pub id: usize,
    /// Slide title.
    pub title: String,
    /// Subtitle, present on title and closing slides only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Ordered bullet content. Never empty.
    pub content: Vec<String>,
    /// Kind of slide.
    #[serde(rename = "slideType")]
    pub slide_type: SlideType,
    /// Visual layout.
    pub layout: SlideLayout,
    /// Image references. No pipeline stage populates these.
    pub images: Vec<String>,
    /// Attribution to the simulated role that produced the slide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_note: Option<String>,
    /// Layout rationale attached by the design pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_notes: Option<String>,
    /// Visual treatment attached by the design pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_elements: Option<String>,
}

impl Slide {
    /// Create a new Slide with required fields.
    pub fn new(
        id: usize,
        title: String,
        content: Vec<String>,
        slide_type: SlideType,
        layout: SlideLayout,
    ) -> Self {
        Self {
            id,
            title,
            subtitle: None,
            content,
            slide_type,
            layout,
            images: Vec::new(),
            source_note: None,
            design_notes: None,
            visual_elements: None,
        }
    }

    /// Attach a subtitle.
    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    /// Attach the attribution note for the simulated role.
    pub fn with_source_note(mut self, note: &str) -> Self {
        self.source_note = Some(note.to_string());
        self
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Slide(id={}, type={}, title={})",
            self.id, self.slide_type, self.title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_serializes_wire_names() {
        let slide = Slide::new(
            0,
            "Overview".to_string(),
            vec!["First point".to_string()],
            SlideType::Content,
            SlideLayout::ContentWithImage,
        );
        let value = serde_json::to_value(&slide).unwrap();

        assert_eq!(value["slideType"], "content");
        assert_eq!(value["layout"], "content_with_image");
        assert_eq!(value["id"], 0);
        assert_eq!(value["images"], serde_json::json!([]));
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let slide = Slide::new(
            1,
            "Body".to_string(),
            vec!["Point".to_string()],
            SlideType::Content,
            SlideLayout::Content,
        );
        let value = serde_json::to_value(&slide).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("subtitle"));
        assert!(!object.contains_key("source_note"));
        assert!(!object.contains_key("design_notes"));
        assert!(!object.contains_key("visual_elements"));
    }

    #[test]
    fn test_subtitle_serialized_when_present() {
        let slide = Slide::new(
            0,
            "Deck".to_string(),
            vec!["Point".to_string()],
            SlideType::Title,
            SlideLayout::Title,
        )
        .with_subtitle("Professional Presentation");
        let value = serde_json::to_value(&slide).unwrap();

        assert_eq!(value["subtitle"], "Professional Presentation");
        assert_eq!(value["slideType"], "title");
    }

    #[test]
    fn test_slide_roundtrip() {
        let slide = Slide::new(
            2,
            "Risks".to_string(),
            vec!["Bullet".to_string()],
            SlideType::Content,
            SlideLayout::Content,
        )
        .with_source_note("Content Analyst - Risk Assessment");
        let json = serde_json::to_string(&slide).unwrap();
        let back: Slide = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slide);
    }
}
