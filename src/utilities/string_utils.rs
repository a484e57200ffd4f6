//! String utility functions for template interpolation.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// Interpolate `{placeholder}` variables in a template string.
///
/// Substitution is a single left-to-right pass: substituted text is never
/// re-scanned, and placeholders with no matching input are left untouched.
/// This is plain text replacement, not a templating engine; values are
/// inserted verbatim with no escaping.
///
/// # Arguments
/// * `template` - The string containing `{placeholder}` variables.
/// * `inputs` - Mapping from placeholder names to their values.
pub fn interpolate(template: &str, inputs: &HashMap<String, String>) -> String {
    if !template.contains('{') {
        return template.to_string();
    }

    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures| match inputs.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Interpolate a slice of templates, preserving order.
pub fn interpolate_all(templates: &[&str], inputs: &HashMap<String, String>) -> Vec<String> {
    templates
        .iter()
        .map(|template| interpolate(template, inputs))
        .collect()
}

/// Build the input mapping used by every template in this crate.
pub fn topic_inputs(topic: &str, requirements: &str) -> HashMap<String, String> {
    let mut inputs = HashMap::new();
    inputs.insert("topic".to_string(), topic.to_string());
    inputs.insert("requirements".to_string(), requirements.to_string());
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_basic() {
        let inputs = topic_inputs("Cloud Migration", "");
        let result = interpolate("Emerging trends in {topic} show rapid adoption", &inputs);
        assert_eq!(result, "Emerging trends in Cloud Migration show rapid adoption");
    }

    #[test]
    fn test_interpolate_unknown_placeholder_preserved() {
        let inputs = topic_inputs("AI", "");
        let result = interpolate("{topic} and {unknown}", &inputs);
        assert_eq!(result, "AI and {unknown}");
    }

    #[test]
    fn test_interpolate_does_not_rescan_substituted_text() {
        // A topic that itself looks like a placeholder must come through
        // verbatim instead of being expanded a second time.
        let inputs = topic_inputs("{requirements}", "secret");
        let result = interpolate("Focus on {topic}", &inputs);
        assert_eq!(result, "Focus on {requirements}");
    }

    #[test]
    fn test_interpolate_empty_value() {
        let inputs = topic_inputs("", "");
        assert_eq!(interpolate("Analysis of {topic}", &inputs), "Analysis of ");
    }

    #[test]
    fn test_interpolate_all_preserves_order() {
        let inputs = topic_inputs("IoT", "");
        let result = interpolate_all(&["First: {topic}", "Second: {topic}"], &inputs);
        assert_eq!(result, vec!["First: IoT", "Second: IoT"]);
    }
}
