//! Task configuration records for the presentation pipeline.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use crate::utilities::string_utils::interpolate;

/// A unit of work description assigned to an agent role.
///
/// Tasks carry no executor: the pipeline stages run as plain function calls,
/// and the task records describe what each stage is responsible for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: Uuid,
    /// Optional name for the task.
    pub name: Option<String>,
    /// Descriptive text detailing the task's purpose.
    pub description: String,
    /// Clear definition of the expected outcome.
    pub expected_output: String,
    /// Role of the agent responsible for the task.
    pub agent: Option<String>,
    /// Ids of upstream tasks providing context.
    pub context: Vec<Uuid>,
}

impl Task {
    /// Create a new Task with required fields.
    pub fn new(description: String, expected_output: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            description,
            expected_output,
            agent: None,
            context: Vec::new(),
        }
    }

    /// Assign the task to an agent role.
    pub fn with_agent(mut self, role: &str) -> Self {
        self.agent = Some(role.to_string());
        self
    }

    /// Record upstream tasks whose output this task builds on.
    pub fn with_context(mut self, context: Vec<Uuid>) -> Self {
        self.context = context;
        self
    }

    /// Interpolate `{placeholder}` inputs into the description and expected
    /// output.
    pub fn interpolate_inputs(&mut self, inputs: &HashMap<String, String>) {
        self.description = interpolate(&self.description, inputs);
        self.expected_output = interpolate(&self.expected_output, inputs);
    }

    /// Compute the key property (MD5 hash of description|expected_output).
    pub fn key(&self) -> String {
        let source = format!("{}|{}", self.description, self.expected_output);
        let mut hasher = Md5::new();
        hasher.update(source.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(description={}, expected_output={})",
            self.description, self.expected_output
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::string_utils::topic_inputs;

    #[test]
    fn test_interpolate_inputs_replaces_placeholders() {
        let mut task = Task::new(
            "Research and gather information about: {topic}".to_string(),
            "Structured findings".to_string(),
        );
        task.interpolate_inputs(&topic_inputs("Cloud Migration", ""));
        assert_eq!(
            task.description,
            "Research and gather information about: Cloud Migration"
        );
    }

    #[test]
    fn test_key_ignores_identity() {
        let a = Task::new("desc".to_string(), "out".to_string());
        let b = Task::new("desc".to_string(), "out".to_string());
        assert_ne!(a.id, b.id);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_key_changes_with_description() {
        let a = Task::new("desc".to_string(), "out".to_string());
        let b = Task::new("other".to_string(), "out".to_string());
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_with_agent_and_context() {
        let upstream = Task::new("research".to_string(), "findings".to_string());
        let task = Task::new("analyze".to_string(), "insights".to_string())
            .with_agent("Content Analyst")
            .with_context(vec![upstream.id]);
        assert_eq!(task.agent.as_deref(), Some("Content Analyst"));
        assert_eq!(task.context, vec![upstream.id]);
    }
}
