//! Agent configuration records.
//!
//! Agents in this crate are labels for the fixed pipeline stages: each one
//! carries a role, a goal, and a backstory, and never schedules or delegates
//! anything. Tool names are stored as plain labels and never invoked.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A named role in the presentation crew.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier for the agent.
    pub id: Uuid,
    /// Role of the agent.
    pub role: String,
    /// Objective of the agent.
    pub goal: String,
    /// Backstory of the agent.
    pub backstory: String,
    /// Tool names at the agent's disposal, stored as labels.
    pub tools: Vec<String>,
    /// Verbose mode for the agent.
    pub verbose: bool,
}

impl Agent {
    /// Create a new Agent with required fields.
    pub fn new(role: String, goal: String, backstory: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            goal,
            backstory,
            tools: Vec::new(),
            verbose: true,
        }
    }

    /// Attach tool labels to the agent.
    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = tools;
        self
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent(role={}, goal={})", self.role, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_new_defaults() {
        let agent = Agent::new(
            "Research Specialist".to_string(),
            "Find relevant information".to_string(),
            "Expert at gathering information".to_string(),
        );
        assert!(agent.verbose);
        assert!(agent.tools.is_empty());
        assert_eq!(agent.role, "Research Specialist");
    }

    #[test]
    fn test_agent_with_tools() {
        let agent = Agent::new(
            "Research Specialist".to_string(),
            "Find relevant information".to_string(),
            "Expert at gathering information".to_string(),
        )
        .with_tools(vec!["DuckDuckGoSearchRun".to_string()]);
        assert_eq!(agent.tools, vec!["DuckDuckGoSearchRun"]);
    }

    #[test]
    fn test_agent_ids_are_unique() {
        let a = Agent::new("A".to_string(), "g".to_string(), "b".to_string());
        let b = Agent::new("A".to_string(), "g".to_string(), "b".to_string());
        assert_ne!(a.id, b.id);
    }
}
