//! Crew record grouping the pipeline's agents and tasks.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::agent::Agent;
use crate::task::Task;

/// Represents the group of agents and the tasks they are labelled with.
///
/// The crew performs no scheduling or delegation: the pipeline runs as a
/// fixed sequence of function calls, and this record describes that lineup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crew {
    /// Optional name for the crew.
    pub name: Option<String>,
    /// Unique identifier for the crew instance.
    pub id: Uuid,
    /// Agents part of this crew.
    pub agents: Vec<Agent>,
    /// Tasks assigned to the crew.
    pub tasks: Vec<Task>,
    /// Verbosity for progress output.
    pub verbose: bool,
}

impl Crew {
    /// Create a new Crew from agents and tasks.
    pub fn new(agents: Vec<Agent>, tasks: Vec<Task>) -> Self {
        Self {
            name: Some("presentation-crew".to_string()),
            id: Uuid::new_v4(),
            agents,
            tasks,
            verbose: true,
        }
    }

    /// Compute the key property (MD5 hash over agent roles and task keys).
    pub fn key(&self) -> String {
        let mut source: Vec<String> = self.agents.iter().map(|a| a.role.clone()).collect();
        for task in &self.tasks {
            source.push(task.key());
        }
        let combined = source.join("|");
        let mut hasher = Md5::new();
        hasher.update(combined.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Mark the crew's workflow as complete and return the summary line.
    ///
    /// Content generation happens in the pipeline stages; kickoff only
    /// reports completion.
    pub fn kickoff(&self) -> String {
        log::debug!("crew {} kickoff (fingerprint {})", self.id, self.key());
        "Presentation content generated through the staged crew workflow".to_string()
    }
}

impl fmt::Display for Crew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Crew(id={}, number_of_agents={}, number_of_tasks={})",
            self.id,
            self.agents.len(),
            self.tasks.len()
        )
    }
}
