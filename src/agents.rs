//! Declarative agent personas and task definitions.
//!
//! An [`AgentSpec`] is a plain role/goal/backstory configuration bundle used
//! to condition the model for one pipeline stage; a [`TaskSpec`] is one unit
//! of work assigned to it. Both are immutable after construction — retrieved
//! context and prior-stage findings enter through the constructors, never by
//! mutating an already-built spec. Delegation between agents does not exist:
//! a stage runs exactly one agent against exactly one task.

use crate::compose::compose_prompt;

/// Role configuration for one pipeline stage.
#[derive(Debug, Clone)]
pub struct AgentSpec {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    /// Chat model identifier this agent is pinned to.
    pub model: String,
}

impl AgentSpec {
    pub fn new(role: &str, goal: String, backstory: &str, model: &str) -> Self {
        Self {
            role: role.to_string(),
            goal,
            backstory: backstory.to_string(),
            model: model.to_string(),
        }
    }

    /// The analysis-stage persona: an admissions information analyst.
    pub fn researcher(topic: &str, model: &str) -> Self {
        Self::new(
            "Admissions Information Analyst",
            format!("Find accurate information about {}", topic),
            "You work at Universitas Pendidikan Ganesha (Undiksha) in Singaraja, \
             Bali, a city known for education. Your expertise lies in identifying \
             information about new-student admissions (PMB) at Undiksha. You have \
             a talent for dissecting complex data and presenting actionable \
             insights. If no relevant information exists, say that the \
             information was not found.",
            model,
        )
    }

    /// The compose-stage persona: an admissions information writer.
    pub fn writer(topic: &str, model: &str) -> Self {
        Self::new(
            "Admissions Information Writer",
            format!("Present Undiksha admissions information about {}", topic),
            "You are an experienced writer who turns complex information into \
             text that is easy to understand. You produce engaging, up-to-date \
             material about new-student admissions (PMB) at Undiksha. If no \
             relevant information exists, say that the information was not \
             found.",
            model,
        )
    }

    /// Render the system prompt that conditions the model for this role.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {}.\n\n{}\n\nYour goal: {}\nWork alone and do not hand \
             the task to anyone else.",
            self.role, self.backstory, self.goal
        )
    }
}

/// One unit of work: instruction plus expected-output description.
/// Consumed exactly once by the pipeline.
#[derive(Debug, Clone)]
pub struct TaskSpec {
    pub description: String,
    pub expected_output: String,
}

impl TaskSpec {
    /// The analysis task. When retrieved context is available it is folded
    /// into the instruction at construction time.
    pub fn analysis(topic: &str, context: Option<&str>, max_context_chars: usize) -> Self {
        let description = match context {
            Some(ctx) => compose_prompt(topic, ctx, max_context_chars),
            None => format!("Carry out a comprehensive analysis of {}.", topic),
        };
        Self {
            description,
            expected_output: "A complete analysis report in key bullet points".to_string(),
        }
    }

    /// The writing task, built from the analysis stage's findings.
    pub fn writing(topic: &str, findings: &str) -> Self {
        Self {
            description: format!(
                "Using the insights provided below, develop an informative piece \
                 highlighting the topic '{}'. Keep it accurate and easy to \
                 understand, and avoid convoluted wording.\n\nInsights:\n{}",
                topic, findings
            ),
            expected_output: "Admissions information highlighting the requested topic".to_string(),
        }
    }

    /// Render the full instruction handed to the model.
    pub fn instruction(&self) -> String {
        format!(
            "{}\n\nExpected output: {}",
            self.description, self.expected_output
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_carries_role_goal_backstory() {
        let agent = AgentSpec::researcher("jalur mandiri", "llama3");
        let prompt = agent.system_prompt();
        assert!(prompt.contains("Admissions Information Analyst"));
        assert!(prompt.contains("jalur mandiri"));
        assert!(prompt.contains("Undiksha"));
    }

    #[test]
    fn analysis_task_without_context_is_plain() {
        let task = TaskSpec::analysis("registration fees", None, 4000);
        assert!(task.description.starts_with("Carry out a comprehensive analysis"));
        assert!(!task.description.contains("Context:"));
    }

    #[test]
    fn analysis_task_threads_context_through_construction() {
        let task = TaskSpec::analysis("registration fees", Some("Fees are 300k IDR."), 4000);
        assert!(task.description.contains("Fees are 300k IDR."));
        assert!(task.description.contains("Question: registration fees"));
    }

    #[test]
    fn writing_task_embeds_findings_and_topic() {
        let task = TaskSpec::writing("dorm housing", "- dorms exist\n- apply early");
        assert!(task.description.contains("dorm housing"));
        assert!(task.description.contains("apply early"));
        assert!(task.instruction().contains("Expected output:"));
    }
}
