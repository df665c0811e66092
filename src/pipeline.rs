//! Two-stage agent pipeline.
//!
//! A fixed sequential flow: Analyze, then Compose. No branching, no retry,
//! no parallelism, no shared memory between stages beyond the analysis text
//! that is threaded into the writing task. Failure of either stage is fatal
//! to the whole pipeline; the Compose stage is never invoked when Analyze
//! fails.

use crate::agents::{AgentSpec, TaskSpec};
use crate::llm::ChatModel;
use crate::Result;

/// Run one stage: one agent, one task, one model call.
pub async fn run_stage(chat: &dyn ChatModel, agent: &AgentSpec, task: &TaskSpec) -> Result<String> {
    chat.generate(&agent.system_prompt(), &task.instruction())
        .await
}

/// Run the full pipeline for a topic, optionally augmented with retrieved
/// context. Returns the Compose stage's free-text answer.
pub async fn run_pipeline(
    chat: &dyn ChatModel,
    topic: &str,
    context: Option<&str>,
    max_context_chars: usize,
) -> Result<String> {
    let model = chat.model_name();

    // Analyze
    let researcher = AgentSpec::researcher(topic, model);
    let analysis = TaskSpec::analysis(topic, context, max_context_chars);
    let findings = run_stage(chat, &researcher, &analysis).await?;

    // Compose
    let writer = AgentSpec::writer(topic, model);
    let writing = TaskSpec::writing(topic, &findings);
    run_stage(chat, &writer, &writing).await
}
