//! Decision Loop
//!
//! Drives one pass at a time: build the prompt from the objective, the
//! memory transcript, and the tool descriptions; ask the gateway;
//! classify the response; dispatch a tool if one was requested. The
//! loop ends when the model answers, gives up, or the pass budget runs
//! out.

use std::sync::Arc;

use crate::decision::{self, Decision};
use crate::error::Result;
use crate::memory::Memory;
use crate::message::Message;
use crate::provider::{GenerationOptions, LlmProvider};
use crate::tool::ToolRegistry;

/// Fixed instruction persona sent as the system turn of every request.
pub const SYSTEM_PERSONA: &str =
    "You're a helpful assistant. Carefully follow the user's instructions.";

/// Agent configuration
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Pass budget ceiling. The counter is compared with `>` after the
    /// terminal check, so a ceiling of 2 allows at most 3 passes and an
    /// answer on the 3rd pass still wins.
    pub iteration_ceiling: usize,

    /// Generation options for every gateway call
    pub generation: GenerationOptions,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            iteration_ceiling: 2,
            generation: GenerationOptions::default(),
        }
    }
}

/// Why a run stopped
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The model produced a final answer; carries the full answer text
    Answered(String),

    /// The model decided no available tool could help
    CannotAnswer,

    /// The pass budget ran out before a terminal response
    LimitReached,
}

/// Result of a completed run
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Terminal outcome
    pub outcome: RunOutcome,

    /// Full transcript accumulated over the run
    pub memory: Memory,

    /// Number of passes performed
    pub iterations: usize,
}

/// The main Agent struct
pub struct Agent {
    provider: Arc<dyn LlmProvider>,
    tools: Arc<ToolRegistry>,
    config: AgentConfig,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Agent {
    /// Create a new agent
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        tools: Arc<ToolRegistry>,
        config: AgentConfig,
    ) -> Self {
        Self {
            provider,
            tools,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(provider: Arc<dyn LlmProvider>, tools: Arc<ToolRegistry>) -> Self {
        Self::new(provider, tools, AgentConfig::default())
    }

    /// Run the loop for one objective.
    ///
    /// Gateway failures abort the run through `?`. Everything else
    /// (unknown tools, handler failures, unrecognized responses) costs
    /// a pass and continues.
    pub async fn run(&self, objective: &str) -> Result<RunReport> {
        let mut memory = Memory::new();
        let mut iterations = 0usize;

        loop {
            let prompt = self.build_prompt(objective, &memory);
            let messages = [Message::system(SYSTEM_PERSONA), Message::user(prompt)];

            let completion = self
                .provider
                .complete(&messages, &self.config.generation)
                .await?;
            let response = completion.content;
            iterations += 1;

            match decision::classify(&response) {
                Decision::FinalAnswer(answer) => {
                    memory.record_answer(&answer);
                    tracing::info!(passes = iterations, "objective answered");
                    return Ok(RunReport {
                        outcome: RunOutcome::Answered(answer),
                        memory,
                        iterations,
                    });
                }
                Decision::CannotAnswer => {
                    memory.record_answer(decision::CANNOT_ANSWER_MARKER);
                    tracing::info!(passes = iterations, "model gave up on the objective");
                    return Ok(RunReport {
                        outcome: RunOutcome::CannotAnswer,
                        memory,
                        iterations,
                    });
                }
                Decision::ToolInvocation { tool, parameter } => {
                    tracing::info!(tool = %tool, pass = iterations, "model requested tool");
                    memory.record_thought(&response);

                    let observation = self.tools.dispatch(&tool, &parameter).await;
                    tracing::debug!(tool = %tool, observation = %observation, "tool observation");
                    memory.record_observation(&observation);
                }
                Decision::Malformed(text) => {
                    tracing::warn!(
                        pass = iterations,
                        response = %text,
                        "unrecognized response format, pass wasted"
                    );
                }
            }

            if iterations > self.config.iteration_ceiling {
                tracing::info!(passes = iterations, "pass budget exhausted");
                return Ok(RunReport {
                    outcome: RunOutcome::LimitReached,
                    memory,
                    iterations,
                });
            }
        }
    }

    /// Assemble the prompt for one pass
    fn build_prompt(&self, objective: &str, memory: &Memory) -> String {
        format!(
            "Determine if the following memory is enough to answer the user's objective. \
             Your past actions are stored in the memory for reference. \
             If it is enough, answer the question in the format: 'FINAL ANSWER: <answer>'. \
             If the memory is not enough, you can use a tool in the available tools section \
             to get more information. When using a tool you should use this format: \
             'USE: <tool name> <how to use it>'. If no tool can help you achieve the user's \
             objective, then answer 'FINAL: CANNOT ANSWER'.\n\
             \n\
             ```Objective\n\
             Answer: {objective}\n\
             ```\n\
             \n\
             ```Memory\n\
             {transcript}\n\
             ```\n\
             \n\
             ```Available Tools\n\
             {tools}```\n",
            objective = objective,
            transcript = memory.transcript(),
            tools = self.tools.describe_for_prompt(),
        )
    }

    /// Get the tool registry
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Get configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

/// Builder for Agent configuration
pub struct AgentBuilder {
    provider: Option<Arc<dyn LlmProvider>>,
    tools: ToolRegistry,
    config: AgentConfig,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            tools: ToolRegistry::new(),
            config: AgentConfig::default(),
        }
    }

    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn tool<T: crate::tool::Tool + 'static>(mut self, tool: T) -> Self {
        self.tools.register(tool);
        self
    }

    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.generation.model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.generation.temperature = temperature;
        self
    }

    pub fn iteration_ceiling(mut self, ceiling: usize) -> Self {
        self.config.iteration_ceiling = ceiling;
        self
    }

    pub fn build(self) -> Result<Agent> {
        let provider = self
            .provider
            .ok_or_else(|| crate::error::AgentError::Config("Provider is required".into()))?;

        Ok(Agent::new(provider, Arc::new(self.tools), self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgentError;
    use crate::provider::Completion;
    use crate::tool::{TOOL_NOT_FOUND, Tool};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that replays a fixed script of responses.
    struct ScriptedProvider {
        responses: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(responses: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.iter().rev().map(|s| s.to_string()).collect()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn complete(
            &self,
            _messages: &[Message],
            options: &GenerationOptions,
        ) -> Result<Completion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let content = self
                .responses
                .lock()
                .unwrap()
                .pop()
                .expect("script exhausted: loop ran an extra pass");
            Ok(Completion {
                content,
                model: options.model.clone(),
                usage: None,
            })
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }
    }

    /// Provider that always fails like a dead network.
    struct FailingProvider;

    #[async_trait]
    impl LlmProvider for FailingProvider {
        async fn complete(
            &self,
            _messages: &[Message],
            _options: &GenerationOptions,
        ) -> Result<Completion> {
            Err(AgentError::GatewayUnavailable("connection refused".into()))
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(false)
        }
    }

    struct CountingSearchTool {
        invocations: Arc<AtomicUsize>,
        reply: &'static str,
    }

    #[async_trait]
    impl Tool for CountingSearchTool {
        fn name(&self) -> &str {
            "searchArxiv"
        }

        fn description(&self) -> &str {
            "Search for scientific papers."
        }

        fn parameter_hint(&self) -> &str {
            "search key word"
        }

        async fn invoke(&self, _parameter: &str) -> Result<String> {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    fn agent_with(provider: Arc<dyn LlmProvider>, tools: ToolRegistry) -> Agent {
        Agent::with_defaults(provider, Arc::new(tools))
    }

    #[tokio::test]
    async fn test_first_pass_final_answer() {
        let provider = ScriptedProvider::new(&["FINAL ANSWER: ReAct is a prompting pattern."]);
        let agent = agent_with(provider.clone(), ToolRegistry::new());

        let report = agent.run("What is ReAct?").await.unwrap();

        assert_eq!(
            report.outcome,
            RunOutcome::Answered("FINAL ANSWER: ReAct is a prompting pattern.".to_string())
        );
        assert_eq!(report.iterations, 1);
        assert_eq!(provider.calls(), 1);
        assert_eq!(
            report.memory.entries(),
            ["FINAL ANSWER: ReAct is a prompting pattern."]
        );
    }

    #[tokio::test]
    async fn test_cannot_answer_terminates_in_one_pass() {
        let provider = ScriptedProvider::new(&["FINAL: CANNOT ANSWER"]);
        let agent = agent_with(provider.clone(), ToolRegistry::new());

        let report = agent.run("Unknowable question").await.unwrap();

        assert_eq!(report.outcome, RunOutcome::CannotAnswer);
        assert_eq!(report.iterations, 1);
        assert_eq!(report.memory.entries(), ["FINAL: CANNOT ANSWER"]);
    }

    #[tokio::test]
    async fn test_tool_pass_then_answer() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let mut tools = ToolRegistry::new();
        tools.register(CountingSearchTool {
            invocations: invocations.clone(),
            reply: "title: ReAct paper",
        });

        let provider = ScriptedProvider::new(&[
            "USE: searchArxiv for keyword ReAct",
            "FINAL ANSWER: Found it.",
        ]);
        let agent = agent_with(provider.clone(), tools);

        let report = agent.run("What is ReAct?").await.unwrap();

        assert_eq!(
            report.outcome,
            RunOutcome::Answered("FINAL ANSWER: Found it.".to_string())
        );
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
        assert_eq!(
            report.memory.entries(),
            [
                "THOUGHT: USE: searchArxiv for keyword ReAct",
                "OBSERVATION: title: ReAct paper",
                "FINAL ANSWER: Found it.",
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_feeds_sentinel_back() {
        let provider = ScriptedProvider::new(&[
            "USE: searchPubmed for keyword ReAct",
            "FINAL ANSWER: Giving the answer without that tool.",
        ]);
        let agent = agent_with(provider.clone(), ToolRegistry::new());

        let report = agent.run("What is ReAct?").await.unwrap();

        assert_eq!(
            report.memory.entries()[1],
            format!("OBSERVATION: {}", TOOL_NOT_FOUND)
        );
        assert!(matches!(report.outcome, RunOutcome::Answered(_)));
    }

    #[tokio::test]
    async fn test_budget_exhaustion_stops_after_three_passes() {
        // Three non-terminal responses; a 4th gateway call would panic
        // the scripted provider.
        let provider = ScriptedProvider::new(&[
            "Let me think about this.",
            "Still thinking.",
            "Hmm.",
        ]);
        let agent = agent_with(provider.clone(), ToolRegistry::new());

        let report = agent.run("What is ReAct?").await.unwrap();

        assert_eq!(report.outcome, RunOutcome::LimitReached);
        assert_eq!(report.iterations, 3);
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_third_pass_answer_beats_budget() {
        let provider = ScriptedProvider::new(&[
            "nonsense",
            "more nonsense",
            "FINAL ANSWER: just in time",
        ]);
        let agent = agent_with(provider.clone(), ToolRegistry::new());

        let report = agent.run("Anything").await.unwrap();

        assert_eq!(
            report.outcome,
            RunOutcome::Answered("FINAL ANSWER: just in time".to_string())
        );
        assert_eq!(report.iterations, 3);
    }

    #[tokio::test]
    async fn test_malformed_response_leaves_memory_untouched() {
        let provider =
            ScriptedProvider::new(&["I will just ramble here.", "FINAL ANSWER: done"]);
        let agent = agent_with(provider.clone(), ToolRegistry::new());

        let report = agent.run("Anything").await.unwrap();

        // Only the terminal answer was recorded.
        assert_eq!(report.memory.entries(), ["FINAL ANSWER: done"]);
        assert_eq!(report.iterations, 2);
    }

    #[tokio::test]
    async fn test_gateway_error_aborts_run() {
        let agent = agent_with(Arc::new(FailingProvider), ToolRegistry::new());

        let err = agent.run("Anything").await.unwrap_err();
        assert!(matches!(err, AgentError::GatewayUnavailable(_)));
    }

    #[tokio::test]
    async fn test_prompt_carries_objective_memory_and_tools() {
        let mut tools = ToolRegistry::new();
        tools.register(CountingSearchTool {
            invocations: Arc::new(AtomicUsize::new(0)),
            reply: "",
        });
        let agent = agent_with(ScriptedProvider::new(&[]), tools);

        let mut memory = Memory::new();
        memory.record_thought("USE: searchArxiv for agents");
        memory.record_observation("title: some paper");

        let prompt = agent.build_prompt("What is ReAct?", &memory);

        assert!(prompt.contains("Answer: What is ReAct?"));
        assert!(prompt.contains("THOUGHT: USE: searchArxiv for agents"));
        assert!(prompt.contains("OBSERVATION: title: some paper"));
        assert!(prompt.contains("- searchArxiv: Search for scientific papers."));
        assert!(prompt.contains("'FINAL ANSWER: <answer>'"));
        assert!(prompt.contains("'FINAL: CANNOT ANSWER'"));
    }

    #[test]
    fn test_builder_requires_provider() {
        let err = AgentBuilder::new().build().unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
    }

    #[tokio::test]
    async fn test_builder_wires_config() {
        let provider = ScriptedProvider::new(&["FINAL ANSWER: ok"]);
        let agent = AgentBuilder::new()
            .provider(provider)
            .model("test-model")
            .temperature(0.0)
            .iteration_ceiling(5)
            .build()
            .unwrap();

        assert_eq!(agent.config().generation.model, "test-model");
        assert_eq!(agent.config().iteration_ceiling, 5);

        let report = agent.run("Anything").await.unwrap();
        assert_eq!(report.iterations, 1);
    }
}
