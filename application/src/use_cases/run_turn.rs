//! Run Turn use case
//!
//! Drives one user message through the generator and then the evaluator,
//! applying the fallback policy when either call fails.

use crate::ports::llm_client::{EvaluatorClient, GeneratorClient};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use duo_domain::{
    Conversation, Fallback, GENERATOR_APOLOGY, PromptTemplate, Role, Stage, TurnOutcome,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for running a single generate → evaluate turn
///
/// The two calls are strictly sequential. Client errors never escape:
///
/// - generator failure: the apology text becomes the draft and is still
///   sent to the evaluator
/// - evaluator failure: the draft is used unchanged as the final answer
pub struct RunTurnUseCase<G: GeneratorClient + 'static, E: EvaluatorClient + 'static> {
    generator: Arc<G>,
    evaluator: Arc<E>,
}

impl<G: GeneratorClient + 'static, E: EvaluatorClient + 'static> RunTurnUseCase<G, E> {
    pub fn new(generator: Arc<G>, evaluator: Arc<E>) -> Self {
        Self {
            generator,
            evaluator,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, conversation: &mut Conversation, input: &str) -> TurnOutcome {
        self.execute_with_progress(conversation, input, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Appends exactly one user turn and one assistant turn, in that order.
    pub async fn execute_with_progress(
        &self,
        conversation: &mut Conversation,
        input: &str,
        progress: &dyn ProgressNotifier,
    ) -> TurnOutcome {
        info!("Starting turn ({} turns so far)", conversation.len());
        conversation.append(Role::User, input);

        let (initial_response, generator_ok) = self.stage_generate(input, progress).await;
        let (final_answer, evaluator_ok) = self.stage_evaluate(&initial_response, progress).await;

        let fallback = match (generator_ok, evaluator_ok) {
            (true, true) => Fallback::None,
            (false, true) => Fallback::GeneratorApology,
            (true, false) => Fallback::Unevaluated,
            (false, false) => Fallback::Both,
        };

        conversation.append(Role::Assistant, final_answer.as_str());
        debug!("Turn finished with fallback {:?}", fallback);

        TurnOutcome::new(input, initial_response, final_answer, fallback)
    }

    /// Stage 1: draft an answer. Returns the draft and whether the call succeeded.
    async fn stage_generate(&self, input: &str, progress: &dyn ProgressNotifier) -> (String, bool) {
        progress.on_stage_start(Stage::Generate, self.generator.model());

        let prompt = PromptTemplate::generator_prompt(input);
        match self.generator.generate(&prompt).await {
            Ok(generation) => {
                if generation.is_malformed() {
                    warn!(
                        "Generator {} returned an unexpected response shape",
                        self.generator.model()
                    );
                }
                progress.on_stage_complete(Stage::Generate, true);
                (generation.into_text(), true)
            }
            Err(e) => {
                warn!("Generator {} failed: {}", self.generator.model(), e);
                progress.on_stage_complete(Stage::Generate, false);
                (GENERATOR_APOLOGY.to_string(), false)
            }
        }
    }

    /// Stage 2: review the draft. Falls back to the draft itself on failure.
    async fn stage_evaluate(
        &self,
        initial_response: &str,
        progress: &dyn ProgressNotifier,
    ) -> (String, bool) {
        progress.on_stage_start(Stage::Evaluate, self.evaluator.model());

        let prompt = PromptTemplate::evaluator_prompt(initial_response);
        match self.evaluator.evaluate(&prompt).await {
            Ok(improved) => {
                progress.on_stage_complete(Stage::Evaluate, true);
                (improved, true)
            }
            Err(e) => {
                warn!(
                    "Evaluator {} failed, using draft as is: {}",
                    self.evaluator.model(),
                    e
                );
                progress.on_stage_complete(Stage::Evaluate, false);
                (initial_response.to_string(), false)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::llm_client::ClientError;
    use async_trait::async_trait;
    use duo_domain::{Generation, MALFORMED_RESPONSE_SENTINEL, Model, Turn};
    use std::sync::Mutex;

    // === Mock implementations ===

    pub(crate) struct MockGenerator {
        model: Model,
        response: Result<Generation, ClientError>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        pub(crate) fn answering(text: &str) -> Self {
            Self::with_response(Ok(Generation::Text(text.to_string())))
        }

        pub(crate) fn with_response(response: Result<Generation, ClientError>) -> Self {
            Self {
                model: Model::default_generator(),
                response,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GeneratorClient for MockGenerator {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn generate(&self, prompt: &str) -> Result<Generation, ClientError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.response.clone()
        }
    }

    pub(crate) enum EvaluatorBehavior {
        Answer(String),
        Fail(ClientError),
        /// Return the prompt it was given, to observe what reached it
        Echo,
    }

    pub(crate) struct MockEvaluator {
        model: Model,
        behavior: EvaluatorBehavior,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl MockEvaluator {
        pub(crate) fn answering(text: &str) -> Self {
            Self::with_behavior(EvaluatorBehavior::Answer(text.to_string()))
        }

        pub(crate) fn with_behavior(behavior: EvaluatorBehavior) -> Self {
            Self {
                model: Model::default_evaluator(),
                behavior,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl EvaluatorClient for MockEvaluator {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn evaluate(&self, prompt: &str) -> Result<String, ClientError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.behavior {
                EvaluatorBehavior::Answer(text) => Ok(text.clone()),
                EvaluatorBehavior::Fail(e) => Err(e.clone()),
                EvaluatorBehavior::Echo => Ok(prompt.to_string()),
            }
        }
    }

    struct RecordingProgress {
        events: Mutex<Vec<(Stage, Option<bool>)>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_stage_start(&self, stage: Stage, _model: &Model) {
            self.events.lock().unwrap().push((stage, None));
        }

        fn on_stage_complete(&self, stage: Stage, success: bool) {
            self.events.lock().unwrap().push((stage, Some(success)));
        }
    }

    fn status_error() -> ClientError {
        ClientError::Status {
            status: 500,
            body: "internal boom".to_string(),
        }
    }

    fn use_case(
        generator: MockGenerator,
        evaluator: MockEvaluator,
    ) -> (
        RunTurnUseCase<MockGenerator, MockEvaluator>,
        Arc<MockGenerator>,
        Arc<MockEvaluator>,
    ) {
        let generator = Arc::new(generator);
        let evaluator = Arc::new(evaluator);
        (
            RunTurnUseCase::new(generator.clone(), evaluator.clone()),
            generator,
            evaluator,
        )
    }

    #[tokio::test]
    async fn test_happy_path_records_user_then_assistant() {
        let (use_case, generator, evaluator) = use_case(
            MockGenerator::answering("Hola, ¿cómo estás?"),
            MockEvaluator::answering("¡Hola! ¿Cómo estás hoy?"),
        );
        let mut conversation = Conversation::new();

        let outcome = use_case.execute(&mut conversation, "hola").await;

        assert_eq!(
            conversation.snapshot(),
            &[Turn::user("hola"), Turn::assistant("¡Hola! ¿Cómo estás hoy?")]
        );
        assert_eq!(outcome.initial_response, "Hola, ¿cómo estás?");
        assert_eq!(outcome.final_answer, "¡Hola! ¿Cómo estás hoy?");
        assert_eq!(outcome.fallback, Fallback::None);

        assert_eq!(
            generator.prompts.lock().unwrap().as_slice(),
            &["Genera una respuesta detallada para: hola".to_string()]
        );
        assert_eq!(
            evaluator.prompts.lock().unwrap().as_slice(),
            &["Evalúa esta respuesta y implementa mejoras/optimizaciones: Hola, ¿cómo estás?"
                .to_string()]
        );
    }

    #[tokio::test]
    async fn test_generator_failure_sends_apology_to_evaluator() {
        let (use_case, _, evaluator) = use_case(
            MockGenerator::with_response(Err(status_error())),
            MockEvaluator::with_behavior(EvaluatorBehavior::Echo),
        );
        let mut conversation = Conversation::new();

        let outcome = use_case.execute(&mut conversation, "pregunta").await;

        assert_eq!(outcome.initial_response, GENERATOR_APOLOGY);
        assert_eq!(outcome.fallback, Fallback::GeneratorApology);
        assert_eq!(evaluator.calls(), 1);

        let assistant = conversation.last().unwrap();
        assert_eq!(assistant.role(), Role::Assistant);
        assert!(assistant.content().contains(GENERATOR_APOLOGY));
        assert!(!assistant.content().contains("internal boom"));
    }

    #[tokio::test]
    async fn test_evaluator_failure_keeps_draft_unchanged() {
        let (use_case, _, _) = use_case(
            MockGenerator::answering("borrador original"),
            MockEvaluator::with_behavior(EvaluatorBehavior::Fail(
                ClientError::MalformedResponse("missing choices".to_string()),
            )),
        );
        let mut conversation = Conversation::new();

        let outcome = use_case.execute(&mut conversation, "q").await;

        assert_eq!(outcome.final_answer, "borrador original");
        assert_eq!(outcome.fallback, Fallback::Unevaluated);
        assert_eq!(conversation.last(), Some(&Turn::assistant("borrador original")));
    }

    #[tokio::test]
    async fn test_both_failures_show_raw_apology() {
        let (use_case, _, _) = use_case(
            MockGenerator::with_response(Err(ClientError::Transport("refused".to_string()))),
            MockEvaluator::with_behavior(EvaluatorBehavior::Fail(status_error())),
        );
        let mut conversation = Conversation::new();

        let outcome = use_case.execute(&mut conversation, "q").await;

        assert_eq!(outcome.final_answer, GENERATOR_APOLOGY);
        assert_eq!(outcome.fallback, Fallback::Both);
        assert_eq!(conversation.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_generation_flows_as_sentinel() {
        let (use_case, _, evaluator) = use_case(
            MockGenerator::with_response(Ok(Generation::MalformedShape)),
            MockEvaluator::answering("mejorado"),
        );
        let mut conversation = Conversation::new();

        let outcome = use_case.execute(&mut conversation, "q").await;

        assert_eq!(outcome.initial_response, MALFORMED_RESPONSE_SENTINEL);
        assert_eq!(outcome.fallback, Fallback::None);
        assert_eq!(
            evaluator.prompts.lock().unwrap()[0],
            format!(
                "Evalúa esta respuesta y implementa mejoras/optimizaciones: {}",
                MALFORMED_RESPONSE_SENTINEL
            )
        );
    }

    #[tokio::test]
    async fn test_progress_reports_both_stages_in_order() {
        let (use_case, _, _) = use_case(
            MockGenerator::answering("draft"),
            MockEvaluator::with_behavior(EvaluatorBehavior::Fail(status_error())),
        );
        let progress = RecordingProgress {
            events: Mutex::new(Vec::new()),
        };
        let mut conversation = Conversation::new();

        use_case
            .execute_with_progress(&mut conversation, "q", &progress)
            .await;

        assert_eq!(
            progress.events.lock().unwrap().as_slice(),
            &[
                (Stage::Generate, None),
                (Stage::Generate, Some(true)),
                (Stage::Evaluate, None),
                (Stage::Evaluate, Some(false)),
            ]
        );
    }

    #[tokio::test]
    async fn test_each_turn_appends_exactly_two() {
        let (use_case, generator, evaluator) = use_case(
            MockGenerator::answering("a"),
            MockEvaluator::answering("b"),
        );
        let mut conversation = Conversation::new();

        for i in 1..=3 {
            use_case.execute(&mut conversation, "again").await;
            assert_eq!(conversation.len(), i * 2);
        }
        assert_eq!(generator.calls(), 3);
        assert_eq!(evaluator.calls(), 3);
    }
}
