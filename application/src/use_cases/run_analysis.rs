//! Run Analysis use case
//!
//! Drives the council: each role answers in order, and its reply becomes a
//! prompt variable for the roles after it. The first failing stage aborts
//! the run; nothing is retried.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::inference::{InferenceError, InferenceTransport};
use crate::ports::progress::{NoProgress, StageProgressNotifier};
use crate::use_cases::shared::check_cancelled;
use council_domain::{
    AnalysisResult, ChatMessage, ChatRequest, DiagnosticHint, FailureKind, IncompleteTranscript,
    InvalidChatRequest, Model, PromptVars, RoleProfile, TemplateError, Topic, diagnose, vars,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Message shown to callers when any stage fails
pub const ANALYSIS_FAILED_MESSAGE: &str = "多代理分析失敗，請稍後再試。";

/// A stage failed; the only failure surfaced to callers.
///
/// `Display` shows the user-safe message only. The cause, stage and
/// hint are kept for diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct AnalysisFailure {
    message: String,
    stage: String,
    stage_index: usize,
    model: Model,
    kind: FailureKind,
    cause: String,
    hint: Option<DiagnosticHint>,
}

impl AnalysisFailure {
    pub fn new(
        role: &RoleProfile,
        stage_index: usize,
        error: &InferenceError,
        hint: Option<DiagnosticHint>,
    ) -> Self {
        Self {
            message: ANALYSIS_FAILED_MESSAGE.to_string(),
            stage: role.name().to_string(),
            stage_index,
            model: role.model().clone(),
            kind: error.kind(),
            cause: error.to_string(),
            hint,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the role whose stage failed
    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// Zero-based position of the failed stage
    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Underlying cause; may contain backend payloads, not for callers
    pub fn cause(&self) -> &str {
        &self.cause
    }

    pub fn hint(&self) -> Option<&DiagnosticHint> {
        self.hint.as_ref()
    }

    /// User message with the remediation hint appended, when there is one
    pub fn user_message(&self) -> String {
        match &self.hint {
            Some(hint) => format!("{}（{}）", self.message, hint),
            None => self.message.clone(),
        }
    }
}

/// Errors that can occur during an analysis
#[derive(Error, Debug)]
pub enum RunAnalysisError {
    #[error("{0}")]
    Failed(AnalysisFailure),

    /// A role template references a variable that does not exist yet.
    /// This is a configuration bug, not a backend failure.
    #[error("Prompt template for stage {stage} is invalid: {source}")]
    Template {
        stage: String,
        #[source]
        source: TemplateError,
    },

    #[error("Chat request for stage {stage} is invalid: {source}")]
    InvalidRequest {
        stage: String,
        #[source]
        source: InvalidChatRequest,
    },

    #[error("Council did not produce a complete result: {0}")]
    IncompleteCouncil(#[from] IncompleteTranscript),

    #[error("Operation cancelled")]
    Cancelled,
}

impl RunAnalysisError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunAnalysisError::Cancelled)
    }

    /// The backend failure, if this error is one
    pub fn as_failure(&self) -> Option<&AnalysisFailure> {
        match self {
            RunAnalysisError::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// True for errors caused by role or template setup rather than the backend
    pub fn is_configuration_defect(&self) -> bool {
        matches!(
            self,
            RunAnalysisError::Template { .. }
                | RunAnalysisError::InvalidRequest { .. }
                | RunAnalysisError::IncompleteCouncil(_)
        )
    }
}

/// How a single stage went wrong
enum StageError {
    Inference(InferenceError),
    Fatal(RunAnalysisError),
}

impl From<RunAnalysisError> for StageError {
    fn from(e: RunAnalysisError) -> Self {
        StageError::Fatal(e)
    }
}

/// Use case for running a council analysis
pub struct RunAnalysisUseCase<T: InferenceTransport + 'static> {
    transport: Arc<T>,
    roles: Arc<[RoleProfile]>,
    logger: Arc<dyn ConversationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl<T: InferenceTransport + 'static> Clone for RunAnalysisUseCase<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            roles: Arc::clone(&self.roles),
            logger: Arc::clone(&self.logger),
            cancellation_token: self.cancellation_token.clone(),
        }
    }
}

impl<T: InferenceTransport + 'static> RunAnalysisUseCase<T> {
    pub fn new(transport: Arc<T>, roles: impl Into<Arc<[RoleProfile]>>) -> Self {
        Self {
            transport,
            roles: roles.into(),
            logger: Arc::new(NoConversationLogger),
            cancellation_token: None,
        }
    }

    /// Record stage requests, replies and failures to a transcript log
    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, topic: Topic) -> Result<AnalysisResult, RunAnalysisError> {
        self.execute_with_progress(topic, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        topic: Topic,
        progress: &dyn StageProgressNotifier,
    ) -> Result<AnalysisResult, RunAnalysisError> {
        check_cancelled(&self.cancellation_token)?;

        let total = self.roles.len();
        info!(stages = total, "Starting analysis: {}", topic);

        let mut transcript = PromptVars::new().with(vars::TOPIC, topic.content());

        for (index, role) in self.roles.iter().enumerate() {
            check_cancelled(&self.cancellation_token)?;
            progress.on_stage_start(role, index, total);

            match self.run_stage(index, role, &transcript).await {
                Ok(output) => {
                    progress.on_stage_complete(role, true);
                    transcript.insert(role.output_key(), output);
                }
                Err(StageError::Inference(e)) => {
                    progress.on_stage_complete(role, false);
                    return Err(RunAnalysisError::Failed(
                        self.fail(&topic, index, role, &transcript, e),
                    ));
                }
                Err(StageError::Fatal(e)) => {
                    progress.on_stage_complete(role, false);
                    if e.is_configuration_defect() {
                        error!(
                            stage = role.name(),
                            "Analysis aborted by configuration defect: {}",
                            e
                        );
                    }
                    return Err(e);
                }
            }
        }

        let result = AnalysisResult::assemble(&topic, &transcript)?;
        info!(stages = total, "Analysis complete: {}", topic);
        self.logger.log(ConversationEvent::new(
            "analysis_completed",
            serde_json::json!({
                "topic": topic.content(),
                "stages": total,
            }),
        ));
        Ok(result)
    }

    /// Compose the prompt for one stage, send it, and return the reply
    async fn run_stage(
        &self,
        index: usize,
        role: &RoleProfile,
        transcript: &PromptVars,
    ) -> Result<String, StageError> {
        let prompt = role
            .prompt_template()
            .compose(transcript)
            .map_err(|source| RunAnalysisError::Template {
                stage: role.name().to_string(),
                source,
            })?;

        let request = ChatRequest::new(
            role.model().clone(),
            vec![
                ChatMessage::system(role.system_instruction()),
                ChatMessage::user(prompt),
            ],
        )
        .map_err(|source| RunAnalysisError::InvalidRequest {
            stage: role.name().to_string(),
            source,
        })?
        .with_temperature(role.temperature());

        info!(
            stage = role.name(),
            model = %role.model(),
            "Stage {}/{}",
            index + 1,
            self.roles.len()
        );
        self.logger.log(ConversationEvent::new(
            "stage_request",
            serde_json::json!({
                "stage": role.name(),
                "model": role.model().as_str(),
                "temperature": role.temperature(),
                "prompt": request.prompt(),
            }),
        ));

        let started = Instant::now();
        let output = self.send(&request).await?;
        if output.trim().is_empty() {
            return Err(StageError::Inference(InferenceError::Protocol(
                "response content is blank".to_string(),
            )));
        }

        let elapsed_ms = started.elapsed().as_millis() as u64;
        debug!(stage = role.name(), elapsed_ms, chars = output.chars().count(), "Stage replied");
        self.logger.log(ConversationEvent::new(
            "stage_response",
            serde_json::json!({
                "stage": role.name(),
                "model": role.model().as_str(),
                "content": output,
                "elapsed_ms": elapsed_ms,
            }),
        ));
        Ok(output)
    }

    /// Send a request, racing it against cancellation when a token is set
    async fn send(&self, request: &ChatRequest) -> Result<String, StageError> {
        let result = if let Some(ref token) = self.cancellation_token {
            tokio::select! {
                biased;
                _ = token.cancelled() => return Err(RunAnalysisError::Cancelled.into()),
                result = self.transport.chat(request) => result,
            }
        } else {
            self.transport.chat(request).await
        };
        result.map_err(StageError::Inference)
    }

    /// Log a stage failure with full context and build the caller-facing error
    fn fail(
        &self,
        topic: &Topic,
        index: usize,
        role: &RoleProfile,
        transcript: &PromptVars,
        e: InferenceError,
    ) -> AnalysisFailure {
        let base_url = self.transport.base_url();
        let cause = e.to_string();
        let hint = diagnose(&cause, base_url);

        error!(
            stage = role.name(),
            stage_index = index + 1,
            model = %role.model(),
            kind = %e.kind(),
            completed_stages = index,
            "[analysis] failed topic={} cause={}",
            topic,
            cause
        );
        if let Some(ref hint) = hint {
            error!(base_url, "[analysis] hint: {}", hint);
        }
        for (name, value) in transcript.iter().filter(|(name, _)| *name != vars::TOPIC) {
            debug!(output = name, "Discarded stage output: {}", value);
        }

        self.logger.log(ConversationEvent::new(
            "stage_failed",
            serde_json::json!({
                "stage": role.name(),
                "stage_index": index,
                "model": role.model().as_str(),
                "kind": e.kind(),
                "cause": cause,
                "hint": hint.as_ref().map(DiagnosticHint::message),
                "completed_stages": index,
            }),
        ));

        AnalysisFailure::new(role, index, &e, hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use council_domain::ChatRole;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Transport that replays scripted results and records every request
    struct ScriptedTransport {
        base_url: String,
        responses: Mutex<VecDeque<Result<String, InferenceError>>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<Result<String, InferenceError>>) -> Self {
            Self::with_base_url("http://ai-server:11434", responses)
        }

        fn with_base_url(base_url: &str, responses: Vec<Result<String, InferenceError>>) -> Self {
            Self {
                base_url: base_url.to_string(),
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn requests(&self) -> Vec<ChatRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl InferenceTransport for ScriptedTransport {
        async fn chat(&self, request: &ChatRequest) -> Result<String, InferenceError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("(no more responses)".to_string()))
        }

        fn base_url(&self) -> &str {
            &self.base_url
        }
    }

    /// Transport that answers with the prompt it was given
    struct EchoTransport;

    #[async_trait]
    impl InferenceTransport for EchoTransport {
        async fn chat(&self, request: &ChatRequest) -> Result<String, InferenceError> {
            Ok(format!("[{}] {}", request.model(), request.prompt()))
        }

        fn base_url(&self) -> &str {
            "http://ai-server:11434"
        }
    }

    /// Transport whose calls never complete
    struct PendingTransport;

    #[async_trait]
    impl InferenceTransport for PendingTransport {
        async fn chat(&self, _request: &ChatRequest) -> Result<String, InferenceError> {
            std::future::pending().await
        }

        fn base_url(&self) -> &str {
            "http://ai-server:11434"
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl StageProgressNotifier for RecordingProgress {
        fn on_stage_start(&self, role: &RoleProfile, index: usize, total: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {} {}/{}", role.name(), index + 1, total));
        }

        fn on_stage_complete(&self, role: &RoleProfile, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {} {}", role.name(), success));
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    fn topic() -> Topic {
        Topic::new("high-availability checkout service").unwrap()
    }

    fn use_case<T: InferenceTransport + 'static>(transport: Arc<T>) -> RunAnalysisUseCase<T> {
        RunAnalysisUseCase::new(transport, RoleProfile::default_council())
    }

    fn refused() -> InferenceError {
        InferenceError::Transport(
            "error sending request: tcp connect error: Connection refused (os error 111)"
                .to_string(),
        )
    }

    // ==================== Success ====================

    #[test]
    fn test_roles_keep_configured_order() {
        let use_case = use_case(Arc::new(EchoTransport));
        let names: Vec<&str> = use_case.roles().iter().map(|r| r.name()).collect();
        assert_eq!(names, ["architect", "security", "moderator"]);
    }

    #[tokio::test]
    async fn test_successful_run_fills_every_field() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok("architect says".to_string()),
            Ok("security says".to_string()),
            Ok("moderator says".to_string()),
        ]));

        let result = use_case(transport.clone()).execute(topic()).await.unwrap();

        assert_eq!(result.topic(), "high-availability checkout service");
        assert_eq!(result.architect_opinion(), "architect says");
        assert_eq!(result.security_review(), "security says");
        assert_eq!(result.moderator_summary(), "moderator says");
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_security_prompt_contains_architect_opinion() {
        let result = use_case(Arc::new(EchoTransport))
            .execute(topic())
            .await
            .unwrap();

        assert!(!result.architect_opinion().is_empty());
        assert!(!result.security_review().is_empty());
        assert!(!result.moderator_summary().is_empty());
        assert!(result.security_review().contains(result.architect_opinion()));
        assert!(result.moderator_summary().contains(result.security_review()));
    }

    #[tokio::test]
    async fn test_requests_carry_role_configuration() {
        let transport = Arc::new(ScriptedTransport::new(vec![]));
        use_case(transport.clone()).execute(topic()).await.unwrap();

        let requests = transport.requests();
        let council = RoleProfile::default_council();
        for (request, role) in requests.iter().zip(council.iter()) {
            assert_eq!(request.model(), role.model());
            assert_eq!(request.messages().len(), 2);
            assert_eq!(request.messages()[0].role, ChatRole::System);
            assert_eq!(request.messages()[0].content, role.system_instruction());
            assert_eq!(request.messages()[1].role, ChatRole::User);
            let temperature = request.options().unwrap().temperature;
            assert!((temperature - role.temperature()).abs() < f32::EPSILON);
            assert!(!request.is_streaming());
        }
        assert_eq!(
            requests[0].prompt(),
            "請針對以下主題提出架構設計建議：high-availability checkout service"
        );
    }

    #[tokio::test]
    async fn test_progress_events_in_order() {
        let progress = RecordingProgress::default();
        use_case(Arc::new(EchoTransport))
            .execute_with_progress(topic(), &progress)
            .await
            .unwrap();

        assert_eq!(
            *progress.events.lock().unwrap(),
            vec![
                "start architect 1/3",
                "done architect true",
                "start security 2/3",
                "done security true",
                "start moderator 3/3",
                "done moderator true",
            ]
        );
    }

    // ==================== Failure ====================

    #[tokio::test]
    async fn test_stage_one_failure_stops_pipeline() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Err(InferenceError::Transport("operation timed out".to_string())),
            Ok("never".to_string()),
            Ok("never".to_string()),
        ]));

        let err = use_case(transport.clone())
            .execute(topic())
            .await
            .unwrap_err();

        assert_eq!(transport.calls(), 1);
        let failure = err.as_failure().unwrap();
        assert_eq!(failure.stage(), "architect");
        assert_eq!(failure.stage_index(), 0);
        assert_eq!(failure.kind(), FailureKind::Transport);
        assert!(failure.hint().is_none());
    }

    #[tokio::test]
    async fn test_stage_two_failure_skips_moderator() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok("architect says".to_string()),
            Err(InferenceError::Backend {
                status: 500,
                body: "model 'mistral' not found".to_string(),
            }),
            Ok("never".to_string()),
        ]));

        let err = use_case(transport.clone())
            .execute(topic())
            .await
            .unwrap_err();

        let models: Vec<_> = transport
            .requests()
            .iter()
            .map(|r| r.model().clone())
            .collect();
        assert_eq!(models, vec![Model::Llama3, Model::Mistral]);

        let failure = err.as_failure().unwrap();
        assert_eq!(failure.stage(), "security");
        assert_eq!(failure.model(), &Model::Mistral);
        assert_eq!(failure.kind(), FailureKind::Backend);
        assert!(failure.cause().contains("500"));
    }

    #[tokio::test]
    async fn test_failure_display_hides_cause() {
        let transport = Arc::new(ScriptedTransport::new(vec![Err(InferenceError::Backend {
            status: 500,
            body: "secret internal payload".to_string(),
        })]));

        let err = use_case(transport).execute(topic()).await.unwrap_err();
        assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);
        assert!(!err.as_failure().unwrap().user_message().contains("secret"));
    }

    #[tokio::test]
    async fn test_blank_reply_is_protocol_failure() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok("architect says".to_string()),
            Ok("   ".to_string()),
        ]));

        let err = use_case(transport.clone())
            .execute(topic())
            .await
            .unwrap_err();

        assert_eq!(transport.calls(), 2);
        let failure = err.as_failure().unwrap();
        assert_eq!(failure.stage(), "security");
        assert_eq!(failure.kind(), FailureKind::Protocol);
    }

    #[tokio::test]
    async fn test_refused_loopback_gets_hint() {
        let transport = Arc::new(ScriptedTransport::with_base_url(
            "http://localhost:11434",
            vec![Err(refused())],
        ));

        let err = use_case(transport).execute(topic()).await.unwrap_err();
        let failure = err.as_failure().unwrap();

        assert!(matches!(
            failure.hint(),
            Some(DiagnosticHint::LoopbackRefused { base_url })
                if base_url == "http://localhost:11434"
        ));
        assert!(failure.user_message().starts_with(ANALYSIS_FAILED_MESSAGE));
        assert!(failure.user_message().contains("http://localhost:11434"));
    }

    #[tokio::test]
    async fn test_refused_remote_has_no_hint() {
        let transport = Arc::new(ScriptedTransport::new(vec![Err(refused())]));

        let err = use_case(transport).execute(topic()).await.unwrap_err();
        let failure = err.as_failure().unwrap();
        assert!(failure.hint().is_none());
        assert_eq!(failure.user_message(), ANALYSIS_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_failure_reported_to_progress_and_logger() {
        let transport = Arc::new(ScriptedTransport::with_base_url(
            "http://127.0.0.1:11434",
            vec![Ok("architect says".to_string()), Err(refused())],
        ));
        let logger = Arc::new(RecordingLogger::default());
        let progress = RecordingProgress::default();

        use_case(transport)
            .with_logger(logger.clone())
            .execute_with_progress(topic(), &progress)
            .await
            .unwrap_err();

        assert_eq!(
            progress.events.lock().unwrap().last().unwrap(),
            "done security false"
        );

        let events = logger.events.lock().unwrap();
        let kinds: Vec<_> = events.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec!["stage_request", "stage_response", "stage_request", "stage_failed"]
        );
        let failed = &events[3].1;
        assert_eq!(failed["stage"], "security");
        assert_eq!(failed["kind"], "transport");
        assert_eq!(failed["completed_stages"], 1);
        assert!(failed["hint"].as_str().unwrap().contains("127.0.0.1"));
    }

    // ==================== Configuration defects ====================

    #[tokio::test]
    async fn test_template_error_is_not_hidden() {
        let roles = vec![
            RoleProfile::new(
                "architect",
                Model::Llama3,
                0.2,
                "sys",
                "{topic} {securityReview}",
                vars::ARCHITECT_OPINION,
            )
            .unwrap(),
        ];
        let transport = Arc::new(ScriptedTransport::new(vec![]));

        let err = RunAnalysisUseCase::new(transport.clone(), roles)
            .execute(topic())
            .await
            .unwrap_err();

        assert_eq!(transport.calls(), 0);
        assert!(err.is_configuration_defect());
        assert!(err.as_failure().is_none());
        assert!(matches!(
            err,
            RunAnalysisError::Template {
                source: TemplateError::MissingVariable(ref name),
                ..
            } if name == "securityReview"
        ));
    }

    #[tokio::test]
    async fn test_incomplete_council_is_defect() {
        let roles = vec![
            RoleProfile::new(
                "architect",
                Model::Llama3,
                0.2,
                "sys",
                "{topic}",
                vars::ARCHITECT_OPINION,
            )
            .unwrap(),
        ];

        let err = RunAnalysisUseCase::new(Arc::new(EchoTransport), roles)
            .execute(topic())
            .await
            .unwrap_err();

        assert!(matches!(err, RunAnalysisError::IncompleteCouncil(_)));
    }

    #[tokio::test]
    async fn test_fourth_role_runs_without_orchestrator_changes() {
        let mut roles = RoleProfile::default_council();
        roles.push(
            RoleProfile::new("editor", Model::Mistral, 0.0, "edit", "{moderatorSummary}", "edited")
                .unwrap(),
        );
        let transport = Arc::new(ScriptedTransport::new(vec![]));

        RunAnalysisUseCase::new(transport.clone(), roles)
            .execute(topic())
            .await
            .unwrap();

        assert_eq!(transport.calls(), 4);
    }

    // ==================== Cancellation ====================

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let transport = Arc::new(ScriptedTransport::new(vec![]));

        let err = use_case(transport.clone())
            .with_cancellation(token)
            .execute(topic())
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_cancellation_interrupts_inflight_call() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let err = use_case(Arc::new(PendingTransport))
            .with_cancellation(token)
            .execute(topic())
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
    }
}
