//! Axum route handlers for the four coach intents.
//!
//! Each handler is a straight line: default-fill the request, render the
//! prompt, make one completion call, shape the reply. No state is shared
//! between intents and nothing outlives the request.

use axum::{extract::State, Json};

use crate::coach::models::{
    AnalyzeJdRequest, GenerateResumeRequest, GenerateResumeResponse, JdAnalysis,
    MockAnswerRequest, MockAnswerResponse, MockInterviewRequest, MockInterviewResponse,
};
use crate::coach::prompts::{
    render_jd_analysis_prompt, render_mock_answer_prompt, render_mock_questions_prompt,
    render_resume_prompt, JD_ANALYSIS_TEMPERATURE, MOCK_ANSWER_TEMPERATURE,
    MOCK_QUESTIONS_TEMPERATURE, RESUME_TEMPERATURE,
};
use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::state::AppState;

/// POST /api/generate-resume
///
/// Returns the completion reply, trimmed, as the resume text.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<GenerateResumeRequest>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    let prompt = render_resume_prompt(
        &request.name,
        &request.skills,
        &request.experience,
        &request.job_title,
    );

    let reply = state.llm.complete(&prompt, RESUME_TEMPERATURE).await?;

    Ok(Json(GenerateResumeResponse {
        resume: reply.trim().to_string(),
    }))
}

/// POST /api/analyze-jd
///
/// Parses the completion reply as the documented `JdAnalysis` object and
/// passes it through verbatim. A reply that is not that object (code fences
/// aside) fails the request.
pub async fn handle_analyze_jd(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJdRequest>,
) -> Result<Json<JdAnalysis>, AppError> {
    let prompt = render_jd_analysis_prompt(&request.skills, &request.job_description);

    let reply = state.llm.complete(&prompt, JD_ANALYSIS_TEMPERATURE).await?;

    let analysis: JdAnalysis = serde_json::from_str(strip_json_fences(&reply))
        .map_err(|e| AppError::MalformedReply(format!("expected JSON analysis: {e}")))?;

    Ok(Json(analysis))
}

/// POST /api/mock-interview
///
/// Returns the question list as one newline-separated text blob; splitting
/// into individual questions is the caller's concern.
pub async fn handle_mock_interview(
    State(state): State<AppState>,
    Json(request): Json<MockInterviewRequest>,
) -> Result<Json<MockInterviewResponse>, AppError> {
    let prompt = render_mock_questions_prompt(&request.job_title, &request.skills);

    let reply = state
        .llm
        .complete(&prompt, MOCK_QUESTIONS_TEMPERATURE)
        .await?;

    Ok(Json(MockInterviewResponse {
        questions: reply.trim().to_string(),
    }))
}

/// POST /api/mock-answer
pub async fn handle_mock_answer(
    State(state): State<AppState>,
    Json(request): Json<MockAnswerRequest>,
) -> Result<Json<MockAnswerResponse>, AppError> {
    let prompt = render_mock_answer_prompt(&request.question);

    let reply = state.llm.complete(&prompt, MOCK_ANSWER_TEMPERATURE).await?;

    Ok(Json(MockAnswerResponse {
        answer: reply.trim().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::llm_client::{CompletionBackend, LlmError};
    use crate::routes::build_router;
    use crate::state::AppState;

    /// Stub backend: records the prompt and temperature it receives and
    /// returns a canned reply (or a canned failure).
    struct StubBackend {
        reply: Result<String, String>,
        seen: Mutex<Option<(String, f32)>>,
    }

    impl StubBackend {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                seen: Mutex::new(None),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                seen: Mutex::new(None),
            })
        }

        fn seen_prompt(&self) -> (String, f32) {
            self.seen
                .lock()
                .unwrap()
                .clone()
                .expect("backend was never called")
        }
    }

    #[async_trait]
    impl CompletionBackend for StubBackend {
        async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, LlmError> {
            *self.seen.lock().unwrap() = Some((prompt.to_string(), temperature));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(LlmError::Api {
                    status: 500,
                    message: message.clone(),
                }),
            }
        }
    }

    fn app(backend: Arc<StubBackend>) -> axum::Router {
        build_router(AppState { llm: backend })
    }

    async fn post_json(
        router: axum::Router,
        path: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_generate_resume_empty_body_renders_default_prompt() {
        let backend = StubBackend::replying("  A fine resume.  ");
        let (status, body) = post_json(app(backend.clone()), "/api/generate-resume", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"resume": "A fine resume."}));

        let (prompt, temperature) = backend.seen_prompt();
        assert!(prompt.contains("someone named User"));
        assert!(prompt.contains("a Software Developer position"));
        assert!(prompt.contains("skills in Python, HTML, CSS"));
        assert!(prompt.contains("experience: 1 year internship at XYZ"));
        assert_eq!(temperature, 0.7);
    }

    #[tokio::test]
    async fn test_generate_resume_supplied_fields_reach_prompt() {
        let backend = StubBackend::replying("ok");
        let (status, _) = post_json(
            app(backend.clone()),
            "/api/generate-resume",
            json!({"name": "Grace", "job_title": "Compiler Engineer"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let (prompt, _) = backend.seen_prompt();
        assert!(prompt.contains("someone named Grace"));
        assert!(prompt.contains("a Compiler Engineer position"));
        // Absent fields still carry their defaults.
        assert!(prompt.contains("skills in Python, HTML, CSS"));
    }

    #[tokio::test]
    async fn test_analyze_jd_passes_valid_reply_through_verbatim() {
        let backend = StubBackend::replying(
            r#"{"match_score": 82, "overlapping_skills": ["Python", "AWS"], "missing_skills": ["Django", "CI/CD"]}"#,
        );
        let (status, body) = post_json(app(backend.clone()), "/api/analyze-jd", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "match_score": 82,
                "overlapping_skills": ["Python", "AWS"],
                "missing_skills": ["Django", "CI/CD"]
            })
        );

        let (prompt, temperature) = backend.seen_prompt();
        // Empty-string defaults: the template's fixed text survives with
        // nothing interpolated.
        assert!(prompt.contains("resume skills: \n"));
        assert_eq!(temperature, 0.3);
    }

    #[tokio::test]
    async fn test_analyze_jd_tolerates_code_fenced_reply() {
        let backend = StubBackend::replying(
            "```json\n{\"match_score\": 50, \"overlapping_skills\": [], \"missing_skills\": [\"Rust\"]}\n```",
        );
        let (status, body) = post_json(app(backend), "/api/analyze-jd", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_score"], 50);
        assert_eq!(body["missing_skills"], json!(["Rust"]));
    }

    #[tokio::test]
    async fn test_analyze_jd_non_json_reply_is_500_with_error_field() {
        let backend = StubBackend::replying("sorry, I cannot help");
        let (status, body) = post_json(app(backend), "/api/analyze-jd", json!({})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_mock_interview_defaults_and_blob_response() {
        let backend = StubBackend::replying("1. Q one\n2. Q two\n3. Q three\n4. Q four\n5. Q five");
        let (status, body) = post_json(app(backend.clone()), "/api/mock-interview", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["questions"],
            "1. Q one\n2. Q two\n3. Q three\n4. Q four\n5. Q five"
        );

        let (prompt, temperature) = backend.seen_prompt();
        assert!(prompt.contains("for a Software Developer role"));
        assert!(prompt.contains("these skills: Python, SQL, AWS"));
        assert_eq!(temperature, 0.6);
    }

    #[tokio::test]
    async fn test_mock_answer_end_to_end() {
        let backend =
            StubBackend::replying("A hash table maps keys to values using a hash function.");
        let (status, body) = post_json(
            app(backend.clone()),
            "/api/mock-answer",
            json!({"question": "What is a hash table?"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"answer": "A hash table maps keys to values using a hash function."})
        );

        let (prompt, _) = backend.seen_prompt();
        assert!(prompt.ends_with("What is a hash table?"));
    }

    #[tokio::test]
    async fn test_every_endpoint_maps_backend_failure_to_500() {
        for path in [
            "/api/generate-resume",
            "/api/analyze-jd",
            "/api/mock-interview",
            "/api/mock-answer",
        ] {
            let backend = StubBackend::failing("quota exhausted");
            let (status, body) = post_json(app(backend), path, json!({})).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{path}");
            let error = body["error"].as_str().unwrap();
            assert!(error.contains("quota exhausted"), "{path}: {error}");
        }
    }
}
