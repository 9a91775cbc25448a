//! Per-endpoint request and response schemas.
//!
//! Every request field is optional on the wire; serde substitutes the same
//! literal defaults the frontend has always relied on, so a partial (or
//! empty) body is never rejected.

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "User".to_string()
}

fn default_resume_skills() -> String {
    "Python, HTML, CSS".to_string()
}

fn default_experience() -> String {
    "1 year internship at XYZ".to_string()
}

fn default_job_title() -> String {
    "Software Developer".to_string()
}

fn default_interview_skills() -> String {
    "Python, SQL, AWS".to_string()
}

#[derive(Debug, Deserialize)]
pub struct GenerateResumeRequest {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_resume_skills")]
    pub skills: String,
    #[serde(default = "default_experience")]
    pub experience: String,
    #[serde(default = "default_job_title")]
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResumeResponse {
    pub resume: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeJdRequest {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub job_description: String,
}

/// The structured object the completion API is instructed to reply with.
/// Deserialized from the reply and passed through to the caller verbatim.
#[derive(Debug, Serialize, Deserialize)]
pub struct JdAnalysis {
    pub match_score: u32,
    pub overlapping_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MockInterviewRequest {
    #[serde(default = "default_job_title")]
    pub job_title: String,
    #[serde(default = "default_interview_skills")]
    pub skills: String,
}

#[derive(Debug, Serialize)]
pub struct MockInterviewResponse {
    pub questions: String,
}

#[derive(Debug, Deserialize)]
pub struct MockAnswerRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct MockAnswerResponse {
    pub answer: String,
}
