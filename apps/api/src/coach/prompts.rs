// All prompt templates for the four coach intents, with the literal defaults
// substituted for absent request fields. Template text is fixed — field
// interpolation only, no branching.

/// Creativity settings per intent. JD analysis runs cold so the reply stays
/// literal JSON; the generation intents get more room.
pub const RESUME_TEMPERATURE: f32 = 0.7;
pub const JD_ANALYSIS_TEMPERATURE: f32 = 0.3;
pub const MOCK_QUESTIONS_TEMPERATURE: f32 = 0.6;
pub const MOCK_ANSWER_TEMPERATURE: f32 = 0.6;

/// Resume prompt. Replace: {name}, {job_title}, {skills}, {experience}.
const RESUME_PROMPT_TEMPLATE: &str = "Write a professional 3-section resume for someone named {name} applying for a {job_title} position. \nHighlight their skills in {skills}, and experience: {experience}.";

/// JD analysis prompt. Replace: {job_description}, {skills}.
/// The example object pins the exact reply schema the handler parses.
const JD_ANALYSIS_PROMPT_TEMPLATE: &str = r#"
Extract key skills and technologies from this job description:

{job_description}

Then compare them with the candidate's resume skills: {skills}

Return a brief match score out of 100 and list overlapping + missing skills.
Respond in JSON format like this:
{
  "match_score": 82,
  "overlapping_skills": ["Python", "AWS"],
  "missing_skills": ["Django", "CI/CD"]
}
"#;

/// Mock interview prompt. Replace: {job_title}, {skills}.
const MOCK_QUESTIONS_PROMPT_TEMPLATE: &str = r#"
Generate 5 mock technical interview questions for a {job_title} role.
Base them on these skills: {skills}.
Just list the questions only, no answers.
"#;

/// Mock answer prompt. Replace: {question}.
const MOCK_ANSWER_PROMPT_TEMPLATE: &str =
    "Provide a strong, concise answer to the following technical interview question:\n\n{question}";

pub fn render_resume_prompt(name: &str, skills: &str, experience: &str, job_title: &str) -> String {
    RESUME_PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{job_title}", job_title)
        .replace("{skills}", skills)
        .replace("{experience}", experience)
}

pub fn render_jd_analysis_prompt(skills: &str, job_description: &str) -> String {
    JD_ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{skills}", skills)
}

pub fn render_mock_questions_prompt(job_title: &str, skills: &str) -> String {
    MOCK_QUESTIONS_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{skills}", skills)
}

pub fn render_mock_answer_prompt(question: &str) -> String {
    MOCK_ANSWER_PROMPT_TEMPLATE.replace("{question}", question)
}
