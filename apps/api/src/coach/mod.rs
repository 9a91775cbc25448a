//! The four coach intents: resume generation, JD analysis, mock interview
//! questions, and mock answers. One prompt template and one completion call
//! per intent.

pub mod handlers;
pub mod models;
pub mod prompts;
