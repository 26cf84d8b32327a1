use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    constants::{game::QUESTION_TEMPERATURE, question_prompt::build_question_prompt},
    errors::{AppError, AppResult},
    models::domain::MathQuestion,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, grade: u8, count: usize) -> AppResult<Vec<MathQuestion>>;
}

/// Parses the model's reply into questions, tolerating Markdown code fences.
pub fn parse_generated_questions(text: &str) -> AppResult<Vec<MathQuestion>> {
    let body = strip_code_fence(text.trim());

    let questions: Vec<MathQuestion> = serde_json::from_str(body).map_err(|e| {
        AppError::UpstreamError(format!("Invalid data format received from question service: {}", e))
    })?;

    if questions.is_empty() {
        return Err(AppError::UpstreamError(
            "Question service returned no questions".to_string(),
        ));
    }

    if let Some(bad) = questions
        .iter()
        .find(|q| q.question.trim().is_empty() || !q.answer.is_finite())
    {
        return Err(AppError::UpstreamError(format!(
            "Question service returned an unusable question: {:?}",
            bad
        )));
    }

    Ok(questions)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // skip an optional language tag on the opening fence
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Talks to an OpenAI-compatible chat-completions endpoint.
pub struct HttpQuestionGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl HttpQuestionGenerator {
    pub fn new(base_url: &str, api_key: SecretString, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
        }
    }

    fn request_body(&self, grade: u8, count: usize) -> Value {
        json!({
            "model": self.model,
            "temperature": QUESTION_TEMPERATURE,
            "messages": [
                { "role": "user", "content": build_question_prompt(grade, count) }
            ],
        })
    }
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    async fn generate(&self, grade: u8, count: usize) -> AppResult<Vec<MathQuestion>> {
        if self.api_key.expose_secret().is_empty() {
            return Err(AppError::UpstreamError(
                "Question service API key is not configured".to_string(),
            ));
        }

        let response: Value = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.request_body(grade, count))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let content = response
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                log::error!("Question service response had no message content: {}", response);
                AppError::UpstreamError("Question service response had no content".to_string())
            })?;

        let questions = parse_generated_questions(content)?;
        if questions.len() != count {
            log::warn!(
                "Asked for {} questions for grade {}, received {}",
                count,
                grade,
                questions.len()
            );
        }

        Ok(questions)
    }
}
