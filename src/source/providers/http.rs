//! Question source backed by the portal's public REST API.
//!
//! `GET {base_url}/public/lecture-exams/{lecture_id}/questions/by-lecture`
//! returns the exam id and its ordered questions. The signed-in user, when
//! known, is forwarded in the `X-User-Id` header.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;

use crate::core::quiz::QuestionSet;
use crate::source::{ExamQuestionsResponse, QuestionSource, SourceError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct HttpQuestionSource {
    base_url: Url,
    user_id: Option<String>,
    client: reqwest::Client,
}

impl HttpQuestionSource {
    /// Creates a new HTTP source.
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://api.example.org` (trailing `/` ignored)
    /// * `user_id` - Optional user id sent as `X-User-Id`
    /// * `timeout` - Whole-request timeout
    pub fn new(
        base_url: impl Into<String>,
        user_id: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let raw = base_url.into();
        let base_url = Url::parse(&raw)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| {
                SourceError::Config(format!(
                    "base URL must start with http:// or https://, got '{raw}'"
                ))
            })?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Config(e.to_string()))?;
        Ok(Self {
            base_url,
            user_id,
            client,
        })
    }

    /// Appends the endpoint path to the base URL. `lecture_id` becomes a
    /// single percent-encoded segment.
    fn questions_url(&self, lecture_id: &str) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SourceError::Config(format!("cannot extend URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(["public", "lecture-exams", lecture_id, "questions", "by-lecture"]);
        Ok(url)
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_questions(&self, lecture_id: &str) -> Result<QuestionSet, SourceError> {
        let url = self.questions_url(lecture_id)?;
        info!("Fetching questions: {}", url);

        let mut request = self.client.get(url);
        if let Some(user_id) = &self.user_id {
            request = request.header("X-User-Id", user_id);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("Questions response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Questions API error: {} - {}", status, err_body);
            return Err(SourceError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        let parsed: ExamQuestionsResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::Parse(e.to_string()))?;

        let set = parsed.into_question_set();
        info!(
            "Fetched {} question(s) for lecture {} (exam={:?})",
            set.len(),
            lecture_id,
            set.exam_id
        );
        Ok(set)
    }
}
