use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{ApiError, AskAnswer, DocumentStats, UploadReceipt};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Total request timeout; answer generation dominates, so it is generous.
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:10000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// The four calls the question-answering service exposes to this client.
#[async_trait::async_trait]
pub trait DocQaClient: Send + Sync {
    async fn upload_pdf(&self, path: &Path) -> Result<UploadReceipt, ApiError>;
    async fn ask(&self, question: &str) -> Result<String, ApiError>;
    async fn stats(&self) -> Result<DocumentStats, ApiError>;
    async fn clear(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl DocQaClient for ReqwestClient {
    async fn upload_pdf(&self, path: &Path) -> Result<UploadReceipt, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|err| ApiError::File {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint("/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(response).await
    }

    async fn ask(&self, question: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/ask"))
            .json(&serde_json::json!({ "question": question }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: AskAnswer = decode(response).await?;
        Ok(body.answer)
    }

    async fn stats(&self) -> Result<DocumentStats, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/stats"))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(response).await
    }

    async fn clear(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.endpoint("/clear"))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        // Any 2xx counts as cleared; the body, if any, carries nothing we need.
        expect_success(response).await
    }
}

async fn expect_success(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        code: status.as_u16(),
        message: error_message(&body, status.as_u16()),
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|err| ApiError::InvalidResponse(err.to_string()));
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        code: status.as_u16(),
        message: error_message(&body, status.as_u16()),
    })
}

/// Extracts the server's error message. The service emits `{error}` bodies;
/// its framework wraps raised exceptions as `{detail}`. Anything else gets a
/// generic fallback.
fn error_message(body: &str, status: u16) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        detail: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.error.or(parsed.detail) {
            return message;
        }
    }
    format!("server returned HTTP {status}")
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::error_message;

    #[test]
    fn error_field_wins() {
        let message = error_message(r#"{"error": "model unavailable"}"#, 500);
        assert_eq!(message, "model unavailable");
    }

    #[test]
    fn detail_field_is_accepted() {
        let message = error_message(r#"{"detail": "Only PDF files allowed"}"#, 400);
        assert_eq!(message, "Only PDF files allowed");
    }

    #[test]
    fn unparseable_body_falls_back_to_status() {
        assert_eq!(error_message("<html>oops</html>", 502), "server returned HTTP 502");
        assert_eq!(error_message("", 500), "server returned HTTP 500");
    }
}
