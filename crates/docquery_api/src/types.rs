use serde::Deserialize;
use thiserror::Error;

pub type RequestId = u64;

/// Body of a successful `POST /upload`. Processing continues server-side
/// after this response; `/stats` reflects progress.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub message: String,
}

/// Body of a successful `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AskAnswer {
    pub answer: String,
}

/// Body of a successful `GET /stats`. A missing counter reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct DocumentStats {
    #[serde(default)]
    pub total_chunks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the server's `{error}`/`{detail}`
    /// payload or a generic fallback.
    #[error("{message}")]
    Status { code: u16, message: String },
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    InvalidResponse(String),
    #[error("could not read {path}: {message}")]
    File { path: String, message: String },
}

/// Completion events emitted by [`crate::ApiHandle`], tagged with the
/// request token they settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    UploadFinished {
        request: RequestId,
        result: Result<UploadReceipt, ApiError>,
    },
    AnswerArrived {
        request: RequestId,
        result: Result<String, ApiError>,
    },
    StatsArrived {
        request: RequestId,
        result: Result<DocumentStats, ApiError>,
    },
    ClearFinished {
        request: RequestId,
        result: Result<(), ApiError>,
    },
}
