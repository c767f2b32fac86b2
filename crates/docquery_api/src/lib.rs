//! Docquery API: typed HTTP client for the question-answering service
//! and the background handle that executes requests off the UI thread.
mod client;
mod engine;
mod types;

pub use client::{ApiSettings, DocQaClient, ReqwestClient};
pub use engine::ApiHandle;
pub use types::{ApiError, ApiEvent, AskAnswer, DocumentStats, RequestId, UploadReceipt};
