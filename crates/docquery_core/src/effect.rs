use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    UploadPdf { request: RequestId, path: String },
    AskQuestion { request: RequestId, question: String },
    FetchStats { request: RequestId },
    ClearSession { request: RequestId },
}
