use crate::{NoticeKind, Role, UploadStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub upload: UploadStatus,
    pub messages: Vec<MessageView>,
    /// An ask is in flight; render a thinking indicator after the last message.
    pub pending_answer: bool,
    pub query_count: u64,
    pub total_chunks: u64,
    pub input_enabled: bool,
    /// The clear confirmation prompt is armed.
    pub confirm_clear: bool,
    pub notice: Option<NoticeView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub kind: NoticeKind,
    pub text: String,
}
