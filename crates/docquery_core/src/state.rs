use crate::view_model::{AppViewModel, MessageView, NoticeView};

pub type RequestId = u64;

/// Text of the single bot message the transcript starts with and is reset to.
pub const PLACEHOLDER_MESSAGE: &str = "Upload a PDF and start asking questions.";

/// How many platform ticks a success banner stays visible (ticks arrive at ~10 Hz).
pub(crate) const NOTICE_SUCCESS_TICKS: u8 = 30;
/// How many platform ticks an error banner stays visible.
pub(crate) const NOTICE_ERROR_TICKS: u8 = 50;

/// Server-side document readiness as observed by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// No document has been loaded yet.
    #[default]
    Waiting,
    /// An upload request is in flight.
    Uploading,
    /// The server holds processed chunks; questions can be asked.
    Ready,
    /// The last upload attempt failed.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient banner with a tick-based lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    ticks_left: u8,
}

/// Request-generation tokens, one slot per guarded action type.
///
/// A completion message whose token does not match the stored one is stale
/// and must be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct InFlight {
    upload: Option<RequestId>,
    ask: Option<RequestId>,
    stats: Option<RequestId>,
    clear: Option<RequestId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    upload: UploadStatus,
    messages: Vec<ChatMessage>,
    query_count: u64,
    total_chunks: u64,
    confirm_clear: bool,
    notice: Option<Notice>,
    pending_upload_name: Option<String>,
    in_flight: InFlight,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            upload: UploadStatus::Waiting,
            messages: vec![ChatMessage {
                role: Role::Bot,
                content: PLACEHOLDER_MESSAGE.to_string(),
            }],
            query_count: 0,
            total_chunks: 0,
            confirm_clear: false,
            notice: None,
            pending_upload_name: None,
            in_flight: InFlight::default(),
            next_request_id: 0,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            upload: self.upload,
            messages: self
                .messages
                .iter()
                .map(|message| MessageView {
                    role: message.role,
                    content: message.content.clone(),
                })
                .collect(),
            pending_answer: self.in_flight.ask.is_some(),
            query_count: self.query_count,
            total_chunks: self.total_chunks,
            input_enabled: self.input_enabled(),
            confirm_clear: self.confirm_clear,
            notice: self.notice.as_ref().map(|notice| NoticeView {
                kind: notice.kind,
                text: notice.text.clone(),
            }),
            dirty: self.dirty,
        }
    }

    /// Questions are accepted only once the server reports a processed document.
    pub fn input_enabled(&self) -> bool {
        self.upload == UploadStatus::Ready
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_upload_status(&mut self, status: UploadStatus) {
        self.upload = status;
        self.dirty = true;
    }

    pub(crate) fn push_message(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
        });
        self.dirty = true;
    }

    pub(crate) fn raise_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        let ticks_left = match kind {
            NoticeKind::Success => NOTICE_SUCCESS_TICKS,
            NoticeKind::Error => NOTICE_ERROR_TICKS,
        };
        self.notice = Some(Notice {
            kind,
            text: text.into(),
            ticks_left,
        });
        self.dirty = true;
    }

    /// Ages the current notice by one tick, removing it when expired.
    pub(crate) fn tick_notice(&mut self) {
        if let Some(notice) = self.notice.as_mut() {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
                self.dirty = true;
            }
        }
    }

    pub(crate) fn increment_query_count(&mut self) {
        self.query_count += 1;
        self.dirty = true;
    }

    pub(crate) fn set_total_chunks(&mut self, total_chunks: u64) {
        self.total_chunks = total_chunks;
        self.dirty = true;
    }

    /// Whether the clear confirmation prompt is armed. Cheap, for input
    /// routing on every keypress; the full view model is not needed there.
    pub fn confirm_clear(&self) -> bool {
        self.confirm_clear
    }

    pub(crate) fn set_confirm_clear(&mut self, armed: bool) {
        self.confirm_clear = armed;
        self.dirty = true;
    }

    fn next_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    pub(crate) fn upload_in_flight(&self) -> bool {
        self.in_flight.upload.is_some()
    }

    pub(crate) fn ask_in_flight(&self) -> bool {
        self.in_flight.ask.is_some()
    }

    pub(crate) fn clear_in_flight(&self) -> bool {
        self.in_flight.clear.is_some()
    }

    pub(crate) fn begin_upload(&mut self, file_name: String) -> RequestId {
        let request = self.next_request();
        self.in_flight.upload = Some(request);
        self.pending_upload_name = Some(file_name);
        self.upload = UploadStatus::Uploading;
        self.dirty = true;
        request
    }

    /// Settles the in-flight upload, returning the uploaded file name.
    /// Returns `None` for stale tokens.
    pub(crate) fn settle_upload(&mut self, request: RequestId) -> Option<String> {
        if self.in_flight.upload != Some(request) {
            return None;
        }
        self.in_flight.upload = None;
        self.dirty = true;
        Some(self.pending_upload_name.take().unwrap_or_default())
    }

    pub(crate) fn begin_ask(&mut self) -> RequestId {
        let request = self.next_request();
        self.in_flight.ask = Some(request);
        self.dirty = true;
        request
    }

    pub(crate) fn settle_ask(&mut self, request: RequestId) -> bool {
        if self.in_flight.ask != Some(request) {
            return false;
        }
        self.in_flight.ask = None;
        self.dirty = true;
        true
    }

    /// Stats refreshes are best-effort: a newer request supersedes an older one.
    pub(crate) fn begin_stats(&mut self) -> RequestId {
        let request = self.next_request();
        self.in_flight.stats = Some(request);
        request
    }

    pub(crate) fn settle_stats(&mut self, request: RequestId) -> bool {
        if self.in_flight.stats != Some(request) {
            return false;
        }
        self.in_flight.stats = None;
        true
    }

    pub(crate) fn begin_clear(&mut self) -> RequestId {
        let request = self.next_request();
        self.in_flight.clear = Some(request);
        self.dirty = true;
        request
    }

    pub(crate) fn settle_clear(&mut self, request: RequestId) -> bool {
        if self.in_flight.clear != Some(request) {
            return false;
        }
        self.in_flight.clear = None;
        self.dirty = true;
        true
    }

    /// Resets the session after a successful server-side clear.
    ///
    /// Outstanding upload/ask tokens are dropped so late completions from the
    /// cleared session cannot resurface in the fresh one.
    pub(crate) fn reset_session(&mut self) {
        self.messages = vec![ChatMessage {
            role: Role::Bot,
            content: PLACEHOLDER_MESSAGE.to_string(),
        }];
        self.query_count = 0;
        self.total_chunks = 0;
        self.upload = UploadStatus::Waiting;
        self.pending_upload_name = None;
        self.in_flight.upload = None;
        self.in_flight.ask = None;
        self.dirty = true;
    }
}
