use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file path for upload.
    UploadPicked { path: String },
    /// Upload request settled; `Err` carries a display message.
    UploadFinished {
        request: RequestId,
        result: Result<(), String>,
    },
    /// User submitted the current input as a question (untrimmed).
    AskSubmitted { question: String },
    /// Ask request settled with the answer text or a display message.
    AnswerArrived {
        request: RequestId,
        result: Result<String, String>,
    },
    /// Trigger a best-effort stats refresh (startup, post-upload).
    StatsRefreshRequested,
    /// Successful stats response; failures never reach the state machine.
    StatsArrived {
        request: RequestId,
        total_chunks: u64,
    },
    /// User asked to clear the session; arms the confirmation prompt.
    ClearRequested,
    /// User confirmed the armed clear prompt.
    ClearConfirmed,
    /// User dismissed the armed clear prompt.
    ClearCancelled,
    /// Clear request settled.
    ClearFinished {
        request: RequestId,
        result: Result<(), String>,
    },
    /// User typed a slash command the client does not know.
    UnknownCommand { name: String },
    /// UI/render tick; ages transient banners.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
