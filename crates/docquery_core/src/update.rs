use crate::{AppState, Effect, Msg, NoticeKind, Role, UploadStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UploadPicked { path } => {
            if !is_pdf_path(&path) {
                state.raise_notice(NoticeKind::Error, "Please select a PDF file");
                return (state, Vec::new());
            }
            // One upload at a time; a second pick while uploading is refused.
            if state.upload_in_flight() {
                return (state, Vec::new());
            }
            let request = state.begin_upload(file_name_of(&path));
            vec![Effect::UploadPdf { request, path }]
        }
        Msg::UploadFinished { request, result } => {
            let Some(file_name) = state.settle_upload(request) else {
                // Stale token: a cleared or superseded upload settled late.
                return (state, Vec::new());
            };
            match result {
                Ok(()) => {
                    state.set_upload_status(UploadStatus::Ready);
                    state.raise_notice(NoticeKind::Success, format!("Uploaded: {file_name}"));
                    state.push_message(
                        Role::Bot,
                        format!(
                            "PDF \"{file_name}\" loaded successfully! \
                             You can now ask questions about it."
                        ),
                    );
                    let request = state.begin_stats();
                    vec![Effect::FetchStats { request }]
                }
                Err(message) => {
                    state.set_upload_status(UploadStatus::Failed);
                    state.raise_notice(NoticeKind::Error, format!("Upload failed: {message}"));
                    Vec::new()
                }
            }
        }
        Msg::AskSubmitted { question } => {
            let question = question.trim().to_string();
            if question.is_empty() || !state.input_enabled() || state.ask_in_flight() {
                return (state, Vec::new());
            }
            state.push_message(Role::User, question.clone());
            let request = state.begin_ask();
            vec![Effect::AskQuestion { request, question }]
        }
        Msg::AnswerArrived { request, result } => {
            if !state.settle_ask(request) {
                return (state, Vec::new());
            }
            match result {
                Ok(answer) => {
                    state.push_message(Role::Bot, answer);
                    state.increment_query_count();
                }
                Err(message) => {
                    state.push_message(
                        Role::Bot,
                        format!("Sorry, I encountered an error: {message}"),
                    );
                }
            }
            Vec::new()
        }
        Msg::StatsRefreshRequested => {
            let request = state.begin_stats();
            vec![Effect::FetchStats { request }]
        }
        Msg::StatsArrived {
            request,
            total_chunks,
        } => {
            if !state.settle_stats(request) {
                return (state, Vec::new());
            }
            state.set_total_chunks(total_chunks);
            // A positive chunk count means the server already holds a
            // processed document, e.g. from a previous run.
            if total_chunks > 0 {
                state.set_upload_status(UploadStatus::Ready);
            }
            Vec::new()
        }
        Msg::ClearRequested => {
            if state.confirm_clear() || state.clear_in_flight() {
                return (state, Vec::new());
            }
            state.set_confirm_clear(true);
            Vec::new()
        }
        Msg::ClearCancelled => {
            if state.confirm_clear() {
                state.set_confirm_clear(false);
            }
            Vec::new()
        }
        Msg::ClearConfirmed => {
            if !state.confirm_clear() {
                return (state, Vec::new());
            }
            state.set_confirm_clear(false);
            let request = state.begin_clear();
            vec![Effect::ClearSession { request }]
        }
        Msg::ClearFinished { request, result } => {
            if !state.settle_clear(request) {
                return (state, Vec::new());
            }
            match result {
                Ok(()) => {
                    state.reset_session();
                    state.raise_notice(NoticeKind::Success, "Chat cleared successfully");
                }
                Err(message) => {
                    state.raise_notice(
                        NoticeKind::Error,
                        format!("Failed to clear chat: {message}"),
                    );
                }
            }
            Vec::new()
        }
        Msg::UnknownCommand { name } => {
            state.raise_notice(NoticeKind::Error, format!("Unknown command: {name}"));
            Vec::new()
        }
        Msg::Tick => {
            state.tick_notice();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// The server only accepts files named `*.pdf`; catch the mistake before
/// uploading anything.
fn is_pdf_path(path: &str) -> bool {
    let trimmed = path.trim();
    !trimmed.is_empty() && trimmed.to_ascii_lowercase().ends_with(".pdf")
}

fn file_name_of(path: &str) -> String {
    std::path::Path::new(path.trim())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.trim().to_string())
}
