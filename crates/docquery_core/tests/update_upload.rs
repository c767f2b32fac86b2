use std::sync::Once;

use docquery_core::{update, AppState, Effect, Msg, NoticeKind, Role, UploadStatus};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

#[test]
fn non_pdf_path_is_rejected_without_effect() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(
        state,
        Msg::UploadPicked {
            path: "notes.txt".to_string(),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.upload, UploadStatus::Waiting);
    let notice = view.notice.expect("validation notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Please select a PDF file");
}

#[test]
fn pdf_pick_starts_upload() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(
        state,
        Msg::UploadPicked {
            path: "/tmp/sample.pdf".to_string(),
        },
    );

    assert_eq!(next.view().upload, UploadStatus::Uploading);
    assert_eq!(
        effects,
        vec![Effect::UploadPdf {
            request: 1,
            path: "/tmp/sample.pdf".to_string(),
        }]
    );
}

#[test]
fn second_pick_while_uploading_is_refused() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::UploadPicked {
            path: "first.pdf".to_string(),
        },
    );

    let (next, effects) = update(
        state,
        Msg::UploadPicked {
            path: "second.pdf".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next.view().upload, UploadStatus::Uploading);
}

#[test]
fn upload_success_enables_chat_and_refreshes_stats() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::UploadPicked {
            path: "/tmp/sample.pdf".to_string(),
        },
    );

    let (next, effects) = update(
        state,
        Msg::UploadFinished {
            request: 1,
            result: Ok(()),
        },
    );
    let view = next.view();

    assert_eq!(view.upload, UploadStatus::Ready);
    assert!(view.input_enabled);
    assert_eq!(effects, vec![Effect::FetchStats { request: 2 }]);

    let last = view.messages.last().expect("confirmation message");
    assert_eq!(last.role, Role::Bot);
    assert!(last.content.contains("sample.pdf"));

    let notice = view.notice.expect("success notice");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, "Uploaded: sample.pdf");
}

#[test]
fn upload_failure_sets_failed_status() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::UploadPicked {
            path: "sample.pdf".to_string(),
        },
    );
    let messages_before = state.view().messages.len();

    let (next, effects) = update(
        state,
        Msg::UploadFinished {
            request: 1,
            result: Err("Only PDF files allowed".to_string()),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.upload, UploadStatus::Failed);
    assert!(!view.input_enabled);
    assert_eq!(view.messages.len(), messages_before);
    let notice = view.notice.expect("error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Upload failed: Only PDF files allowed");
}

#[test]
fn stale_upload_completion_is_dropped() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::UploadPicked {
            path: "sample.pdf".to_string(),
        },
    );

    let (next, effects) = update(
        state.clone(),
        Msg::UploadFinished {
            request: 99,
            result: Ok(()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn stats_with_chunks_enable_input() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::StatsRefreshRequested);
    assert_eq!(effects, vec![Effect::FetchStats { request: 1 }]);

    let (next, effects) = update(
        state,
        Msg::StatsArrived {
            request: 1,
            total_chunks: 12,
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.total_chunks, 12);
    assert_eq!(view.upload, UploadStatus::Ready);
    assert!(view.input_enabled);
}

#[test]
fn stats_with_zero_chunks_keep_waiting() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::StatsRefreshRequested);

    let (next, _effects) = update(
        state,
        Msg::StatsArrived {
            request: 1,
            total_chunks: 0,
        },
    );
    let view = next.view();

    assert_eq!(view.total_chunks, 0);
    assert_eq!(view.upload, UploadStatus::Waiting);
    assert!(!view.input_enabled);
}

#[test]
fn stale_stats_are_dropped() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::StatsRefreshRequested);
    // A second refresh supersedes the first.
    let (state, effects) = update(state, Msg::StatsRefreshRequested);
    assert_eq!(effects, vec![Effect::FetchStats { request: 2 }]);

    let (next, _effects) = update(
        state,
        Msg::StatsArrived {
            request: 1,
            total_chunks: 7,
        },
    );
    assert_eq!(next.view().total_chunks, 0);

    let (next, _effects) = update(
        next,
        Msg::StatsArrived {
            request: 2,
            total_chunks: 12,
        },
    );
    assert_eq!(next.view().total_chunks, 12);
}
