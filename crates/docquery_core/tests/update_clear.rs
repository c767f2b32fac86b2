use std::sync::Once;

use docquery_core::{
    update, AppState, Effect, Msg, NoticeKind, Role, UploadStatus, PLACEHOLDER_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

/// A session with one answered question (requests 1-3 used).
fn answered_state() -> AppState {
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::StatsRefreshRequested);
    let (state, _effects) = update(
        state,
        Msg::StatsArrived {
            request: 1,
            total_chunks: 12,
        },
    );
    let (state, _effects) = update(
        state,
        Msg::AskSubmitted {
            question: "What is the summary?".to_string(),
        },
    );
    let (state, _effects) = update(
        state,
        Msg::AnswerArrived {
            request: 2,
            result: Ok("It is a report on X.".to_string()),
        },
    );
    state
}

#[test]
fn clear_requires_confirmation() {
    init_logging();
    let state = answered_state();

    let (next, effects) = update(state, Msg::ClearRequested);

    assert!(effects.is_empty());
    assert!(next.confirm_clear());
    assert!(next.view().confirm_clear);
    // Nothing reset yet.
    assert_eq!(next.view().query_count, 1);
}

#[test]
fn cancel_disarms_confirmation() {
    init_logging();
    let state = answered_state();
    let (state, _effects) = update(state, Msg::ClearRequested);

    let (next, effects) = update(state, Msg::ClearCancelled);

    assert!(effects.is_empty());
    assert!(!next.view().confirm_clear);
}

#[test]
fn confirm_without_request_is_a_noop() {
    init_logging();
    let state = answered_state();

    let (next, effects) = update(state.clone(), Msg::ClearConfirmed);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn confirmed_clear_emits_effect() {
    init_logging();
    let state = answered_state();
    let (state, _effects) = update(state, Msg::ClearRequested);

    let (next, effects) = update(state, Msg::ClearConfirmed);

    assert!(!next.view().confirm_clear);
    assert_eq!(effects, vec![Effect::ClearSession { request: 3 }]);
}

#[test]
fn clear_success_resets_session() {
    init_logging();
    let state = answered_state();
    let (state, _effects) = update(state, Msg::ClearRequested);
    let (state, _effects) = update(state, Msg::ClearConfirmed);

    let (next, effects) = update(
        state,
        Msg::ClearFinished {
            request: 3,
            result: Ok(()),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.query_count, 0);
    assert_eq!(view.total_chunks, 0);
    assert_eq!(view.upload, UploadStatus::Waiting);
    assert!(!view.input_enabled);
    assert_eq!(view.messages.len(), 1);
    assert_eq!(view.messages[0].role, Role::Bot);
    assert_eq!(view.messages[0].content, PLACEHOLDER_MESSAGE);
    let notice = view.notice.expect("success notice");
    assert_eq!(notice.kind, NoticeKind::Success);
}

#[test]
fn clear_failure_leaves_state_unchanged() {
    init_logging();
    let state = answered_state();
    let messages_before = state.view().messages.clone();
    let (state, _effects) = update(state, Msg::ClearRequested);
    let (state, _effects) = update(state, Msg::ClearConfirmed);

    let (next, effects) = update(
        state,
        Msg::ClearFinished {
            request: 3,
            result: Err("database locked".to_string()),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.query_count, 1);
    assert_eq!(view.total_chunks, 12);
    assert!(view.input_enabled);
    assert_eq!(view.messages, messages_before);
    let notice = view.notice.expect("error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("database locked"));
}
