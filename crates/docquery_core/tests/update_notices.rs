use std::sync::Once;

use docquery_core::{update, AppState, Msg, NoticeKind};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

#[test]
fn unknown_command_raises_error_notice() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(
        state,
        Msg::UnknownCommand {
            name: "/frobnicate".to_string(),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    let notice = view.notice.expect("error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Unknown command: /frobnicate");
    // The transcript is untouched; only the banner reports the mistake.
    assert_eq!(view.messages.len(), 1);
}

#[test]
fn notices_expire_after_enough_ticks() {
    init_logging();
    let state = AppState::new();
    let (mut state, _effects) = update(
        state,
        Msg::UnknownCommand {
            name: "/frobnicate".to_string(),
        },
    );

    // Survives the first tick.
    let (next, _effects) = update(state, Msg::Tick);
    state = next;
    assert!(state.view().notice.is_some());

    // Error banners last well under a hundred ticks.
    for _ in 0..100 {
        let (next, _effects) = update(state, Msg::Tick);
        state = next;
    }
    assert!(state.view().notice.is_none());
}
