use super::*;

#[test]
fn fetch_errors_keep_their_category_but_share_one_user_message() {
    let cases = [
        (FetchError::Transport("connection refused".into()), UiErrorCategory::Transport),
        (FetchError::Status(429), UiErrorCategory::Status),
        (FetchError::Decode("missing field `fact`".into()), UiErrorCategory::Decode),
    ];
    for (err, category) in cases {
        let ui_err = UiError::from(&err);
        assert_eq!(ui_err.category(), category);
        assert_eq!(ui_err.context(), UiErrorContext::FetchFact);
        assert_eq!(ui_err.message(), err.to_string());
        assert_eq!(ui_err.user_message(), FETCH_FAILED_MESSAGE);
    }
}

#[test]
fn classifies_backend_startup_failure() {
    let err = UiError::from_message(
        UiErrorContext::BackendStartup,
        "backend worker startup failure: failed to build runtime: EAGAIN",
    );
    assert_eq!(err.category(), UiErrorCategory::Startup);
}

#[test]
fn classifies_backend_command_processor_disconnect_as_transport_error() {
    let err = UiError::from_message(
        UiErrorContext::CommandQueue,
        "Backend command processor disconnected (possible startup/runtime failure)",
    );
    assert_eq!(err.category(), UiErrorCategory::Transport);
}

#[test]
fn unrecognised_text_is_unknown() {
    let err = UiError::from_message(UiErrorContext::CommandQueue, "UI command queue is full");
    assert_eq!(err.category(), UiErrorCategory::Unknown);
}

#[test]
fn status_hint_never_echoes_the_raw_message() {
    let dead = UiError::from_message(
        UiErrorContext::BackendStartup,
        "backend worker startup failure: failed to build runtime: EAGAIN",
    );
    assert!(dead.status_hint().contains("unavailable"));
    assert!(!dead.status_hint().contains("EAGAIN"));

    let busy = UiError::from_message(UiErrorContext::CommandQueue, "UI command queue is full");
    assert!(busy.status_hint().contains("retry"));
}
