use nature_core::{update, NatureResult, NatureViewState, Outcome, Plant};

fn populated() -> NatureViewState {
    let rose = Plant::new(1, "Rose", 40, "u");
    let (state, _) = update(
        NatureViewState::new(),
        Outcome::Content(NatureResult::SearchPlant {
            plant: Some(rose.clone()),
        }),
    );
    let (state, _) = update(
        state,
        Outcome::Content(NatureResult::AddToFavoriteList {
            new_favorite: Some(rose),
        }),
    );
    state
}

#[test]
fn loading_is_noop() {
    let state = populated();
    let (next, effect) = update(state.clone(), Outcome::Loading);

    assert_eq!(state, next);
    assert!(effect.is_none());
}

#[test]
fn error_without_toast_payload_keeps_state_and_emits_nothing() {
    let state = populated();
    let (next, effect) = update(
        state.clone(),
        Outcome::Error(NatureResult::SearchPlant { plant: None }),
    );

    assert_eq!(state, next);
    assert!(effect.is_none());
}

#[test]
fn toast_as_content_is_noop() {
    let state = populated();
    let (next, effect) = update(
        state.clone(),
        Outcome::Content(NatureResult::Toast {
            message: "hi".to_string(),
        }),
    );

    assert_eq!(state, next);
    assert!(effect.is_none());
}
