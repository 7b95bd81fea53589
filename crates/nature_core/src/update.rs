use nature_logging::{nature_debug, nature_warn};

use crate::{NatureOutcome, NatureResult, NatureViewEffect, NatureViewState, Outcome, Plant};

/// Pure update function: applies one outcome to state and derives the effect, if any.
///
/// An add outcome for a plant that is already a favorite leaves the list
/// alone, so it reports no effect either.
pub fn update(
    state: NatureViewState,
    outcome: NatureOutcome,
) -> (NatureViewState, Option<NatureViewEffect>) {
    let next = reduce_state(&state, &outcome);
    let effect = match &outcome {
        Outcome::Content(NatureResult::AddToFavoriteList {
            new_favorite: Some(plant),
        }) if state.contains_favorite(plant) => None,
        _ => reduce_effect(&outcome),
    };
    (next, effect)
}

pub fn reduce_state(state: &NatureViewState, outcome: &NatureOutcome) -> NatureViewState {
    nature_debug!("reduce state from {:?}", outcome);
    match outcome {
        Outcome::Content(NatureResult::SearchPlant { plant: Some(plant) }) => {
            state.with_searched_plant(plant)
        }
        Outcome::Content(NatureResult::SearchPlant { plant: None }) => {
            state.without_searched_plant()
        }
        Outcome::Content(NatureResult::AddToFavoriteList {
            new_favorite: Some(plant),
        }) => {
            if state.contains_favorite(plant) {
                nature_warn!("plant {} is already a favorite, list left as is", plant.id);
                state.clone()
            } else {
                state.with_favorite(plant)
            }
        }
        // Loading and Error keep every field; they have no rendering yet.
        Outcome::Content(NatureResult::AddToFavoriteList { new_favorite: None })
        | Outcome::Content(NatureResult::Toast { .. })
        | Outcome::Loading
        | Outcome::Error(_) => state.clone(),
    }
}

/// Effect for `outcome` alone; [`update`] also checks it against the state.
pub fn reduce_effect(outcome: &NatureOutcome) -> Option<NatureViewEffect> {
    let effect = match outcome {
        Outcome::Content(NatureResult::AddToFavoriteList {
            new_favorite: Some(_),
        }) => Some(NatureViewEffect::AddedToFavorites),
        Outcome::Error(NatureResult::Toast { message }) => {
            Some(NatureViewEffect::ShowToast(message.clone()))
        }
        _ => None,
    };
    if let Some(effect) = &effect {
        nature_debug!("reduce effect {:?} from {:?}", effect, outcome);
    }
    effect
}

/// Decides what adding the searched plant to favorites means for `state`.
///
/// Returns `None` when no plant has been searched yet; that is a no-op for
/// the caller, not an error.
pub fn add_to_favorites(state: &NatureViewState) -> Option<NatureOutcome> {
    let Some(plant) = state.searched_plant_reference.as_ref() else {
        nature_warn!("no searched plant to add to favorites");
        return None;
    };

    let new_favorite = if state.contains_favorite(plant) {
        None
    } else {
        Some(plant.clone())
    };
    Some(Outcome::Content(NatureResult::AddToFavoriteList {
        new_favorite,
    }))
}

/// Outcomes for a finished lookup of `name`.
///
/// With `toast_on_empty` an empty lookup additionally reports a toast.
pub fn search_completed(
    plant: Option<Plant>,
    name: &str,
    toast_on_empty: bool,
) -> Vec<NatureOutcome> {
    let notify = plant.is_none() && toast_on_empty;
    let mut outcomes = vec![Outcome::Content(NatureResult::SearchPlant { plant })];
    if notify {
        outcomes.push(Outcome::Error(NatureResult::Toast {
            message: format!("There is no result for '{name}'"),
        }));
    }
    outcomes
}
