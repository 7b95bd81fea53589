//! Nature core: pure screen state, outcomes and the reduction that links them.
mod effect;
mod msg;
mod outcome;
mod plant;
mod state;
mod update;

pub use effect::NatureViewEffect;
pub use msg::{NatureResult, NatureViewEvent};
pub use outcome::{NatureOutcome, Outcome};
pub use plant::{Plant, PlantId};
pub use state::NatureViewState;
pub use update::{add_to_favorites, reduce_effect, reduce_state, search_completed, update};
