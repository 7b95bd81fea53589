use crate::Plant;

/// Commands the presentation layer can send to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NatureViewEvent {
    /// User asked to keep the currently searched plant.
    AddPlantToFavorites,
    /// User searched for a plant by name.
    SearchPlant(String),
}

/// Payloads produced while handling a [`NatureViewEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NatureResult {
    /// Lookup finished; `None` means nothing matched.
    SearchPlant { plant: Option<Plant> },
    /// `None` means the plant is already a favorite and nothing is added.
    AddToFavoriteList { new_favorite: Option<Plant> },
    /// Message to surface to the user once.
    Toast { message: String },
}
