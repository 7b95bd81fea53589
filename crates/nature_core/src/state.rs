use crate::Plant;

/// Everything the nature screen renders. Replaced wholesale on each step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NatureViewState {
    pub searched_plant_name: String,
    pub searched_plant_max_height: String,
    pub searched_plant_reference: Option<Plant>,
    pub searched_image: String,
    /// Insertion ordered, at most one entry per [`crate::PlantId`].
    pub favorites: Vec<Plant>,
}

impl NatureViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_favorite(&self, plant: &Plant) -> bool {
        self.favorites
            .iter()
            .any(|favorite| favorite.same_identity(plant))
    }

    pub(crate) fn with_searched_plant(&self, plant: &Plant) -> Self {
        Self {
            searched_plant_name: plant.name.clone(),
            searched_plant_max_height: plant.max_height.to_string(),
            searched_plant_reference: Some(plant.clone()),
            searched_image: plant.image_url.clone(),
            favorites: self.favorites.clone(),
        }
    }

    pub(crate) fn without_searched_plant(&self) -> Self {
        Self {
            favorites: self.favorites.clone(),
            ..Self::default()
        }
    }

    pub(crate) fn with_favorite(&self, plant: &Plant) -> Self {
        let mut next = self.clone();
        next.favorites.push(plant.clone());
        next
    }
}
