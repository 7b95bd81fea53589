use std::fmt;

/// Stable identity of a plant; favorites are deduplicated on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlantId(pub u64);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub max_height: u32,
    pub image_url: String,
}

impl Plant {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        max_height: u32,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: PlantId(id),
            name: name.into(),
            max_height,
            image_url: image_url.into(),
        }
    }

    pub fn same_identity(&self, other: &Plant) -> bool {
        self.id == other.id
    }
}
