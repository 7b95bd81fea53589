/// One-shot instructions to the presentation layer; never kept in state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NatureViewEffect {
    AddedToFavorites,
    ShowToast(String),
}
