/// Marker for view state.
///
/// A state value holds everything the view needs to render, is cloned to
/// hand snapshots to observers and compared to skip redundant redraws.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
