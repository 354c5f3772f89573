/// Marker for events that drive a state transition.
///
/// Both user input (a submitted query) and service replies (results,
/// failures) are intents; nothing else may change state.
pub trait Intent: Send + 'static {}
