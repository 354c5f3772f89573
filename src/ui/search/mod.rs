//! Search screen feature module.
//!
//! Uses the MVI pattern:
//! - `state.rs` - Session state
//! - `intent.rs` - Input and service events
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{SearchPhase, SearchState, EMPTY_QUERY_MESSAGE};
